use serde::{Deserialize, Serialize};

use business::domain::session::model::Session;
use business::domain::shared::value_objects::UserId;

/// On-disk shape of the session file.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionEntity {
    pub user_id: String,
    #[serde(default)]
    pub last_generated_seq: u32,
}

impl SessionEntity {
    pub fn from_domain(session: &Session) -> Self {
        Self {
            user_id: session.user_id.as_str().to_string(),
            last_generated_seq: session.last_generated_seq,
        }
    }

    /// `None` for a file whose user id is blank.
    pub fn into_domain(self) -> Option<Session> {
        let user_id = UserId::new(self.user_id);
        if user_id.is_empty() {
            return None;
        }
        Some(Session {
            user_id,
            last_generated_seq: self.last_generated_seq,
        })
    }
}
