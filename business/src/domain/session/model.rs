use super::errors::SessionError;
use crate::domain::shared::value_objects::UserId;

/// The acting user for this client, plus the counter behind generated ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    /// Highest sequence number handed out by [`Session::next_generated`].
    pub last_generated_seq: u32,
}

impl Session {
    /// First session on a fresh install: `U001`.
    pub fn first() -> Self {
        Self {
            user_id: UserId::generated(1),
            last_generated_seq: 1,
        }
    }

    /// A session for a named user; no id has been generated yet.
    pub fn for_user(user_id: UserId) -> Result<Self, SessionError> {
        if user_id.is_empty() {
            return Err(SessionError::UserRequired);
        }
        Ok(Self {
            user_id,
            last_generated_seq: 0,
        })
    }

    /// Switches to a freshly generated id.
    pub fn next_generated(&self) -> Result<Self, SessionError> {
        let seq = self
            .last_generated_seq
            .checked_add(1)
            .ok_or(SessionError::SequenceExhausted)?;
        Ok(Self {
            user_id: UserId::generated(seq),
            last_generated_seq: seq,
        })
    }

    /// Switches to a given id; the generation counter is kept.
    pub fn with_user(&self, user_id: UserId) -> Result<Self, SessionError> {
        if user_id.is_empty() {
            return Err(SessionError::UserRequired);
        }
        Ok(Self {
            user_id,
            last_generated_seq: self.last_generated_seq,
        })
    }
}
