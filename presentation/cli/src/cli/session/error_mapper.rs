use business::domain::session::errors::SessionError;

use crate::cli::alert::{Alert, IntoAlert};

impl IntoAlert for SessionError {
    fn into_alert(self) -> Alert {
        match self {
            SessionError::UserRequired => Alert::validation("user id must not be blank"),
            SessionError::SequenceExhausted => {
                Alert::new("SessionError", "no more generated user ids are available")
            }
            SessionError::Store(err) => err.into_alert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::StoreError;

    #[test]
    fn should_point_at_reset_for_damaged_file() {
        let alert = SessionError::Store(StoreError::Corrupted("eof".to_string())).into_alert();

        assert_eq!(alert.name, "StoreError");
        assert!(alert.to_string().contains("session switch"));
    }
}
