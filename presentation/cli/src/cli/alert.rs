use business::domain::errors::{GatewayError, StoreError};

/// A failed command, printed as a single `error: <message>` line.
#[derive(Debug)]
pub struct Alert {
    pub name: &'static str,
    pub message: String,
}

impl Alert {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("ValidationError", message)
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Alert {}

pub trait IntoAlert {
    fn into_alert(self) -> Alert;
}

impl IntoAlert for GatewayError {
    fn into_alert(self) -> Alert {
        match self {
            GatewayError::NotFound => Alert::new("NotFound", "the backend has no such resource"),
            GatewayError::Rejected { message, .. } => Alert::new("Rejected", message),
            GatewayError::Unavailable(reason) => Alert::new(
                "Unavailable",
                format!("cannot reach the smart-kitchen backend ({})", reason),
            ),
            GatewayError::Decode(reason) => Alert::new(
                "DecodeError",
                format!("unexpected response from the backend ({})", reason),
            ),
        }
    }
}

impl IntoAlert for StoreError {
    fn into_alert(self) -> Alert {
        match self {
            StoreError::Io(reason) => {
                Alert::new("StoreError", format!("cannot access the session file ({})", reason))
            }
            StoreError::Corrupted(reason) => Alert::new(
                "StoreError",
                format!("the session file is damaged ({}); run `session switch` to reset it", reason),
            ),
        }
    }
}
