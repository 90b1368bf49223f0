/// Errors raised by the ports that talk to the smart-kitchen backend.
/// Variants without a server message use code-style identifiers for i18n.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.not_found")]
    NotFound,
    /// The backend refused the request; `message` is its own explanation
    /// and is shown to the user as-is.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("gateway.unavailable: {0}")]
    Unavailable(String),
    #[error("gateway.decode: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status,
            message: message.into(),
        }
    }
    pub fn unavailable(reason: impl Into<String>) -> Self {
        GatewayError::Unavailable(reason.into())
    }
    pub fn decode(reason: impl Into<String>) -> Self {
        GatewayError::Decode(reason.into())
    }
}

/// Errors raised by local state stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.io: {0}")]
    Io(String),
    #[error("store.corrupted: {0}")]
    Corrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_server_message_for_rejections() {
        let err = GatewayError::rejected(400, "Unknown item 'dragonfruit'");
        assert_eq!(err.to_string(), "Unknown item 'dragonfruit'");
    }

    #[test]
    fn should_use_code_identifiers_otherwise() {
        assert_eq!(GatewayError::NotFound.to_string(), "gateway.not_found");
        assert_eq!(
            GatewayError::unavailable("connection refused").to_string(),
            "gateway.unavailable: connection refused"
        );
    }
}
