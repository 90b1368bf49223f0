#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.user_required")]
    UserRequired,
    #[error("session.sequence_exhausted")]
    SequenceExhausted,
    #[error(transparent)]
    Store(#[from] crate::domain::errors::StoreError),
}
