use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::resolve::{ResolveSessionParams, ResolveSessionUseCase};

pub struct ResolveSessionUseCaseImpl {
    pub store: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveSessionUseCase for ResolveSessionUseCaseImpl {
    async fn execute(&self, params: ResolveSessionParams) -> Result<Session, SessionError> {
        let session = match self.store.load().await? {
            Some(stored) => stored,
            None => {
                let first = Session::first();
                self.store.save(&first).await?;
                self.logger
                    .info(&format!("Created new session for user {}", first.user_id));
                first
            }
        };

        match params.user_override {
            Some(user_id) => {
                self.logger
                    .debug(&format!("Acting as {} for this invocation", user_id));
                session.with_user(user_id)
            }
            None => Ok(session),
        }
    }
}
