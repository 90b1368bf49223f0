use std::sync::Arc;

use business::domain::session::model::Session;
use business::domain::session::use_cases::resolve::{ResolveSessionParams, ResolveSessionUseCase};
use business::domain::session::use_cases::switch_user::{SwitchUserParams, SwitchUserUseCase};
use business::domain::shared::value_objects::UserId;

use crate::cli::alert::{Alert, IntoAlert};
use crate::cli::session::args::SessionCommand;

pub struct SessionHandlers {
    resolve_use_case: Arc<dyn ResolveSessionUseCase>,
    switch_user_use_case: Arc<dyn SwitchUserUseCase>,
}

impl SessionHandlers {
    pub fn new(
        resolve_use_case: Arc<dyn ResolveSessionUseCase>,
        switch_user_use_case: Arc<dyn SwitchUserUseCase>,
    ) -> Self {
        Self {
            resolve_use_case,
            switch_user_use_case,
        }
    }

    /// The session every other command runs under; `--user` applies to this call only.
    pub async fn resolve(&self, user_override: Option<String>) -> Result<Session, Alert> {
        self.resolve_use_case
            .execute(ResolveSessionParams {
                user_override: user_override.map(UserId::new),
            })
            .await
            .map_err(IntoAlert::into_alert)
    }

    pub async fn run(
        &self,
        command: SessionCommand,
        user_override: Option<String>,
    ) -> Result<String, Alert> {
        match command {
            SessionCommand::Whoami => {
                let session = self.resolve(user_override).await?;
                Ok(format!("Acting as {}", session.user_id))
            }
            SessionCommand::Switch { user_id } => {
                let session = self
                    .switch_user_use_case
                    .execute(SwitchUserParams {
                        user_id: user_id.map(UserId::new),
                    })
                    .await
                    .map_err(IntoAlert::into_alert)?;
                Ok(format!("Switched to {}", session.user_id))
            }
        }
    }
}
