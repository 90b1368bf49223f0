use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::switch_user::{SwitchUserParams, SwitchUserUseCase};

pub struct SwitchUserUseCaseImpl {
    pub store: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SwitchUserUseCase for SwitchUserUseCaseImpl {
    async fn execute(&self, params: SwitchUserParams) -> Result<Session, SessionError> {
        let current = self.store.load().await?;

        let next = match (current, params.user_id) {
            (Some(session), Some(user_id)) => session.with_user(user_id)?,
            (Some(session), None) => session.next_generated()?,
            (None, Some(user_id)) => Session::for_user(user_id)?,
            (None, None) => Session::first(),
        };

        self.store.save(&next).await?;
        self.logger
            .info(&format!("Switched session to user {}", next.user_id));
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::errors::StoreError;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl SessionStore for Store {
            async fn load(&self) -> Result<Option<Session>, StoreError>;
            async fn save(&self, session: &Session) -> Result<(), StoreError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored() -> Session {
        Session {
            user_id: UserId::new("U002"),
            last_generated_seq: 2,
        }
    }

    #[tokio::test]
    async fn should_generate_next_sequential_user() {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(Some(stored())));
        store
            .expect_save()
            .withf(|session| session.user_id.as_str() == "U003" && session.last_generated_seq == 3)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SwitchUserUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(SwitchUserParams { user_id: None })
            .await
            .unwrap();

        assert_eq!(session.user_id.as_str(), "U003");
    }

    #[tokio::test]
    async fn should_switch_to_named_user() {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(Some(stored())));
        store
            .expect_save()
            .withf(|session| session.user_id.as_str() == "demo" && session.last_generated_seq == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SwitchUserUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SwitchUserParams {
                user_id: Some(UserId::new("demo")),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_consume_sequence_for_named_first_user() {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .withf(|session| session.last_generated_seq == 0)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SwitchUserUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(SwitchUserParams {
                user_id: Some(UserId::new("alice")),
            })
            .await
            .unwrap();

        assert_eq!(session.user_id.as_str(), "alice");
    }

    #[tokio::test]
    async fn should_not_save_blank_user() {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(Some(stored())));
        store.expect_save().never();

        let use_case = SwitchUserUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SwitchUserParams {
                user_id: Some(UserId::new("")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), SessionError::UserRequired));
    }
}
