//! User registration and lookup, orchestrated over injected capabilities.
//!
//! [`UserService`] never builds or chooses its backends: the composition root hands it one
//! [`UserRepository`], one [`UserNotifier`] and one [`Logger`], and it only ever sees those traits.

use tracing::{debug, instrument};

use crate::framework::{BackendError, Logger, UserNotifier, UserRepository};
use crate::model::User;

/// Orchestrates the create and find operations for users.
///
/// # Failure Policy
/// [`create_user`](Self::create_user) is **best-effort**: a failed save or a failed welcome
/// message is reported through the [`Logger`] and the call still returns normally. A user that
/// was saved but not notified is only observable in the log. Failures are never retried.
pub struct UserService {
    repository: Box<dyn UserRepository>,
    notifier: Box<dyn UserNotifier>,
    logger: Box<dyn Logger>,
}

impl UserService {
    /// Builds a service from one backend per capability. All three are required.
    pub fn new(
        repository: impl UserRepository + 'static,
        notifier: impl UserNotifier + 'static,
        logger: impl Logger + 'static,
    ) -> Self {
        Self::from_boxed(Box::new(repository), Box::new(notifier), Box::new(logger))
    }

    /// Builds a service from already boxed backends, as the composition root does.
    pub fn from_boxed(
        repository: Box<dyn UserRepository>,
        notifier: Box<dyn UserNotifier>,
        logger: Box<dyn Logger>,
    ) -> Self {
        Self {
            repository,
            notifier,
            logger,
        }
    }

    /// Registers a user and sends the welcome message.
    ///
    /// Sequence: log, save, notify, log. A save failure skips the notification.
    #[instrument(skip(self, name, email))]
    pub fn create_user(&self, id: u64, name: &str, email: &str) {
        self.logger.info(&format!("Creating user {}", id));

        let user = User::new(id, name, email);

        if let Err(e) = self.repository.save(&user) {
            debug!(error = %e, "save failed");
            self.logger
                .error(&format!("Failed to create user {}: {}", id, e));
            return;
        }

        let message = welcome_message(&user.name);
        if let Err(e) = self.notifier.send(&user, &message) {
            debug!(error = %e, "notification failed");
            self.logger.error(&format!(
                "User {} was saved but the welcome message failed: {}",
                id, e
            ));
            return;
        }

        self.logger.info(&format!("User {} created successfully", id));
    }

    /// Looks a user up. The repository's answer is returned as is.
    #[instrument(skip(self))]
    pub fn find_user(&self, id: u64) -> Result<Option<User>, BackendError> {
        self.logger.info(&format!("Searching for user {}", id));
        self.repository.find_by_id(id)
    }
}

fn welcome_message(name: &str) -> String {
    format!("Welcome, {}! Your account was created successfully.", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{Call, FailingBackend, MockBackend};

    #[test]
    fn test_create_user_happy_path() {
        let mock = MockBackend::new();
        let service = UserService::new(mock.clone(), mock.clone(), mock.clone());

        service.create_user(1, "João Silva", "joao@example.com");

        assert_eq!(
            mock.log().calls(),
            vec![
                Call::Info("Creating user 1".into()),
                Call::SaveUser(1),
                Call::NotifyUser {
                    user_id: 1,
                    message: "Welcome, João Silva! Your account was created successfully.".into()
                },
                Call::Info("User 1 created successfully".into()),
            ]
        );
    }

    #[test]
    fn test_save_failure_skips_notification() {
        let mock = MockBackend::new();
        mock.expect_save_user()
            .return_err(BackendError::Storage("connection reset".into()));
        let service = UserService::new(mock.clone(), mock.clone(), mock.clone());

        service.create_user(2, "Maria", "maria@example.com");

        assert_eq!(mock.log().kinds(), vec!["info", "save_user", "error"]);
        mock.verify();
    }

    #[test]
    fn test_notification_failure_is_logged_after_save() {
        let mock = MockBackend::new();
        mock.expect_send()
            .return_err(BackendError::Delivery("mailbox full".into()));
        let service = UserService::new(mock.clone(), mock.clone(), mock.clone());

        service.create_user(3, "Ana", "ana@example.com");

        let calls = mock.log().calls();
        assert_eq!(mock.log().kinds(), vec!["info", "save_user", "notify_user", "error"]);
        assert!(matches!(&calls[3], Call::Error(msg) if msg.contains("saved")));
    }

    #[test]
    fn test_create_user_never_fails_outward() {
        let mock = MockBackend::new();
        let service = UserService::new(FailingBackend, FailingBackend, mock.clone());

        service.create_user(4, "Bob", "bob@example.com");

        assert_eq!(mock.log().count(|c| matches!(c, Call::Error(_))), 1);
    }

    #[test]
    fn test_find_user_returns_repository_answer_unchanged() {
        let mock = MockBackend::new();
        let user = User::new(5, "Carla", "carla@example.com");
        mock.expect_find_user().return_ok(Some(user.clone()));
        mock.expect_find_user().return_ok(None);
        let service = UserService::new(mock.clone(), mock.clone(), mock.clone());

        assert_eq!(service.find_user(5), Ok(Some(user)));
        assert_eq!(service.find_user(6), Ok(None));
        assert_eq!(
            mock.log().kinds(),
            vec!["info", "find_user", "info", "find_user"]
        );
        mock.verify();
    }

    #[test]
    fn test_find_user_passes_failures_through() {
        let mock = MockBackend::new();
        let service = UserService::new(FailingBackend, mock.clone(), mock.clone());

        assert!(matches!(
            service.find_user(1),
            Err(BackendError::Unavailable(_))
        ));
    }
}
