/// Represents a registered user.
///
/// # Capabilities
/// A `User` is the subject of the [`UserService`](crate::user_service::UserService) operations.
/// It flows read-only through the [`UserRepository`](crate::framework::UserRepository) and
/// [`UserNotifier`](crate::framework::UserNotifier) backends.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Caller-supplied unique identifier
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
