// Shared test fixture for user records.
// The default record is read from `json/user.json` so HTTP tests and
// repository tests agree on the same payload.

use crate::modules::users::core::ports::{UserRepository, UserRepositoryError};
use crate::modules::users::core::user::User;
use std::time::Duration;

pub const USER_JSON: &str = include_str!("json/user.json");

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(USER_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}

/// A repository whose every call runs out of time.
pub struct TimedOutUsers;

#[async_trait::async_trait]
impl UserRepository for TimedOutUsers {
    async fn put(&self, _id: &str, _user: User) -> Result<(), UserRepositoryError> {
        Err(UserRepositoryError::Timeout(Duration::from_secs(10)))
    }

    async fn get(&self, _id: &str) -> Result<Option<User>, UserRepositoryError> {
        Err(UserRepositoryError::Timeout(Duration::from_secs(10)))
    }
}

#[cfg(test)]
mod user_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = UserBuilder::default().build();
        assert_eq!(built.id, "user-fixed-0001");
        assert_eq!(built.name, "Teddy Test");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = UserBuilder::new().id("uid-456").name("Ann").build();
        assert_eq!(custom, User::new("uid-456", "Ann"));
    }
}
