use serde::{Deserialize, Serialize};

/// A user record, keyed by the caller-supplied `id`.
///
/// `userid` and `user_id` are accepted as input aliases for `id`. A body that
/// spells the id more than one way is rejected as a duplicate field. Missing
/// fields decode to empty strings; contents are never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "userid", alias = "user_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
