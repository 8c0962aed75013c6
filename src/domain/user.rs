//! Journal owner identity
//!
//! Login is a plain name/email pair without verification; the email doubles
//! as the user ID.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn login(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }

        Ok(Self {
            id: email.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: Some(format!(
                "{}?seed={}",
                AVATAR_BASE_URL,
                name.replace(' ', "%20")
            )),
        })
    }
}
