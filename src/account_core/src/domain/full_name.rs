use serde::{Deserialize, Serialize};

use super::user::UserError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FullName {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(UserError::EmptyFullName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl TryFrom<&str> for FullName {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl From<FullName> for String {
    fn from(name: FullName) -> Self {
        name.0
    }
}
