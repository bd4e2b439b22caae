use rocket::serde::{Deserialize, Serialize};

mod generate;
mod param;

/// Opaque identifier of a score entry.
/// Generated ids are UUID strings, but any string is accepted when
/// looking an entry up, so a malformed id is just an unknown one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", transparent)]
pub struct ScoreId(String);

impl ScoreId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ScoreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ScoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
