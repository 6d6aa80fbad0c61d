use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One entry of `GET /users/{username}/events`. Fields the renderer does not
/// show are ignored when decoding.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Event {
    pub r#type: Option<String>,
    pub repo: Repo,
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Repo {
    pub name: String,
}

impl Event {
    pub fn new(r#type: &str, repo: &str) -> Self {
        Self {
            r#type: Some(r#type.to_string()),
            repo: Repo {
                name: repo.to_string(),
            },
        }
    }
}
