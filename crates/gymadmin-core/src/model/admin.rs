use serde::{Deserialize, Serialize};

/// The operator account exposed by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: u32,
    #[serde(rename = "usuario")]
    pub username: String,
    #[serde(rename = "nombre")]
    pub display_name: String,
}
