use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VersionInformation {
    pub id: String,
    pub major: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
}
