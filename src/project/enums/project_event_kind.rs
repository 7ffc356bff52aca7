use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectEventKind {
    Generated,
    Failed {
        cause: Option<String>,
    },
}
