use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DependencyInformation {
    /// Sorted ids joined by a space, `_none` without dependencies.
    pub id: String,
    pub values: Vec<String>,
    pub count: usize,
}
