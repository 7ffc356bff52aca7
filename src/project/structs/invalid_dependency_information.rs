use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InvalidDependencyInformation {
    pub invalid: bool,
    pub values: Vec<String>,
}
