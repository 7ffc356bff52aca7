use serde::{Deserialize, Serialize};
use crate::project::structs::invalid_dependency_information::InvalidDependencyInformation;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorStateInformation {
    pub invalid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<InvalidDependencyInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
