use serde::{Deserialize, Serialize};
use crate::project::structs::client_information::ClientInformation;
use crate::project::structs::dependency_information::DependencyInformation;
use crate::project::structs::error_state_information::ErrorStateInformation;
use crate::project::structs::version_information::VersionInformation;

/// Serializable summary of a single project generation request.
///
/// Every `Option` left at `None` is omitted from the JSON output.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestDocument {
    pub generation_timestamp: i64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_state: Option<ErrorStateInformation>,
}
