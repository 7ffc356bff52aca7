use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Parameters of a project generation request as received by the host application.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub package_name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub language: Option<String>,
    pub packaging: Option<String>,
    pub java_version: Option<String>,
    pub boot_version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Lower-cased request headers (`user-agent`, `x-forwarded-for`, ...).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}
