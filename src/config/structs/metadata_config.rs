use serde::{Deserialize, Serialize};

/// Identifiers the service knows about.
///
/// Requests referring to anything else are still counted, but the emitted
/// document flags the offending field in its error state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    pub java_versions: Vec<String>,
    pub languages: Vec<String>,
    pub packagings: Vec<String>,
    pub types: Vec<String>,
    pub dependencies: Vec<String>,
}
