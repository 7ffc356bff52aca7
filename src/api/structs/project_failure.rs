use serde::{Deserialize, Serialize};
use crate::project::structs::project_request::ProjectRequest;

/// A project request body with an optional `cause` next to its fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectFailure {
    #[serde(flatten)]
    pub request: ProjectRequest,
    pub cause: Option<String>,
}
