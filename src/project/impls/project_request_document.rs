use crate::project::structs::error_state_information::ErrorStateInformation;
use crate::project::structs::invalid_dependency_information::InvalidDependencyInformation;
use crate::project::structs::project_request_document::ProjectRequestDocument;

impl ProjectRequestDocument {
    /// Returns the error state, creating it (flagged invalid) when absent.
    pub fn trigger_error(&mut self) -> &mut ErrorStateInformation
    {
        self.error_state.get_or_insert_with(|| ErrorStateInformation {
            invalid: true,
            java_version: None,
            language: None,
            packaging: None,
            project_type: None,
            dependencies: None,
            message: None,
        })
    }

    pub fn is_invalid(&self) -> bool
    {
        self.error_state.as_ref().map(|state| state.invalid).unwrap_or(false)
    }
}

impl ErrorStateInformation {
    pub fn trigger_invalid_dependencies(&mut self, values: Vec<String>)
    {
        self.dependencies = Some(InvalidDependencyInformation { invalid: true, values });
    }
}
