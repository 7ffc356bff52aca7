use std::collections::BTreeMap;
use log::debug;
use crate::common::common::header_value;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::project::enums::project_event_kind::ProjectEventKind;
use crate::project::structs::agent::Agent;
use crate::project::structs::client_information::ClientInformation;
use crate::project::structs::dependency_information::DependencyInformation;
use crate::project::structs::document_factory::DocumentFactory;
use crate::project::structs::project_request::ProjectRequest;
use crate::project::structs::project_request_document::ProjectRequestDocument;
use crate::project::structs::project_request_event::ProjectRequestEvent;
use crate::project::structs::version_information::VersionInformation;

fn has_text(value: &Option<String>) -> Option<&str>
{
    value.as_deref().filter(|text| !text.trim().is_empty())
}

impl DocumentFactory {
    pub fn new(metadata: MetadataConfig) -> DocumentFactory
    {
        DocumentFactory { metadata }
    }

    pub fn create_document(&self, event: &ProjectRequestEvent) -> ProjectRequestDocument
    {
        let request = &event.request;
        let mut document = ProjectRequestDocument {
            generation_timestamp: event.timestamp,
            group_id: request.group_id.clone(),
            artifact_id: request.artifact_id.clone(),
            package_name: request.package_name.clone(),
            version: Self::determine_version_information(request),
            client: Self::determine_client_information(&request.headers),
            ..Default::default()
        };

        document.java_version = request.java_version.clone();
        if let Some(java_version) = has_text(&request.java_version) {
            if !self.metadata.has_java_version(java_version) {
                document.trigger_error().java_version = Some(true);
            }
        }

        document.language = request.language.clone();
        if let Some(language) = has_text(&request.language) {
            if !self.metadata.has_language(language) {
                document.trigger_error().language = Some(true);
            }
        }

        document.packaging = request.packaging.clone();
        if let Some(packaging) = has_text(&request.packaging) {
            if !self.metadata.has_packaging(packaging) {
                document.trigger_error().packaging = Some(true);
            }
        }

        document.project_type = request.project_type.clone();
        document.build_system = Self::determine_build_system(request);
        if let Some(project_type) = has_text(&request.project_type) {
            if !self.metadata.has_type(project_type) {
                document.trigger_error().project_type = Some(true);
            }
        }

        let (valid, invalid): (Vec<String>, Vec<String>) = request.dependencies.iter()
            .cloned()
            .partition(|id| self.metadata.has_dependency(id));
        document.dependencies = Some(DependencyInformation::new(valid));
        if !invalid.is_empty() {
            debug!("Unknown dependencies requested: {:?}", invalid);
            document.trigger_error().trigger_invalid_dependencies(invalid);
        }

        // A failed generation is always invalid, even when every field checked out.
        if let ProjectEventKind::Failed { cause } = &event.kind {
            let error_state = document.trigger_error();
            if let Some(cause) = cause {
                error_state.message = Some(cause.clone());
            }
        }

        document
    }

    pub fn determine_build_system(request: &ProjectRequest) -> Option<String>
    {
        let project_type = request.project_type.as_deref()?;
        let mut elements: Vec<&str> = project_type.split('-').collect();
        while elements.last().is_some_and(|element| element.is_empty()) {
            elements.pop();
        }
        if elements.len() == 2 {
            return Some(elements[0].to_string());
        }
        None
    }

    pub fn determine_version_information(request: &ProjectRequest) -> Option<VersionInformation>
    {
        has_text(&request.boot_version).and_then(VersionInformation::parse)
    }

    pub fn determine_client_information(headers: &BTreeMap<String, String>) -> Option<ClientInformation>
    {
        let agent = header_value(headers, "user-agent").and_then(Agent::from_user_agent);
        let ip = Self::determine_ip(headers);
        let country = header_value(headers, "cf-ipcountry")
            .filter(|country| !country.eq_ignore_ascii_case("xx"))
            .map(String::from);

        if agent.is_none() && ip.is_none() && country.is_none() {
            return None;
        }
        Some(ClientInformation {
            id: agent.as_ref().map(|agent| agent.id.id().to_string()),
            version: agent.and_then(|agent| agent.version),
            ip,
            country,
        })
    }

    fn determine_ip(headers: &BTreeMap<String, String>) -> Option<String>
    {
        if let Some(ip) = header_value(headers, "cf-connecting-ip") {
            return Some(ip.to_string());
        }
        header_value(headers, "x-forwarded-for")
            .and_then(|forwarded| forwarded.split(',').next())
            .map(|ip| ip.trim())
            .filter(|ip| !ip.is_empty())
            .map(String::from)
    }
}
