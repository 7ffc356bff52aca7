//! Implementation blocks for project types.

pub mod agent;

pub mod agent_id;

pub mod dependency_information;

pub mod document_factory;

pub mod project_request_document;

pub mod project_request_event;

pub mod version_information;
