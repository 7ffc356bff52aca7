#[cfg(test)]
mod project_tests {
    mod agent_tests {
        use crate::project::enums::agent_id::AgentId;
        use crate::project::structs::agent::Agent;

        #[test]
        fn test_agent_from_tool_user_agent() {
            let agent = Agent::from_user_agent("curl/8.4.0").unwrap();
            assert_eq!(agent.id, AgentId::Curl);
            assert_eq!(agent.version.as_deref(), Some("8.4.0"));

            let agent = Agent::from_user_agent("HTTPie/3.2.2").unwrap();
            assert_eq!(agent.id, AgentId::Httpie);

            let agent = Agent::from_user_agent("SpringBootCli/3.2.0 extra").unwrap();
            assert_eq!(agent.id, AgentId::SpringBootCli);
            assert_eq!(agent.version.as_deref(), Some("3.2.0"));
        }

        #[test]
        fn test_agent_from_sts_and_netbeans() {
            let agent = Agent::from_user_agent("STS 4.20.0.RELEASE").unwrap();
            assert_eq!(agent.id, AgentId::Sts);
            assert_eq!(agent.version.as_deref(), Some("4.20.0.RELEASE"));

            let agent = Agent::from_user_agent("nb-springboot-plugin/0.1").unwrap();
            assert_eq!(agent.id, AgentId::NbSpringBoot);
            assert_eq!(agent.version.as_deref(), Some("0.1"));
        }

        #[test]
        fn test_agent_intellij_without_version() {
            let agent = Agent::from_user_agent("IntelliJ IDEA").unwrap();
            assert_eq!(agent.id, AgentId::IntellijIdea);
            assert_eq!(agent.version, None);
        }

        #[test]
        fn test_agent_browser() {
            let agent = Agent::from_user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/537.36").unwrap();
            assert_eq!(agent.id, AgentId::Browser);
            assert_eq!(agent.version, None);
        }

        #[test]
        fn test_agent_unknown() {
            assert!(Agent::from_user_agent("Wget/1.21").is_none());
            assert!(Agent::from_user_agent("").is_none());
        }

        #[test]
        fn test_agent_ids_are_unique() {
            let mut ids: Vec<&str> = AgentId::ALL.iter().map(|agent| agent.id()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), AgentId::ALL.len());
        }
    }

    mod version_information_tests {
        use crate::project::structs::version_information::VersionInformation;

        #[test]
        fn test_version_release() {
            let version = VersionInformation::parse("3.2.0").unwrap();
            assert_eq!(version.id, "3.2.0");
            assert_eq!(version.major, "3");
            assert_eq!(version.minor.as_deref(), Some("3.2"));
        }

        #[test]
        fn test_version_with_qualifier() {
            let version = VersionInformation::parse("2.1.3.RELEASE").unwrap();
            assert_eq!(version.major, "2");
            assert_eq!(version.minor.as_deref(), Some("2.1"));

            let version = VersionInformation::parse("3.3.0-SNAPSHOT").unwrap();
            assert_eq!(version.id, "3.3.0-SNAPSHOT");
            assert_eq!(version.minor.as_deref(), Some("3.3"));
        }

        #[test]
        fn test_version_invalid() {
            assert!(VersionInformation::parse("latest").is_none());
            assert!(VersionInformation::parse("3").is_none());
            assert!(VersionInformation::parse("").is_none());
        }
    }

    mod dependency_information_tests {
        use crate::project::structs::dependency_information::DependencyInformation;

        #[test]
        fn test_dependency_id_is_sorted() {
            let info = DependencyInformation::new(vec!["web".to_string(), "actuator".to_string()]);
            assert_eq!(info.id, "actuator web");
            assert_eq!(info.values, vec!["web".to_string(), "actuator".to_string()]);
            assert_eq!(info.count, 2);
        }

        #[test]
        fn test_dependency_id_none() {
            let info = DependencyInformation::new(Vec::new());
            assert_eq!(info.id, "_none");
            assert_eq!(info.count, 0);
        }
    }

    mod document_factory_tests {
        use std::collections::BTreeMap;
        use crate::config::structs::metadata_config::MetadataConfig;
        use crate::project::structs::document_factory::DocumentFactory;
        use crate::project::structs::project_request::ProjectRequest;
        use crate::project::structs::project_request_event::ProjectRequestEvent;

        fn valid_request() -> ProjectRequest {
            ProjectRequest {
                group_id: Some("com.example".to_string()),
                artifact_id: Some("demo".to_string()),
                package_name: Some("com.example.demo".to_string()),
                project_type: Some("maven-project".to_string()),
                language: Some("java".to_string()),
                packaging: Some("jar".to_string()),
                java_version: Some("21".to_string()),
                boot_version: Some("3.2.0".to_string()),
                dependencies: vec!["web".to_string(), "actuator".to_string()],
                headers: BTreeMap::new(),
            }
        }

        fn factory() -> DocumentFactory {
            DocumentFactory::new(MetadataConfig::default())
        }

        #[test]
        fn test_document_for_valid_request() {
            let event = ProjectRequestEvent::generated(valid_request());
            let document = factory().create_document(&event);

            assert_eq!(document.generation_timestamp, event.timestamp);
            assert_eq!(document.group_id.as_deref(), Some("com.example"));
            assert_eq!(document.build_system.as_deref(), Some("maven"));
            assert_eq!(document.version.as_ref().unwrap().minor.as_deref(), Some("3.2"));
            assert_eq!(document.dependencies.as_ref().unwrap().id, "actuator web");
            assert!(document.client.is_none());
            assert!(document.error_state.is_none());
            assert!(!document.is_invalid());
        }

        #[test]
        fn test_document_build_system_requires_two_parts() {
            let mut request = valid_request();
            request.project_type = Some("gradle-project-kotlin".to_string());
            let document = factory().create_document(&ProjectRequestEvent::generated(request));
            assert_eq!(document.build_system, None);
            assert!(document.error_state.is_none());
        }

        #[test]
        fn test_build_system_ignores_trailing_separators() {
            let build_system = |project_type: &str| DocumentFactory::determine_build_system(&ProjectRequest {
                project_type: Some(project_type.to_string()),
                ..Default::default()
            });
            assert_eq!(build_system("maven-"), None);
            assert_eq!(build_system("gradle-project-"), Some("gradle".to_string()));
            assert_eq!(build_system("gradle-project--"), Some("gradle".to_string()));
            assert_eq!(build_system("---"), None);
        }

        #[test]
        fn test_document_flags_unknown_fields() {
            let mut request = valid_request();
            request.java_version = Some("9".to_string());
            request.language = Some("scala".to_string());
            request.packaging = Some("ear".to_string());
            request.project_type = Some("ant-project".to_string());
            let document = factory().create_document(&ProjectRequestEvent::generated(request));

            let error_state = document.error_state.unwrap();
            assert!(error_state.invalid);
            assert_eq!(error_state.java_version, Some(true));
            assert_eq!(error_state.language, Some(true));
            assert_eq!(error_state.packaging, Some(true));
            assert_eq!(error_state.project_type, Some(true));
            assert!(error_state.dependencies.is_none());
            assert_eq!(document.language.as_deref(), Some("scala"));
        }

        #[test]
        fn test_document_blank_fields_are_not_flagged() {
            let mut request = valid_request();
            request.language = Some("  ".to_string());
            request.java_version = None;
            let document = factory().create_document(&ProjectRequestEvent::generated(request));
            assert!(document.error_state.is_none());
        }

        #[test]
        fn test_document_splits_unknown_dependencies() {
            let mut request = valid_request();
            request.dependencies = vec!["web".to_string(), "foo".to_string(), "bar".to_string()];
            let document = factory().create_document(&ProjectRequestEvent::generated(request));

            let dependencies = document.dependencies.as_ref().unwrap();
            assert_eq!(dependencies.values, vec!["web".to_string()]);
            assert_eq!(dependencies.count, 1);
            let invalid = document.error_state.as_ref().unwrap().dependencies.as_ref().unwrap();
            assert!(invalid.invalid);
            assert_eq!(invalid.values, vec!["foo".to_string(), "bar".to_string()]);
        }

        #[test]
        fn test_document_failed_event_is_invalid() {
            let event = ProjectRequestEvent::failed(valid_request(), Some("Unknown boot version".to_string()));
            let document = factory().create_document(&event);
            let error_state = document.error_state.unwrap();
            assert!(error_state.invalid);
            assert_eq!(error_state.message.as_deref(), Some("Unknown boot version"));
            assert_eq!(error_state.language, None);
        }

        #[test]
        fn test_document_failed_event_without_cause() {
            let event = ProjectRequestEvent::failed(valid_request(), None);
            let document = factory().create_document(&event);
            assert!(document.is_invalid());
            assert_eq!(document.error_state.unwrap().message, None);
        }

        #[test]
        fn test_document_client_information() {
            let mut request = valid_request();
            request.headers.insert("user-agent".to_string(), "curl/8.4.0".to_string());
            request.headers.insert("x-forwarded-for".to_string(), "10.0.0.1, 192.168.1.1".to_string());
            request.headers.insert("cf-ipcountry".to_string(), "BE".to_string());
            let document = factory().create_document(&ProjectRequestEvent::generated(request));

            let client = document.client.unwrap();
            assert_eq!(client.id.as_deref(), Some("curl"));
            assert_eq!(client.version.as_deref(), Some("8.4.0"));
            assert_eq!(client.ip.as_deref(), Some("10.0.0.1"));
            assert_eq!(client.country.as_deref(), Some("BE"));
        }

        #[test]
        fn test_document_client_prefers_connecting_ip_and_ignores_xx() {
            let mut headers = BTreeMap::new();
            headers.insert("cf-connecting-ip".to_string(), "203.0.113.7".to_string());
            headers.insert("x-forwarded-for".to_string(), "10.0.0.1".to_string());
            headers.insert("cf-ipcountry".to_string(), "XX".to_string());
            let client = DocumentFactory::determine_client_information(&headers).unwrap();
            assert_eq!(client.ip.as_deref(), Some("203.0.113.7"));
            assert_eq!(client.country, None);
            assert_eq!(client.id, None);
        }

        #[test]
        fn test_document_client_absent_without_hints() {
            let mut headers = BTreeMap::new();
            headers.insert("user-agent".to_string(), "Wget/1.21".to_string());
            headers.insert("cf-ipcountry".to_string(), "xx".to_string());
            assert!(DocumentFactory::determine_client_information(&headers).is_none());
        }

        #[test]
        fn test_document_json_skips_empty_fields() {
            let request = ProjectRequest {
                group_id: Some("com.example".to_string()),
                ..Default::default()
            };
            let document = factory().create_document(&ProjectRequestEvent::generated(request));
            let json = serde_json::to_value(&document).unwrap();
            let object = json.as_object().unwrap();

            assert!(object.contains_key("generationTimestamp"));
            assert_eq!(object["groupId"], "com.example");
            assert_eq!(object["dependencies"]["id"], "_none");
            assert!(!object.contains_key("artifactId"));
            assert!(!object.contains_key("version"));
            assert!(!object.contains_key("client"));
            assert!(!object.contains_key("errorState"));
        }

        #[test]
        fn test_document_json_error_state_keys() {
            let mut request = valid_request();
            request.project_type = Some("ant-project".to_string());
            let document = factory().create_document(&ProjectRequestEvent::generated(request));
            let json = serde_json::to_string(&document).unwrap();
            assert!(json.contains("\"errorState\":{\"invalid\":true,\"type\":true}"));
            assert!(json.contains("\"buildSystem\":\"ant\""));
        }
    }

    mod project_request_event_tests {
        use serde_json::json;
        use crate::project::structs::project_request::ProjectRequest;
        use crate::project::structs::project_request_event::ProjectRequestEvent;

        #[test]
        fn test_event_kind_json() {
            let failed = ProjectRequestEvent::failed(ProjectRequest::default(), Some("boom".to_string()));
            let json = serde_json::to_value(&failed).unwrap();
            assert_eq!(json["kind"], json!({"type": "failed", "cause": "boom"}));

            let generated = serde_json::to_value(ProjectRequestEvent::generated(ProjectRequest::default())).unwrap();
            assert_eq!(generated["kind"], json!({"type": "generated"}));

            let parsed: ProjectRequestEvent = serde_json::from_value(json).unwrap();
            assert_eq!(parsed, failed);
        }
    }
}
