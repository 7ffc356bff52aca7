#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[test]
    fn test_stats_initial_values() {
        let stats = StatsAtomics::new().get_stats();
        assert!(stats.started > 0, "Start timestamp should be recorded");
        assert_eq!(stats.projects_generated, 0);
        assert_eq!(stats.record_errors, 0);
        assert_eq!(stats.total_generated, 0);
    }

    #[test]
    fn test_stats_increment_decrement() {
        let atomics = StatsAtomics::new();
        atomics.update_stats(StatsEvent::ProjectsGenerated, 3);
        atomics.update_stats(StatsEvent::ProjectsGenerated, -1);
        atomics.update_stats(StatsEvent::RecordErrors, 1);
        atomics.update_stats(StatsEvent::ApiRequests, 0);

        let stats = atomics.get_stats();
        assert_eq!(stats.projects_generated, 2);
        assert_eq!(stats.record_errors, 1);
        assert_eq!(stats.api_requests, 0);
    }

    #[test]
    fn test_stats_set_overrides_value() {
        let atomics = StatsAtomics::new();
        atomics.update_stats(StatsEvent::TotalGenerated, 5);
        atomics.set_stats(StatsEvent::TotalGenerated, 42);
        assert_eq!(atomics.get_stats().total_generated, 42);
    }

    #[tokio::test]
    async fn test_stats_concurrent_updates() {
        let atomics = Arc::new(StatsAtomics::new());
        let mut handles = vec![];
        for _ in 0..100 {
            let atomics_clone = atomics.clone();
            handles.push(tokio::spawn(async move {
                atomics_clone.update_stats(StatsEvent::DocumentsLogged, 1);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(atomics.get_stats().documents_logged, 100);
    }

    #[test]
    fn test_stats_serialization_field_names() {
        let stats = StatsAtomics::new().get_stats();
        let json = serde_json::to_value(stats).unwrap();
        assert!(json.get("projects_generated").is_some());
        assert!(json.get("total_generated").is_some());
    }
}
