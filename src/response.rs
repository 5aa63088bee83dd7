//! Binding packing responses back onto session containers.
//!
//! The service answers with one entry per container id. Binding replaces the
//! matching container's result list wholesale; it never merges. Entries that
//! match nothing are collected as warnings instead of failing the whole
//! response, and containers the service did not mention keep whatever
//! results they already had.

use crate::model::Container;
use crate::wire::ContainerPackingResult;

/// A response entry that matched no session container.
///
/// Recoverable: the entry is dropped and reported, binding continues.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedResult {
    pub container_id: i32,
    pub result_count: usize,
}

impl std::fmt::Display for UnmatchedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Response entry for unknown container {} ({} algorithm results) was dropped",
            self.container_id, self.result_count
        )
    }
}

/// Outcome of binding one response onto the container list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindOutcome {
    /// Number of containers whose result list was replaced.
    pub updated_containers: usize,
    /// Response entries that matched no container.
    pub warnings: Vec<UnmatchedResult>,
}

impl BindOutcome {
    /// True if every response entry found at least one container.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Binds a packing response onto the session's containers.
///
/// For every response entry, every container with a matching id gets its
/// `algorithm_packing_results` replaced by the entry's list (full replace,
/// not merge). If several containers share an id, all of them are updated
/// identically; id uniqueness is not enforced upstream, so the fan-out is
/// deliberate.
///
/// # Parameters
/// * `response` - The decoded response entries, consumed
/// * `containers` - The session containers to update in place
pub fn bind_response(
    response: Vec<ContainerPackingResult>,
    containers: &mut [Container],
) -> BindOutcome {
    let mut outcome = BindOutcome::default();

    for entry in response {
        let mut matched = false;
        for container in containers.iter_mut() {
            if container.id == entry.container_id {
                container.algorithm_packing_results = entry.algorithm_packing_results.clone();
                outcome.updated_containers += 1;
                matched = true;
            }
        }

        if !matched {
            outcome.warnings.push(UnmatchedResult {
                container_id: entry.container_id,
                result_count: entry.algorithm_packing_results.len(),
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlgorithmPackingResult;

    fn container(id: i32) -> Container {
        Container::new(id, format!("Box{}", id), 15.0, 13.0, 9.0, 5.0, 100.0)
            .expect("Container should be valid")
    }

    fn result_for(algorithm_name: &str) -> AlgorithmPackingResult {
        AlgorithmPackingResult {
            algorithm_id: 1,
            algorithm_name: algorithm_name.to_string(),
            ..AlgorithmPackingResult::default()
        }
    }

    fn entry(container_id: i32, names: &[&str]) -> ContainerPackingResult {
        ContainerPackingResult {
            container_id,
            algorithm_packing_results: names.iter().map(|n| result_for(n)).collect(),
        }
    }

    #[test]
    fn test_bind_replaces_matching_container_results() {
        let mut containers = vec![container(1000), container(1001)];
        containers[0].algorithm_packing_results = vec![result_for("stale")];

        let outcome = bind_response(vec![entry(1000, &["EB-AFIT"])], &mut containers);

        assert_eq!(outcome.updated_containers, 1);
        assert!(outcome.is_clean());
        assert_eq!(containers[0].algorithm_packing_results.len(), 1);
        assert_eq!(
            containers[0].algorithm_packing_results[0].algorithm_name,
            "EB-AFIT"
        );
    }

    #[test]
    fn test_bind_leaves_unmentioned_containers_untouched() {
        let prior = vec![result_for("previous")];
        let mut containers = vec![container(1000), container(1001)];
        containers[1].algorithm_packing_results = prior.clone();

        bind_response(vec![entry(1000, &["EB-AFIT"])], &mut containers);

        assert_eq!(containers[1].algorithm_packing_results, prior);
    }

    #[test]
    fn test_bind_preserves_result_order() {
        let mut containers = vec![container(1000)];
        bind_response(vec![entry(1000, &["B", "A", "C"])], &mut containers);

        let names: Vec<_> = containers[0]
            .algorithm_packing_results
            .iter()
            .map(|r| r.algorithm_name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_unmatched_entry_reported_not_fatal() {
        let mut containers = vec![container(1000)];
        let outcome = bind_response(
            vec![entry(9999, &["EB-AFIT"]), entry(1000, &["EB-AFIT"])],
            &mut containers,
        );

        assert_eq!(outcome.updated_containers, 1);
        assert_eq!(
            outcome.warnings,
            vec![UnmatchedResult {
                container_id: 9999,
                result_count: 1,
            }]
        );
    }

    #[test]
    fn test_duplicate_container_ids_all_updated() {
        let mut containers = vec![container(1000), container(1000)];
        let outcome = bind_response(vec![entry(1000, &["EB-AFIT"])], &mut containers);

        assert_eq!(outcome.updated_containers, 2);
        for c in &containers {
            assert_eq!(c.algorithm_packing_results.len(), 1);
        }
    }
}
