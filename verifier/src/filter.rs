use dyno_measurement_model::RunManifest;
use itertools::Itertools;

/// The most recent manifest per algorithm.
pub fn latest_run_manifests_by_algorithm(manifests: Vec<RunManifest>) -> Vec<(String, RunManifest)> {
    manifests
        .into_iter()
        .into_group_map_by(|manifest| manifest.algorithm.clone())
        .into_iter()
        .map(|(algorithm, mut manifests)| {
            manifests.sort_by_key(|manifest| manifest.started_at);

            // Safe to unwrap because there must have been at least one element
            (algorithm, manifests.last().unwrap().clone())
        })
        .collect()
}
