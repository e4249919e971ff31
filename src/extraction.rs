use crate::hierarchy::Cluster;
use num_traits::Float;
use std::collections::VecDeque;
use tracing::trace;

/// Selects the flat clustering from the condensed hierarchy.
///
/// A cluster's stability is `|members| * (1/eps_min - 1/eps_max)`: how much
/// longer its points held together compared to the scale it was born at.
/// Clusters are visited from newest to oldest, each competing against the
/// propagated stability of its condensed children; a cluster with condensed
/// children wins only when it is strictly more stable than they are
/// combined, and winning removes any previously winning descendant.
///
/// A cluster whose children all fall below `min_cluster_size` has no viable
/// split to hand over to and is selected outright, whatever its score. The
/// newest condensed cluster always qualifies, so whenever anything survives
/// condensation at least one cluster wins.
pub(crate) fn extract_winning_clusters<T: Float>(
    clusters: &mut [Cluster<T>],
    condensed: &[usize],
    min_cluster_size: usize,
    skip_root_cluster: bool,
) -> Vec<usize> {
    let mut in_condensed = vec![false; clusters.len()];
    for &id in condensed {
        in_condensed[id] = true;
    }

    for &id in condensed {
        let stability = calc_stability(&clusters[id]);
        clusters[id].stability = stability;
    }
    if skip_root_cluster && in_condensed.first() == Some(&true) {
        clusters[0].stability = T::zero();
    }

    let mut propagated: Vec<T> = clusters.iter().map(|cluster| cluster.stability).collect();
    let mut selected = vec![false; clusters.len()];

    for &id in condensed.iter().rev() {
        let children = condensed_children(&clusters[id], &in_condensed);
        let combined_child_stability = children
            .iter()
            .map(|&child| propagated[child])
            .fold(T::zero(), std::ops::Add::add);
        let no_viable_split = children.is_empty() && clusters[id].size() >= min_cluster_size;

        if no_viable_split || clusters[id].stability > combined_child_stability {
            if no_viable_split {
                trace!(cluster = id, "no viable split, selecting outright");
            }
            selected[id] = true;
            // If descendants were already marked as winning clusters, reverse
            for descendant in find_descendant_clusters(clusters, id) {
                selected[descendant] = false;
            }
        } else {
            propagated[id] = combined_child_stability;
        }
    }

    (0..clusters.len()).filter(|&id| selected[id]).collect()
}

fn calc_stability<T: Float>(cluster: &Cluster<T>) -> T {
    let eps_min = cluster.leave_edge_weight;
    let eps_max = cluster.birth_distance;
    if eps_min <= T::zero() || eps_max <= T::zero() {
        return T::zero();
    }
    let size = T::from(cluster.size()).unwrap_or(T::one());
    size * (T::one() / eps_min - T::one() / eps_max)
}

/// Direct children surviving condensation. Sub-threshold children cannot
/// hide condensed descendants because sizes strictly decrease down the tree.
fn condensed_children<T: Float>(cluster: &Cluster<T>, in_condensed: &[bool]) -> Vec<usize> {
    [cluster.left_child, cluster.right_child]
        .into_iter()
        .flatten()
        .filter(|&child| in_condensed[child])
        .collect()
}

fn find_descendant_clusters<T: Float>(clusters: &[Cluster<T>], root_id: usize) -> Vec<usize> {
    let mut process_queue = VecDeque::from([root_id]);
    let mut descendants = Vec::new();

    while let Some(current) = process_queue.pop_front() {
        for child in [clusters[current].left_child, clusters[current].right_child]
            .into_iter()
            .flatten()
        {
            descendants.push(child);
            process_queue.push_back(child);
        }
    }
    descendants
}

/// Assigns consecutive labels to the winning clusters in creation order and
/// computes each member's membership probability. Points outside every
/// winning cluster are noise.
pub(crate) fn label_data<T: Float>(
    clusters: &[Cluster<T>],
    winners: &[usize],
    n_samples: usize,
) -> (Vec<i32>, Vec<T>) {
    // Assume all data points are noise by default then label the ones in
    // winning clusters
    let mut labels = vec![-1; n_samples];
    let mut probabilities = vec![T::zero(); n_samples];

    for (current_label, &id) in winners.iter().enumerate() {
        let cluster = &clusters[id];
        for (idx, &point) in cluster.members.iter().enumerate() {
            labels[point] = current_label as i32;
            probabilities[point] =
                membership_probability(cluster.min_reach[idx], cluster.birth_distance);
        }
    }
    (labels, probabilities)
}

/// A point connected far below the cluster's birth scale is a confident
/// member; one connected right at it is marginal.
fn membership_probability<T: Float>(min_reach: T, eps_max: T) -> T {
    if eps_max <= T::zero() {
        return T::one();
    }
    (T::one() - min_reach / eps_max).max(T::zero()).min(T::one())
}
