use crate::distance::euclidean_distance;
use num_traits::Float;

/// Computes the dense mutual reachability matrix for a dataset.
///
/// The mutual reachability distance between two points is the largest of
/// their direct Euclidean distance and either point's core distance, where
/// the core distance of a point is the distance to its kth nearest
/// neighbour. Smoothing distances this way makes sparse points repel each
/// other before the spanning tree is built.
pub(crate) struct MutualReachability<'a, T> {
    data: &'a [Vec<T>],
    min_samples: usize,
}

impl<'a, T: Float> MutualReachability<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>], min_samples: usize) -> Self {
        Self { data, min_samples }
    }

    /// Builds the n by n matrix. The diagonal holds each point's core
    /// distance. A single data point yields the 1x1 zero matrix.
    pub(crate) fn build(&self) -> Vec<Vec<T>> {
        let n_samples = self.data.len();
        if n_samples == 1 {
            return vec![vec![T::zero()]];
        }

        let dist_matrix = self.calc_pairwise_distances();
        let core_distances = self.calc_core_distances(&dist_matrix);

        let mut matrix = vec![vec![T::zero(); n_samples]; n_samples];
        for i in 0..n_samples {
            for j in 0..n_samples {
                matrix[i][j] = if i == j {
                    core_distances[i]
                } else {
                    dist_matrix[i][j].max(core_distances[i]).max(core_distances[j])
                };
            }
        }
        matrix
    }

    fn calc_pairwise_distances(&self) -> Vec<Vec<T>> {
        (0..self.data.len())
            .map(|i| {
                (0..self.data.len())
                    .map(|j| euclidean_distance(&self.data[i], &self.data[j]))
                    .collect()
            })
            .collect()
    }

    /// Core distance of point i is the distance to the neighbour at sorted
    /// position min(min_samples - 1, n - 2) among the other points, so a
    /// min_samples beyond the dataset size clamps to the farthest neighbour.
    fn calc_core_distances(&self, dist_matrix: &[Vec<T>]) -> Vec<T> {
        let n_samples = self.data.len();
        let k = (self.min_samples - 1).min(n_samples - 2);
        dist_matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut neighbours: Vec<T> = row
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, dist)| *dist)
                    .collect();
                neighbours.sort_by(|a, b| a.partial_cmp(b).expect("Invalid floats"));
                neighbours[k]
            })
            .collect()
    }
}
