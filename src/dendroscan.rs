use crate::extraction::{extract_winning_clusters, label_data};
use crate::hierarchy::{condense, HierarchyBuilder};
use crate::mutual_reachability::MutualReachability;
use crate::spanning_tree::MstBuilder;
use crate::validation::DataValidator;
use crate::{DendroscanError, DendroscanParams};
use num_traits::Float;
use tracing::debug;

/// Density-based hierarchical clustering of a borrowed dataset. Generic over
/// floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct Dendroscan<'a, T> {
    data: &'a [Vec<T>],
    n_samples: usize,
    params: DendroscanParams,
    labels: Vec<i32>,
    probabilities: Vec<T>,
}

impl<'a, T: Float> Dendroscan<'a, T> {
    /// Creates an instance of the clustering model using a custom hyper
    /// parameter configuration.
    ///
    /// # Parameters
    /// * `data` - a reference to the data to cluster, a collection of vectors
    ///            of floating point numbers. The vectors must all be of the
    ///            same dimensionality and contain no infinite values.
    /// * `params` - the hyper parameter configuration.
    ///
    /// # Returns
    /// * The model instance.
    ///
    /// # Examples
    /// ```
    ///use dendroscan::{Dendroscan, DendroscanParams};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.3, 1.1],
    ///    vec![1.3, 1.2],
    ///    vec![1.0, 1.1],
    ///    vec![1.2, 1.2],
    ///    vec![0.9, 1.0],
    ///    vec![3.7, 4.0],
    ///];
    ///let params = DendroscanParams::builder()
    ///    .min_cluster_size(3)
    ///    .min_samples(2)
    ///    .build()
    ///    .unwrap();
    ///let clusterer = Dendroscan::new(&data, params);
    /// ```
    pub fn new(data: &'a [Vec<T>], params: DendroscanParams) -> Self {
        let n_samples = data.len();
        Dendroscan {
            data,
            n_samples,
            params,
            labels: Vec::new(),
            probabilities: Vec::new(),
        }
    }

    /// Creates an instance of the clustering model using the default hyper
    /// parameters.
    ///
    /// # Parameters
    /// * `data` - a reference to the data to cluster, a collection of vectors
    ///            of floating point numbers. The vectors must all be of the
    ///            same dimensionality and contain no infinite values.
    ///
    /// # Returns
    /// * The model instance.
    pub fn default_params(data: &'a [Vec<T>]) -> Dendroscan<'a, T> {
        Dendroscan::new(data, DendroscanParams::default())
    }

    /// Performs clustering on the list of vectors passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains the cluster labels, with a
    ///   length equal to the number of samples passed to the constructor.
    ///   Non-negative integers mean a data point belongs to the cluster of
    ///   that label. -1 labels mean that a data point is noise and does not
    ///   belong to any cluster. The membership probability of each point is
    ///   available through [`Dendroscan::probabilities`] afterwards. An error
    ///   is returned if the input vectors have mismatched dimensions, contain
    ///   non-finite coordinates, or the dataset is empty. Calling fit again
    ///   replaces the stored results; a failed fit leaves them untouched.
    ///
    /// # Examples
    /// ```
    ///use std::collections::HashSet;
    ///use dendroscan::{Dendroscan, DendroscanParams};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.0, 1.0],
    ///    vec![1.1, 1.0],
    ///    vec![1.0, 1.1],
    ///    vec![1.1, 1.1],
    ///    vec![9.0, 9.0],
    ///    vec![9.1, 9.0],
    ///    vec![9.0, 9.1],
    ///    vec![9.1, 9.1],
    ///    vec![5.0, 5.0],
    ///];
    ///let params = DendroscanParams::builder()
    ///    .min_cluster_size(3)
    ///    .min_samples(2)
    ///    .build()
    ///    .unwrap();
    ///let mut clusterer = Dendroscan::new(&data, params);
    ///let labels = clusterer.fit().unwrap().to_vec();
    /// // First four points form one cluster
    ///assert_eq!(1, labels[..4].iter().collect::<HashSet<_>>().len());
    /// // Next four points are a second cluster
    ///assert_eq!(1, labels[4..8].iter().collect::<HashSet<_>>().len());
    /// // The final point is noise
    ///assert_eq!(-1, labels[8]);
    /// ```
    pub fn fit(&mut self) -> Result<&[i32], DendroscanError> {
        DataValidator::new(self.data).validate_input_data()?;

        if self.n_samples == 1 {
            // A lone observation can never reach the cluster size floor.
            self.labels = vec![-1];
            self.probabilities = vec![T::zero()];
            return Ok(&self.labels);
        }

        let matrix = MutualReachability::new(self.data, self.params.min_samples).build();
        if self.params.debug_mode {
            debug!(n_samples = self.n_samples, "built mutual reachability matrix");
        }

        let min_spanning_tree = MstBuilder::new(&matrix).build();
        if self.params.debug_mode {
            debug!(edges = min_spanning_tree.len(), "built minimum spanning tree");
        }

        let builder = HierarchyBuilder::new(
            &min_spanning_tree,
            self.n_samples,
            self.params.min_cluster_size,
        );
        let mut clusters = builder.build()?;
        let condensed = condense(&clusters, self.params.min_cluster_size);
        if self.params.debug_mode {
            debug!(
                clusters = clusters.len(),
                condensed = condensed.len(),
                "built cluster hierarchy"
            );
        }

        let winners = extract_winning_clusters(
            &mut clusters,
            &condensed,
            self.params.min_cluster_size,
            self.params.skip_root_cluster,
        );
        if self.params.debug_mode {
            debug!(winners = winners.len(), "selected winning clusters");
        }

        let (labels, probabilities) = label_data(&clusters, &winners, self.n_samples);
        self.labels = labels;
        self.probabilities = probabilities;
        Ok(&self.labels)
    }

    /// The cluster labels stored by the most recent successful fit. Empty
    /// before the first fit.
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// The per-point cluster membership probabilities stored by the most
    /// recent successful fit, each in the range 0 to 1. Noise points have
    /// probability zero. Empty before the first fit.
    pub fn probabilities(&self) -> &[T] {
        &self.probabilities
    }
}
