use crate::DendroscanError;

// Defaults for parameters
const MIN_CLUSTER_SIZE_DEFAULT: usize = 5;
const SKIP_ROOT_CLUSTER_DEFAULT: bool = true;
const DEBUG_MODE_DEFAULT: bool = false;

/// A wrapper around the various hyper parameters used in clustering.
/// Only use if you want to tune hyper parameters. Otherwise use
/// `Dendroscan::default_params` to instantiate the model with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DendroscanParams {
    pub(crate) min_cluster_size: usize,
    pub(crate) min_samples: usize,
    pub(crate) skip_root_cluster: bool,
    pub(crate) debug_mode: bool,
}

/// Builder object to set custom hyper parameters.
pub struct ParamsBuilder {
    min_cluster_size: Option<usize>,
    min_samples: Option<usize>,
    skip_root_cluster: Option<bool>,
    debug_mode: Option<bool>,
}

impl DendroscanParams {
    pub(crate) fn default() -> Self {
        Self::builder()
            .build()
            .expect("default hyper parameters are valid")
    }

    /// Enters the builder pattern, allowing custom hyper parameters to be set
    /// using the various setter methods.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder {
            min_cluster_size: None,
            min_samples: None,
            skip_root_cluster: None,
            debug_mode: None,
        }
    }
}

impl ParamsBuilder {
    /// Sets the minimum cluster size - the minimum number of samples for a
    /// group of data points to be considered a cluster. If a grouping of data
    /// points has fewer members than this, they will be considered noise.
    /// This should be considered the main hyper parameter for changing the
    /// results of clustering. Must be greater than zero. Defaults to 5.
    ///
    /// # Parameters
    /// * min_cluster_size - the minimum cluster size
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn min_cluster_size(mut self, min_cluster_size: usize) -> ParamsBuilder {
        self.min_cluster_size = Some(min_cluster_size);
        self
    }

    /// Sets min samples. The core distance of a data point is the distance to
    /// its kth neighbour, where k = min_samples. Must be greater than zero.
    /// Defaults to min_cluster_size.
    ///
    /// # Parameters
    /// * min_samples - the number of neighbourhood points considered in core distances
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn min_samples(mut self, min_samples: usize) -> ParamsBuilder {
        self.min_samples = Some(min_samples);
        self
    }

    /// Sets whether the root of the cluster hierarchy is barred from winning
    /// the stability comparison against its child clusters. When true the
    /// root's stability is forced to zero. Defaults to true.
    ///
    /// # Parameters
    /// * skip_root_cluster - whether to force the root cluster's stability to zero
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn skip_root_cluster(mut self, skip_root_cluster: bool) -> ParamsBuilder {
        self.skip_root_cluster = Some(skip_root_cluster);
        self
    }

    /// Sets debug mode. When enabled, each pipeline stage emits diagnostic
    /// events through the `tracing` facade. Has no effect on the clustering
    /// output. Defaults to false.
    ///
    /// # Parameters
    /// * debug_mode - whether to emit per-stage diagnostics
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn debug_mode(mut self, debug_mode: bool) -> ParamsBuilder {
        self.debug_mode = Some(debug_mode);
        self
    }

    /// Finishes the building of the hyper parameter configuration.
    ///
    /// # Returns
    /// * The completed hyper parameter configuration, or an
    ///   `InvalidParameter` error if `min_cluster_size` or `min_samples`
    ///   is zero.
    pub fn build(self) -> Result<DendroscanParams, DendroscanError> {
        let min_cluster_size = self.min_cluster_size.unwrap_or(MIN_CLUSTER_SIZE_DEFAULT);
        if min_cluster_size == 0 {
            return Err(DendroscanError::InvalidParameter(String::from(
                "min_cluster_size must be greater than zero",
            )));
        }
        let min_samples = self.min_samples.unwrap_or(min_cluster_size);
        if min_samples == 0 {
            return Err(DendroscanError::InvalidParameter(String::from(
                "min_samples must be greater than zero",
            )));
        }
        Ok(DendroscanParams {
            min_cluster_size,
            min_samples,
            skip_root_cluster: self.skip_root_cluster.unwrap_or(SKIP_ROOT_CLUSTER_DEFAULT),
            debug_mode: self.debug_mode.unwrap_or(DEBUG_MODE_DEFAULT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = DendroscanParams::default();
        assert_eq!(params.min_cluster_size, 5);
        assert_eq!(params.min_samples, 5);
        assert!(params.skip_root_cluster);
        assert!(!params.debug_mode);
    }

    #[test]
    fn min_samples_defaults_to_min_cluster_size() {
        let params = DendroscanParams::builder()
            .min_cluster_size(3)
            .build()
            .unwrap();
        assert_eq!(params.min_samples, 3);
    }

    #[test]
    fn explicit_min_samples_is_kept() {
        let params = DendroscanParams::builder()
            .min_cluster_size(4)
            .min_samples(2)
            .build()
            .unwrap();
        assert_eq!(params.min_cluster_size, 4);
        assert_eq!(params.min_samples, 2);
    }

    #[test]
    fn flags_can_be_overridden() {
        let params = DendroscanParams::builder()
            .min_cluster_size(3)
            .skip_root_cluster(false)
            .debug_mode(true)
            .build()
            .unwrap();
        assert!(!params.skip_root_cluster);
        assert!(params.debug_mode);
    }

    #[test]
    fn zero_min_cluster_size_is_rejected() {
        let result = DendroscanParams::builder().min_cluster_size(0).build();
        assert!(matches!(
            result,
            Err(crate::DendroscanError::InvalidParameter(..))
        ));
    }

    #[test]
    fn zero_min_samples_is_rejected() {
        let result = DendroscanParams::builder()
            .min_cluster_size(3)
            .min_samples(0)
            .build();
        assert!(matches!(
            result,
            Err(crate::DendroscanError::InvalidParameter(..))
        ));
    }
}
