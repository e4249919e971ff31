use thiserror::Error;

/// Possible errors that arise when configuring the clusterer or running a fit.
///
/// Configuration and input-data errors are recoverable caller mistakes. An
/// `InvariantViolation` indicates a bug inside the clustering pipeline itself;
/// a fit that returns it leaves any previously fitted results untouched.
#[derive(Debug, Clone, Error)]
pub enum DendroscanError {
    /// A hyper parameter was outside its valid range.
    #[error("invalid hyper parameter: {0}")]
    InvalidParameter(String),
    /// The dataset provided is empty.
    #[error("the dataset provided is empty")]
    EmptyDataset,
    /// Input vectors have mismatched dimensions.
    #[error("input vectors have mismatched dimensions: {0}")]
    WrongDimension(String),
    /// A coordinate was infinite or NaN.
    #[error("non finite coordinate: {0}")]
    NonFiniteCoordinate(String),
    /// An internal consistency check failed while building the hierarchy.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
