use crate::DendroscanError;
use num_traits::Float;

/// Checks the input data against the contract of `Dendroscan::fit` before the
/// pipeline runs: non-empty, uniform dimensionality of at least one, and all
/// coordinates finite.
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Vec<T>],
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>]) -> Self {
        Self { data }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), DendroscanError> {
        if self.data.is_empty() {
            return Err(DendroscanError::EmptyDataset);
        }
        let dims_0th = self.data[0].len();
        if dims_0th == 0 {
            return Err(DendroscanError::WrongDimension(String::from(
                "data points must have at least one dimension",
            )));
        }
        for (n, datapoint) in self.data.iter().enumerate() {
            for element in datapoint {
                if !element.is_finite() {
                    return Err(DendroscanError::NonFiniteCoordinate(format!(
                        "{n}th vector contains non-finite element(s)"
                    )));
                }
            }
            let dims_nth = datapoint.len();
            if dims_nth != dims_0th {
                return Err(DendroscanError::WrongDimension(format!(
                    "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_data_passes() {
        let data = vec![vec![1.0_f32, 2.0], vec![3.0, 4.0]];
        assert!(DataValidator::new(&data).validate_input_data().is_ok());
    }

    #[test]
    fn empty_data_is_rejected() {
        let data: Vec<Vec<f32>> = Vec::new();
        let result = DataValidator::new(&data).validate_input_data();
        assert!(matches!(result, Err(DendroscanError::EmptyDataset)));
    }

    #[test]
    fn zero_dimensional_points_are_rejected() {
        let data: Vec<Vec<f64>> = vec![Vec::new(), Vec::new()];
        let result = DataValidator::new(&data).validate_input_data();
        assert!(matches!(result, Err(DendroscanError::WrongDimension(..))));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let data = vec![vec![1.0_f32, 2.0], vec![3.0]];
        let result = DataValidator::new(&data).validate_input_data();
        assert!(matches!(result, Err(DendroscanError::WrongDimension(..))));
    }

    #[test]
    fn infinite_coordinates_are_rejected() {
        let data = vec![vec![1.0_f32, f32::infinity()]];
        let result = DataValidator::new(&data).validate_input_data();
        assert!(matches!(
            result,
            Err(DendroscanError::NonFiniteCoordinate(..))
        ));
    }

    #[test]
    fn nan_coordinates_are_rejected() {
        let data = vec![vec![f64::nan(), 1.0]];
        let result = DataValidator::new(&data).validate_input_data();
        assert!(matches!(
            result,
            Err(DendroscanError::NonFiniteCoordinate(..))
        ));
    }
}
