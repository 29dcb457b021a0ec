//! Activation functions used by the two-layer network
//!
//! - ReLU and its derivative for the hidden layer
//! - Softmax for the output layer

/// ReLU: `max(x, 0)`.
pub fn relu(x: f32) -> f32 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// ReLU derivative: 1 for positive inputs, 0 otherwise.
pub fn relu_derivative(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// ReLU applied in-place.
pub fn relu_inplace(data: &mut [f32]) {
    for value in data.iter_mut() {
        *value = relu(*value);
    }
}

/// Softmax applied in-place to a single score vector.
///
/// Uses the max-subtraction trick for numerical stability so large scores do
/// not overflow `exp`.
pub fn softmax_inplace(scores: &mut [f32]) {
    if scores.is_empty() {
        return;
    }

    let mut max_value = scores[0];
    for &value in scores.iter().skip(1) {
        if value > max_value {
            max_value = value;
        }
    }

    let mut sum = 0.0f32;
    for value in scores.iter_mut() {
        *value = (*value - max_value).exp();
        sum += *value;
    }

    for value in scores.iter_mut() {
        *value /= sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON_F32: f32 = 1e-6;

    #[test]
    fn test_relu_mixed() {
        let mut data = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
        relu_inplace(&mut data);
        assert_eq!(data, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_relu_derivative_at_zero() {
        assert_eq!(relu_derivative(0.0), 0.0);
        assert_eq!(relu_derivative(1e-6), 1.0);
        assert_eq!(relu_derivative(-3.0), 0.0);
    }

    #[test]
    fn test_softmax_sum() {
        let mut data = vec![1.0, 2.0, 3.0];
        softmax_inplace(&mut data);
        let sum: f32 = data.iter().sum();
        assert!((sum - 1.0).abs() < EPSILON_F32);
    }

    #[test]
    fn test_softmax_uniform_input() {
        let mut data = vec![0.5, 0.5];
        softmax_inplace(&mut data);
        for &val in &data {
            assert!((val - 0.5).abs() < EPSILON_F32);
        }
    }

    #[test]
    fn test_softmax_numerical_stability() {
        let mut data = vec![1000.0, -1000.0];
        softmax_inplace(&mut data);
        assert!(!data.iter().any(|&x| x.is_nan() || x.is_infinite()));
        assert!((data[0] - 1.0).abs() < EPSILON_F32);
        assert!(data[1] >= 0.0);
    }

    #[test]
    fn test_softmax_empty() {
        let mut data: Vec<f32> = vec![];
        softmax_inplace(&mut data);
        assert!(data.is_empty());
    }
}
