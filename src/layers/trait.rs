//! Layer trait definition
//!
//! The trait covers what the forward and backward engines need from a layer:
//! the affine transform, propagation of the output gradient back to the
//! input, and the in-place SGD update.

/// Core trait for fully connected layers processing one sample at a time.
///
/// Every method must be a no-op when the layer holds no storage (the sentinel
/// left behind by a failed allocation) or when buffer lengths do not match
/// the layer shape.
pub trait Layer {
    /// Affine transform: `output[i] = bias[i] + Σ_j weight[i][j] * input[j]`.
    ///
    /// # Arguments
    ///
    /// * `input` - Input vector (`input_size` elements)
    /// * `output` - Output buffer (`output_size` elements)
    fn forward(&self, input: &[f32], output: &mut [f32]);

    /// Propagates the output gradient to the input:
    /// `grad_input[j] = Σ_i grad_output[i] * weight[i][j]`.
    ///
    /// Must be called before `update_parameters` when the pre-update weights
    /// are required.
    fn backward(&self, grad_output: &[f32], grad_input: &mut [f32]);

    /// Applies the SGD step in place:
    /// `weight[i][j] -= lr * grad_output[i] * input[j]` and
    /// `bias[i] -= lr * grad_output[i]`.
    fn update_parameters(&mut self, input: &[f32], grad_output: &[f32], learning_rate: f32);

    /// Number of input features.
    fn input_size(&self) -> usize;

    /// Number of output features.
    fn output_size(&self) -> usize;

    /// Total count of weights and biases.
    fn parameter_count(&self) -> usize;
}
