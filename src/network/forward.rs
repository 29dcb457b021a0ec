//! Forward engine: hidden ReLU activations and softmax class probabilities.

use super::Network;
use crate::layers::Layer;
use crate::utils::{relu_inplace, softmax_inplace};

impl Network {
    /// Run one forward pass.
    ///
    /// Fills `hidden` with `ReLU(W1·input + b1)` and `output` with
    /// `softmax(W2·hidden + b2)`.
    ///
    /// Returns `false` without touching either buffer when a layer is a
    /// sentinel or a buffer length does not match the architecture.
    pub fn forward(&self, input: &[f32], hidden: &mut [f32], output: &mut [f32]) -> bool {
        if !self.is_allocated()
            || input.len() != self.layer1.input_size()
            || hidden.len() != self.layer1.output_size()
            || output.len() != self.layer2.output_size()
        {
            return false;
        }

        self.layer1.forward(input, hidden);
        relu_inplace(hidden);

        self.layer2.forward(hidden, output);
        softmax_inplace(output);
        true
    }
}
