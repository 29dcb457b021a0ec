//! Backward engine: softmax + cross-entropy gradients and the online SGD step.

use super::Network;
use crate::architecture::OUTPUT_SIZE;
use crate::dataset::Class;
use crate::layers::Layer;
use crate::utils::relu_derivative;

impl Network {
    /// Backpropagate one sample and update every weight and bias in place.
    ///
    /// `hidden` and `output` must come from the matching forward pass on
    /// `input`. Silently does nothing when a layer is a sentinel or a buffer
    /// length does not match the architecture.
    pub fn backward(
        &mut self,
        input: &[f32],
        hidden: &[f32],
        output: &[f32],
        true_label: Class,
        learning_rate: f32,
    ) {
        if !self.is_allocated()
            || input.len() != self.layer1.input_size()
            || hidden.len() != self.layer1.output_size()
            || output.len() != OUTPUT_SIZE
        {
            return;
        }

        // Softmax followed by cross-entropy reduces to p - onehot(label).
        let mut output_grad = [0.0f32; OUTPUT_SIZE];
        for (i, (grad, &p)) in output_grad.iter_mut().zip(output).enumerate() {
            *grad = if i == true_label.index() { p - 1.0 } else { p };
        }

        // hidden_grad reads the pre-update layer2 weights.
        let mut hidden_grad = vec![0.0f32; hidden.len()];
        self.layer2.backward(&output_grad, &mut hidden_grad);
        for (grad, &h) in hidden_grad.iter_mut().zip(hidden) {
            *grad *= relu_derivative(h);
        }

        self.layer2.update_parameters(hidden, &output_grad, learning_rate);
        self.layer1.update_parameters(input, &hidden_grad, learning_rate);
    }
}
