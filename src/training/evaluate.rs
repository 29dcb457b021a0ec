//! Forward-only evaluation: mean cross-entropy loss and accuracy.

use crate::dataset::{Class, Sample};
use crate::network::Network;

/// Added inside the logarithm so a zero probability never yields `ln(0)`.
pub const LOSS_EPSILON: f32 = 1e-10;

/// Mean loss and percentage accuracy over a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluation {
    pub loss: f32,
    /// Percentage in `[0, 100]`.
    pub accuracy: f32,
}

/// Cross-entropy of one prediction: `-ln(p[label] + ε)`.
pub fn cross_entropy(output: &[f32], label: Class) -> f32 {
    let p = output.get(label.index()).copied().unwrap_or(0.0);
    -(p + LOSS_EPSILON).ln()
}

/// Running loss/accuracy totals shared by the trainer and the evaluator.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    total_loss: f32,
    correct: usize,
    count: usize,
}

impl Tally {
    pub(crate) fn record(&mut self, output: &[f32], label: Class) {
        self.total_loss += cross_entropy(output, label);
        if Class::from_probabilities(output) == label {
            self.correct += 1;
        }
        self.count += 1;
    }

    pub(crate) fn finish(&self) -> Evaluation {
        if self.count == 0 {
            return Evaluation::default();
        }
        Evaluation {
            loss: self.total_loss / self.count as f32,
            accuracy: 100.0 * self.correct as f32 / self.count as f32,
        }
    }
}

/// Evaluate `network` on `samples` without touching its parameters.
///
/// Returns zero loss and zero accuracy for an empty set or an unallocated
/// network. Samples with the wrong pixel count are skipped.
pub fn evaluate(network: &Network, samples: &[Sample]) -> Evaluation {
    if samples.is_empty() || !network.is_allocated() {
        return Evaluation::default();
    }

    let mut hidden = vec![0.0f32; network.hidden_size()];
    let mut output = [0.0f32; 2];
    let mut tally = Tally::default();

    for sample in samples {
        if !network.forward(&sample.pixels, &mut hidden, &mut output) {
            tracing::warn!(
                "skipping sample with {} pixels (expected {})",
                sample.pixels.len(),
                network.input_size()
            );
            continue;
        }
        tally.record(&output, sample.label);
    }

    tally.finish()
}
