//! Epoch loop: shuffle, then forward + backward on every sample in turn.

use crate::architecture::LEARNING_RATE;
use crate::config::TrainingConfig;
use crate::dataset::Sample;
use crate::network::Network;
use crate::training::evaluate::{evaluate, Evaluation, Tally};
use crate::utils::SimpleRng;
use std::time::Instant;

/// Statistics for one completed epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean training loss accumulated during the epoch.
    pub loss: f32,
    /// Training accuracy percentage accumulated during the epoch.
    pub accuracy: f32,
    /// Metrics on the validation set after the epoch, if one was supplied.
    pub validation: Option<Evaluation>,
}

/// Online SGD trainer with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trainer {
    learning_rate: f32,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(LEARNING_RATE)
    }
}

impl Trainer {
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    pub fn from_config(config: &TrainingConfig) -> Self {
        Self::new(config.learning_rate)
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Train `network` on `samples` for `epochs` epochs.
    ///
    /// Each epoch shuffles `samples` in place, then for every sample runs the
    /// forward pass, records loss and correctness, and applies one SGD step.
    /// The recorded metrics use the parameters as they were before that
    /// sample's update.
    ///
    /// Returns one report per epoch; empty when the network is unallocated,
    /// `samples` is empty or `epochs` is zero.
    pub fn train(
        &self,
        network: &mut Network,
        samples: &mut [Sample],
        epochs: usize,
        validation: Option<&[Sample]>,
        rng: &mut SimpleRng,
    ) -> Vec<EpochReport> {
        if !network.is_allocated() || samples.is_empty() || epochs == 0 {
            return Vec::new();
        }
        let validation = validation.filter(|v| !v.is_empty());

        let mut hidden = vec![0.0f32; network.hidden_size()];
        let mut output = [0.0f32; 2];
        let mut reports = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            let start = Instant::now();
            rng.shuffle(samples);

            let mut tally = Tally::default();
            for sample in samples.iter() {
                if !network.forward(&sample.pixels, &mut hidden, &mut output) {
                    tracing::warn!(
                        "skipping sample with {} pixels (expected {})",
                        sample.pixels.len(),
                        network.input_size()
                    );
                    continue;
                }
                tally.record(&output, sample.label);
                network.backward(
                    &sample.pixels,
                    &hidden,
                    &output,
                    sample.label,
                    self.learning_rate,
                );
            }

            let stats = tally.finish();
            let report = EpochReport {
                epoch: epoch + 1,
                loss: stats.loss,
                accuracy: stats.accuracy,
                validation: validation.map(|v| evaluate(network, v)),
            };

            match report.validation {
                Some(val) => tracing::info!(
                    "Epoch {}/{} - Loss: {:.4} - Accuracy: {:.2}% - Val Loss: {:.4} - Val Accuracy: {:.2}% ({:.2}s)",
                    report.epoch,
                    epochs,
                    report.loss,
                    report.accuracy,
                    val.loss,
                    val.accuracy,
                    start.elapsed().as_secs_f32()
                ),
                None => tracing::info!(
                    "Epoch {}/{} - Loss: {:.4} - Accuracy: {:.2}% ({:.2}s)",
                    report.epoch,
                    epochs,
                    report.loss,
                    report.accuracy,
                    start.elapsed().as_secs_f32()
                ),
            }
            reports.push(report);
        }

        reports
    }
}
