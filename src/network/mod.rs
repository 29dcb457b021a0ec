//! The two-layer classifier.
//!
//! `layer1` maps the input vector to the hidden vector (ReLU), `layer2` maps
//! the hidden vector to class scores (softmax). The forward and backward
//! engines live in the `forward` and `backward` submodules.

mod backward;
mod forward;

use crate::architecture::Architecture;
use crate::dataset::Class;
use crate::error::{CatDogError, Result};
use crate::layers::{DenseLayer, Layer};
use crate::utils::SimpleRng;
use std::fmt;

/// Two-layer fully connected network.
///
/// # Example
///
/// ```
/// use catdog_nn::architecture::{Architecture, OUTPUT_SIZE};
/// use catdog_nn::network::Network;
/// use catdog_nn::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(1);
/// let net = Network::with_architecture(Architecture::new(4, 3), &mut rng).unwrap();
/// let prediction = net.predict(&[0.1, 0.2, 0.3, 0.4]).unwrap();
/// assert_eq!(prediction.probabilities.len(), OUTPUT_SIZE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub layer1: DenseLayer,
    pub layer2: DenseLayer,
    architecture: Architecture,
}

/// Result of a single inference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub probabilities: [f32; 2],
    pub class: Class,
}

impl Network {
    /// Network with the default 12288 → 128 → 2 architecture.
    pub fn new(rng: &mut SimpleRng) -> Self {
        Self::build(Architecture::default(), rng)
    }

    /// Network with a custom architecture. Layers that cannot be allocated
    /// are left as sentinels.
    pub fn with_architecture(architecture: Architecture, rng: &mut SimpleRng) -> Result<Self> {
        architecture.validate()?;
        Ok(Self::build(architecture, rng))
    }

    fn build(architecture: Architecture, rng: &mut SimpleRng) -> Self {
        let (rows1, cols1) = architecture.layer1_shape();
        let (rows2, cols2) = architecture.layer2_shape();
        Self {
            layer1: DenseLayer::new(rows1, cols1, rng),
            layer2: DenseLayer::new(rows2, cols2, rng),
            architecture,
        }
    }

    /// Assemble a network from existing layers. The architecture is taken
    /// from the layer shapes.
    pub fn from_layers(layer1: DenseLayer, layer2: DenseLayer) -> Result<Self> {
        let architecture = Architecture {
            input_size: layer1.cols(),
            hidden_size: layer1.rows(),
            output_size: layer2.rows(),
        };
        architecture.validate()?;
        if layer2.cols() != layer1.rows() {
            return Err(CatDogError::ArchitectureMismatch {
                layer: "layer2",
                expected_rows: architecture.output_size,
                expected_cols: layer1.rows(),
                found_rows: layer2.rows(),
                found_cols: layer2.cols(),
            });
        }
        Ok(Self {
            layer1,
            layer2,
            architecture,
        })
    }

    /// Layer shapes this network expects; persisted models must match.
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn input_size(&self) -> usize {
        self.architecture.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.architecture.hidden_size
    }

    /// False when either layer is a sentinel or the layers disagree with the
    /// architecture.
    pub fn is_allocated(&self) -> bool {
        self.layer1.is_allocated()
            && self.layer2.is_allocated()
            && (self.layer1.rows(), self.layer1.cols()) == self.architecture.layer1_shape()
            && (self.layer2.rows(), self.layer2.cols()) == self.architecture.layer2_shape()
    }

    /// Release both layers. Safe to call repeatedly.
    pub fn release(&mut self) {
        self.layer1.release();
        self.layer2.release();
    }

    pub fn parameter_count(&self) -> usize {
        self.layer1.parameter_count() + self.layer2.parameter_count()
    }

    /// Forward-only inference on one pixel vector. `None` when the network is
    /// not allocated or the input has the wrong length.
    pub fn predict(&self, pixels: &[f32]) -> Option<Prediction> {
        let mut hidden = vec![0.0f32; self.hidden_size()];
        let mut probabilities = [0.0f32; 2];
        if !self.forward(pixels, &mut hidden, &mut probabilities) {
            return None;
        }
        Some(Prediction {
            probabilities,
            class: Class::from_probabilities(&probabilities),
        })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network: {} -> {} -> {} ({} parameters)",
            self.architecture.input_size,
            self.architecture.hidden_size,
            self.architecture.output_size,
            self.parameter_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture::{HIDDEN_SIZE, INPUT_SIZE, OUTPUT_SIZE};

    #[test]
    fn test_default_network_shapes() {
        let mut rng = SimpleRng::new(42);
        let net = Network::new(&mut rng);

        assert_eq!((net.layer1.rows(), net.layer1.cols()), (HIDDEN_SIZE, INPUT_SIZE));
        assert_eq!((net.layer2.rows(), net.layer2.cols()), (OUTPUT_SIZE, HIDDEN_SIZE));
        assert!(net.is_allocated());
    }

    #[test]
    fn test_release_leaves_unallocated() {
        let mut rng = SimpleRng::new(42);
        let mut net = Network::with_architecture(Architecture::new(4, 3), &mut rng).unwrap();
        net.release();
        assert!(!net.is_allocated());
        net.release();
        assert!(net.predict(&[0.0; 4]).is_none());
    }

    #[test]
    fn test_from_layers_checks_consistency() {
        let mut rng = SimpleRng::new(5);
        let layer1 = DenseLayer::new(3, 4, &mut rng);
        let layer2 = DenseLayer::new(2, 5, &mut rng);
        assert!(Network::from_layers(layer1, layer2).is_err());
    }

    #[test]
    fn test_display() {
        let mut rng = SimpleRng::new(5);
        let net = Network::with_architecture(Architecture::new(4, 3), &mut rng).unwrap();
        assert_eq!(net.to_string(), "Network: 4 -> 3 -> 2 (23 parameters)");
    }
}
