//! Shared utilities: random number generation and activation functions.

pub mod activations;
pub mod rng;

pub use activations::{relu, relu_derivative, relu_inplace, softmax_inplace};
pub use rng::SimpleRng;
