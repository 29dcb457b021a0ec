//! Cat vs dog image classifier
//!
//! A two-layer fully connected network (input → ReLU hidden → softmax over two
//! classes) trained with per-sample online SGD, plus the binary format used to
//! persist trained parameters.
//!
//! # Modules
//!
//! - `architecture`: size constants and expected layer shapes
//! - `layers`: Layer trait and the dense layer
//! - `network`: the two-layer network, forward and backward engines
//! - `training`: epoch loop and forward-only evaluation
//! - `dataset`: labelled samples and the train/validation splitter
//! - `persistence`: binary save/load
//! - `loader`: image decoding into samples
//! - `config`: training configuration
//! - `utils`: RNG and activation functions

pub mod architecture;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layers;
pub mod loader;
pub mod network;
pub mod persistence;
pub mod training;
pub mod utils;

pub use dataset::{split, Class, DatasetSplit, Sample};
pub use error::{CatDogError, Result};
pub use network::{Network, Prediction};
pub use training::{evaluate, EpochReport, Evaluation, Trainer};
pub use utils::SimpleRng;
