//! Training and evaluation loops.

pub mod evaluate;
pub mod trainer;

pub use evaluate::{cross_entropy, evaluate, Evaluation, LOSS_EPSILON};
pub use trainer::{EpochReport, Trainer};
