//! Training configuration
//!
//! Hyperparameters and data locations for the training program, read from a
//! JSON file. Every field is optional and falls back to the built-in
//! defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "learning_rate": 0.001,
//!   "epochs": 50,
//!   "split_ratio": 0.8,
//!   "seed": 42,
//!   "hidden_size": 128,
//!   "max_images": 1000,
//!   "cat_dir": "PetImages/Cat",
//!   "dog_dir": "PetImages/Dog",
//!   "model_path": "catdog.nn"
//! }
//! ```

use crate::architecture::{
    Architecture, DATA_SPLIT_RATIO, EPOCHS, HIDDEN_SIZE, INPUT_SIZE, LEARNING_RATE, MAX_IMAGES,
};
use crate::error::{CatDogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MODEL_PATH: &str = "catdog.nn";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// Fixed SGD step size.
    pub learning_rate: f32,
    pub epochs: usize,
    /// Fraction of samples used for training; clamped to `[0, 1]` by the splitter.
    pub split_ratio: f32,
    /// Seed for weight initialization and shuffling.
    pub seed: u64,
    pub hidden_size: usize,
    /// Upper bound on loaded images, split evenly between the two classes.
    pub max_images: usize,
    pub cat_dir: PathBuf,
    pub dog_dir: PathBuf,
    /// Where the trained model is resumed from and saved to.
    pub model_path: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            epochs: EPOCHS,
            split_ratio: DATA_SPLIT_RATIO,
            seed: DEFAULT_SEED,
            hidden_size: HIDDEN_SIZE,
            max_images: MAX_IMAGES,
            cat_dir: PathBuf::from("PetImages/Cat"),
            dog_dir: PathBuf::from("PetImages/Dog"),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl TrainingConfig {
    /// Network shape implied by this configuration.
    pub fn architecture(&self) -> Architecture {
        Architecture::new(INPUT_SIZE, self.hidden_size)
    }
}

/// Loads a training configuration from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use catdog_nn::config::load_config;
///
/// let cfg = load_config("config/catdog.json").unwrap();
/// assert_eq!(cfg.epochs, 50);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrainingConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses and validates a configuration from a JSON string.
pub fn parse_config(contents: &str) -> Result<TrainingConfig> {
    let config: TrainingConfig = serde_json::from_str(contents)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &TrainingConfig) -> Result<()> {
    if !config.learning_rate.is_finite() || config.learning_rate <= 0.0 {
        return Err(CatDogError::Config(
            "learning_rate must be positive".to_string(),
        ));
    }

    if !config.split_ratio.is_finite() {
        return Err(CatDogError::Config(
            "split_ratio must be a finite number".to_string(),
        ));
    }

    if config.hidden_size == 0 {
        return Err(CatDogError::Config(
            "hidden_size must be positive".to_string(),
        ));
    }

    Ok(())
}
