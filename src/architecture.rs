//! Network architecture: size constants and the expected layer shapes.
//!
//! The classifier always has two layers. Layer 1 maps the flattened RGB image
//! to the hidden vector, layer 2 maps the hidden vector to one score per class.

use crate::error::{CatDogError, Result};

/// Side length images are resized to before flattening.
pub const IMG_SIZE: usize = 64;
/// Flattened RGB pixel count.
pub const INPUT_SIZE: usize = IMG_SIZE * IMG_SIZE * 3;
pub const HIDDEN_SIZE: usize = 128;
/// One score per class (cat, dog).
pub const OUTPUT_SIZE: usize = 2;

pub const LEARNING_RATE: f32 = 0.001;
pub const EPOCHS: usize = 50;
pub const MAX_IMAGES: usize = 1000;
pub const DATA_SPLIT_RATIO: f32 = 0.8;

/// Sizes of the input, hidden and output vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Architecture {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
}

impl Default for Architecture {
    fn default() -> Self {
        Self {
            input_size: INPUT_SIZE,
            hidden_size: HIDDEN_SIZE,
            output_size: OUTPUT_SIZE,
        }
    }
}

impl Architecture {
    /// Two-class architecture with custom input and hidden sizes.
    pub fn new(input_size: usize, hidden_size: usize) -> Self {
        Self {
            input_size,
            hidden_size,
            output_size: OUTPUT_SIZE,
        }
    }

    /// `(rows, cols)` of layer 1.
    pub fn layer1_shape(&self) -> (usize, usize) {
        (self.hidden_size, self.input_size)
    }

    /// `(rows, cols)` of layer 2.
    pub fn layer2_shape(&self) -> (usize, usize) {
        (self.output_size, self.hidden_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 || self.hidden_size == 0 {
            return Err(CatDogError::InvalidArchitecture(format!(
                "input_size ({}) and hidden_size ({}) must be positive",
                self.input_size, self.hidden_size
            )));
        }
        if self.output_size != OUTPUT_SIZE {
            return Err(CatDogError::InvalidArchitecture(format!(
                "output_size must be {}, got {}",
                OUTPUT_SIZE, self.output_size
            )));
        }
        Ok(())
    }
}
