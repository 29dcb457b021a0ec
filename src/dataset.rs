//! Labelled samples and the train/validation splitter.
//!
//! Both halves of a split borrow disjoint ranges of one shuffled backing
//! collection. Shuffling one half afterwards never changes the membership of
//! the other.

use crate::utils::SimpleRng;

/// The two classes the network distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Cat = 0,
    Dog = 1,
}

impl Class {
    /// Index of this class in the output vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `Some(class)` for 0 and 1.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Class::Cat),
            1 => Some(Class::Dog),
            _ => None,
        }
    }

    /// Class 0 unless the second probability is strictly larger; ties go to
    /// class 0.
    pub fn from_probabilities(probabilities: &[f32]) -> Self {
        match probabilities {
            [cat, dog, ..] if dog > cat => Class::Dog,
            _ => Class::Cat,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Class::Cat => "Cat",
            Class::Dog => "Dog",
        }
    }
}

/// Normalized pixel vector paired with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub pixels: Vec<f32>,
    pub label: Class,
}

impl Sample {
    pub fn new(pixels: Vec<f32>, label: Class) -> Self {
        Self { pixels, label }
    }

    /// All-zero (black) image, produced when decoding fails.
    pub fn blank(len: usize, label: Class) -> Self {
        Self {
            pixels: vec![0.0; len],
            label,
        }
    }
}

/// Training and validation views over one backing collection.
#[derive(Debug)]
pub struct DatasetSplit<'a> {
    pub train: &'a mut [Sample],
    pub validation: &'a mut [Sample],
}

impl DatasetSplit<'_> {
    pub fn train_count(&self) -> usize {
        self.train.len()
    }

    pub fn validation_count(&self) -> usize {
        self.validation.len()
    }
}

/// Shuffle `samples` once and split it into training and validation slices.
///
/// `ratio` is clamped to `[0, 1]`. With more than one sample both slices are
/// non-empty, even at ratio 0 or 1. A single sample always lands in the
/// validation slice; an empty input yields two empty slices.
pub fn split<'a>(samples: &'a mut [Sample], ratio: f32, rng: &mut SimpleRng) -> DatasetSplit<'a> {
    let total = samples.len();
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };

    rng.shuffle(samples);

    let mut train_count = (ratio * total as f32).floor() as usize;
    if total > 1 {
        train_count = train_count.clamp(1, total - 1);
    } else {
        train_count = 0;
    }

    let (train, validation) = samples.split_at_mut(train_count);
    DatasetSplit { train, validation }
}
