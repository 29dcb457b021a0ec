//! Dense (fully connected) layer
//!
//! Weights are a `rows × cols` matrix kept in one contiguous row-major buffer:
//! row `i` holds the incoming weights of output unit `i`. A layer whose
//! allocation failed is a sentinel with zero dimensions and no storage.

use crate::error::{CatDogError, Result};
use crate::layers::Layer;
use crate::utils::SimpleRng;

/// Scale of the zero-centred uniform initializer.
const INIT_SCALE: f32 = 0.1;

/// Dense layer with weights and biases.
///
/// # Example
///
/// ```
/// use catdog_nn::layers::{DenseLayer, Layer};
/// use catdog_nn::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(42);
/// let layer = DenseLayer::new(128, 12288, &mut rng);
/// assert_eq!(layer.rows(), 128);
/// assert_eq!(layer.input_size(), 12288);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseLayer {
    rows: usize,
    cols: usize,
    weights: Vec<f32>,
    biases: Vec<f32>,
}

impl DenseLayer {
    /// Create a layer with weights drawn from `(U(0,1) - 0.5) * 0.1` and zero
    /// biases.
    ///
    /// Returns the sentinel (see [`DenseLayer::empty`]) if storage cannot be
    /// allocated; never a partially initialized layer.
    pub fn new(rows: usize, cols: usize, rng: &mut SimpleRng) -> Self {
        Self::try_new(rows, cols, rng).unwrap_or_else(|err| {
            tracing::warn!("{err}, falling back to an empty layer");
            Self::empty()
        })
    }

    /// Fallible form of [`DenseLayer::new`].
    pub fn try_new(rows: usize, cols: usize, rng: &mut SimpleRng) -> Result<Self> {
        let mut weights = allocate(rows, cols)?;
        let mut biases = allocate(rows, 1)?;

        weights.extend((0..rows * cols).map(|_| (rng.next_f32() - 0.5) * INIT_SCALE));
        biases.resize(rows, 0.0);

        Ok(Self {
            rows,
            cols,
            weights,
            biases,
        })
    }

    /// Zero-filled layer, used as the target of a load.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        let mut weights = allocate(rows, cols)?;
        let mut biases = allocate(rows, 1)?;
        weights.resize(rows * cols, 0.0);
        biases.resize(rows, 0.0);
        Ok(Self {
            rows,
            cols,
            weights,
            biases,
        })
    }

    /// Build a layer from explicit row-major weights and biases.
    pub fn from_parts(rows: usize, cols: usize, weights: Vec<f32>, biases: Vec<f32>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(CatDogError::Allocation { rows, cols })?;
        if weights.len() != expected || biases.len() != rows {
            return Err(CatDogError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        Ok(Self {
            rows,
            cols,
            weights,
            biases,
        })
    }

    /// The sentinel layer: zero dimensions, no storage.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Release storage and become the sentinel. Safe to call repeatedly.
    pub fn release(&mut self) {
        *self = Self::empty();
    }

    /// False for the sentinel.
    pub fn is_allocated(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && self.weights.len() == self.rows * self.cols
            && self.biases.len() == self.rows
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weight at `(row, col)`. Panics when out of bounds.
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row * self.cols + col]
    }

    pub fn weight_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.weights[row * self.cols + col]
    }

    /// Incoming weights of output unit `i`.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.weights[i * self.cols..(i + 1) * self.cols]
    }

    /// All weights in row-major order.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [f32] {
        &mut self.weights
    }

    pub fn biases(&self) -> &[f32] {
        &self.biases
    }

    pub fn biases_mut(&mut self) -> &mut [f32] {
        &mut self.biases
    }

    fn accepts(&self, input_len: usize, output_len: usize) -> bool {
        self.is_allocated() && input_len == self.cols && output_len == self.rows
    }
}

impl Layer for DenseLayer {
    fn forward(&self, input: &[f32], output: &mut [f32]) {
        if !self.accepts(input.len(), output.len()) {
            return;
        }
        for ((out, row), &bias) in output
            .iter_mut()
            .zip(self.weights.chunks_exact(self.cols))
            .zip(&self.biases)
        {
            let mut sum = bias;
            for (&w, &x) in row.iter().zip(input) {
                sum += w * x;
            }
            *out = sum;
        }
    }

    fn backward(&self, grad_output: &[f32], grad_input: &mut [f32]) {
        if !self.accepts(grad_input.len(), grad_output.len()) {
            return;
        }
        grad_input.fill(0.0);
        for (row, &g) in self.weights.chunks_exact(self.cols).zip(grad_output) {
            for (gi, &w) in grad_input.iter_mut().zip(row) {
                *gi += g * w;
            }
        }
    }

    fn update_parameters(&mut self, input: &[f32], grad_output: &[f32], learning_rate: f32) {
        if !self.accepts(input.len(), grad_output.len()) {
            return;
        }
        let cols = self.cols;
        for ((row, bias), &g) in self
            .weights
            .chunks_exact_mut(cols)
            .zip(self.biases.iter_mut())
            .zip(grad_output)
        {
            for (w, &x) in row.iter_mut().zip(input) {
                *w -= learning_rate * g * x;
            }
            *bias -= learning_rate * g;
        }
    }

    fn input_size(&self) -> usize {
        self.cols
    }

    fn output_size(&self) -> usize {
        self.rows
    }

    fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}

/// Empty vector with room for `rows * cols` floats, or an allocation error.
fn allocate(rows: usize, cols: usize) -> Result<Vec<f32>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(CatDogError::Allocation { rows, cols })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| CatDogError::Allocation { rows, cols })?;
    Ok(buffer)
}
