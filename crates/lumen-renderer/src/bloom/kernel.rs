//! The 5x5 convolution kernel behind the bloom filter.

use lumen_common::EffectError;

/// Kernel edge length.
pub const KERNEL_SIZE: usize = 5;
/// Number of weights in the kernel.
pub const KERNEL_LEN: usize = KERNEL_SIZE * KERNEL_SIZE;

/// Radially weighted default: center 1.0, falling off toward the edges.
/// Deliberately not normalized.
pub const DEFAULT_WEIGHTS: [f32; KERNEL_LEN] = [
    0.1, 0.25, 0.25, 0.25, 0.1, //
    0.1, 0.5, 0.5, 0.5, 0.1, //
    0.1, 0.5, 1.0, 0.5, 0.1, //
    0.1, 0.5, 0.5, 0.5, 0.1, //
    0.1, 0.25, 0.5, 0.25, 0.1, //
];

/// Row-major 5x5 grid of weights, indices 0-24.
///
/// Every weight is finite; setters reject anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [f32; KERNEL_LEN],
}

impl Default for Kernel {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl Kernel {
    /// A kernel with every weight set to zero.
    pub fn zeroed() -> Self {
        Self {
            weights: [0.0; KERNEL_LEN],
        }
    }

    /// Build a kernel from 25 weights, rejecting non-finite values.
    pub fn from_weights(weights: [f32; KERNEL_LEN]) -> Result<Self, EffectError> {
        for (index, value) in weights.iter().enumerate() {
            check_finite(index, *value)?;
        }
        Ok(Self { weights })
    }

    pub fn get(&self, index: usize) -> Result<f32, EffectError> {
        check_index(index)?;
        Ok(self.weights[index])
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<(), EffectError> {
        check_index(index)?;
        check_finite(index, value)?;
        self.weights[index] = value;
        Ok(())
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<f32, EffectError> {
        self.get(cell_index(row, col)?)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: f32) -> Result<(), EffectError> {
        self.set(cell_index(row, col)?, value)
    }

    /// Overwrite all 25 weights with `value`.
    ///
    /// A non-finite `value` is rejected and the kernel is left untouched.
    pub fn fill(&mut self, value: f32) -> Result<(), EffectError> {
        if !value.is_finite() {
            return Err(EffectError::InvalidArgument(format!(
                "fill value {value} is not finite"
            )));
        }
        self.weights = [value; KERNEL_LEN];
        Ok(())
    }

    /// Rescale the weights so they sum to 1.0.
    ///
    /// A zero-sum kernel is divided by 1, i.e. left as is. The sum is taken
    /// in `f64` so 25 large finite weights cannot overflow it.
    pub fn normalize(&mut self) {
        let sum: f64 = self.weights.iter().map(|w| f64::from(*w)).sum();
        let divisor = if sum == 0.0 { 1.0 } else { sum };
        for w in &mut self.weights {
            *w = (f64::from(*w) / divisor) as f32;
        }
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    pub fn weights(&self) -> &[f32; KERNEL_LEN] {
        &self.weights
    }

    /// Copy of the weights, detached from later edits.
    pub fn snapshot(&self) -> [f32; KERNEL_LEN] {
        self.weights
    }

    /// The weights as 5 rows of 5.
    pub fn rows(&self) -> [[f32; KERNEL_SIZE]; KERNEL_SIZE] {
        let mut rows = [[0.0; KERNEL_SIZE]; KERNEL_SIZE];
        for (i, w) in self.weights.iter().enumerate() {
            rows[i / KERNEL_SIZE][i % KERNEL_SIZE] = *w;
        }
        rows
    }
}

fn check_index(index: usize) -> Result<(), EffectError> {
    if index >= KERNEL_LEN {
        return Err(EffectError::InvalidArgument(format!(
            "kernel index {index} outside [0, {}]",
            KERNEL_LEN - 1
        )));
    }
    Ok(())
}

fn check_finite(index: usize, value: f32) -> Result<(), EffectError> {
    if !value.is_finite() {
        return Err(EffectError::InvalidArgument(format!(
            "kernel weight {index} = {value} is not finite"
        )));
    }
    Ok(())
}

fn cell_index(row: usize, col: usize) -> Result<usize, EffectError> {
    if row >= KERNEL_SIZE || col >= KERNEL_SIZE {
        return Err(EffectError::InvalidArgument(format!(
            "kernel cell ({row}, {col}) outside [0, {}]",
            KERNEL_SIZE - 1
        )));
    }
    Ok(row * KERNEL_SIZE + col)
}

// =============================================================================
// Tests
// =============================================================================
