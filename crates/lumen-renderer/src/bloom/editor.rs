//! State and actions of the bloom editing panel.
//!
//! The panel itself (a 5x5 grid of number fields, a "Normalize" button and
//! a "Fill" button with a scalar input) is drawn by the host UI. This module
//! keeps the panel's own state and applies what the user did.

use lumen_common::EffectError;
use tracing::debug;

use super::effect::Bloom;
use super::kernel::KERNEL_SIZE;

/// One user interaction with the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    SetWeight { row: usize, col: usize, value: f32 },
    Normalize,
    SetFillValue(f32),
    Fill,
}

/// Per-panel state: the scalar typed next to the "Fill" button.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BloomEditor {
    pub fill_value: f32,
}

impl BloomEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid the panel should display.
    pub fn rows(bloom: &Bloom) -> [[f32; KERNEL_SIZE]; KERNEL_SIZE] {
        bloom.kernel.rows()
    }

    pub fn apply(&mut self, bloom: &mut Bloom, action: EditorAction) -> Result<(), EffectError> {
        match action {
            EditorAction::SetWeight { row, col, value } => {
                bloom.kernel.set_cell(row, col, value)?;
            }
            EditorAction::Normalize => {
                bloom.kernel.normalize();
                debug!("bloom kernel normalized");
            }
            EditorAction::SetFillValue(value) => {
                if !value.is_finite() {
                    return Err(EffectError::InvalidArgument(format!(
                        "fill value {value} is not finite"
                    )));
                }
                self.fill_value = value;
            }
            EditorAction::Fill => {
                bloom.kernel.fill(self.fill_value)?;
                debug!("bloom kernel filled with {}", self.fill_value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_weight_edits_one_cell() {
        let mut bloom = Bloom::default();
        let mut editor = BloomEditor::new();
        editor
            .apply(
                &mut bloom,
                EditorAction::SetWeight {
                    row: 4,
                    col: 2,
                    value: 0.01,
                },
            )
            .unwrap();
        assert_eq!(bloom.kernel.get(22).unwrap(), 0.01);
        assert_eq!(BloomEditor::rows(&bloom)[4][2], 0.01);
    }

    #[test]
    fn set_weight_outside_grid_fails() {
        let mut bloom = Bloom::default();
        let mut editor = BloomEditor::new();
        let err = editor
            .apply(
                &mut bloom,
                EditorAction::SetWeight {
                    row: 5,
                    col: 0,
                    value: 1.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, EffectError::InvalidArgument(_)));
    }

    #[test]
    fn fill_uses_stored_scalar() {
        let mut bloom = Bloom::default();
        let mut editor = BloomEditor::new();
        editor
            .apply(&mut bloom, EditorAction::SetFillValue(0.2))
            .unwrap();
        editor.apply(&mut bloom, EditorAction::Fill).unwrap();
        assert_eq!(bloom.kernel.snapshot(), [0.2; 25]);
    }

    #[test]
    fn fill_then_normalize_gives_box_blur() {
        let mut bloom = Bloom::default();
        let mut editor = BloomEditor {
            fill_value: 1.0,
        };
        editor.apply(&mut bloom, EditorAction::Fill).unwrap();
        editor.apply(&mut bloom, EditorAction::Normalize).unwrap();
        for w in bloom.kernel.weights() {
            assert!((w - 0.04).abs() < 1e-6);
        }
    }

    #[test]
    fn default_fill_value_zeroes_kernel() {
        let mut bloom = Bloom::default();
        let mut editor = BloomEditor::new();
        editor.apply(&mut bloom, EditorAction::Fill).unwrap();
        assert_eq!(bloom.kernel.sum(), 0.0);
    }

    #[test]
    fn non_finite_fill_value_is_rejected() {
        let mut bloom = Bloom::default();
        let mut editor = BloomEditor::new();
        assert!(editor
            .apply(&mut bloom, EditorAction::SetFillValue(f32::INFINITY))
            .is_err());
        assert_eq!(editor.fill_value, 0.0);
    }
}
