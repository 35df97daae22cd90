use std::sync::atomic::{AtomicUsize, Ordering};

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Extra tolerance, in pixels, applied to freehand hit tests so thin
/// strokes stay clickable.
pub const HIT_TEST_SLOP: f32 = 2.0;

// Single static counter for all elements.
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn next_element_id() -> usize {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Stroke style shared by every element variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color32,
    pub width: f32,
    /// Per-item opacity, 0 (transparent) to 255 (opaque).
    pub opacity: u8,
    pub filled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 3.0,
            opacity: 255,
            filled: false,
        }
    }
}

impl Style {
    /// The color this style paints with once `layer_opacity` is applied.
    ///
    /// Per-item alpha is scaled by `item_opacity * layer_opacity / 255`.
    pub fn effective_color(&self, layer_opacity: u8) -> Color32 {
        let alpha = scale_opacity(self.opacity, layer_opacity);
        Color32::from_rgba_unmultiplied(self.color.r(), self.color.g(), self.color.b(), alpha)
    }
}

/// Scales one 0-255 opacity by another.
pub fn scale_opacity(item: u8, layer: u8) -> u8 {
    (item as u16 * layer as u16 / 255) as u8
}
