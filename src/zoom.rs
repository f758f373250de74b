//! The zoom-adjustment state machine.
//!
//! The slider drives an incremental adjustment of the visible axis ranges:
//! every event moves the range edges by the *raw slider position*, with the
//! direction decided by where the new value sits relative to the previous
//! one. The result is path-dependent, not an absolute zoom level; oscillating
//! the slider around one value keeps shrinking or expanding the window. That
//! asymmetry is intentional behavior; do not linearize it.

use serde::{Deserialize, Serialize};

/// Visible X/Y ranges plus the previously seen slider value.
///
/// `last_value == None` means no slider event has arrived yet; the first
/// event only records a baseline and leaves the ranges untouched. The state
/// is owned by the event-handling layer; renderers only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    pub last_value: Option<f64>,
}

impl ZoomState {
    pub fn new(x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
            last_value: None,
        }
    }

    /// Apply one slider event.
    ///
    /// Branch behavior (see module docs):
    /// - positive value moving up, or negative value moving down: shrink
    ///   (edges move inward by `new_value`);
    /// - positive value moving down-or-equal, or negative value moving
    ///   up-or-equal: expand (edges move outward by `new_value`);
    /// - zero: ranges unchanged.
    pub fn on_slider_change(&mut self, new_value: f64) {
        if let Some(prev) = self.last_value {
            if new_value > 0.0 {
                if new_value > prev {
                    self.shift_inward(new_value);
                } else {
                    self.shift_outward(new_value);
                }
            } else if new_value < 0.0 {
                if new_value < prev {
                    self.shift_inward(new_value);
                } else {
                    self.shift_outward(new_value);
                }
            }
        }
        self.last_value = Some(new_value);
    }

    fn shift_inward(&mut self, v: f64) {
        self.y_start += v;
        self.y_end -= v;
        self.x_start += v;
        self.x_end -= v;
    }

    fn shift_outward(&mut self, v: f64) {
        self.y_start -= v;
        self.y_end += v;
        self.x_start -= v;
        self.x_end += v;
    }
}
