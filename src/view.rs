//! Pan/zoom state shared by every organism draw.
//!
//! Any mutation that changes the view also raises a pending clear request.
//! Requests are coalesced: the driver calls [`ViewTransform::take_clear_request`]
//! once per frame, so several zoom steps between two frames cost one canvas
//! clear.

use crate::config::ViewConfig;
use glam::Vec2;

/// The part of the view an organism remembers from its last draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub pan: Vec2,
    pub zoom: f32,
}

#[derive(Debug, Clone)]
pub struct ViewTransform {
    pan: Vec2,
    zoom: f32,
    zoom_step: f32,
    initial_zoom: f32,
    clear_requested: bool,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl ViewTransform {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: config.initial_zoom.max(config.zoom_step),
            zoom_step: config.zoom_step,
            initial_zoom: config.initial_zoom,
            clear_requested: false,
        }
    }

    #[inline]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn zoom_step(&self) -> f32 {
        self.zoom_step
    }

    #[inline]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            pan: self.pan,
            zoom: self.zoom,
        }
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world + self.pan) * self.zoom
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom - self.pan
    }

    /// Returns whether the view changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom + self.zoom_step)
    }

    /// Never goes below one zoom step. Returns whether the view changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom((self.zoom - self.zoom_step).max(self.zoom_step))
    }

    /// Pans by a screen-space delta. The delta is scaled by the current zoom,
    /// so a drag moves the scene the same number of pixels at any zoom level.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        let next = self.pan + Vec2::new(dx, dy) / self.zoom;
        if next == self.pan {
            return false;
        }
        self.pan = next;
        self.mark_changed();
        true
    }

    /// Back to the initial pan and zoom.
    pub fn reset_view(&mut self) -> bool {
        let zoom = self.initial_zoom.max(self.zoom_step);
        if self.pan == Vec2::ZERO && self.zoom == zoom {
            return false;
        }
        self.pan = Vec2::ZERO;
        self.zoom = zoom;
        self.mark_changed();
        true
    }

    /// Raises a clear request without changing the view, e.g. after a reset
    /// of the population.
    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    /// Returns true once per batch of changes and resets the request.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }

    fn set_zoom(&mut self, zoom: f32) -> bool {
        if zoom == self.zoom {
            return false;
        }
        self.zoom = zoom;
        self.mark_changed();
        true
    }

    fn mark_changed(&mut self) {
        self.clear_requested = true;
        log::debug!("View changed: pan={:?} zoom={:.2}", self.pan, self.zoom);
    }
}
