//! Follow camera driving `set_transform_camera`.
//!
//! The renderer only depends on [`CameraLike`]; [`Camera`] is one
//! implementation with eased following and clamped zoom.

use crate::coords::Vec2;

/// Anything that can position the view: a translation and a uniform zoom.
pub trait CameraLike {
    fn position(&self) -> Vec2;
    fn zoom(&self) -> f32;
}

impl CameraLike for (Vec2, f32) {
    fn position(&self) -> Vec2 {
        self.0
    }

    fn zoom(&self) -> f32 {
        self.1
    }
}

/// Camera tuning. Speeds are per-`update` easing factors in 0..=1.
#[derive(Debug, Clone)]
pub struct CameraOptions {
    pub x_speed: f32,
    pub y_speed: f32,
    pub zoom_in_speed: f32,
    pub zoom_out_speed: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom steps proportional to the current zoom.
    pub linear_zoom_in: bool,
    pub linear_zoom_out: bool,
    /// Screen point the look-at target is pinned to. Defaults to the viewport centre.
    pub offset: Option<Vec2>,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            x_speed: 1.0,
            y_speed: 1.0,
            zoom_in_speed: 1.0,
            zoom_out_speed: 1.0,
            zoom: 1.0,
            min_zoom: 1.0,
            max_zoom: 1.0,
            linear_zoom_in: true,
            linear_zoom_out: true,
            offset: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub x_speed: f32,
    pub y_speed: f32,
    pub zoom_in_speed: f32,
    pub zoom_out_speed: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub linear_zoom_in: bool,
    pub linear_zoom_out: bool,
    pub offset: Vec2,
    current: Vec2,
    target: Vec2,
    look: Vec2,
    viewport: Vec2,
}

impl Camera {
    /// Camera for a `viewport_w`x`viewport_h` renderer.
    pub fn new(viewport_w: f32, viewport_h: f32, options: CameraOptions) -> Self {
        let viewport = Vec2::new(viewport_w, viewport_h);
        Self {
            x_speed: options.x_speed,
            y_speed: options.y_speed,
            zoom_in_speed: options.zoom_in_speed,
            zoom_out_speed: options.zoom_out_speed,
            zoom: options.zoom,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            linear_zoom_in: options.linear_zoom_in,
            linear_zoom_out: options.linear_zoom_out,
            offset: options.offset.unwrap_or(viewport * 0.5),
            current: Vec2::zero(),
            target: Vec2::zero(),
            look: Vec2::zero(),
            viewport,
        }
    }

    /// Updates the visible area used by [`sees`](Self::sees).
    pub fn set_viewport(&mut self, w: f32, h: f32) {
        self.viewport = Vec2::new(w, h);
    }

    /// Eases the current position towards the target.
    pub fn update(&mut self) -> &mut Self {
        if self.current.x != self.target.x {
            self.current.x += (self.target.x - self.current.x) * self.x_speed;
        }
        if self.current.y != self.target.y {
            self.current.y += (self.target.y - self.current.y) * self.y_speed;
        }
        self
    }

    /// Sets the world point to keep under `offset`.
    pub fn look_at(&mut self, at: Vec2) -> &mut Self {
        self.look = at;
        self.target = self.offset / self.zoom - at;
        self
    }

    /// The point last passed to [`look_at`](Self::look_at).
    #[inline]
    pub fn should_look_at(&self) -> Vec2 {
        self.look
    }

    /// The world point currently under `offset`.
    pub fn looks_at(&self) -> Vec2 {
        (self.offset - self.current * self.zoom) / self.zoom
    }

    /// True when the world rectangle intersects the visible area.
    pub fn sees(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        let off = self.offset;
        let at = self.looks_at();
        x + w > at.x - off.x / self.zoom
            && x < at.x + (self.viewport.x - off.x) / self.zoom
            && y + h > at.y - off.y / self.zoom
            && y < at.y + (self.viewport.y - off.y) / self.zoom
    }

    pub fn zoom_in(&mut self) {
        if self.zoom != self.max_zoom {
            let speed = if self.linear_zoom_in {
                self.zoom_in_speed * self.zoom
            } else {
                self.zoom_in_speed
            };
            self.zoom = (self.zoom + speed).min(self.max_zoom);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom != self.min_zoom {
            let speed = if self.linear_zoom_out {
                self.zoom_out_speed * self.zoom
            } else {
                self.zoom_out_speed
            };
            self.zoom = (self.zoom - speed).max(self.min_zoom);
        }
    }
}

impl CameraLike for Camera {
    fn position(&self) -> Vec2 {
        self.current
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(600.0, 400.0, CameraOptions::default())
    }

    // ── follow ────────────────────────────────────────────────────────────

    #[test]
    fn look_at_then_update_centres_target() {
        let mut cam = camera();
        cam.look_at(Vec2::new(100.0, 50.0)).update();
        assert_eq!(cam.position(), Vec2::new(200.0, 150.0));
        assert_eq!(cam.looks_at(), Vec2::new(100.0, 50.0));
        assert_eq!(cam.should_look_at(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn slow_camera_eases() {
        let mut cam = Camera::new(
            600.0,
            400.0,
            CameraOptions { x_speed: 0.5, y_speed: 0.5, ..CameraOptions::default() },
        );
        cam.look_at(Vec2::new(100.0, 100.0)).update();
        assert_eq!(cam.position(), Vec2::new(100.0, 50.0));
    }

    // ── visibility ────────────────────────────────────────────────────────

    #[test]
    fn sees_only_the_viewport() {
        let mut cam = camera();
        cam.look_at(Vec2::new(100.0, 50.0)).update();
        assert!(cam.sees(90.0, 40.0, 20.0, 20.0));
        assert!(!cam.sees(500.0, 0.0, 10.0, 10.0));
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::new(
            600.0,
            400.0,
            CameraOptions { max_zoom: 4.0, min_zoom: 0.5, ..CameraOptions::default() },
        );
        cam.zoom_in();
        assert_eq!(cam.zoom, 2.0);
        cam.zoom_in();
        cam.zoom_in();
        assert_eq!(cam.zoom, 4.0);
        cam.zoom_out();
        assert_eq!(cam.zoom, 0.5);
    }
}
