use glam::Vec2;

/// Tracks the last cursor position and accumulates motion between frames.
///
/// Motion arrives either as absolute window positions or as raw relative
/// deltas; both use y growing downwards. The accumulated delta has y
/// flipped so moving the mouse up looks up.
#[derive(Debug, Default)]
pub(crate) struct CursorTracker {
    last_position: Option<Vec2>,
    pending: Vec2,
}

impl CursorTracker {
    /// Record a new absolute position. The first sample after creation or
    /// [`reset`](Self::reset) only seeds the tracker, so grabbing the
    /// cursor never produces a large jump.
    pub(crate) fn handle_position(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        if let Some(last) = self.last_position {
            self.pending += Vec2::new(position.x - last.x, last.y - position.y);
        }
        self.last_position = Some(position);
    }

    /// Record relative motion (y grows downwards). Needs no seed sample.
    pub(crate) fn handle_motion(&mut self, dx: f32, dy: f32) {
        self.pending += Vec2::new(dx, -dy);
    }

    /// Take the motion accumulated since the previous call.
    pub(crate) fn take_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending)
    }

    /// Forget the last position and any pending motion.
    pub(crate) fn reset(&mut self) {
        self.last_position = None;
        self.pending = Vec2::ZERO;
    }
}
