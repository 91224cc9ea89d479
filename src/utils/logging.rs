use glam::Vec2;
use log::{Level, log_enabled, warn};

/// Scoped trace span wrapped around a single simulation frame.
///
/// Emits nothing unless trace logging is enabled, so it stays free in
/// release hosts that leave the filter at `info`.
pub struct FrameSpan {
    frame: u64,
    dt: f32,
    position: Option<Vec2>,
}

impl FrameSpan {
    pub fn new(frame: u64, dt: f32) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("frame {frame} start (dt = {dt:.4} s)");
        }
        Self {
            frame,
            dt,
            position: None,
        }
    }

    /// Records the body position reported when the span closes.
    pub fn record_position(&mut self, position: Vec2) {
        self.position = Some(position);
    }
}

impl Drop for FrameSpan {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            match self.position {
                Some(p) => log::trace!(
                    "frame {} end (dt = {:.4} s) position = ({:.2}, {:.2})",
                    self.frame,
                    self.dt,
                    p.x,
                    p.y
                ),
                None => log::trace!("frame {} end (dt = {:.4} s)", self.frame, self.dt),
            }
        }
    }
}

/// Warns when a host feeds a negative frame time, which is treated as a no-op frame.
pub fn warn_if_negative_dt(dt: f32) -> bool {
    if dt < 0.0 {
        warn!("Negative frame time {dt:.4} s ignored; frame treated as a no-op");
        return true;
    }
    false
}
