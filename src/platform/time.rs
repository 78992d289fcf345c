//! Fixed-rate frame scheduling
//!
//! Turns wall-clock deltas into whole frames so the simulation always
//! advances in fixed steps regardless of how irregularly it is driven.

use crate::consts::MAX_SUBSTEPS;

/// Largest delta accepted per call (seconds); longer stalls are dropped
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_dt: crate::frame_dt(target_fps),
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per frame
    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Add elapsed time and return how many frames to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);
        self.accumulator += dt;

        let mut frames = 0;
        while self.accumulator >= self.frame_dt && frames < self.max_substeps {
            self.accumulator -= self.frame_dt;
            frames += 1;
        }

        // Spiral of death: drop time we could not catch up on
        if frames == self.max_substeps && self.accumulator >= self.frame_dt {
            log::debug!("Frame pacer fell behind, dropping {:.3}s", self.accumulator);
            self.accumulator = 0.0;
        }
        frames
    }

    /// Time until the next frame is due
    pub fn until_next_frame(&self) -> f32 {
        (self.frame_dt - self.accumulator).max(0.0)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_frames_only() {
        let mut pacer = FramePacer::new(60);
        assert_eq!(pacer.advance(0.01), 0);
        assert_eq!(pacer.advance(0.01), 1);
        assert!(pacer.until_next_frame() > 0.0);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut pacer = FramePacer::new(64);
        // 5 seconds clamp to 0.1s = 6.4 frames
        assert_eq!(pacer.advance(5.0), 6);
    }

    #[test]
    fn test_substeps_capped() {
        let mut pacer = FramePacer::new(240);
        // 0.1s at 240 fps is 24 frames, capped to 8
        assert_eq!(pacer.advance(0.1), MAX_SUBSTEPS);
        assert_eq!(pacer.advance(0.0), 0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut pacer = FramePacer::new(60);
        assert_eq!(pacer.advance(-1.0), 0);
        pacer.reset();
        assert!((pacer.until_next_frame() - pacer.frame_dt()).abs() < 1e-6);
    }
}
