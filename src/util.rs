//! Shared utilities

/// Simple deterministic RNG using xorshift64
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) } // Ensure non-zero
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Get a random u8
    #[inline]
    pub fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// Get a random i32 in [min, max]
    #[inline]
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let range = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (self.next_u64() % range) as i64) as i32
    }
}

/// HSV to RGB color conversion
/// h: 0-360, s: 0-1, v: 0-1
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let c = v * s;
    let h_prime = (h % 360.0) / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r1 + m) * 255.0) as u8,
        ((g1 + m) * 255.0) as u8,
        ((b1 + m) * 255.0) as u8,
    )
}

// ============================================================================
// FPS Counter
// ============================================================================

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frames between two fps reports
pub const REPORT_INTERVAL: u64 = 30;

/// FPS counter with rolling average
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
    frames: u64,
}

impl FpsCounter {
    /// Create a new FPS counter with specified sample window
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count: sample_count.max(1),
            frames: 0,
        }
    }

    /// Call at the start of each frame to record timing
    /// Returns (delta_time, current_fps, average_fps)
    pub fn tick(&mut self) -> (f32, f32, f32) {
        let now = Instant::now();
        let dt = self.record(now - self.last_frame);
        self.last_frame = now;

        let current_fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        (dt, current_fps, self.avg_fps())
    }

    /// Add one frame time to the rolling window
    fn record(&mut self, elapsed: Duration) -> f32 {
        let dt = elapsed.as_secs_f32();
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
        self.frames += 1;
        dt
    }

    /// Average fps over the sample window
    pub fn avg_fps(&self) -> f32 {
        let avg_dt = self.avg_frame_time_ms() / 1000.0;
        if avg_dt > 0.0 {
            1.0 / avg_dt
        } else {
            0.0
        }
    }

    /// Get the average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        let avg_dt: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32;
        avg_dt * 1000.0
    }

    /// Get min/max FPS from sample window
    pub fn min_max_fps(&self) -> (f32, f32) {
        if self.frame_times.is_empty() {
            return (0.0, 0.0);
        }
        let min_dt = self
            .frame_times
            .iter()
            .cloned()
            .fold(f32::INFINITY, f32::min);
        let max_dt = self.frame_times.iter().cloned().fold(0.0, f32::max);
        let max_fps = if min_dt > 0.0 { 1.0 / min_dt } else { 0.0 };
        let min_fps = if max_dt > 0.0 { 1.0 / max_dt } else { 0.0 };
        (min_fps, max_fps)
    }

    /// Total frames ticked since creation
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// True on every `REPORT_INTERVAL`th frame
    pub fn should_report(&self) -> bool {
        self.frames > 0 && self.frames % REPORT_INTERVAL == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_range_is_inclusive_and_bounded() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.range_i32(-3, 3);
            assert!((-3..=3).contains(&v));
        }
        assert_eq!(rng.range_i32(5, 5), 5);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn test_fps_from_recorded_frames() {
        let mut fps = FpsCounter::new(4);
        for _ in 0..6 {
            fps.record(Duration::from_millis(20));
        }
        assert_eq!(fps.frame_count(), 6);
        assert!((fps.avg_fps() - 50.0).abs() < 0.5);
        assert!((fps.avg_frame_time_ms() - 20.0).abs() < 0.1);
        let (min, max) = fps.min_max_fps();
        assert!((min - max).abs() < 0.5);
    }

    #[test]
    fn test_report_every_interval() {
        let mut fps = FpsCounter::new(8);
        assert!(!fps.should_report());
        let mut reports = 0;
        for _ in 0..(REPORT_INTERVAL * 3) {
            fps.record(Duration::from_millis(16));
            if fps.should_report() {
                reports += 1;
            }
        }
        assert_eq!(reports, 3);
    }

    #[test]
    fn test_empty_counter() {
        let fps = FpsCounter::new(10);
        assert_eq!(fps.avg_fps(), 0.0);
        assert_eq!(fps.min_max_fps(), (0.0, 0.0));
    }
}
