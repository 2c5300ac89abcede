use std::collections::VecDeque;
use std::time::{Duration, Instant};

const FPS_WINDOW: usize = 60;

/// Caps the loop at a target frame rate and keeps a running FPS estimate.
pub struct FrameClock {
    frame_duration: Duration,
    frame_start: Instant,
    frame_times: VecDeque<Duration>,
}

impl FrameClock {
    pub fn new(max_fps: u32) -> Self {
        FrameClock {
            frame_duration: Duration::from_secs_f64(1.0 / max_fps.max(1) as f64),
            frame_start: Instant::now(),
            frame_times: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleep out the rest of the current frame, then start the next one.
    pub fn tick(&mut self) {
        let work = self.frame_start.elapsed();
        if let Some(remaining) = self.frame_duration.checked_sub(work) {
            std::thread::sleep(remaining);
        }
        let now = Instant::now();
        self.record(now.duration_since(self.frame_start));
        self.frame_start = now;
    }

    fn record(&mut self, frame_time: Duration) {
        if self.frame_times.len() == FPS_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    /// Average frames per second over the last second or so of frames.
    pub fn fps(&self) -> f32 {
        let total: Duration = self.frame_times.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.frame_times.len() as f32 / total.as_secs_f32()
    }
}
