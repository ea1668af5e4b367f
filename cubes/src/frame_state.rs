use std::time::{Duration, Instant};

pub struct FrameState {
    pub last_frame_end: Instant,
    pub deltatime: f64,
    pub fps: f32,
    frames_since_report: u32,
    last_report: Instant,
}

impl FrameState {
    pub fn update_statistics(&mut self) {
        self.deltatime = self.last_frame_end.elapsed().as_secs_f64();
        self.fps = (1.0 / self.deltatime.max(f64::EPSILON)) as f32;

        self.last_frame_end = Instant::now();
        self.frames_since_report += 1;
    }

    /// Average frames per second since the last report, once `interval` has
    /// passed.
    pub fn take_report(&mut self, interval: Duration) -> Option<f32> {
        let elapsed = self.last_report.elapsed();

        if elapsed < interval || self.frames_since_report == 0 {
            return None;
        }

        let average = self.frames_since_report as f32 / elapsed.as_secs_f32();

        self.frames_since_report = 0;
        self.last_report = Instant::now();

        Some(average)
    }
}

impl Default for FrameState {
    fn default() -> Self {
        FrameState {
            last_frame_end: Instant::now(),
            deltatime: 0.0,
            fps: 0.0,
            frames_since_report: 0,
            last_report: Instant::now(),
        }
    }
}
