//! Named wall-clock stopwatch with pause/resume.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Timer {
    name: String,
    started: Instant,
    paused: Option<Instant>,
}

impl Timer {
    /// Creates a timer. When `start` is false the clock still reads from
    /// creation until [`start`](Self::start) is called.
    pub fn new(name: impl Into<String>, start: bool) -> Self {
        let mut timer = Self {
            name: name.into(),
            started: Instant::now(),
            paused: None,
        };
        if start {
            timer.start();
        }
        timer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starts or restarts the timer.
    pub fn start(&mut self) {
        self.started = Instant::now();
        self.paused = None;
    }

    pub fn pause(&mut self) {
        if self.paused.is_none() {
            self.paused = Some(Instant::now());
        }
    }

    pub fn resume(&mut self) {
        if let Some(paused) = self.paused.take() {
            self.started += paused.elapsed();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.is_some()
    }

    /// Time accumulated while running.
    pub fn elapsed(&self) -> Duration {
        let now = self.paused.unwrap_or_else(Instant::now);
        now.saturating_duration_since(self.started)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn log_elapsed(&self) {
        tracing::info!(timer = %self.name, seconds = self.elapsed_secs(), "elapsed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_paused_timer_is_frozen() {
        let mut timer = Timer::new("frozen", true);
        sleep(Duration::from_millis(5));
        timer.pause();
        let at_pause = timer.elapsed();
        sleep(Duration::from_millis(10));
        assert_eq!(timer.elapsed(), at_pause);
        assert!(timer.is_paused());
    }

    #[test]
    fn test_resume_excludes_paused_time() {
        let mut timer = Timer::new("resume", true);
        timer.pause();
        sleep(Duration::from_millis(20));
        timer.resume();
        assert!(timer.elapsed() < Duration::from_millis(20));
    }

    #[test]
    fn test_elapsed_grows_while_running() {
        let timer = Timer::new("running", true);
        sleep(Duration::from_millis(2));
        assert!(timer.elapsed() >= Duration::from_millis(2));
        assert_eq!(timer.name(), "running");
    }
}
