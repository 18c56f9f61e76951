use serde::{Deserialize, Serialize};

/// Elapsed-seconds counter advanced by the embedding's once-per-second tick.
///
/// Starting always restarts from zero, including while already running; the
/// display is meant to show time since the latest (re)start.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    elapsed_secs: u32,
    running: bool,
}

impl Timer {
    pub fn start(&mut self) {
        self.elapsed_secs = 0;
        self.running = true;
    }

    /// Halts the timer, keeping the last value for display.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances by one second while running, returning the new value.
    pub fn tick(&mut self) -> u32 {
        if self.running {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
        self.elapsed_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_one_second_per_tick() {
        let mut timer = Timer::default();
        timer.start();
        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed_secs(), 3);
    }

    #[test]
    fn stop_freezes_the_displayed_value() {
        let mut timer = Timer::default();
        timer.start();
        timer.tick();
        timer.stop();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed_secs(), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn starting_while_running_restarts_from_zero() {
        let mut timer = Timer::default();
        timer.start();
        timer.tick();
        timer.tick();
        timer.start();
        assert_eq!(timer.elapsed_secs(), 0);
        assert!(timer.is_running());
    }

    #[test]
    fn does_not_count_before_start() {
        let mut timer = Timer::default();
        timer.tick();
        assert_eq!(timer.elapsed_secs(), 0);
    }
}
