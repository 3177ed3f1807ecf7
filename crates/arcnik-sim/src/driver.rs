use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Running,
    Paused,
}

/// Advances a progress scalar along the route on a fixed cadence. The only
/// transitions are the explicit toggle and reset; while paused a tick is a
/// no-op. Hosts differ on the initial state, so it is a constructor argument.
#[derive(Debug, Clone)]
pub struct Driver {
    progress: f64,
    increment: f64,
    state: RunState,
}

impl Driver {
    pub fn new(increment: f64, initial: RunState) -> Self {
        Self {
            progress: 0.0,
            increment,
            state: initial,
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress.clamp(0.0, 1.0);
        self
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// One timer tick. Returns true when progress advanced. Wraps past 1.0
    /// by the remainder, so 0.999 + δ lands near zero, never above one.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.progress += self.increment;
        if self.progress > 1.0 {
            self.progress %= 1.0;
        }
        true
    }

    pub fn toggle(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        self.state
    }

    /// Rewinds to the route start regardless of run state.
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_and_wraps_past_one() {
        let mut driver = Driver::new(0.002, RunState::Running).with_progress(0.999);
        assert!(driver.tick());
        let expected = (0.999_f64 + 0.002) % 1.0;
        assert!((driver.progress() - expected).abs() < 1e-12);
        assert!(driver.progress() < 0.01);
    }

    #[test]
    fn paused_driver_mutates_nothing() {
        let mut driver = Driver::new(0.01, RunState::Paused).with_progress(0.4);
        assert!(!driver.tick());
        assert!((driver.progress() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn toggle_flips_between_the_two_states() {
        let mut driver = Driver::new(0.01, RunState::Running);
        assert_eq!(driver.toggle(), RunState::Paused);
        assert_eq!(driver.toggle(), RunState::Running);
    }

    #[test]
    fn reset_works_while_paused_and_while_running() {
        let mut driver = Driver::new(0.01, RunState::Paused).with_progress(0.7);
        driver.reset();
        assert_eq!(driver.progress(), 0.0);

        let mut driver = Driver::new(0.01, RunState::Running).with_progress(0.7);
        driver.reset();
        assert_eq!(driver.progress(), 0.0);
        assert!(driver.is_running());
    }
}
