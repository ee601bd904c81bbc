use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::application::SimulationState;
use crate::domain::{ConfigurationError, RenderError};
use crate::rendering::Renderer;

/// Fires [`SimulationState::tick`] on a fixed period.
///
/// Frame-driven hosts feed elapsed time into [`Scheduler::advance`]; headless
/// hosts hand control to [`Scheduler::run`]. Ticks never overlap: each one
/// completes before the next is considered.
#[derive(Clone, Debug)]
pub struct Scheduler {
    period: Duration,
    elapsed: Duration,
    running: bool,
}

impl Scheduler {
    /// New scheduler, started
    pub fn new(period: Duration) -> Result<Self, ConfigurationError> {
        if period.is_zero() {
            return Err(ConfigurationError::ZeroTickPeriod);
        }
        Ok(Self {
            period,
            elapsed: Duration::ZERO,
            running: true,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            info!("scheduler started");
        }
        self.running = true;
    }

    /// Stop issuing ticks. Accumulated time is discarded.
    pub fn stop(&mut self) {
        if self.running {
            info!("scheduler stopped");
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn toggle(&mut self) {
        if self.running { self.stop() } else { self.start() }
    }

    /// Account for `delta` of wall time and tick at most once.
    /// Returns whether a tick happened.
    pub fn advance(&mut self, delta: Duration, state: &mut SimulationState) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed += delta;
        if self.elapsed < self.period {
            return false;
        }

        state.tick();
        // Drop backlog beyond one period so a stalled host doesn't burst.
        self.elapsed = (self.elapsed - self.period).min(self.period);
        true
    }

    /// Render the current generation, then tick and render every period
    /// until `limit` more generations have been produced (forever if `None`).
    /// A stopped scheduler renders the current generation and returns.
    pub fn run<R: Renderer + ?Sized>(
        &mut self,
        state: &mut SimulationState,
        renderer: &mut R,
        limit: Option<u64>,
    ) -> Result<(), RenderError> {
        renderer.initialize(state.current_grid())?;
        renderer.render(state.current_grid(), state.current_generation())?;
        if !self.running {
            return Ok(());
        }

        let mut produced = 0;
        let mut deadline = Instant::now() + self.period;
        info!(period_ms = self.period.as_millis() as u64, ?limit, "running");

        while limit.is_none_or(|limit| produced < limit) {
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
            deadline += self.period;

            let generation = state.tick();
            renderer.render(state.current_grid(), generation)?;
            produced += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifeRule;

    fn state() -> SimulationState {
        SimulationState::new(4, 4, LifeRule::CONWAY).unwrap()
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            Scheduler::new(Duration::ZERO),
            Err(ConfigurationError::ZeroTickPeriod)
        ));
    }

    #[test]
    fn test_advance_ticks_once_per_period() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        let mut state = state();

        assert!(!scheduler.advance(Duration::from_millis(60), &mut state));
        assert!(scheduler.advance(Duration::from_millis(60), &mut state));
        assert_eq!(state.current_generation(), 1);

        // 20ms carried over from the previous call
        assert!(scheduler.advance(Duration::from_millis(80), &mut state));
        assert_eq!(state.current_generation(), 2);
    }

    #[test]
    fn test_large_delta_does_not_burst() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        let mut state = state();

        assert!(scheduler.advance(Duration::from_secs(5), &mut state));
        assert!(scheduler.advance(Duration::ZERO, &mut state));
        assert!(!scheduler.advance(Duration::ZERO, &mut state));
        assert_eq!(state.current_generation(), 2);
    }

    #[test]
    fn test_stopped_scheduler_never_ticks() {
        let mut scheduler = Scheduler::new(Duration::from_millis(10)).unwrap();
        let mut state = state();

        scheduler.toggle();
        assert!(!scheduler.is_running());
        assert!(!scheduler.advance(Duration::from_secs(1), &mut state));
        assert_eq!(state.current_generation(), 0);

        scheduler.start();
        assert!(scheduler.advance(Duration::from_millis(10), &mut state));
    }

    #[test]
    fn test_run_on_stopped_scheduler_returns_after_first_frame() {
        use crate::rendering::TextRenderer;

        let mut scheduler = Scheduler::new(Duration::from_secs(60)).unwrap();
        scheduler.stop();
        let mut state = state();
        let mut renderer = TextRenderer::new(Vec::new());

        scheduler.run(&mut state, &mut renderer, None).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.lines().next(), Some("Generation 0"));
        assert_eq!(state.current_generation(), 0);
        assert_eq!(scheduler.period(), Duration::from_secs(60));
    }
}
