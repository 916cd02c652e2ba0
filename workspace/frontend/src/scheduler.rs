//! Repeating-timer ownership for the dashboard.
//!
//! Three independent loops drive the dashboard: the clock tick, the
//! live weather poll, and the prediction poll. The scheduler owns the
//! interval handles so they can be cancelled together, and hands out
//! generation snapshots that let in-flight fetches detect a logout that
//! happened while they were suspended.

use std::cell::RefCell;
use std::rc::Rc;

use common::SessionGeneration;
use gloo_timers::callback::Interval;

/// Clock tick period.
pub const CLOCK_INTERVAL_MS: u32 = 1_000;

/// Live weather poll period; also the only retry after a failed fetch.
pub const WEATHER_INTERVAL_MS: u32 = 5_000;

/// Prediction poll period.
pub const PREDICTION_INTERVAL_MS: u32 = 30_000;

/// Cloneable view of the scheduler's generation counter, captured by
/// async fetch closures.
#[derive(Clone, Default)]
pub struct GenerationHandle(Rc<RefCell<SessionGeneration>>);

impl GenerationHandle {
    /// Snapshot taken before dispatching a fetch.
    pub fn current(&self) -> u64 {
        self.0.borrow().current()
    }

    /// True while no stop has happened since `observed` was captured.
    pub fn is_current(&self, observed: u64) -> bool {
        self.0.borrow().is_current(observed)
    }

    fn invalidate(&self) {
        self.0.borrow_mut().invalidate();
    }
}

/// Owns the dashboard's repeating timers. At most one live handle per
/// kind; dropping a handle cancels the underlying interval.
#[derive(Default)]
pub struct PollScheduler {
    generation: GenerationHandle,
    clock: Option<Interval>,
    weather: Option<Interval>,
    prediction: Option<Interval>,
}

impl PollScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> GenerationHandle {
        self.generation.clone()
    }

    pub fn is_running(&self) -> bool {
        self.weather.is_some()
    }

    /// Starts all three loops, firing every callback once immediately
    /// so the dashboard fills without waiting a full period. Handles
    /// from a previous start are replaced.
    pub fn start<C, W, P>(&mut self, clock: C, weather: W, prediction: P)
    where
        C: Fn() + 'static,
        W: Fn() + 'static,
        P: Fn() + 'static,
    {
        self.stop_handles();

        clock();
        weather();
        prediction();

        self.clock = Some(Interval::new(CLOCK_INTERVAL_MS, clock));
        self.weather = Some(Interval::new(WEATHER_INTERVAL_MS, weather));
        self.prediction = Some(Interval::new(PREDICTION_INTERVAL_MS, prediction));
        log::debug!("Poll scheduler started (generation {})", self.generation.current());
    }

    /// Cancels all timers and invalidates the generation so responses
    /// still in flight are discarded on arrival. Idempotent.
    pub fn stop_all(&mut self) {
        let was_running = self.is_running();
        self.stop_handles();
        self.generation.invalidate();
        if was_running {
            log::debug!("Poll scheduler stopped");
        }
    }

    fn stop_handles(&mut self) {
        // Dropping an Interval clears the underlying browser timer.
        self.clock = None;
        self.weather = None;
        self.prediction = None;
    }
}
