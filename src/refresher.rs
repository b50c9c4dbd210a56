//! Periodic display refresher.
//!
//! On every tick the refresher reads the clock, derives a fresh [`DisplayTime`] and writes
//! each of its fields to the display surface. Nothing is carried over between ticks.
//!
//! Ticks come from a `tokio::time::interval` whose first tick completes immediately, so the
//! surface is populated as soon as [`Refresher::start`] is called. Refreshing is synchronous
//! inside the loop, which keeps invocations serialized; ticks that are missed because a
//! refresh ran long are skipped rather than replayed in a burst.

use crate::clock::Clock;
use crate::display::{DisplaySurface, DisplayTime};
use crate::error::{ClockError, Result};
use log::{debug, info, trace};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Default refresh cadence.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);

/// Lifecycle of a refresher. There is no way back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefresherState {
    Idle,
    Running,
}

/// Keeps a display surface in step with a clock.
pub struct Refresher<C, S> {
    clock: C,
    surface: S,
    period: Duration,
    state: RefresherState,
    ticks: u64,
}

impl<C: Clock, S: DisplaySurface> Refresher<C, S> {
    pub fn new(clock: C, surface: S) -> Self {
        Self {
            clock,
            surface,
            period: DEFAULT_PERIOD,
            state: RefresherState::Idle,
            ticks: 0,
        }
    }

    /// Override the refresh cadence.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> RefresherState {
        self.state
    }

    /// Number of completed refreshes.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Sample the clock once and write all five fields, then present the frame.
    pub fn refresh(&mut self) -> Result<DisplayTime> {
        let now = self.clock.now();
        let display = DisplayTime::from_datetime(&now);

        for (field, text) in display.fields() {
            trace!("{} <- {}", field.label(), text);
            self.surface.write_field(field, &text)?;
        }
        self.surface.present()?;

        self.ticks += 1;
        debug!("refresh #{}: {} {}", self.ticks, display, display.date());
        Ok(display)
    }

    /// Refresh now, then once per period until `shutdown` resolves.
    ///
    /// Errors from the surface end the loop and are returned to the caller.
    pub async fn start<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        if self.state == RefresherState::Running {
            return Err(ClockError::AlreadyStarted);
        }
        if self.period.is_zero() {
            return Err(ClockError::invalid_argument(
                "refresh period must be greater than zero",
            ));
        }

        self.state = RefresherState::Running;
        info!("refresher started with period {:?}", self.period);

        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                _ = ticker.tick() => {
                    self.refresh()?;
                }
                _ = &mut shutdown => {
                    info!("refresher stopped after {} ticks", self.ticks);
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::display::{DisplayField, MockDisplaySurface};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    struct FailingSurface;

    impl DisplaySurface for FailingSurface {
        fn write_field(&mut self, _field: DisplayField, _text: &str) -> Result<()> {
            Err(ClockError::ui("surface gone"))
        }
    }

    #[test]
    fn test_refresh_writes_every_field_once() {
        let mut refresher = Refresher::new(FixedClock::new(at(13, 0, 0)), MockDisplaySurface::new());
        let display = refresher.refresh().unwrap();

        assert_eq!(display.to_string(), "01:00:00 PM");
        let surface = refresher.surface();
        let written: Vec<_> = surface.writes.iter().map(|(f, _)| *f).collect();
        assert_eq!(written, DisplayField::ALL.to_vec());
        assert_eq!(surface.face.time_line(), "01:00:00 PM");
        assert_eq!(surface.face.date, "Sunday, October 18, 2026");
        assert_eq!(surface.present_count, 1);
        assert_eq!(refresher.ticks(), 1);
    }

    #[test]
    fn test_refresh_follows_clock() {
        let clock = Arc::new(FixedClock::new(at(11, 59, 59)));
        let mut refresher = Refresher::new(Arc::clone(&clock), MockDisplaySurface::new());

        assert_eq!(refresher.refresh().unwrap().to_string(), "11:59:59 AM");
        clock.advance(chrono::Duration::seconds(1));
        assert_eq!(refresher.refresh().unwrap().to_string(), "12:00:00 PM");
        assert_eq!(refresher.surface().face.meridiem, "PM");
    }

    #[test]
    fn test_refresh_propagates_surface_errors() {
        let mut refresher = Refresher::new(FixedClock::new(at(0, 0, 0)), FailingSurface);
        assert!(matches!(refresher.refresh(), Err(ClockError::UIError { .. })));
        assert_eq!(refresher.ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_writes_before_first_period() {
        let mut refresher = Refresher::new(FixedClock::new(at(0, 5, 9)), MockDisplaySurface::new());
        assert_eq!(refresher.state(), RefresherState::Idle);

        refresher
            .start(tokio::time::sleep(Duration::from_millis(1)))
            .await
            .unwrap();

        assert_eq!(refresher.state(), RefresherState::Running);
        assert_eq!(refresher.ticks(), 1);
        assert_eq!(refresher.surface().face.time_line(), "12:05:09 AM");
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_ticks_once_per_period() {
        let mut refresher = Refresher::new(FixedClock::new(at(9, 0, 0)), MockDisplaySurface::new());

        refresher
            .start(tokio::time::sleep(Duration::from_millis(5_500)))
            .await
            .unwrap();

        // t = 0, 1, 2, 3, 4, 5 seconds
        assert_eq!(refresher.ticks(), 6);
        for field in DisplayField::ALL {
            assert_eq!(refresher.surface().writes_to(field), 6);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_period() {
        let mut refresher = Refresher::new(FixedClock::new(at(9, 0, 0)), MockDisplaySurface::new())
            .with_period(Duration::from_millis(250));

        refresher
            .start(tokio::time::sleep(Duration::from_millis(900)))
            .await
            .unwrap();

        // t = 0, 250, 500, 750 ms
        assert_eq!(refresher.ticks(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_is_rejected() {
        let mut refresher = Refresher::new(FixedClock::new(at(9, 0, 0)), MockDisplaySurface::new());
        refresher.start(std::future::ready(())).await.unwrap();

        let again = refresher.start(std::future::ready(())).await;
        assert!(matches!(again, Err(ClockError::AlreadyStarted)));
        assert_eq!(refresher.state(), RefresherState::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_rejected() {
        let mut refresher = Refresher::new(FixedClock::new(at(9, 0, 0)), MockDisplaySurface::new())
            .with_period(Duration::ZERO);

        let result = refresher.start(std::future::ready(())).await;
        assert!(matches!(result, Err(ClockError::InvalidArgument { .. })));
        assert_eq!(refresher.state(), RefresherState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_stops_on_surface_error() {
        let mut refresher = Refresher::new(FixedClock::new(at(9, 0, 0)), FailingSurface);
        let result = refresher.start(std::future::pending()).await;
        assert!(matches!(result, Err(ClockError::UIError { .. })));
    }
}
