//! Application orchestration layer
//!
//! Wires configuration, clock, display surface and input together around a [`Refresher`].
//! The refresher owns the surface; the application only decides when the loop should end.

pub mod runtime;

use crate::clock::Clock;
use crate::config::ClockConfig;
use crate::display::{ColorTheme, DisplaySurface, PlainSurface, TerminalUI};
use crate::error::Result;
use crate::input::spawn_input_thread;
use crate::refresher::Refresher;
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How often the input thread wakes to check for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Build the surface the configuration asks for.
pub fn build_surface(config: &ClockConfig) -> Result<Box<dyn DisplaySurface>> {
    if config.plain {
        Ok(Box::new(
            PlainSurface::new(std::io::stdout()).show_date(config.show_date),
        ))
    } else {
        let theme = ColorTheme::from_name(config.theme);
        Ok(Box::new(
            TerminalUI::with_theme(theme)?.show_date(config.show_date),
        ))
    }
}

/// Application orchestrator
pub struct Application {
    refresher: Refresher<Arc<dyn Clock>, Box<dyn DisplaySurface>>,
    interactive: bool,
    run_for: Option<Duration>,
}

impl Application {
    /// Validate the configuration and wire the refresher to the given collaborators.
    pub fn new(
        config: &ClockConfig,
        clock: Arc<dyn Clock>,
        surface: Box<dyn DisplaySurface>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            refresher: Refresher::new(clock, surface).with_period(config.period()),
            interactive: !config.plain,
            run_for: None,
        })
    }

    /// Stop on its own after `limit`, in addition to the normal quit signals.
    pub fn with_run_limit(mut self, limit: Option<Duration>) -> Self {
        self.run_for = limit;
        self
    }

    /// Number of refreshes performed so far.
    pub fn ticks(&self) -> u64 {
        self.refresher.ticks()
    }

    /// Run until the user quits. The surface is cleaned up even when refreshing fails.
    pub async fn run(&mut self) -> Result<()> {
        self.refresher.surface_mut().initialize()?;

        let result = if self.interactive {
            self.run_interactive().await
        } else {
            let limit = self.run_for;
            self.refresher
                .start(runtime::with_limit(runtime::wait_for_ctrl_c(), limit))
                .await
        };

        let cleanup = self.refresher.surface_mut().cleanup();
        info!("exiting after {} refreshes", self.refresher.ticks());
        result.and(cleanup)
    }

    async fn run_interactive(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input = spawn_input_thread(tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let limit = self.run_for;
        let result = self
            .refresher
            .start(runtime::with_limit(runtime::wait_for_quit(rx), limit))
            .await;

        shutdown.store(true, Ordering::SeqCst);
        match tokio::task::spawn_blocking(move || input.join()).await {
            Ok(Ok(())) => {}
            Ok(Err(_)) => warn!("input thread panicked"),
            Err(err) => warn!("cannot join input thread: {}", err),
        }
        result
    }
}
