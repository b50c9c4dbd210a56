//! Shutdown signals for the refresh loop.

use crate::input::InputAction;
use log::{debug, warn};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Resolves when the user asks to quit or the input channel closes.
pub async fn wait_for_quit(mut rx: UnboundedReceiver<InputAction>) {
    while let Some(action) = rx.recv().await {
        match action {
            InputAction::Quit => return,
            InputAction::Resize { width, height } => {
                // ratatui resizes its buffers on the next draw
                debug!("terminal resized to {}x{}", width, height);
            }
            InputAction::NoAction => {}
        }
    }
    debug!("input channel closed");
}

/// Resolves on Ctrl-C. Never resolves if the signal handler cannot be installed.
pub async fn wait_for_ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}

/// Run `signal` to completion, or give up after `limit` when one is set.
pub async fn with_limit<F>(signal: F, limit: Option<Duration>)
where
    F: Future<Output = ()>,
{
    match limit {
        Some(limit) => {
            if tokio::time::timeout(limit, signal).await.is_err() {
                debug!("run duration of {:?} elapsed", limit);
            }
        }
        None => signal.await,
    }
}
