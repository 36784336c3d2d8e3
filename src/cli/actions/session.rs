//! Toast display for a single CLI run: broadcaster, terminal renderer and the
//! wait for the toast to go away.

use crate::{
    cli::globals::GlobalArgs,
    notify::{Broadcaster, Subscription},
    toast::{terminal, Dismiss},
};
use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{debug, info};

pub struct ToastSession {
    broadcaster: Broadcaster,
    visible: watch::Receiver<bool>,
    _renderer: Subscription,
    _tracker: Subscription,
}

impl ToastSession {
    /// # Errors
    /// Returns an error when not running inside a tokio runtime.
    pub fn start(globals: &GlobalArgs) -> Result<Self> {
        let broadcaster = Broadcaster::on_current_runtime(globals.durations)
            .context("toast timers need a tokio runtime")?;

        let (visible_tx, visible) = watch::channel(false);
        let tracker = broadcaster.subscribe(move |current| {
            visible_tx.send_replace(current.is_some());
        });
        let renderer = broadcaster.subscribe(terminal::observer(globals.output));

        Ok(Self {
            broadcaster,
            visible,
            _renderer: renderer,
            _tracker: tracker,
        })
    }

    #[must_use]
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Returns once the toast is gone: auto-dismissed, or dismissed with Ctrl-C.
    /// A toast without auto-dismiss is left showing and this returns at once.
    ///
    /// # Errors
    /// Returns an error if the Ctrl-C handler cannot be installed.
    pub async fn wait_for_dismiss(mut self) -> Result<()> {
        let Some(current) = self.broadcaster.current() else {
            return Ok(());
        };
        if current.auto_dismiss_after().is_none() {
            info!(kind = %current.kind(), "toast stays until dismissed");
            return Ok(());
        }

        tokio::select! {
            changed = self.visible.wait_for(|visible| !*visible) => {
                changed.map(|_| ()).context("toast tracker closed")?;
                debug!("toast dismissed by timer");
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for ctrl-c")?;
                Dismiss::new(self.broadcaster.clone()).dismiss();
                debug!("toast dismissed by user");
            }
        }

        Ok(())
    }
}
