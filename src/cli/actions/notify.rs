use crate::{
    cli::{actions::session::ToastSession, globals::GlobalArgs},
    notify::Kind,
};
use anyhow::Result;
use std::time::Duration;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub kind: Kind,
    pub text: String,
    /// Overrides the per-kind default when set.
    pub duration: Option<Duration>,
}

/// Execute the notify action.
/// # Errors
/// Returns an error if the toast cannot be displayed.
pub async fn execute(args: Args) -> Result<()> {
    let session = ToastSession::start(&args.globals)?;
    let broadcaster = session.broadcaster();
    match args.duration {
        Some(duration) => broadcaster.show_for(args.kind, args.text, duration),
        None => broadcaster.show(args.kind, args.text),
    }
    session.wait_for_dismiss().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_default_duration_per_kind() -> Result<()> {
        let globals = GlobalArgs::default();
        let started = tokio::time::Instant::now();
        execute(Args {
            globals,
            kind: Kind::Warning,
            text: "Disk almost full".to_string(),
            duration: None,
        })
        .await?;
        assert!(started.elapsed() >= globals.durations.warning);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_duration() -> Result<()> {
        let started = tokio::time::Instant::now();
        execute(Args {
            globals: GlobalArgs::default(),
            kind: Kind::Error,
            text: "Short".to_string(),
            duration: Some(Duration::from_millis(20)),
        })
        .await?;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(20));
        assert!(elapsed < Duration::from_millis(8000));
        Ok(())
    }
}
