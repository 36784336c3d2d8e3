use crate::cli::actions::{notify, submit, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Submit(args) => submit::execute(args).await,
        Action::Notify(args) => notify::execute(args).await,
    }
}
