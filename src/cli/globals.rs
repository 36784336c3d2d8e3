use crate::{notify::Durations, toast::terminal::Output};

/// Settings shared by every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalArgs {
    pub output: Output,
    pub durations: Durations,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(output: Output, durations: Durations) -> Self {
        Self { output, durations }
    }
}
