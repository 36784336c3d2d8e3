use crate::{notify::Durations, toast::terminal::Output};
use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_OUTPUT: &str = "output";
pub const ARG_SUCCESS_MS: &str = "success-ms";
pub const ARG_ERROR_MS: &str = "error-ms";
pub const ARG_WARNING_MS: &str = "warning-ms";
pub const ARG_INFO_MS: &str = "info-ms";

fn duration_arg(name: &'static str, env: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .env(env)
        .global(true)
        .default_value(default)
        .value_parser(clap::value_parser!(u64))
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_OUTPUT)
                .short('o')
                .long("output")
                .help("How toasts are rendered: text on stderr or JSON lines on stdout")
                .env("PORTAL_OUTPUT")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(duration_arg(
            ARG_SUCCESS_MS,
            "PORTAL_SUCCESS_MS",
            "Milliseconds a success toast stays visible",
            "5000",
        ))
        .arg(duration_arg(
            ARG_ERROR_MS,
            "PORTAL_ERROR_MS",
            "Milliseconds an error toast stays visible",
            "8000",
        ))
        .arg(duration_arg(
            ARG_WARNING_MS,
            "PORTAL_WARNING_MS",
            "Milliseconds a warning toast stays visible",
            "6000",
        ))
        .arg(duration_arg(
            ARG_INFO_MS,
            "PORTAL_INFO_MS",
            "Milliseconds an info toast stays visible",
            "5000",
        ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub output: Output,
    pub durations: Durations,
}

impl Options {
    /// # Errors
    /// Returns an error if the output format is unknown.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let output = matches
            .get_one::<String>(ARG_OUTPUT)
            .map_or(Ok(Output::default()), |value| value.parse())
            .map_err(|e| anyhow!(e))?;

        let defaults = Durations::default();
        let millis = |name: &str, fallback: Duration| {
            matches
                .get_one::<u64>(name)
                .map_or(fallback, |ms| Duration::from_millis(*ms))
        };

        Ok(Self {
            output,
            durations: Durations {
                success: millis(ARG_SUCCESS_MS, defaults.success),
                error: millis(ARG_ERROR_MS, defaults.error),
                warning: millis(ARG_WARNING_MS, defaults.warning),
                info: millis(ARG_INFO_MS, defaults.info),
            },
        })
    }
}
