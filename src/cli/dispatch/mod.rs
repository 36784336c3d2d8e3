//! Maps validated CLI matches to the action to run.

use crate::{
    cli::{
        actions::{
            notify,
            submit::{self, FormInput},
            Action,
        },
        commands::{
            forms::{
                ARG_CONFIRM_PASSWORD, ARG_DETAIL, ARG_EMAIL, ARG_NAME, ARG_PASSWORD, ARG_STATUS,
                CMD_FORGOT_PASSWORD, CMD_LOGIN, CMD_REGISTER,
            },
            notify::{ARG_DURATION_MS, ARG_KIND, ARG_TEXT, CMD_NOTIFY},
            toast,
        },
        globals::GlobalArgs,
    },
    feedback::{SubmitFailure, STATUS_UNREACHABLE},
    notify::Kind,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::time::Duration;

fn text(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}

fn secret(matches: &ArgMatches, name: &str) -> SecretString {
    SecretString::from(text(matches, name))
}

/// Replayed server answer: any 2xx is a success.
fn response(matches: &ArgMatches) -> Result<(), SubmitFailure> {
    let status = matches.get_one::<u16>(ARG_STATUS).copied().unwrap_or(200);
    if (200..300).contains(&status) {
        return Ok(());
    }
    if status == STATUS_UNREACHABLE {
        return Err(SubmitFailure::unreachable());
    }
    Err(SubmitFailure::http(
        status,
        matches.get_one::<String>(ARG_DETAIL).cloned(),
    ))
}

fn submit(globals: GlobalArgs, matches: &ArgMatches, input: FormInput) -> Action {
    Action::Submit(submit::Args {
        globals,
        input,
        response: response(matches),
    })
}

/// # Errors
/// Returns an error if the subcommand is missing or its arguments are inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let (name, sub) = matches
        .subcommand()
        .context("missing subcommand")?;

    let options = toast::Options::parse(sub)?;
    let globals = GlobalArgs::new(options.output, options.durations);

    match name {
        CMD_LOGIN => Ok(submit(
            globals,
            sub,
            FormInput::Login {
                email: text(sub, ARG_EMAIL),
                password: secret(sub, ARG_PASSWORD),
            },
        )),
        CMD_REGISTER => Ok(submit(
            globals,
            sub,
            FormInput::Register {
                name: text(sub, ARG_NAME),
                email: text(sub, ARG_EMAIL),
                password: secret(sub, ARG_PASSWORD),
                confirm_password: secret(sub, ARG_CONFIRM_PASSWORD),
            },
        )),
        CMD_FORGOT_PASSWORD => Ok(submit(
            globals,
            sub,
            FormInput::ForgotPassword {
                email: text(sub, ARG_EMAIL),
            },
        )),
        CMD_NOTIFY => Ok(Action::Notify(notify::Args {
            globals,
            kind: sub.get_one::<Kind>(ARG_KIND).copied().unwrap_or(Kind::Info),
            text: sub
                .get_one::<String>(ARG_TEXT)
                .cloned()
                .context("missing required argument: <text>")?,
            duration: sub
                .get_one::<u64>(ARG_DURATION_MS)
                .map(|ms| Duration::from_millis(*ms)),
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::commands, toast::terminal::Output};
    use secrecy::ExposeSecret;

    fn clean_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("PORTAL_PASSWORD", None::<&str>),
                ("PORTAL_CONFIRM_PASSWORD", None::<&str>),
                ("PORTAL_OUTPUT", None::<&str>),
                ("PORTAL_SUCCESS_MS", None::<&str>),
                ("PORTAL_ERROR_MS", None::<&str>),
                ("PORTAL_WARNING_MS", None::<&str>),
                ("PORTAL_INFO_MS", None::<&str>),
            ],
            f,
        )
    }

    fn action(args: &[&str]) -> Result<Action> {
        let matches = commands::new().try_get_matches_from(args)?;
        handler(&matches)
    }

    #[test]
    fn test_login_unauthorized() -> Result<()> {
        clean_env(|| {
            let action = action(&[
                "portal", "login", "-e", "user@example.com", "-p", "secret1", "--status", "401",
            ])?;
            let Action::Submit(args) = action else {
                return Err(anyhow!("expected submit action"));
            };
            assert_eq!(args.response, Err(SubmitFailure::http(401, None)));
            match args.input {
                FormInput::Login { email, password } => {
                    assert_eq!(email, "user@example.com");
                    assert_eq!(password.expose_secret(), "secret1");
                }
                other => return Err(anyhow!("unexpected input: {other:?}")),
            }
            Ok(())
        })
    }

    #[test]
    fn test_register_conflict_with_detail() -> Result<()> {
        clean_env(|| {
            let action = action(&[
                "portal",
                "register",
                "--name",
                "Ada",
                "--email",
                "ada@example.com",
                "--password",
                "secret1",
                "--confirm-password",
                "secret1",
                "--status",
                "422",
                "--detail",
                "Password too common",
            ])?;
            let Action::Submit(args) = action else {
                return Err(anyhow!("expected submit action"));
            };
            assert_eq!(
                args.response,
                Err(SubmitFailure::http(
                    422,
                    Some("Password too common".to_string())
                ))
            );
            assert_eq!(args.input.kind(), crate::feedback::FormKind::Register);
            Ok(())
        })
    }

    #[test]
    fn test_unreachable_status() -> Result<()> {
        clean_env(|| {
            let action = action(&["portal", "forgot-password", "-e", "a@b.co", "--status", "0"])?;
            let Action::Submit(args) = action else {
                return Err(anyhow!("expected submit action"));
            };
            assert_eq!(args.response, Err(SubmitFailure::unreachable()));
            Ok(())
        })
    }

    #[test]
    fn test_success_by_default() -> Result<()> {
        clean_env(|| {
            let action = action(&["portal", "forgot-password", "-e", "a@b.co"])?;
            let Action::Submit(args) = action else {
                return Err(anyhow!("expected submit action"));
            };
            assert_eq!(args.response, Ok(()));
            assert_eq!(args.globals, GlobalArgs::default());
            Ok(())
        })
    }

    #[test]
    fn test_notify_action() -> Result<()> {
        clean_env(|| {
            let action = action(&[
                "portal",
                "notify",
                "--kind",
                "warning",
                "-d",
                "0",
                "Maintenance tonight",
                "--output",
                "json",
                "--warning-ms",
                "100",
            ])?;
            let Action::Notify(args) = action else {
                return Err(anyhow!("expected notify action"));
            };
            assert_eq!(args.kind, Kind::Warning);
            assert_eq!(args.text, "Maintenance tonight");
            assert_eq!(args.duration, Some(Duration::ZERO));
            assert_eq!(args.globals.output, Output::Json);
            assert_eq!(args.globals.durations.warning, Duration::from_millis(100));
            Ok(())
        })
    }

    #[test]
    fn test_notify_defaults() -> Result<()> {
        clean_env(|| {
            let action = action(&["portal", "notify", "hello"])?;
            let Action::Notify(args) = action else {
                return Err(anyhow!("expected notify action"));
            };
            assert_eq!(args.kind, Kind::Info);
            assert_eq!(args.duration, None);
            Ok(())
        })
    }
}
