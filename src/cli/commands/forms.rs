use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_FORGOT_PASSWORD: &str = "forgot-password";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_STATUS: &str = "status";
pub const ARG_DETAIL: &str = "detail";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Email address typed into the form")
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Password typed into the form")
        .env("PORTAL_PASSWORD")
        .hide_env_values(true)
}

// The server side is not part of this tool; its answer is replayed from flags.
fn with_response_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_STATUS)
                .long("status")
                .help("HTTP status the server answers with, 0 when it cannot be reached")
                .default_value("200")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DETAIL)
                .long("detail")
                .help("Error detail the server includes in a failed response"),
        )
}

#[must_use]
pub fn login() -> Command {
    with_response_args(
        Command::new(CMD_LOGIN)
            .about("Submit the sign-in form")
            .arg(email())
            .arg(password()),
    )
}

#[must_use]
pub fn register() -> Command {
    with_response_args(
        Command::new(CMD_REGISTER)
            .about("Submit the account registration form")
            .arg(
                Arg::new(ARG_NAME)
                    .short('n')
                    .long("name")
                    .help("Full name typed into the form"),
            )
            .arg(email())
            .arg(password())
            .arg(
                Arg::new(ARG_CONFIRM_PASSWORD)
                    .long("confirm-password")
                    .help("Password confirmation typed into the form")
                    .env("PORTAL_CONFIRM_PASSWORD")
                    .hide_env_values(true),
            ),
    )
}

#[must_use]
pub fn forgot_password() -> Command {
    with_response_args(
        Command::new(CMD_FORGOT_PASSWORD)
            .about("Request a password reset email")
            .arg(email()),
    )
}
