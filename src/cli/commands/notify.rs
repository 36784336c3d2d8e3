use crate::notify::Kind;
use clap::{builder::ValueParser, Arg, Command};

pub const CMD_NOTIFY: &str = "notify";

pub const ARG_KIND: &str = "kind";
pub const ARG_TEXT: &str = "text";
pub const ARG_DURATION_MS: &str = "duration-ms";

#[must_use]
pub fn validator_kind() -> ValueParser {
    ValueParser::from(move |kind: &str| -> std::result::Result<Kind, String> {
        kind.parse::<Kind>().map_err(|e| e.to_string())
    })
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_NOTIFY)
        .about("Show a toast directly")
        .arg(
            Arg::new(ARG_KIND)
                .short('k')
                .long("kind")
                .help("Toast kind: success, error, warning, info")
                .default_value("info")
                .value_parser(validator_kind()),
        )
        .arg(
            Arg::new(ARG_TEXT)
                .help("Message to show")
                .required(true),
        )
        .arg(
            Arg::new(ARG_DURATION_MS)
                .short('d')
                .long("duration-ms")
                .help("Milliseconds before the toast dismisses itself, 0 keeps it (default: per kind)")
                .value_parser(clap::value_parser!(u64)),
        )
}
