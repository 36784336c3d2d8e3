pub mod forms;
pub mod logging;
pub mod notify;
pub mod toast;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("portal")
        .about("Authentication portal forms and toast notifications")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(forms::login())
        .subcommand(forms::register())
        .subcommand(forms::forgot_password())
        .subcommand(notify::command());

    let command = toast::with_args(command);
    logging::with_args(command)
}
