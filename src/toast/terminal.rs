//! Terminal renderer: one line per delivered value.

use super::ToastView;
use crate::notify::{Kind, Notification};
use clap::builder::styling::{AnsiColor, Effects, Style};
use std::{
    io::{self, IsTerminal, Write},
    str::FromStr,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Human readable lines on stderr.
    #[default]
    Text,
    /// One JSON view model per line on stdout.
    Json,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

fn kind_style(kind: Kind) -> Style {
    let color = match kind {
        Kind::Success => AnsiColor::Green,
        Kind::Error => AnsiColor::Red,
        Kind::Warning => AnsiColor::Yellow,
        Kind::Info => AnsiColor::Blue,
    };
    color.on_default() | Effects::BOLD
}

/// Formats the slot value as a single line, colored when `color` is set.
#[must_use]
pub fn render_line(current: Option<&Notification>, color: bool) -> String {
    let Some(view) = ToastView::from_current(current) else {
        return "toast dismissed".to_string();
    };

    let glyph = view.style.icon.map_or('•', super::Icon::glyph);
    let tag = format!("{glyph} {}", view.kind);
    if color {
        let style = kind_style(view.kind);
        format!(
            "{}{tag}{} {}",
            style.render(),
            style.render_reset(),
            view.text
        )
    } else {
        format!("{tag} {}", view.text)
    }
}

/// Serializes the slot value; an empty slot becomes `null`.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(current: Option<&Notification>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ToastView::from_current(current))
}

/// Observer printing every delivered value in the chosen format.
pub fn observer(output: Output) -> impl Fn(Option<&Notification>) + Send + Sync + 'static {
    let color = io::stderr().is_terminal();
    move |current| match output {
        Output::Text => {
            let line = render_line(current, color);
            if let Err(err) = writeln!(io::stderr().lock(), "{line}") {
                warn!("failed to write toast: {err}");
            }
        }
        Output::Json => match render_json(current) {
            Ok(line) => {
                if let Err(err) = writeln!(io::stdout().lock(), "{line}") {
                    warn!("failed to write toast: {err}");
                }
            }
            Err(err) => warn!("failed to serialize toast: {err}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_has_glyph_kind_and_text() {
        let notification = Notification::new(Kind::Error, "Email not found");
        assert_eq!(
            render_line(Some(&notification), false),
            "✖ error Email not found"
        );
    }

    #[test]
    fn colored_line_wraps_tag_in_ansi() {
        let notification = Notification::new(Kind::Success, "Saved");
        let line = render_line(Some(&notification), true);
        assert!(line.starts_with("\u{1b}["));
        assert!(line.ends_with("Saved"));
        assert!(line.contains("✔ success"));
    }

    #[test]
    fn empty_slot_line() {
        assert_eq!(render_line(None, true), "toast dismissed");
    }

    #[test]
    fn json_for_empty_is_null() -> Result<(), serde_json::Error> {
        assert_eq!(render_json(None)?, "null");
        let line = render_json(Some(&Notification::new(Kind::Info, "hi")))?;
        assert!(line.contains("\"kind\":\"info\""));
        Ok(())
    }

    #[test]
    fn output_from_str() {
        assert_eq!("JSON".parse::<Output>(), Ok(Output::Json));
        assert_eq!("text".parse::<Output>(), Ok(Output::Text));
        assert!("yaml".parse::<Output>().is_err());
    }
}
