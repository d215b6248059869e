use crate::types::StatusCodeEntry;
use colored::Colorize;

/// How the status code number is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    Plain,
    #[default]
    Decorated,
}

impl OutputStyle {
    pub fn from_plain_flag(plain: bool) -> Self {
        if plain {
            Self::Plain
        } else {
            Self::Decorated
        }
    }
}

/// Render one entry as a three line block followed by a blank line
pub fn render(entry: &StatusCodeEntry, style: OutputStyle) -> String {
    let code = match style {
        OutputStyle::Plain => entry.code.to_string(),
        OutputStyle::Decorated => entry.code.to_string().bold().to_string(),
    };

    format!(
        "Status code {code}\nMessage: {}\nCode explanation: {}\n\n",
        entry.short, entry.long
    )
}

pub fn render_all(entries: &[StatusCodeEntry], style: OutputStyle) -> String {
    entries
        .iter()
        .map(|entry| render(entry, style))
        .collect()
}
