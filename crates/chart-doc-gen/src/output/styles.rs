//! Terminal palette for diagnostics and `--help`.

use anstyle::{AnsiColor, Color, Effects, Style};

const BLUE: Option<Color> = Some(Color::Ansi(AnsiColor::Blue));
const RED: Option<Color> = Some(Color::Ansi(AnsiColor::Red));
const MAGENTA: Option<Color> = Some(Color::Ansi(AnsiColor::Magenta));

/// Red: errors.
pub(crate) const ERROR: Style = Style::new().fg_color(RED);

/// Dimmed: follow-up guidance after an error.
pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

/// Section titles in help output, Helm blue.
const HEADING: Style = Style::new().fg_color(BLUE).effects(Effects::BOLD);

/// Flags such as `--values`.
const FLAG: Style = Style::new().fg_color(BLUE);

/// Value names such as `<FILE>`.
const PLACEHOLDER: Style = Style::new().fg_color(MAGENTA).effects(Effects::ITALIC);

/// Help and usage-error styling for the generator's flags.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADING)
        .usage(HEADING)
        .literal(FLAG)
        .placeholder(PLACEHOLDER)
        .error(ERROR.effects(Effects::BOLD))
        .valid(FLAG)
        .invalid(HINT.fg_color(RED))
}
