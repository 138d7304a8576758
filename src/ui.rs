//! Terminal output for gitrc.
//!
//! Messages carry a short label (`OK`, `WARN`, `ERROR`, `INFO`). Colors are
//! turned off, in priority order, by:
//! 1. `GITRC_COLOR=never`
//! 2. `NO_COLOR` (any value)
//! 3. `TERM=dumb`
//! 4. stdout not being a terminal, unless `GITRC_COLOR=always`

use anstream::{eprintln, println};
use anstyle::{AnsiColor, Color, Style};
use std::ffi::OsString;
use std::io::IsTerminal;

/// Selects the color mode
pub const COLOR_ENV: &str = "GITRC_COLOR";

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Label {
    Ok,
    Warn,
    Error,
    Info,
}

impl Label {
    fn text(self) -> &'static str {
        match self {
            Label::Ok => "OK",
            Label::Warn => "WARN",
            Label::Error => "ERROR",
            Label::Info => "INFO",
        }
    }

    fn color(self) -> AnsiColor {
        match self {
            Label::Ok => AnsiColor::Green,
            Label::Warn => AnsiColor::Yellow,
            Label::Error => AnsiColor::Red,
            Label::Info => AnsiColor::Cyan,
        }
    }
}

/// Resolved display settings
#[derive(Debug, Clone)]
pub struct Ui {
    pub color_enabled: bool,
}

impl Ui {
    /// Build from `GITRC_COLOR` and the process environment.
    /// Unparseable values fall back to auto.
    pub fn from_env() -> Self {
        let mode = std::env::var(COLOR_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self::new(mode)
    }

    pub fn new(mode: ColorMode) -> Self {
        let color_enabled = colors_wanted(mode, |key| std::env::var_os(key), std::io::stdout().is_terminal());

        // anstream strips escapes from everything printed below when off
        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self { color_enabled }
    }

    fn paint(&self, s: &str, style: Style) -> String {
        if self.color_enabled {
            format!("{style}{s}{style:#}")
        } else {
            s.to_string()
        }
    }

    fn labelled(&self, label: Label, msg: &str) -> String {
        let style = Style::new().fg_color(Some(Color::Ansi(label.color()))).bold();
        format!("{} {}", self.paint(label.text(), style), msg)
    }

    pub fn ok(&self, msg: impl AsRef<str>) {
        println!("{}", self.labelled(Label::Ok, msg.as_ref()));
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!("{}", self.labelled(Label::Warn, msg.as_ref()));
    }

    /// Errors go to stderr
    pub fn err(&self, msg: impl AsRef<str>) {
        eprintln!("{}", self.labelled(Label::Error, msg.as_ref()));
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!("{}", self.labelled(Label::Info, msg.as_ref()));
    }

    pub fn dim(&self, s: impl AsRef<str>) -> String {
        self.colored(s, AnsiColor::BrightBlack)
    }

    pub fn bold(&self, s: impl AsRef<str>) -> String {
        self.paint(s.as_ref(), Style::new().bold())
    }

    pub fn colored(&self, s: impl AsRef<str>, color: AnsiColor) -> String {
        self.paint(s.as_ref(), Style::new().fg_color(Some(Color::Ansi(color))))
    }

    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    pub fn newline(&self) {
        println!();
    }

    pub fn section(&self, title: impl AsRef<str>) {
        println!("{}", self.bold(title));
    }
}

fn colors_wanted<F>(mode: ColorMode, lookup: F, stdout_is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if mode == ColorMode::Never || lookup("NO_COLOR").is_some() {
        return false;
    }
    if lookup("TERM").is_some_and(|t| t == "dumb") {
        return false;
    }
    mode == ColorMode::Always || stdout_is_tty
}
