//! Terminal output.
//!
//! Two kinds of lines reach stdout: *data* (rendered JSON, type names, config
//! values), which is always written, and *status* lines (headers, tables,
//! notes), which `--quiet` mutes. Color is only ever applied in the `human`
//! format.

use std::io::{self, IsTerminal as _};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = args.output_format.resolve(io::stdout().is_terminal());
        let color = format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    /// Write a payload line. Never muted.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Write a status line.
    pub fn status(&self, text: &str) -> io::Result<()> {
        self.styled(text, Style::new())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.styled(text, Style::new().cyan().bold())
    }

    pub fn warning(&self, text: &str) -> io::Result<()> {
        self.styled(&format!("\u{26a0} {text}"), Style::new().yellow())
    }

    /// Dim `text` for inline use inside a status line.
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Style::new().dimmed())
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// The resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn styled(&self, text: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(text, style))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }
}
