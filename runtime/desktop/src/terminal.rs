use std::env;
use std::io::{self, IsTerminal, Stderr, Write};

use colored::{Color, Colorize};
use hud_console_common::{Content, ConsoleError, CssColor, OverlaySurface};

/// Status block redrawn in place on a terminal.
///
/// With ANSI enabled the previous block is erased before each draw and the
/// cursor stays on the last line; otherwise every draw is appended as its
/// own lines, which keeps logs and pipes readable.
pub struct TerminalSurface<W: Write> {
    out: W,
    ansi: bool,
    color: Option<Color>,
    lines: Vec<String>,
    lines_drawn: usize,
}

impl TerminalSurface<Stderr> {
    /// Status block on stderr, with ANSI redraws when stderr is a terminal.
    ///
    /// `colored` otherwise decides from stdout, so its override is set to
    /// follow stderr unless `NO_COLOR` is set.
    pub fn stderr() -> Self {
        let ansi = io::stderr().is_terminal();
        if ansi && env::var_os("NO_COLOR").is_none() {
            colored::control::set_override(true);
        }
        TerminalSurface::new(io::stderr(), ansi)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        TerminalSurface {
            out,
            ansi,
            color: None,
            lines: Vec::new(),
            lines_drawn: 0,
        }
    }

    /// Terminal colour applied to the text, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Lines of the last draw.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn draw(&mut self, lines: Vec<String>) -> Result<(), ConsoleError> {
        self.lines = lines;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), ConsoleError> {
        if self.ansi && self.lines_drawn > 0 {
            write!(self.out, "\r")?;
            if self.lines_drawn > 1 {
                write!(self.out, "\x1b[{}A", self.lines_drawn - 1)?;
            }
            write!(self.out, "\x1b[J")?;
        }

        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            match self.color {
                Some(color) if self.ansi => write!(self.out, "{}", line.as_str().color(color))?,
                _ => write!(self.out, "{line}")?,
            }
        }
        if !self.ansi {
            writeln!(self.out)?;
        }
        self.out.flush()?;

        self.lines_drawn = self.lines.len().max(1);
        Ok(())
    }
}

fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    text.lines().map(str::to_string).collect()
}

fn terminal_color(color: &CssColor) -> Result<Color, ConsoleError> {
    match color {
        CssColor::Hex { r, g, b } => Ok(Color::TrueColor { r: *r, g: *g, b: *b }),
        CssColor::Named(name) => name.parse::<Color>().map_err(|_| {
            ConsoleError::invalid_style("color", format!("no terminal colour named `{name}`"))
        }),
    }
}

impl<W: Write> OverlaySurface for TerminalSurface<W> {
    fn show(&mut self, content: &Content) -> Result<(), ConsoleError> {
        self.draw(split_lines(&content.to_plain_text()))
    }

    fn show_sections(&mut self, sections: &[(&str, &str)]) -> Result<(), ConsoleError> {
        let lines = sections
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>();
        self.draw(if lines.is_empty() { vec![String::new()] } else { lines })
    }

    fn set_color(&mut self, color: &CssColor) -> Result<(), ConsoleError> {
        self.color = Some(terminal_color(color)?);
        if self.ansi && self.lines_drawn > 0 {
            self.redraw()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        // Leave the cursor below the block.
        if self.ansi && self.lines_drawn > 0 {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }
}
