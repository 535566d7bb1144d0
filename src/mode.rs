// Start-up menu: pick the terminal table or the desktop widget

use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Terminal,
    Widget,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid choice {0:?}, expected 1 or 2")]
pub struct InvalidChoice(pub String);

impl FromStr for Mode {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Mode::Terminal),
            "2" => Ok(Mode::Widget),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

pub const MENU: &str = "Choose mode:\n1. Terminal table\n2. Desktop widget\n";
pub const PROMPT: &str = "Enter 1 or 2: ";

/// Print the menu and read one line. `Ok(None)` on end of input.
pub fn prompt_mode<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<Result<Mode, InvalidChoice>>> {
    write!(output, "{}{}", MENU, PROMPT)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.parse()))
}
