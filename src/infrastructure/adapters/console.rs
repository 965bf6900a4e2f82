//! 콘솔 입출력 어댑터(REPL 한 줄 입력, 화면 지우기).

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};

use crate::application::ports::{LineReader, Screen};

const PROMPT: &str = "> ";

/// stdin에서 한 줄씩 읽는다. 터미널이면 회색 프롬프트를 출력한다.
pub struct ConsoleLineReader {
    styled: bool,
}

impl Default for ConsoleLineReader {
    fn default() -> Self {
        Self {
            styled: supports_styled_output(),
        }
    }
}

impl ConsoleLineReader {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_prompt(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.styled {
            execute!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print(PROMPT),
                ResetColor
            )?;
        } else {
            print!("{PROMPT}");
        }
        stdout.flush()
    }
}

impl LineReader for ConsoleLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.print_prompt()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

/// 터미널 화면 지우기.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleScreen;

impl Screen for ConsoleScreen {
    fn clear(&self) -> Result<()> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Ok(());
        }
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }
}

fn supports_styled_output() -> bool {
    if !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스를 쓰지 않는다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_line_endings_only() {
        assert_eq!(trim_newline("api log \r\n".to_string()), "api log ");
        assert_eq!(trim_newline("\n".to_string()), "");
    }
}
