use std::io::{self, Stderr, Write};

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyEventKind},
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};

use super::{
    Prompter,
    editor::{EditOutcome, LineEditor},
};

/// Asks on the terminal, editing each answer in raw mode with completion
/// over the offered choices.
pub struct TerminalPrompt {
    output: Stderr,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            output: io::stderr(),
        }
    }

    fn draw(&mut self, question: &str, editor: &LineEditor, suggestions: &[String]) -> Result<()> {
        let prefix = format!("{question} ");
        queue!(
            self.output,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&prefix),
            Print(editor.input())
        )?;
        if let Some(hint) = editor.hint(suggestions) {
            queue!(self.output, PrintStyledContent(hint.dark_grey()))?;
        }
        let column = prefix.chars().count() + editor.cursor();
        queue!(self.output, MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX)))?;
        self.output.flush().context("failed to flush prompt")
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw mode for as long as the guard lives.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl Prompter for TerminalPrompt {
    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("failed to write prompt")
    }

    fn answer(&mut self, question: &str, suggestions: &[String]) -> Result<String> {
        let mut editor = LineEditor::default();
        let outcome = {
            let _raw = RawMode::enable()?;
            loop {
                self.draw(question, &editor, suggestions)?;
                let Event::Key(key) = event::read().context("failed to read from terminal")? else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match editor.handle_key(key, suggestions) {
                    EditOutcome::Continue => {}
                    done => break done,
                }
            }
        };

        self.draw(question, &editor, &[])?;
        writeln!(self.output).context("failed to write prompt")?;
        if outcome == EditOutcome::Cancel {
            bail!("prompt cancelled");
        }
        Ok(editor.input().trim().to_string())
    }
}
