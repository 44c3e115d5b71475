//! Questions for values missing from the command line.

mod editor;
mod line;
mod terminal;

pub use editor::{EditOutcome, LineEditor, complete, matching};
pub use line::LinePrompt;
pub use terminal::TerminalPrompt;

use anyhow::{Result, bail};

const MAX_ATTEMPTS: usize = 3;

pub trait Prompter {
    /// Prints an informational line.
    fn say(&mut self, message: &str) -> Result<()>;

    /// Reads one trimmed answer. `suggestions` feed completion where the
    /// prompt supports it.
    fn answer(&mut self, question: &str, suggestions: &[String]) -> Result<String>;

    /// Asks until a non-empty answer is given.
    fn ask_required(&mut self, question: &str, label: &str) -> Result<String> {
        for _ in 0..MAX_ATTEMPTS {
            let answer = self.answer(question, &[])?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(&format!("{label} is a required value"))?;
        }
        bail!("no {label} given after {MAX_ATTEMPTS} attempts")
    }

    /// Asks until the answer is one of `choices`. An empty answer picks
    /// `default` when there is one.
    fn ask_choice(
        &mut self,
        question: &str,
        label: &str,
        choices: &[String],
        default: Option<&str>,
    ) -> Result<String> {
        let question = match default {
            Some(default) => format!("{question} [{default}]"),
            None => question.to_string(),
        };
        for _ in 0..MAX_ATTEMPTS {
            let answer = self.answer(&question, choices)?;
            let answer = match (answer.is_empty(), default) {
                (true, Some(default)) => default.to_string(),
                _ => answer,
            };
            if choices.contains(&answer) {
                return Ok(answer);
            }
            self.say(&format!("{label} must be one of: {}", choices.join(", ")))?;
        }
        bail!("no valid {label} given after {MAX_ATTEMPTS} attempts")
    }
}
