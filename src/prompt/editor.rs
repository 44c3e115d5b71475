use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Continue,
    Submit,
    Cancel,
}

/// One line of terminal input with completion over a suggestion list.
///
/// Tab completes the input (see [`complete`]), Up/Down step through the
/// suggestions that start with the input, Enter accepts the highlighted one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineEditor {
    input: String,
    /// In chars, not bytes.
    cursor: usize,
    /// Position in the current `matching` list.
    highlighted: Option<usize>,
}

impl LineEditor {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted<'a>(&self, suggestions: &'a [String]) -> Option<&'a str> {
        let index = self.highlighted?;
        matching(&self.input, suggestions).get(index).copied()
    }

    /// Greyed-out text shown after the input: the rest of the highlighted
    /// suggestion, or of the only suggestion still matching.
    pub fn hint<'a>(&self, suggestions: &'a [String]) -> Option<&'a str> {
        let candidate = match self.highlighted(suggestions) {
            Some(candidate) => candidate,
            None => match matching(&self.input, suggestions)[..] {
                [only] => only,
                _ => return None,
            },
        };
        candidate
            .strip_prefix(self.input.as_str())
            .filter(|rest| !rest.is_empty())
    }

    pub fn handle_key(&mut self, key: KeyEvent, suggestions: &[String]) -> EditOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return EditOutcome::Cancel,
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => return EditOutcome::Cancel,
            KeyCode::Char('u') if ctrl => self.set_input(String::new()),
            KeyCode::Enter => {
                self.accept_highlighted(suggestions);
                return EditOutcome::Submit;
            }
            KeyCode::Tab => {
                if !self.accept_highlighted(suggestions) {
                    if let Some(completed) = complete(&self.input, suggestions) {
                        self.set_input(completed);
                    }
                }
            }
            KeyCode::Up => self.move_highlight(suggestions, -1),
            KeyCode::Down => self.move_highlight(suggestions, 1),
            KeyCode::Char(ch) if !ctrl => {
                let at = self.byte_offset();
                self.input.insert(at, ch);
                self.cursor += 1;
                self.highlighted = None;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_offset();
                self.input.remove(at);
                self.highlighted = None;
            }
            KeyCode::Delete if self.cursor < self.char_len() => {
                let at = self.byte_offset();
                self.input.remove(at);
                self.highlighted = None;
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => {}
        }
        EditOutcome::Continue
    }

    fn accept_highlighted(&mut self, suggestions: &[String]) -> bool {
        match self.highlighted(suggestions).map(str::to_string) {
            Some(choice) => {
                self.set_input(choice);
                true
            }
            None => false,
        }
    }

    fn move_highlight(&mut self, suggestions: &[String], delta: isize) {
        let count = matching(&self.input, suggestions).len();
        if count == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None if delta < 0 => count - 1,
            None => 0,
            Some(current) => (current as isize + delta).rem_euclid(count as isize) as usize,
        });
    }

    fn set_input(&mut self, input: String) {
        self.cursor = input.chars().count();
        self.input = input;
        self.highlighted = None;
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map_or(self.input.len(), |(offset, _)| offset)
    }
}

/// Suggestions starting with `input`, in their original order.
pub fn matching<'a>(input: &str, suggestions: &'a [String]) -> Vec<&'a str> {
    suggestions
        .iter()
        .map(String::as_str)
        .filter(|suggestion| suggestion.starts_with(input))
        .collect()
}

/// Tab completion: the longest prefix shared by every suggestion matching
/// `input`. `None` when that adds nothing to `input`.
pub fn complete(input: &str, suggestions: &[String]) -> Option<String> {
    let matches = matching(input, suggestions);
    let (first, rest) = matches.split_first()?;
    let shared = rest
        .iter()
        .fold(first.len(), |len, other| len.min(common_prefix_len(first, other)));
    (shared > input.len()).then(|| first[..shared].to_string())
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, left), right)| left != right)
        .map_or(a.len().min(b.len()), |((offset, _), _)| offset)
}
