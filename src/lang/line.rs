use super::{Error, LineNumber, MAX_LINE_NUMBER};

/// ## One numbered line of program text
///
/// The text is kept exactly as it will be listed and saved, line number
/// included, without the terminating newline.

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
        if !s.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(error!(SyntaxError));
        }
        let token = s.split_whitespace().next().unwrap_or_default();
        let number = Line::leading_number(token)
            .filter(|n| (1..=u32::from(MAX_LINE_NUMBER)).contains(n))
            .ok_or_else(|| error!(LineNumberOutOfRange))?;
        if !token.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(error!(BadCharInLineNumber));
        }
        Ok(Line {
            number: number as LineNumber,
            text: Line::to_lower(s),
        })
    }

    fn leading_number(token: &str) -> Option<u32> {
        token
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .try_fold(0u32, |acc, b| {
                acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
            })
    }

    /// Lower case everything except text inside quotes or parentheses.
    fn to_lower(s: &str) -> String {
        let mut lower = true;
        s.chars()
            .map(|ch| {
                if ch == '"' || ch == '(' || ch == ')' {
                    lower = !lower;
                }
                if lower {
                    ch.to_ascii_lowercase()
                } else {
                    ch
                }
            })
            .collect()
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Everything after the line number.
    pub fn body(&self) -> &str {
        let start = self
            .text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| self.text.len());
        &self.text[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.body().trim().is_empty()
    }

    /// Whitespace separated fields, line number first.
    pub fn fields(&self) -> std::str::SplitWhitespace<'_> {
        self.text.split_whitespace()
    }

    /// Bytes used in the program store, newline included.
    pub fn size(&self) -> usize {
        self.text.len() + 1
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
