use super::runtime::Flow;
use super::{eval, Runtime};
use crate::error;
use crate::lang::{atoi, Error, Keyword, Line, Text};

type Result<T> = std::result::Result<T, Error>;

/// Three spaces per comma in PRINT, INPUT and FILEWRITE.
pub const COMMA: &str = "   ";

impl Runtime {
    pub(super) fn print(&mut self, line: &Line) -> Result<Flow> {
        let text = Text::new(line.text());
        let mut p = match text.find(Keyword::Print.as_str()) {
            Some(start) => start + Keyword::Print.as_str().len(),
            None => return Err(error!(BadFormat)),
        };
        if text.at(p) == b'\n' {
            self.print_buffer.push('\n');
            return Ok(Flow::Continue);
        }
        loop {
            if p > text.len() {
                return Err(error!(UnterminatedLine));
            }
            match text.at(p) {
                b'@' if text.at(p + 1) == b'(' => {
                    p += 2;
                    let start = p;
                    while text.at(p) != b')' {
                        if p >= text.len() {
                            return Err(error!(MissingParen));
                        }
                        p += 1;
                    }
                    let index = eval(&self.var, text.slice(start, p))?;
                    let value = self.var.fetch_array(index)?;
                    self.print_buffer.push_str(&value.to_string());
                    p += 1;
                }
                b'\n' => {
                    if p == 0 || text.at(p - 1) != b';' {
                        self.print_buffer.push('\n');
                    }
                    return Ok(Flow::Continue);
                }
                b',' => {
                    self.print_buffer.push_str(COMMA);
                    p += 1;
                }
                b';' | b' ' => p += 1,
                b'"' => {
                    p += 1;
                    let start = p;
                    while text.at(p) != b'"' {
                        if p >= text.len() {
                            return Err(error!(UnterminatedLine));
                        }
                        p += 1;
                    }
                    self.print_buffer.push_str(text.slice(start, p));
                    p += 1;
                }
                name if name.is_ascii_lowercase() && text.at(p + 1) == b'$' => {
                    let value = self.var.fetch_text(name).to_string();
                    self.print_buffer.push_str(&value);
                    p += 2;
                }
                name if name.is_ascii_lowercase()
                    && matches!(text.at(p + 1), b',' | b';' | b'\n') =>
                {
                    self.print_buffer.push_str(&self.var.fetch(name).to_string());
                    p += 1;
                }
                _ => {
                    let start = p;
                    loop {
                        p += 1;
                        if matches!(text.at(p), b'\n' | b',' | b';') || p > text.len() {
                            break;
                        }
                    }
                    let value = eval(&self.var, text.slice(start, p))?;
                    self.print_buffer.push_str(&value.to_string());
                }
            }
        }
    }

    /// Prompts print as they are reached. At each variable the statement
    /// yields until `Runtime::input` supplies a line, then resumes from the
    /// same variable.
    pub(super) fn input_statement(&mut self, line: &Line) -> Result<Flow> {
        let text = Text::new(line.text());
        let mut p = match self.input_resume.take() {
            Some(resume) => resume,
            None => match text.find(Keyword::Input.as_str()) {
                Some(start) => text.after_space(start),
                None => return Err(error!(BadFormat)),
            },
        };
        loop {
            match text.at(p) {
                b'\n' | b'\0' => return Ok(Flow::Continue),
                b',' => {
                    self.print_buffer.push_str(COMMA);
                    p += 1;
                }
                b';' | b' ' => p += 1,
                b'"' => {
                    p += 1;
                    let start = p;
                    while text.at(p) != b'"' {
                        if p >= text.len() {
                            return Err(error!(UnterminatedQuotes));
                        }
                        p += 1;
                    }
                    self.print_buffer.push_str(text.slice(start, p));
                    p += 1;
                }
                name if name.is_ascii_lowercase() => {
                    let reply = match self.input.take() {
                        Some(reply) => reply,
                        None => return Ok(Flow::Input(p)),
                    };
                    if text.at(p + 1) == b'$' {
                        self.var.store_text(name, &reply, self.config.max_line_len);
                        p += 2;
                    } else {
                        self.var.store(name, atoi(&reply));
                        p += 1;
                    }
                }
                _ => return Err(error!(SyntaxError)),
            }
        }
    }
}
