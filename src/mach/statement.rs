use super::runtime::{Flow, ForLoop, Halt};
use super::{eval, eval_logic, Address, Runtime};
use crate::error;
use crate::lang::{atoi, Error, Keyword, Line, LineNumber, Text, MAX_LINE_NUMBER};
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// Longest array index text LET will look at.
const MAX_INDEX_LEN: usize = 15;

impl Runtime {
    fn resolve(&self, target: &str) -> Result<Address> {
        let number = atoi(target);
        if number < 1 || number > i32::from(MAX_LINE_NUMBER) {
            return Err(error!(LineNotFound));
        }
        self.listing.resolve_line_address(number as LineNumber, false)
    }

    pub(super) fn goto(&mut self, target: &str) -> Result<Flow> {
        Ok(Flow::Jump(self.resolve(target)?))
    }

    pub(super) fn gosub(&mut self, current: LineNumber, target: &str) -> Result<Flow> {
        let return_address = self.listing.resolve_line_address(current, true)?;
        if self.stack.is_full() {
            return Err(error!(StackFull));
        }
        let address = self.resolve(target)?;
        self.stack.push(return_address)?;
        Ok(Flow::Jump(address))
    }

    pub(super) fn r#return(&mut self) -> Result<Flow> {
        Ok(Flow::Jump(self.stack.pop()?))
    }

    pub(super) fn dim(&mut self, size: &str) -> Result<Flow> {
        if self.var.is_dimensioned() {
            return Err(error!(ArrayRedimension));
        }
        let size = eval(&self.var, size).map_err(|_| error!(ArraySizeError))?;
        if size < 1 {
            return Err(error!(DimNoAction));
        }
        if size as usize > self.config.array_max {
            return Err(error!(ArraySizeError));
        }
        self.var.dimension_array(size as usize)?;
        Ok(Flow::Continue)
    }

    pub(super) fn sleep(&mut self, seconds: &str) -> Result<Flow> {
        match atoi(seconds) {
            n if n > 0 => Ok(Flow::Sleep(Duration::from_secs(n as u64))),
            _ => Ok(Flow::Continue),
        }
    }

    pub(super) fn delay(&mut self, millis: &str) -> Result<Flow> {
        let millis = match millis.bytes().next() {
            Some(name) if name.is_ascii_lowercase() => self.var.fetch(name),
            _ => atoi(millis),
        };
        if millis > 0 {
            Ok(Flow::Sleep(Duration::from_millis(millis as u64)))
        } else {
            Ok(Flow::Continue)
        }
    }

    pub(super) fn r#let(&mut self, line: &Line) -> Result<Flow> {
        let text = Text::new(line.text());
        let mut p = match text.find(Keyword::Let.as_str()) {
            Some(start) => text.after_space(start),
            None => return Err(error!(BadFormat)),
        };
        loop {
            match text.at(p) {
                b'\n' | b'\0' => return Ok(Flow::Continue),
                b',' | b' ' => p += 1,
                name if name.is_ascii_lowercase() => {
                    if text.at(p + 1) == b'$' {
                        p = self.let_text(&text, p)?;
                        continue;
                    }
                    if text.at(p + 1) != b'=' {
                        return Err(error!(SyntaxError));
                    }
                    let value = eval(&self.var, text.rest(p + 2))?;
                    self.var.store(name, value);
                    while !matches!(text.at(p), b'\n' | b'\0' | b',' | b' ') {
                        p += 1;
                    }
                }
                b'@' => {
                    p += 1;
                    if text.at(p) != b'(' {
                        return Err(error!(BadArray));
                    }
                    p += 1;
                    let start = p;
                    while text.at(p) != b')' {
                        if p - start > MAX_INDEX_LEN {
                            return Err(error!(ArrayTooBig));
                        }
                        if p >= text.len() {
                            return Err(error!(MissingParen));
                        }
                        p += 1;
                    }
                    let index = eval(&self.var, text.slice(start, p))?;
                    if index < 0 || index as usize >= self.var.array_len() {
                        return Err(error!(ArrayIndexTooLarge));
                    }
                    p += 1;
                    if text.at(p) != b'=' {
                        return Err(error!(SyntaxError));
                    }
                    p += 1;
                    let value = eval(&self.var, text.rest(p))?;
                    self.var.store_array(index, value)?;
                    while !matches!(text.at(p), b'\n' | b'\0' | b',') {
                        p += 1;
                    }
                }
                _ => return Err(error!(SyntaxError)),
            }
        }
    }

    /// `v$="text"`, returning the index just past the closing quote.
    fn let_text(&mut self, text: &Text, p: usize) -> Result<usize> {
        if text.at(p + 2) != b'=' || text.at(p + 3) != b'"' {
            return Err(error!(SyntaxError));
        }
        let start = p + 4;
        let end = match text.rest(start).find('"') {
            Some(len) => start + len,
            None => return Err(error!(UnterminatedQuotes)),
        };
        self.var
            .store_text(text.at(p), text.slice(start, end), self.config.max_line_len);
        Ok(end + 1)
    }

    pub(super) fn r#if(&mut self, line: &Line) -> Result<Flow> {
        let mut fields = line.fields().skip(2);
        let expression = fields.next().unwrap_or_default();
        let action = fields.next().unwrap_or_default();
        let target = fields.next().unwrap_or_default();

        if eval_logic(&self.var, expression)? == 0 {
            return Ok(Flow::Continue);
        }
        match action {
            "then" | "goto" => self.goto(target),
            "gosub" => self.gosub(line.number(), target),
            "return" => self.r#return(),
            "stop" => Ok(Flow::Halt(Halt::Stop(line.number()))),
            _ => Err(error!(SyntaxError)),
        }
    }

    pub(super) fn r#for(&mut self, line: &Line) -> Result<Flow> {
        let fields: Vec<&str> = line.fields().skip(2).collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or_default();

        let assignment = field(0);
        let name = match assignment.bytes().next() {
            Some(name) if name.is_ascii_lowercase() => name,
            _ => return Err(error!(SyntaxError)),
        };
        let start = match assignment.find('=') {
            Some(index) => eval(&self.var, &assignment[index + 1..])?,
            None => return Err(error!(SyntaxError)),
        };
        self.var.store(name, start);

        if field(1) != "to" {
            return Err(error!(SyntaxError));
        }
        let to = eval(&self.var, field(2))?;
        let step = match field(3) {
            "" => 1,
            "step" => eval(&self.var, field(4))?,
            _ => return Err(error!(SyntaxError)),
        };

        self.for_loop = Some(ForLoop {
            var: name,
            to,
            step: if step == 0 { 1 } else { step },
            address: self.listing.resolve_line_address(line.number(), true)?,
        });
        Ok(Flow::Continue)
    }

    pub(super) fn next(&mut self, line: &Line) -> Result<Flow> {
        let name = match line.fields().nth(2).and_then(|f| f.bytes().next()) {
            Some(name) if name.is_ascii_lowercase() => name,
            _ => return Err(error!(UnknownVariable)),
        };
        let for_loop = match self.for_loop {
            Some(for_loop) if for_loop.var == name => for_loop,
            _ => return Err(error!(NextWithoutFor)),
        };
        let value = self.var.fetch(name).wrapping_add(for_loop.step);
        self.var.store(name, value);
        let finished = match for_loop.step {
            step if step > 0 => value > for_loop.to,
            step if step < 0 => value < for_loop.to,
            _ => return Err(error!(UnexpectedNext)),
        };
        if finished {
            self.for_loop = None;
            Ok(Flow::Continue)
        } else {
            Ok(Flow::Jump(for_loop.address))
        }
    }
}
