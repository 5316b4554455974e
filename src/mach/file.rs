use super::print::COMMA;
use super::runtime::Flow;
use super::{eval, Runtime};
use crate::error;
use crate::lang::{atoi, Error, Keyword, Line, Text};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};

type Result<T> = std::result::Result<T, Error>;

/// ## The one data file a program may have open

#[derive(Debug)]
pub enum DiskFile {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

impl DiskFile {
    pub fn open(name: &str, mode: &str) -> Result<DiskFile> {
        let opened = match mode.bytes().next().map(|b| b.to_ascii_lowercase()) {
            Some(b'r') => File::open(name).map(|f| DiskFile::Reader(BufReader::new(f))),
            Some(b'w') => File::create(name).map(|f| DiskFile::Writer(BufWriter::new(f))),
            Some(b'a') => OpenOptions::new()
                .append(true)
                .create(true)
                .open(name)
                .map(|f| DiskFile::Writer(BufWriter::new(f))),
            _ => return Err(error!(BadFileMode)),
        };
        opened.map_err(|e| error!(FileNotFound; &e.to_string()))
    }

    pub fn is_reader(&self) -> bool {
        matches!(self, DiskFile::Reader(_))
    }

    pub fn is_writer(&self) -> bool {
        matches!(self, DiskFile::Writer(_))
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        match self {
            DiskFile::Writer(writer) => writer
                .write_all(s.as_bytes())
                .map_err(|e| error!(CreateError; &e.to_string())),
            DiskFile::Reader(_) => Err(error!(NoFileOpenForWrite)),
        }
    }

    /// An optional leading `-` and digits up to the first other byte,
    /// which is consumed. `None` once the file is exhausted.
    pub fn read_number(&mut self) -> Result<Option<i32>> {
        let reader = match self {
            DiskFile::Reader(reader) => reader,
            DiskFile::Writer(_) => return Err(error!(NoFileOpenForRead)),
        };
        let mut digits = String::new();
        let mut exhausted = true;
        for byte in reader.by_ref().bytes() {
            let byte = byte.map_err(|e| error!(ReadError; &e.to_string()))?;
            if byte == b'-' && digits.is_empty() {
                digits.push('-');
                continue;
            }
            if !byte.is_ascii_digit() {
                exhausted = false;
                break;
            }
            digits.push(char::from(byte));
        }
        if exhausted && digits.is_empty() {
            Ok(None)
        } else {
            Ok(Some(atoi(&digits)))
        }
    }

    pub fn close(self) -> Result<()> {
        match self {
            DiskFile::Writer(mut writer) => writer
                .flush()
                .map_err(|e| error!(CreateError; &e.to_string())),
            DiskFile::Reader(_) => Ok(()),
        }
    }
}

/// Index of the first byte after `keyword` and one following space.
fn after_keyword(text: &Text, keyword: Keyword) -> Result<usize> {
    let start = match text.find(keyword.as_str()) {
        Some(start) => start + keyword.as_str().len(),
        None => return Err(error!(BadFormat)),
    };
    if text.at(start) == b' ' {
        Ok(start + 1)
    } else {
        Ok(start)
    }
}

impl Runtime {
    pub(super) fn fileopen(&mut self, name: &str, mode: &str) -> Result<Flow> {
        let name = name.trim_matches('"');
        if name.is_empty() || mode.is_empty() {
            return Err(error!(FileOpenUsage));
        }
        if self.file.is_some() {
            return Err(error!(FileAlreadyOpen));
        }
        self.file = Some(DiskFile::open(name, mode)?);
        tracing::debug!(name, mode, "file opened");
        Ok(Flow::Continue)
    }

    pub(super) fn fileclose(&mut self) -> Result<Flow> {
        match self.file.take() {
            Some(file) => file.close()?,
            None => return Err(error!(FileNotOpen)),
        }
        Ok(Flow::Continue)
    }

    pub(super) fn filewrite(&mut self, line: &Line) -> Result<Flow> {
        if !self.file.as_ref().map_or(false, DiskFile::is_writer) {
            return Err(error!(NoFileOpenForWrite));
        }
        let text = Text::new(line.text());
        let mut p = after_keyword(&text, Keyword::FileWrite)?;
        let mut out = String::new();
        loop {
            match text.at(p) {
                b'\0' => break,
                b' ' | b';' => p += 1,
                b'\n' => {
                    if p == 0 || text.at(p - 1) != b';' {
                        out.push('\n');
                    }
                    break;
                }
                name if name.is_ascii_lowercase() && text.at(p + 1) == b'$' => {
                    out.push_str(self.var.fetch_text(name));
                    p += 2;
                }
                name if name.is_ascii_lowercase() => {
                    out.push_str(&self.var.fetch(name).to_string());
                    p += 1;
                }
                b'"' => {
                    p += 1;
                    let start = p;
                    while text.at(p) != b'"' {
                        if p >= text.len() {
                            return Err(error!(UnterminatedString));
                        }
                        p += 1;
                    }
                    out.push_str(text.slice(start, p));
                    p += 1;
                }
                b',' => {
                    out.push_str(COMMA);
                    p += 1;
                }
                b'@' => {
                    let start = p;
                    while text.at(p) != b')' {
                        if p >= text.len() {
                            return Err(error!(MissingParen));
                        }
                        p += 1;
                    }
                    p += 1;
                    out.push_str(&eval(&self.var, text.slice(start, p))?.to_string());
                }
                _ => return Err(error!(BadCharInLineNumber)),
            }
        }
        if let Some(file) = self.file.as_mut() {
            file.write_str(&out)?;
        }
        Ok(Flow::Continue)
    }

    pub(super) fn fileread(&mut self, line: &Line) -> Result<Flow> {
        let file = match self.file.as_mut() {
            Some(file) if file.is_reader() => file,
            _ => return Err(error!(NoFileOpenForRead)),
        };
        let text = Text::new(line.text());
        let mut p = after_keyword(&text, Keyword::FileRead)?;
        loop {
            match text.at(p) {
                b'\n' | b'\0' => return Ok(Flow::Continue),
                b',' | b' ' => p += 1,
                name if name.is_ascii_lowercase() => match file.read_number()? {
                    Some(value) => {
                        self.var.store(name, value);
                        p += 1;
                    }
                    None => {
                        self.var.store(name, -1);
                        return Ok(Flow::Continue);
                    }
                },
                _ => return Err(error!(BadCharInLineNumber)),
            }
        }
    }
}
