use super::Address;
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Lines are kept in ascending line number order. Capacity is counted in
/// bytes of program text, one newline per line, so `used` always matches
/// what a save would write.

#[derive(Debug, Clone)]
pub struct Listing {
    source: BTreeMap<LineNumber, Line>,
    used: usize,
    capacity: usize,
}

impl Default for Listing {
    fn default() -> Listing {
        Listing::new(65536)
    }
}

impl Listing {
    pub fn new(capacity: usize) -> Listing {
        Listing {
            source: BTreeMap::new(),
            used: 0,
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.source.clear();
        self.used = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn free(&self) -> usize {
        self.capacity.saturating_sub(self.used)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    pub fn highest_line_number(&self) -> LineNumber {
        self.source.keys().next_back().copied().unwrap_or(0)
    }

    pub fn find_line(&self, number: LineNumber) -> Option<Address> {
        if self.source.contains_key(&number) {
            Some(number)
        } else {
            None
        }
    }

    /// Address of line `number`, or of whatever follows it when `want_next`
    /// is set. The line itself must exist either way.
    pub fn resolve_line_address(&self, number: LineNumber, want_next: bool) -> Result<Address> {
        match self.find_line(number) {
            Some(address) if want_next => Ok(address + 1),
            Some(address) => Ok(address),
            None => Err(error!(LineNotFound)),
        }
    }

    /// The first line at or after `address`.
    pub fn line_at(&self, address: Address) -> Option<&Line> {
        self.source.range(address..).next().map(|(_, line)| line)
    }

    /// Insert, replace, or (for an empty body) delete a line.
    pub fn insert_line(&mut self, line: Line) -> Result<()> {
        let number = line.number();
        let replaced = self.source.get(&number).map_or(0, Line::size);
        let grown = self.used - replaced + line.size();
        if !line.is_empty() && grown > self.capacity.saturating_sub(1) {
            return Err(error!(OutOfMemory));
        }
        if let Some(old) = self.source.remove(&number) {
            self.used -= old.size();
            tracing::trace!(number, "line removed");
        }
        if line.is_empty() {
            return Ok(());
        }
        self.used += line.size();
        self.source.insert(number, line);
        tracing::trace!(number, used = self.used, "line stored");
        Ok(())
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        if s.trim().is_empty() {
            return Ok(());
        }
        let s: String = s.chars().filter(|&ch| ch != '\0').collect();
        self.insert_line(Line::new(&s)?)
    }

    /// Stored lines holding a NUL byte mean the store was corrupted.
    pub fn check_integrity(&self) -> Result<()> {
        match self.lines().find(|line| line.text().contains('\0')) {
            Some(line) => Err(error!(CorruptProgram, line.number())),
            None => Ok(()),
        }
    }

    /// Program text exactly as saved, each line newline terminated.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
