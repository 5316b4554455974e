/// ## Raw line text
///
/// Statement handlers scan stored lines a byte at a time. Reading past
/// the end behaves like a newline-terminated C string: the first byte
/// past the end is `\n` and everything after that is NUL.

#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    text: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str) -> Text<'a> {
        Text { text }
    }

    pub fn at(&self, index: usize) -> u8 {
        match self.text.as_bytes().get(index) {
            Some(&byte) => byte,
            None if index == self.text.len() => b'\n',
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text.find(needle)
    }

    /// Index just past the first space at or after `start`.
    pub fn after_space(&self, start: usize) -> usize {
        match self.text.get(start..).and_then(|s| s.find(' ')) {
            Some(offset) => start + offset + 1,
            None => self.text.len(),
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.text.len());
        self.text.get(start.min(end)..end).unwrap_or("")
    }

    pub fn rest(&self, start: usize) -> &'a str {
        self.slice(start, self.text.len())
    }
}

/// Leading whitespace, an optional sign, then leading digits.
/// Anything unparsable is zero.
pub fn atoi(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i32 = 0;
    for byte in digits.bytes().take_while(|b| b.is_ascii_digit()) {
        value = value.wrapping_mul(10).wrapping_add(i32::from(byte - b'0'));
    }
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
