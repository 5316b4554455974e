use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Integer variables `a`..`z`, text variables `a$`..`z$` and the single
/// `@()` array.

#[derive(Debug, Default)]
pub struct Var {
    ints: [i32; 26],
    texts: [String; 26],
    array: Option<Vec<i32>>,
}

fn slot(name: u8) -> usize {
    debug_assert!(name.is_ascii_lowercase());
    usize::from(name - b'a') % 26
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.ints = [0; 26];
        for text in self.texts.iter_mut() {
            text.clear();
        }
        self.array = None;
    }

    pub fn fetch(&self, name: u8) -> i32 {
        self.ints[slot(name)]
    }

    pub fn store(&mut self, name: u8, value: i32) {
        self.ints[slot(name)] = value;
    }

    pub fn fetch_text(&self, name: u8) -> &str {
        &self.texts[slot(name)]
    }

    pub fn store_text(&mut self, name: u8, value: &str, max_len: usize) {
        let text = &mut self.texts[slot(name)];
        text.clear();
        text.extend(value.chars().take(max_len));
    }

    pub fn is_dimensioned(&self) -> bool {
        self.array.is_some()
    }

    /// Number of array elements, zero before DIM.
    pub fn array_len(&self) -> usize {
        self.array.as_ref().map_or(0, |a| a.len())
    }

    pub fn dimension_array(&mut self, len: usize) -> Result<()> {
        if self.array.is_some() {
            return Err(error!(ArrayRedimension));
        }
        self.array = Some(vec![0; len]);
        Ok(())
    }

    pub fn fetch_array(&self, index: i32) -> Result<i32> {
        let array = self.array.as_deref().unwrap_or(&[]);
        usize::try_from(index)
            .ok()
            .and_then(|i| array.get(i))
            .copied()
            .ok_or_else(|| error!(ArrayBounds))
    }

    pub fn store_array(&mut self, index: i32, value: i32) -> Result<()> {
        let element = self
            .array
            .as_mut()
            .and_then(|a| usize::try_from(index).ok().and_then(move |i| a.get_mut(i)))
            .ok_or_else(|| error!(ArrayIndexTooLarge))?;
        *element = value;
        Ok(())
    }
}
