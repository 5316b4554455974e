/// ## Interpreter limits

#[derive(Debug, Clone)]
pub struct Config {
    /// Program store capacity in bytes.
    pub buffer_size: usize,
    /// Largest array DIM will allocate.
    pub array_max: usize,
    /// GOSUB nesting depth.
    pub stack_depth: usize,
    /// Longest line the editor accepts.
    pub max_line_len: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            buffer_size: 65536,
            array_max: 65536,
            stack_depth: 10,
            max_line_len: 80,
        }
    }
}
