use super::{ThriftEnum, ThriftStruct};

/// Result of parsing one or more Rust files
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Structs found
    pub structs: Vec<ThriftStruct>,
    /// Enums found
    pub enums: Vec<ThriftEnum>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: ParseResult) {
        self.structs.extend(other.structs);
        self.enums.extend(other.enums);
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.enums.is_empty()
    }
}
