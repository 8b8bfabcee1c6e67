//! Leaf entries

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A leaf entry with a fixed size and no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    /// Create a file. Fails with [`Error::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>, size: u64) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self { name, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.size)
    }
}
