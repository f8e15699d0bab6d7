use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::io::{Cursor, Read};

use crate::errors::DataError;
use crate::sources::{Dataset, EmojiDataSource};

/// Serves datasets that are already in memory, e.g. bundled with `include_bytes!`.
#[derive(Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the raw contents of a dataset
    pub fn insert<D: Into<Vec<u8>>>(&mut self, dataset: &Dataset<'_>, data: D) -> Option<Vec<u8>> {
        self.files.insert(dataset.to_string(), data.into())
    }

    pub fn with<D: Into<Vec<u8>>>(mut self, dataset: &Dataset<'_>, data: D) -> Self {
        self.insert(dataset, data);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Debug for MemorySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Memory Source")
            .field(&self.files.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EmojiDataSource for MemorySource {
    fn request(&self, dataset: &Dataset<'_>) -> Result<Box<dyn Read + '_>, DataError> {
        match self.files.get(&dataset.to_string()) {
            Some(data) => Ok(Box::new(Cursor::new(data.as_slice()))),
            None => Err(DataError::not_found(dataset)),
        }
    }
}
