use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use crate::errors::DataError;
use crate::sources::{Dataset, EmojiDataSource};

/// Reads the datasets from installed packages, e.g. a `node_modules` directory
/// which contains `emojibase-data` and `emoji-datasource`.
#[derive(Clone, Debug)]
pub struct FsSource {
    base_dir: PathBuf,
}

impl FsSource {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir
        }
    }

    /// The location of a dataset within the base directory
    pub fn path_for(&self, dataset: &Dataset<'_>) -> PathBuf {
        self.base_dir
            .join(dataset.package())
            .join(dataset.file())
    }
}

impl EmojiDataSource for FsSource {
    fn request(&self, dataset: &Dataset<'_>) -> Result<Box<dyn Read + '_>, DataError> {
        let path = self.path_for(dataset);
        let file = File::open(&path)
            .map_err(|error| DataError::from_io(dataset, error))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
