//! Reading datasets and configuration files in JSON or YAML.

use std::fmt::{Debug, Display, Formatter};
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

/// An error while reading a file that still has to be deserialized
#[derive(Debug)]
pub enum DeserializeError {
    Io(std::io::Error),
    Serde(SerdeError)
}

impl Display for DeserializeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeserializeError::Io(error) => Display::fmt(error, f),
            DeserializeError::Serde(error) => Display::fmt(error, f)
        }
    }
}

impl std::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeserializeError::Io(error) => Some(error),
            DeserializeError::Serde(error) => Some(error)
        }
    }
}

impl From<std::io::Error> for DeserializeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<SerdeError> for DeserializeError {
    fn from(error: SerdeError) -> Self {
        Self::Serde(error)
    }
}


/// Erases the concrete serde error type so JSON and YAML errors can be handled alike
#[derive(Clone)]
pub struct SerdeError {
    debug: String,
    display: String
}

impl std::error::Error for SerdeError {}

impl Debug for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.debug, f)
    }
}

impl Display for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.display, f)
    }
}

impl<E> From<E> for SerdeError
    where E: serde::de::Error {
    fn from(error: E) -> Self {
        Self {
            debug: format!("{:?}", error),
            display: format!("{}", error)
        }
    }
}


/// The formats files are read in. Datasets are always JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl Default for DataFormat {
    fn default() -> Self {
        DataFormat::Json
    }
}

impl DataFormat {
    /// Picks the format by the extension of a file (`json`, `yaml` or `yml`, in any case).
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use emoji_sheet_mapper::sources::deserialize::DataFormat;
    ///
    /// assert_eq!(DataFormat::for_file(Path::new("config.YML")), Some(DataFormat::Yaml));
    /// assert_eq!(DataFormat::for_file(Path::new("emoji.json")), Some(DataFormat::Json));
    /// assert_eq!(DataFormat::for_file(Path::new("config.toml")), None);
    /// ```
    pub fn for_file(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        match extension.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None
        }
    }

    pub fn deserialize<R, T>(self, reader: R) -> Result<T, SerdeError>
        where R: Read, T: DeserializeOwned {
        match self {
            DataFormat::Json => serde_json::from_reader(reader).map_err(SerdeError::from),
            DataFormat::Yaml => serde_yaml::from_reader(reader).map_err(SerdeError::from),
        }
    }
}
