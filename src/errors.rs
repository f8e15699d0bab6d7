/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */
//! The errors that can occur while loading datasets and generating the JSON files.

use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::PathBuf;

use itertools::Itertools;

use crate::generator::OutputCategory;
use crate::sources::Dataset;
use crate::sources::deserialize::{DeserializeError, SerdeError};

/// An error that occurs while fetching a dataset
#[derive(Debug)]
pub enum DataError {
    /// The data provider doesn't have this dataset for the requested locale
    MissingLocaleData {
        locale: String,
        dataset: String,
    },
    /// A locale-independent dataset is missing (e.g. the package isn't installed)
    MissingDataset(String),
    /// The dataset doesn't have the expected shape
    MalformedData {
        dataset: String,
        error: SerdeError,
    },
    /// Wrapper for [std::io::Error]
    Io {
        dataset: String,
        error: std::io::Error,
    },
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
}

impl DataError {
    /// The error for a dataset the source doesn't have
    pub fn not_found(dataset: &Dataset<'_>) -> Self {
        match dataset.locale() {
            Some(locale) => DataError::MissingLocaleData {
                locale: locale.to_owned(),
                dataset: dataset.to_string(),
            },
            None => DataError::MissingDataset(dataset.to_string()),
        }
    }

    /// Wraps an IO error; a missing file becomes a [DataError::MissingLocaleData] or a
    /// [DataError::MissingDataset].
    pub fn from_io(dataset: &Dataset<'_>, error: std::io::Error) -> Self {
        if error.kind() == ErrorKind::NotFound {
            Self::not_found(dataset)
        } else {
            DataError::Io {
                dataset: dataset.to_string(),
                error,
            }
        }
    }

    pub fn malformed(dataset: &Dataset<'_>, error: SerdeError) -> Self {
        DataError::MalformedData {
            dataset: dataset.to_string(),
            error,
        }
    }
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::MissingLocaleData { locale, dataset } =>
                write!(f, "No data for locale {} ({})", locale, dataset),
            DataError::MissingDataset(dataset) => write!(f, "Missing dataset {}", dataset),
            DataError::MalformedData { dataset, error } =>
                write!(f, "Malformed dataset {}: {}", dataset, error),
            DataError::Io { dataset, error } => write!(f, "Couldn't read {}: {}", dataset, error),
            #[cfg(feature = "online")]
            DataError::Reqwest(error) => write!(f, "Request failed: {}", error),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::MalformedData { error, .. } => Some(error),
            DataError::Io { error, .. } => Some(error),
            #[cfg(feature = "online")]
            DataError::Reqwest(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Reqwest(err)
    }
}


/// An error that occurs while generating the JSON files
#[derive(Debug)]
pub enum GenerationError {
    /// Fetching the data for one locale failed
    Data {
        category: OutputCategory,
        locale: String,
        error: DataError,
    },
    /// Creating a directory or writing a file failed
    FileSystem {
        path: PathBuf,
        error: std::io::Error,
    },
    /// Wrapper for [serde_json::Error]
    Serialization(serde_json::Error),
    /// The configuration file couldn't be loaded
    Config {
        path: PathBuf,
        error: DeserializeError,
    },
    /// Setting up the data source failed
    Source(DataError),
    /// Wrapper for multiple errors
    Multiple(Vec<GenerationError>),
}

impl GenerationError {
    /// Flattens nested [GenerationError::Multiple]s
    pub fn errors(&self) -> Vec<&GenerationError> {
        match self {
            GenerationError::Multiple(errors) => errors.iter()
                .flat_map(GenerationError::errors)
                .collect(),
            error => vec![error],
        }
    }
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Data { category, locale, error } =>
                write!(f, "Couldn't generate {}/{}.json: {}", category, locale, error),
            GenerationError::FileSystem { path, error } =>
                write!(f, "Couldn't write {}: {}", path.display(), error),
            GenerationError::Serialization(error) => write!(f, "Couldn't serialize JSON: {}", error),
            GenerationError::Config { path, error } =>
                write!(f, "Couldn't load the configuration {}: {}", path.display(), error),
            GenerationError::Source(error) => write!(f, "Couldn't set up the data source: {}", error),
            GenerationError::Multiple(errors) =>
                write!(f, "{} errors occurred:\n\t{}", errors.len(), errors.iter().join("\n\t")),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Data { error, .. } => Some(error),
            GenerationError::FileSystem { error, .. } => Some(error),
            GenerationError::Serialization(error) => Some(error),
            GenerationError::Config { error, .. } => Some(error),
            GenerationError::Source(error) => Some(error),
            GenerationError::Multiple(_) => None,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Serialization(err)
    }
}

impl From<Vec<GenerationError>> for GenerationError {
    fn from(errors: Vec<GenerationError>) -> Self {
        Self::Multiple(errors)
    }
}
