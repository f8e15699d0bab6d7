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

use std::fmt::{Debug, Display, Formatter};
use std::io::Read;

use serde::de::DeserializeOwned;

use crate::emojis::compact::{CompactEmoji, ShortcodesDataset, join_shortcodes};
use crate::emojis::messages::MessagesDataset;
use crate::emojis::sheet::SheetEmoji;
use crate::errors::DataError;
use crate::locales;
use crate::sources::deserialize::DataFormat;

pub mod deserialize;
pub mod fs_source;
pub mod memory_source;
#[cfg(feature = "online")]
pub mod online;

/// The npm package with the locale-aware emojibase datasets
pub const EMOJIBASE_DATA: &str = "emojibase-data";
/// The npm package with the sprite sheet index
pub const EMOJI_DATASOURCE: &str = "emoji-datasource";
/// The package versions fetched when nothing else is configured
pub const DEFAULT_EMOJIBASE_VERSION: &str = "16.0.0";
pub const DEFAULT_DATASOURCE_VERSION: &str = "15.1.2";

/// The datasets a [EmojiDataSource] can provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset<'a> {
    /// `emojibase-data/<locale>/compact.json`
    Compact(&'a str),
    /// `emojibase-data/<locale>/shortcodes/<preset>.json`
    Shortcodes {
        locale: &'a str,
        preset: &'a str,
    },
    /// `emojibase-data/<locale>/messages.json`
    Messages(&'a str),
    /// `emoji-datasource/emoji.json`
    Sheet,
}

impl<'a> Dataset<'a> {
    /// The package this dataset is part of
    pub fn package(&self) -> &'static str {
        match self {
            Dataset::Compact(_) | Dataset::Shortcodes { .. } | Dataset::Messages(_) => EMOJIBASE_DATA,
            Dataset::Sheet => EMOJI_DATASOURCE,
        }
    }

    /// The path of the dataset within its package
    pub fn file(&self) -> String {
        match self {
            Dataset::Compact(locale) => format!("{}/compact.json", locale),
            Dataset::Shortcodes { locale, preset } => format!("{}/shortcodes/{}.json", locale, preset),
            Dataset::Messages(locale) => format!("{}/messages.json", locale),
            Dataset::Sheet => String::from("emoji.json"),
        }
    }

    /// The locale of this dataset, or `None` if it is the same for every locale
    pub fn locale(&self) -> Option<&'a str> {
        match *self {
            Dataset::Compact(locale) => Some(locale),
            Dataset::Shortcodes { locale, .. } => Some(locale),
            Dataset::Messages(locale) => Some(locale),
            Dataset::Sheet => None,
        }
    }
}

impl Display for Dataset<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.package(), self.file())
    }
}

/// Provides the raw datasets, e.g. from the file system, from memory or from the web.
///
/// Implementations only need to hand out readers over the raw files;
/// parsing and joining is done by the provided methods.
pub trait EmojiDataSource: Debug + Send + Sync {
    /// Returns a reader over the requested dataset.
    ///
    /// A dataset that doesn't exist should be reported using [DataError::not_found].
    fn request(&self, dataset: &Dataset<'_>) -> Result<Box<dyn Read + '_>, DataError>;

    /// Loads the compact emojibase dataset of a locale
    fn fetch_compact(&self, locale: &str) -> Result<Vec<CompactEmoji>, DataError> {
        load_dataset(self, &Dataset::Compact(locale))
    }

    /// Loads one shortcode preset (e.g. `cldr`) of a locale
    fn fetch_aliases(&self, locale: &str, preset: &str) -> Result<ShortcodesDataset, DataError> {
        load_dataset(self, &Dataset::Shortcodes { locale, preset })
    }

    /// Loads the localized group names of a locale
    fn fetch_messages(&self, locale: &str) -> Result<MessagesDataset, DataError> {
        load_dataset(self, &Dataset::Messages(locale))
    }

    /// Loads the sprite sheet index, which is the same for every locale
    fn fetch_sheet(&self) -> Result<Vec<SheetEmoji>, DataError> {
        load_dataset(self, &Dataset::Sheet)
    }

    /// Loads the compact dataset of a locale and joins the given shortcode presets into it
    fn fetch_compact_with_shortcodes(&self, locale: &str, presets: &[String]) -> Result<Vec<CompactEmoji>, DataError> {
        let emojis = self.fetch_compact(locale)?;
        let shortcodes = presets.iter()
            .map(|preset| self.fetch_aliases(locale, preset))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(join_shortcodes(emojis, &shortcodes))
    }
}

/// Requests a dataset from a source and deserializes it.
///
/// Locales the data provider doesn't support are rejected without asking the source.
pub fn load_dataset<S, T>(source: &S, dataset: &Dataset<'_>) -> Result<T, DataError>
    where S: EmojiDataSource + ?Sized,
          T: DeserializeOwned {
    if let Some(locale) = dataset.locale() {
        if !locales::is_supported(locale) {
            return Err(DataError::not_found(dataset));
        }
    }
    let reader = source.request(dataset)?;
    debug!("Loading {}", dataset);
    DataFormat::Json
        .deserialize(reader)
        .map_err(|error| DataError::malformed(dataset, error))
}
