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
//! The locale-aware emoji data from [emojibase](https://emojibase.dev), in its compact form
//! (`<locale>/compact.json`), together with the shortcode datasets
//! (`<locale>/shortcodes/<preset>.json`) that can be joined into it.

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::emojis::hexcode;

/// A single entry of a compact emojibase dataset
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct CompactEmoji {
    #[serde(deserialize_with = "hexcode::deserialize")]
    pub hexcode: String,
    /// The localized display label. Older emojibase releases call it `annotation`.
    #[serde(default, alias = "annotation")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shortcode aliases, the first one being the preferred one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcodes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<CompactSkin>>,
}

/// A skin tone variant of a [CompactEmoji]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct CompactSkin {
    #[serde(deserialize_with = "hexcode::deserialize")]
    pub hexcode: String,
    #[serde(default, alias = "annotation")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcodes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
}

/// A shortcode dataset maps a hex code to one or more shortcodes
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Shortcodes {
    Single(String),
    Multiple(Vec<String>),
}

impl Shortcodes {
    pub fn iter(&self) -> impl Iterator<Item=&String> {
        match self {
            Shortcodes::Single(shortcode) => std::slice::from_ref(shortcode).iter(),
            Shortcodes::Multiple(shortcodes) => shortcodes.iter(),
        }
    }
}

/// One shortcode preset of a locale, e.g. `cldr` or `github`.
///
/// The keys are normalized when the dataset gets deserialized.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "HashMap<String, Shortcodes>")]
pub struct ShortcodesDataset(HashMap<String, Shortcodes>);

impl ShortcodesDataset {
    pub fn get(&self, hexcode: &str) -> Option<&Shortcodes> {
        self.0.get(hexcode)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Shortcodes>> for ShortcodesDataset {
    fn from(raw: HashMap<String, Shortcodes>) -> Self {
        Self(raw.into_iter()
            .map(|(hexcode, shortcodes)| (hexcode::normalize_hexcode(&hexcode), shortcodes))
            .collect())
    }
}

impl CompactEmoji {
    pub fn new(hexcode: &str, label: &str) -> Self {
        Self {
            hexcode: hexcode::normalize_hexcode(hexcode),
            label: label.to_owned(),
            ..Self::default()
        }
    }

    /// Adds the shortcodes of all datasets to this emoji and its skins.
    pub fn join_shortcodes(&mut self, datasets: &[ShortcodesDataset]) {
        if datasets.is_empty() {
            return;
        }
        self.shortcodes = Some(joined_shortcodes(self.shortcodes.take(), &self.hexcode, datasets));
        if let Some(skins) = self.skins.as_mut() {
            skins.iter_mut()
                .for_each(|skin| skin.shortcodes = Some(
                    joined_shortcodes(skin.shortcodes.take(), &skin.hexcode, datasets)
                ));
        }
    }
}

impl CompactSkin {
    pub fn new(hexcode: &str, label: &str) -> Self {
        Self {
            hexcode: hexcode::normalize_hexcode(hexcode),
            label: label.to_owned(),
            ..Self::default()
        }
    }
}

/// Joins the shortcodes of every dataset into each emoji.
///
/// The existing shortcodes of an emoji come first, followed by the ones from the datasets
/// in the given order. Duplicates are dropped, keeping the first occurrence.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::compact::{CompactEmoji, ShortcodesDataset, join_shortcodes};
///
/// let cldr: ShortcodesDataset = serde_json::from_str(r#"{"1F600": "grinning_face"}"#).unwrap();
/// let github: ShortcodesDataset = serde_json::from_str(r#"{"1f600": ["grinning", "grinning_face"]}"#).unwrap();
///
/// let joined = join_shortcodes(vec![CompactEmoji::new("1F600", "grinning face")], &[cldr, github]);
/// assert_eq!(joined[0].shortcodes, Some(vec![
///     String::from("grinning_face"),
///     String::from("grinning")
/// ]));
/// ```
pub fn join_shortcodes(mut emojis: Vec<CompactEmoji>, datasets: &[ShortcodesDataset]) -> Vec<CompactEmoji> {
    emojis.iter_mut()
        .for_each(|emoji| emoji.join_shortcodes(datasets));
    emojis
}

fn joined_shortcodes(existing: Option<Vec<String>>, hexcode: &str, datasets: &[ShortcodesDataset]) -> Vec<String> {
    let additional = datasets.iter()
        .filter_map(|dataset| dataset.get(hexcode))
        .flat_map(|shortcodes| shortcodes.iter().cloned());
    existing.unwrap_or_default()
        .into_iter()
        .chain(additional)
        .unique()
        .collect()
}
