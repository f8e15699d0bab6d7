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
//! The sprite sheet index of [emoji-datasource](https://github.com/iamcal/emoji-data)
//! (`emoji.json`). It is the same for every locale.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::emojis::hexcode;

/// The position of one emoji on the sprite sheet.
/// All the other fields emoji-datasource provides are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SheetEmoji {
    #[serde(deserialize_with = "hexcode::deserialize")]
    pub unified: String,
    pub sheet_x: u32,
    pub sheet_y: u32,
    /// Keyed by the skin tone(s), e.g. `1F3FB` or `1F3FB-1F3FC`.
    /// A sorted map keeps the order of the variants independent of the source file.
    #[serde(default)]
    pub skin_variations: Option<BTreeMap<String, SheetSkinVariation>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SheetSkinVariation {
    #[serde(deserialize_with = "hexcode::deserialize")]
    pub unified: String,
    pub sheet_x: u32,
    pub sheet_y: u32,
}

impl SheetEmoji {
    pub fn new(unified: &str, sheet_x: u32, sheet_y: u32) -> Self {
        Self {
            unified: hexcode::normalize_hexcode(unified),
            sheet_x,
            sheet_y,
            skin_variations: None,
        }
    }

    /// Adds a skin tone variant, e.g. for `tone = "1F3FB"`
    pub fn with_skin(mut self, tone: &str, unified: &str, sheet_x: u32, sheet_y: u32) -> Self {
        self.skin_variations
            .get_or_insert_with(BTreeMap::new)
            .insert(hexcode::normalize_hexcode(tone), SheetSkinVariation {
                unified: hexcode::normalize_hexcode(unified),
                sheet_x,
                sheet_y,
            });
        self
    }

    /// Iterates over the skin tone variants in the order of their tones
    pub fn skins(&self) -> impl Iterator<Item=&SheetSkinVariation> {
        self.skin_variations.iter()
            .flat_map(|variations| variations.values())
    }
}
