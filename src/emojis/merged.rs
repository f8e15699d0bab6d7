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

use serde::{Deserialize, Serialize};

use crate::emojis::sheet::{SheetEmoji, SheetSkinVariation};

/// One entry of the `meta/<locale>.json` files: the sheet coordinates of an emoji together
/// with its localized shortcodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MergedEmoji {
    pub hexcode: String,
    pub x: u32,
    pub y: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<Vec<MergedSkin>>,
}

/// Skin tone variants only carry their position; labels are never propagated to them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MergedSkin {
    pub hexcode: String,
    pub x: u32,
    pub y: u32,
}

impl From<&SheetSkinVariation> for MergedSkin {
    fn from(variation: &SheetSkinVariation) -> Self {
        Self {
            hexcode: variation.unified.clone(),
            x: variation.sheet_x,
            y: variation.sheet_y,
        }
    }
}

impl From<&SheetEmoji> for MergedEmoji {
    /// Takes the position and the skin tone variants from the sheet; labels are left empty.
    fn from(emoji: &SheetEmoji) -> Self {
        let skins: Vec<_> = emoji.skins()
            .map(MergedSkin::from)
            .collect();
        Self {
            hexcode: emoji.unified.clone(),
            x: emoji.sheet_x,
            y: emoji.sheet_y,
            labels: None,
            skins: if skins.is_empty() { None } else { Some(skins) },
        }
    }
}
