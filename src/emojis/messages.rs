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
//! The localized names of the emoji groups (`<locale>/messages.json`) and the category index
//! built from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The parts of an emojibase messages dataset this crate needs.
/// The position of a group in `groups` is the group number used by [crate::emojis::compact::CompactEmoji].
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MessagesDataset {
    #[serde(default)]
    pub groups: Vec<GroupMessage>,
    #[serde(default)]
    pub subgroups: Vec<GroupMessage>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GroupMessage {
    /// e.g. `smileys-emotion`
    pub key: String,
    /// The localized name
    pub message: String,
}

impl GroupMessage {
    pub fn new(key: &str, message: &str) -> Self {
        Self {
            key: key.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// One entry of `categories/<locale>.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EmojiCategory {
    pub id: String,
    pub name: String,
    /// The primary shortcodes of the emojis in this group, in dataset order
    pub emojis: Vec<String>,
}

/// The content of a `categories/<locale>.json` file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryIndex {
    pub categories: Vec<EmojiCategory>,
    /// Secondary shortcode -> primary shortcode
    pub aliases: BTreeMap<String, String>,
}
