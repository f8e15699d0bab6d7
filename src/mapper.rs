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
//! Converts the upstream datasets into the formats the web client loads.
//!
//! The sprite sheet decides which emojis exist (it's the only source for coordinates),
//! the compact dataset only contributes the localized shortcodes.

use std::collections::{BTreeMap, HashSet};

use crate::emojis::compact::CompactEmoji;
use crate::emojis::hexcode::display_emoji;
use crate::emojis::merged::MergedEmoji;
use crate::emojis::messages::{CategoryIndex, EmojiCategory, MessagesDataset};
use crate::emojis::sheet::SheetEmoji;
use crate::tables::compact_table::CompactTable;

/// Merges a compact dataset into the sheet dataset.
///
/// Every sheet entry results in exactly one output entry, in the order of the sheet.
/// A hex code that appears on the sheet more than once is only emitted for its first entry.
/// Compact entries without a counterpart on the sheet are dropped.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::compact::CompactEmoji;
/// use emoji_sheet_mapper::emojis::sheet::SheetEmoji;
/// use emoji_sheet_mapper::mapper::merge;
///
/// let mut grinning = CompactEmoji::new("1F600", "grinning face");
/// grinning.shortcodes = Some(vec![String::from("grinning")]);
/// let sheet = vec![SheetEmoji::new("1F600", 0, 0), SheetEmoji::new("1F601", 0, 1)];
///
/// let merged = merge(&[grinning], &sheet);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].labels, Some(vec![String::from("grinning")]));
/// assert_eq!(merged[1].labels, None);
/// ```
pub fn merge(compact: &[CompactEmoji], sheet: &[SheetEmoji]) -> Vec<MergedEmoji> {
    let mut table = CompactTable::new();
    table.extend(compact);
    merge_with_table(&table, sheet)
}

/// Same as [merge], but with an already built lookup table
/// (e.g. one that ignores `FE0F`, see [CompactTable::new_fe0f]).
pub fn merge_with_table(table: &CompactTable, sheet: &[SheetEmoji]) -> Vec<MergedEmoji> {
    let mut seen = HashSet::with_capacity(sheet.len());
    sheet.iter()
        .filter(|sheet_emoji| {
            let first = seen.insert(sheet_emoji.unified.as_str());
            if !first {
                warn!("Skipping repeated sheet entry {}", sheet_emoji.unified);
            }
            first
        })
        .map(|sheet_emoji| {
            let mut merged = MergedEmoji::from(sheet_emoji);
            merged.labels = table.get(&sheet_emoji.unified)
                .and_then(|compact| compact.shortcodes.clone());
            if merged.labels.is_none() {
                debug!("No shortcodes for {} ({})", sheet_emoji.unified,
                       display_emoji(&sheet_emoji.unified).unwrap_or_default());
            }
            merged
        })
        .collect()
}

/// Builds the flat hex code to label mapping of the `locales/<locale>.json` files.
///
/// Skin tone variants get their own entries. The result is sorted by hex code.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::compact::{CompactEmoji, CompactSkin};
/// use emoji_sheet_mapper::mapper::unicode_mapping;
///
/// let mut waving = CompactEmoji::new("1F44B", "waving hand");
/// waving.skins = Some(vec![CompactSkin::new("1F44B-1F3FB", "waving hand: light skin tone")]);
///
/// let mapping = unicode_mapping(&[waving]);
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping["1F44B-1F3FB"], "waving hand: light skin tone");
/// ```
pub fn unicode_mapping(compact: &[CompactEmoji]) -> BTreeMap<String, String> {
    compact.iter()
        .flat_map(|emoji| {
            let skins = emoji.skins.iter()
                .flatten()
                .map(|skin| (skin.hexcode.clone(), skin.label.clone()));
            std::iter::once((emoji.hexcode.clone(), emoji.label.clone()))
                .chain(skins)
        })
        .collect()
}

/// Groups the emojis of a compact dataset by their localized group names and maps every
/// secondary shortcode to the primary (first) one.
///
/// Emojis without shortcodes are left out. Every group of the messages dataset gets a category,
/// even if it is empty.
/// # Examples
/// ```
/// use emoji_sheet_mapper::emojis::compact::CompactEmoji;
/// use emoji_sheet_mapper::emojis::messages::{GroupMessage, MessagesDataset};
/// use emoji_sheet_mapper::mapper::category_index;
///
/// let mut grinning = CompactEmoji::new("1F600", "grinning face");
/// grinning.group = Some(0);
/// grinning.shortcodes = Some(vec![String::from("grinning_face"), String::from("grinning")]);
/// let messages = MessagesDataset {
///     groups: vec![GroupMessage::new("smileys-emotion", "smileys & emotion")],
///     ..MessagesDataset::default()
/// };
///
/// let index = category_index(&[grinning], &messages);
/// assert_eq!(index.categories[0].emojis, vec!["grinning_face"]);
/// assert_eq!(index.aliases["grinning"], "grinning_face");
/// ```
pub fn category_index(compact: &[CompactEmoji], messages: &MessagesDataset) -> CategoryIndex {
    let mut groups: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    let mut aliases = BTreeMap::new();
    for emoji in compact {
        let shortcodes = match emoji.shortcodes.as_ref() {
            Some(shortcodes) if !shortcodes.is_empty() => shortcodes,
            _ => continue,
        };
        let primary = &shortcodes[0];
        for alias in &shortcodes[1..] {
            aliases.insert(alias.clone(), primary.clone());
        }
        if let Some(group) = emoji.group {
            let emojis = groups.entry(group).or_insert_with(Vec::new);
            if !emojis.contains(&primary.as_str()) {
                emojis.push(primary);
            }
        }
    }

    let categories = messages.groups.iter()
        .enumerate()
        .map(|(index, group)| EmojiCategory {
            id: group.key.clone(),
            name: group.message.clone(),
            emojis: groups.get(&(index as u32))
                .map(|emojis| emojis.iter().map(|shortcode| shortcode.to_string()).collect())
                .unwrap_or_default(),
        })
        .collect();
    CategoryIndex {
        categories,
        aliases,
    }
}
