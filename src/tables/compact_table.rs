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
//! A lookup table from hex codes to the entries of a compact emojibase dataset.

use std::collections::HashMap;
use std::iter::FromIterator;

use crate::emojis::compact::CompactEmoji;
use crate::emojis::hexcode::{FE0F, strip_fe0f};

/// Maps hex codes to [CompactEmoji]s.
///
/// emojibase and emoji-datasource do not always agree on whether an `FE0F` belongs to a hex code
/// (e.g. `263A` vs. `263A-FE0F` for ☺️). A table created with [CompactTable::new_fe0f] therefore
/// falls back to comparing the hex codes without any `FE0F` if there is no exact match.
#[derive(Debug, Clone, Default)]
pub struct CompactTable {
    table: HashMap<String, CompactEmoji>,
    // Hex code without FE0F -> actual key in the table
    fe0f_table: HashMap<String, String>,
    ignore_fe0f: bool,
}

impl CompactTable {
    /// Creates a new, empty table that only finds exact matches
    pub fn new() -> Self {
        Self::new_fe0f(false)
    }

    pub fn new_fe0f(ignore_fe0f: bool) -> Self {
        Self {
            table: HashMap::new(),
            fe0f_table: HashMap::new(),
            ignore_fe0f,
        }
    }

    /// Inserts an emoji and returns the entry it replaced, if there was one for the same hex code.
    /// # Examples
    /// ```
    /// use emoji_sheet_mapper::tables::compact_table::CompactTable;
    /// use emoji_sheet_mapper::emojis::compact::CompactEmoji;
    ///
    /// let mut table = CompactTable::new();
    /// assert!(table.insert(CompactEmoji::new("1F600", "grinning")).is_none());
    /// // The last one wins
    /// let replaced = table.insert(CompactEmoji::new("1F600", "grinning face")).unwrap();
    /// assert_eq!(replaced.label, "grinning");
    /// assert_eq!(table.get("1F600").unwrap().label, "grinning face");
    /// ```
    pub fn insert(&mut self, emoji: CompactEmoji) -> Option<CompactEmoji> {
        if self.ignore_fe0f && emoji.hexcode.split('-').any(|codepoint| codepoint == FE0F) {
            self.fe0f_table.insert(strip_fe0f(&emoji.hexcode), emoji.hexcode.clone());
        }
        self.table.insert(emoji.hexcode.clone(), emoji)
    }

    /// Finds the entry for a normalized hex code.
    /// # Examples
    /// ```
    /// use emoji_sheet_mapper::tables::compact_table::CompactTable;
    /// use emoji_sheet_mapper::emojis::compact::CompactEmoji;
    ///
    /// let smiling = CompactEmoji::new("263A", "smiling face");
    ///
    /// let exact: CompactTable = vec![smiling.clone()].into_iter().collect();
    /// assert!(exact.get("263A-FE0F").is_none());
    ///
    /// let mut lenient = CompactTable::new_fe0f(true);
    /// lenient.insert(smiling);
    /// assert_eq!(lenient.get("263A-FE0F").unwrap().label, "smiling face");
    /// ```
    pub fn get(&self, hexcode: &str) -> Option<&CompactEmoji> {
        let exact = self.table.get(hexcode);
        if exact.is_some() || !self.ignore_fe0f {
            return exact;
        }
        let stripped = strip_fe0f(hexcode);
        self.table.get(&stripped)
            .or_else(|| self.fe0f_table.get(&stripped)
                .and_then(|key| self.table.get(key)))
    }

    pub fn contains(&self, hexcode: &str) -> bool {
        self.get(hexcode).is_some()
    }

    /// Returns the size of the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn ignores_fe0f(&self) -> bool {
        self.ignore_fe0f
    }
}

impl FromIterator<CompactEmoji> for CompactTable {
    fn from_iter<T: IntoIterator<Item=CompactEmoji>>(iter: T) -> Self {
        let mut table = CompactTable::new();
        table.extend(iter);
        table
    }
}

impl Extend<CompactEmoji> for CompactTable {
    fn extend<T: IntoIterator<Item=CompactEmoji>>(&mut self, iter: T) {
        iter.into_iter().for_each(|emoji| {
            self.insert(emoji);
        });
    }
}

impl<'a> Extend<&'a CompactEmoji> for CompactTable {
    fn extend<T: IntoIterator<Item=&'a CompactEmoji>>(&mut self, iter: T) {
        self.extend(iter.into_iter().cloned());
    }
}
