// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text rendering of raw messages: lowercase hex pairs separated by a single
//! space, e.g. `ff ff 00 1a 03`.

/// Render `bytes` as lowercase hex pairs separated by a single space
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| hex::encode([*byte]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex text into bytes. Whitespace anywhere in the input is ignored and
/// digits are case-insensitive. Characters are checked before the digit count,
/// and positions refer to characters of `text` as given.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let mut digits = String::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if !character.is_ascii_hexdigit() {
            return Err(HexError::InvalidCharacter {
                character,
                position,
            });
        }
        digits.push(character);
    }
    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    // Only ASCII digits are left, the only possible failure is the length
    hex::decode(&digits).map_err(|_| HexError::OddLength(digits.len()))
}

/// True when `text` is a non-empty, even count of hex digits once whitespace
/// is removed. Never fails.
pub fn looks_like_hex(text: &str) -> bool {
    let clean = strip_whitespace(text);
    !clean.is_empty() && clean.len() % 2 == 0 && clean.chars().all(|c| c.is_ascii_hexdigit())
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("empty hex string")]
    Empty,

    #[error("hex string must have an even number of digits (got {0})")]
    OddLength(usize),

    #[error("invalid hex character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
