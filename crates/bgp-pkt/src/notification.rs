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

//! Representations for BGP NOTIFICATION messages
//!
//! ```text
//! 0                   1                   2                   3
//! 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                                                               |
//! +                                                               +
//! |                           Marker                              |
//! +                                                               +
//! |                                                               |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          Length               |   Type (3)    | Error code    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! | Error subcode |   Data (variable)                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::{
    aux_data::AuxDataShape,
    iana::{BgpErrorNotificationCode, CeaseErrorSubCode},
};
use serde::{Deserialize, Serialize};

/// The fixed 19 octets every BGP message starts with. The marker is always
/// all ones and the type is always NOTIFICATION, so only the length is kept.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct NotificationHeader {
    length: u16,
}

impl NotificationHeader {
    pub const fn new(length: u16) -> Self {
        Self { length }
    }

    /// Total message length as declared on the wire
    pub const fn length(&self) -> u16 {
        self.length
    }
}

/// Shutdown Communication as defined by
/// [RFC9003](https://datatracker.ietf.org/doc/html/rfc9003#section-2)
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// | Error code 6  |    Subcode    |    Length     |     ...       \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+               /
/// \                                                               \
/// /                 ... Shutdown Communication ...                /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The text length is counted in UTF-8 octets and can't exceed
/// [`crate::wire::MAX_COMMUNICATION_LENGTH`], this is checked when writing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShutdownCommunication(String);

impl ShutdownCommunication {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in octets, which is what goes into the length prefix
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

/// Cease NOTIFICATION carrying a [`ShutdownCommunication`].
///
/// `sub_code` is kept as a raw octet: decoding accepts any Cease sub-code,
/// while writing only accepts the sub-codes listed in
/// [`CeaseErrorSubCode::SHUTDOWN_COMMUNICATION`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShutdownNotification {
    sub_code: u8,
    communication: ShutdownCommunication,
}

impl ShutdownNotification {
    pub const fn new(sub_code: u8, communication: ShutdownCommunication) -> Self {
        Self {
            sub_code,
            communication,
        }
    }

    pub const fn sub_code(&self) -> u8 {
        self.sub_code
    }

    pub const fn communication(&self) -> &ShutdownCommunication {
        &self.communication
    }

    pub fn message(&self) -> &str {
        self.communication.text()
    }

    /// Human readable sub-code, e.g. `Administrative Shutdown` or
    /// `Unknown (code=9)` for sub-codes that can't carry a communication
    pub fn sub_code_label(&self) -> String {
        match CeaseErrorSubCode::try_from(self.sub_code) {
            Ok(sub_code) if sub_code.carries_shutdown_communication() => sub_code.to_string(),
            _ => format!("Unknown (code={})", self.sub_code),
        }
    }

    pub fn into_parts(self) -> (u8, ShutdownCommunication) {
        (self.sub_code, self.communication)
    }
}

/// NOTIFICATION with any error code and sub-code, the data is kept opaque.
/// The expected layout of the data is looked up with [`Self::aux_data_shape`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct UniversalNotification {
    error_code: u8,
    sub_code: u8,
    data: Vec<u8>,
}

impl UniversalNotification {
    pub const fn new(error_code: u8, sub_code: u8, data: Vec<u8>) -> Self {
        Self {
            error_code,
            sub_code,
            data,
        }
    }

    pub const fn error_code(&self) -> u8 {
        self.error_code
    }

    pub const fn sub_code(&self) -> u8 {
        self.sub_code
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_length(&self) -> usize {
        self.data.len()
    }

    /// IANA description of the error code or `Unknown`
    pub fn error_name(&self) -> &'static str {
        BgpErrorNotificationCode::try_from(self.error_code)
            .map(Into::into)
            .unwrap_or("Unknown")
    }

    /// IANA description of the sub-code under the error code or `Unknown`
    pub fn sub_code_name(&self) -> &'static str {
        BgpErrorNotificationCode::try_from(self.error_code)
            .ok()
            .and_then(|code| code.sub_code_name(self.sub_code))
            .unwrap_or("Unknown")
    }

    pub fn aux_data_shape(&self) -> Option<AuxDataShape> {
        AuxDataShape::lookup(self.error_code, self.sub_code)
    }

    /// Whether the data is laid out as an RFC9003 Shutdown Communication: a
    /// Cease with sub-code 2 or 4 whose first data octet is the length of the
    /// rest of the data.
    pub fn has_shutdown_communication(&self) -> bool {
        let sub_code_allows = BgpErrorNotificationCode::try_from(self.error_code)
            .is_ok_and(|code| code == BgpErrorNotificationCode::Cease)
            && CeaseErrorSubCode::try_from(self.sub_code)
                .is_ok_and(|sub_code| sub_code.carries_shutdown_communication());
        match self.data.split_first() {
            Some((&length, text)) => sub_code_allows && length as usize == text.len(),
            None => false,
        }
    }
}
