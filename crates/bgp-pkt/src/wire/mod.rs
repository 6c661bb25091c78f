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

//! Serialize/Deserialize BGP NOTIFICATION wire protocol

pub mod deserializer;
pub mod serializer;

/// BGP marker is 16-octets all set to `1`
pub const BGP_MARKER_LENGTH: usize = 16;

/// Min message size in BGP is 19 octets. They're counted from
/// 16-octets synchronization header, 2-octets length, and 1 octet for type.
pub const BGP_MIN_MESSAGE_LENGTH: u16 = 19;

/// Header + error code + sub-code + communication length as per RFC9003
pub const SHUTDOWN_NOTIFICATION_MIN_LENGTH: u16 = BGP_MIN_MESSAGE_LENGTH + 3;

/// Header + error code + sub-code
pub const UNIVERSAL_NOTIFICATION_MIN_LENGTH: u16 = BGP_MIN_MESSAGE_LENGTH + 2;

/// Shutdown Communication length is encoded in a single octet, RFC9003
/// section 2
pub const MAX_COMMUNICATION_LENGTH: usize = u8::MAX as usize;

#[cfg(test)]
mod tests;
