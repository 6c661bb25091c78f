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

//! BGP NOTIFICATION data representation, with
//! [RFC9003](https://datatracker.ietf.org/doc/html/rfc9003) Shutdown
//! Communication and typed data for the other error codes.
//!
//! ```
//! use bgp_shutcomm_pkt::codec::{decode_shutdown, encode_shutdown};
//!
//! let encoded = encode_shutdown("Test", 2).unwrap();
//! assert_eq!(encoded.total_bytes(), 26);
//! let decoded = decode_shutdown(encoded.raw()).unwrap();
//! assert_eq!(decoded.sub_code_label(), "Administrative Shutdown");
//! assert_eq!(decoded.message(), "Test");
//! ```

pub mod api;
pub mod aux_data;
pub mod codec;
pub mod iana;
pub mod notification;
pub mod transcoder;
pub mod wire;

pub use crate::{
    aux_data::{AuxData, AuxDataShape},
    codec::{CodecError, EncodedNotification},
    notification::{
        NotificationHeader, ShutdownCommunication, ShutdownNotification, UniversalNotification,
    },
};
