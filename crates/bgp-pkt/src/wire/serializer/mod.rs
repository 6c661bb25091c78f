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

//! Serializer library for BGP's NOTIFICATION wire protocol

pub mod aux_data;
pub mod notification;

use crate::{iana::BgpMessageType, notification::NotificationHeader, wire::BGP_MIN_MESSAGE_LENGTH};
use bgp_shutcomm_parse_utils::WritablePdu;
use bgp_shutcomm_serde_macros::WritingError;
use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum NotificationHeaderWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<NotificationHeaderWritingError> for NotificationHeader {
    const BASE_LENGTH: usize = BGP_MIN_MESSAGE_LENGTH as usize;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), NotificationHeaderWritingError> {
        writer.write_all(&u128::MAX.to_be_bytes())?;
        writer.write_u16::<NetworkEndian>(self.length())?;
        writer.write_u8(BgpMessageType::Notification.into())?;
        Ok(())
    }
}
