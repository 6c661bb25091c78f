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

//! Deserializer library for BGP's NOTIFICATION wire protocol

pub mod aux_data;
pub mod notification;

use crate::{iana::BgpMessageType, notification::NotificationHeader};
use bgp_shutcomm_parse_utils::{ErrorKindSerdeDeref, ReadablePduWithOneInput, Span};
use bgp_shutcomm_serde_macros::LocatedError;
use nom::{
    error::ErrorKind,
    number::complete::{be_u128, be_u16, be_u8},
    IResult,
};
use serde::{Deserialize, Serialize};

#[derive(LocatedError, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum NotificationHeaderParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),

    /// The buffer is smaller than the minimum message size of the expected
    /// NOTIFICATION flavor
    TooShort { minimum: u16, actual: usize },

    /// The first 16-bytes of a BGP message is NOT all set to `1`
    /// For simplicity, we carry the equivalent [`u128`] value that was invalid
    /// instead of the whole buffer
    ConnectionNotSynchronized(u128),

    /// The type octet is not [`BgpMessageType::Notification`]
    NotNotification(u8),
}

/// Parses the marker, length and type. The minimum length is checked before
/// anything else since each NOTIFICATION flavor has its own minimum.
impl<'a> ReadablePduWithOneInput<'a, u16, LocatedNotificationHeaderParsingError<'a>>
    for NotificationHeader
{
    fn from_wire(
        buf: Span<'a>,
        minimum_length: u16,
    ) -> IResult<Span<'a>, Self, LocatedNotificationHeaderParsingError<'a>> {
        if buf.len() < minimum_length as usize {
            return Err(nom::Err::Error(LocatedNotificationHeaderParsingError::new(
                buf,
                NotificationHeaderParsingError::TooShort {
                    minimum: minimum_length,
                    actual: buf.len(),
                },
            )));
        }
        let (buf, _) = nom::combinator::map_res(be_u128, |x| {
            if x == u128::MAX {
                Ok(x)
            } else {
                Err(NotificationHeaderParsingError::ConnectionNotSynchronized(
                    x,
                ))
            }
        })(buf)?;
        let (buf, length) = be_u16(buf)?;
        let (buf, _) = nom::combinator::map_res(be_u8, |x| {
            if x == u8::from(BgpMessageType::Notification) {
                Ok(x)
            } else {
                Err(NotificationHeaderParsingError::NotNotification(x))
            }
        })(buf)?;
        Ok((buf, NotificationHeader::new(length)))
    }
}
