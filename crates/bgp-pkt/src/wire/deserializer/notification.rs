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

//! Deserializer for BGP Notification message

use crate::{
    iana::BgpErrorNotificationCode,
    notification::{
        NotificationHeader, ShutdownCommunication, ShutdownNotification, UniversalNotification,
    },
    wire::{
        deserializer::{LocatedNotificationHeaderParsingError, NotificationHeaderParsingError},
        BGP_MARKER_LENGTH, BGP_MIN_MESSAGE_LENGTH, SHUTDOWN_NOTIFICATION_MIN_LENGTH,
        UNIVERSAL_NOTIFICATION_MIN_LENGTH,
    },
};
use bgp_shutcomm_parse_utils::{
    parse_into_located, parse_into_located_one_input, ErrorKindSerdeDeref, ReadablePdu, Span,
};
use bgp_shutcomm_serde_macros::LocatedError;
use nom::{error::ErrorKind, number::complete::be_u8, IResult, Slice};
use serde::{Deserialize, Serialize};

#[derive(LocatedError, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum ShutdownCommunicationParsingError {
    /// Errors triggered by the nom parser, see [nom::error::ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),

    /// Fewer octets are left than the communication length announces
    Truncated { length: u8, available: usize },

    /// The text is not valid UTF-8, carries the length of the valid prefix.
    /// The error is located at the first invalid octet.
    InvalidUtf8 { valid_up_to: usize },
}

impl<'a> ReadablePdu<'a, LocatedShutdownCommunicationParsingError<'a>> for ShutdownCommunication {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedShutdownCommunicationParsingError<'a>> {
        let (buf, length) = be_u8(buf)?;
        if buf.len() < length as usize {
            return Err(nom::Err::Error(LocatedShutdownCommunicationParsingError::new(
                buf,
                ShutdownCommunicationParsingError::Truncated {
                    length,
                    available: buf.len(),
                },
            )));
        }
        let (buf, text) = nom::bytes::complete::take(length)(buf)?;
        match std::str::from_utf8(text.fragment()) {
            Ok(value) => Ok((buf, ShutdownCommunication::new(value))),
            Err(err) => Err(nom::Err::Error(LocatedShutdownCommunicationParsingError::new(
                text.slice(err.valid_up_to()..),
                ShutdownCommunicationParsingError::InvalidUtf8 {
                    valid_up_to: err.valid_up_to(),
                },
            ))),
        }
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum ShutdownNotificationParsingError {
    /// Errors triggered by the nom parser, see [nom::error::ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),

    HeaderError(#[from_located] NotificationHeaderParsingError),

    /// Error code is not [`BgpErrorNotificationCode::Cease`]
    NotCease(u8),

    CommunicationError(#[from_located] ShutdownCommunicationParsingError),
}

/// The header length field is not compared to the buffer, only the octets
/// announced by the communication length must be present. Any octet after the
/// communication is left in the returned buffer.
impl<'a> ReadablePdu<'a, LocatedShutdownNotificationParsingError<'a>> for ShutdownNotification {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedShutdownNotificationParsingError<'a>> {
        let (buf, _header): (_, NotificationHeader) =
            parse_into_located_one_input(buf, SHUTDOWN_NOTIFICATION_MIN_LENGTH)?;
        let (buf, _) = nom::combinator::map_res(be_u8, |x| {
            if x == u8::from(BgpErrorNotificationCode::Cease) {
                Ok(x)
            } else {
                Err(ShutdownNotificationParsingError::NotCease(x))
            }
        })(buf)?;
        let (buf, sub_code) = be_u8(buf)?;
        let (buf, communication) = parse_into_located(buf)?;
        Ok((buf, ShutdownNotification::new(sub_code, communication)))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum UniversalNotificationParsingError {
    /// Errors triggered by the nom parser, see [nom::error::ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),

    HeaderError(#[from_located] NotificationHeaderParsingError),

    /// Declared length is less than the minimum NOTIFICATION length
    BadMessageLength(u16),

    /// Declared length is more than the octets available in the buffer
    Truncated { declared: u16, available: usize },
}

/// The header length is authoritative: exactly that many octets are consumed
/// and everything after the sub-code is the data.
impl<'a> ReadablePdu<'a, LocatedUniversalNotificationParsingError<'a>> for UniversalNotification {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedUniversalNotificationParsingError<'a>> {
        let input = buf;
        let (buf, header): (_, NotificationHeader) =
            parse_into_located_one_input(buf, UNIVERSAL_NOTIFICATION_MIN_LENGTH)?;

        // Errors on the declared length point at the length field
        let length_span = input.slice(BGP_MARKER_LENGTH..);
        let declared = header.length();
        if declared < UNIVERSAL_NOTIFICATION_MIN_LENGTH {
            return Err(nom::Err::Error(LocatedUniversalNotificationParsingError::new(
                length_span,
                UniversalNotificationParsingError::BadMessageLength(declared),
            )));
        }
        if declared as usize > input.len() {
            return Err(nom::Err::Error(LocatedUniversalNotificationParsingError::new(
                length_span,
                UniversalNotificationParsingError::Truncated {
                    declared,
                    available: input.len(),
                },
            )));
        }

        let body_len = (declared - BGP_MIN_MESSAGE_LENGTH) as usize;
        let (remainder, body) = nom::bytes::complete::take(body_len)(buf)?;
        let (body, error_code) = be_u8(body)?;
        let (data, sub_code) = be_u8(body)?;
        Ok((
            remainder,
            UniversalNotification::new(error_code, sub_code, data.fragment().to_vec()),
        ))
    }
}
