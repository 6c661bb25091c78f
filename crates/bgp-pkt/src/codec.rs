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

//! Encode and decode complete NOTIFICATION messages.
//!
//! These functions wrap the wire PDUs and flatten their located errors into a
//! single [`CodecError`] that carries byte offsets relative to the start of
//! the raw message.

use crate::{
    aux_data::{AuxData, AuxDataError, AuxDataShape},
    notification::{ShutdownCommunication, ShutdownNotification, UniversalNotification},
    transcoder::{encode_hex, HexError},
    wire::{
        deserializer::{
            aux_data::LocatedAuxDataParsingError,
            notification::{
                LocatedShutdownNotificationParsingError, LocatedUniversalNotificationParsingError,
                ShutdownCommunicationParsingError, ShutdownNotificationParsingError,
                UniversalNotificationParsingError,
            },
            NotificationHeaderParsingError,
        },
        serializer::{
            aux_data::AuxDataWritingError,
            notification::{
                ShutdownCommunicationWritingError, ShutdownNotificationWritingError,
                UniversalNotificationWritingError,
            },
            NotificationHeaderWritingError,
        },
    },
};
use bgp_shutcomm_parse_utils::{
    LocatedParsingError, ReadablePdu, ReadablePduWithOneInput, Span, WritablePdu,
};
use tracing::{debug, trace};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed hex input: {0}")]
    MalformedHex(#[from] HexError),

    #[error("Invalid subcode: must be 2 or 4 (got {0})")]
    InvalidSubcode(u8),

    #[error("Message exceeds 255 bytes (got {0} bytes)")]
    MessageTooLong(usize),

    #[error("Message too short (minimum {minimum} bytes, got {actual})")]
    TooShort { minimum: usize, actual: usize },

    #[error("Invalid BGP marker (first bad byte at offset {offset})")]
    InvalidMarker { offset: usize },

    #[error("Not a notification message (type={0})")]
    NotNotification(u8),

    #[error("Not a Cease error (code={0})")]
    NotCease(u8),

    #[error("Message truncated (expected {expected} bytes, got {available})")]
    Truncated { expected: usize, available: usize },

    #[error("Invalid UTF-8 in message at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("Invalid auxiliary data: {0}")]
    InvalidAuxData(#[from] AuxDataError),

    /// Only raised by writers other than `Vec<u8>`
    #[error("I/O error: {0}")]
    Io(String),
}

impl CodecError {
    fn from_header_error(raw: &[u8], offset: usize, error: NotificationHeaderParsingError) -> Self {
        match error {
            NotificationHeaderParsingError::NomError(_) => Self::eof(raw, offset),
            NotificationHeaderParsingError::TooShort { minimum, actual } => Self::TooShort {
                minimum: minimum as usize,
                actual,
            },
            NotificationHeaderParsingError::ConnectionNotSynchronized(marker) => {
                Self::InvalidMarker {
                    offset: (marker.leading_ones() / 8) as usize,
                }
            }
            NotificationHeaderParsingError::NotNotification(message_type) => {
                Self::NotNotification(message_type)
            }
        }
    }

    /// The parsers only raise nom errors when running out of input
    fn eof(raw: &[u8], offset: usize) -> Self {
        Self::Truncated {
            expected: offset + 1,
            available: raw.len(),
        }
    }

    fn from_shutdown_error(
        raw: &[u8],
        err: nom::Err<LocatedShutdownNotificationParsingError<'_>>,
    ) -> Self {
        let err = match err {
            nom::Err::Error(err) | nom::Err::Failure(err) => err,
            nom::Err::Incomplete(needed) => return Self::incomplete(raw, needed),
        };
        let offset = err.span().location_offset();
        match err.error().clone() {
            ShutdownNotificationParsingError::NomError(_) => Self::eof(raw, offset),
            ShutdownNotificationParsingError::HeaderError(error) => {
                Self::from_header_error(raw, offset, error)
            }
            ShutdownNotificationParsingError::NotCease(error_code) => Self::NotCease(error_code),
            ShutdownNotificationParsingError::CommunicationError(error) => match error {
                ShutdownCommunicationParsingError::NomError(_) => Self::eof(raw, offset),
                ShutdownCommunicationParsingError::Truncated { length, available } => {
                    Self::Truncated {
                        expected: offset + length as usize,
                        available: offset + available,
                    }
                }
                ShutdownCommunicationParsingError::InvalidUtf8 { .. } => {
                    Self::InvalidUtf8 { offset }
                }
            },
        }
    }

    fn from_universal_error(
        raw: &[u8],
        err: nom::Err<LocatedUniversalNotificationParsingError<'_>>,
    ) -> Self {
        let err = match err {
            nom::Err::Error(err) | nom::Err::Failure(err) => err,
            nom::Err::Incomplete(needed) => return Self::incomplete(raw, needed),
        };
        let offset = err.span().location_offset();
        match err.error().clone() {
            UniversalNotificationParsingError::NomError(_) => Self::eof(raw, offset),
            UniversalNotificationParsingError::HeaderError(error) => {
                Self::from_header_error(raw, offset, error)
            }
            UniversalNotificationParsingError::BadMessageLength(declared) => Self::Truncated {
                expected: declared as usize,
                available: raw.len(),
            },
            UniversalNotificationParsingError::Truncated {
                declared,
                available,
            } => Self::Truncated {
                expected: declared as usize,
                available,
            },
        }
    }

    fn incomplete(raw: &[u8], needed: nom::Needed) -> Self {
        let missing = match needed {
            nom::Needed::Unknown => 1,
            nom::Needed::Size(size) => size.get(),
        };
        Self::Truncated {
            expected: raw.len() + missing,
            available: raw.len(),
        }
    }
}

impl From<NotificationHeaderWritingError> for CodecError {
    fn from(value: NotificationHeaderWritingError) -> Self {
        match value {
            NotificationHeaderWritingError::StdIOError(err) => Self::Io(err),
        }
    }
}

impl From<ShutdownNotificationWritingError> for CodecError {
    fn from(value: ShutdownNotificationWritingError) -> Self {
        match value {
            ShutdownNotificationWritingError::StdIOError(err) => Self::Io(err),
            ShutdownNotificationWritingError::InvalidSubCode(sub_code) => {
                Self::InvalidSubcode(sub_code)
            }
            ShutdownNotificationWritingError::HeaderError(err) => err.into(),
            ShutdownNotificationWritingError::CommunicationError(err) => match err {
                ShutdownCommunicationWritingError::StdIOError(err) => Self::Io(err),
                ShutdownCommunicationWritingError::CommunicationTooLong(length) => {
                    Self::MessageTooLong(length)
                }
            },
        }
    }
}

impl From<UniversalNotificationWritingError> for CodecError {
    fn from(value: UniversalNotificationWritingError) -> Self {
        match value {
            UniversalNotificationWritingError::StdIOError(err) => Self::Io(err),
            UniversalNotificationWritingError::LengthOverflow(length) => {
                Self::MessageTooLong(length)
            }
            UniversalNotificationWritingError::HeaderError(err) => err.into(),
        }
    }
}

impl From<AuxDataWritingError> for CodecError {
    fn from(value: AuxDataWritingError) -> Self {
        match value {
            AuxDataWritingError::StdIOError(err) => Self::Io(err),
            AuxDataWritingError::DataTooLong { length, .. } => Self::MessageTooLong(length),
        }
    }
}

/// A complete NOTIFICATION on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedNotification {
    raw: Vec<u8>,
    payload_bytes: usize,
}

impl EncodedNotification {
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    pub fn total_bytes(&self) -> usize {
        self.raw.len()
    }

    /// Octets of the user supplied text or data, without any framing
    pub const fn payload_bytes(&self) -> usize {
        self.payload_bytes
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.raw)
    }
}

/// Build a Cease NOTIFICATION with an RFC9003 Shutdown Communication.
///
/// `sub_code` must be Administrative Shutdown (2) or Administrative Reset (4)
/// and `message` at most 255 octets once UTF-8 encoded.
pub fn encode_shutdown(message: &str, sub_code: u8) -> Result<EncodedNotification, CodecError> {
    let notification = ShutdownNotification::new(sub_code, ShutdownCommunication::new(message));
    let mut raw = Vec::with_capacity(notification.len());
    notification
        .write(&mut raw)
        .map_err(CodecError::from)
        .inspect_err(|err| debug!(sub_code, error = %err, "failed to encode shutdown notification"))?;
    debug!(
        sub_code,
        total_bytes = raw.len(),
        message_bytes = message.len(),
        "encoded shutdown notification"
    );
    Ok(EncodedNotification {
        raw,
        payload_bytes: message.len(),
    })
}

/// Parse a Cease NOTIFICATION carrying a Shutdown Communication. Unknown Cease
/// sub-codes are accepted, see [`ShutdownNotification::sub_code_label`].
pub fn decode_shutdown(raw: &[u8]) -> Result<ShutdownNotification, CodecError> {
    trace!(length = raw.len(), "decoding shutdown notification");
    match ShutdownNotification::from_wire(Span::new(raw)) {
        Ok((_, notification)) => {
            debug!(
                sub_code = notification.sub_code(),
                message_bytes = notification.communication().byte_len(),
                "decoded shutdown notification"
            );
            Ok(notification)
        }
        Err(err) => {
            let err = CodecError::from_shutdown_error(raw, err);
            debug!(error = %err, "failed to decode shutdown notification");
            Err(err)
        }
    }
}

/// Build a NOTIFICATION for any error code and sub-code.
///
/// When the pair has a registered [`AuxDataShape`], `data_type` must name it
/// and `literal` is converted to that shape. Otherwise, the data is left
/// empty and both are ignored.
pub fn encode_universal(
    error_code: u8,
    sub_code: u8,
    data_type: Option<&str>,
    literal: Option<&str>,
) -> Result<EncodedNotification, CodecError> {
    let data = match AuxDataShape::lookup(error_code, sub_code) {
        None => vec![],
        Some(shape) => {
            let aux_data = AuxData::from_labeled_literal(shape, data_type, literal)
                .inspect_err(|err| debug!(%shape, error = %err, "invalid notification data"))?;
            let mut data = Vec::with_capacity(aux_data.len());
            aux_data.write(&mut data)?;
            data
        }
    };
    let payload_bytes = data.len();
    let notification = UniversalNotification::new(error_code, sub_code, data);
    let mut raw = Vec::with_capacity(notification.len());
    notification.write(&mut raw)?;
    debug!(
        error_code,
        sub_code,
        total_bytes = raw.len(),
        data_bytes = payload_bytes,
        "encoded notification"
    );
    Ok(EncodedNotification { raw, payload_bytes })
}

/// Parse a NOTIFICATION with any error code and sub-code. The header length
/// must match the number of octets in `raw`.
pub fn decode_universal(raw: &[u8]) -> Result<UniversalNotification, CodecError> {
    trace!(length = raw.len(), "decoding notification");
    let (remainder, notification) = UniversalNotification::from_wire(Span::new(raw))
        .map_err(|err| CodecError::from_universal_error(raw, err))
        .inspect_err(|err| debug!(error = %err, "failed to decode notification"))?;
    if !remainder.is_empty() {
        let err = CodecError::Truncated {
            expected: raw.len() - remainder.len(),
            available: raw.len(),
        };
        debug!(error = %err, "declared length is shorter than the message");
        return Err(err);
    }
    debug!(
        error_code = notification.error_code(),
        sub_code = notification.sub_code(),
        data_bytes = notification.data_length(),
        "decoded notification"
    );
    Ok(notification)
}

/// Read the data of `notification` according to its registered shape. `None`
/// when no shape is registered or the data doesn't fit it.
pub fn interpret(notification: &UniversalNotification) -> Option<AuxData> {
    let shape = notification.aux_data_shape()?;
    let parsed: Result<_, nom::Err<LocatedAuxDataParsingError<'_>>> =
        AuxData::from_wire(Span::new(notification.data()), shape);
    match parsed {
        Ok((rest, value)) if rest.is_empty() => Some(value),
        Ok((rest, _)) => {
            trace!(%shape, trailing = rest.len(), "notification data is longer than its shape");
            None
        }
        Err(err) => {
            trace!(%shape, error = ?err, "notification data doesn't fit its shape");
            None
        }
    }
}
