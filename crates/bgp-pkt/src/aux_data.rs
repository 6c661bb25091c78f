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

//! Typed data carried by NOTIFICATION messages.
//!
//! RFC4271 and the RFCs updating it define what the data field holds for
//! some (error code, sub-code) pairs, e.g. the erroneous length for a Bad
//! Message Length error. [`AuxDataShape::lookup`] is the registry of those
//! layouts.

use crate::iana::{
    BgpErrorNotificationCode, CeaseErrorSubCode, FiniteStateMachineErrorSubCode,
    MessageHeaderErrorSubCode, OpenMessageErrorSubCode, UpdateMessageErrorSubCode,
};
use serde::{Deserialize, Serialize};
use std::{fmt, num::IntErrorKind, str::FromStr};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Layout of the data field of a NOTIFICATION
#[derive(
    Display,
    EnumString,
    IntoStaticStr,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum AuxDataShape {
    /// Two octets erroneous length
    Length,
    /// One octet erroneous type
    Type,
    /// One octet largest supported version
    Version,
    /// One octet type of the unexpected message
    MessageType,
    /// Erroneous attribute, opaque octets
    Attribute,
    /// UTF-8 text without a length prefix
    Message,
}

impl AuxDataShape {
    pub fn lookup(error_code: u8, sub_code: u8) -> Option<Self> {
        use BgpErrorNotificationCode as Code;
        let code = BgpErrorNotificationCode::try_from(error_code).ok()?;
        match code {
            Code::MessageHeaderError => match MessageHeaderErrorSubCode::try_from(sub_code).ok()? {
                MessageHeaderErrorSubCode::BadMessageLength => Some(Self::Length),
                MessageHeaderErrorSubCode::BadMessageType => Some(Self::Type),
                _ => None,
            },
            Code::OpenMessageError => match OpenMessageErrorSubCode::try_from(sub_code).ok()? {
                OpenMessageErrorSubCode::UnsupportedVersionNumber => Some(Self::Version),
                _ => None,
            },
            Code::UpdateMessageError => match UpdateMessageErrorSubCode::try_from(sub_code).ok()? {
                UpdateMessageErrorSubCode::MissingWellKnownAttribute => Some(Self::Type),
                UpdateMessageErrorSubCode::UnrecognizedWellKnownAttribute
                | UpdateMessageErrorSubCode::AttributeFlagsError
                | UpdateMessageErrorSubCode::AttributeLengthError
                | UpdateMessageErrorSubCode::InvalidOriginAttribute
                | UpdateMessageErrorSubCode::InvalidNextHopAttribute
                | UpdateMessageErrorSubCode::OptionalAttributeError => Some(Self::Attribute),
                _ => None,
            },
            Code::FiniteStateMachineError => {
                match FiniteStateMachineErrorSubCode::try_from(sub_code).ok()? {
                    FiniteStateMachineErrorSubCode::UnspecifiedError => None,
                    _ => Some(Self::MessageType),
                }
            }
            Code::Cease => CeaseErrorSubCode::try_from(sub_code)
                .ok()
                .filter(CeaseErrorSubCode::carries_shutdown_communication)
                .map(|_| Self::Message),
            Code::HoldTimerExpired | Code::RouteRefreshMessageError => None,
        }
    }
}

/// Data of a NOTIFICATION decoded according to its [`AuxDataShape`]
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum AuxData {
    Length(u16),
    Type(u8),
    Version(u8),
    MessageType(u8),
    Attribute(Vec<u8>),
    Message(String),
}

impl AuxData {
    pub const fn shape(&self) -> AuxDataShape {
        match self {
            Self::Length(_) => AuxDataShape::Length,
            Self::Type(_) => AuxDataShape::Type,
            Self::Version(_) => AuxDataShape::Version,
            Self::MessageType(_) => AuxDataShape::MessageType,
            Self::Attribute(_) => AuxDataShape::Attribute,
            Self::Message(_) => AuxDataShape::Message,
        }
    }

    /// Build the data for `shape` from a user supplied `(data_type, literal)`
    /// pair. The data type label must name `shape`, numbers are decimal.
    pub fn from_labeled_literal(
        shape: AuxDataShape,
        data_type: Option<&str>,
        literal: Option<&str>,
    ) -> Result<Self, AuxDataError> {
        let data_type = data_type
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .ok_or(AuxDataError::MissingDataType(shape))?;
        let labeled = AuxDataShape::from_str(data_type)
            .map_err(|_| AuxDataError::UnknownDataType(data_type.to_string()))?;
        if labeled != shape {
            return Err(AuxDataError::DataTypeMismatch {
                expected: shape,
                found: labeled,
            });
        }
        let literal = literal.ok_or(AuxDataError::MissingValue(shape))?;
        let value = match shape {
            AuxDataShape::Length => Self::Length(parse_number(shape, literal)?),
            AuxDataShape::Type => Self::Type(parse_number(shape, literal)?),
            AuxDataShape::Version => Self::Version(parse_number(shape, literal)?),
            AuxDataShape::MessageType => Self::MessageType(parse_number(shape, literal)?),
            AuxDataShape::Attribute => Self::Attribute(literal.as_bytes().to_vec()),
            AuxDataShape::Message => Self::Message(literal.to_string()),
        };
        Ok(value)
    }
}

fn parse_number<T: FromStr<Err = std::num::ParseIntError>>(
    shape: AuxDataShape,
    literal: &str,
) -> Result<T, AuxDataError> {
    let literal = literal.trim();
    literal.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => AuxDataError::OutOfRange {
            shape,
            value: literal.to_string(),
        },
        _ => AuxDataError::InvalidNumber {
            shape,
            value: literal.to_string(),
        },
    })
}

/// Human readable interpretation, as reported by the universal decoder
impl fmt::Display for AuxData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(value) => write!(f, "Length: {value}"),
            Self::Type(value) => write!(f, "Type: {value}"),
            Self::Version(value) => write!(f, "Version: {value}"),
            Self::MessageType(value) => write!(f, "Message Type: {value}"),
            Self::Attribute(value) => write!(f, "Attribute: {}", hex::encode(value)),
            Self::Message(value) => write!(f, "Message: {value}"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuxDataError {
    #[error("data type is required, expected `{0}`")]
    MissingDataType(AuxDataShape),

    #[error("unknown data type `{0}`")]
    UnknownDataType(String),

    #[error("data type `{found}` doesn't match the expected `{expected}`")]
    DataTypeMismatch {
        expected: AuxDataShape,
        found: AuxDataShape,
    },

    #[error("value is required for data type `{0}`")]
    MissingValue(AuxDataShape),

    #[error("`{value}` is not a valid decimal number for data type `{shape}`")]
    InvalidNumber { shape: AuxDataShape, value: String },

    #[error("`{value}` is out of range for data type `{shape}`")]
    OutOfRange { shape: AuxDataShape, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Some(AuxDataShape::Length))]
    #[case(1, 3, Some(AuxDataShape::Type))]
    #[case(1, 1, None)]
    #[case(2, 1, Some(AuxDataShape::Version))]
    #[case(2, 2, None)]
    #[case(3, 2, Some(AuxDataShape::Attribute))]
    #[case(3, 3, Some(AuxDataShape::Type))]
    #[case(3, 4, Some(AuxDataShape::Attribute))]
    #[case(3, 5, Some(AuxDataShape::Attribute))]
    #[case(3, 6, Some(AuxDataShape::Attribute))]
    #[case(3, 8, Some(AuxDataShape::Attribute))]
    #[case(3, 9, Some(AuxDataShape::Attribute))]
    #[case(3, 10, None)]
    #[case(4, 0, None)]
    #[case(5, 0, None)]
    #[case(5, 1, Some(AuxDataShape::MessageType))]
    #[case(5, 3, Some(AuxDataShape::MessageType))]
    #[case(6, 2, Some(AuxDataShape::Message))]
    #[case(6, 4, Some(AuxDataShape::Message))]
    #[case(6, 9, None)]
    #[case(7, 1, None)]
    #[case(0, 0, None)]
    #[case(6, 200, None)]
    fn test_shape_lookup(
        #[case] error_code: u8,
        #[case] sub_code: u8,
        #[case] expected: Option<AuxDataShape>,
    ) {
        assert_eq!(AuxDataShape::lookup(error_code, sub_code), expected);
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(AuxDataShape::MessageType.to_string(), "message_type");
        assert_eq!(
            AuxDataShape::from_str("Message_Type"),
            Ok(AuxDataShape::MessageType)
        );
        assert_eq!(AuxDataShape::from_str("LENGTH"), Ok(AuxDataShape::Length));
        assert!(AuxDataShape::from_str("size").is_err());
    }

    #[rstest]
    #[case(AuxDataShape::Length, "length", "4097", AuxData::Length(4097))]
    #[case(AuxDataShape::Type, "type", " 9 ", AuxData::Type(9))]
    #[case(AuxDataShape::Version, "Version", "4", AuxData::Version(4))]
    #[case(AuxDataShape::MessageType, "message_type", "2", AuxData::MessageType(2))]
    #[case(AuxDataShape::Attribute, "attribute", "AB", AuxData::Attribute(vec![0x41, 0x42]))]
    #[case(AuxDataShape::Message, "message", "going down", AuxData::Message("going down".to_string()))]
    fn test_from_labeled_literal(
        #[case] shape: AuxDataShape,
        #[case] data_type: &str,
        #[case] literal: &str,
        #[case] expected: AuxData,
    ) {
        let value = AuxData::from_labeled_literal(shape, Some(data_type), Some(literal));
        assert_eq!(value, Ok(expected));
    }

    #[test]
    fn test_from_labeled_literal_errors() {
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Length, None, Some("1")),
            Err(AuxDataError::MissingDataType(AuxDataShape::Length))
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Length, Some("  "), Some("1")),
            Err(AuxDataError::MissingDataType(AuxDataShape::Length))
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Length, Some("size"), Some("1")),
            Err(AuxDataError::UnknownDataType("size".to_string()))
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Length, Some("type"), Some("1")),
            Err(AuxDataError::DataTypeMismatch {
                expected: AuxDataShape::Length,
                found: AuxDataShape::Type,
            })
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Message, Some("message"), None),
            Err(AuxDataError::MissingValue(AuxDataShape::Message))
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Type, Some("type"), Some("256")),
            Err(AuxDataError::OutOfRange {
                shape: AuxDataShape::Type,
                value: "256".to_string(),
            })
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Length, Some("length"), Some("-1")),
            Err(AuxDataError::InvalidNumber {
                shape: AuxDataShape::Length,
                value: "-1".to_string(),
            })
        );
        assert_eq!(
            AuxData::from_labeled_literal(AuxDataShape::Version, Some("version"), Some("four")),
            Err(AuxDataError::InvalidNumber {
                shape: AuxDataShape::Version,
                value: "four".to_string(),
            })
        );
    }

    #[test]
    fn test_interpretation() {
        assert_eq!(AuxData::Length(4097).to_string(), "Length: 4097");
        assert_eq!(AuxData::Type(9).to_string(), "Type: 9");
        assert_eq!(AuxData::Version(4).to_string(), "Version: 4");
        assert_eq!(AuxData::MessageType(2).to_string(), "Message Type: 2");
        assert_eq!(
            AuxData::Attribute(vec![0x40, 0x01, 0x01, 0x05]).to_string(),
            "Attribute: 40010105"
        );
        assert_eq!(
            AuxData::Message("maintenance".to_string()).to_string(),
            "Message: maintenance"
        );
    }
}
