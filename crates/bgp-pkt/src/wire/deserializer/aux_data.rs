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

use crate::aux_data::{AuxData, AuxDataShape};
use bgp_shutcomm_parse_utils::{ErrorKindSerdeDeref, ReadablePduWithOneInput, Span};
use bgp_shutcomm_serde_macros::LocatedError;
use nom::{
    combinator::map,
    error::ErrorKind,
    number::complete::{be_u16, be_u8},
    IResult, Slice,
};
use serde::{Deserialize, Serialize};

#[derive(LocatedError, Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum AuxDataParsingError {
    /// Errors triggered by the nom parser, see [nom::error::ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),

    InvalidUtf8 { valid_up_to: usize },
}

/// Fixed size shapes consume only their own octets, opaque and textual shapes
/// consume the whole buffer.
impl<'a> ReadablePduWithOneInput<'a, AuxDataShape, LocatedAuxDataParsingError<'a>> for AuxData {
    fn from_wire(
        buf: Span<'a>,
        shape: AuxDataShape,
    ) -> IResult<Span<'a>, Self, LocatedAuxDataParsingError<'a>> {
        match shape {
            AuxDataShape::Length => map(be_u16, AuxData::Length)(buf),
            AuxDataShape::Type => map(be_u8, AuxData::Type)(buf),
            AuxDataShape::Version => map(be_u8, AuxData::Version)(buf),
            AuxDataShape::MessageType => map(be_u8, AuxData::MessageType)(buf),
            AuxDataShape::Attribute => {
                let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
                Ok((buf, AuxData::Attribute(value.fragment().to_vec())))
            }
            AuxDataShape::Message => {
                let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
                match std::str::from_utf8(value.fragment()) {
                    Ok(text) => Ok((buf, AuxData::Message(text.to_string()))),
                    Err(err) => Err(nom::Err::Error(LocatedAuxDataParsingError::new(
                        value.slice(err.valid_up_to()..),
                        AuxDataParsingError::InvalidUtf8 {
                            valid_up_to: err.valid_up_to(),
                        },
                    ))),
                }
            }
        }
    }
}
