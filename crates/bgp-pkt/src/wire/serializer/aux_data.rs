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

use crate::{
    aux_data::{AuxData, AuxDataShape},
    wire::MAX_COMMUNICATION_LENGTH,
};
use bgp_shutcomm_parse_utils::WritablePdu;
use bgp_shutcomm_serde_macros::WritingError;
use byteorder::{NetworkEndian, WriteBytesExt};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum AuxDataWritingError {
    StdIOError(#[from_std_io_error] String),

    /// Opaque and textual data is capped at 255 octets
    DataTooLong { shape: AuxDataShape, length: usize },
}

impl WritablePdu<AuxDataWritingError> for AuxData {
    // No length prefix, the data runs to the end of the message
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        let value_len = match self {
            Self::Length(_) => 2,
            Self::Type(_) | Self::Version(_) | Self::MessageType(_) => 1,
            Self::Attribute(value) => value.len(),
            Self::Message(value) => value.len(),
        };
        Self::BASE_LENGTH + value_len
    }

    fn write<T: std::io::Write>(&self, writer: &mut T) -> Result<(), AuxDataWritingError> {
        match self {
            Self::Length(value) => writer.write_u16::<NetworkEndian>(*value)?,
            Self::Type(value) | Self::Version(value) | Self::MessageType(value) => {
                writer.write_u8(*value)?
            }
            Self::Attribute(value) => write_capped(writer, self.shape(), value)?,
            Self::Message(value) => write_capped(writer, self.shape(), value.as_bytes())?,
        }
        Ok(())
    }
}

fn write_capped<T: std::io::Write>(
    writer: &mut T,
    shape: AuxDataShape,
    value: &[u8],
) -> Result<(), AuxDataWritingError> {
    if value.len() > MAX_COMMUNICATION_LENGTH {
        return Err(AuxDataWritingError::DataTooLong {
            shape,
            length: value.len(),
        });
    }
    writer.write_all(value)?;
    Ok(())
}
