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
    iana::{BgpErrorNotificationCode, CeaseErrorSubCode},
    notification::{
        NotificationHeader, ShutdownCommunication, ShutdownNotification, UniversalNotification,
    },
    wire::{
        serializer::NotificationHeaderWritingError, BGP_MIN_MESSAGE_LENGTH,
        MAX_COMMUNICATION_LENGTH, SHUTDOWN_NOTIFICATION_MIN_LENGTH,
        UNIVERSAL_NOTIFICATION_MIN_LENGTH,
    },
};
use bgp_shutcomm_parse_utils::WritablePdu;
use bgp_shutcomm_serde_macros::WritingError;
use byteorder::WriteBytesExt;

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum ShutdownCommunicationWritingError {
    StdIOError(#[from_std_io_error] String),

    /// The UTF-8 encoded text doesn't fit in the one octet length, carries the
    /// actual number of octets
    CommunicationTooLong(usize),
}

impl WritablePdu<ShutdownCommunicationWritingError> for ShutdownCommunication {
    // One octet length
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.byte_len()
    }

    fn write<T: std::io::Write>(
        &self,
        writer: &mut T,
    ) -> Result<(), ShutdownCommunicationWritingError> {
        let length = self.byte_len();
        if length > MAX_COMMUNICATION_LENGTH {
            return Err(ShutdownCommunicationWritingError::CommunicationTooLong(
                length,
            ));
        }
        writer.write_u8(length as u8)?;
        writer.write_all(self.text().as_bytes())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum ShutdownNotificationWritingError {
    StdIOError(#[from_std_io_error] String),

    /// Only Administrative Shutdown and Administrative Reset can carry a
    /// Shutdown Communication
    InvalidSubCode(u8),

    HeaderError(#[from] NotificationHeaderWritingError),

    CommunicationError(#[from] ShutdownCommunicationWritingError),
}

impl WritablePdu<ShutdownNotificationWritingError> for ShutdownNotification {
    const BASE_LENGTH: usize = SHUTDOWN_NOTIFICATION_MIN_LENGTH as usize;

    fn len(&self) -> usize {
        // The communication carries its own length octet
        BGP_MIN_MESSAGE_LENGTH as usize + 2 + self.communication().len()
    }

    fn write<T: std::io::Write>(
        &self,
        writer: &mut T,
    ) -> Result<(), ShutdownNotificationWritingError> {
        // Validate everything upfront, nothing is written for invalid messages
        let sub_code = CeaseErrorSubCode::try_from(self.sub_code())
            .ok()
            .filter(CeaseErrorSubCode::carries_shutdown_communication)
            .ok_or(ShutdownNotificationWritingError::InvalidSubCode(
                self.sub_code(),
            ))?;
        let communication_length = self.communication().byte_len();
        if communication_length > MAX_COMMUNICATION_LENGTH {
            return Err(ShutdownCommunicationWritingError::CommunicationTooLong(
                communication_length,
            )
            .into());
        }

        NotificationHeader::new(self.len() as u16).write(writer)?;
        writer.write_u8(BgpErrorNotificationCode::Cease.into())?;
        writer.write_u8(sub_code.into())?;
        self.communication().write(writer)?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum UniversalNotificationWritingError {
    StdIOError(#[from_std_io_error] String),

    /// Total message length doesn't fit in the two octets length field
    LengthOverflow(usize),

    HeaderError(#[from] NotificationHeaderWritingError),
}

impl WritablePdu<UniversalNotificationWritingError> for UniversalNotification {
    const BASE_LENGTH: usize = UNIVERSAL_NOTIFICATION_MIN_LENGTH as usize;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.data_length()
    }

    fn write<T: std::io::Write>(
        &self,
        writer: &mut T,
    ) -> Result<(), UniversalNotificationWritingError> {
        let len = self.len();
        if len > u16::MAX as usize {
            return Err(UniversalNotificationWritingError::LengthOverflow(len));
        }
        NotificationHeader::new(len as u16).write(writer)?;
        writer.write_u8(self.error_code())?;
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.data())?;
        Ok(())
    }
}
