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

//! Request/response entry points working on hex text, for front-ends that
//! exchange JSON with the codec.

use crate::{
    codec::{self, CodecError},
    iana::CeaseErrorSubCode,
    transcoder::{decode_hex, looks_like_hex},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub message: String,
    pub subcode: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub hex: String,
    pub total_bytes: u32,
    pub message_bytes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResponse {
    /// Label of the sub-code, e.g. `Administrative Shutdown`
    pub subcode: String,
    pub subcode_value: u8,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub hex: String,
    pub total_bytes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalDecodeResponse {
    pub error_code: u8,
    pub error_name: String,
    pub subcode: u8,
    pub subcode_name: String,
    pub data_length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

pub fn is_hex(text: &str) -> bool {
    looks_like_hex(text)
}

pub fn encode_shutdown_message(request: &EncodeRequest) -> Result<EncodeResponse, CodecError> {
    let encoded = codec::encode_shutdown(&request.message, request.subcode)?;
    Ok(EncodeResponse {
        hex: encoded.to_hex(),
        total_bytes: encoded.total_bytes() as u32,
        message_bytes: encoded.payload_bytes() as u32,
    })
}

pub fn decode_shutdown_message(hex: &str) -> Result<DecodeResponse, CodecError> {
    let raw = decode_hex(hex)?;
    let notification = codec::decode_shutdown(&raw)?;
    let subcode = notification.sub_code_label();
    let (subcode_value, communication) = notification.into_parts();
    Ok(DecodeResponse {
        subcode,
        subcode_value,
        message: communication.into_text(),
    })
}

/// Blank `data_type` counts as absent, which is only accepted for pairs
/// without registered data.
pub fn create_notification_with_data(
    error_code: u8,
    subcode: u8,
    data_type: &str,
    value: &str,
) -> Result<NotificationResponse, CodecError> {
    let encoded = codec::encode_universal(error_code, subcode, Some(data_type), Some(value))?;
    Ok(NotificationResponse {
        hex: encoded.to_hex(),
        total_bytes: encoded.total_bytes() as u32,
    })
}

pub fn decode_universal_notification(hex: &str) -> Result<UniversalDecodeResponse, CodecError> {
    let raw = decode_hex(hex)?;
    let notification = codec::decode_universal(&raw)?;
    Ok(UniversalDecodeResponse {
        error_code: notification.error_code(),
        error_name: notification.error_name().to_string(),
        subcode: notification.sub_code(),
        subcode_name: notification.sub_code_name().to_string(),
        data_length: notification.data_length() as u32,
        interpretation: codec::interpret(&notification).map(|data| data.to_string()),
    })
}

/// Cease sub-codes that can carry a Shutdown Communication, with their labels
pub fn get_subcodes() -> Vec<(u8, &'static str)> {
    CeaseErrorSubCode::SHUTDOWN_COMMUNICATION
        .iter()
        .map(|sub_code| (u8::from(*sub_code), <&'static str>::from(*sub_code)))
        .collect()
}
