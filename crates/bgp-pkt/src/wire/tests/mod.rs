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

use bgp_shutcomm_parse_utils::{
    test_helpers::{
        combine, test_parse_error_with_one_input, test_parsed_completely_with_one_input,
        test_write,
    },
    Span,
};
use nom::error::ErrorKind;

use crate::{
    notification::NotificationHeader,
    wire::{
        deserializer::{LocatedNotificationHeaderParsingError, NotificationHeaderParsingError},
        serializer::NotificationHeaderWritingError,
        BGP_MIN_MESSAGE_LENGTH, SHUTDOWN_NOTIFICATION_MIN_LENGTH,
    },
};

mod aux_data;

pub(crate) const BGP_MARKER: &[u8] = &[0xff; 16];

#[test]
fn test_notification_header() -> Result<(), NotificationHeaderWritingError> {
    let good_wire = combine(vec![BGP_MARKER, &[0x00, 0x1a, 0x03]]);
    let good = NotificationHeader::new(26);

    test_parsed_completely_with_one_input(&good_wire, BGP_MIN_MESSAGE_LENGTH, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_notification_header_too_short() {
    let wire = combine(vec![BGP_MARKER, &[0x00, 0x16, 0x03]]);
    let expected = LocatedNotificationHeaderParsingError::new(
        Span::new(&wire),
        NotificationHeaderParsingError::TooShort {
            minimum: 22,
            actual: 19,
        },
    );
    test_parse_error_with_one_input::<
        NotificationHeader,
        u16,
        LocatedNotificationHeaderParsingError<'_>,
    >(&wire, SHUTDOWN_NOTIFICATION_MIN_LENGTH, &expected);

    let empty: &[u8] = &[];
    let expected = LocatedNotificationHeaderParsingError::new(
        Span::new(empty),
        NotificationHeaderParsingError::TooShort {
            minimum: 19,
            actual: 0,
        },
    );
    test_parse_error_with_one_input::<
        NotificationHeader,
        u16,
        LocatedNotificationHeaderParsingError<'_>,
    >(empty, BGP_MIN_MESSAGE_LENGTH, &expected);
}

#[test]
fn test_notification_header_bad_marker() {
    let mut marker = [0xffu8; 16];
    marker[5] = 0x00;
    let wire = combine(vec![&marker, &[0x00, 0x13, 0x03]]);
    let expected = LocatedNotificationHeaderParsingError::new(
        Span::new(&wire),
        NotificationHeaderParsingError::ConnectionNotSynchronized(
            0xffff_ffff_ff00_ffff_ffff_ffff_ffff_ffff,
        ),
    );
    test_parse_error_with_one_input::<
        NotificationHeader,
        u16,
        LocatedNotificationHeaderParsingError<'_>,
    >(&wire, BGP_MIN_MESSAGE_LENGTH, &expected);
}

#[test]
fn test_notification_header_not_notification() {
    let keepalive_wire = combine(vec![BGP_MARKER, &[0x00, 0x13, 0x04]]);
    let undefined_wire = combine(vec![BGP_MARKER, &[0x00, 0x13, 0xff]]);
    let keepalive = LocatedNotificationHeaderParsingError::new(
        Span::new_from_raw_offset(18, &keepalive_wire[18..]),
        NotificationHeaderParsingError::NotNotification(4),
    );
    let undefined = LocatedNotificationHeaderParsingError::new(
        Span::new_from_raw_offset(18, &undefined_wire[18..]),
        NotificationHeaderParsingError::NotNotification(0xff),
    );
    test_parse_error_with_one_input::<
        NotificationHeader,
        u16,
        LocatedNotificationHeaderParsingError<'_>,
    >(&keepalive_wire, BGP_MIN_MESSAGE_LENGTH, &keepalive);
    test_parse_error_with_one_input::<
        NotificationHeader,
        u16,
        LocatedNotificationHeaderParsingError<'_>,
    >(&undefined_wire, BGP_MIN_MESSAGE_LENGTH, &undefined);
}

#[test]
fn test_notification_header_parsing_error_serde() {
    let nom_error = NotificationHeaderParsingError::NomError(ErrorKind::Eof);
    let too_short = NotificationHeaderParsingError::TooShort {
        minimum: 22,
        actual: 19,
    };

    let nom_error_json = serde_json::to_string(&nom_error).unwrap();
    let too_short_json = serde_json::to_string(&too_short).unwrap();

    assert_eq!(nom_error_json, r#"{"NomError":"Eof"}"#);
    assert_eq!(too_short_json, r#"{"TooShort":{"minimum":22,"actual":19}}"#);
    assert_eq!(
        serde_json::from_str::<NotificationHeaderParsingError>(&nom_error_json).unwrap(),
        nom_error
    );
    assert_eq!(
        serde_json::from_str::<NotificationHeaderParsingError>(&too_short_json).unwrap(),
        too_short
    );
}
