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
    wire::{
        deserializer::aux_data::{AuxDataParsingError, LocatedAuxDataParsingError},
        serializer::aux_data::AuxDataWritingError,
    },
};
use bgp_shutcomm_parse_utils::{
    test_helpers::{
        test_parse_error_with_one_input, test_parsed_completely_with_one_input, test_write,
        test_write_error,
    },
    Span,
};
use nom::error::ErrorKind;
use rstest::rstest;

#[rstest]
#[case(AuxDataShape::Length, vec![0x10, 0x01], AuxData::Length(4097))]
#[case(AuxDataShape::Type, vec![0x09], AuxData::Type(9))]
#[case(AuxDataShape::Version, vec![0x04], AuxData::Version(4))]
#[case(AuxDataShape::MessageType, vec![0x01], AuxData::MessageType(1))]
#[case(AuxDataShape::Attribute, vec![0x40, 0x01, 0x01, 0x03], AuxData::Attribute(vec![0x40, 0x01, 0x01, 0x03]))]
#[case(AuxDataShape::Attribute, vec![], AuxData::Attribute(vec![]))]
#[case(AuxDataShape::Message, "bye ☕".as_bytes().to_vec(), AuxData::Message("bye ☕".to_string()))]
fn test_aux_data(
    #[case] shape: AuxDataShape,
    #[case] good_wire: Vec<u8>,
    #[case] good: AuxData,
) -> Result<(), AuxDataWritingError> {
    test_parsed_completely_with_one_input(&good_wire, shape, &good);
    test_write(&good, &good_wire)?;
    assert_eq!(good.shape(), shape);
    Ok(())
}

#[test]
fn test_aux_data_errors() {
    let short_length_wire = [0x10];
    let invalid_message_wire = [0x62, 0x79, 0xff];

    let short_length = LocatedAuxDataParsingError::new(
        Span::new(&short_length_wire),
        AuxDataParsingError::NomError(ErrorKind::Eof),
    );
    let invalid_message = LocatedAuxDataParsingError::new(
        Span::new_from_raw_offset(2, &invalid_message_wire[2..]),
        AuxDataParsingError::InvalidUtf8 { valid_up_to: 2 },
    );

    test_parse_error_with_one_input::<AuxData, AuxDataShape, LocatedAuxDataParsingError<'_>>(
        &short_length_wire,
        AuxDataShape::Length,
        &short_length,
    );
    test_parse_error_with_one_input::<AuxData, AuxDataShape, LocatedAuxDataParsingError<'_>>(
        &invalid_message_wire,
        AuxDataShape::Message,
        &invalid_message,
    );
}

#[test]
fn test_aux_data_too_long() {
    test_write_error(
        &AuxData::Message("m".repeat(256)),
        &AuxDataWritingError::DataTooLong {
            shape: AuxDataShape::Message,
            length: 256,
        },
    );
    test_write_error(
        &AuxData::Attribute(vec![0x00; 300]),
        &AuxDataWritingError::DataTooLong {
            shape: AuxDataShape::Attribute,
            length: 300,
        },
    );
}
