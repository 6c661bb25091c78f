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

use bgp_shutcomm_parse_utils::{LocatedParsingError, Span};
use bgp_shutcomm_serde_macros::{LocatedError, WritingError};
use nom::{error::ErrorKind, number::complete::be_u8, IResult};
use std::io::{Cursor, Write};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct UndefinedCode(pub u8);

#[derive(LocatedError, PartialEq, Eq, Clone, Debug)]
pub enum CodeParsingError {
    NomError(#[from_nom] ErrorKind),
    Undefined(#[from_external] UndefinedCode),
}

mod message {
    use bgp_shutcomm_serde_macros::LocatedError;
    use nom::error::ErrorKind;

    #[derive(LocatedError, PartialEq, Eq, Clone, Debug)]
    pub enum MessageParsingError {
        NomError(#[from_nom] ErrorKind),
        Reserved(u8),
        CodeError(#[from_located] super::CodeParsingError),
    }
}

use message::{LocatedMessageParsingError, MessageParsingError};

fn parse_code(buf: Span<'_>) -> IResult<Span<'_>, u8, LocatedCodeParsingError<'_>> {
    nom::combinator::map_res(be_u8, |code| {
        if code < 8 {
            Ok(code)
        } else {
            Err(UndefinedCode(code))
        }
    })(buf)
}

fn parse_message(buf: Span<'_>) -> IResult<Span<'_>, u8, LocatedMessageParsingError<'_>> {
    let (buf, _) = nom::combinator::map_res(be_u8, |reserved| {
        if reserved == 0 {
            Ok(reserved)
        } else {
            Err(MessageParsingError::Reserved(reserved))
        }
    })(buf)?;
    parse_code(buf).map_err(|err| err.map(Into::into))
}

#[test]
fn test_from_nom() {
    let wire = [0x00];
    let expected = LocatedMessageParsingError::new(
        Span::new_from_raw_offset(1, &wire[1..]),
        MessageParsingError::CodeError(CodeParsingError::NomError(ErrorKind::Eof)),
    );
    assert_eq!(parse_message(Span::new(&wire)), Err(nom::Err::Error(expected)));
}

#[test]
fn test_from_external() {
    let wire = [0x09];
    let expected = LocatedCodeParsingError::new(
        Span::new(&wire),
        CodeParsingError::Undefined(UndefinedCode(9)),
    );
    assert_eq!(parse_code(Span::new(&wire)), Err(nom::Err::Error(expected)));
}

#[test]
fn test_from_own_error() {
    let wire = [0x01, 0x02];
    let expected =
        LocatedMessageParsingError::new(Span::new(&wire), MessageParsingError::Reserved(1));
    assert_eq!(parse_message(Span::new(&wire)), Err(nom::Err::Error(expected)));
}

#[test]
fn test_from_located() {
    let wire = [0x00, 0x09];
    let err = match parse_message(Span::new(&wire)) {
        Err(nom::Err::Error(err)) => err,
        other => panic!("expected an error, got {other:?}"),
    };
    assert_eq!(err.span().location_offset(), 1);
    assert_eq!(
        err.error(),
        &MessageParsingError::CodeError(CodeParsingError::Undefined(UndefinedCode(9)))
    );
    let (span, error): (Span<'_>, MessageParsingError) = err.clone().into();
    assert_eq!(span, Span::new_from_raw_offset(1, &wire[1..]));
    assert_eq!(err.into_error(), error);
    assert_eq!(parse_message(Span::new(&[0x00, 0x07])).map(|(_, x)| x), Ok(7));
}

#[derive(WritingError, PartialEq, Eq, Clone, Debug)]
pub enum CodeWritingError {
    StdIOError(#[from_std_io_error] String),
}

#[derive(WritingError, PartialEq, Eq, Clone, Debug)]
pub enum MessageWritingError {
    StdIOError(#[from_std_io_error] String),
    CodeError(#[from] CodeWritingError),
}

fn write_code<T: Write>(writer: &mut T, code: u8) -> Result<(), CodeWritingError> {
    writer.write_all(&[code])?;
    Ok(())
}

fn write_message<T: Write>(writer: &mut T, code: u8) -> Result<(), MessageWritingError> {
    writer.write_all(&[0x00])?;
    write_code(writer, code)?;
    Ok(())
}

#[test]
fn test_writing_error() {
    let mut buf = [0u8; 2];
    assert_eq!(write_message(&mut Cursor::new(&mut buf[..]), 5), Ok(()));
    assert_eq!(buf, [0x00, 0x05]);

    let mut short = [0u8; 1];
    let written = write_message(&mut Cursor::new(&mut short[..]), 5);
    assert!(
        matches!(
            written,
            Err(MessageWritingError::CodeError(CodeWritingError::StdIOError(_)))
        ),
        "unexpected result {written:?}"
    );

    let mut empty = [0u8; 0];
    let written = write_message(&mut Cursor::new(&mut empty[..]), 5);
    assert!(matches!(written, Err(MessageWritingError::StdIOError(_))));
}
