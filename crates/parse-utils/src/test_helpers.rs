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

//! Assertions shared by the wire tests. Inputs are plain byte slices, the
//! helpers wrap them into a [`Span`] starting at offset zero.

use crate::{ReadablePdu, ReadablePduWithOneInput, Span, WritablePdu};
use nom::IResult;
use std::fmt::Debug;

/// Concatenate the fields of a message into one buffer
pub fn combine(parts: Vec<&[u8]>) -> Vec<u8> {
    parts.concat()
}

fn assert_parsed_completely<T, E>(parsed: IResult<Span<'_>, T, E>, expected: &T) -> T
where
    T: PartialEq + Debug,
    E: Debug,
{
    match parsed {
        Ok((rest, value)) => {
            assert_eq!(&value, expected, "Parsed value is different from the expected one");
            assert!(
                rest.is_empty(),
                "Parser left {} octet(s) at offset {}: {:?}",
                rest.len(),
                rest.location_offset(),
                rest.fragment()
            );
            value
        }
        Err(err) => panic!("Expected {expected:?} to be parsed, but it failed with {err:?}"),
    }
}

fn assert_parse_error<T, E>(parsed: IResult<Span<'_>, T, E>, expected_err: &E)
where
    T: Debug,
    E: Debug + Eq,
{
    match parsed {
        Err(nom::Err::Error(err)) => assert_eq!(&err, expected_err),
        other => panic!("Expected parsing to fail with {expected_err:?}, got {other:?} instead"),
    }
}

/// Parse `input` and check it yields `expected` with no octet left over
pub fn test_parsed_completely<'a, T, E>(input: &'a [u8], expected: &T) -> T
where
    T: ReadablePdu<'a, E> + PartialEq + Debug,
    E: Debug,
{
    assert_parsed_completely(
        <T as ReadablePdu<'a, E>>::from_wire(Span::new(input)),
        expected,
    )
}

pub fn test_parsed_completely_with_one_input<'a, T, I, E>(
    input: &'a [u8],
    parser_input: I,
    expected: &T,
) -> T
where
    T: ReadablePduWithOneInput<'a, I, E> + PartialEq + Debug,
    E: Debug,
{
    assert_parsed_completely(
        <T as ReadablePduWithOneInput<'a, I, E>>::from_wire(Span::new(input), parser_input),
        expected,
    )
}

/// Parse `input` and check it fails with a recoverable `nom` error equal to
/// `expected_err`
pub fn test_parse_error<'a, T, E>(input: &'a [u8], expected_err: &E)
where
    T: ReadablePdu<'a, E> + Debug,
    E: Debug + Eq,
{
    assert_parse_error(
        <T as ReadablePdu<'a, E>>::from_wire(Span::new(input)),
        expected_err,
    )
}

pub fn test_parse_error_with_one_input<'a, T, I, E>(
    input: &'a [u8],
    parser_input: I,
    expected_err: &E,
) where
    T: ReadablePduWithOneInput<'a, I, E> + Debug,
    E: Debug + Eq,
{
    assert_parse_error(
        <T as ReadablePduWithOneInput<'a, I, E>>::from_wire(Span::new(input), parser_input),
        expected_err,
    )
}

/// Write `input` and compare the output and [`WritablePdu::len`] against
/// `expected`
pub fn test_write<T: WritablePdu<E>, E: Eq>(input: &T, expected: &[u8]) -> Result<(), E> {
    let mut buf = Vec::with_capacity(expected.len());
    input.write(&mut buf)?;
    assert_eq!(buf, expected, "Written octets are different from the expected ones");
    assert_eq!(input.len(), buf.len(), "len() doesn't match the written length");
    Ok(())
}

/// Write `input` and check it fails with `expected_err` before anything
/// reaches the writer
pub fn test_write_error<T: WritablePdu<E> + Debug, E: Eq + Debug>(input: &T, expected_err: &E) {
    let mut buf = vec![];
    match input.write(&mut buf) {
        Err(err) => assert_eq!(&err, expected_err),
        Ok(()) => panic!("Expected writing {input:?} to fail with {expected_err:?}"),
    }
    assert!(buf.is_empty(), "Failed write left octets behind: {buf:?}");
}
