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

//! Byte input for `nom` parsers that remembers where it starts in the
//! original message.

use nom::{InputIter, InputLength, InputTake, Offset, Slice};
use std::ops::Deref;

/// Remaining octets of a message along with their offset from the first octet
/// of the message.
///
/// Every slice taken out of the span carries the offset forward, so an error
/// raised deep inside a parser still knows its absolute position through
/// [`BinarySpan::location_offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySpan<'a> {
    offset: usize,
    fragment: &'a [u8],
}

impl<'a> BinarySpan<'a> {
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self {
            offset: 0,
            fragment: buffer,
        }
    }

    /// Span for `fragment` that claims to start at `offset` in its message.
    /// The offset is only reported back, nothing before the fragment is ever
    /// read.
    pub const fn new_from_raw_offset(offset: usize, fragment: &'a [u8]) -> Self {
        Self { offset, fragment }
    }

    #[inline]
    pub const fn location_offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn fragment(&self) -> &'a [u8] {
        self.fragment
    }
}

impl<'a, R> Slice<R> for BinarySpan<'a>
where
    &'a [u8]: Slice<R>,
{
    #[inline]
    fn slice(&self, range: R) -> Self {
        let next_fragment = self.fragment.slice(range);
        let consumed = <[u8] as Offset>::offset(self.fragment, next_fragment);
        Self {
            offset: self.offset + consumed,
            fragment: next_fragment,
        }
    }
}

impl<'a> InputIter for BinarySpan<'a> {
    type Item = u8;
    type Iter = <&'a [u8] as InputIter>::Iter;
    type IterElem = <&'a [u8] as InputIter>::IterElem;

    #[inline]
    fn iter_indices(&self) -> Self::Iter {
        self.fragment.iter_indices()
    }

    #[inline]
    fn iter_elements(&self) -> Self::IterElem {
        self.fragment.iter_elements()
    }

    #[inline]
    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        self.fragment.position(predicate)
    }

    #[inline]
    fn slice_index(&self, count: usize) -> Result<usize, nom::Needed> {
        self.fragment.slice_index(count)
    }
}

impl InputLength for BinarySpan<'_> {
    #[inline]
    fn input_len(&self) -> usize {
        self.fragment.len()
    }
}

impl InputTake for BinarySpan<'_> {
    #[inline]
    fn take(&self, count: usize) -> Self {
        self.slice(..count)
    }

    #[inline]
    fn take_split(&self, count: usize) -> (Self, Self) {
        (self.slice(count..), self.slice(..count))
    }
}

impl Deref for BinarySpan<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.fragment
    }
}

impl<'a> From<&'a [u8]> for BinarySpan<'a> {
    #[inline]
    fn from(buffer: &'a [u8]) -> Self {
        Self::new(buffer)
    }
}
