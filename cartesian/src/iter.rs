//! Iterators over any [`Sequence`].
//!
//! [`Iter`] is a cursor paired with a borrow of its sequence. Besides being
//! an [`Iterator`], it exposes the cursor operations its sequence supports:
//! stepping back, jumping with `+=`/`-=`, subtracting and ordering.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::{Error, Result};
use crate::product::Sentinel;
use crate::seq::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// A position in a borrowed sequence.
///
/// Two iterators are equal when their cursors are; for a product that means
/// every digit matches.
pub struct Iter<'a, S: Sequence> {
    seq: &'a S,
    cursor: S::Cursor,
}

impl<'a, S: Sequence> Iter<'a, S> {
    pub fn new(seq: &'a S, cursor: S::Cursor) -> Self {
        Self { seq, cursor }
    }

    pub fn sequence(&self) -> &'a S {
        self.seq
    }

    pub fn cursor(&self) -> &S::Cursor {
        &self.cursor
    }

    pub fn into_cursor(self) -> S::Cursor {
        self.cursor
    }

    pub fn is_end(&self) -> bool {
        self.seq.is_stop(&self.cursor)
    }

    /// The element under the cursor. Must not be called at the end.
    pub fn get(&self) -> S::Item {
        self.seq.fetch(&self.cursor)
    }

    /// Moves to the next element. Must not be called at the end.
    pub fn advance(&mut self) {
        self.seq.step(&mut self.cursor);
    }
}

impl<S: BidirectionalSequence> Iter<'_, S> {
    /// Moves to the previous element. Must not be called at the start.
    pub fn retreat(&mut self) {
        self.seq.step_back(&mut self.cursor);
    }
}

impl<S: RandomAccessSequence> Iter<'_, S> {
    /// The number of elements before the cursor.
    pub fn index(&self) -> usize {
        self.seq.distance(&self.seq.start(), &self.cursor) as usize
    }

    /// The number of elements from the cursor to the end.
    pub fn remaining(&self) -> usize {
        self.seq.distance(&self.cursor, &self.seq.stop_cursor()) as usize
    }

    /// Moves by `n` elements, refusing to leave `start..=end`.
    ///
    /// Fails with [`Error::SizeOverflow`] on sequences longer than
    /// `isize::MAX`, whose positions cannot be addressed.
    pub fn try_jump(&mut self, n: isize) -> Result<()> {
        let len = self.seq.checked_size().ok_or(Error::SizeOverflow)?;
        let last = isize::try_from(len).map_err(|_| Error::SizeOverflow)?;
        let position = self.seq.distance(&self.seq.start(), &self.cursor).saturating_add(n);
        if position < 0 || position > last {
            tracing::debug!(position, len, "rejected jump outside the sequence");
            return Err(Error::OutOfRange {
                index: position,
                len,
            });
        }

        self.seq.jump(&mut self.cursor, n);
        Ok(())
    }
}

impl<S: Sequence> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            cursor: self.cursor.clone(),
        }
    }
}

impl<S> fmt::Debug for Iter<'_, S>
where
    S: Sequence,
    S::Cursor: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("cursor", &self.cursor).finish()
    }
}

impl<S: Sequence> Iterator for Iter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.is_end() {
            return None;
        }
        let item = self.get();
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.seq, &self.cursor)
    }
}

impl<S: Sequence> FusedIterator for Iter<'_, S> {}

impl<S: RandomAccessSequence> ExactSizeIterator for Iter<'_, S> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<S: Sequence> PartialEq for Iter<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

impl<S> Eq for Iter<'_, S>
where
    S: Sequence,
    S::Cursor: Eq,
{
}

impl<S, E> PartialEq<Sentinel<E>> for Iter<'_, S>
where
    S: Sequence,
    S::Cursor: PartialEq<Sentinel<E>>,
{
    fn eq(&self, sentinel: &Sentinel<E>) -> bool {
        self.cursor == *sentinel
    }
}

impl<'a, S, E> PartialEq<Iter<'a, S>> for Sentinel<E>
where
    S: Sequence,
    S::Cursor: PartialEq<Sentinel<E>>,
{
    fn eq(&self, iter: &Iter<'a, S>) -> bool {
        iter.cursor == *self
    }
}

impl<S: RandomAccessSequence> PartialOrd for Iter<'_, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.seq.compare(&self.cursor, &other.cursor))
    }
}

impl<S> Ord for Iter<'_, S>
where
    S: RandomAccessSequence,
    S::Cursor: Eq,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq.compare(&self.cursor, &other.cursor)
    }
}

impl<S: RandomAccessSequence> AddAssign<isize> for Iter<'_, S> {
    fn add_assign(&mut self, n: isize) {
        self.seq.jump(&mut self.cursor, n);
    }
}

impl<S: RandomAccessSequence> SubAssign<isize> for Iter<'_, S> {
    fn sub_assign(&mut self, n: isize) {
        self.seq.jump(&mut self.cursor, -n);
    }
}

impl<S: RandomAccessSequence> Add<isize> for Iter<'_, S> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<S: RandomAccessSequence> Sub<isize> for Iter<'_, S> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<'a, S: RandomAccessSequence> Sub for Iter<'a, S> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        &self - &other
    }
}

impl<'a, S: RandomAccessSequence> Sub<&Iter<'a, S>> for &Iter<'a, S> {
    type Output = isize;

    fn sub(self, other: &Iter<'a, S>) -> isize {
        self.seq.distance(&other.cursor, &self.cursor)
    }
}

/// An owning iterator over a [`Sequence`].
pub struct IntoIter<S: Sequence> {
    seq: S,
    cursor: S::Cursor,
}

impl<S: Sequence> IntoIter<S> {
    pub fn new(seq: S) -> Self {
        let cursor = seq.start();
        Self { seq, cursor }
    }

    pub fn sequence(&self) -> &S {
        &self.seq
    }
}

impl<S> Clone for IntoIter<S>
where
    S: Sequence + Clone,
{
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
            cursor: self.cursor.clone(),
        }
    }
}

impl<S> fmt::Debug for IntoIter<S>
where
    S: Sequence + fmt::Debug,
    S::Cursor: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("seq", &self.seq)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.seq.is_stop(&self.cursor) {
            return None;
        }
        let item = self.seq.fetch(&self.cursor);
        self.seq.step(&mut self.cursor);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(&self.seq, &self.cursor)
    }
}

impl<S: Sequence> FusedIterator for IntoIter<S> {}

impl<S: RandomAccessSequence> ExactSizeIterator for IntoIter<S> {
    fn len(&self) -> usize {
        self.seq.distance(&self.cursor, &self.seq.stop_cursor()) as usize
    }
}

fn remaining_hint<S: Sequence>(seq: &S, cursor: &S::Cursor) -> (usize, Option<usize>) {
    if seq.is_stop(cursor) {
        return (0, Some(0));
    }
    match (seq.len_hint(), seq.offset_hint(cursor)) {
        (Some(len), Some(offset)) => {
            let remaining = len.saturating_sub(offset);
            (remaining, Some(remaining))
        }
        _ => (1, None),
    }
}
