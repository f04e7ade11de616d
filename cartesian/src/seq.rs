//! Multi-pass sequences addressed through cursors.
//!
//! A [`Sequence`] hands out cursors that can be copied and revisited, which
//! is what lets [`Product`](crate::Product) rewind its inner digits. The
//! extra capability traits form a ladder:
//!
//! ```text
//! Sequence ─┬─ CommonSequence ────────┐
//!           ├─ BidirectionalSequence ─┼─ RandomAccessSequence
//!           └─ SizedSequence ─────────┘
//! ```
//!
//! Cursors carry no reference to their sequence, so every operation takes the
//! sequence and the cursor together. Use [`Iter`](crate::Iter) for a cursor
//! bound to its sequence.

use core::cmp::Ordering;

/// A sequence that can be traversed any number of times.
pub trait Sequence {
    /// A position within the sequence, possibly at its end.
    type Cursor: Clone + PartialEq + PartialEq<Self::End>;

    /// The marker a cursor is compared against to detect the end.
    type End: Clone;

    /// The element produced at a cursor.
    type Item;

    /// The cursor of the first element (equal to the end when empty).
    fn start(&self) -> Self::Cursor;

    /// The end marker.
    fn stop(&self) -> Self::End;

    /// Moves `cursor` to the next position. `cursor` must not be at the end.
    fn step(&self, cursor: &mut Self::Cursor);

    /// Reads the element at `cursor`. `cursor` must not be at the end.
    fn fetch(&self, cursor: &Self::Cursor) -> Self::Item;

    fn is_stop(&self, cursor: &Self::Cursor) -> bool {
        *cursor == self.stop()
    }

    /// Moves `cursor` to the end. Sequences that can name their end
    /// should override the default walk.
    fn seek_stop(&self, cursor: &mut Self::Cursor) {
        while !self.is_stop(cursor) {
            self.step(cursor);
        }
    }

    /// The number of elements, if known without walking.
    fn len_hint(&self) -> Option<usize> {
        None
    }

    /// The number of elements before `cursor`, if known without walking.
    fn offset_hint(&self, _cursor: &Self::Cursor) -> Option<usize> {
        None
    }
}

/// A sequence whose end can be expressed as a cursor.
pub trait CommonSequence: Sequence {
    fn stop_cursor(&self) -> Self::Cursor;
}

/// A sequence whose cursors can move backwards.
pub trait BidirectionalSequence: Sequence {
    /// Moves `cursor` to the previous position. `cursor` must not be at the
    /// start.
    fn step_back(&self, cursor: &mut Self::Cursor);
}

/// A sequence that knows its length without walking it.
pub trait SizedSequence: Sequence {
    fn size(&self) -> usize;

    /// The size, or `None` if it does not fit in a `usize`.
    fn checked_size(&self) -> Option<usize> {
        Some(self.size())
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A sequence whose cursors can jump, be subtracted and be ordered in
/// constant time.
///
/// Implementations should also answer [`Sequence::len_hint`] and
/// [`Sequence::offset_hint`] so that iterators report exact sizes.
pub trait RandomAccessSequence: BidirectionalSequence + SizedSequence + CommonSequence {
    /// Moves `cursor` by `n` positions. The result must lie within
    /// `start()..=stop_cursor()`.
    fn jump(&self, cursor: &mut Self::Cursor, n: isize);

    /// The signed number of steps from `from` to `to`.
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize;

    fn compare(&self, a: &Self::Cursor, b: &Self::Cursor) -> Ordering {
        self.distance(b, a).cmp(&0)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Cursor = S::Cursor;
    type End = S::End;
    type Item = S::Item;

    fn start(&self) -> Self::Cursor {
        (**self).start()
    }

    fn stop(&self) -> Self::End {
        (**self).stop()
    }

    fn step(&self, cursor: &mut Self::Cursor) {
        (**self).step(cursor)
    }

    fn fetch(&self, cursor: &Self::Cursor) -> Self::Item {
        (**self).fetch(cursor)
    }

    fn is_stop(&self, cursor: &Self::Cursor) -> bool {
        (**self).is_stop(cursor)
    }

    fn seek_stop(&self, cursor: &mut Self::Cursor) {
        (**self).seek_stop(cursor)
    }

    fn len_hint(&self) -> Option<usize> {
        (**self).len_hint()
    }

    fn offset_hint(&self, cursor: &Self::Cursor) -> Option<usize> {
        (**self).offset_hint(cursor)
    }
}

impl<S: CommonSequence + ?Sized> CommonSequence for &S {
    fn stop_cursor(&self) -> Self::Cursor {
        (**self).stop_cursor()
    }
}

impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for &S {
    fn step_back(&self, cursor: &mut Self::Cursor) {
        (**self).step_back(cursor)
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for &S {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn checked_size(&self) -> Option<usize> {
        (**self).checked_size()
    }
}

impl<S: RandomAccessSequence + ?Sized> RandomAccessSequence for &S {
    fn jump(&self, cursor: &mut Self::Cursor, n: isize) {
        (**self).jump(cursor, n)
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        (**self).distance(from, to)
    }

    fn compare(&self, a: &Self::Cursor, b: &Self::Cursor) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Adapters available on every sequence.
pub trait SequenceExt: Sequence + Sized {
    /// Applies `f` to every element as it is fetched. Every capability of
    /// `self` carries over.
    fn map_items<T, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> T,
    {
        Map { inner: self, f }
    }
}

impl<S: Sequence> SequenceExt for S {}

/// See [`SequenceExt::map_items`].
#[derive(Clone, Debug)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, F, T> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> T,
{
    type Cursor = S::Cursor;
    type End = S::End;
    type Item = T;

    fn start(&self) -> Self::Cursor {
        self.inner.start()
    }

    fn stop(&self) -> Self::End {
        self.inner.stop()
    }

    fn step(&self, cursor: &mut Self::Cursor) {
        self.inner.step(cursor)
    }

    fn fetch(&self, cursor: &Self::Cursor) -> T {
        (self.f)(self.inner.fetch(cursor))
    }

    fn is_stop(&self, cursor: &Self::Cursor) -> bool {
        self.inner.is_stop(cursor)
    }

    fn seek_stop(&self, cursor: &mut Self::Cursor) {
        self.inner.seek_stop(cursor)
    }

    fn len_hint(&self) -> Option<usize> {
        self.inner.len_hint()
    }

    fn offset_hint(&self, cursor: &Self::Cursor) -> Option<usize> {
        self.inner.offset_hint(cursor)
    }
}

impl<S, F, T> CommonSequence for Map<S, F>
where
    S: CommonSequence,
    F: Fn(S::Item) -> T,
{
    fn stop_cursor(&self) -> Self::Cursor {
        self.inner.stop_cursor()
    }
}

impl<S, F, T> BidirectionalSequence for Map<S, F>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> T,
{
    fn step_back(&self, cursor: &mut Self::Cursor) {
        self.inner.step_back(cursor)
    }
}

impl<S, F, T> SizedSequence for Map<S, F>
where
    S: SizedSequence,
    F: Fn(S::Item) -> T,
{
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn checked_size(&self) -> Option<usize> {
        self.inner.checked_size()
    }
}

impl<S, F, T> RandomAccessSequence for Map<S, F>
where
    S: RandomAccessSequence,
    F: Fn(S::Item) -> T,
{
    fn jump(&self, cursor: &mut Self::Cursor, n: isize) {
        self.inner.jump(cursor, n)
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        self.inner.distance(from, to)
    }

    fn compare(&self, a: &Self::Cursor, b: &Self::Cursor) -> Ordering {
        self.inner.compare(a, b)
    }
}
