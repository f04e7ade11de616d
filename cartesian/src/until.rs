//! A terminator-delimited sequence, the usual case of a sequence whose
//! end is not a position.

use crate::seq::Sequence;

/// The elements of `items` before the first occurrence of `terminator`, or
/// all of them if it never occurs.
pub fn until<T: PartialEq + Clone>(items: &[T], terminator: T) -> Until<'_, T> {
    Until { items, terminator }
}

/// See [`until`].
///
/// The end can only be recognized by looking at the element under a cursor,
/// so this sequence is forward only and not common: it has no cursor for
/// its end and its length is unknown until walked.
#[derive(Clone, Debug)]
pub struct Until<'a, T> {
    items: &'a [T],
    terminator: T,
}

/// A cursor into an [`Until`] sequence.
#[derive(Clone, Copy, Debug)]
pub struct UntilCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<T> UntilCursor<'_, T> {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> PartialEq for UntilCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && core::ptr::eq(self.items, other.items)
    }
}

impl<T> Eq for UntilCursor<'_, T> {}

/// The end marker of an [`Until`] sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminator<T>(pub T);

impl<T: PartialEq> PartialEq<Terminator<T>> for UntilCursor<'_, T> {
    fn eq(&self, end: &Terminator<T>) -> bool {
        self.items.get(self.index).map_or(true, |item| *item == end.0)
    }
}

impl<'a, T: PartialEq + Clone> Sequence for Until<'a, T> {
    type Cursor = UntilCursor<'a, T>;
    type End = Terminator<T>;
    type Item = &'a T;

    fn start(&self) -> Self::Cursor {
        UntilCursor {
            items: self.items,
            index: 0,
        }
    }

    fn stop(&self) -> Self::End {
        Terminator(self.terminator.clone())
    }

    fn step(&self, cursor: &mut Self::Cursor) {
        cursor.index += 1;
    }

    fn fetch(&self, cursor: &Self::Cursor) -> &'a T {
        &cursor.items[cursor.index]
    }
}
