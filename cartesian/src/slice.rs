use core::cmp::Ordering;

use crate::seq::{
    BidirectionalSequence, CommonSequence, RandomAccessSequence, Sequence, SizedSequence,
};

// Slices, arrays and vectors are all indexed by `usize` and hand out
// references that outlive the sequence value itself.
macro_rules! impl_indexed {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Sequence for $ty {
                type Cursor = usize;
                type End = usize;
                type Item = &'a T;

                fn start(&self) -> usize {
                    0
                }

                fn stop(&self) -> usize {
                    self.len()
                }

                fn step(&self, cursor: &mut usize) {
                    *cursor += 1;
                }

                fn fetch(&self, cursor: &usize) -> &'a T {
                    let items: &'a [T] = *self;
                    &items[*cursor]
                }

                fn seek_stop(&self, cursor: &mut usize) {
                    *cursor = self.len();
                }

                fn len_hint(&self) -> Option<usize> {
                    Some(self.len())
                }

                fn offset_hint(&self, cursor: &usize) -> Option<usize> {
                    Some(*cursor)
                }
            }

            impl<$($generics)*> CommonSequence for $ty {
                fn stop_cursor(&self) -> usize {
                    self.len()
                }
            }

            impl<$($generics)*> BidirectionalSequence for $ty {
                fn step_back(&self, cursor: &mut usize) {
                    *cursor -= 1;
                }
            }

            impl<$($generics)*> SizedSequence for $ty {
                fn size(&self) -> usize {
                    self.len()
                }
            }

            impl<$($generics)*> RandomAccessSequence for $ty {
                fn jump(&self, cursor: &mut usize, n: isize) {
                    *cursor = cursor.wrapping_add_signed(n);
                }

                fn distance(&self, from: &usize, to: &usize) -> isize {
                    (*to as isize) - (*from as isize)
                }

                fn compare(&self, a: &usize, b: &usize) -> Ordering {
                    a.cmp(b)
                }
            }
        )*
    };
}

impl_indexed! {
    &'a [T] => ['a, T],
    &'a [T; N] => ['a, T, const N: usize],
    &'a Vec<T> => ['a, T],
}

/// A string slice is a sequence of its `char`s, addressed by byte offset.
///
/// Counting chars is linear, so `&str` is common and bidirectional but
/// neither sized nor random access.
impl<'a> Sequence for &'a str {
    type Cursor = usize;
    type End = usize;
    type Item = char;

    fn start(&self) -> usize {
        0
    }

    fn stop(&self) -> usize {
        self.len()
    }

    fn step(&self, cursor: &mut usize) {
        *cursor += self.fetch(cursor).len_utf8();
    }

    fn fetch(&self, cursor: &usize) -> char {
        self[*cursor..]
            .chars()
            .next()
            .unwrap_or_else(|| panic!("cursor {cursor} is past the end of the string"))
    }

    fn seek_stop(&self, cursor: &mut usize) {
        *cursor = self.len();
    }
}

impl<'a> CommonSequence for &'a str {
    fn stop_cursor(&self) -> usize {
        self.len()
    }
}

impl<'a> BidirectionalSequence for &'a str {
    fn step_back(&self, cursor: &mut usize) {
        *cursor -= 1;
        while !self.is_char_boundary(*cursor) {
            *cursor -= 1;
        }
    }
}
