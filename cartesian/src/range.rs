use core::cmp::Ordering;
use core::ops::Range;

use crate::seq::{
    BidirectionalSequence, CommonSequence, RandomAccessSequence, Sequence, SizedSequence,
};

// A range with `end < start` is empty; its end is clamped to `start` so that
// `start() == stop()` still holds.
macro_rules! impl_range {
    ($($int:ty),* $(,)?) => {
        $(
            impl Sequence for Range<$int> {
                type Cursor = $int;
                type End = $int;
                type Item = $int;

                fn start(&self) -> $int {
                    self.start
                }

                fn stop(&self) -> $int {
                    self.end.max(self.start)
                }

                fn step(&self, cursor: &mut $int) {
                    *cursor += 1;
                }

                fn fetch(&self, cursor: &$int) -> $int {
                    *cursor
                }

                fn seek_stop(&self, cursor: &mut $int) {
                    *cursor = self.stop();
                }

                fn len_hint(&self) -> Option<usize> {
                    Some(self.size())
                }

                fn offset_hint(&self, cursor: &$int) -> Option<usize> {
                    usize::try_from(*cursor as i128 - self.start as i128).ok()
                }
            }

            impl CommonSequence for Range<$int> {
                fn stop_cursor(&self) -> $int {
                    self.stop()
                }
            }

            impl BidirectionalSequence for Range<$int> {
                fn step_back(&self, cursor: &mut $int) {
                    *cursor -= 1;
                }
            }

            impl SizedSequence for Range<$int> {
                fn size(&self) -> usize {
                    (self.stop() as i128 - self.start as i128) as usize
                }
            }

            impl RandomAccessSequence for Range<$int> {
                fn jump(&self, cursor: &mut $int, n: isize) {
                    *cursor = (*cursor as i128 + n as i128) as $int;
                }

                fn distance(&self, from: &$int, to: &$int) -> isize {
                    (*to as i128 - *from as i128) as isize
                }

                fn compare(&self, a: &$int, b: &$int) -> Ordering {
                    a.cmp(b)
                }
            }
        )*
    };
}

impl_range!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
