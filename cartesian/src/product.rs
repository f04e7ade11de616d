//! The Cartesian product of a fixed number of sequences.
//!
//! A [`Product`] enumerates combinations like an odometer: the digits of a
//! [`ProductCursor`] are the cursors of the bases, digit 0 is the most
//! significant and the last base cycles fastest. Nothing is materialized;
//! each combination is built when it is fetched.
//!
//! Which operations a product supports follows from its bases:
//!
//! | product is              | when every base is                     |
//! |-------------------------|----------------------------------------|
//! | `Sequence`              | `Sequence`                             |
//! | `CommonSequence`        | `CommonSequence`                       |
//! | `BidirectionalSequence` | `BidirectionalSequence + CommonSequence` |
//! | `SizedSequence`         | `SizedSequence`                        |
//! | `RandomAccessSequence`  | `RandomAccessSequence`                 |
//!
//! ```
//! use cartesian::Product;
//!
//! let digits = [1, 2];
//! let product = Product::new((&digits, 10..13));
//! let pairs: Vec<_> = product.iter().map(|(a, b)| (*a, b)).collect();
//! assert_eq!(pairs, [(1, 10), (1, 11), (1, 12), (2, 10), (2, 11), (2, 12)]);
//! ```

use core::cmp::Ordering;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::seq::{
    BidirectionalSequence, CommonSequence, RandomAccessSequence, Sequence, SizedSequence,
};

mod sealed {
    pub trait Sealed {}
}

/// Tuples of sequences that can be combined into a [`Product`].
///
/// Implemented for tuples of up to twelve sequences, including `()`.
pub trait Bases: sealed::Sealed {
    /// The number of sequences in the tuple.
    const ARITY: usize;
}

/// A lazy Cartesian product view owning its bases.
///
/// A product of zero bases holds exactly one element, `()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Product<B> {
    bases: B,
}

/// Builds a [`Product`] of `bases`.
pub fn product<B: Bases>(bases: B) -> Product<B> {
    Product::new(bases)
}

impl<B: Bases> Product<B> {
    pub fn new(bases: B) -> Self {
        tracing::trace!(arity = B::ARITY, "constructed product view");
        Self { bases }
    }

    pub fn arity(&self) -> usize {
        B::ARITY
    }
}

impl<B> Product<B> {
    pub fn bases(&self) -> &B {
        &self.bases
    }

    pub fn into_bases(self) -> B {
        self.bases
    }
}

impl<B> Product<B>
where
    Self: Sequence,
{
    /// An iterator at the first combination.
    ///
    /// If a base other than the first is empty the product is empty and the
    /// iterator is already at the end.
    pub fn begin(&self) -> Iter<'_, Self> {
        Iter::new(self, self.start())
    }

    pub fn iter(&self) -> Iter<'_, Self> {
        self.begin()
    }

    /// The end marker, comparable with any iterator of this product.
    ///
    /// It only remembers the end of the first base, which is reached exactly
    /// when the whole product is exhausted.
    pub fn sentinel(&self) -> <Self as Sequence>::End {
        self.stop()
    }
}

impl<B> Product<B>
where
    Self: CommonSequence,
{
    /// An iterator one past the last combination: digit 0 at its end, every
    /// other digit rolled back to its start.
    pub fn end(&self) -> Iter<'_, Self> {
        Iter::new(self, self.stop_cursor())
    }
}

impl<B> Product<B>
where
    Self: SizedSequence,
{
    /// The number of combinations. Panics if it overflows `usize`.
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn try_len(&self) -> Result<usize> {
        self.checked_size().ok_or(Error::SizeOverflow)
    }
}

impl<B> Product<B>
where
    Self: RandomAccessSequence,
{
    /// The combination at linear position `index`.
    ///
    /// Products with more than `isize::MAX` combinations cannot be addressed
    /// and report [`Error::SizeOverflow`].
    pub fn at(&self, index: usize) -> Result<<Self as Sequence>::Item> {
        let len = self.try_len()?;
        if isize::try_from(len).is_err() {
            tracing::debug!(len, "product too large to index");
            return Err(Error::SizeOverflow);
        }
        let Some(offset) = isize::try_from(index).ok().filter(|_| index < len) else {
            tracing::debug!(index, len, "rejected product index");
            return Err(Error::OutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len,
            });
        };

        let mut cursor = self.start();
        self.jump(&mut cursor, offset);
        Ok(self.fetch(&cursor))
    }
}

impl<B> IntoIterator for Product<B>
where
    Self: Sequence,
{
    type Item = <Self as Sequence>::Item;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, B> IntoIterator for &'a Product<B>
where
    Product<B>: Sequence,
{
    type Item = <Product<B> as Sequence>::Item;
    type IntoIter = Iter<'a, Product<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// A position in a [`Product`]: one cursor per base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProductCursor<T> {
    digits: T,
}

impl<T> ProductCursor<T> {
    pub fn new(digits: T) -> Self {
        Self { digits }
    }

    /// The base cursors, most significant first.
    ///
    /// A product of zero bases has a single virtual digit instead: `0` before
    /// its only element and `1` after it.
    pub fn digits(&self) -> &T {
        &self.digits
    }

    pub fn into_digits(self) -> T {
        self.digits
    }
}

/// The end marker of a [`Product`] whose bases are not all common.
///
/// Holds the end of the first base only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sentinel<E> {
    end: E,
}

impl<E> Sentinel<E> {
    pub fn end(&self) -> &E {
        &self.end
    }
}

impl sealed::Sealed for () {}

impl Bases for () {
    const ARITY: usize = 0;
}

impl PartialEq<Sentinel<usize>> for ProductCursor<usize> {
    fn eq(&self, end: &Sentinel<usize>) -> bool {
        self.digits == end.end
    }
}

impl Sequence for Product<()> {
    type Cursor = ProductCursor<usize>;
    type End = Sentinel<usize>;
    type Item = ();

    fn start(&self) -> Self::Cursor {
        ProductCursor { digits: 0 }
    }

    fn stop(&self) -> Self::End {
        Sentinel { end: 1 }
    }

    fn step(&self, cursor: &mut Self::Cursor) {
        cursor.digits += 1;
    }

    fn fetch(&self, _: &Self::Cursor) {}

    fn seek_stop(&self, cursor: &mut Self::Cursor) {
        cursor.digits = 1;
    }

    fn len_hint(&self) -> Option<usize> {
        Some(1)
    }

    fn offset_hint(&self, cursor: &Self::Cursor) -> Option<usize> {
        Some(cursor.digits)
    }
}

impl CommonSequence for Product<()> {
    fn stop_cursor(&self) -> Self::Cursor {
        ProductCursor { digits: 1 }
    }
}

impl BidirectionalSequence for Product<()> {
    fn step_back(&self, cursor: &mut Self::Cursor) {
        cursor.digits -= 1;
    }
}

impl SizedSequence for Product<()> {
    fn size(&self) -> usize {
        1
    }
}

impl RandomAccessSequence for Product<()> {
    fn jump(&self, cursor: &mut Self::Cursor, n: isize) {
        cursor.digits = cursor.digits.wrapping_add_signed(n);
    }

    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        to.digits as isize - from.digits as isize
    }

    fn compare(&self, a: &Self::Cursor, b: &Self::Cursor) -> Ordering {
        a.digits.cmp(&b.digits)
    }
}

// `$i` lists the digits after the first in order, `$r` the same digits in
// reverse. Carries and borrows walk `$r` and finish at digit 0, which is never
// rolled over.
macro_rules! product_impl {
    ($n:literal; $A:ident $(, $B:ident $i:tt)*; rev $($r:tt)*) => {
        impl<$A: Sequence $(, $B: Sequence)*> sealed::Sealed for ($A, $($B,)*) {}

        impl<$A: Sequence $(, $B: Sequence)*> Bases for ($A, $($B,)*) {
            const ARITY: usize = $n;
        }

        impl<Z, $A: PartialEq<Z> $(, $B)*> PartialEq<Sentinel<Z>> for ProductCursor<($A, $($B,)*)> {
            fn eq(&self, end: &Sentinel<Z>) -> bool {
                self.digits.0 == end.end
            }
        }

        impl<$A: Sequence $(, $B: Sequence)*> Sequence for Product<($A, $($B,)*)> {
            type Cursor = ProductCursor<($A::Cursor, $($B::Cursor,)*)>;
            type End = Sentinel<$A::End>;
            type Item = ($A::Item, $($B::Item,)*);

            #[allow(unused_mut)]
            fn start(&self) -> Self::Cursor {
                let mut digits = (self.bases.0.start(), $(self.bases.$i.start(),)*);
                if false $(|| self.bases.$i.is_stop(&digits.$i))* {
                    self.bases.0.seek_stop(&mut digits.0);
                }
                ProductCursor { digits }
            }

            fn stop(&self) -> Self::End {
                Sentinel { end: self.bases.0.stop() }
            }

            #[allow(unused_mut)]
            fn step(&self, cursor: &mut Self::Cursor) {
                let digits = &mut cursor.digits;
                let mut carry = true;
                $(
                    if carry {
                        let base = &self.bases.$r;
                        base.step(&mut digits.$r);
                        carry = base.is_stop(&digits.$r);
                        if carry {
                            digits.$r = base.start();
                        }
                    }
                )*
                if carry {
                    self.bases.0.step(&mut digits.0);
                }
            }

            fn fetch(&self, cursor: &Self::Cursor) -> Self::Item {
                let digits = &cursor.digits;
                (self.bases.0.fetch(&digits.0), $(self.bases.$i.fetch(&digits.$i),)*)
            }

            fn is_stop(&self, cursor: &Self::Cursor) -> bool {
                self.bases.0.is_stop(&cursor.digits.0)
            }

            fn seek_stop(&self, cursor: &mut Self::Cursor) {
                let digits = &mut cursor.digits;
                self.bases.0.seek_stop(&mut digits.0);
                $(digits.$i = self.bases.$i.start();)*
            }

            fn len_hint(&self) -> Option<usize> {
                let len = self.bases.0.len_hint()?;
                $(let len = len.checked_mul(self.bases.$i.len_hint()?)?;)*
                Some(len)
            }

            fn offset_hint(&self, cursor: &Self::Cursor) -> Option<usize> {
                let digits = &cursor.digits;
                let offset = self.bases.0.offset_hint(&digits.0)?;
                $(
                    let base = &self.bases.$i;
                    let offset = offset
                        .checked_mul(base.len_hint()?)?
                        .checked_add(base.offset_hint(&digits.$i)?)?;
                )*
                Some(offset)
            }
        }

        impl<$A: CommonSequence $(, $B: CommonSequence)*> CommonSequence for Product<($A, $($B,)*)> {
            fn stop_cursor(&self) -> Self::Cursor {
                ProductCursor {
                    digits: (self.bases.0.stop_cursor(), $(self.bases.$i.start(),)*),
                }
            }
        }

        impl<$A $(, $B)*> BidirectionalSequence for Product<($A, $($B,)*)>
        where
            $A: BidirectionalSequence + CommonSequence,
            $($B: BidirectionalSequence + CommonSequence,)*
        {
            #[allow(unused_mut)]
            fn step_back(&self, cursor: &mut Self::Cursor) {
                let digits = &mut cursor.digits;
                let mut borrow = true;
                $(
                    if borrow {
                        let base = &self.bases.$r;
                        borrow = digits.$r == base.start();
                        if borrow {
                            digits.$r = base.stop_cursor();
                        }
                        base.step_back(&mut digits.$r);
                    }
                )*
                if borrow {
                    self.bases.0.step_back(&mut digits.0);
                }
            }
        }

        impl<$A: SizedSequence $(, $B: SizedSequence)*> SizedSequence for Product<($A, $($B,)*)> {
            fn size(&self) -> usize {
                match self.checked_size() {
                    Some(size) => size,
                    None => panic!("{}", Error::SizeOverflow),
                }
            }

            fn checked_size(&self) -> Option<usize> {
                let size = self.bases.0.checked_size()?;
                $(let size = size.checked_mul(self.bases.$i.checked_size()?)?;)*
                Some(size)
            }
        }

        impl<$A: RandomAccessSequence $(, $B: RandomAccessSequence)*> RandomAccessSequence
            for Product<($A, $($B,)*)>
        {
            #[allow(unused_mut)]
            fn jump(&self, cursor: &mut Self::Cursor, n: isize) {
                if n == 0 {
                    return;
                }

                let digits = &mut cursor.digits;
                let mut index = n;
                let mut weight = 1isize;
                $(
                    let base = &self.bases.$r;
                    index += base.distance(&base.start(), &digits.$r) * weight;
                    weight *= base.size() as isize;
                )*
                let lead = &self.bases.0;
                index += lead.distance(&lead.start(), &digits.0) * weight;

                $(
                    let base = &self.bases.$r;
                    let radix = base.size() as isize;
                    let mut digit = base.start();
                    base.jump(&mut digit, index.rem_euclid(radix));
                    digits.$r = digit;
                    index = index.div_euclid(radix);
                )*
                let mut digit = lead.start();
                lead.jump(&mut digit, index);
                digits.0 = digit;
            }

            #[allow(unused_mut)]
            fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
                let (from, to) = (&from.digits, &to.digits);
                let mut total = 0isize;
                let mut weight = 1isize;
                $(
                    let base = &self.bases.$r;
                    total += base.distance(&from.$r, &to.$r) * weight;
                    weight *= base.size() as isize;
                )*
                total + self.bases.0.distance(&from.0, &to.0) * weight
            }

            fn compare(&self, a: &Self::Cursor, b: &Self::Cursor) -> Ordering {
                let (a, b) = (&a.digits, &b.digits);
                self.bases.0.compare(&a.0, &b.0)
                    $(.then_with(|| self.bases.$i.compare(&a.$i, &b.$i)))*
            }
        }
    };
}

product_impl!(1; A; rev);
product_impl!(2; A, B 1; rev 1);
product_impl!(3; A, B 1, C 2; rev 2 1);
product_impl!(4; A, B 1, C 2, D 3; rev 3 2 1);
product_impl!(5; A, B 1, C 2, D 3, E 4; rev 4 3 2 1);
product_impl!(6; A, B 1, C 2, D 3, E 4, F 5; rev 5 4 3 2 1);
product_impl!(7; A, B 1, C 2, D 3, E 4, F 5, G 6; rev 6 5 4 3 2 1);
product_impl!(8; A, B 1, C 2, D 3, E 4, F 5, G 6, H 7; rev 7 6 5 4 3 2 1);
product_impl!(9; A, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8; rev 8 7 6 5 4 3 2 1);
product_impl!(10; A, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9; rev 9 8 7 6 5 4 3 2 1);
product_impl!(11; A, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10; rev 10 9 8 7 6 5 4 3 2 1);
product_impl!(12; A, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11; rev 11 10 9 8 7 6 5 4 3 2 1);

static_assertions::assert_impl_all!(Product<(&'static [u8], core::ops::Range<u32>)>: RandomAccessSequence);
static_assertions::assert_impl_all!(Product<(&'static str, &'static [u8])>: BidirectionalSequence, CommonSequence);
static_assertions::assert_not_impl_any!(Product<(&'static str, &'static [u8])>: SizedSequence, RandomAccessSequence);
static_assertions::assert_not_impl_any!(
    Product<(crate::Until<'static, u8>, &'static [u8])>: CommonSequence, BidirectionalSequence
);
