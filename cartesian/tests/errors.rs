use std::ops::Range;

use cartesian::{Error, Product};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn messages() {
    assert_eq!(
        Error::SizeOverflow.to_string(),
        "the number of combinations is too large to address"
    );
    assert_eq!(
        Error::OutOfRange { index: -3, len: 4 }.to_string(),
        "position -3 is outside 0..=4"
    );
}

#[test]
fn overflowing_length() {
    init_tracing();
    let product = Product::new((0..usize::MAX, 0..usize::MAX, 0..2usize));

    assert_eq!(product.try_len(), Err(Error::SizeOverflow));
    assert_eq!(product.at(1), Err(Error::SizeOverflow));

    let mut it = product.begin();
    assert_eq!(it.try_jump(1), Err(Error::SizeOverflow));
    assert_eq!(it, product.begin());
}

#[test]
#[should_panic(expected = "too large to address")]
fn unchecked_length_panics() {
    let product = Product::new((0..usize::MAX, 0..3usize));
    let _ = product.len();
}

#[test]
fn out_of_range_leaves_the_iterator_alone() {
    init_tracing();
    let letters = ['a', 'b'];
    let product = Product::new((&letters, 0..3u8));

    let mut it = product.begin() + 4isize;
    assert_eq!(
        it.try_jump(3),
        Err(Error::OutOfRange { index: 7, len: 6 })
    );
    assert_eq!(it.index(), 4);
    assert_eq!(
        it.try_jump(-5),
        Err(Error::OutOfRange { index: -1, len: 6 })
    );
    assert_eq!(it.get(), (&'b', 1));
}

#[test]
fn errors_work_with_question_mark() {
    type Grid = Product<(Range<u8>, Range<u8>)>;

    fn third(product: &Grid) -> cartesian::Result<u8> {
        let (a, b) = product.at(2)?;
        Ok(a * 10 + b)
    }

    assert_eq!(third(&Product::new((0..2, 0..2))), Ok(10));
    assert_eq!(
        third(&Product::new((0..1, 0..2))),
        Err(Error::OutOfRange { index: 2, len: 2 })
    );
}

#[test]
#[cfg(target_pointer_width = "64")]
fn lengths_past_isize_cannot_be_addressed() {
    init_tracing();
    let product = Product::new((0..3usize, 0..(1usize << 62)));

    assert_eq!(product.try_len(), Ok(3 << 62));
    assert_eq!(product.at((1 << 63) + 5), Err(Error::SizeOverflow));
    assert_eq!(product.at(5), Err(Error::SizeOverflow));

    let mut it = product.begin();
    assert_eq!(it.try_jump(5), Err(Error::SizeOverflow));
    assert_eq!(it, product.begin());
}

#[test]
#[cfg(target_pointer_width = "64")]
fn lengths_up_to_isize_are_addressed_exactly() {
    let product = Product::new((0..2usize, 0..(1usize << 61)));

    assert_eq!(product.at((1 << 61) + 5), Ok((1, 5)));
    assert_eq!(
        product.at(1 << 62),
        Err(Error::OutOfRange { index: 1 << 62, len: 1 << 62 })
    );

    let mut it = product.begin();
    assert_eq!(it.try_jump((1 << 62) - 1), Ok(()));
    assert_eq!(it.get(), (1, (1 << 61) - 1));
    assert_eq!(it.try_jump(1), Ok(()));
    assert!(it.is_end());
}
