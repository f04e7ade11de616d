use cartesian::{Error, Product};
use pretty_assertions::assert_eq;

fn fixture() -> ([i32; 3], Vec<char>) {
    ([7, 8, 9], vec!['p', 'q'])
}

#[test]
fn begin_plus_len_is_end() {
    let (numbers, letters) = fixture();
    let product = Product::new((&numbers, 0..4u32, &letters));
    let len = product.len() as isize;

    assert_eq!(len, 24);
    assert_eq!(product.begin() + len, product.end());
    assert_eq!(product.end() - product.begin(), len);
}

#[test]
fn jumps_match_stepping() {
    let (numbers, letters) = fixture();
    let product = Product::new((&numbers, 0..4u32, &letters));
    let begin = product.begin();
    let mut stepped = product.begin();

    for k in 0..=product.len() as isize {
        let jumped = begin.clone() + k;
        assert_eq!(jumped, stepped, "jump by {k}");
        assert_eq!(&jumped - &begin, k);
        assert_eq!(jumped.clone() + -k, begin);
        assert_eq!(jumped.index(), k as usize);
        assert_eq!(jumped.remaining(), product.len() - k as usize);

        if !stepped.is_end() {
            stepped.advance();
        }
    }
}

#[test]
fn jumps_cross_several_digits() {
    let (numbers, letters) = fixture();
    let product = Product::new((&numbers, 0..4u32, &letters));

    let mut it = product.begin();
    it += 13;
    assert_eq!(it.get(), (&8, 2, &'q'));

    it -= 6;
    assert_eq!(it.get(), (&7, 3, &'q'));

    let last = product.end() - 1isize;
    assert_eq!(last.get(), (&9, 3, &'q'));
}

#[test]
fn jumping_from_an_inner_position_backwards() {
    let product = Product::new((0..3i8, 0..5i8));
    let mut it = product.begin() + 12;
    assert_eq!(it.get(), (2, 2));

    it += -8;
    assert_eq!(it.get(), (0, 4));
}

#[test]
fn ordering_is_lexicographic_by_digit() {
    let product = Product::new((0..3usize, 0..3usize));
    let a = product.begin() + 2;
    let b = product.begin() + 3;

    assert!(a < b);
    assert!(b > a);
    assert!(a <= a.clone());
    assert!(product.end() > b);

    let mut shuffled = vec![product.begin() + 5, product.begin() + 1, product.begin() + 3];
    shuffled.sort();
    assert_eq!(
        shuffled.iter().map(|it| it.index()).collect::<Vec<_>>(),
        vec![1, 3, 5]
    );
}

#[test]
fn indexing() {
    let (numbers, letters) = fixture();
    let product = Product::new((&numbers, &letters));

    let all: Vec<_> = product.iter().collect();
    for (index, item) in all.iter().enumerate() {
        assert_eq!(product.at(index).as_ref(), Ok(item));
    }

    assert_eq!(
        product.at(6),
        Err(Error::OutOfRange { index: 6, len: 6 })
    );
}

#[test]
fn checked_jumps() {
    let product = Product::new((0..2u8, 0..3u8));
    let mut it = product.begin();

    assert_eq!(
        it.try_jump(-1),
        Err(Error::OutOfRange { index: -1, len: 6 })
    );
    assert_eq!(it.try_jump(7), Err(Error::OutOfRange { index: 7, len: 6 }));
    assert_eq!(it, product.begin());

    assert_eq!(it.try_jump(4), Ok(()));
    assert_eq!(it.get(), (1, 1));
    assert_eq!(it.try_jump(2), Ok(()));
    assert!(it.is_end());
}

#[test]
fn size_overflow() {
    let product = Product::new((0..usize::MAX, 0..usize::MAX));

    assert_eq!(product.try_len(), Err(Error::SizeOverflow));
    assert_eq!(product.at(0), Err(Error::SizeOverflow));
}

#[test]
fn zero_bases_jump() {
    let product = Product::new(());

    assert_eq!(product.begin() + 1, product.end());
    assert_eq!(product.end() - product.begin(), 1);
    assert_eq!(product.at(0), Ok(()));
}

#[test]
fn nested_products_jump_like_flat_ones() {
    let nested = Product::new((0..2u8, Product::new((0..3u8, 0..2u8))));
    let flat = Product::new((0..2u8, 0..3u8, 0..2u8));

    for index in 0..flat.len() {
        let (a, (b, c)) = nested.at(index).unwrap();
        assert_eq!((a, b, c), flat.at(index).unwrap());
    }
}
