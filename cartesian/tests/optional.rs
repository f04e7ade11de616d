use std::cell::Cell;

use cartesian::Optional;
use pretty_assertions::assert_eq;

fn half(n: i32) -> Option<i32> {
    (n % 2 == 0).then_some(n / 2)
}

fn positive(n: i32) -> Option<u32> {
    u32::try_from(n).ok().filter(|n| *n > 0)
}

#[test]
fn transform() {
    assert_eq!(Some(4).transform(|n| n + 1), Some(5));
    assert_eq!(Some("abc").transform(str::len), Some(3));
    assert_eq!(None::<i32>.transform(|n| n + 1), None);
}

#[test]
fn transform_ref_keeps_the_original() {
    let name = Some(String::from("odometer"));
    let len = name.transform_ref(|s| s.len());

    assert_eq!(len, Some(8));
    assert_eq!(name.as_deref(), Some("odometer"));
}

#[test]
fn bind_flattens() {
    assert_eq!(Some(8).bind(half), Some(4));
    assert_eq!(Some(7).bind(half), None);
    assert_eq!(None.bind(half), None);
    assert_eq!(Some(8).bind(half).bind(half).bind(half), Some(1));
    assert_eq!(Some(-2).bind(half).bind(positive), None);
}

#[test]
fn bind_laws() {
    for n in [-4, -1, 0, 3, 10] {
        // left identity
        assert_eq!(Some(n).bind(half), half(n));
        // right identity
        assert_eq!(Some(n).bind(Some), Some(n));
        // associativity
        assert_eq!(
            Some(n).bind(half).bind(positive),
            Some(n).bind(|m| half(m).bind(positive))
        );
    }
}

#[test]
fn callbacks_are_skipped_when_empty() {
    let calls = Cell::new(0);
    let count = |n: i32| {
        calls.set(calls.get() + 1);
        n
    };

    assert_eq!(None.transform(count), None);
    assert_eq!(None::<i32>.bind(|n| Some(count(n))), None);
    assert_eq!(None::<i32>.transform_ref(|n| count(*n)), None);
    assert_eq!(None::<i32>.bind_ref(|n| Some(count(*n))), None);
    assert_eq!(calls.get(), 0);

    assert_eq!(Some(1).transform(count), Some(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn bind_ref_returns_the_callback_result() {
    let held = Some(String::from("12"));
    let calls = Cell::new(0);

    let parsed: Option<i32> = held.bind_ref(|s| {
        calls.set(calls.get() + 1);
        s.parse().ok()
    });
    assert_eq!(parsed, Some(12));

    let rejected: Option<u8> = held.bind_ref(|s| {
        calls.set(calls.get() + 1);
        s.strip_prefix('x').and_then(|rest| rest.parse().ok())
    });
    assert_eq!(rejected, None);

    assert_eq!(calls.get(), 2);
    assert_eq!(held.as_deref(), Some("12"));
}

#[test]
fn otherwise_runs_only_when_empty() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Some(9)
    };

    assert_eq!(Some(1).otherwise(fallback), Some(1));
    assert_eq!(calls.get(), 0);

    assert_eq!(None.otherwise(fallback), Some(9));
    assert_eq!(calls.get(), 1);
}

#[test]
fn otherwise_with_side_effect_only() {
    let logged = Cell::new(false);

    let value: Option<i32> = None.otherwise(|| logged.set(true));
    assert_eq!(value, None);
    assert!(logged.get());

    logged.set(false);
    assert_eq!(Some(3).otherwise(|| logged.set(true)), Some(3));
    assert!(!logged.get());
}

#[test]
fn otherwise_may_give_up() {
    assert_eq!(None::<u8>.otherwise(|| None), None);
}

#[test]
fn otherwise_ref_runs_only_when_empty() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Some('z')
    };

    let present = Some('a');
    assert_eq!(present.otherwise_ref(fallback), Some('a'));
    assert_eq!(calls.get(), 0);

    let absent: Option<char> = None;
    assert_eq!(absent.otherwise_ref(fallback), Some('z'));
    assert_eq!(calls.get(), 1);
}

#[test]
fn otherwise_ref() {
    let present = Some(String::from("kept"));
    let absent: Option<String> = None;

    assert_eq!(present.otherwise_ref(|| Some(String::new())), present);
    assert_eq!(
        absent.otherwise_ref(|| Some(String::from("filled"))),
        Some(String::from("filled"))
    );
    assert_eq!(absent, None);
}

#[test]
fn chained_pipeline() {
    let misses = Cell::new(0);
    let parse = |input: &str| {
        Some(input)
            .bind(|s| s.parse::<i32>().ok())
            .bind(half)
            .transform(|n| n * 10)
            .otherwise(|| misses.set(misses.get() + 1))
    };

    assert_eq!(parse("12"), Some(60));
    assert_eq!(parse("13"), None);
    assert_eq!(parse("twelve"), None);
    assert_eq!(misses.get(), 2);
}

fn describe<O>(value: O) -> String
where
    O: Optional,
    O::Value: ToString,
{
    value
        .transform(|v| v.to_string())
        .into_option()
        .unwrap_or_else(|| String::from("nothing"))
}

#[test]
fn generic_over_optional() {
    assert_eq!(describe(Some(5)), "5");
    assert_eq!(describe(None::<char>), "nothing");
    assert!(Some(()).has_value());
    assert!(!Option::<()>::empty().has_value());
}
