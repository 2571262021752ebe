//! Round-trip testing for verifying that encoding followed by decoding
//! returns the original integer for every dialect, and that the sortable
//! dialect keeps its ordering guarantee.

use crate::{DialectKind, Generator};
use proptest::prelude::*;
use test_case::test_case;

/// Largest magnitude covered by the exhaustive sweep.
const SWEEP_LIMIT: i64 = 1_000_000;

proptest! {
    #[test]
    fn test_roundtrip_munemo2(value: i64) {
        let generator = Generator::from(DialectKind::Munemo2);
        let token = generator.encode(value);
        prop_assert_eq!(generator.decode(&token), Ok(value));
    }

    #[test]
    fn test_roundtrip_original(value: i64) {
        let generator = Generator::from(DialectKind::Original);
        let token = generator.encode(value);
        prop_assert_eq!(generator.decode(&token), Ok(value));
    }

    #[test]
    fn test_negative_is_prefixed(value in 1..=i64::MAX) {
        for kind in [DialectKind::Munemo2, DialectKind::Original] {
            let generator = Generator::from(kind);
            let expected = format!(
                "{}{}",
                generator.dialect().negative_symbol(),
                generator.encode(value)
            );
            prop_assert_eq!(generator.encode(-value), expected);
        }
    }

    #[test]
    fn test_munemo2_sorts_like_integers(a in 0..=i64::MAX, b in 0..=i64::MAX) {
        let generator = Generator::from(DialectKind::Munemo2);
        let (token_a, token_b) = (generator.encode(a), generator.encode(b));

        prop_assume!(token_a.len() == token_b.len());
        prop_assert_eq!(a.cmp(&b), token_a.as_bytes().cmp(token_b.as_bytes()));
    }

    #[test]
    fn test_munemo2_is_fixed_width(value in 0..=i64::MAX) {
        let token = Generator::new().encode(value);
        prop_assert_eq!(token.len() % 2, 0);
    }
}

#[test_case(DialectKind::Munemo2 ; "munemo2")]
#[test_case(DialectKind::Original ; "original")]
fn test_roundtrip_sweep(kind: DialectKind) {
    let generator = Generator::from(kind);

    let values = (-SWEEP_LIMIT..=SWEEP_LIMIT).chain([i64::MIN, i64::MIN + 1, i64::MAX]);
    for value in values {
        let token = generator.encode(value);
        assert_eq!(generator.decode(&token), Ok(value), "token {token}");
    }
}

#[test]
fn test_munemo2_sorts_within_each_width() {
    let generator = Generator::new();

    // 100..10_000 are exactly the four character tokens.
    let tokens = (100..10_000).map(|value| generator.encode(value)).collect::<Vec<_>>();
    assert!(tokens.iter().all(|token| token.len() == 4));
    assert!(tokens.windows(2).all(|pair| pair[0] < pair[1]));
}
