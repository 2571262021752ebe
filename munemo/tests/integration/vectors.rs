//! Known token vectors. These are persisted by users of the library, so a
//! change to any of them is a breaking change.

use munemo::DecodeError;
use munemo::DialectKind;
use munemo::Generator;

use test_case::test_case;

#[test_case(DialectKind::Munemo2, 0, "ba" ; "munemo2 zero")]
#[test_case(DialectKind::Munemo2, 1, "be" ; "munemo2 one")]
#[test_case(DialectKind::Munemo2, -1, "aabe" ; "munemo2 minus one")]
#[test_case(DialectKind::Munemo2, 99, "zu" ; "munemo2 ninety nine")]
#[test_case(DialectKind::Munemo2, -99, "aazu" ; "munemo2 minus ninety nine")]
#[test_case(DialectKind::Munemo2, 100, "beba" ; "munemo2 one hundred")]
#[test_case(DialectKind::Munemo2, -100, "aabeba" ; "munemo2 minus one hundred")]
#[test_case(DialectKind::Munemo2, 101, "bebe" ; "munemo2 one hundred and one")]
#[test_case(DialectKind::Munemo2, 392406, "kuguce" ; "munemo2 392406")]
#[test_case(DialectKind::Munemo2, 936710, "yosida" ; "munemo2 936710")]
#[test_case(DialectKind::Munemo2, 25437225, "halotiha" ; "munemo2 25437225")]
#[test_case(DialectKind::Munemo2, 73543569, "tonukasu" ; "munemo2 73543569")]
#[test_case(DialectKind::Original, 0, "ba" ; "original zero")]
#[test_case(DialectKind::Original, -1, "xabi" ; "original minus one")]
#[test_case(DialectKind::Original, 110000, "dibaba" ; "original 110000")]
#[test_case(DialectKind::Original, -110000, "xadibaba" ; "original minus 110000")]
#[test_case(DialectKind::Original, 111000, "didaba" ; "original 111000")]
#[test_case(DialectKind::Original, 112674, "dihisho" ; "original 112674")]
#[test_case(DialectKind::Original, 725973, "shuposhe" ; "original 725973")]
fn known_vectors(kind: DialectKind, value: i64, token: &str) {
    let generator = Generator::from(kind);

    assert_eq!(generator.encode(value), token);
    assert_eq!(generator.decode(token), Ok(value));
}

/// Tokens with a leading zero digit, or a negative zero, are accepted on
/// decode even though the encoder never produces them.
#[test_case(DialectKind::Munemo2, "bajo" => Ok(33) ; "munemo2 leading zero")]
#[test_case(DialectKind::Munemo2, "aabaji" => Ok(-32) ; "munemo2 negative leading zero")]
#[test_case(DialectKind::Munemo2, "aaba" => Ok(0) ; "munemo2 negative zero")]
#[test_case(DialectKind::Original, "babi" => Ok(1) ; "original leading zero")]
#[test_case(DialectKind::Original, "xaba" => Ok(0) ; "original negative zero")]
fn non_canonical_tokens(kind: DialectKind, token: &str) -> Result<i64, DecodeError> {
    Generator::from(kind).decode(token)
}

#[test_case(DialectKind::Munemo2, "hello", "llo" ; "munemo2 hello")]
#[test_case(DialectKind::Munemo2, "qabixabi", "qabixabi" ; "munemo2 unused letter")]
#[test_case(DialectKind::Munemo2, "b", "b" ; "munemo2 single character")]
#[test_case(DialectKind::Original, "hello", "llo" ; "original hello")]
#[test_case(DialectKind::Original, "x", "x" ; "original single character")]
#[test_case(DialectKind::Original, "shuposhe!", "!" ; "original trailing garbage")]
fn malformed_tokens(kind: DialectKind, token: &str, remainder: &str) {
    let error = Generator::from(kind).decode(token).unwrap_err();

    assert_eq!(
        error,
        DecodeError::UnknownSyllable { remainder: remainder.to_string() }
    );
    assert_eq!(
        error.to_string(),
        format!("decode failed: unknown syllable {remainder}")
    );
}

/// Tokens from one dialect are generally not valid in the other.
#[test]
fn dialects_are_not_interchangeable() {
    let original = Generator::from(DialectKind::Original);
    let munemo2 = Generator::from(DialectKind::Munemo2);

    assert!(munemo2.decode("shuposhe").is_err());
    assert_ne!(original.decode("aabe"), munemo2.decode("aabe"));
}
