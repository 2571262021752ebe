//! The free functions are bound to the original dialect.

use munemo::Generator;
use munemo::ORIGINAL;

#[test]
fn legacy_functions_match_original_generator() {
    let generator = Generator::from(ORIGINAL.clone());

    for value in (-50_000..50_000).step_by(7).chain([i64::MIN, i64::MAX]) {
        let token = munemo::munemo(value);
        assert_eq!(token, generator.encode(value));
        assert_eq!(munemo::unmunemo(&token), Ok(value));
    }
}

#[test]
fn legacy_decode_reports_errors() {
    let error = munemo::unmunemo("hello").unwrap_err();
    assert_eq!(error.to_string(), "decode failed: unknown syllable llo");
}
