use rat_numeric::numeric::NumericRules;
use rat_numeric::Locale;

fn rules(only_positive: bool, only_integer: bool) -> NumericRules {
    let mut r = NumericRules::new_loc(Locale::POSIX);
    r.only_positive = only_positive;
    r.only_integer = only_integer;
    r
}

#[test]
fn test_lone_minus() {
    assert!(rules(false, false).is_valid_input("-"));
    assert!(rules(false, true).is_valid_input("-"));
    assert!(!rules(true, false).is_valid_input("-"));
    assert!(!rules(true, true).is_valid_input("-"));
}

#[test]
fn test_minus_position() {
    for (p, i) in [(false, false), (false, true)] {
        let r = rules(p, i);
        assert!(r.is_valid_input("-5"));
        assert!(!r.is_valid_input("5-"));
        assert!(!r.is_valid_input("1-2"));
        assert!(!r.is_valid_input("--5"));
        assert!(!r.is_valid_input("-5-"));
    }
}

#[test]
fn test_validate_minus() {
    let r = rules(false, false);
    assert!(r.validate_minus("123"));
    assert!(r.validate_minus("-123"));
    assert!(r.validate_minus("-"));
    assert!(!r.validate_minus("1-"));
    assert!(!r.validate_minus("--"));

    let r = rules(true, false);
    assert!(r.validate_minus("123"));
    assert!(!r.validate_minus("-123"));
}

#[test]
fn test_decimal_separators() {
    let r = rules(false, false);
    assert!(r.is_valid_input("1.5"));
    assert!(!r.is_valid_input("1.5.1"));
    assert!(!r.is_valid_input("1,5.1"));
    assert!(!r.is_valid_input("1..5"));
    assert!(!r.is_valid_input(",,"));
}

#[test]
fn test_decimal_locale() {
    let mut r = NumericRules::new_loc(Locale::de_AT);
    assert_eq!(r.decimal_sep, ',');
    assert!(r.is_valid_input("3,14"));
    assert!(r.is_valid_input("3.14"));
    assert!(r.is_valid_input("-3,14"));

    r.set_locale(Locale::POSIX);
    assert_eq!(r.decimal_sep, '.');
    assert!(r.is_valid_input("3.14"));
    assert!(!r.is_valid_input("3,14"));
}

#[test]
fn test_decimal_mode() {
    let r = rules(false, false);
    assert!(r.is_valid_input("0"));
    assert!(r.is_valid_input("123"));
    assert!(r.is_valid_input("-0.5"));
    assert!(r.is_valid_input(".5"));
    assert!(r.is_valid_input("5."));
    assert!(r.is_valid_input("+5"));
    assert!(r.is_valid_input("1e5"));
    assert!(!r.is_valid_input(""));
    assert!(!r.is_valid_input("."));
    assert!(!r.is_valid_input("abc"));
    assert!(!r.is_valid_input("12a"));
    assert!(!r.is_valid_input("1 2"));
    assert!(!r.is_valid_input("12 "));
    assert!(!r.is_valid_input(" 12"));
    // exponent sign counts as minus
    assert!(!r.is_valid_input("1e-5"));
    // too big for a decimal
    assert!(!r.is_valid_input("100000000000000000000000000000"));
    assert!(r.is_valid_input("10000000000000000000000000000"));
}

#[test]
fn test_decimal_max() {
    let r = rules(false, false);
    assert!(r.is_valid_input("79228162514264337593543950335"));
    assert!(r.is_valid_input("-79228162514264337593543950335"));
    assert!(!r.is_valid_input("79228162514264337593543950336"));
    assert!(!r.is_valid_input("-79228162514264337593543950336"));
    assert!(!r.is_valid_input("79228162514264337593543950340"));
    assert!(r.is_valid_input("7.9228162514264337593543950335e28"));
    assert!(!r.is_valid_input("7.9228162514264337593543950336e28"));
}

#[test]
fn test_decimal_positive() {
    let r = rules(true, false);
    assert!(r.is_valid_input("1.5"));
    assert!(r.is_valid_input("+1.5"));
    assert!(!r.is_valid_input("-1.5"));
    assert!(!r.is_valid_input("-"));
}

#[test]
fn test_integer_mode() {
    let r = rules(false, true);
    assert!(r.is_valid_input("0"));
    assert!(r.is_valid_input("-17"));
    assert!(r.is_valid_input("2147483647"));
    assert!(r.is_valid_input("-2147483648"));
    assert!(!r.is_valid_input("2147483648"));
    assert!(!r.is_valid_input("1.2"));
    assert!(!r.is_valid_input("1,2"));
    assert!(!r.is_valid_input("+1"));
    assert!(!r.is_valid_input("1e5"));
    assert!(!r.is_valid_input(" "));
    assert!(!r.is_valid_input(""));
}

#[test]
fn test_integer_positive() {
    let r = rules(true, true);
    assert!(r.is_valid_input("0"));
    assert!(r.is_valid_input("4294967295"));
    assert!(!r.is_valid_input("4294967296"));
    assert!(!r.is_valid_input("-1"));
    assert!(!r.is_valid_input("-"));
    assert!(!r.is_valid_input("12x"));
    assert!(!r.is_valid_input("1.0"));
}

#[test]
fn test_non_ascii_digits() {
    let r = rules(false, true);
    assert!(!r.is_valid_input("١٢"));
    let r = rules(false, false);
    assert!(!r.is_valid_input("١٢"));
}
