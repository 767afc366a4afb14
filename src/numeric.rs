//!
//! Validation rules for numeric text.
//!
//! [NumericRules] decides whether a piece of text is still a valid,
//! possibly incomplete, numeric literal. Incomplete means it can still
//! grow into a number, like a lone `-`.
//!
//! * Integer mode only allows ASCII digits and `-`, the value must fit
//!   an `i32` (or an `u32` if only positive values are allowed).
//! * Decimal mode allows one decimal separator, a leading sign and an
//!   exponent. The separator can be the one of the active locale or
//!   the invariant `.`. The magnitude must fit a 96-bit decimal.
//!

use crate::_private::NonExhaustive;
use format_num_pattern::NumberSymbols;
use pure_rust_locales::Locale;
use std::str::FromStr;

/// Decimal separator used regardless of the locale.
pub const INVARIANT_DECIMAL_SEP: char = '.';

/// Integer digits of the largest magnitude a 96-bit decimal can hold.
const DECIMAL_MAX: &str = "79228162514264337593543950335";

/// Configuration for the numeric validation.
#[derive(Debug, Clone, Copy)]
pub struct NumericRules {
    /// Reject any minus sign.
    pub only_positive: bool,
    /// Only whole numbers.
    pub only_integer: bool,
    /// Active locale.
    /// __read only__ use [set_locale](NumericRules::set_locale)
    pub locale: Locale,
    /// Decimal separator of the active locale.
    /// __read only__ renewed with set_locale.
    pub decimal_sep: char,

    pub non_exhaustive: NonExhaustive,
}

impl Default for NumericRules {
    fn default() -> Self {
        Self::new_loc(system_locale())
    }
}

impl NumericRules {
    /// Rules for the system locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the given locale.
    pub fn new_loc(locale: Locale) -> Self {
        Self {
            only_positive: false,
            only_integer: false,
            locale,
            decimal_sep: decimal_separator(locale),
            non_exhaustive: NonExhaustive,
        }
    }

    /// Change the locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.decimal_sep = decimal_separator(locale);
    }

    /// Is this still a valid, maybe incomplete, number?
    pub fn is_valid_input(&self, input: &str) -> bool {
        if self.only_integer {
            return input.chars().all(|c| c.is_ascii_digit() || c == '-')
                && self.validate_minus(input)
                && self.validate_value(input);
        }

        if input.chars().filter(|c| *c == ',' || *c == '.').count() > 1 {
            return false;
        }
        if !self.validate_minus(input) {
            return false;
        }
        self.validate_value(input)
    }

    /// A minus sign must be first and may occur only once.
    /// None at all with only_positive.
    pub fn validate_minus(&self, input: &str) -> bool {
        if input.contains('-') {
            if self.only_positive {
                return false;
            }
            if input.find('-') != Some(0) {
                return false;
            }
            if input.matches('-').count() > 1 {
                return false;
            }
        }
        true
    }

    /// The text must parse as a number of the configured kind.
    /// A lone minus is accepted as long as negative numbers are.
    pub fn validate_value(&self, input: &str) -> bool {
        if !self.only_positive && input == "-" {
            return true;
        }

        if self.only_integer {
            if self.only_positive {
                input.parse::<u32>().is_ok()
            } else {
                input.parse::<i32>().is_ok()
            }
        } else {
            parse_decimal(input, self.decimal_sep).is_some()
                || parse_decimal(input, INVARIANT_DECIMAL_SEP).is_some()
        }
    }
}

/// Decimal separator for the locale.
pub fn decimal_separator(locale: Locale) -> char {
    NumberSymbols::numeric(locale).decimal_sep
}

/// Locale of the running system. Falls back to POSIX.
///
/// The system reports something like `de-AT`, this is converted
/// to `de_AT`. If there is no such locale the plain language is tried.
pub fn system_locale() -> Locale {
    let Some(name) = sys_locale::get_locale() else {
        return Locale::POSIX;
    };
    parse_locale(&name)
}

/// Converts a BCP-47 like locale name. Falls back to POSIX.
pub fn parse_locale(name: &str) -> Locale {
    let name = name.replace('-', "_");
    // strip encoding and modifiers: de_AT.UTF-8@euro
    let name = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .to_string();

    if let Ok(locale) = Locale::from_str(&name) {
        return locale;
    }
    if let Some((lang, _)) = name.split_once('_') {
        if let Ok(locale) = Locale::from_str(lang) {
            return locale;
        }
    }
    Locale::POSIX
}

/// Parse a decimal number with the given decimal separator.
///
/// Accepts an optional sign, digits with one optional decimal separator
/// and an optional exponent. At least one digit must be present before
/// the exponent. Whitespace and grouping are not accepted.
///
/// Returns None if the syntax is wrong or the value is too big for a
/// 96-bit decimal.
pub fn parse_decimal(input: &str, decimal_sep: char) -> Option<f64> {
    let mut norm = String::with_capacity(input.len());
    let mut it = input.chars().peekable();

    match it.peek() {
        Some('+') => {
            it.next();
        }
        Some('-') => {
            it.next();
            norm.push('-');
        }
        _ => {}
    }

    let mut digits = String::new();
    let mut int_len = 0;
    let mut seen_sep = false;
    while let Some(c) = it.peek().copied() {
        if c.is_ascii_digit() {
            if !seen_sep {
                int_len += 1;
            }
            digits.push(c);
            norm.push(c);
        } else if c == decimal_sep && !seen_sep {
            seen_sep = true;
            norm.push('.');
        } else {
            break;
        }
        it.next();
    }
    if digits.is_empty() {
        return None;
    }

    let mut exp = 0i64;
    if let Some('e' | 'E') = it.peek() {
        it.next();
        norm.push('e');
        let mut exp_neg = false;
        if let Some(c @ ('+' | '-')) = it.peek().copied() {
            it.next();
            exp_neg = c == '-';
            norm.push(c);
        }
        let mut exp_digits = 0;
        while let Some(c) = it.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            exp_digits += 1;
            // saturates far beyond anything a decimal can hold.
            exp = (exp * 10 + (c as i64 - '0' as i64)).min(1_000_000);
            norm.push(c);
            it.next();
        }
        if exp_digits == 0 {
            return None;
        }
        if exp_neg {
            exp = -exp;
        }
    }

    if it.next().is_some() {
        return None;
    }

    // rust doesn't like "5." or ".5" everywhere.
    let norm = norm.replace(".e", "e");
    let norm = norm.strip_suffix('.').unwrap_or(&norm);

    if !fits_decimal(&digits, int_len, exp) {
        return None;
    }
    f64::from_str(norm).ok()
}

/// Does the integer part of `0.digits * 10^(int_len + exp)` fit
/// into a 96-bit decimal. Compared digit by digit, no rounding.
fn fits_decimal(digits: &str, int_len: usize, exp: i64) -> bool {
    let lead = digits.len() - digits.trim_start_matches('0').len();
    let digits = &digits[lead..];
    if digits.is_empty() {
        return true;
    }
    let point = int_len as i64 - lead as i64 + exp;
    let max_len = DECIMAL_MAX.len() as i64;
    if point < max_len {
        return true;
    }
    if point > max_len {
        return false;
    }

    let mut int_part = digits[..digits.len().min(DECIMAL_MAX.len())].to_string();
    while int_part.len() < DECIMAL_MAX.len() {
        int_part.push('0');
    }
    int_part.as_str() <= DECIMAL_MAX
}
