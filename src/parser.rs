//! Parser for decimal numbers in scientific format.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;

/// The pieces of a parsed decimal number: integer digits, fractional
/// digits (both trimmed of non-significant zeros), the adjusted base-10
/// exponent, and the sign.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DecimalParts<'a> {
    pub integer: &'a str,
    pub fractional: &'a str,
    pub exponent: Exponent,
    pub sign: Sign,
}

/// Parses a number of the form `(+|-)? D+ (. D*)? (e (+|-)? D+)?`.
///
/// A leading zero followed by another digit is rejected as octal-like
/// input. The exponent accumulates with overflow checking.
pub(crate) fn parse_decimal(s: &str) -> Result<DecimalParts<'_>, Error> {
    let b = s.as_bytes();

    let mut exponent: Exponent = 0;
    let mut exp_positive = true;
    let mut sign = Sign::Pos;

    let mut has_exponent = false;
    let mut has_decimal = false;

    let mut index = 0;

    if b.first() == Some(&b'-') {
        sign = Sign::Neg;
        index = 1;
    } else if b.first() == Some(&b'+') {
        index = 1;
    }
    let sign_ofs = index;

    if sign_ofs >= b.len() {
        return Err(Error::InvalidStringNumber);
    }
    if !b[sign_ofs].is_ascii_digit() {
        return Err(Error::InvalidStringNumber);
    }
    // a leading zero may only stand alone before the point or exponent
    if b[sign_ofs] == b'0' && b.len() > sign_ofs + 1 && b[sign_ofs + 1].is_ascii_digit() {
        return Err(Error::OctalInputNotSupported);
    }

    let mut integer_count = 0usize;
    let mut decimal_start_index = 0usize;
    let mut decimal_count = 0usize;
    let mut exponent_count = 0usize;

    let mut integer_lhs_zeros = 0usize;
    let mut integer_rhs_zeros = 0usize;
    let mut decimal_lhs_zeros = 0usize;
    let mut decimal_rhs_zeros = 0usize;

    while index < b.len() {
        let c = b[index];

        // '.' comes before 'e', and each of them at most once
        if !has_exponent {
            if c == b'e' {
                has_exponent = true;
                match b.get(index + 1) {
                    Some(&b'-') => {
                        exp_positive = false;
                        index += 1;
                    }
                    Some(&b'+') => {
                        index += 1;
                    }
                    _ => {}
                }
                index += 1;
                continue;
            } else if !has_decimal && c == b'.' {
                has_decimal = true;
                decimal_start_index = index + 1;
                index += 1;
                continue;
            }
        }

        if !c.is_ascii_digit() {
            // a zero start suggests the input meant an octal literal
            return Err(if b[sign_ofs] == b'0' {
                Error::OctalInputNotSupported
            } else {
                Error::InvalidStringNumber
            });
        }

        if has_exponent {
            exponent_count += 1;
            exponent = exponent
                .checked_mul(10)
                .and_then(|e| e.checked_add((c - b'0') as Exponent))
                .ok_or(Error::ExponentOverflow)?;
        } else if has_decimal {
            if c == b'0' {
                if decimal_count == 0 {
                    decimal_lhs_zeros += 1;
                } else {
                    decimal_rhs_zeros += 1;
                }
            } else {
                decimal_count += 1 + decimal_rhs_zeros;
                decimal_rhs_zeros = 0;
            }
        } else if c == b'0' {
            if integer_count == 0 {
                integer_lhs_zeros += 1;
            } else {
                integer_rhs_zeros += 1;
            }
        } else {
            integer_count += 1 + integer_rhs_zeros;
            integer_rhs_zeros = 0;
        }

        index += 1;
    }

    if has_exponent && exponent_count == 0 {
        return Err(Error::InvalidStringNumber);
    }

    if !exp_positive {
        exponent = -exponent;
    }

    exponent += integer_count as Exponent;

    let mut decimal_start = decimal_start_index;
    if integer_count == 0 {
        decimal_start += decimal_lhs_zeros;
        exponent -= decimal_lhs_zeros as Exponent;
    } else {
        exponent += integer_rhs_zeros as Exponent;
        integer_count += integer_rhs_zeros;
        if decimal_count > 0 {
            decimal_count += decimal_lhs_zeros;
        }
    }

    let integer_start = sign_ofs + integer_lhs_zeros;
    let integer = &s[integer_start..integer_start + integer_count];
    let fractional = &s[decimal_start..decimal_start + decimal_count];

    // the counters keep trailing zeros out of the fractional view; a
    // number with no fraction sheds them from the integer view instead
    let fractional = fractional.trim_end_matches('0');
    let integer = if fractional.is_empty() {
        integer.trim_end_matches('0')
    } else {
        integer
    };

    Ok(DecimalParts {
        integer,
        fractional,
        exponent,
        sign,
    })
}
