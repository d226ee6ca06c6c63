//! Conversion between the digit representation and decimal strings.

use crate::defs::Digit;
use crate::defs::DigitVec;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::ExactNumber;
use crate::parser;
use core::fmt;
use core::str::FromStr;
use itertools::Itertools;

// The base-10 digit vector of a digit value.
fn decimal_digits(mut v: Digit) -> DigitVec {
    let mut m = DigitVec::new();
    if v == 0 {
        m.push(0);
    }
    while v != 0 {
        m.push(v % 10);
        v /= 10;
    }
    m.reverse();
    m
}

fn digits_to_string(m: &[Digit]) -> String {
    m.iter().join("")
}

impl ExactNumber {
    /// Renders the exact decimal value of a number whose digits are in
    /// base `base`.
    ///
    /// The integer part folds each internal digit into a decimal
    /// accumulator multiplied by `base`; the fractional part divides each
    /// internal digit, padded with enough quotient resolution, by the
    /// matching power of `base`. Both run entirely in decimal arithmetic,
    /// so the output is exact; the cost is quadratic in the digit count.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the base is less than 2.
    pub fn to_decimal_string(&self, base: Digit) -> Result<String, Error> {
        if base < 2 {
            return Err(Error::InvalidArgument);
        }

        // split the digit vector at the radix point
        let mut integer_tokens: Vec<Digit> = Vec::new();
        let mut fractional_tokens: Vec<Digit> = Vec::new();

        if self.e <= 0 {
            for i in self.e as isize..self.m.len() as isize {
                if i < 0 {
                    fractional_tokens.push(0);
                } else {
                    fractional_tokens.push(self.m[i as usize]);
                }
            }
        } else {
            let digit_amount = (self.e as isize).max(self.m.len() as isize);
            for i in 0..digit_amount {
                let d = if (i as usize) < self.m.len() {
                    self.m[i as usize]
                } else {
                    0
                };
                if i < self.e as isize {
                    integer_tokens.push(d);
                } else {
                    fractional_tokens.push(d);
                }
            }
        }

        let base_number = ExactNumber::from_digits(&decimal_digits(base), Sign::Pos);

        // integer part: fold the internal digits, least significant
        // first, into a decimal accumulator while the more significant
        // ones pick up another factor of the base
        let mut integer: Vec<ExactNumber> = integer_tokens
            .iter()
            .map(|&d| ExactNumber::from_digits(&decimal_digits(d), Sign::Pos))
            .collect();
        let mut accumulator = ExactNumber::new();
        while let Some(token) = integer.pop() {
            accumulator = accumulator.base10_add(&token);
            for entry in integer.iter_mut() {
                *entry = entry.base10_mult(&base_number);
            }
        }
        let integer_string = digits_to_string(&accumulator.integral_digits());

        // fractional part: digit k is worth digit / base^k
        let mut powers: Vec<DigitVec> = vec![base_number.integral_digits()];
        let mut power = base_number.clone();
        for _ in 0..fractional_tokens.len() {
            power = power.base10_mult(&base_number);
            powers.push(power.integral_digits());
        }

        let mut precision = powers.last().unwrap().len() + 1;

        let mut fraction = ExactNumber::new();
        for (token, power) in fractional_tokens.iter().zip(powers.iter()) {
            let mut dividend = decimal_digits(*token);
            // pad the dividend so the quotient keeps enough resolution
            for _ in 0..precision {
                dividend.push(0);
            }
            let (quotient, _) = Self::long_divide_vectors(&dividend, power, 10)?;
            fraction = fraction.base10_add(&ExactNumber::from_digits(&quotient, Sign::Pos));
        }

        let mut fraction_digits = fraction.integral_digits();
        while fraction_digits.last() == Some(&0) {
            fraction_digits.pop();
            precision -= 1;
        }

        let sign_str = if self.s.is_positive() { "" } else { "-" };

        if fraction_digits.is_empty() {
            Ok(format!("{}{}", sign_str, integer_string))
        } else {
            let mut fraction_string = digits_to_string(&fraction_digits);
            while fraction_string.len() < precision {
                fraction_string.insert(0, '0');
            }
            Ok(format!("{}{}.{}", sign_str, integer_string, fraction_string))
        }
    }
}

/// Formats the number interpreting its digits as decimal, the form
/// produced by parsing. Values built by default-base arithmetic render
/// exactly with [`ExactNumber::to_decimal_string`] instead.
impl fmt::Display for ExactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal_string(10) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Parses a decimal number of the form `(+|-)? D+ (. D*)? (e (+|-)? D+)?`
/// and stores its digits as single decimal digits.
impl FromStr for ExactNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parser::parse_decimal(s)?;

        if parts.integer.is_empty() && parts.fractional.is_empty() {
            return Ok(ExactNumber::new());
        }

        let mut m = DigitVec::new();
        for c in parts.integer.bytes().chain(parts.fractional.bytes()) {
            m.push((c - b'0') as Digit);
        }

        Ok(ExactNumber::from_raw_parts(&m, parts.exponent, parts.sign))
    }
}
