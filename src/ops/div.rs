//! Long division: Knuth Algorithm D with a single-digit fast path.

use crate::common::consts::TWO;
use crate::defs::Digit;
use crate::defs::DigitVec;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::ExactNumber;

// Binary-search a quotient digit d in [1, base - 1] such that
// d * divisor <= dividend < (d + 1) * divisor, for a dividend known to be
// not lower than the divisor. Returns the digit and the residual
// dividend - d * divisor.
fn quotient_digit_search(
    dividend: &ExactNumber,
    divisor: &ExactNumber,
    base: Digit,
) -> (Digit, ExactNumber) {
    let mut left: Digit = 1;
    let mut right: Digit = base - 1;
    let mut mid = (right - left) / 2 + left;
    let mut residual = dividend.clone();

    while left <= right {
        mid = (right - left) / 2 + left;

        let mut product = ExactNumber::from_raw_parts(&[mid], 1, Sign::Pos);
        product.multiply_vector(divisor, base);
        residual = dividend.clone();

        if product > residual {
            right = mid - 1;
        } else if product == residual {
            residual = ExactNumber::new();
            break;
        } else {
            residual.subtract_vector(&product, base - 1);
            if residual < *divisor {
                break;
            } else if residual == *divisor {
                mid += 1;
                residual = ExactNumber::new();
                break;
            } else {
                left = mid + 1;
            }
        }
    }

    (mid, residual)
}

impl ExactNumber {
    /// Divides the integer digit vector `dividend` by `divisor` in base
    /// `base` and returns the quotient and remainder vectors. A zero
    /// quotient or remainder comes back as an empty vector.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the divisor is zero.
    ///  - InvalidArgument: the base is less than 2.
    pub fn long_divide_vectors(
        dividend: &[Digit],
        divisor: &[Digit],
        base: Digit,
    ) -> Result<(Vec<Digit>, Vec<Digit>), Error> {
        if base < 2 {
            return Err(Error::InvalidArgument);
        }

        let (mut quotient, mut remainder) = Self::knuth_division(dividend, divisor, base)?;
        if *quotient == [0] {
            quotient.clear();
        }
        if *remainder == [0] {
            remainder.clear();
        }
        Ok((quotient.into_vec(), remainder.into_vec()))
    }

    /// Computes the quotient and remainder of two non-negative integer
    /// digit vectors by Knuth's Algorithm D.
    ///
    /// The divisor is brought to `divisor[0] >= base / 2` by doubling
    /// both operands; the remainder is divided back by the same power of
    /// two at the end. Quotient digits come from a two-leading-digit
    /// estimate refined by a correction loop, or from a binary search
    /// when the running dividend has the divisor's length.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the divisor is zero.
    fn knuth_division(
        dividend: &[Digit],
        divisor: &[Digit],
        base: Digit,
    ) -> Result<(DigitVec, DigitVec), Error> {
        let lead = dividend.iter().take_while(|&&d| d == 0).count();
        let aligned_dividend = &dividend[lead..];

        if aligned_dividend.is_empty() {
            return Ok((DigitVec::new(), DigitVec::new()));
        }
        if divisor.is_empty() {
            return Err(Error::DivisionByZero);
        }
        if aligned_dividend.len() < divisor.len()
            || (aligned_dividend.len() == divisor.len()
                && Self::aligned_is_lower(aligned_dividend, divisor, false))
        {
            return Ok((DigitVec::new(), DigitVec::from_slice(aligned_dividend)));
        }

        if divisor.len() == 1 {
            return Self::division_by_single_digit(dividend, divisor, base);
        }

        let mut exact_dividend = ExactNumber::from_digits(dividend, Sign::Pos);
        exact_dividend.normalize();
        let mut exact_divisor = ExactNumber::from_digits(divisor, Sign::Pos);
        exact_divisor.normalize();

        if exact_divisor.m[0] == 0 {
            return Err(Error::DivisionByZero);
        }

        // Make the most significant digit of the divisor at least base/2,
        // a precondition of the quotient digit estimate. Doubling both
        // operands does not change the quotient.
        let mut normalization_factor = 0u32;
        while exact_divisor.m[0] < base / 2 {
            exact_divisor.multiply_vector(&TWO, base);
            exact_dividend.multiply_vector(&TWO, base);
            normalization_factor += 1;
        }

        exact_divisor.pad_to_exponent();
        exact_dividend.pad_to_exponent();

        let n = exact_divisor.m.len();
        let m = exact_dividend.m.len();

        let mut quotient = DigitVec::new();
        let mut remainder = DigitVec::new();

        if m < n {
            // not reachable: doubling grows the dividend at least as much
            // as the divisor
            quotient.push(0);
            remainder = exact_dividend.m.clone();
        } else if m == n {
            if exact_dividend < exact_divisor {
                remainder = exact_dividend.m.clone();
                quotient.push(0);
            } else {
                let (digit, mut residual) = quotient_digit_search(&exact_dividend, &exact_divisor, base);
                quotient.push(digit);
                residual.normalize();
                residual.pad_to_exponent();
                remainder = residual.m.clone();
            }
        } else {
            let exact_base = ExactNumber::from_raw_parts(&[1, 0], 2, Sign::Pos);
            let one = ExactNumber::from_raw_parts(&[1], 1, Sign::Pos);

            let mut temp_dividend = ExactNumber::from_digits(&exact_dividend.m[..n], Sign::Pos);

            let mut j = n;
            while j < m {
                temp_dividend.m.push(exact_dividend.m[j]);
                temp_dividend.e += 1;
                if temp_dividend.is_zero() {
                    temp_dividend.m.clear();
                    temp_dividend.e = 0;
                }
                while temp_dividend < exact_divisor {
                    if j == m - 1 {
                        break;
                    }
                    j += 1;
                    temp_dividend.m.push(exact_dividend.m[j]);
                    temp_dividend.e += 1;
                    quotient.push(0);
                }

                if temp_dividend < exact_divisor {
                    quotient.push(0);
                    temp_dividend.normalize();
                    temp_dividend.pad_to_exponent();
                    remainder = temp_dividend.m.clone();
                    break;
                }

                if temp_dividend.m.len() == n {
                    let (digit, mut residual) =
                        quotient_digit_search(&temp_dividend, &exact_divisor, base);
                    quotient.push(digit);
                    residual.normalize();
                    temp_dividend = residual;
                    if temp_dividend.is_zero() {
                        temp_dividend.m.clear();
                        j += 1;
                        continue;
                    }
                    temp_dividend.pad_to_exponent();
                    if j == m - 1 {
                        remainder = temp_dividend.m.clone();
                        break;
                    }
                    j += 1;
                    continue;
                }

                temp_dividend.e = n as Exponent + 1;

                // estimate the quotient digit from the two leading digits
                // of the running dividend and the leading divisor digit
                let mut first_digit = ExactNumber::from_raw_parts(&[temp_dividend.m[0]], 1, Sign::Pos);
                let second_digit = ExactNumber::from_raw_parts(&[temp_dividend.m[1]], 1, Sign::Pos);
                first_digit.multiply_vector(&exact_base, base);
                first_digit.add_vector(&second_digit, base);
                first_digit.pad_to_exponent();

                let (estimate_digits, _) = Self::division_by_single_digit(
                    &first_digit.m,
                    &[exact_divisor.m[0]],
                    base,
                )?;

                let mut temp_quotient = ExactNumber::from_digits(&estimate_digits, Sign::Pos);
                let mut temp = temp_quotient.clone();
                temp.multiply_vector(&exact_divisor, base);
                while temp > temp_dividend {
                    temp_quotient.subtract_vector(&one, base - 1);
                    temp = temp_quotient.clone();
                    temp.multiply_vector(&exact_divisor, base);
                }
                temp_quotient.pad_to_exponent();
                quotient.extend_from_slice(&temp_quotient.m);

                temp_dividend.subtract_vector(&temp, base - 1);
                temp_dividend.normalize();
                temp_dividend.pad_to_exponent();
                if j == m - 1 {
                    remainder = temp_dividend.m.clone();
                }
                if temp_dividend.is_zero() {
                    temp_dividend.m.clear();
                }
                j += 1;
            }
        }

        if normalization_factor >= 1 && !remainder.is_empty() {
            let factor = 1 << normalization_factor;
            let (denormalized, _) = Self::division_by_single_digit(&remainder, &[factor], base)?;
            remainder = denormalized;
        }

        Ok((quotient, remainder))
    }

    /// Divides an integer digit vector by a single-digit divisor,
    /// binary-searching one quotient digit per step of the long division.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the divisor is zero.
    fn division_by_single_digit(
        dividend: &[Digit],
        divisor: &[Digit],
        base: Digit,
    ) -> Result<(DigitVec, DigitVec), Error> {
        if divisor[0] == 0 {
            return Err(Error::DivisionByZero);
        }

        // a divisor of one returns the dividend verbatim
        if divisor[0] == 1 {
            return Ok((DigitVec::from_slice(dividend), DigitVec::from_slice(&[0])));
        }

        let mut quotient = DigitVec::new();

        // leading zeros of the dividend map to leading zeros of the quotient
        let lead = dividend.iter().take_while(|&&d| d == 0).count();
        for _ in 0..lead {
            quotient.push(0);
        }
        let dividend = &dividend[lead..];

        if dividend.is_empty() {
            return Ok((quotient, DigitVec::from_slice(&[0])));
        }

        let dividend_size = dividend.len();

        // a single-digit dividend is native division
        if dividend_size == 1 {
            quotient.push(dividend[0] / divisor[0]);
            return Ok((quotient, DigitVec::from_slice(&[dividend[0] % divisor[0]])));
        }

        let mut exact_remainder = ExactNumber::from_raw_parts(&[dividend[0]], 1, Sign::Pos);
        let exact_divisor = ExactNumber::from_raw_parts(divisor, 1, Sign::Pos);

        let mut next_digit = 1usize;
        if dividend[0] < divisor[0] {
            exact_remainder.m.push(dividend[next_digit]);
            exact_remainder.e = 2;
            next_digit += 1;
        }

        while next_digit <= dividend_size {
            let (digit, residual) = quotient_digit_search(&exact_remainder, &exact_divisor, base);
            quotient.push(digit);
            exact_remainder = residual;

            if exact_remainder.is_zero() {
                if next_digit >= dividend_size {
                    break;
                }
                exact_remainder.m.clear();
                // stretches of zero dividend digits emit zero quotient digits
                while next_digit < dividend_size && dividend[next_digit] == 0 {
                    quotient.push(0);
                    next_digit += 1;
                }
                if next_digit == dividend_size {
                    break;
                }
                exact_remainder.m.push(dividend[next_digit]);
                exact_remainder.e = 1;
                next_digit += 1;

                if exact_remainder < exact_divisor {
                    quotient.push(0);
                    if next_digit >= dividend_size {
                        break;
                    }
                    exact_remainder.m.push(dividend[next_digit]);
                    exact_remainder.e = 2;
                    next_digit += 1;
                }
            } else if next_digit < dividend_size {
                exact_remainder.m.push(dividend[next_digit]);
                exact_remainder.e = 2;
                next_digit += 1;
            } else {
                break;
            }
        }

        Ok((quotient, exact_remainder.m.clone()))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::DoubleDigit;
    use crate::defs::DIGIT_BASE;
    use rand::random;

    fn digits_of(mut v: u128, base: u128) -> Vec<Digit> {
        let mut m = Vec::new();
        if v == 0 {
            m.push(0);
        }
        while v != 0 {
            m.push((v % base) as Digit);
            v /= base;
        }
        m.reverse();
        m
    }

    fn value_of(m: &[Digit], base: u128) -> u128 {
        m.iter().fold(0u128, |acc, &d| acc * base + d as u128)
    }

    #[test]
    fn test_single_digit_division() {
        let (q, r) = ExactNumber::long_divide_vectors(&[1, 2, 3, 4], &[7], 10).unwrap();
        assert_eq!(q, [1, 7, 6]);
        assert_eq!(r, [2]);

        // divisor of one is the identity
        let (q, r) = ExactNumber::long_divide_vectors(&[5, 0, 9], &[1], 10).unwrap();
        assert_eq!(q, [5, 0, 9]);
        assert!(r.is_empty());

        // zero stretches in the dividend
        let (q, r) = ExactNumber::long_divide_vectors(&[2, 0, 0, 4], &[2], 10).unwrap();
        assert_eq!(q, [1, 0, 0, 2]);
        assert!(r.is_empty());

        // leading zeros in the dividend
        let (q, r) = ExactNumber::long_divide_vectors(&[0, 0, 5], &[3], 10).unwrap();
        assert_eq!(q, [0, 0, 1]);
        assert_eq!(r, [2]);
    }

    #[test]
    fn test_knuth_division() {
        // 987654 / 321 = 3076 r 258
        let (q, r) = ExactNumber::long_divide_vectors(&[9, 8, 7, 6, 5, 4], &[3, 2, 1], 10).unwrap();
        assert_eq!(q, [3, 0, 7, 6]);
        assert_eq!(r, [2, 5, 8]);

        // equal lengths
        let (q, r) = ExactNumber::long_divide_vectors(&[8, 1], &[2, 7], 10).unwrap();
        assert_eq!(q, [3]);
        assert!(r.is_empty());

        // dividend lower than divisor
        let (q, r) = ExactNumber::long_divide_vectors(&[1, 2], &[2, 7], 10).unwrap();
        assert!(q.is_empty());
        assert_eq!(r, [1, 2]);

        // zero dividend
        let (q, r) = ExactNumber::long_divide_vectors(&[0, 0], &[2, 7], 10).unwrap();
        assert!(q.is_empty());
        assert!(r.is_empty());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            ExactNumber::long_divide_vectors(&[1, 2], &[0], 10),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            ExactNumber::long_divide_vectors(&[1, 2, 3], &[0, 0], 10),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(
            ExactNumber::long_divide_vectors(&[1, 2], &[7], 0),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            ExactNumber::long_divide_vectors(&[1, 2], &[7], 1),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_division_random_base10() {
        for _ in 0..500 {
            let x = random::<u128>() % 10u128.pow(30);
            let y = random::<u128>() % 10u128.pow(random::<u32>() % 12 + 1) + 1;

            let u = digits_of(x, 10);
            let v = digits_of(y, 10);
            let (q, r) = ExactNumber::long_divide_vectors(&u, &v, 10).unwrap();

            assert_eq!(value_of(&q, 10), x / y);
            assert_eq!(value_of(&r, 10), x % y);
        }
    }

    #[test]
    fn test_division_random_default_base() {
        let base = DIGIT_BASE as u128;
        for _ in 0..500 {
            let x = random::<u128>() % (base * base * base);
            let y = random::<u128>() % (base * base) + 1;

            let u = digits_of(x, base);
            let v = digits_of(y, base);
            let (q, r) = ExactNumber::long_divide_vectors(&u, &v, DIGIT_BASE).unwrap();

            assert_eq!(value_of(&q, base), x / y);
            assert_eq!(value_of(&r, base), x % y);
        }
    }

    #[test]
    fn test_quotient_digit_search() {
        let dividend = ExactNumber::from_digits(&[8, 1], Sign::Pos);
        let divisor = ExactNumber::from_digits(&[2, 7], Sign::Pos);
        let (d, residual) = quotient_digit_search(&dividend, &divisor, 10);
        assert_eq!(d, 3);
        assert!(residual.is_zero());

        let dividend = ExactNumber::from_digits(&[9, 9], Sign::Pos);
        let (d, residual) = quotient_digit_search(&dividend, &divisor, 10);
        assert_eq!(d, 3);
        assert_eq!(residual, ExactNumber::from_digits(&[1, 8], Sign::Pos));

        // one digit in the default base
        let dividend = ExactNumber::from_digits(&[DIGIT_BASE - 1], Sign::Pos);
        let divisor = ExactNumber::from_digits(&[DIGIT_BASE / 2], Sign::Pos);
        let (d, _) = quotient_digit_search(&dividend, &divisor, DIGIT_BASE);
        assert_eq!(d, ((DIGIT_BASE - 1) as DoubleDigit / (DIGIT_BASE / 2) as DoubleDigit) as Digit);
    }
}
