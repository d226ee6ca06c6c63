//! Newton-Raphson division with a binary-search seed.

use crate::common::consts::{ONE, TWO};
use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::DIGIT_BASE;
use crate::defs::EXPONENT_MIN;
use crate::num::ExactNumber;

impl ExactNumber {
    /// Divides `self` by `divisor` in the default working base.
    ///
    /// The absolute error of the result is at most
    /// `DIGIT_BASE ^ (-maximum_precision)`, one-sided: with `upper` the
    /// residual `result * divisor - self` lies in `[0, +epsilon]`,
    /// otherwise in `[-epsilon, 0]`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the divisor is zero.
    ///  - ExponentOverflow: the requested precision exceeds the exponent
    ///    range.
    pub fn divide_vector(
        &self,
        divisor: &ExactNumber,
        maximum_precision: u32,
        upper: bool,
    ) -> Result<ExactNumber, Error> {
        self.newton_raphson_division(divisor, maximum_precision, upper, DIGIT_BASE)
    }

    /// Divides `self` by `divisor` in base `base` by Newton-Raphson
    /// reciprocal iteration, with the error bound and direction of
    /// [`divide_vector`](Self::divide_vector) taken at `base` instead of
    /// the default.
    ///
    /// The divisor is scaled into `[1/2, 1)`, the reciprocal is seeded
    /// with `(48 - 32 * d) / 17` computed by the binary-search divider,
    /// and the iteration `r <- r * (2 - r * d)` runs until the answer
    /// stops improving by more than the error bound. A final residual
    /// check shifts the result by one unit of the last place when its
    /// direction disagrees with `upper`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the divisor is zero.
    ///  - InvalidArgument: the base is less than 2.
    ///  - ExponentOverflow: the requested precision exceeds the exponent
    ///    range.
    pub fn newton_raphson_division(
        &self,
        divisor: &ExactNumber,
        maximum_precision: u32,
        upper: bool,
        base: Digit,
    ) -> Result<ExactNumber, Error> {
        if maximum_precision as u64 > EXPONENT_MIN.unsigned_abs() as u64 {
            return Err(Error::ExponentOverflow);
        }
        if base < 2 {
            return Err(Error::InvalidArgument);
        }
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.is_zero() {
            return Ok(self.clone());
        }
        if *divisor == *ONE {
            return Ok(self.clone());
        }

        let positive = self.s == divisor.s;

        let minus_one = ONE.neg();
        if *divisor == minus_one {
            let mut result = self.clone();
            result.s = if positive { Sign::Pos } else { Sign::Neg };
            return Ok(result);
        }

        if *divisor == *self {
            return Ok(ONE.clone());
        }

        // scale so that 1/2 <= denominator < 1; the quotient is unchanged
        let mut numerator = self.abs();
        let mut denominator = divisor.abs();

        let exponent_diff = numerator.e - denominator.e;
        numerator.e = 0;
        denominator.e = 0;

        while denominator.m[0] < base / 2 {
            denominator = denominator.signed_mul(&TWO, base);
            numerator = numerator.signed_mul(&TWO, base);
        }

        // initial reciprocal guess (48 - 32 * d) / 17
        let thirty_two = ExactNumber::from_digit(32, base)?;
        let forty_eight = ExactNumber::from_digit(48, base)?;
        let seventeen = ExactNumber::from_digit(17, base)?;

        let seed = forty_eight.signed_sub(&thirty_two.signed_mul(&denominator, base), base - 1);
        let mut reciprocal =
            seed.binary_search_division(&seventeen, maximum_precision, base)?;

        // one unit at base^(-maximum_precision): a single leading digit
        // with the exponent moved one position further up
        let p = maximum_precision as isize - 1;
        let max_error = ExactNumber::from_raw_parts(&[1], -p as Exponent, Sign::Pos);

        let mut answer = reciprocal.signed_mul(&numerator, base);

        loop {
            reciprocal = reciprocal
                .signed_mul(&TWO.signed_sub(&reciprocal.signed_mul(&denominator, base), base - 1), base);
            reciprocal.normalize();

            // drop digits beyond the precision budget
            while reciprocal.m.len() as isize - reciprocal.e as isize - numerator.e as isize > p + 1 {
                reciprocal.m.pop();
            }

            let mut more_precise_answer = reciprocal.signed_mul(&numerator, base);
            more_precise_answer.normalize();

            while more_precise_answer.m.len() as isize - more_precise_answer.e as isize > p + 1 {
                more_precise_answer.m.pop();
            }

            if more_precise_answer == answer {
                break;
            }

            let error = more_precise_answer.signed_sub(&answer, base - 1).abs();
            answer = more_precise_answer;

            if !(error > max_error) {
                break;
            }
        }

        let mut result = answer;
        let zero = ExactNumber::new();

        let mut residual = result.signed_mul(&denominator, base).signed_sub(&numerator, base - 1);
        residual.normalize();

        if upper {
            // residual must be positive or zero
            if residual < zero {
                result = result.signed_add(&max_error, base - 1);
            }
            if residual > zero {
                // prefer an exact shift when one unit lands on zero
                let lower = result.signed_sub(&max_error, base - 1);
                let mut lower_residual =
                    lower.signed_mul(&denominator, base).signed_sub(&numerator, base - 1);
                lower_residual.normalize();
                if lower_residual == zero {
                    result = lower;
                }
            }
        } else {
            // residual must be negative or zero
            if residual > zero {
                result = result.signed_sub(&max_error, base - 1);
            }
            if residual < zero {
                let upper_candidate = result.signed_add(&max_error, base - 1);
                let mut upper_residual = upper_candidate
                    .signed_mul(&denominator, base)
                    .signed_sub(&numerator, base - 1);
                upper_residual.normalize();
                if upper_residual == zero {
                    result = upper_candidate;
                }
            }
        }

        result.e += exponent_diff;
        result.s = if positive { Sign::Pos } else { Sign::Neg };
        result.normalize();

        Ok(result)
    }

    /// Approximate division by bisection, used to seed the reciprocal of
    /// the Newton-Raphson iteration.
    ///
    /// A bracket of candidate quotients is narrowed by testing the sign
    /// of the residual of the midpoint; candidates and the bracket length
    /// are truncated to `maximum_precision + 1` digits each round. The
    /// final residual sign drives a directional rounding step.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the divisor is zero.
    ///  - InvalidArgument: the base is less than 2.
    ///  - ExponentOverflow: the requested precision exceeds the exponent
    ///    range.
    pub fn binary_search_division(
        &self,
        divisor: &ExactNumber,
        maximum_precision: u32,
        base: Digit,
    ) -> Result<ExactNumber, Error> {
        if maximum_precision as u64 > EXPONENT_MIN.unsigned_abs() as u64 {
            return Err(Error::ExponentOverflow);
        }
        if base < 2 {
            return Err(Error::InvalidArgument);
        }
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.is_zero() {
            return Ok(self.clone());
        }
        if *divisor == *ONE {
            return Ok(self.clone());
        }

        let positive = self.s == divisor.s;

        let minus_one = ONE.neg();
        if *divisor == minus_one {
            let mut result = self.clone();
            result.s = if positive { Sign::Pos } else { Sign::Neg };
            return Ok(result);
        }

        if *divisor == *self {
            return Ok(ONE.clone());
        }

        let add_base = base - 1;
        let half = ExactNumber::from_raw_parts(&[(base - 1) / 2 + 1], 0, Sign::Pos);
        let zero = ExactNumber::new();

        let mut numerator = self.abs();
        let mut denominator = divisor.abs();

        let exponent_diff = (self.e - 1) - (denominator.e - 1);
        numerator.e = 1;
        denominator.e = 1;

        let mut left;
        let right;
        if numerator > denominator {
            left = ONE.clone();
            right = numerator.clone();
        } else {
            left = zero.clone();
            right = ONE.clone();
        }

        let mut length = right.signed_sub(&left, add_base).signed_mul(&half, base);
        let mut result = length.signed_add(&left, add_base);

        let mut residual = result.signed_mul(&denominator, base).signed_sub(&numerator, add_base);
        if residual == zero {
            result.e += exponent_diff;
            result.s = if positive { Sign::Pos } else { Sign::Neg };
            return Ok(result);
        }

        let max_error =
            ExactNumber::from_raw_parts(&[1], -(maximum_precision as i64) as Exponent, Sign::Pos);
        let mut neg_max_error = max_error.clone();
        neg_max_error.s = Sign::Neg;

        // residual = (q + e) * den - num = e * den, so the residual
        // tolerance is the error tolerance scaled by the denominator
        let max_residual_error = max_error.signed_mul(&denominator, base);

        let digit_limit = maximum_precision as usize + 1;

        while residual.abs() >= max_residual_error && length.e >= max_error.e {
            if residual < neg_max_error {
                left = result.clone();
            }

            length = length.signed_mul(&half, base);
            length.normalize();
            while length.m.len() > digit_limit {
                length.m.pop();
            }

            result = left.signed_add(&length, add_base);
            while result.m.len() > digit_limit {
                result.m.pop();
            }

            residual = result.signed_mul(&denominator, base).signed_sub(&numerator, add_base);
            residual.normalize();
        }

        result.normalize();
        while result.m.len() > digit_limit {
            result.m.pop();
        }

        residual = result.signed_mul(&denominator, base).signed_sub(&numerator, add_base);
        residual.normalize();

        if residual < zero {
            result.round_up(add_base);
        }
        if residual > zero {
            result.round_down(add_base);
        }

        result.s = if positive { Sign::Pos } else { Sign::Neg };
        result.e += exponent_diff;
        result.normalize();

        Ok(result)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn int(v: Digit, base: Digit) -> ExactNumber {
        ExactNumber::from_digit(v, base).unwrap()
    }

    // |residual| <= base^(-p), as a number of the same base
    fn max_error(p: u32) -> ExactNumber {
        ExactNumber::from_raw_parts(&[1], -(p as Exponent - 1), Sign::Pos)
    }

    #[test]
    fn test_divide_exact() {
        // 10 / 2 = 5
        let q = int(10, 10).newton_raphson_division(&int(2, 10), 10, false, 10).unwrap();
        assert_eq!(q, int(5, 10));

        // divisor of 1, -1, and the dividend itself
        let a = int(42, 10);
        assert_eq!(a.newton_raphson_division(&int(1, 10), 10, false, 10).unwrap(), a);
        let neg_one = int(1, 10).neg();
        let q = a.newton_raphson_division(&neg_one, 10, false, 10).unwrap();
        assert_eq!(q, a.neg());
        assert_eq!(a.newton_raphson_division(&a, 10, true, 10).unwrap(), int(1, 10));

        // zero dividend
        let zero = ExactNumber::new();
        assert_eq!(zero.newton_raphson_division(&a, 10, false, 10).unwrap(), zero);
    }

    #[test]
    fn test_divide_errors() {
        let a = int(1, 10);
        assert_eq!(
            a.newton_raphson_division(&ExactNumber::new(), 10, false, 10),
            Err(Error::DivisionByZero)
        );
        assert_eq!(a.divide_vector(&ExactNumber::new(), 10, false), Err(Error::DivisionByZero));
        assert_eq!(
            a.newton_raphson_division(&int(3, 10), u32::MAX, false, 10),
            Err(Error::ExponentOverflow)
        );
        assert_eq!(
            a.newton_raphson_division(&int(3, 10), 10, false, 1),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            a.binary_search_division(&int(3, 10), 10, 0),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_one_third_residual_base10() {
        let one = int(1, 10);
        let three = int(3, 10);
        let p = 10;
        let eps = max_error(p);
        let zero = ExactNumber::new();

        // lower result: residual negative or zero, within a few units of
        // eps scaled through the divisor
        let bound = eps.base10_mult(&int(12, 10));
        let q = one.newton_raphson_division(&three, p, false, 10).unwrap();
        let residual = q.base10_mult(&three).base10_subtract(&one);
        assert!(residual <= zero);
        assert!(residual.abs() <= bound);

        // upper result: residual positive or zero
        let q = one.newton_raphson_division(&three, p, true, 10).unwrap();
        let residual = q.base10_mult(&three).base10_subtract(&one);
        assert!(residual >= zero);
        assert!(residual.abs() <= bound);
    }

    #[test]
    fn test_one_third_residual_default_base() {
        let one = int(1, DIGIT_BASE);
        let three = int(3, DIGIT_BASE);
        let p = 10;
        let zero = ExactNumber::new();
        let bound = max_error(p).signed_mul(&int(12, DIGIT_BASE), DIGIT_BASE);

        let q = one.divide_vector(&three, p, false).unwrap();
        let residual = &(&q * &three) - &one;
        assert!(residual <= zero);
        assert!(residual.abs() <= bound);

        let q = one.divide_vector(&three, p, true).unwrap();
        let residual = &(&q * &three) - &one;
        assert!(residual >= zero);
        assert!(residual.abs() <= bound);
    }

    #[test]
    fn test_divide_random_base10() {
        use rand::random;

        let p = 12;
        let zero = ExactNumber::new();

        for _ in 0..50 {
            let x = random::<u32>() % 100_000 + 1;
            let y = random::<u32>() % 1_000 + 1;
            let upper = random::<bool>();

            let a = int(x, 10);
            let b = int(y, 10);
            let q = a.newton_raphson_division(&b, p, upper, 10).unwrap();
            let residual = q.base10_mult(&b).base10_subtract(&a);

            if upper {
                assert!(residual >= zero);
            } else {
                assert!(residual <= zero);
            }

            // quotient error eps scaled by the divisor and the magnitude
            // of the dividend, with one digit of truncation slack
            let eps_shifted = ExactNumber::from_raw_parts(
                &[1],
                -(p as Exponent - 1) + a.exponent() - b.exponent() + 1,
                Sign::Pos,
            );
            let bound = b.base10_mult(&eps_shifted);
            assert!(residual.abs() <= bound);
        }
    }

    #[test]
    fn test_divide_signs() {
        let p = 8;
        let a = int(7, 10).neg();
        let b = int(2, 10);

        let q = a.newton_raphson_division(&b, p, false, 10).unwrap();
        assert_eq!(q, ExactNumber::from_raw_parts(&[3, 5], 1, Sign::Neg));

        let q = a.newton_raphson_division(&b.neg(), p, false, 10).unwrap();
        assert_eq!(q, ExactNumber::from_raw_parts(&[3, 5], 1, Sign::Pos));
    }

    #[test]
    fn test_binary_search_division() {
        // 1 / 4 = 0.25 exactly
        let q = int(1, 10).binary_search_division(&int(4, 10), 6, 10).unwrap();
        assert_eq!(q, ExactNumber::from_raw_parts(&[2, 5], 0, Sign::Pos));

        // residual bound for an inexact quotient
        let p = 8;
        let a = int(2, 10);
        let b = int(7, 10);
        let q = a.binary_search_division(&b, p, 10).unwrap();
        let residual = q.base10_mult(&b).base10_subtract(&a).abs();
        assert!(residual < max_error(p - 1));

        assert_eq!(
            int(5, 10).binary_search_division(&ExactNumber::new(), 4, 10),
            Err(Error::DivisionByZero)
        );
    }
}
