//! Multiplicative core: schoolbook multiplication with split-product carries.

use crate::defs::Digit;
use crate::defs::DigitVec;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::DIGIT_BASE;
use crate::num::ExactNumber;
use core::ops::{Mul, MulAssign};
use smallvec::smallvec;

/// Returns `(a * b) % m` by double-and-add, without widening: `a` stays
/// below `m` and `m` does not exceed half the machine range, so every
/// intermediate fits a digit.
pub(crate) fn mulmod(a: Digit, b: Digit, m: Digit) -> Digit {
    let mut res: Digit = 0;
    let mut a = a % m;
    let mut b = b;

    while b > 0 {
        if b % 2 == 1 {
            res = (res + a) % m;
        }
        a = (a * 2) % m;
        b /= 2;
    }

    res % m
}

/// Returns `⌊a * b / c⌋` by bit-by-bit reduction of `b`, maintaining
/// `a_orig * b_orig = res * c + rem + a * b` with `a < c` and `rem < c`
/// throughout. The quotient must fit a digit.
pub(crate) fn mult_div(a: Digit, b: Digit, c: Digit) -> Digit {
    let mut rem: Digit = 0;
    let mut res = (a / c) * b;
    let mut a = a % c;
    let mut b = b;

    while b != 0 {
        if b & 1 == 1 {
            rem += a;
            if rem >= c {
                rem -= c;
                res += 1;
            }
        }
        b /= 2;
        a *= 2;
        if a >= c {
            a -= c;
            res += b;
        }
    }

    res
}

impl ExactNumber {
    /// Multiplies `self` by `other` in place using the grade-school outer
    /// product over base-`base` digits, where `base` is the radix and
    /// must be at least 2. Each 1x1 product is split into a quotient and
    /// remainder by `base`, and the remainder is folded into the running
    /// cell without leaving the digit range.
    pub fn multiply_vector(&mut self, other: &ExactNumber, base: Digit) {
        debug_assert!(base >= 2);

        let mut new_size = (self.m.len() + other.m.len()) as isize;
        if self.e < 0 {
            new_size -= self.e as isize;
        }
        if other.e < 0 {
            new_size -= other.e as isize;
        }

        let mut temp: DigitVec = smallvec![0; new_size as usize];

        let mut i_n1 = temp.len() as isize - 1;
        // go from right to left in self
        for i in (0..self.m.len()).rev() {
            let mut carry: Digit = 0;
            let mut i_n2: isize = 0;

            // go from right to left in other
            for j in (0..other.m.len()).rev() {
                let mut rem = mulmod(self.m[i], other.m[j], base);
                let mut q = mult_div(self.m[i], other.m[j], base);

                let cell = temp[(i_n1 - i_n2) as usize];
                let rem_s;
                if cell >= base - carry {
                    rem_s = carry - (base - cell);
                    q += 1;
                } else {
                    rem_s = cell + carry;
                }
                if rem >= base - rem_s {
                    rem -= base - rem_s;
                    q += 1;
                } else {
                    rem += rem_s;
                }

                carry = q;
                temp[(i_n1 - i_n2) as usize] = rem;
                i_n2 += 1;
            }

            // store the last carry in the next cell
            if carry > 0 {
                temp[(i_n1 - i_n2) as usize] += carry;
            }

            i_n1 -= 1;
        }

        let fractional_part = (self.m.len() as isize - self.e as isize)
            + (other.m.len() as isize - other.e as isize);
        let result_exponent = temp.len() as isize - fractional_part;

        self.m = temp;
        self.e = result_exponent as Exponent;
        self.s = if self.s == other.s { Sign::Pos } else { Sign::Neg };
        self.normalize();
    }

    /// Signed multiplication with an explicit base.
    pub(crate) fn signed_mul(&self, other: &ExactNumber, base: Digit) -> ExactNumber {
        let mut result = self.clone();
        result.multiply_vector(other, base);
        result.s = if self.s == other.s { Sign::Pos } else { Sign::Neg };
        result.normalize();
        result
    }

    /// Multiplies two numbers whose digits are decimal.
    pub fn base10_mult(&self, other: &ExactNumber) -> ExactNumber {
        self.signed_mul(other, 10)
    }
}

impl Mul for &ExactNumber {
    type Output = ExactNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        self.signed_mul(rhs, DIGIT_BASE)
    }
}

impl Mul for ExactNumber {
    type Output = ExactNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign<&ExactNumber> for ExactNumber {
    fn mul_assign(&mut self, rhs: &ExactNumber) {
        *self = &*self * rhs;
    }
}
