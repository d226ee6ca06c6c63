//! Additive core: aligned add and subtract with carry and borrow.

use crate::common::util::AlignedDigits;
use crate::defs::Digit;
use crate::defs::DigitVec;
use crate::defs::Exponent;
#[cfg(test)]
use crate::defs::Sign;
use crate::defs::DIGIT_BASE;
use crate::num::ExactNumber;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use itertools::izip;

impl ExactNumber {
    /// Adds the magnitude of `other` to the magnitude of `self` in place.
    /// Signs are disregarded; the operators resolve them.
    ///
    /// `base` is the maximum digit value, so digits range over
    /// `[0, base]` and the radix is `base + 1`; callers must pass a base
    /// of at least 1. When a digit sum leaves the machine range of a
    /// near-maximal base, it is rebuilt from two halves relative to
    /// `base / 2`, each of which fits.
    pub fn add_vector(&mut self, other: &ExactNumber, base: Digit) {
        debug_assert!(base >= 1);

        let fractional_length = (self.m.len() as isize - self.e as isize)
            .max(other.m.len() as isize - other.e as isize);
        let mut integral_length = (self.e as isize).max(other.e as isize);

        let lhs = AlignedDigits::new(&self.m, self.e, fractional_length, integral_length);
        let rhs = AlignedDigits::new(&other.m, other.e, fractional_length, integral_length);

        let mut carry: Digit = 0;
        let mut temp = DigitVec::new();

        // walk the numbers from the lowest to the highest digit
        for (lhs_digit, rhs_digit) in izip!(lhs, rhs) {
            let mut digit;
            let orig_carry = carry;
            carry = 0;
            if base - lhs_digit < rhs_digit {
                let min = lhs_digit.min(rhs_digit);
                let max = lhs_digit.max(rhs_digit);
                if min <= base / 2 {
                    let remaining = base / 2 - min;
                    digit = (max - base / 2) - remaining - 2;
                } else {
                    digit = (min - base / 2) + (max - base / 2) - 2;
                }
                carry = 1;
            } else {
                digit = rhs_digit + lhs_digit;
            }
            if digit < base || orig_carry == 0 {
                digit += orig_carry;
            } else {
                carry = 1;
                digit = 0;
            }
            temp.push(digit);
        }
        temp.reverse();

        if carry == 1 {
            temp.insert(0, 1);
            integral_length += 1;
        }

        self.m = temp;
        self.e = integral_length as Exponent;
        self.normalize();
    }

    /// Subtracts the magnitude of `other` from the magnitude of `self` in
    /// place. The magnitude of `self` must not be lower than the
    /// magnitude of `other`, and `base` is the maximum digit value, at
    /// least 1. Signs are disregarded; the operators resolve them.
    pub fn subtract_vector(&mut self, other: &ExactNumber, base: Digit) {
        debug_assert!(base >= 1);

        let fractional_length = (self.m.len() as isize - self.e as isize)
            .max(other.m.len() as isize - other.e as isize);
        let integral_length = (self.e as isize).max(other.e as isize);

        let lhs = AlignedDigits::new(&self.m, self.e, fractional_length, integral_length);
        let rhs = AlignedDigits::new(&other.m, other.e, fractional_length, integral_length);

        let mut borrow: Digit = 0;
        let mut result = DigitVec::new();

        // walk the numbers from the lowest to the highest digit
        for (mut lhs_digit, rhs_digit) in izip!(lhs, rhs) {
            let digit;

            if lhs_digit < borrow {
                digit = (base - rhs_digit) + 1 - borrow;
            } else {
                lhs_digit -= borrow;
                borrow = 0;

                if lhs_digit < rhs_digit {
                    borrow += 1;
                    digit = (base - (rhs_digit - 1)) + lhs_digit;
                } else {
                    digit = lhs_digit - rhs_digit;
                }
            }
            result.push(digit);
        }
        result.reverse();

        self.m = result;
        self.e = integral_length as Exponent;
        self.normalize();
    }

    /// Signed addition with an explicit additive base (the maximum digit
    /// value): magnitudes are combined according to the operand signs, and
    /// the larger magnitude decides the sign of the result.
    pub(crate) fn signed_add(&self, other: &ExactNumber, base: Digit) -> ExactNumber {
        let mut result;

        if self.s == other.s {
            result = self.clone();
            result.add_vector(other, base);
            result.s = self.s;
        } else if other.abs() < self.abs() {
            result = self.clone();
            result.subtract_vector(other, base);
            result.s = self.s;
        } else {
            result = other.clone();
            result.subtract_vector(self, base);
            result.s = self.s.invert();
        }
        result.normalize();
        result
    }

    /// Signed subtraction with an explicit additive base.
    pub(crate) fn signed_sub(&self, other: &ExactNumber, base: Digit) -> ExactNumber {
        let mut result;

        if self.s != other.s {
            result = self.clone();
            result.add_vector(other, base);
            result.s = self.s;
        } else if other.abs() < self.abs() {
            result = self.clone();
            result.subtract_vector(other, base);
            result.s = self.s;
        } else {
            result = other.clone();
            result.subtract_vector(self, base);
            result.s = self.s.invert();
        }
        result.normalize();
        result
    }

    /// Adds two numbers whose digits are decimal.
    pub fn base10_add(&self, other: &ExactNumber) -> ExactNumber {
        self.signed_add(other, 9)
    }

    /// Subtracts a number whose digits are decimal.
    pub fn base10_subtract(&self, other: &ExactNumber) -> ExactNumber {
        self.signed_sub(other, 9)
    }
}

impl Add for &ExactNumber {
    type Output = ExactNumber;

    fn add(self, rhs: Self) -> Self::Output {
        self.signed_add(rhs, DIGIT_BASE - 1)
    }
}

impl Add for ExactNumber {
    type Output = ExactNumber;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign<&ExactNumber> for ExactNumber {
    fn add_assign(&mut self, rhs: &ExactNumber) {
        *self = &*self + rhs;
    }
}

impl Sub for &ExactNumber {
    type Output = ExactNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        self.signed_sub(rhs, DIGIT_BASE - 1)
    }
}

impl Sub for ExactNumber {
    type Output = ExactNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl SubAssign<&ExactNumber> for ExactNumber {
    fn sub_assign(&mut self, rhs: &ExactNumber) {
        *self = &*self - rhs;
    }
}

impl Neg for &ExactNumber {
    type Output = ExactNumber;

    fn neg(self) -> Self::Output {
        ExactNumber::neg(self)
    }
}

impl Neg for ExactNumber {
    type Output = ExactNumber;

    fn neg(self) -> Self::Output {
        ExactNumber::neg(&self)
    }
}
