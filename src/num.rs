//! ExactNumber definition and basic comparison, normalization, and rounding operations.

use crate::defs::Digit;
use crate::defs::DigitVec;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::DIGIT_BASE;
use core::cmp::Ordering;
use smallvec::smallvec;

/// ExactNumber represents a signed fixed-point number as a vector of digits
/// in a large integer base, a positional exponent, and a sign.
///
/// The value of the number is `sign * Σ digits[i] * B^(exponent - 1 - i)`,
/// where `B` is the working base of the digit vector. The base itself is
/// not stored: every routine that needs it takes it as an argument, and a
/// chain of operations must use one base consistently.
#[derive(Debug, Clone)]
pub struct ExactNumber {
    pub(crate) m: DigitVec,
    pub(crate) e: Exponent,
    pub(crate) s: Sign,
}

impl ExactNumber {
    /// Returns a new number with the value of 0.
    pub fn new() -> Self {
        ExactNumber {
            m: smallvec![0],
            e: 0,
            s: Sign::Pos,
        }
    }

    /// Constructs a number from the digit vector `m`, the exponent `e`,
    /// and the sign `s`. The digits are used verbatim; the most
    /// significant digit comes first.
    pub fn from_raw_parts(m: &[Digit], e: Exponent, s: Sign) -> Self {
        ExactNumber {
            m: DigitVec::from_slice(m),
            e,
            s,
        }
    }

    /// Constructs an integer from the digit vector `m` and the sign `s`:
    /// the exponent is the digit count.
    pub fn from_digits(m: &[Digit], s: Sign) -> Self {
        ExactNumber {
            m: DigitVec::from_slice(m),
            e: m.len() as Exponent,
            s,
        }
    }

    /// Constructs an integer from the machine digit `value` decomposed
    /// into digits of the base `base`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the base is less than 2.
    pub fn from_digit(mut value: Digit, base: Digit) -> Result<Self, Error> {
        if base < 2 {
            return Err(Error::InvalidArgument);
        }

        let mut m = DigitVec::new();
        if value == 0 {
            m.push(0);
        } else {
            while value != 0 {
                m.push(value % base);
                value /= base;
            }
            m.reverse();
        }
        let e = m.len() as Exponent;
        Ok(ExactNumber { m, e, s: Sign::Pos })
    }

    /// Decomposes the number into the digit vector, the exponent, and
    /// the sign.
    pub fn to_raw_parts(&self) -> (&[Digit], Exponent, Sign) {
        (&self.m, self.e, self.s)
    }

    /// Returns the digits of the number, most significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.m
    }

    /// Returns the exponent of the number.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the sign of the number.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if the value of the number is zero, whatever the
    /// shape of its digit vector. The empty digit vector counts as zero.
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|&d| d == 0)
    }

    // The two digit vector shapes that compare as zero: the canonical
    // `[0]` and the empty vector. Comparison treats only these as zero;
    // a padded all-zero vector participates in the exponent and aligned
    // digit comparisons like any other, which the long division relies
    // on while it consumes runs of zero dividend digits.
    fn is_comparison_zero(&self) -> bool {
        self.m.is_empty() || *self.m == [0]
    }

    /// Returns true if no digits fall to the right of the radix point.
    pub fn is_integral(&self) -> bool {
        self.e >= 0 && self.m.len() <= self.e as usize
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        let mut result = self.clone();
        result.s = Sign::Pos;
        result
    }

    /// Returns the number with the opposite sign.
    pub fn neg(&self) -> Self {
        let mut result = self.clone();
        if !result.is_zero() {
            result.s = result.s.invert();
        }
        result
    }

    /// Removes non-significant zeros at both ends of the digit vector,
    /// preserving the value. The canonical zero is `[0]` with exponent 0
    /// and positive sign.
    pub fn normalize(&mut self) {
        while self.m.len() > 1 && self.m[0] == 0 {
            self.m.remove(0);
            self.e -= 1;
        }
        while self.m.len() > 1 && *self.m.last().unwrap() == 0 {
            self.m.pop();
        }
        if self.m.len() == 1 && self.m[0] == 0 {
            self.e = 0;
            self.s = Sign::Pos;
        }
    }

    /// Appends trailing zero digits until the digit count reaches the
    /// exponent, materializing the full digit string of an integer.
    pub(crate) fn pad_to_exponent(&mut self) {
        while self.e as isize - self.m.len() as isize > 0 {
            self.m.push(0);
        }
    }

    /// The digit string of an integer with trailing zeros materialized.
    pub(crate) fn integral_digits(&self) -> DigitVec {
        let mut m = self.m.clone();
        while self.e as isize - m.len() as isize > 0 {
            m.push(0);
        }
        m
    }

    /// Compares two digit vectors that share a radix alignment and
    /// returns true if `lhs` is strictly lower.
    ///
    /// The vectors are walked in lock step; at the first divergence the
    /// digits decide. If one vector ends first, the lower side is the one
    /// whose remaining tail is all zeros. `equal` only short-circuits the
    /// fully equal walk; the result is a strict less-than either way.
    pub fn aligned_is_lower(lhs: &[Digit], rhs: &[Digit], equal: bool) -> bool {
        let mut i = 0;
        while i < lhs.len() && i < rhs.len() && lhs[i] == rhs[i] {
            i += 1;
        }

        if i < lhs.len() && i < rhs.len() {
            return lhs[i] < rhs[i];
        }

        if equal && i == lhs.len() && i == rhs.len() {
            return false;
        }

        let lhs_all_zero = lhs[i.min(lhs.len())..].iter().all(|&d| d == 0);
        let rhs_all_zero = rhs[i.min(rhs.len())..].iter().all(|&d| d == 0);

        lhs_all_zero && !rhs_all_zero
    }

    // Value comparison. Zero-sensitive: the empty digit vector and `[0]`
    // compare as zero regardless of sign and exponent.
    fn cmp_value(&self, other: &Self) -> Ordering {
        match (self.is_comparison_zero(), other.is_comparison_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => {
                if other.s.is_positive() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, true) => {
                if self.s.is_positive() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, false) => {
                if self.s != other.s {
                    return if self.s.is_positive() {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    };
                }
                let ord = if self.e != other.e {
                    self.e.cmp(&other.e)
                } else if Self::aligned_is_lower(&self.m, &other.m, false) {
                    Ordering::Less
                } else if Self::aligned_is_lower(&other.m, &self.m, false) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                };
                if self.s.is_positive() {
                    ord
                } else {
                    ord.reverse()
                }
            }
        }
    }

    /// Adds 1 at the least significant digit of the magnitude,
    /// propagating the carry through base-`base` digits. A terminal carry
    /// prepends a 1 and increments the exponent. `base` is the maximum
    /// digit value.
    pub fn round_up_abs(&mut self, base: Digit) {
        if self.m.is_empty() {
            return;
        }
        let mut index = self.m.len() - 1;
        let mut keep_carrying = true;

        while index > 0 && keep_carrying {
            if self.m[index] != base {
                self.m[index] += 1;
                keep_carrying = false;
            } else {
                self.m[index] = 0;
            }
            index -= 1;
        }

        if index == 0 && keep_carrying {
            if self.m[0] == base {
                self.m[0] = 0;
                self.m.insert(0, 1);
                self.e += 1;
            } else {
                self.m[0] += 1;
            }
        }
    }

    /// Subtracts 1 at the least significant digit of the magnitude,
    /// borrowing through zeros. The first digit of a nonzero magnitude is
    /// nonzero, so the borrow always resolves.
    pub fn round_down_abs(&mut self, base: Digit) {
        if self.m.is_empty() {
            return;
        }
        let mut index = self.m.len() - 1;
        let mut keep_carrying = true;

        while index > 0 && keep_carrying {
            if self.m[index] != 0 {
                self.m[index] -= 1;
                keep_carrying = false;
            } else {
                self.m[index] = base;
            }
            index -= 1;
        }

        if index == 0 && keep_carrying {
            self.m[0] -= 1;
        }
    }

    /// Moves the value one unit away from zero at the last held digit
    /// when positive, toward zero when negative.
    pub fn round_up(&mut self, base: Digit) {
        if self.s.is_positive() {
            self.round_up_abs(base);
        } else {
            self.round_down_abs(base);
        }
    }

    /// Moves the value one unit toward zero at the last held digit when
    /// positive, away from zero when negative.
    pub fn round_down(&mut self, base: Digit) {
        if self.s.is_positive() {
            self.round_down_abs(base);
        } else {
            self.round_up_abs(base);
        }
    }

    /// Returns the number truncated to at most `precision` digits, with a
    /// directional rounding step applied if truncation occurred. `upper`
    /// selects rounding up, otherwise down.
    pub fn up_to(&self, precision: usize, upper: bool) -> Self {
        let base = DIGIT_BASE - 1;
        if precision >= self.m.len() {
            return self.clone();
        }

        let mut ret = self.clone();
        ret.m.truncate(precision);

        if upper {
            ret.round_up(base);
        } else {
            ret.round_down(base);
        }

        ret
    }
}

impl Default for ExactNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ExactNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl Eq for ExactNumber {}

impl PartialOrd for ExactNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}
