//! Static constants.

use crate::defs::Sign;
use crate::num::ExactNumber;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub static ref ONE: ExactNumber = ExactNumber::from_raw_parts(&[1], 1, Sign::Pos);

    /// 2
    pub static ref TWO: ExactNumber = ExactNumber::from_raw_parts(&[2], 1, Sign::Pos);
}
