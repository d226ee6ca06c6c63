//! Serialization of ExactNumber.
//! Serialization to a string uses the decimal form.

use crate::ExactNumber;
use serde::{Serialize, Serializer};

impl Serialize for ExactNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::ExactNumber;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&ExactNumber::new()).unwrap(), "\"0\"");
        assert_eq!(
            to_string(&"-12.5".parse::<ExactNumber>().unwrap()).unwrap(),
            "\"-12.5\""
        );
    }
}
