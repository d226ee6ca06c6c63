//! End-to-end tests of the decimal pipeline: parsing, exact arithmetic,
//! bounded division, and rendering.

use exact_real::{Error, ExactNumber, Exponent, Sign};
use rand::random;

fn parse(s: &str) -> ExactNumber {
    s.parse().unwrap()
}

#[test]
fn test_addition() {
    assert_eq!(parse("1.5").base10_add(&parse("2.25")).to_string(), "3.75");
    assert_eq!(parse("1").base10_subtract(&parse("0.0000001")).to_string(), "0.9999999");
    assert_eq!(parse("-1.5").base10_add(&parse("1.5")).to_string(), "0");
    assert_eq!(parse("10.1").base10_subtract(&parse("10.2")).to_string(), "-0.1");
}

#[test]
fn test_multiplication() {
    assert_eq!(
        parse("123456789").base10_mult(&parse("987654321")).to_string(),
        "121932631112635269"
    );
    assert_eq!(parse("0.5").base10_mult(&parse("0.5")).to_string(), "0.25");
    assert_eq!(parse("-12.5").base10_mult(&parse("8")).to_string(), "-100");
    assert_eq!(parse("123456").base10_mult(&parse("0")).to_string(), "0");
}

#[test]
fn test_division_residual_direction() {
    let one = parse("1");
    let three = parse("3");
    let zero = ExactNumber::new();
    let p = 10;

    // residual within a few quotient units of 10^(-10), scaled by the divisor
    let bound = parse("0.000000001");

    let q = one.newton_raphson_division(&three, p, false, 10).unwrap();
    let residual = q.base10_mult(&three).base10_subtract(&one);
    assert!(residual <= zero);
    assert!(residual.abs() < bound);

    let q = one.newton_raphson_division(&three, p, true, 10).unwrap();
    let residual = q.base10_mult(&three).base10_subtract(&one);
    assert!(residual >= zero);
    assert!(residual.abs() < bound);
}

#[test]
fn test_division_default_base() {
    // single decimal digits denote the same value in any base
    let a = parse("7");
    let b = parse("9");
    let zero = ExactNumber::new();

    let q = a.divide_vector(&b, 12, false).unwrap();
    let residual = &(&q * &b) - &a;
    assert!(residual <= zero);

    let q = a.divide_vector(&b, 12, true).unwrap();
    let residual = &(&q * &b) - &a;
    assert!(residual >= zero);

    // 1 / 0.5 reaches the exact quotient: the scaled divisor is exactly
    // one half, whose reciprocal terminates in the working base
    let one = parse("1");
    let half = ExactNumber::from_raw_parts(&[exact_real::DIGIT_BASE / 2], 0, Sign::Pos);
    let q = one.divide_vector(&half, 12, true).unwrap();
    assert_eq!(q, parse("2"));
}

#[test]
fn test_errors() {
    assert_eq!("0123".parse::<ExactNumber>(), Err(Error::OctalInputNotSupported));
    assert_eq!("1,5".parse::<ExactNumber>(), Err(Error::InvalidStringNumber));
    assert_eq!(
        parse("1").divide_vector(&ExactNumber::new(), 10, false),
        Err(Error::DivisionByZero)
    );
    assert_eq!(
        parse("1").divide_vector(&parse("3"), u32::MAX, false),
        Err(Error::ExponentOverflow)
    );
}

#[test]
fn test_commutativity_and_associativity() {
    for _ in 0..200 {
        let x = random_decimal();
        let y = random_decimal();
        let z = random_decimal();

        assert_eq!(x.base10_add(&y), y.base10_add(&x));
        assert_eq!(x.base10_mult(&y), y.base10_mult(&x));

        assert_eq!(
            x.base10_add(&y).base10_add(&z),
            x.base10_add(&y.base10_add(&z))
        );
        assert_eq!(
            x.base10_mult(&y).base10_mult(&z),
            x.base10_mult(&y.base10_mult(&z))
        );

        // distributivity
        assert_eq!(
            x.base10_mult(&y.base10_add(&z)),
            x.base10_mult(&y).base10_add(&x.base10_mult(&z))
        );

        // identity and inverse
        let zero = ExactNumber::new();
        assert_eq!(x.base10_add(&zero), x);
        assert_eq!(x.base10_subtract(&x), zero);
    }
}

#[test]
fn test_render_roundtrip() {
    for _ in 0..500 {
        let n = random_decimal();
        let rendered = n.to_string();
        let back = parse(&rendered);

        assert_eq!(back, n, "{}", rendered);
        assert_eq!(back.to_string(), rendered, "{}", rendered);
    }
}

#[test]
fn test_comparison_follows_value() {
    for _ in 0..500 {
        let x = random::<i32>() as i64;
        let y = random::<i32>() as i64;

        let a = parse(&x.to_string());
        let b = parse(&y.to_string());

        assert_eq!(a < b, x < y);
        assert_eq!(a == b, x == y);
        assert_eq!(a > b, x > y);
    }
}

// A random decimal-digit number with a small exponent and either sign.
fn random_decimal() -> ExactNumber {
    let len = random::<usize>() % 12 + 1;
    let mut digits = Vec::with_capacity(len);
    for _ in 0..len {
        digits.push(random::<u32>() % 10);
    }
    let e = (random::<i32>() % 8) as Exponent;
    let s = if random::<bool>() { Sign::Pos } else { Sign::Neg };

    let mut n = ExactNumber::from_raw_parts(&digits, e, s);
    n.normalize();
    n
}
