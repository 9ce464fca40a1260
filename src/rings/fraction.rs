use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Exact rational number, always reduced, denominator always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let mut num = num / &g;
        let mut den = den / &g;

        if den.is_negative() {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /// Parses `"n"` or `"n/d"`, with arbitrarily large `n` and `d`.
    pub fn from_str(s: &str) -> Result<Self, String> {
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (num, den),
            None => (s, "1"),
        };

        let num = BigInt::parse_bytes(num.trim().as_bytes(), 10)
            .ok_or_else(|| format!("Invalid number '{}'", s))?;
        let den = BigInt::parse_bytes(den.trim().as_bytes(), 10)
            .ok_or_else(|| format!("Invalid number '{}'", s))?;
        if den.is_zero() {
            return Err(format!("Zero denominator in '{}'", s));
        }

        Ok(Fraction::new(num, den))
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            self.den * rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            &self.num * &rhs.den - &rhs.num * &self.den,
            self.den * rhs.den,
        )
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction {
            num: BigInt::one(),
            den: BigInt::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // Denominators are positive, cross multiplication keeps the sign.
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
