use std::{fmt, str::FromStr};

use rug::{Integer, integer::IsPrime};

use crate::{
    error::{Error, Result},
    qnr::find_first_qnr,
    sqrt::SqrtModPrime,
};

/// `2^62 - 2^16 + 1`
pub const QUICKSILVER_PRIME: u64 = (1u64 << 62) - (1u64 << 16) + 1;

/// `2^62 - 2^26 - 2^25 + 1`
pub const VIRGO_PRIME: u64 = (1u64 << 62) - (1u64 << 26) - (1u64 << 25) + 1;

/// Miller-Rabin rounds used by [PrimeField::new_checked].
const PRIMALITY_REPS: u32 = 30;

/// Selects the field modulus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldPrime {
    #[default]
    Quicksilver,
    Virgo,
    Custom(Integer),
}

impl FieldPrime {
    pub fn modulus(&self) -> Integer {
        match self {
            FieldPrime::Quicksilver => Integer::from(QUICKSILVER_PRIME),
            FieldPrime::Virgo => Integer::from(VIRGO_PRIME),
            FieldPrime::Custom(p) => p.clone(),
        }
    }
}

impl fmt::Display for FieldPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPrime::Quicksilver => write!(f, "quicksilver"),
            FieldPrime::Virgo => write!(f, "virgo"),
            FieldPrime::Custom(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for FieldPrime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s: &str = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "quicksilver" => return Ok(FieldPrime::Quicksilver),
            "virgo" => return Ok(FieldPrime::Virgo),
            _ => {}
        }

        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => Integer::from_str_radix(hex, 16),
            None => Integer::from_str_radix(s, 10),
        };

        match parsed {
            Ok(p) if p > 0 => Ok(FieldPrime::Custom(p)),
            _ => Err(Error::ParsePrime(s.to_string())),
        }
    }
}

/// Immutable field context shared read-only by every worker: the modulus
/// `p`, its first quadratic non-residue and the square-root precomputation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    p: Integer,
    qnr: Integer,
    sqrt: SqrtModPrime,
}

impl PrimeField {
    /// Builds the context for `p`, searching for the first non-residue.
    ///
    /// `p` must be an odd prime; this is not checked, see [PrimeField::new_checked].
    pub fn new(p: Integer) -> Self {
        let qnr: Integer = find_first_qnr(&p);
        Self::with_qnr(p, qnr)
    }

    /// As [PrimeField::new], but rejects moduli that are not odd (probable) primes.
    pub fn new_checked(p: Integer) -> Result<Self> {
        if p <= 2 || p.is_even() || p.is_probably_prime(PRIMALITY_REPS) == IsPrime::No {
            return Err(Error::NotOddPrime(p));
        }
        Ok(Self::new(p))
    }

    /// Builds the context from a caller-supplied non-residue, which is not validated.
    pub fn with_qnr(p: Integer, qnr: Integer) -> Self {
        let sqrt: SqrtModPrime = SqrtModPrime::new(&p, &qnr);
        Self { p, qnr, sqrt }
    }

    pub fn modulus(&self) -> &Integer {
        &self.p
    }

    pub fn qnr(&self) -> &Integer {
        &self.qnr
    }

    pub fn sqrt_mod_prime(&self) -> &SqrtModPrime {
        &self.sqrt
    }
}

impl From<FieldPrime> for PrimeField {
    fn from(prime: FieldPrime) -> Self {
        PrimeField::new(prime.modulus())
    }
}
