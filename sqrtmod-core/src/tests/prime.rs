use std::str::FromStr;

use rug::Integer;

use crate::{Error, FieldPrime, PrimeField, QUICKSILVER_PRIME, VIRGO_PRIME};

#[test]
fn named_primes() {
    assert_eq!(QUICKSILVER_PRIME, 4611686018427322369);
    assert_eq!(VIRGO_PRIME, 4611686018326724609);
    assert_eq!(FieldPrime::default(), FieldPrime::Quicksilver);
    assert_eq!(FieldPrime::Virgo.modulus(), VIRGO_PRIME);
}

#[test]
fn parse_field_prime() {
    assert_eq!(FieldPrime::from_str("quicksilver").unwrap(), FieldPrime::Quicksilver);
    assert_eq!(FieldPrime::from_str(" Virgo ").unwrap(), FieldPrime::Virgo);
    assert_eq!(FieldPrime::from_str("13").unwrap(), FieldPrime::Custom(Integer::from(13)));
    assert_eq!(FieldPrime::from_str("0x3fffffffffff0001").unwrap().modulus(), QUICKSILVER_PRIME);
    for bad in ["", "0x", "-13", "0", "venus", "12a"] {
        assert!(matches!(FieldPrime::from_str(bad), Err(Error::ParsePrime(_))), "{:?} parsed", bad);
    }
}

#[test]
fn display_round_trips_names() {
    for prime in [FieldPrime::Quicksilver, FieldPrime::Virgo, FieldPrime::Custom(Integer::from(101))] {
        assert_eq!(FieldPrime::from_str(&prime.to_string()).unwrap(), prime);
    }
}

#[test]
fn checked_field_rejects_non_primes() {
    for p in [0, 1, 2, 4, 9, 15, 221] {
        assert!(matches!(PrimeField::new_checked(Integer::from(p)), Err(Error::NotOddPrime(_))), "p={}", p);
    }
    let field: PrimeField = PrimeField::new_checked(Integer::from(13)).unwrap();
    assert_eq!(*field.modulus(), 13);
    assert_eq!(*field.qnr(), 2);
}

#[test]
fn field_from_named_prime() {
    let field: PrimeField = PrimeField::from(FieldPrime::Quicksilver);
    assert_eq!(*field.modulus(), QUICKSILVER_PRIME);
    assert_eq!(*field.qnr(), 7);
    assert_eq!(field.sqrt_mod_prime().modulus(), field.modulus());

    let field: PrimeField = PrimeField::from(FieldPrime::Virgo);
    assert_eq!(*field.qnr(), 3);
}

#[test]
fn field_with_explicit_qnr() {
    // 5 is a non-residue mod 13 but not the first one.
    let field: PrimeField = PrimeField::with_qnr(Integer::from(13), Integer::from(5));
    assert_eq!(*field.qnr(), 5);
    assert_eq!(field.sqrt_mod_prime().sqrt(&Integer::from(10)).map(|r| r.square().modulo(&Integer::from(13))), Some(Integer::from(10)));
}
