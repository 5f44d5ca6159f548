use rug::Integer;
use sqrtmod_core::{BatchSqrt, BatchSqrtEngine, EngineConfig, FieldPrime, PrimeField, find_first_qnr, is_qnr};

#[test]
fn quicksilver_scenario() {
    let field: PrimeField = PrimeField::from(FieldPrime::Quicksilver);
    let p: &Integer = field.modulus();
    let qnr: Integer = field.qnr().clone();
    assert!(is_qnr(&qnr, p));

    let input: Vec<Integer> = vec![Integer::ZERO, Integer::from(1), qnr.clone()];
    let engine: BatchSqrtEngine = BatchSqrtEngine::new(EngineConfig::default()).unwrap();
    let out: BatchSqrt = engine.run(&field, &input).unwrap();

    // 0 has Jacobi symbol 0, which is not 1.
    assert!(!out.is_qr[0]);
    assert_eq!(out.roots[0], 0);

    assert!(out.is_qr[1]);
    assert!(out.roots[1] == 1 || out.roots[1] == Integer::from(p - 1u32));

    assert!(!out.is_qr[2]);
    let qnr_squared: Integer = Integer::from(qnr.square_ref()).modulo(p);
    assert_eq!(Integer::from(out.roots[2].square_ref()).modulo(p), qnr_squared);

    assert_eq!(out.verify(&field, &input), None);
}

#[test]
fn small_prime_scenario() {
    let p: Integer = Integer::from(13);
    assert_eq!(find_first_qnr(&p), 2);

    let field: PrimeField = PrimeField::new(p.clone());
    let input: Vec<Integer> = vec![Integer::from(3), Integer::from(7)];
    let engine: BatchSqrtEngine = BatchSqrtEngine::new(EngineConfig::with_workers(2)).unwrap();
    let out: BatchSqrt = engine.run(&field, &input).unwrap();

    assert_eq!(out.is_qr, vec![true, false]);
    assert_eq!(Integer::from(out.roots[0].square_ref()).modulo(&p), 3);
    // 7 * 2 = 14 = 1 mod 13
    assert_eq!(Integer::from(out.roots[1].square_ref()).modulo(&p), 1);
}

#[test]
fn custom_prime_from_string() {
    let prime: FieldPrime = "1000003".parse().unwrap();
    let field: PrimeField = PrimeField::new_checked(prime.modulus()).unwrap();
    let input: Vec<Integer> = (0..1000u32).map(|i| Integer::from(i) * 997u32).collect();
    let out: BatchSqrt = BatchSqrtEngine::new(EngineConfig::with_workers(3))
        .unwrap()
        .run(&field, &input)
        .unwrap();
    assert_eq!(out.len(), input.len());
    assert_eq!(out.verify(&field, &input), None);
}
