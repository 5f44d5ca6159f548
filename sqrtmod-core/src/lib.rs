//! # sqrtmod-core
//!
//! Batch modular square roots over a fixed prime field `Z/pZ`.
//!
//! Every input `x` is classified by its Jacobi symbol: `(x/p) == 1` marks a
//! quadratic residue. Non-residues (including `0`) are multiplied by the
//! field's first quadratic non-residue `qnr` so that a root always exists, and
//! the engine returns `r` with
//!
//! - `r^2 = x (mod p)` when `is_qr` is set,
//! - `r^2 = x * qnr (mod p)` otherwise.
//!
//! ## Layout
//!
//! - [`qnr`] -- the QNR finder (linear scan from `2`).
//! - [`prime`] -- [`FieldPrime`] selection and the shared [`PrimeField`] context.
//! - [`sqrt`] -- Tonelli-Shanks adapter over [`rug::Integer`].
//! - [`engine`] -- [`BatchSqrtEngine`], the statically partitioned parallel batch.
//! - [`config`] -- [`EngineConfig`] (worker count).
//!
//! ## Example
//!
//! ```
//! use rug::Integer;
//! use sqrtmod_core::{BatchSqrtEngine, EngineConfig, PrimeField};
//!
//! let field: PrimeField = PrimeField::new(Integer::from(13));
//! assert_eq!(*field.qnr(), 2);
//!
//! let engine: BatchSqrtEngine = BatchSqrtEngine::new(EngineConfig::with_workers(2)).unwrap();
//! let input: Vec<Integer> = vec![Integer::from(10), Integer::from(5)];
//! let out = engine.run(&field, &input).unwrap();
//! assert_eq!(out.is_qr, vec![true, false]);
//! assert_eq!(out.verify(&field, &input), None);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod prime;
pub mod qnr;
pub mod sqrt;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::{BatchSqrt, BatchSqrtEngine, sqrt_one};
pub use error::{Error, Result};
pub use prime::{FieldPrime, PrimeField, QUICKSILVER_PRIME, VIRGO_PRIME};
pub use qnr::{find_first_qnr, is_qnr};
pub use sqrt::SqrtModPrime;
