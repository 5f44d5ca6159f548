use std::{ops::Range, time::Instant};

use itertools::izip;
use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use rug::{Assign, Integer};

use crate::{
    config::EngineConfig,
    error::{Error, Result},
    prime::PrimeField,
};

/// Index-aligned outputs of a batch: `roots[i]` and `is_qr[i]` describe input `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSqrt {
    pub roots: Vec<Integer>,
    pub is_qr: Vec<bool>,
}

impl BatchSqrt {
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Integer, bool)> {
        self.roots.iter().zip(self.is_qr.iter().copied())
    }

    /// Number of inputs classified as quadratic residues.
    pub fn residues(&self) -> usize {
        self.is_qr.iter().filter(|qr| **qr).count()
    }

    /// Returns the first index at which the output does not describe `input`:
    /// the flag disagrees with `(x/p) == 1`, or `r^2` differs from `x`
    /// (residue) resp. `x * qnr` (non-residue) modulo `p`.
    ///
    /// A length mismatch reports the shorter length.
    pub fn verify(&self, field: &PrimeField, input: &[Integer]) -> Option<usize> {
        if input.len() != self.len() || self.is_qr.len() != self.len() {
            return Some(input.len().min(self.len()).min(self.is_qr.len()));
        }

        let p: &Integer = field.modulus();
        let mut lhs: Integer = Integer::new();
        let mut rhs: Integer = Integer::new();

        izip!(input.iter(), self.roots.iter(), self.is_qr.iter()).position(|(x, r, &is_qr)| {
            if is_qr != (x.jacobi(p) == 1) {
                return true;
            }
            lhs.assign(r.square_ref());
            lhs.modulo_mut(p);
            rhs.assign(x);
            if !is_qr {
                rhs *= field.qnr();
            }
            rhs.modulo_mut(p);
            lhs != rhs
        })
    }
}

/// Classifies `x` and writes its square root into `out`.
///
/// `scratch` receives `x`, multiplied by the field's non-residue unless the
/// Jacobi symbol `(x/p)` is exactly `1`; `out` receives a root of `scratch`.
/// Returns the residue flag, or `None` if no root exists, which only happens
/// when `p` is not prime or the field's non-residue is not one.
///
/// Zero has symbol `0` and is therefore reported as a non-residue with root `0`.
#[inline(always)]
pub fn sqrt_one(field: &PrimeField, x: &Integer, scratch: &mut Integer, out: &mut Integer) -> Option<bool> {
    let p: &Integer = field.modulus();

    scratch.assign(x);

    let is_qr: bool = scratch.jacobi(p) == 1;

    if !is_qr {
        *scratch *= field.qnr();
        scratch.modulo_mut(p);
    }

    field
        .sqrt_mod_prime()
        .sqrt_into(scratch, out)
        .then_some(is_qr)
}

/// Processes one contiguous chunk starting at global index `offset`, reusing a
/// single scratch value. Returns the global index of the first failing element.
fn sqrt_chunk(
    field: &PrimeField,
    offset: usize,
    input: &[Integer],
    roots: &mut [Integer],
    is_qr: &mut [bool],
) -> std::result::Result<(), usize> {
    trace!("chunk [{}, {})", offset, offset + input.len());
    let mut scratch: Integer = Integer::new();
    for (j, (x, r, qr)) in izip!(input.iter(), roots.iter_mut(), is_qr.iter_mut()).enumerate() {
        match sqrt_one(field, x, &mut scratch, r) {
            Some(flag) => *qr = flag,
            None => return Err(offset + j),
        }
    }
    Ok(())
}

/// Parallel batch square roots with a fixed, static decomposition.
///
/// The input `[0, N)` is cut into `W` contiguous chunks of `ceil(N / W)`
/// elements (the last one truncated), and each chunk is handed to one task
/// of a dedicated pool of `W` threads. Workers share only read-only state
/// and write disjoint output ranges.
pub struct BatchSqrtEngine {
    pool: ThreadPool,
    workers: usize,
}

impl BatchSqrtEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(Error::ZeroWorkers);
        }
        let pool: ThreadPool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("sqrtmod-worker-{}", i))
            .build()?;
        debug!("batch sqrt engine: {} workers", config.workers);
        Ok(Self {
            pool,
            workers: config.workers,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Elements per chunk for a batch of `len` elements.
    pub fn chunk_size(&self, len: usize) -> usize {
        len.div_ceil(self.workers)
    }

    /// Index ranges owned by each worker for a batch of `len` elements.
    /// Empty trailing chunks are omitted, so `len == 0` yields no range.
    pub fn partition(&self, len: usize) -> Vec<Range<usize>> {
        let chunk: usize = self.chunk_size(len);
        (0..self.workers)
            .map(|i| (i * chunk).min(len)..((i + 1) * chunk).min(len))
            .filter(|range| !range.is_empty())
            .collect()
    }

    /// Computes the roots and residue flags of `input`.
    pub fn run(&self, field: &PrimeField, input: &[Integer]) -> Result<BatchSqrt> {
        let mut out: BatchSqrt = BatchSqrt {
            roots: vec![Integer::new(); input.len()],
            is_qr: vec![false; input.len()],
        };
        self.run_into(field, input, &mut out.roots, &mut out.is_qr)?;
        Ok(out)
    }

    /// As [BatchSqrtEngine::run], writing into caller-provided outputs of the
    /// same length as `input`. On error the outputs hold unspecified values.
    pub fn run_into(&self, field: &PrimeField, input: &[Integer], roots: &mut [Integer], is_qr: &mut [bool]) -> Result<()> {
        let len: usize = input.len();
        assert_eq!(roots.len(), len, "invalid roots: roots.len()={} != input.len()={}", roots.len(), len);
        assert_eq!(is_qr.len(), len, "invalid is_qr: is_qr.len()={} != input.len()={}", is_qr.len(), len);

        if len == 0 {
            return Ok(());
        }

        let chunk: usize = self.chunk_size(len);
        debug!(
            "batch sqrt: {} entries, {} workers, chunk size {}, p={}, qnr={}",
            len,
            self.workers,
            chunk,
            field.modulus(),
            field.qnr()
        );

        let now: Instant = Instant::now();

        let failed: Option<usize> = self.pool.install(|| {
            roots
                .par_chunks_mut(chunk)
                .zip(is_qr.par_chunks_mut(chunk))
                .zip(input.par_chunks(chunk))
                .enumerate()
                .filter_map(|(i, ((roots, is_qr), input))| sqrt_chunk(field, i * chunk, input, roots, is_qr).err())
                .min()
        });

        debug!("batch sqrt: {} entries in {:.3?}", len, now.elapsed());

        match failed {
            Some(index) => Err(Error::NoSquareRoot { index }),
            None => Ok(()),
        }
    }
}
