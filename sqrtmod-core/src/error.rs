use rug::Integer;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("worker count must be at least 1")]
    ZeroWorkers,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The square-root adapter found no root for the adjusted value at `index`.
    /// Only reachable when the modulus is not prime or the non-residue is not one.
    #[error("no square root for the element at index {index}")]
    NoSquareRoot { index: usize },

    #[error("modulus {0} is not an odd prime")]
    NotOddPrime(Integer),

    #[error("invalid prime `{0}`: expected quicksilver, virgo, a decimal or a 0x-prefixed hex integer")]
    ParsePrime(String),
}
