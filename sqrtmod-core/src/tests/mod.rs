mod prime;

use rug::Integer;

/// Odd primes in `[3, bound)`.
pub(crate) fn odd_primes_below(bound: u32) -> Vec<Integer> {
    let mut primes: Vec<Integer> = Vec::new();
    let mut p: Integer = Integer::from(3);
    while p < bound {
        primes.push(p.clone());
        p = p.next_prime();
    }
    primes
}
