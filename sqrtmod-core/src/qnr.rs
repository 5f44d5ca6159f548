use rug::Integer;

/// Returns `true` if the Jacobi symbol `(x/p)` is `-1`.
///
/// `p` must be odd and positive.
#[inline(always)]
pub fn is_qnr(x: &Integer, p: &Integer) -> bool {
    x.jacobi(p) == -1
}

/// Returns the smallest integer `qnr >= 2` with Jacobi symbol `(qnr/p) = -1`.
///
/// Linear scan `2, 3, 4, ...`. For a prime `p` the first non-residue is
/// `O(log^2 p)` under GRH and tiny in practice (`7` for `2^62 - 2^16 + 1`,
/// `3` for `2^62 - 2^26 - 2^25 + 1`).
///
/// `p` must be an odd prime. For other moduli the scan may not terminate
/// (e.g. a perfect square has no element of symbol `-1`).
pub fn find_first_qnr(p: &Integer) -> Integer {
    debug_assert!(p.is_odd() && *p > 2, "invalid modulus: p={} must be an odd prime", p);
    let mut qnr: Integer = Integer::from(2);
    while !is_qnr(&qnr, p) {
        qnr += 1u32;
    }
    qnr
}
