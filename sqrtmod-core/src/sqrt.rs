use rug::{Assign, Integer};

/// Square roots modulo a fixed odd prime `p` (Tonelli-Shanks).
///
/// Everything that depends only on `p` and a non-residue is computed once in
/// [SqrtModPrime::new]: `p - 1 = q * 2^s` with `q` odd, `z = qnr^q` (a
/// generator of the 2-Sylow subgroup) and `(q + 1) / 2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqrtModPrime {
    p: Integer,
    q: Integer,
    s: u32,
    z: Integer,
    q_plus_one_half: Integer,
}

/// `base^exp mod p` for a non-negative `exp`, which always exists.
#[inline(always)]
fn pow_mod(base: &Integer, exp: &Integer, p: &Integer) -> Integer {
    match base.pow_mod_ref(exp, p) {
        Some(r) => Integer::from(r),
        None => unreachable!("pow_mod with non-negative exponent {} cannot fail", exp),
    }
}

impl SqrtModPrime {
    /// `p` must be an odd prime and `qnr` a quadratic non-residue modulo `p`.
    pub fn new(p: &Integer, qnr: &Integer) -> Self {
        debug_assert!(p.is_odd() && *p > 2, "invalid modulus: p={} must be an odd prime", p);

        let mut q: Integer = Integer::from(p - 1u32);
        let s: u32 = q.find_one(0).unwrap_or(0);
        q >>= s;

        let z: Integer = pow_mod(qnr, &q, p);
        let q_plus_one_half: Integer = Integer::from(&q + 1u32) >> 1;

        Self {
            p: p.clone(),
            q,
            s,
            z,
            q_plus_one_half,
        }
    }

    pub fn modulus(&self) -> &Integer {
        &self.p
    }

    /// Two-adic valuation of `p - 1`.
    pub fn two_adicity(&self) -> u32 {
        self.s
    }

    /// Writes a square root of `a mod p` into `out`.
    ///
    /// Returns `false` if `a` is not a square modulo `p`, in which case `out`
    /// holds an unspecified value. `0` maps to `0`.
    pub fn sqrt_into(&self, a: &Integer, out: &mut Integer) -> bool {
        let p: &Integer = &self.p;

        let mut a: Integer = a.clone();
        a.modulo_mut(p);

        if a == 0 {
            out.assign(0);
            return true;
        }

        // r = a^((q+1)/2), t = a^q, c = z
        let mut r: Integer = pow_mod(&a, &self.q_plus_one_half, p);
        let mut t: Integer = pow_mod(&a, &self.q, p);
        let mut c: Integer = self.z.clone();
        let mut m: u32 = self.s;

        let mut t2i: Integer = Integer::new();
        while t != 1 {
            // least i in (0, m) with t^(2^i) = 1
            let mut i: u32 = 0;
            t2i.assign(&t);
            while t2i != 1 {
                i += 1;
                if i == m {
                    return false;
                }
                t2i.square_mut();
                t2i.modulo_mut(p);
            }

            // b = c^(2^(m-i-1))
            let mut b: Integer = c;
            for _ in 0..m - i - 1 {
                b.square_mut();
                b.modulo_mut(p);
            }

            m = i;
            c = Integer::from(b.square_ref());
            c.modulo_mut(p);
            t *= &c;
            t.modulo_mut(p);
            r *= &b;
            r.modulo_mut(p);
        }

        out.assign(&r);
        true
    }

    /// Returns a square root of `a mod p`, or `None` if `a` is not a square.
    pub fn sqrt(&self, a: &Integer) -> Option<Integer> {
        let mut out: Integer = Integer::new();
        self.sqrt_into(a, &mut out).then_some(out)
    }
}
