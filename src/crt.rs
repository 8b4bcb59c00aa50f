//! Chinese Remainder Theorem solver over pairwise-coprime moduli.

use ndarray::Array1;

use crate::error::CodecError;
use crate::euclid::extended_euclid;

/// Solves simultaneous congruences `x = r_i (mod L_i)` for pairwise-coprime
/// moduli `L_1, ..., L_k`.
pub struct Crt {
    pub lengths: Array1<i64>,
    pub l: i64,
    /// `s_i` normalized to `[0, L_i)`, i.e. the Bezout coefficient with
    /// `1 = s_i * (L/L_i) (mod L_i)`.
    pub qs: Array1<i64>,
    /// `e_i = qs_i * (L / L_i)`, satisfying `e_i mod L_j = delta_ij`.
    pub es: Array1<i64>,
}

impl Crt {
    /// Builds a solver for the given pairwise-coprime moduli.
    ///
    /// Fails with [`CodecError::Config`] if any pair of lengths shares a
    /// common factor with `L / L_i`.
    pub fn new(lengths: &[i64]) -> Result<Self, CodecError> {
        let lengths_arr = Array1::from_vec(lengths.to_vec());
        let l: i64 = lengths.iter().product();
        let qs = Self::compute_qs(&lengths_arr, l)?;

        let mut es = Array1::zeros(lengths.len());
        for i in 0..lengths.len() {
            es[i] = qs[i] * (l / lengths[i]);
        }

        Ok(Crt {
            lengths: lengths_arr,
            l,
            qs,
            es,
        })
    }

    /// Returns the unique `x` in `[0, L)` with `x = r_i (mod L_i)` for every i.
    pub fn solve(&self, remainders: &[i64]) -> i64 {
        let mut sum = 0i64;
        for (i, &remainder) in remainders.iter().enumerate() {
            sum = (sum + (remainder * self.es[i]) % self.l) % self.l;
        }
        sum
    }

    fn compute_qs(lengths: &Array1<i64>, l: i64) -> Result<Array1<i64>, CodecError> {
        let mut qs = Array1::zeros(lengths.len());
        for (i, &li) in lengths.iter().enumerate() {
            let (gcd, _, s) = extended_euclid(li, l / li);
            if gcd != 1 {
                return Err(CodecError::config(format!(
                    "sequence lengths must be pairwise coprime: length {} at index {} shares a factor with the product of the others",
                    li, i
                )));
            }
            // Take the closest positive representative of s mod li.
            let s_mod = ((s % li) + li) % li;
            qs[i] = s_mod;
        }
        Ok(qs)
    }
}
