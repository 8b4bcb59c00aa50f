//! Delta oracle: maps a position `p` to the displacement value encoded at
//! that position via the secondary number sequences.

use ndarray::Array2;

use crate::mixed_radix::MixedRadixBasis;
use crate::sequence::Sequence;

/// Derives `delta(p) in [delta_min, delta_max]` from the secondary number
/// sequences sampled at `p mod L_i`.
pub struct DeltaOracle<'a> {
    sns: &'a [Sequence],
    basis: &'a MixedRadixBasis,
    delta_min: i64,
}

impl<'a> DeltaOracle<'a> {
    pub fn new(sns: &'a [Sequence], basis: &'a MixedRadixBasis, delta_min: i64) -> Self {
        DeltaOracle {
            sns,
            basis,
            delta_min,
        }
    }

    /// `delta(p) = delta_min + sum(c_i * b_i)` where `c_i = SNS_i[p mod L_i]`.
    pub fn delta(&self, p: usize) -> i64 {
        let coeffs: Vec<i64> = self
            .sns
            .iter()
            .map(|s| s.get(p % s.len()) as i64)
            .collect();
        let coeffs_arr = Array2::from_shape_vec((1, coeffs.len()), coeffs).unwrap();
        self.basis.reconstruct(&coeffs_arr)[0] + self.delta_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anoto_sequences::{A1, A2, A3, A4_ALT};

    fn test_oracle() -> (Vec<Sequence>, MixedRadixBasis) {
        let sns = vec![
            Sequence::new(&A1, 5),
            Sequence::new(&A2, 5),
            Sequence::new(&A3, 5),
            Sequence::new(&A4_ALT, 5),
        ];
        let basis = MixedRadixBasis::new(&[3, 3, 2, 3]);
        (sns, basis)
    }

    #[test]
    fn test_delta_within_range() {
        let (sns, basis) = test_oracle();
        let oracle = DeltaOracle::new(&sns, &basis, 5);
        for p in 0..300 {
            let d = oracle.delta(p);
            assert!((5..=58).contains(&d), "delta({}) = {} out of range", p, d);
        }
    }

    #[test]
    fn test_delta_is_periodic_per_sequence_lcm() {
        let (sns, basis) = test_oracle();
        let oracle = DeltaOracle::new(&sns, &basis, 5);
        // delta(p) depends only on p mod L_i per sequence, so it repeats at L = prod(L_i).
        let p = 17;
        let lengths = [236usize, 233, 31, 241];
        let l: usize = lengths.iter().product();
        assert_eq!(oracle.delta(p), oracle.delta(p + l));
    }
}
