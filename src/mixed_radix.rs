//! Mixed-radix basis: bidirectional map between an integer in `[0, prod(p_i))`
//! and a coefficient tuple `(c_1, ..., c_k)` with `0 <= c_i < p_i`.

use ndarray::{Array1, Array2};

/// Represents numbers in a basis defined by prime factors.
///
/// Given prime factors `p_1, ..., p_n` the integer interval
/// `[0, p_1*...*p_n)` can be represented uniquely using `n` coefficients,
/// one per basis `b_i = p_1*...*p_{i-1}` (with `b_1 = 1`).
pub struct MixedRadixBasis {
    pub upper: i64,
    pub bases: Array1<i64>,
    rbases: Array1<i64>,
    pub pfactors: Array1<i64>,
}

impl MixedRadixBasis {
    pub fn new(pfactors: &[i64]) -> Self {
        let pfactors_arr = Array1::from_vec(pfactors.to_vec());
        let upper = pfactors.iter().product();

        let mut cumulative = 1i64;
        let mut bases_vec = Vec::with_capacity(pfactors.len());
        for &factor in pfactors {
            bases_vec.push(cumulative);
            cumulative *= factor;
        }

        let bases = Array1::from_vec(bases_vec.clone());
        let mut rbases_vec = bases_vec;
        rbases_vec.reverse();
        let rbases = Array1::from_vec(rbases_vec);

        MixedRadixBasis {
            upper,
            bases,
            rbases,
            pfactors: pfactors_arr,
        }
    }

    /// Number of bases (equivalently, the number of prime factors).
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Projects a batch of numbers in `[0, upper)` onto their coefficient
    /// tuples, computed by successive division from the largest basis down.
    ///
    /// Returns an `(n.len(), bases.len())` matrix.
    pub fn project(&self, n: &Array1<i64>) -> Array2<i64> {
        let mut coeffs = Vec::new();
        let mut n_working = n.clone();

        for &b in self.rbases.iter() {
            let q = &n_working / b;
            let r = &n_working % b;
            coeffs.push(q);
            n_working = r;
        }

        coeffs.reverse();
        let n_nums = n.len();
        let n_bases = self.bases.len();
        let mut result = Array2::zeros((n_nums, n_bases));

        for (i, coeff_arr) in coeffs.iter().enumerate() {
            for (j, &val) in coeff_arr.iter().enumerate() {
                result[[j, i]] = val;
            }
        }

        result
    }

    /// Reconstructs integers from coefficient tuples: `x = sum(b_i * c_i)`.
    pub fn reconstruct(&self, coeffs: &Array2<i64>) -> Array1<i64> {
        let mut result = Array1::zeros(coeffs.nrows());
        for i in 0..coeffs.nrows() {
            let mut sum = 0i64;
            for j in 0..coeffs.ncols() {
                sum += coeffs[[i, j]] * self.bases[j];
            }
            result[i] = sum;
        }
        result
    }

    /// Convenience wrapper projecting a single number.
    pub fn project_one(&self, n: i64) -> Vec<i64> {
        let arr = Array1::from_vec(vec![n]);
        self.project(&arr).row(0).to_vec()
    }

    /// Convenience wrapper reconstructing from a single coefficient tuple.
    pub fn reconstruct_one(&self, coeffs: &[i64]) -> i64 {
        let arr = Array2::from_shape_vec((1, coeffs.len()), coeffs.to_vec()).unwrap();
        self.reconstruct(&arr)[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_radix_basis_round_trip() {
        let basis = MixedRadixBasis::new(&[3, 3, 2, 3]);
        assert_eq!(basis.upper, 54);

        let n: Vec<i64> = (0..54).collect();
        let n_arr = Array1::from_vec(n.clone());
        let coeffs = basis.project(&n_arr);
        assert_eq!(coeffs.dim(), (54, 4));

        let reconstructed = basis.reconstruct(&coeffs);
        assert_eq!(reconstructed.to_vec(), n);
    }

    #[test]
    fn test_mixed_radix_basis_different_order() {
        let a = MixedRadixBasis::new(&[3, 3, 2, 3]);
        let b = MixedRadixBasis::new(&[2, 3, 3, 3]);

        let n_arr = Array1::from_vec(vec![17i64]);
        let ca = a.project(&n_arr);
        let cb = b.project(&n_arr);

        assert_ne!(ca.row(0).to_vec(), cb.row(0).to_vec());
        assert_eq!(a.reconstruct(&ca)[0], 17);
        assert_eq!(b.reconstruct(&cb)[0], 17);
    }

    #[test]
    fn test_project_reconstruct_single() {
        let basis = MixedRadixBasis::new(&[3, 3, 2, 3]);
        let c = basis.project_one(40);
        assert_eq!(basis.reconstruct_one(&c), 40);
    }
}
