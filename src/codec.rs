//! Anoto codec facade: orchestrates the sequence store, delta oracle,
//! pattern generator, and axis decoder into encode/decode operations.

use ndarray::{s, Array3};
use log::debug;

use crate::axis;
use crate::crt::Crt;
use crate::delta::DeltaOracle;
use crate::error::CodecError;
use crate::helpers;
use crate::mixed_radix::MixedRadixBasis;
use crate::pattern;
use crate::sequence::Sequence;

/// A generalized implementation of the Anoto coding.
///
/// An instance of this struct supports encoding and decoding of Anoto
/// patterns. Given a bit-matrix of shape `(M,M,2)` the provided methods
/// decode:
/// - a) the position coordinate `(x,y)`
/// - b) the section coordinates `(u,v)`
/// - c) the pattern orientation
pub struct AnotoCodec {
    mns: Sequence,
    mns_order: usize,
    sns: Vec<Sequence>,
    basis: MixedRadixBasis,
    crt: Crt,
    delta_range: (i64, i64),
}

impl AnotoCodec {
    /// Initializes the Anoto codec, validating every configuration
    /// invariant eagerly (§7/§10.3): mismatched sequence/prime-factor
    /// counts, a prime-factor product that doesn't match the delta range
    /// width, and (via [`Crt::new`]) non-coprime secondary sequence lengths.
    ///
    /// # Arguments
    /// * `mns` - A binary quasi De Bruijn sequence of order `mns_order` and
    ///   length `m` that acts as the main number sequence (MNS).
    /// * `mns_order` - The order of the MNS.
    /// * `sns` - A list of secondary number sequences which are also quasi
    ///   De Bruijn sequences of order `mns_order - 1`.
    /// * `pfactors` - The sequence of prime factors to decompose difference
    ///   values.
    /// * `delta_range` - A range of possible difference values (inclusive).
    pub fn new(
        mns: &[i8],
        mns_order: usize,
        sns: &[&[i8]],
        pfactors: &[i64],
        delta_range: (i64, i64),
    ) -> Result<Self, CodecError> {
        if mns_order < 2 {
            return Err(CodecError::config(format!(
                "mns_order must be >= 2, got {}",
                mns_order
            )));
        }
        if mns_order > mns.len() {
            return Err(CodecError::config(format!(
                "mns_order {} exceeds MNS length {}",
                mns_order,
                mns.len()
            )));
        }
        if sns.len() != pfactors.len() {
            return Err(CodecError::config(format!(
                "number of secondary sequences ({}) must match number of prime factors ({})",
                sns.len(),
                pfactors.len()
            )));
        }
        let pfactor_product: i64 = pfactors.iter().product();
        let delta_width = delta_range.1 - delta_range.0 + 1;
        if pfactor_product != delta_width {
            return Err(CodecError::config(format!(
                "prime factor product ({}) must equal delta range width ({})",
                pfactor_product, delta_width
            )));
        }
        let sns_order = mns_order - 1;
        for (i, s) in sns.iter().enumerate() {
            if sns_order > s.len() {
                return Err(CodecError::config(format!(
                    "secondary sequence {} of length {} is shorter than required order {}",
                    i,
                    s.len(),
                    sns_order
                )));
            }
        }

        let mns_seq = Sequence::new(mns, mns_order);
        let sns_seqs: Vec<Sequence> = sns.iter().map(|s| Sequence::new(s, sns_order)).collect();

        let basis = MixedRadixBasis::new(pfactors);
        let sns_lengths: Vec<i64> = sns_seqs.iter().map(|s| s.len() as i64).collect();
        let crt = Crt::new(&sns_lengths)?;

        debug!(
            "constructed AnotoCodec: mns_len={} order={} sns_count={} delta_range={:?}",
            mns_seq.len(),
            mns_order,
            sns_seqs.len(),
            delta_range
        );

        Ok(AnotoCodec {
            mns: mns_seq,
            mns_order,
            sns: sns_seqs,
            basis,
            crt,
            delta_range,
        })
    }

    pub fn mns_order(&self) -> usize {
        self.mns_order
    }

    pub fn mns_length(&self) -> usize {
        self.mns.len()
    }

    /// Generates a `(H,W,2)` bitmatrix given section coordinates `(u,v)`.
    pub fn encode_bitmatrix(&self, shape: (usize, usize), section: (usize, usize)) -> Array3<i8> {
        let oracle = DeltaOracle::new(&self.sns, &self.basis, self.delta_range.0);
        pattern::encode_bitmatrix(&self.mns, &oracle, shape, section)
    }

    /// Decodes an `(N,M,2)` bitmatrix (`N,M >= mns_order`) into a 2D
    /// location with respect to the section tile.
    pub fn decode_position(&self, bits: &Array3<i8>) -> Result<(usize, usize), CodecError> {
        self.assert_bitmatrix_shape(bits, self.mns_order)?;

        let bits_sliced = bits
            .slice(s![..self.mns_order, ..self.mns_order, ..])
            .to_owned();

        let x_bits = bits_sliced.slice(s![.., .., 0]).t().to_owned();
        let y_bits = bits_sliced.slice(s![.., .., 1]).to_owned();

        let x = axis::decode_axis(
            &self.mns,
            &self.sns,
            &self.basis,
            &self.crt,
            self.delta_range,
            &x_bits,
        )?;
        let y = axis::decode_axis(
            &self.mns,
            &self.sns,
            &self.basis,
            &self.crt,
            self.delta_range,
            &y_bits,
        )?;

        Ok((x, y))
    }

    /// Computes the section coordinates `(u,v)` from an observed bits matrix
    /// and its already-decoded in-section position.
    pub fn decode_section(
        &self,
        bits: &Array3<i8>,
        pos: (usize, usize),
    ) -> Result<(usize, usize), CodecError> {
        self.assert_bitmatrix_shape(bits, self.mns_order)?;

        let px_seq: Vec<u8> = bits
            .slice(s![..self.mns_order, 0, 0])
            .iter()
            .map(|&v| v as u8)
            .collect();
        let py_seq: Vec<u8> = bits
            .slice(s![0, ..self.mns_order, 1])
            .iter()
            .map(|&v| v as u8)
            .collect();

        let px_mns = self.mns.find(&px_seq).ok_or_else(|| {
            CodecError::decoding("MNS column header not found in cyclic extension")
        })?;
        let py_mns = self.mns.find(&py_seq).ok_or_else(|| {
            CodecError::decoding("MNS row header not found in cyclic extension")
        })?;

        let oracle = DeltaOracle::new(&self.sns, &self.basis, self.delta_range.0);
        let sx = self.integrate_roll(&oracle, pos.0);
        let sy = self.integrate_roll(&oracle, pos.1);

        let mns_length = self.mns.len() as i64;
        let u = (px_mns as i64 - pos.1 as i64 - sx).rem_euclid(mns_length) as usize;
        let v = (py_mns as i64 - pos.0 as i64 - sy).rem_euclid(mns_length) as usize;

        Ok((u, v))
    }

    /// Determines the rotation of the observed pattern in 90° steps (ccw).
    ///
    /// Returns `0..=3` where `0` is the canonical orientation. The window
    /// must be at least `(mns_order + 2, mns_order + 2, 2)`.
    pub fn decode_rotation(&self, bits: &Array3<i8>) -> Result<usize, CodecError> {
        self.assert_bitmatrix_shape(bits, self.mns_order + 2)?;

        let m = bits.dim().0.min(bits.dim().1);
        let bits_square = bits.slice(s![..m, ..m, ..]).to_owned();

        for k in 0..4 {
            let rotbits = helpers::rot90(&bits_square, k);
            if self.check_rotation(&rotbits, m) {
                return Ok(((4 - k) % 4) as usize);
            }
        }

        debug!("failed to resolve pattern orientation over a {}x{} window", m, m);

        Err(CodecError::decoding(
            "failed to determine pattern orientation: no rotation satisfied the majority check",
        ))
    }

    fn integrate_roll(&self, oracle: &DeltaOracle, pos: usize) -> i64 {
        let mut r = 0i64;
        for i in 0..pos {
            r += oracle.delta(i);
        }
        r % self.mns.len() as i64
    }

    fn check_rotation(&self, rotbits: &Array3<i8>, m: usize) -> bool {
        let mut xcol_correct = 0;
        let mut yrow_correct = 0;

        for i in 0..m {
            let xcol: Vec<u8> = rotbits
                .slice(s![.., i, 0])
                .iter()
                .map(|&v| v as u8)
                .collect();
            let yrow: Vec<u8> = rotbits
                .slice(s![i, .., 1])
                .iter()
                .map(|&v| v as u8)
                .collect();

            if self.mns.find(&xcol).is_some() {
                xcol_correct += 1;
            }
            if self.mns.find(&yrow).is_some() {
                yrow_correct += 1;
            }
        }

        xcol_correct >= m / 2 && yrow_correct >= m / 2
    }

    fn assert_bitmatrix_shape(&self, bits: &Array3<i8>, min: usize) -> Result<(), CodecError> {
        let (n, m, c) = bits.dim();

        if n < min || m < min || c != 2 {
            return Err(CodecError::shape(format!(
                "expected at least a ({},{},2) matrix, got ({},{},{})",
                min, min, n, m, c
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anoto_sequences::*;

    fn create_test_codec() -> AnotoCodec {
        AnotoCodec::new(&MNS, 6, &[&A1, &A2, &A3, &A4_ALT], &[3, 3, 2, 3], (5, 58)).unwrap()
    }

    #[test]
    fn test_encode_bitmatrix() {
        let codec = create_test_codec();
        let m = codec.encode_bitmatrix((60, 60), (0, 0));
        assert_eq!(m.dim(), (60, 60, 2));
    }

    #[test]
    fn test_encode_decode_position() {
        let codec = create_test_codec();
        let m = codec.encode_bitmatrix((100, 100), (5, 10));

        for y in 0..90 {
            for x in 0..90 {
                let sub = m.slice(s![y..y + 6, x..x + 6, ..]).to_owned();
                let (decoded_x, decoded_y) = codec.decode_position(&sub).unwrap();
                assert_eq!((decoded_x, decoded_y), (x, y));
            }
        }
    }

    #[test]
    fn test_decode_section_round_trip() {
        let codec = create_test_codec();
        let section = (10, 5);
        let m = codec.encode_bitmatrix((256, 256), section);

        for y in (0..250).step_by(11) {
            for x in (0..250).step_by(11) {
                let sub = m.slice(s![y..y + 6, x..x + 6, ..]).to_owned();
                let pos = codec.decode_position(&sub).unwrap();
                assert_eq!(pos, (x, y));
                let sec = codec.decode_section(&sub, pos).unwrap();
                assert_eq!(sec, section);
            }
        }
    }

    #[test]
    fn test_mismatched_sns_and_pfactors_is_config_error() {
        let err = AnotoCodec::new(&MNS, 6, &[&A1, &A2, &A3], &[3, 3, 2, 3], (5, 58)).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn test_pfactor_product_mismatch_is_config_error() {
        let err = AnotoCodec::new(&MNS, 6, &[&A1, &A2, &A3, &A4_ALT], &[3, 3, 2, 3], (5, 50))
            .unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn test_decode_position_shape_error() {
        let codec = create_test_codec();
        let small = Array3::<i8>::zeros((3, 3, 2));
        assert!(matches!(
            codec.decode_position(&small).unwrap_err(),
            CodecError::Shape(_)
        ));

        let wrong_channels = Array3::<i8>::zeros((6, 6, 3));
        assert!(matches!(
            codec.decode_position(&wrong_channels).unwrap_err(),
            CodecError::Shape(_)
        ));
    }
}
