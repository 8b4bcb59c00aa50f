//! Axis decoder: recovers the in-section coordinate along one axis from an
//! N×N cell slice.

use ndarray::{s, Array1, Array2};
use log::trace;

use crate::error::CodecError;
use crate::mixed_radix::MixedRadixBasis;
use crate::sequence::Sequence;

/// Decodes the coordinate encoded along the rows of an `N x N` bit matrix.
///
/// Callers transpose the X channel's slice before calling this (the MNS
/// runs along columns there) and pass the Y channel as-is.
pub fn decode_axis(
    mns: &Sequence,
    sns: &[Sequence],
    basis: &MixedRadixBasis,
    crt: &crate::crt::Crt,
    delta_range: (i64, i64),
    bits: &Array2<i8>,
) -> Result<usize, CodecError> {
    let m = bits.nrows();
    let mns_length = mns.len() as i64;

    let mut locs = Vec::with_capacity(m);
    for i in 0..m {
        let row: Vec<u8> = bits.slice(s![i, ..]).iter().map(|&v| v as u8).collect();
        let loc = mns.find(&row).ok_or_else(|| {
            trace!("axis decode: MNS row {} not found in cyclic extension", i);
            CodecError::decoding(format!("MNS row {} not found in cyclic extension", i))
        })?;
        locs.push(loc as i64);
    }

    let mut deltas = Vec::with_capacity(m.saturating_sub(1));
    for i in 0..locs.len() - 1 {
        let diff = locs[i + 1] - locs[i];
        deltas.push(diff.rem_euclid(mns_length));
    }

    for &d in &deltas {
        if d < delta_range.0 || d > delta_range.1 {
            trace!(
                "axis decode: delta {} outside configured range [{}, {}]",
                d,
                delta_range.0,
                delta_range.1
            );
            return Err(CodecError::decoding(format!(
                "delta {} outside configured range [{}, {}]",
                d, delta_range.0, delta_range.1
            )));
        }
    }

    let shifted: Vec<i64> = deltas.iter().map(|&d| d - delta_range.0).collect();
    let shifted_arr = Array1::from_vec(shifted);
    let coeffs = basis.project(&shifted_arr);

    let mut remainders = Vec::with_capacity(sns.len());
    for (col, sequence) in sns.iter().enumerate() {
        let window: Vec<u8> = coeffs.column(col).iter().map(|&v| v as u8).collect();
        let pos = sequence.find(&window).ok_or_else(|| {
            trace!(
                "axis decode: secondary sequence {} window not found in cyclic extension",
                col
            );
            CodecError::decoding(format!(
                "secondary sequence {} window not found in cyclic extension",
                col
            ))
        })?;
        remainders.push(pos as i64);
    }

    Ok(crt.solve(&remainders) as usize)
}
