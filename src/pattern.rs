//! Pattern generator: produces the (H,W,2) cell matrix for a given section.

use ndarray::{s, Array3};

use crate::delta::DeltaOracle;
use crate::sequence::Sequence;

/// Generates the X or Y channel of the encoded pattern.
///
/// Column/row `i` carries the MNS cyclically rotated left by a roll that
/// accumulates `delta(i-1)` at each step, starting from `start_roll`.
fn roll_mns(mns: &Sequence, roll: usize) -> Vec<i8> {
    let len = mns.len();
    (0..len).map(|i| mns.get((i + roll) % len)).collect()
}

fn next_roll(oracle: &DeltaOracle, mns_length: usize, pos: usize, prev_roll: usize) -> usize {
    if pos == 0 {
        return prev_roll;
    }
    ((prev_roll as i64 + oracle.delta(pos - 1)).rem_euclid(mns_length as i64)) as usize
}

/// Generates a `(H, W, 2)` bitmatrix embedding section coordinates `(u, v)`.
pub fn encode_bitmatrix(
    mns: &Sequence,
    oracle: &DeltaOracle,
    shape: (usize, usize),
    section: (usize, usize),
) -> Array3<i8> {
    let (h, w) = shape;
    let mns_length = mns.len();

    // Round up to the nearest multiple of the MNS length so tiling is exact.
    let mh = mns_length * h.div_ceil(mns_length).max(1);
    let mw = mns_length * w.div_ceil(mns_length).max(1);

    let mut m = Array3::zeros((mh, mw, 2));

    // X channel.
    let mut roll = section.0 % mns_length;
    for x in 0..mw {
        roll = next_roll(oracle, mns_length, x, roll);
        let row = roll_mns(mns, roll);
        for y in 0..mh {
            m[[y, x, 0]] = row[y % mns_length];
        }
    }

    // Y channel.
    roll = section.1 % mns_length;
    for y in 0..mh {
        roll = next_roll(oracle, mns_length, y, roll);
        let row = roll_mns(mns, roll);
        for x in 0..mw {
            m[[y, x, 1]] = row[x % mns_length];
        }
    }

    m.slice(s![..h, ..w, ..]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anoto_sequences::{A1, A2, A3, A4_ALT, MNS};
    use crate::mixed_radix::MixedRadixBasis;

    fn test_mns_and_oracle() -> (Sequence, Vec<Sequence>, MixedRadixBasis) {
        let mns = Sequence::new(&MNS, 6);
        let sns = vec![
            Sequence::new(&A1, 5),
            Sequence::new(&A2, 5),
            Sequence::new(&A3, 5),
            Sequence::new(&A4_ALT, 5),
        ];
        let basis = MixedRadixBasis::new(&[3, 3, 2, 3]);
        (mns, sns, basis)
    }

    #[test]
    fn test_encode_shape() {
        let (mns, sns, basis) = test_mns_and_oracle();
        let oracle = DeltaOracle::new(&sns, &basis, 5);
        let m = encode_bitmatrix(&mns, &oracle, (60, 60), (0, 0));
        assert_eq!(m.dim(), (60, 60, 2));
    }

    #[test]
    fn test_encode_reference_fixture_section_0_0() {
        let (mns, sns, basis) = test_mns_and_oracle();
        let oracle = DeltaOracle::new(&sns, &basis, 5);
        let m = encode_bitmatrix(&mns, &oracle, (60, 60), (0, 0));
        assert_eq!(m.slice(s![..8, 0, 0]).to_vec(), vec![0, 0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(m.slice(s![0, ..8, 1]).to_vec(), vec![0, 0, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_encode_reference_fixture_section_1_1() {
        let (mns, sns, basis) = test_mns_and_oracle();
        let oracle = DeltaOracle::new(&sns, &basis, 5);
        let m = encode_bitmatrix(&mns, &oracle, (60, 60), (1, 1));
        assert_eq!(m.slice(s![..8, 0, 0]).to_vec(), vec![0, 0, 0, 0, 0, 1, 0, 0]);
        assert_eq!(m.slice(s![0, ..8, 1]).to_vec(), vec![0, 0, 0, 0, 0, 1, 0, 0]);
    }
}
