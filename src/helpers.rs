//! Helper functions for bit manipulation and rotation.

use ndarray::{Array2, Array3};

/// Maps from displacement direction d to canonical direction c.
const NUM2DIR: [usize; 4] = [0, 3, 1, 2];

/// Reverse of NUM2DIR.
const DIR2NUM: [usize; 4] = [0, 2, 3, 1];

/// Convert bit matrix to numeric representation.
///
/// Packs the bits using little-endian order.
pub fn bits_to_num(bitmatrix: &Array3<i8>) -> Array2<u8> {
    let (h, w, _) = bitmatrix.dim();
    let mut result = Array2::zeros((h, w));

    for i in 0..h {
        for j in 0..w {
            let x = bitmatrix[[i, j, 0]];
            let y = bitmatrix[[i, j, 1]];
            result[[i, j]] = (x as u8) | ((y as u8) << 1);
        }
    }

    result
}

/// Convert numeric matrix back to bit representation.
pub fn num_to_bits(num_matrix: &Array2<u8>) -> Array3<i8> {
    let (h, w) = num_matrix.dim();
    let mut result = Array3::zeros((h, w, 2));

    for i in 0..h {
        for j in 0..w {
            let val = num_matrix[[i, j]];
            result[[i, j, 0]] = (val & 1) as i8;
            result[[i, j, 1]] = ((val >> 1) & 1) as i8;
        }
    }

    result
}

/// Simulates 90Â° rotation of the bitmatrix applied k-times.
///
/// When k is positive applies a counterclockwise rotation,
/// else clockwise.
pub fn rot90(bitmatrix: &Array3<i8>, k: i32) -> Array3<i8> {
    let m = bits_to_num(bitmatrix);

    // Normalize k to [0, 3]
    let k_norm = k.rem_euclid(4);

    // 1. Rotate array
    let m_rot = rotate_array(&m, k_norm);

    // 2. Change bits: under rotation, bits will be decoded differently
    let mut m_transformed = m_rot.clone();
    for i in 0..m_rot.nrows() {
        for j in 0..m_rot.ncols() {
            let x = m_rot[[i, j]] as usize;
            let d = (NUM2DIR[x] as i32 - k_norm) as usize % 4;
            m_transformed[[i, j]] = DIR2NUM[d] as u8;
        }
    }

    // 3. Convert back to bits
    num_to_bits(&m_transformed)
}

/// Rotate a 2D array by k * 90 degrees counterclockwise.
fn rotate_array(arr: &Array2<u8>, k: i32) -> Array2<u8> {
    let k_norm = k.rem_euclid(4);

    match k_norm {
        0 => arr.clone(),
        1 => {
            // 90 degrees CCW: transpose then reverse each column
            let (h, w) = arr.dim();
            let mut result = Array2::zeros((w, h));
            for i in 0..h {
                for j in 0..w {
                    result[[w - 1 - j, i]] = arr[[i, j]];
                }
            }
            result
        }
        2 => {
            // 180 degrees: reverse both dimensions
            let (h, w) = arr.dim();
            let mut result = Array2::zeros((h, w));
            for i in 0..h {
                for j in 0..w {
                    result[[h - 1 - i, w - 1 - j]] = arr[[i, j]];
                }
            }
            result
        }
        3 => {
            // 270 degrees CCW (90 CW): transpose then reverse each row
            let (h, w) = arr.dim();
            let mut result = Array2::zeros((w, h));
            for i in 0..h {
                for j in 0..w {
                    result[[j, h - 1 - i]] = arr[[i, j]];
                }
            }
            result
        }
        _ => unreachable!(),
    }
}
