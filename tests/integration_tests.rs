//! Comprehensive integration tests for the Anoto codec.

use ndarray::s;
use anoto_codec::crt::Crt;
use anoto_codec::mixed_radix::MixedRadixBasis;
use anoto_codec::sequence::Sequence;
use anoto_codec::{anoto_sequences, defaults, helpers};

#[test]
fn test_bitmatrix_encode_different_sections() {
    let anoto = defaults::anoto_6x6_a4_fixed();

    let m = anoto.encode_bitmatrix((60, 60), (0, 0));
    assert_eq!(m.dim(), (60, 60, 2));
    assert_eq!(
        m.slice(s![..8, 0, 0]).to_vec(),
        vec![0, 0, 0, 0, 0, 0, 1, 0]
    );
    assert_eq!(
        m.slice(s![0, ..8, 1]).to_vec(),
        vec![0, 0, 0, 0, 0, 0, 1, 0]
    );

    let m = anoto.encode_bitmatrix((60, 60), (1, 1));
    assert_eq!(m.dim(), (60, 60, 2));
    assert_eq!(
        m.slice(s![..8, 0, 0]).to_vec(),
        vec![0, 0, 0, 0, 0, 1, 0, 0]
    );
    assert_eq!(
        m.slice(s![0, ..8, 1]).to_vec(),
        vec![0, 0, 0, 0, 0, 1, 0, 0]
    );
}

#[test]
fn test_bitmatrix_decode_position() {
    let anoto = defaults::anoto_6x6_a4_fixed();

    let test_cases = vec![(256, (0, 0)), (256, (10, 5)), (256, (5, 10))];

    for (size, section) in test_cases {
        let m = anoto.encode_bitmatrix((size, size), section);
        assert_eq!(m.dim(), (size, size, 2));

        // Test every 10th position to balance thoroughness with performance.
        for y in (0..size - 6).step_by(10) {
            for x in (0..size - 6).step_by(10) {
                let sub = m.slice(s![y..y + 6, x..x + 6, ..]).to_owned();
                let xy = anoto.decode_position(&sub).unwrap();
                assert_eq!(xy, (x, y), "Failed at position ({}, {})", x, y);

                let sec = anoto.decode_section(&sub, xy).unwrap();
                assert_eq!(sec, section, "Failed section at position ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_bitmatrix_decode_rotation() {
    let anoto = defaults::anoto_6x6_a4_fixed();
    let m = anoto.encode_bitmatrix((256, 256), (5, 10));

    // Test rotations at various positions.
    for i in (0..128 - 8).step_by(20) {
        for j in (0..128 - 8).step_by(20) {
            let s = m.slice(s![i..i + 8, j..j + 8, ..]).to_owned();

            assert_eq!(
                anoto.decode_rotation(&s).unwrap(),
                0,
                "Failed at position ({}, {})",
                i,
                j
            );

            let r1 = helpers::rot90(&s, 1);
            assert_eq!(
                anoto.decode_rotation(&r1).unwrap(),
                1,
                "Failed rotation 1 at position ({}, {})",
                i,
                j
            );

            let r2 = helpers::rot90(&s, 2);
            assert_eq!(
                anoto.decode_rotation(&r2).unwrap(),
                2,
                "Failed rotation 2 at position ({}, {})",
                i,
                j
            );

            let r3 = helpers::rot90(&s, 3);
            assert_eq!(
                anoto.decode_rotation(&r3).unwrap(),
                3,
                "Failed rotation 3 at position ({}, {})",
                i,
                j
            );
        }
    }
}

#[test]
fn test_decode_errors() {
    let anoto = defaults::anoto_6x6_a4_fixed();

    // Test with wrong sized matrix.
    let small_matrix = ndarray::Array3::<i8>::zeros((3, 3, 2));
    assert!(anoto.decode_position(&small_matrix).is_err());

    // Test with wrong number of channels.
    let wrong_channels = ndarray::Array3::<i8>::zeros((6, 6, 3));
    assert!(anoto.decode_position(&wrong_channels).is_err());
}

#[test]
fn test_encode_decode_round_trip() {
    let anoto = defaults::anoto_6x6_a4_fixed();

    // Test multiple section coordinates.
    let sections = vec![(0, 0), (1, 1), (10, 5), (20, 30)];

    for section in sections {
        let m = anoto.encode_bitmatrix((50, 50), section);

        // Pick a few positions to test.
        for y in [5, 15, 25].iter() {
            for x in [5, 15, 25].iter() {
                let sub = m.slice(s![*y..*y + 6, *x..*x + 6, ..]).to_owned();
                let decoded_pos = anoto.decode_position(&sub).unwrap();
                let decoded_sec = anoto.decode_section(&sub, decoded_pos).unwrap();

                assert_eq!(decoded_pos, (*x, *y));
                assert_eq!(decoded_sec, section);
            }
        }
    }
}

#[test]
fn test_legacy_a4_breaks_position_uniqueness() {
    // defaults::anoto_6x6() uses the original A4 sequence, which violates
    // the quasi De Bruijn property at order 5 (documented, undecided Open
    // Question in the spec). Sampling a window far enough into the pattern
    // that it straddles one of A4's duplicate substrings should decode to
    // the wrong position.
    let anoto = defaults::anoto_6x6();
    let m = anoto.encode_bitmatrix((256, 256), (0, 0));

    let mut mismatch_found = false;
    for x in 200..250 {
        let sub = m.slice(s![0..6, x..x + 6, ..]).to_owned();
        if let Ok(decoded) = anoto.decode_position(&sub) {
            if decoded != (x, 0) {
                mismatch_found = true;
                break;
            }
        } else {
            // A failed decode is also evidence of the broken uniqueness
            // guarantee (the window could not be located unambiguously).
            mismatch_found = true;
            break;
        }
    }

    assert!(
        mismatch_found,
        "expected the legacy A4 sequence to eventually break position decoding"
    );
}

#[test]
fn test_crt_reference_config() {
    let crt = Crt::new(&[236, 233, 31, 241]).unwrap();
    assert_eq!(crt.qs.to_vec(), vec![135, 145, 17, 62]);
    assert_eq!(crt.solve(&[97, 0, 3, 211]), 170326961);

    let small = Crt::new(&[3, 4, 5]).unwrap();
    assert_eq!(small.solve(&[0, 3, 4]), 39);
}

#[test]
fn test_mixed_radix_basis_reference_config() {
    let basis = MixedRadixBasis::new(&[3, 3, 2, 3]);
    let n: Vec<i64> = (0..54).collect();
    let n_arr = ndarray::Array1::from_vec(n.clone());
    let coeffs = basis.project(&n_arr);
    assert_eq!(coeffs.dim(), (54, 4));
    assert_eq!(basis.reconstruct(&coeffs).to_vec(), n);

    let alt_basis = MixedRadixBasis::new(&[2, 3, 3, 3]);
    let alt_coeffs = alt_basis.project(&n_arr);
    assert_ne!(coeffs.row(10).to_vec(), alt_coeffs.row(10).to_vec());
    assert_eq!(alt_basis.reconstruct(&alt_coeffs).to_vec(), n);
}

#[test]
fn test_quasi_de_bruijn_diagnostic_across_reference_sequences() {
    use anoto_sequences::*;

    assert!(Sequence::new(&MNS, 6).is_quasi_de_bruijn(6));
    assert!(Sequence::new(&A1, 5).is_quasi_de_bruijn(5));
    assert!(Sequence::new(&A2, 5).is_quasi_de_bruijn(5));
    assert!(Sequence::new(&A3, 5).is_quasi_de_bruijn(5));
    assert!(Sequence::new(&A4_ALT, 5).is_quasi_de_bruijn(5));
    assert!(!Sequence::new(&A4, 5).is_quasi_de_bruijn(5));
}
