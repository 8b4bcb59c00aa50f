//! # anoto_codec
//!
//! This library provides encoding and decoding of 2D locations based on the
//! [Anoto](https://www.anoto.com/cases/anoto-digital-pen/) dot pattern
//! approach: a two-dimensional dot pattern over a very large plane where any
//! small enough window uniquely determines its absolute coordinates within a
//! section tile, and which of the four 90° rotations it was observed in.
//!
//! This crate covers the codec core only — the number-theoretic machinery,
//! the sequence data model, the pattern generator, and the decoders. It does
//! not render dots to a drawing surface, read or write files, or provide a
//! command-line interface; the choice of concrete sequence constants beyond
//! the bundled reference sequences is likewise left to callers.
//!
//! ## Example
//!
//! ```
//! use anoto_codec::defaults;
//! use ndarray::s;
//!
//! // Use the default embodiment with the fixed (quasi De Bruijn) A4 sequence.
//! let codec = defaults::anoto_6x6_a4_fixed();
//!
//! // Generate a bit-matrix for section (10,2).
//! let g = codec.encode_bitmatrix((9, 16), (10, 2));
//!
//! // Decode a partial matrix.
//! let sub = g.slice(s![3..9, 7..13, ..]).to_owned();
//! let pos = codec.decode_position(&sub).unwrap();
//! let sec = codec.decode_section(&sub, pos).unwrap();
//!
//! println!("pos: {:?} sec: {:?}", pos, sec);
//! // pos: (7, 3) sec: (10, 2)
//! ```

pub mod anoto_sequences;
pub mod axis;
pub mod codec;
pub mod crt;
pub mod defaults;
pub mod delta;
pub mod error;
pub mod euclid;
pub mod helpers;
pub mod mixed_radix;
pub mod pattern;
pub mod sequence;

pub use codec::AnotoCodec;
pub use error::CodecError;
