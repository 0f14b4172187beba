//! Sequence record model for the biomap ecosystem.
//!
//! Provides the typed shapes that file-format wrappers produce and the
//! normalizer consumes:
//!
//! - **Records** — [`SeqRecord`], [`RawSeq`], [`Feature`], [`Location`],
//!   [`Reference`], [`Annotations`]
//! - **Alphabets** — [`Alphabet`] labels reducible to plain symbol strings
//! - **Quality** — [`QualityEncoding`] for FASTQ quality decoding
//!
//! # Example
//!
//! ```
//! use biomap_seq::{Alphabet, RawSeq, SeqRecord};
//!
//! let rec = SeqRecord::new("AB0001", "AB0001", "AB0001 demo", RawSeq::infer("ACGT"));
//! assert_eq!(rec.seq.alphabet, Alphabet::Dna);
//! assert_eq!(rec.seq.alphabet.letters(), "ACGTNRYSWKMBDHV");
//! ```

pub mod alphabet;
pub mod quality;
pub mod record;

pub use alphabet::Alphabet;
pub use quality::QualityEncoding;
pub use record::{
    Annotations, Feature, FeatureLocation, Location, Position, RawSeq, Reference, SeqRecord,
    UNKNOWN_ID,
};
