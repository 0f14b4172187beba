//! File format wrappers and record normalization for the biomap ecosystem.
//!
//! Parsing is delegated to external libraries — needletail for FASTA/FASTQ,
//! gb-io for GenBank — and their records are lifted into the `biomap-seq`
//! model, then normalized into plain JSON trees:
//!
//! - **FASTA** — [`parse_fasta`], [`fasta_to_dicts`], [`fasta_to_flat_dicts`]
//! - **FASTQ** — [`parse_fastq`], [`fastq_to_dicts`], [`fastq_to_flat_dicts`]
//! - **GenBank** — [`parse_genbank`], [`genbank_to_dicts`],
//!   [`genbank_to_dicts_lite`]
//! - **Normalizer** — [`normalize_record`] / [`normalize_record_owned`] and
//!   the per-shape helpers
//! - **Conversion** — [`fastq_to_fasta`], [`genbank_to_fasta`],
//!   [`fasta_to_genbank`]
//!
//! # Example
//!
//! ```no_run
//! use biomap_io::genbank_to_dicts;
//!
//! let dicts = genbank_to_dicts("ls_orchid.gbk")?;
//! println!("{}", serde_json::to_string_pretty(&dicts)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod convert;
pub mod fasta;
pub mod fastq;
pub mod genbank;
pub mod normalize;

// Re-exports for convenience.

pub use convert::{fasta_to_genbank, fastq_to_fasta, genbank_to_fasta};
pub use fasta::{fasta_to_dicts, fasta_to_flat_dicts, parse_fasta};
pub use fastq::{fastq_to_dicts, fastq_to_flat_dicts, parse_fastq};
pub use genbank::{genbank_to_dicts, genbank_to_dicts_lite, parse_genbank};
pub use normalize::{
    flatten_record, normalize_feature_list, normalize_location, normalize_record,
    normalize_record_owned, normalize_references, normalize_seq,
};
