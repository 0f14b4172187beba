//! Format conversion passthroughs.
//!
//! Each conversion streams records from the source format's parser into the
//! target format's writer (needletail for FASTA output, gb-io for GenBank
//! output) and returns the number of records written. Malformed input fails
//! the whole conversion; nothing is retried or skipped.

use std::fs::File;
use std::path::Path;

use gb_io::seq::Seq;
use log::debug;
use needletail::parser::{write_fasta, LineEnding};

use biomap_core::{BiomapError, Result};
use biomap_seq::{Alphabet, QualityEncoding, SeqRecord};

use crate::fasta::parse_fasta;
use crate::fastq::parse_fastq;
use crate::genbank::parse_genbank;

fn fasta_header(record: &SeqRecord) -> String {
    if record.description.is_empty() || record.description == record.id {
        record.id.clone()
    } else if record.description.starts_with(&record.id) {
        record.description.clone()
    } else {
        format!("{} {}", record.id, record.description)
    }
}

fn write_records_as_fasta(records: &[SeqRecord], dst: &Path) -> Result<u64> {
    let mut out = File::create(dst).map_err(|e| {
        BiomapError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", dst.display(), e),
        ))
    })?;
    let mut count = 0u64;
    for record in records {
        write_fasta(
            fasta_header(record).as_bytes(),
            record.seq.letters.as_bytes(),
            &mut out,
            LineEnding::Unix,
        )
        .map_err(|e| {
            BiomapError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{}: {}", dst.display(), e),
            ))
        })?;
        count += 1;
    }
    Ok(count)
}

/// Convert a FASTQ file to FASTA, returning the number of records written.
///
/// Quality symbols are decoded (and thereby validated) with `encoding`, then
/// dropped; FASTA carries no quality.
pub fn fastq_to_fasta(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    encoding: QualityEncoding,
) -> Result<u64> {
    let records = parse_fastq(&src, encoding)?;
    let count = write_records_as_fasta(&records, dst.as_ref())?;
    debug!("wrote {} FASTA records to {}", count, dst.as_ref().display());
    Ok(count)
}

/// Convert a GenBank file to FASTA, returning the number of records written.
///
/// Features, references, and annotations are dropped; FASTA keeps only the
/// header and letters.
pub fn genbank_to_fasta(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let records = parse_genbank(&src)?;
    let count = write_records_as_fasta(&records, dst.as_ref())?;
    debug!("wrote {} FASTA records to {}", count, dst.as_ref().display());
    Ok(count)
}

/// Convert a FASTA file to GenBank, returning the number of records written.
///
/// Each record becomes a minimal GenBank entry: LOCUS name from the record
/// id, DEFINITION from the description, molecule type from the inferred
/// alphabet, and no features.
pub fn fasta_to_genbank(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let records = parse_fasta(&src)?;
    let dst = dst.as_ref();
    let mut out = File::create(dst).map_err(|e| {
        BiomapError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", dst.display(), e),
        ))
    })?;

    let mut count = 0u64;
    for record in records {
        let molecule_type = match record.seq.alphabet {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
            Alphabet::Protein => "protein",
        };
        let seq = Seq {
            name: Some(record.id),
            definition: if record.description.is_empty() {
                None
            } else {
                Some(record.description)
            },
            len: Some(record.seq.letters.len()),
            molecule_type: Some(molecule_type.to_string()),
            seq: record.seq.letters.into_bytes(),
            ..Seq::empty()
        };
        seq.write(&mut out).map_err(|e| {
            BiomapError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", dst.display(), e),
            ))
        })?;
        count += 1;
    }
    debug!("wrote {} GenBank records to {}", count, dst.display());
    Ok(count)
}
