//! FASTA parsing wrapper.
//!
//! Delegates all file decoding to needletail and lifts its records into the
//! [`SeqRecord`] model. The dictionary-producing variants run the records
//! through the normalizer.

use std::path::Path;

use log::debug;
use needletail::parser::Format;
use needletail::parse_fastx_file;
use serde_json::Value;

use biomap_core::{BiomapError, Result};
use biomap_seq::{RawSeq, SeqRecord};

use crate::normalize::{flatten_record, normalize_record_owned};

/// Keys the FASTA flat variant drops; FASTA records carry no quality, so
/// per-letter annotations go too.
const FLAT_DROP_KEYS: &[&str] = &["letter_annotations", "annotations", "dbxrefs", "features"];

/// Split a FASTA/FASTQ header into (first word, full header), the
/// conventional id/description pair.
pub(crate) fn split_header(header: &[u8]) -> (String, String) {
    let full = String::from_utf8_lossy(header).into_owned();
    let id = full
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    (id, full)
}

/// Parse a FASTA file into a vector of [`SeqRecord`]s.
///
/// The alphabet of each record is inferred from its letters. Feature,
/// reference, and per-letter annotation slots are left empty; FASTA carries
/// none of them.
pub fn parse_fasta(path: impl AsRef<Path>) -> Result<Vec<SeqRecord>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path)
        .map_err(|e| BiomapError::Parse(format!("{}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| BiomapError::Parse(format!("{}: {}", path.display(), e)))?;
        if record.format() != Format::Fasta {
            return Err(BiomapError::Parse(format!(
                "{}: not a FASTA file",
                path.display()
            )));
        }
        let (id, description) = split_header(record.id());
        let letters = String::from_utf8_lossy(&record.seq()).into_owned();
        records.push(SeqRecord::new(
            id.clone(),
            id,
            description,
            RawSeq::infer(letters),
        ));
    }
    debug!("parsed {} FASTA records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a FASTA file and normalize each record into a plain JSON tree.
pub fn fasta_to_dicts(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    parse_fasta(path)?
        .into_iter()
        .map(normalize_record_owned)
        .collect()
}

/// Parse a FASTA file into flat dictionaries: only `id`, `name`,
/// `description`, and the plain `seq` string.
pub fn fasta_to_flat_dicts(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    fasta_to_dicts(path)?
        .into_iter()
        .map(|record| flatten_record(record, FLAT_DROP_KEYS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use biomap_seq::Alphabet;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".fasta").unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn fasta_parse_simple() {
        let file = write_fasta_file(">seq1 first test sequence\nATCGATCG\n>seq2\nGCGCGCGC\n");
        let records = parse_fasta(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].name, "seq1");
        assert_eq!(records[0].description, "seq1 first test sequence");
        assert_eq!(records[0].seq.letters, "ATCGATCG");
        assert_eq!(records[0].seq.alphabet, Alphabet::Dna);
        assert_eq!(records[1].id, "seq2");
        assert!(records[1].features.is_empty());
    }

    #[test]
    fn fasta_multiline_sequence() {
        let file = write_fasta_file(">seq1\nACGT\nACGT\nACGT\n");
        let records = parse_fasta(file.path()).unwrap();
        assert_eq!(records[0].seq.letters, "ACGTACGTACGT");
    }

    #[test]
    fn fasta_protein_alphabet_inferred() {
        let file = write_fasta_file(">prot1\nMKAILVQE\n");
        let records = parse_fasta(file.path()).unwrap();
        assert_eq!(records[0].seq.alphabet, Alphabet::Protein);
    }

    #[test]
    fn fasta_to_dicts_normalizes() {
        let file = write_fasta_file(">seq1 demo\nACGT\n");
        let dicts = fasta_to_dicts(file.path()).unwrap();
        assert_eq!(dicts.len(), 1);
        assert_eq!(dicts[0]["id"], json!("seq1"));
        assert_eq!(
            dicts[0]["seq"],
            json!({"letters": "ACGT", "alphabet": "ACGTNRYSWKMBDHV"})
        );
        assert_eq!(dicts[0]["features"], json!([]));
    }

    #[test]
    fn fasta_flat_dicts_trim_to_scalars() {
        let file = write_fasta_file(">seq1 demo\nACGT\n");
        let dicts = fasta_to_flat_dicts(file.path()).unwrap();
        assert_eq!(
            dicts[0],
            json!({
                "id": "seq1",
                "name": "seq1",
                "description": "seq1 demo",
                "seq": "ACGT"
            })
        );
    }

    #[test]
    fn fasta_file_not_found() {
        assert!(parse_fasta("/nonexistent/file.fasta").is_err());
    }

    #[test]
    fn fastq_input_is_rejected() {
        let file = write_fasta_file("@read1\nACGT\n+\nIIII\n");
        assert!(parse_fasta(file.path()).is_err());
    }
}
