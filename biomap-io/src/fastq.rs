//! FASTQ parsing wrapper.
//!
//! Delegates file decoding to needletail; the caller picks the
//! [`QualityEncoding`] that maps quality symbols to numeric scores, which
//! land in the record's per-letter annotations.

use std::path::Path;

use log::debug;
use needletail::parser::Format;
use needletail::parse_fastx_file;
use serde_json::Value;

use biomap_core::{BiomapError, Result};
use biomap_seq::{QualityEncoding, RawSeq, SeqRecord};

use crate::fasta::split_header;
use crate::normalize::{flatten_record, normalize_record_owned};

/// Keys the FASTQ flat variant drops. Per-letter annotations stay, so the
/// decoded quality scores survive in the flat output.
const FLAT_DROP_KEYS: &[&str] = &["annotations", "dbxrefs", "features"];

/// Parse a FASTQ file into a vector of [`SeqRecord`]s.
///
/// Quality symbols are decoded with `encoding` and stored under its
/// annotation key (`phred_quality`, or `solexa_quality` for Solexa).
pub fn parse_fastq(path: impl AsRef<Path>, encoding: QualityEncoding) -> Result<Vec<SeqRecord>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path)
        .map_err(|e| BiomapError::Parse(format!("{}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| BiomapError::Parse(format!("{}: {}", path.display(), e)))?;
        if record.format() != Format::Fastq {
            return Err(BiomapError::Parse(format!(
                "{}: not a FASTQ file",
                path.display()
            )));
        }
        let (id, description) = split_header(record.id());
        let quality = record.qual().ok_or(BiomapError::MissingField {
            field: "quality",
            node: "FASTQ record",
        })?;
        let scores = encoding.decode(quality)?;
        let letters = String::from_utf8_lossy(&record.seq()).into_owned();

        let mut rec = SeqRecord::new(id.clone(), id, description, RawSeq::infer(letters));
        rec.letter_annotations
            .insert(encoding.annotation_key().to_string(), scores);
        records.push(rec);
    }
    debug!("parsed {} FASTQ records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a FASTQ file and normalize each record into a plain JSON tree.
pub fn fastq_to_dicts(path: impl AsRef<Path>, encoding: QualityEncoding) -> Result<Vec<Value>> {
    parse_fastq(path, encoding)?
        .into_iter()
        .map(normalize_record_owned)
        .collect()
}

/// Parse a FASTQ file into flat dictionaries: `id`, `name`, `description`,
/// the plain `seq` string, and the decoded quality under
/// `letter_annotations`.
pub fn fastq_to_flat_dicts(
    path: impl AsRef<Path>,
    encoding: QualityEncoding,
) -> Result<Vec<Value>> {
    fastq_to_dicts(path, encoding)?
        .into_iter()
        .map(|record| flatten_record(record, FLAT_DROP_KEYS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fastq_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".fastq").unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn fastq_parse_simple() {
        let file = write_fastq_file("@read1 lane1\nACGT\n+\n!I!I\n@read2\nGGCC\n+\nIIII\n");
        let records = parse_fastq(file.path(), QualityEncoding::Sanger).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "read1");
        assert_eq!(records[0].description, "read1 lane1");
        assert_eq!(records[0].seq.letters, "ACGT");
        assert_eq!(
            records[0].letter_annotations["phred_quality"],
            vec![0, 40, 0, 40]
        );
    }

    #[test]
    fn fastq_illumina_encoding() {
        let file = write_fastq_file("@read1\nAC\n+\n@h\n");
        let records = parse_fastq(file.path(), QualityEncoding::Illumina).unwrap();
        assert_eq!(records[0].letter_annotations["phred_quality"], vec![0, 40]);
    }

    #[test]
    fn fastq_solexa_encoding_key_and_negatives() {
        let file = write_fastq_file("@read1\nAC\n+\n;h\n");
        let records = parse_fastq(file.path(), QualityEncoding::Solexa).unwrap();
        assert_eq!(
            records[0].letter_annotations["solexa_quality"],
            vec![-5, 40]
        );
    }

    #[test]
    fn fastq_quality_out_of_range_fails() {
        // '!' is below the Illumina offset.
        let file = write_fastq_file("@read1\nAC\n+\n!!\n");
        assert!(parse_fastq(file.path(), QualityEncoding::Illumina).is_err());
    }

    #[test]
    fn fastq_to_dicts_keeps_quality() {
        let file = write_fastq_file("@read1\nACGT\n+\nIIII\n");
        let dicts = fastq_to_dicts(file.path(), QualityEncoding::Sanger).unwrap();
        assert_eq!(
            dicts[0]["letter_annotations"]["phred_quality"],
            json!([40, 40, 40, 40])
        );
    }

    #[test]
    fn fastq_flat_dicts_keep_quality() {
        let file = write_fastq_file("@read1\nACGT\n+\nIIII\n");
        let dicts = fastq_to_flat_dicts(file.path(), QualityEncoding::Sanger).unwrap();
        assert_eq!(
            dicts[0],
            json!({
                "id": "read1",
                "name": "read1",
                "description": "read1",
                "seq": "ACGT",
                "letter_annotations": {"phred_quality": [40, 40, 40, 40]}
            })
        );
    }

    #[test]
    fn fasta_input_is_rejected() {
        let file = write_fastq_file(">seq1\nACGT\n");
        assert!(parse_fastq(file.path(), QualityEncoding::Sanger).is_err());
    }

    #[test]
    fn truncated_fastq_fails() {
        let file = write_fastq_file("@read1\nACGT\n+\nII\n");
        assert!(parse_fastq(file.path(), QualityEncoding::Sanger).is_err());
    }
}
