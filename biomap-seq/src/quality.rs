//! FASTQ quality score decoding.
//!
//! A [`QualityEncoding`] names one of the fixed FASTQ quality variants and
//! decodes raw ASCII quality bytes into numeric scores. Scores are `i16`
//! because Solexa scores reach below zero (down to -5).

use serde::{Deserialize, Serialize};

use biomap_core::{BiomapError, Result};

/// Quality score encoding scheme for FASTQ files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityEncoding {
    /// Phred+33 (Sanger / Illumina 1.8+). The modern default.
    Sanger,
    /// Phred+64 (Illumina 1.3–1.7).
    Illumina,
    /// Solexa+64 (Solexa / Illumina 1.0). Scores may be negative.
    Solexa,
}

impl QualityEncoding {
    /// ASCII offset subtracted from each quality byte.
    pub fn offset(self) -> u8 {
        match self {
            QualityEncoding::Sanger => 33,
            QualityEncoding::Illumina => 64,
            QualityEncoding::Solexa => 64,
        }
    }

    /// Lowest ASCII byte the encoding admits (`;` maps to Solexa -5).
    fn min_byte(self) -> u8 {
        match self {
            QualityEncoding::Sanger => 33,
            QualityEncoding::Illumina => 64,
            QualityEncoding::Solexa => 59,
        }
    }

    /// Key under which decoded scores are stored in a record's
    /// per-letter annotations.
    pub fn annotation_key(self) -> &'static str {
        match self {
            QualityEncoding::Sanger | QualityEncoding::Illumina => "phred_quality",
            QualityEncoding::Solexa => "solexa_quality",
        }
    }

    /// Decode ASCII-encoded quality bytes into numeric scores.
    pub fn decode(self, ascii: &[u8]) -> Result<Vec<i16>> {
        let offset = self.offset() as i16;
        let min = self.min_byte();
        let mut scores = Vec::with_capacity(ascii.len());
        for (i, &b) in ascii.iter().enumerate() {
            if b < min || b > b'~' {
                return Err(BiomapError::InvalidInput(format!(
                    "quality byte 0x{:02X} at position {} is outside the {:?} range",
                    b, i, self
                )));
            }
            scores.push(b as i16 - offset);
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanger_decodes_phred33() {
        // '!' = 33 → Q0, 'I' = 73 → Q40
        let scores = QualityEncoding::Sanger.decode(b"!I").unwrap();
        assert_eq!(scores, vec![0, 40]);
    }

    #[test]
    fn illumina_decodes_phred64() {
        // '@' = 64 → Q0, 'h' = 104 → Q40
        let scores = QualityEncoding::Illumina.decode(b"@h").unwrap();
        assert_eq!(scores, vec![0, 40]);
    }

    #[test]
    fn solexa_admits_negative_scores() {
        // ';' = 59 → -5
        let scores = QualityEncoding::Solexa.decode(b";@h").unwrap();
        assert_eq!(scores, vec![-5, 0, 40]);
    }

    #[test]
    fn byte_below_offset_fails() {
        let err = QualityEncoding::Illumina.decode(b"!").unwrap_err();
        assert!(matches!(err, BiomapError::InvalidInput(_)));
    }

    #[test]
    fn annotation_keys() {
        assert_eq!(QualityEncoding::Sanger.annotation_key(), "phred_quality");
        assert_eq!(QualityEncoding::Solexa.annotation_key(), "solexa_quality");
    }
}
