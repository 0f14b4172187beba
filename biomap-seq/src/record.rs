//! The parsed sequence record model.
//!
//! These types are what the format wrappers in `biomap-io` produce from
//! external parser output, and what the normalizer consumes. Each external
//! object shape gets an explicit struct — [`SeqRecord`], [`RawSeq`],
//! [`Feature`], [`Location`], [`Reference`] — rather than an attribute bag,
//! so the field contracts are checked at compile time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Sentinel id an external parser supplies for a feature with no identifier.
/// The normalizer turns it into an explicit JSON null.
pub const UNKNOWN_ID: &str = "<unknown id>";

/// An interval endpoint as the external parser presents it: an integer plus
/// a fuzziness flag (GenBank `<`/`>` bounds). Normalization coerces it to a
/// plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub value: i64,
    pub fuzzy: bool,
}

impl Position {
    /// An exact (non-fuzzy) position.
    pub fn exact(value: i64) -> Self {
        Position {
            value,
            fuzzy: false,
        }
    }
}

/// A half-open interval `[start, end)` into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
    /// `1` for the forward strand, `-1` for the reverse complement.
    pub strand: i8,
}

impl Location {
    /// A forward-strand location with exact endpoints.
    pub fn new(start: i64, end: i64) -> Self {
        Location {
            start: Position::exact(start),
            end: Position::exact(end),
            strand: 1,
        }
    }
}

/// A feature location: a single interval, or a list of intervals for
/// compound (e.g. spliced) features. The scalar-vs-list shape survives
/// normalization, so callers must not assume a list is always produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureLocation {
    Simple(Location),
    Compound(Vec<Location>),
}

/// A named region of interest within a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature identifier; [`UNKNOWN_ID`] when the parser had none.
    pub id: String,
    /// Feature kind (e.g. "gene", "CDS", "mRNA").
    pub kind: String,
    pub location: FeatureLocation,
    /// Qualifier key/value pairs; a `None` value is a flag-style qualifier.
    pub qualifiers: Vec<(String, Option<String>)>,
}

impl Feature {
    /// Whether the parser supplied no real identifier.
    pub fn has_unknown_id(&self) -> bool {
        self.id == UNKNOWN_ID
    }
}

/// A literature citation attached to a record's annotations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub authors: Option<String>,
    pub consortium: Option<String>,
    pub journal: Option<String>,
    pub pubmed: Option<String>,
    pub remark: Option<String>,
    /// Base spans the citation covers; empty means no location given.
    pub location: Vec<Location>,
}

/// The annotation bundle of a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub molecule_type: Option<String>,
    pub topology: Option<String>,
    pub date: Option<String>,
    pub source: Option<String>,
    pub organism: Option<String>,
    pub division: Option<String>,
    pub keywords: Vec<String>,
    pub comments: Vec<String>,
    pub references: Vec<Reference>,
}

/// The raw letter sequence plus its alphabet label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeq {
    pub letters: String,
    pub alphabet: Alphabet,
}

impl RawSeq {
    pub fn new(letters: impl Into<String>, alphabet: Alphabet) -> Self {
        RawSeq {
            letters: letters.into(),
            alphabet,
        }
    }

    /// Build from raw letters, inferring the alphabet.
    pub fn infer(letters: impl Into<String>) -> Self {
        let letters = letters.into();
        let alphabet = Alphabet::infer(letters.as_bytes());
        RawSeq { letters, alphabet }
    }
}

/// A named biological sequence read from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeqRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub dbxrefs: Vec<String>,
    pub seq: RawSeq,
    /// Per-letter annotations, e.g. decoded `phred_quality` for FASTQ.
    pub letter_annotations: BTreeMap<String, Vec<i16>>,
    pub features: Vec<Feature>,
    pub annotations: Annotations,
}

impl SeqRecord {
    /// A record with the given identity and sequence and everything else
    /// empty, as FASTA parsing produces.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        seq: RawSeq,
    ) -> Self {
        SeqRecord {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            dbxrefs: Vec::new(),
            seq,
            letter_annotations: BTreeMap::new(),
            features: Vec::new(),
            annotations: Annotations::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_sentinel() {
        let feature = Feature {
            id: UNKNOWN_ID.to_string(),
            kind: "gene".to_string(),
            location: FeatureLocation::Simple(Location::new(0, 10)),
            qualifiers: Vec::new(),
        };
        assert!(feature.has_unknown_id());

        let named = Feature {
            id: "gene-1".to_string(),
            ..feature
        };
        assert!(!named.has_unknown_id());
    }

    #[test]
    fn raw_seq_infers_alphabet() {
        assert_eq!(RawSeq::infer("ACGT").alphabet, Alphabet::Dna);
        assert_eq!(RawSeq::infer("MKAILV").alphabet, Alphabet::Protein);
    }

    #[test]
    fn new_record_is_bare() {
        let rec = SeqRecord::new("id1", "id1", "id1 test", RawSeq::infer("ACGT"));
        assert!(rec.features.is_empty());
        assert!(rec.annotations.references.is_empty());
        assert!(rec.letter_annotations.is_empty());
    }
}
