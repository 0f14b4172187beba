//! GenBank parsing wrapper.
//!
//! Delegates GenBank flat-file decoding to gb-io and lifts each
//! `gb_io::seq::Seq` into the [`SeqRecord`] model: locations flatten into
//! explicit start/end positions, citations become [`Reference`]s with their
//! base spans extracted, and LOCUS/header fields land in the annotation
//! bundle. gb-io supplies no per-feature identifiers, so every feature
//! carries the [`UNKNOWN_ID`] sentinel for the normalizer to null out.

use std::fs::File;
use std::path::Path;

use gb_io::reader::SeqReader;
use gb_io::seq::{After, Before, Location as GbLocation, Seq, Topology};
use log::debug;
use serde_json::Value;

use biomap_core::{BiomapError, Result};
use biomap_seq::record::{
    Annotations, Feature, FeatureLocation, Location, Position, RawSeq, Reference, SeqRecord,
    UNKNOWN_ID,
};
use biomap_seq::Alphabet;

use crate::normalize::{normalize_record, normalize_record_owned};

/// Parse a GenBank flat file and lift all records into the model.
///
/// Multi-record files (separated by `//`) are fully supported.
pub fn parse_genbank(path: impl AsRef<Path>) -> Result<Vec<SeqRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        BiomapError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;

    let mut records = Vec::new();
    for seq in SeqReader::new(file) {
        let seq = seq.map_err(|e| BiomapError::Parse(format!("{}: {}", path.display(), e)))?;
        records.push(from_gb(seq)?);
    }
    if records.is_empty() {
        return Err(BiomapError::Parse(format!(
            "{}: no GenBank records found",
            path.display()
        )));
    }
    debug!(
        "parsed {} GenBank records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse a GenBank file and normalize each record into a plain JSON tree.
///
/// Each record is normalized with the full-copy strategy.
pub fn genbank_to_dicts(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    parse_genbank(path)?
        .iter()
        .map(normalize_record)
        .collect()
}

/// [`genbank_to_dicts`] via the owned ("lite") normalization strategy.
///
/// The records are moved into the output instead of copied. Output is
/// identical to [`genbank_to_dicts`].
pub fn genbank_to_dicts_lite(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    parse_genbank(path)?
        .into_iter()
        .map(normalize_record_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// gb-io → model mapping
// ---------------------------------------------------------------------------

fn from_gb(seq: Seq) -> Result<SeqRecord> {
    // ORIGIN blocks are conventionally lowercase; records carry uppercase.
    let letters = String::from_utf8_lossy(&seq.seq).to_uppercase();
    let alphabet = seq
        .molecule_type
        .as_deref()
        .and_then(Alphabet::from_molecule_type)
        .unwrap_or_else(|| Alphabet::infer(letters.as_bytes()));

    let name = seq.name.clone().unwrap_or_default();
    // Versioned accession wins as the record id, like the original parser's
    // library did; a header-less record is a contract violation.
    let id = seq
        .version
        .clone()
        .or_else(|| seq.accession.clone())
        .or_else(|| seq.name.clone())
        .ok_or(BiomapError::MissingField {
            field: "accession",
            node: "GenBank record",
        })?;

    let features = seq
        .features
        .into_iter()
        .map(|feature| {
            Ok(Feature {
                id: UNKNOWN_ID.to_string(),
                kind: feature.kind.to_string(),
                location: convert_location(&feature.location)?,
                qualifiers: feature
                    .qualifiers
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let references = seq
        .references
        .into_iter()
        .map(|reference| Reference {
            title: reference.title,
            authors: reference.authors,
            consortium: reference.consortium,
            journal: reference.journal,
            pubmed: reference.pubmed,
            remark: reference.remark,
            location: reference_spans(&reference.description),
        })
        .collect();

    let annotations = Annotations {
        molecule_type: seq.molecule_type,
        topology: Some(
            match seq.topology {
                Topology::Linear => "linear",
                Topology::Circular => "circular",
            }
            .to_string(),
        ),
        date: seq.date.map(|d| d.to_string()),
        source: seq.source.as_ref().map(|s| s.source.clone()),
        organism: seq.source.and_then(|s| s.organism),
        division: Some(seq.division),
        keywords: split_list(seq.keywords.as_deref()),
        comments: seq.comments,
        references,
    };

    Ok(SeqRecord {
        id,
        name,
        description: seq.definition.unwrap_or_default(),
        dbxrefs: split_list(seq.dblink.as_deref()),
        seq: RawSeq::new(letters, alphabet),
        letter_annotations: Default::default(),
        features,
        annotations,
    })
}

/// Split a `;`-separated GenBank list field, dropping empties and the
/// placeholder `.`.
fn split_list(field: Option<&str>) -> Vec<String> {
    field
        .map(|text| {
            text.split(';')
                .map(str::trim)
                .filter(|part| !part.is_empty() && *part != ".")
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Flatten a gb-io location into explicit intervals. Complement wrappers
/// flip the strand; join/order forms contribute one interval per part.
/// Exotic forms fall back to gb-io's computed bounds, and a location with
/// no computable bounds is a missing-field error.
fn convert_location(location: &GbLocation) -> Result<FeatureLocation> {
    let mut segments = Vec::new();
    push_segments(location, 1, &mut segments)?;
    match segments.len() {
        0 => Err(BiomapError::MissingField {
            field: "location",
            node: "feature",
        }),
        1 => Ok(FeatureLocation::Simple(segments.remove(0))),
        _ => Ok(FeatureLocation::Compound(segments)),
    }
}

fn push_segments(location: &GbLocation, strand: i8, out: &mut Vec<Location>) -> Result<()> {
    match location {
        GbLocation::Range((start, Before(fuzzy_start)), (end, After(fuzzy_end))) => {
            out.push(Location {
                start: Position {
                    value: *start,
                    fuzzy: *fuzzy_start,
                },
                end: Position {
                    value: *end,
                    fuzzy: *fuzzy_end,
                },
                strand,
            });
        }
        GbLocation::Between(start, end) => {
            out.push(Location {
                start: Position::exact(*start),
                end: Position::exact(*end),
                strand,
            });
        }
        GbLocation::Complement(inner) => push_segments(inner, -strand, out)?,
        GbLocation::Join(parts) | GbLocation::Order(parts) => {
            for part in parts {
                push_segments(part, strand, out)?;
            }
        }
        other => {
            let (start, end) = other.find_bounds().map_err(|_| BiomapError::MissingField {
                field: "start",
                node: "location",
            })?;
            out.push(Location {
                start: Position::exact(start),
                end: Position::exact(end),
                strand,
            });
        }
    }
    Ok(())
}

/// Extract the base spans from a REFERENCE description such as
/// `"1  (bases 1 to 5028)"`. One-based inclusive spans become half-open
/// zero-based intervals. Anything unparseable yields no spans.
fn reference_spans(description: &str) -> Vec<Location> {
    let Some(open) = description.find('(') else {
        return Vec::new();
    };
    let inner = description[open + 1..].trim_end().trim_end_matches(')');
    let Some(spans) = inner.strip_prefix("bases") else {
        return Vec::new();
    };

    let mut locations = Vec::new();
    for span in spans.split(';') {
        let mut parts = span.split_whitespace();
        let (Some(start), Some(to), Some(end)) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        if to != "to" {
            continue;
        }
        let (Ok(start), Ok(end)) = (start.parse::<i64>(), end.parse::<i64>()) else {
            continue;
        };
        locations.push(Location::new(start - 1, end));
    }
    locations
}
