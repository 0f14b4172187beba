//! The record normalizer.
//!
//! Walks a parsed [`SeqRecord`] and produces a tree of plain JSON values:
//! every leaf a primitive, every container an array or a string-keyed
//! object, so the result serializes without custom encoders. The handful of
//! fixups live here: interval endpoints are coerced from [`Position`]
//! wrappers to plain integers, the [`UNKNOWN_ID`] sentinel becomes an
//! explicit null, and the alphabet label is reduced to its symbol string.
//!
//! Two entry points share one implementation path:
//! [`normalize_record_owned`] consumes the record and moves its storage;
//! [`normalize_record`] clones first and delegates, leaving the source
//! record intact. Their output is identical.

use serde_json::Value;

use biomap_core::{remove_keys, BiomapError, Dict, Result};
use biomap_seq::record::{
    Annotations, Feature, FeatureLocation, Location, RawSeq, Reference, SeqRecord, UNKNOWN_ID,
};

fn location_object(loc: &Location) -> Result<Value> {
    if loc.start.value > loc.end.value {
        return Err(BiomapError::InvalidInput(format!(
            "location start {} is past end {}",
            loc.start.value, loc.end.value
        )));
    }
    let mut obj = Dict::new();
    obj.insert("start".to_string(), Value::from(loc.start.value));
    obj.insert("end".to_string(), Value::from(loc.end.value));
    obj.insert("strand".to_string(), Value::from(i64::from(loc.strand)));
    Ok(Value::Object(obj))
}

/// Normalize a feature location, preserving its scalar-vs-list shape:
/// a simple location becomes one object, a compound location an array.
pub fn normalize_location(location: &FeatureLocation) -> Result<Value> {
    match location {
        FeatureLocation::Simple(loc) => location_object(loc),
        FeatureLocation::Compound(locs) => locs
            .iter()
            .map(location_object)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
    }
}

fn option_value(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

fn string_array(values: Vec<String>) -> Value {
    Value::Array(values.into_iter().map(Value::String).collect())
}

fn normalize_feature(feature: Feature) -> Result<Value> {
    let mut obj = Dict::new();
    // The parser's "no id" sentinel becomes an explicit null.
    let id = if feature.id == UNKNOWN_ID {
        Value::Null
    } else {
        Value::String(feature.id)
    };
    obj.insert("id".to_string(), id);
    obj.insert("kind".to_string(), Value::String(feature.kind));
    obj.insert(
        "location".to_string(),
        normalize_location(&feature.location)?,
    );
    let qualifiers = feature
        .qualifiers
        .into_iter()
        .map(|(key, value)| {
            let mut q = Dict::new();
            q.insert("key".to_string(), Value::String(key));
            q.insert("value".to_string(), option_value(value));
            Value::Object(q)
        })
        .collect();
    obj.insert("qualifiers".to_string(), Value::Array(qualifiers));
    Ok(Value::Object(obj))
}

/// Normalize a record's features. Interval endpoints are coerced to plain
/// integers for every feature, whether or not its id was the sentinel.
pub fn normalize_feature_list(features: Vec<Feature>) -> Result<Value> {
    features
        .into_iter()
        .map(normalize_feature)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn normalize_reference(reference: Reference) -> Result<Value> {
    let mut obj = Dict::new();
    obj.insert("title".to_string(), Value::String(reference.title));
    obj.insert("authors".to_string(), option_value(reference.authors));
    obj.insert("consortium".to_string(), option_value(reference.consortium));
    obj.insert("journal".to_string(), option_value(reference.journal));
    obj.insert("pubmed".to_string(), option_value(reference.pubmed));
    obj.insert("remark".to_string(), option_value(reference.remark));
    let spans = reference
        .location
        .iter()
        .map(location_object)
        .collect::<Result<Vec<_>>>()?;
    obj.insert("location".to_string(), Value::Array(spans));
    Ok(Value::Object(obj))
}

/// Normalize a record's literature references, coercing any base spans they
/// carry. An empty span list stays an empty array.
pub fn normalize_references(references: Vec<Reference>) -> Result<Value> {
    references
        .into_iter()
        .map(normalize_reference)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Normalize the raw sequence block, reducing the alphabet label to its
/// plain symbol-set string.
pub fn normalize_seq(seq: RawSeq) -> Result<Value> {
    let mut obj = Dict::new();
    obj.insert("letters".to_string(), Value::String(seq.letters));
    obj.insert(
        "alphabet".to_string(),
        Value::String(seq.alphabet.letters().to_string()),
    );
    Ok(Value::Object(obj))
}

fn normalize_annotations(annotations: Annotations) -> Result<Value> {
    let mut obj = Dict::new();
    obj.insert(
        "molecule_type".to_string(),
        option_value(annotations.molecule_type),
    );
    obj.insert("topology".to_string(), option_value(annotations.topology));
    obj.insert("date".to_string(), option_value(annotations.date));
    obj.insert("source".to_string(), option_value(annotations.source));
    obj.insert("organism".to_string(), option_value(annotations.organism));
    obj.insert("division".to_string(), option_value(annotations.division));
    obj.insert("keywords".to_string(), string_array(annotations.keywords));
    obj.insert("comments".to_string(), string_array(annotations.comments));
    obj.insert(
        "references".to_string(),
        normalize_references(annotations.references)?,
    );
    Ok(Value::Object(obj))
}

/// Normalize one parsed record into a plain JSON tree, consuming it.
///
/// This is the "lite" strategy: the record's storage is moved into the
/// output rather than copied. Ownership makes reuse of the source record
/// after the call impossible, so the speed comes without a safety caveat.
pub fn normalize_record_owned(record: SeqRecord) -> Result<Value> {
    let mut obj = Dict::new();
    obj.insert("id".to_string(), Value::String(record.id));
    obj.insert("name".to_string(), Value::String(record.name));
    obj.insert(
        "description".to_string(),
        Value::String(record.description),
    );
    obj.insert("dbxrefs".to_string(), string_array(record.dbxrefs));
    obj.insert("seq".to_string(), normalize_seq(record.seq)?);

    let mut letter_annotations = Dict::new();
    for (key, scores) in record.letter_annotations {
        let scores = scores.into_iter().map(Value::from).collect();
        letter_annotations.insert(key, Value::Array(scores));
    }
    obj.insert(
        "letter_annotations".to_string(),
        Value::Object(letter_annotations),
    );

    obj.insert(
        "features".to_string(),
        normalize_feature_list(record.features)?,
    );
    obj.insert(
        "annotations".to_string(),
        normalize_annotations(record.annotations)?,
    );
    Ok(Value::Object(obj))
}

/// Normalize one parsed record into a plain JSON tree, leaving the source
/// record untouched.
///
/// This is the full-copy strategy: it clones the record and delegates to
/// [`normalize_record_owned`], so the two variants cannot drift apart.
pub fn normalize_record(record: &SeqRecord) -> Result<Value> {
    normalize_record_owned(record.clone())
}

/// Reduce a normalized record to a flat shape: `seq` replaced by its plain
/// letter string, and each key in `drop_keys` removed. Each format's flat
/// variant passes its own key list; FASTA drops per-letter annotations,
/// FASTQ keeps them so decoded quality survives. Every named key must be
/// present.
pub fn flatten_record(mut record: Value, drop_keys: &[&str]) -> Result<Value> {
    let obj = record.as_object_mut().ok_or_else(|| {
        BiomapError::InvalidInput("flatten_record: input is not an object".to_string())
    })?;
    let letters = obj
        .get("seq")
        .and_then(|seq| seq.get("letters"))
        .and_then(Value::as_str)
        .ok_or(BiomapError::MissingField {
            field: "letters",
            node: "seq",
        })?
        .to_string();
    obj.insert("seq".to_string(), Value::String(letters));
    remove_keys(obj, drop_keys)?;
    Ok(record)
}
