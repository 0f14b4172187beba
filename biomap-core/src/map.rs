//! Utilities over plain JSON mappings.
//!
//! Every operation here works on [`Dict`] — `serde_json`'s string-keyed
//! object map — so the results stay directly serializable. Key lookups are
//! strict: referencing an absent key is a [`BiomapError::KeyNotFound`]
//! error, never a silent no-op.

use serde_json::Value;

use crate::error::{BiomapError, Result};

/// A plain string-keyed mapping, the universal output shape of this crate.
pub type Dict = serde_json::Map<String, Value>;

/// Move the value at each `old` key to its `new` key.
///
/// Every `old` key must be present. The rename pairs are expected to be
/// disjoint; overlapping old/new names between pairs are the caller's
/// responsibility to avoid.
pub fn rename_keys(dict: &mut Dict, key_map: &[(&str, &str)]) -> Result<()> {
    for &(old, new) in key_map {
        let value = dict
            .remove(old)
            .ok_or_else(|| BiomapError::KeyNotFound(old.to_string()))?;
        dict.insert(new.to_string(), value);
    }
    Ok(())
}

/// Build a lookup mapping from a list of record objects.
///
/// Each element must be an object carrying a string value at `primary_key`.
/// Duplicate key values follow a last-write-wins policy: the later record
/// silently replaces the earlier one.
pub fn index_by_key(records: Vec<Value>, primary_key: &str) -> Result<Dict> {
    let mut index = Dict::new();
    for record in records {
        let obj = record.as_object().ok_or_else(|| {
            BiomapError::InvalidInput("index_by_key: element is not an object".to_string())
        })?;
        let key = obj
            .get(primary_key)
            .ok_or_else(|| BiomapError::KeyNotFound(primary_key.to_string()))?;
        let key = key
            .as_str()
            .ok_or_else(|| {
                BiomapError::InvalidInput(format!(
                    "index_by_key: value at `{primary_key}` is not a string"
                ))
            })?
            .to_string();
        index.insert(key, record);
    }
    Ok(index)
}

/// [`index_by_key`] with the conventional `"id"` primary key.
pub fn index_by_id(records: Vec<Value>) -> Result<Dict> {
    index_by_key(records, "id")
}

/// Remove each named key from the mapping. Any absent key is an error.
pub fn remove_keys(dict: &mut Dict, keys: &[&str]) -> Result<()> {
    for &key in keys {
        dict.remove(key)
            .ok_or_else(|| BiomapError::KeyNotFound(key.to_string()))?;
    }
    Ok(())
}

/// Remove a single key from the mapping. An absent key is an error.
pub fn remove_key(dict: &mut Dict, key: &str) -> Result<()> {
    remove_keys(dict, &[key])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(value: Value) -> Dict {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn rename_moves_values() {
        let mut d = dict(json!({"_seq": "A", "_name": "B"}));
        rename_keys(&mut d, &[("_seq", "seq"), ("_name", "name")]).unwrap();
        assert_eq!(d.get("seq"), Some(&json!("A")));
        assert_eq!(d.get("name"), Some(&json!("B")));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn rename_missing_key_fails() {
        let mut d = dict(json!({"a": 1}));
        let err = rename_keys(&mut d, &[("b", "c")]).unwrap_err();
        assert!(matches!(err, BiomapError::KeyNotFound(k) if k == "b"));
    }

    #[test]
    fn index_by_id_builds_lookup() {
        let records = vec![json!({"id": "x", "v": 1}), json!({"id": "y", "v": 2})];
        let index = index_by_id(records).unwrap();
        assert_eq!(index.get("x"), Some(&json!({"id": "x", "v": 1})));
        assert_eq!(index.get("y"), Some(&json!({"id": "y", "v": 2})));
    }

    #[test]
    fn index_duplicate_key_last_write_wins() {
        let records = vec![json!({"id": "x", "v": 1}), json!({"id": "x", "v": 2})];
        let index = index_by_id(records).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("x"), Some(&json!({"id": "x", "v": 2})));
    }

    #[test]
    fn index_missing_primary_key_fails() {
        let records = vec![json!({"name": "x"})];
        let err = index_by_key(records, "id").unwrap_err();
        assert!(matches!(err, BiomapError::KeyNotFound(k) if k == "id"));
    }

    #[test]
    fn index_non_object_element_fails() {
        let err = index_by_id(vec![json!(42)]).unwrap_err();
        assert!(matches!(err, BiomapError::InvalidInput(_)));
    }

    #[test]
    fn remove_named_keys() {
        let mut d = dict(json!({"a": 1, "b": 2, "c": 3}));
        remove_keys(&mut d, &["a", "c"]).unwrap();
        assert_eq!(Value::Object(d), json!({"b": 2}));
    }

    #[test]
    fn remove_missing_key_fails() {
        let mut d = dict(json!({"a": 1}));
        let err = remove_key(&mut d, "z").unwrap_err();
        assert!(matches!(err, BiomapError::KeyNotFound(k) if k == "z"));
    }
}
