//! Structural check of an imported settings object.
//!
//! Every key of the reference store must be present in the candidate with a
//! value of the same kind. Objects recurse; primitives are compared by kind
//! only, so any string passes where a string is expected.
use serde_json::{Map, Value};
use tracing::error;

/// Coarse runtime kind of a JSON value. Arrays and null count as objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
}

fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::String(_) => ValueKind::String,
        Value::Number(_) => ValueKind::Number,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Object(_) | Value::Array(_) | Value::Null => ValueKind::Object,
    }
}

/// Does `candidate` have the shape of `reference`?
///
/// Logs the first failing key and returns false.
pub fn is_valid_store(candidate: &Value, reference: &Value) -> bool {
    match reference {
        Value::Object(expected) => validate_object(candidate, expected, &mut Vec::new()),
        other => kind_of(candidate) == kind_of(other),
    }
}

fn validate_object<'a>(candidate: &Value, expected: &'a Map<String, Value>, path: &mut Vec<&'a str>) -> bool {
    for (key, reference_value) in expected {
        path.push(key);

        let Some(candidate_value) = candidate.as_object().and_then(|map| map.get(key)) else {
            error!("Imported store is missing key {}", path.join("."));
            return false;
        };

        if kind_of(candidate_value) != kind_of(reference_value) {
            error!(
                "Imported store has wrong value for key {}: {}",
                path.join("."),
                candidate_value
            );
            return false;
        }

        if let Value::Object(nested) = reference_value {
            if !validate_object(candidate_value, nested, path) {
                return false;
            }
        }

        path.pop();
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::store::SettingsStore;
    use serde_json::json;

    fn reference() -> Value {
        serde_json::to_value(SettingsStore::defaults(10, true)).unwrap()
    }

    /// Every path to a leaf of `value`
    fn leaf_paths(value: &Value, prefix: Vec<String>, out: &mut Vec<Vec<String>>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, nested) in map {
                    let mut path = prefix.clone();
                    path.push(key.clone());
                    leaf_paths(nested, path, out);
                }
            }
            _ => out.push(prefix),
        }
    }

    fn remove_path(value: &mut Value, path: &[String]) {
        let (last, parents) = path.split_last().unwrap();
        let mut cursor = value;
        for key in parents {
            cursor = cursor.get_mut(key).unwrap();
        }
        cursor.as_object_mut().unwrap().remove(last);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(is_valid_store(&reference(), &reference()));
    }

    #[test]
    fn test_structurally_equal_store_is_valid() {
        let mut store = SettingsStore::defaults(3, false);
        store.away_player = "Someone".to_string();
        store.league = crate::types::League::AA;
        let candidate = serde_json::to_value(store).unwrap();
        assert!(is_valid_store(&candidate, &reference()));
    }

    #[test]
    fn test_missing_any_leaf_is_invalid() {
        let mut leaves = Vec::new();
        leaf_paths(&reference(), Vec::new(), &mut leaves);
        assert!(leaves.len() > 30);

        for leaf in leaves {
            let mut candidate = reference();
            remove_path(&mut candidate, &leaf);
            assert!(
                !is_valid_store(&candidate, &reference()),
                "missing {:?} should be invalid",
                leaf
            );
        }
    }

    #[test]
    fn test_missing_playoffs_is_invalid() {
        let mut candidate = reference();
        candidate.as_object_mut().unwrap().remove("playoffs");
        assert!(!is_valid_store(&candidate, &reference()));
    }

    #[test]
    fn test_wrong_kind_is_invalid() {
        let mut candidate = reference();
        candidate["season"] = json!("12");
        assert!(!is_valid_store(&candidate, &reference()));

        let mut candidate = reference();
        candidate["playoffs"]["AA"] = json!(0);
        assert!(!is_valid_store(&candidate, &reference()));

        let mut candidate = reference();
        candidate["awayStatCategories"] = json!("ba");
        assert!(!is_valid_store(&candidate, &reference()));
    }

    #[test]
    fn test_only_kind_is_checked() {
        let mut candidate = reference();
        candidate["league"] = json!("MLB");
        candidate["season"] = json!(-4.5);
        assert!(is_valid_store(&candidate, &reference()));
    }

    #[test]
    fn test_extra_keys_are_allowed() {
        let mut candidate = reference();
        candidate["somethingNew"] = json!(true);
        assert!(is_valid_store(&candidate, &reference()));
    }

    #[test]
    fn test_non_object_candidate_is_invalid() {
        assert!(!is_valid_store(&json!([1, 2, 3]), &reference()));
        assert!(!is_valid_store(&json!(null), &reference()));
    }
}
