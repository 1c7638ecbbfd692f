use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::CryptifyError;

/// Nested attribute address such as `secured.data`, stored as its segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Split a dot-delimited string into segments. Every segment is kept, including empty ones.
    pub fn parse(dotted: &str) -> Self {
        Self(dotted.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Walk `root` segment by segment. A missing or non-object intermediate yields `None`.
    pub fn get<'a>(&self, root: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.0.split_first()?;
        rest.iter()
            .try_fold(root.get(first)?, |value, segment| value.get(segment.as_str()))
    }

    /// Write `value` at the last segment. Every intermediate segment must already be an object.
    pub fn set(&self, root: &mut Map<String, Value>, value: Value) -> Result<(), CryptifyError> {
        let Some((last, parents)) = self.0.split_last() else {
            return Err(self.write_error());
        };

        let mut target = root;
        for segment in parents {
            target = target
                .get_mut(segment)
                .and_then(Value::as_object_mut)
                .ok_or_else(|| self.write_error())?;
        }

        target.insert(last.clone(), value);
        Ok(())
    }

    fn write_error(&self) -> CryptifyError {
        CryptifyError::PathWrite {
            path: self.to_string(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[rstest]
    #[case("password", &["password"])]
    #[case("secured.data", &["secured", "data"])]
    #[case("a.b.c", &["a", "b", "c"])]
    fn test_parse_splits_on_dots(#[case] dotted: &str, #[case] expected: &[&str]) {
        let path = FieldPath::parse(dotted);
        assert_eq!(path.segments(), expected);
        assert_eq!(path.to_string(), dotted);
    }

    #[test]
    fn test_get_nested_value() {
        let root = object(json!({ "secured": { "data": "test" }, "securedPath": "test2" }));

        assert_eq!(FieldPath::parse("secured.data").get(&root), Some(&json!("test")));
        assert_eq!(FieldPath::parse("securedPath").get(&root), Some(&json!("test2")));
    }

    #[rstest]
    #[case("missing")]
    #[case("missing.data")]
    #[case("secured.missing")]
    #[case("securedPath.data")]
    fn test_get_tolerates_absent_intermediates(#[case] dotted: &str) {
        let root = object(json!({ "secured": {}, "securedPath": "plain" }));
        assert_eq!(FieldPath::parse(dotted).get(&root), None);
    }

    #[test]
    fn test_set_replaces_nested_value() {
        let mut root = object(json!({ "secured": { "data": "test", "other": 1 } }));

        FieldPath::parse("secured.data")
            .set(&mut root, json!("hashed"))
            .unwrap();

        assert_eq!(Value::Object(root), json!({ "secured": { "data": "hashed", "other": 1 } }));
    }

    #[test]
    fn test_set_creates_leaf_on_existing_parent() {
        let mut root = object(json!({ "secured": {} }));

        FieldPath::parse("secured.data").set(&mut root, json!("x")).unwrap();

        assert_eq!(FieldPath::parse("secured.data").get(&root), Some(&json!("x")));
    }

    #[rstest]
    #[case("missing.data")]
    #[case("plain.data")]
    fn test_set_requires_intermediate_objects(#[case] dotted: &str) {
        let mut root = object(json!({ "plain": "value" }));

        let err = FieldPath::parse(dotted).set(&mut root, json!("x")).unwrap_err();

        assert!(matches!(err, CryptifyError::PathWrite { path } if path == dotted));
        assert_eq!(Value::Object(root), json!({ "plain": "value" }));
    }
}
