//! Parsing element sets from JSON and TOML documents.
//!
//! A JSON set document is a top-level array. A TOML set document is a table
//! with an `elements` array:
//!
//! ```toml
//! elements = ["timer_cb", ["node", "sub_cb"], 42]
//! ```
//!
//! Nested arrays become [`Element::Tuple`]s. Duplicate entries collapse.

use std::path::Path;

use serde::{Deserialize, Serialize};
use setmerge_core::UniqueContainer;
use tracing::debug;

use crate::element::Element;
use crate::error::{InputError, InputResult};

/// On-disk format of a set document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetFormat {
    Json,
    Toml,
}

impl SetFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> InputResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(SetFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(SetFormat::Toml),
            _ => Err(InputError::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// Parse a set document into a fresh container.
pub fn parse_set<C>(text: &str, format: SetFormat) -> InputResult<C>
where
    C: UniqueContainer<Item = Element>,
{
    let elements = match format {
        SetFormat::Json => json_elements(text)?,
        SetFormat::Toml => toml_elements(text)?,
    };
    let mut set = C::empty();
    for element in elements {
        set.insert(element);
    }
    Ok(set)
}

/// Read and parse a set document.
///
/// When `format` is `None` it is inferred from the file extension.
pub fn load_set<C>(path: impl AsRef<Path>, format: Option<SetFormat>) -> InputResult<C>
where
    C: UniqueContainer<Item = Element>,
{
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => SetFormat::from_path(path)?,
    };
    let text = std::fs::read_to_string(path)?;
    let set: C = parse_set(&text, format)?;
    debug!(path = %path.display(), ?format, len = set.len(), "loaded set");
    Ok(set)
}

fn json_elements(text: &str) -> InputResult<Vec<Element>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, v)| element_from_json(v, index))
            .collect(),
        other => Err(InputError::UnexpectedShape {
            expected: "a top-level JSON array",
            actual: json_kind(&other).to_string(),
        }),
    }
}

fn element_from_json(value: serde_json::Value, index: usize) -> InputResult<Element> {
    use serde_json::Value;

    match value {
        Value::Null => Ok(Element::Null),
        Value::Bool(b) => Ok(Element::Bool(b)),
        Value::Number(n) => n.as_i64().map(Element::Int).ok_or_else(|| {
            InputError::UnsupportedElement {
                index,
                reason: format!("{n} is not a 64-bit integer"),
            }
        }),
        Value::String(s) => Ok(Element::Str(s)),
        Value::Array(items) => items
            .into_iter()
            .map(|v| element_from_json(v, index))
            .collect::<InputResult<Vec<_>>>()
            .map(Element::Tuple),
        Value::Object(_) => Err(InputError::UnsupportedElement {
            index,
            reason: "objects cannot be set elements".into(),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn toml_elements(text: &str) -> InputResult<Vec<Element>> {
    let mut table: toml::Table = toml::from_str(text)?;
    match table.remove("elements") {
        Some(toml::Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, v)| element_from_toml(v, index))
            .collect(),
        Some(other) => Err(InputError::UnexpectedShape {
            expected: "`elements` to be an array",
            actual: other.type_str().to_string(),
        }),
        None => Err(InputError::UnexpectedShape {
            expected: "a top-level `elements` array",
            actual: "no `elements` key".to_string(),
        }),
    }
}

fn element_from_toml(value: toml::Value, index: usize) -> InputResult<Element> {
    use toml::Value;

    match value {
        Value::Boolean(b) => Ok(Element::Bool(b)),
        Value::Integer(i) => Ok(Element::Int(i)),
        Value::String(s) => Ok(Element::Str(s)),
        Value::Array(items) => items
            .into_iter()
            .map(|v| element_from_toml(v, index))
            .collect::<InputResult<Vec<_>>>()
            .map(Element::Tuple),
        other => Err(InputError::UnsupportedElement {
            index,
            reason: format!("{} cannot be a set element", other.type_str()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementSet, OrderedElementSet};
    use std::io::Write;

    #[test]
    fn json_array() {
        let set: ElementSet = parse_set(r#"[1, "a", null, true, 1]"#, SetFormat::Json).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.contains(&Element::Null));
        assert!(set.contains(&Element::from("a")));
    }

    #[test]
    fn json_nested_tuples() {
        let set: OrderedElementSet =
            parse_set(r#"[["node", "cb"], ["node", "cb"], [null, "cb"]]"#, SetFormat::Json)
                .unwrap();
        assert_eq!(set.len(), 2);
        let first = set.iter().next().unwrap();
        assert_eq!(first, &Element::Tuple(vec![Element::Null, Element::from("cb")]));
    }

    #[test]
    fn json_empty_array() {
        let set: ElementSet = parse_set("[]", SetFormat::Json).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn json_rejects_float() {
        let err = parse_set::<ElementSet>("[1, 2.5]", SetFormat::Json).unwrap_err();
        match err {
            InputError::UnsupportedElement { index, .. } => assert_eq!(index, 1),
            other => panic!("expected UnsupportedElement, got {other:?}"),
        }
    }

    #[test]
    fn json_rejects_object_element() {
        let err = parse_set::<ElementSet>(r#"[{"a": 1}]"#, SetFormat::Json).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedElement { index: 0, .. }));
    }

    #[test]
    fn json_rejects_non_array() {
        let err = parse_set::<ElementSet>(r#"{"elements": []}"#, SetFormat::Json).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedShape { .. }));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn json_syntax_error() {
        let err = parse_set::<ElementSet>("[1,", SetFormat::Json).unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn toml_elements_array() {
        let text = r#"elements = ["a", "b", ["n", 1], "a"]"#;
        let set: ElementSet = parse_set(text, SetFormat::Toml).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Element::Tuple(vec![Element::from("n"), Element::from(1)])));
    }

    #[test]
    fn toml_missing_elements() {
        let err = parse_set::<ElementSet>("name = \"x\"", SetFormat::Toml).unwrap_err();
        assert!(err.to_string().contains("no `elements` key"));
    }

    #[test]
    fn toml_rejects_float() {
        let err = parse_set::<ElementSet>("elements = [1.5]", SetFormat::Toml).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedElement { index: 0, .. }));
    }

    #[test]
    fn toml_rejects_scalar_elements() {
        let err = parse_set::<ElementSet>("elements = 3", SetFormat::Toml).unwrap_err();
        assert!(matches!(err, InputError::UnexpectedShape { .. }));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SetFormat::from_path(Path::new("a.json")).unwrap(), SetFormat::Json);
        assert_eq!(SetFormat::from_path(Path::new("b.TOML")).unwrap(), SetFormat::Toml);
        assert!(matches!(
            SetFormat::from_path(Path::new("c.yaml")),
            Err(InputError::UnknownFormat(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("left.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"["x", "y", "x"]"#).unwrap();

        let set: ElementSet = load_set(&path, None).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn load_forced_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.txt");
        std::fs::write(&path, "elements = [1, 2]").unwrap();

        let set: OrderedElementSet = load_set(&path, Some(SetFormat::Toml)).unwrap();
        assert_eq!(set.len(), 2);
        assert!(load_set::<ElementSet>(&path, None).is_err());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_set::<ElementSet>(dir.path().join("nope.json"), None).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
