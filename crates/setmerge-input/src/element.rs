//! The concrete element type for sets read from documents.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;
use setmerge_core::UniqueContainer;

/// A value that can be stored in a set.
///
/// Floats and maps have no variant, as neither has an equality that
/// makes uniqueness meaningful. Ordering follows variant order
/// (`Null < Bool < Int < Str < Tuple`), then the inner value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Element {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Tuple(Vec<Element>),
}

/// Unordered set of elements.
pub type ElementSet = HashSet<Element>;

/// Ordered set of elements.
pub type OrderedElementSet = BTreeSet<Element>;

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Null => write!(f, "null"),
            Element::Bool(b) => write!(f, "{b}"),
            Element::Int(i) => write!(f, "{i}"),
            Element::Str(s) => write!(f, "{s}"),
            Element::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Str(value.to_string())
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

/// The elements of `set` in ascending order.
pub fn sorted<C>(set: &C) -> Vec<Element>
where
    C: UniqueContainer<Item = Element>,
{
    let mut items: Vec<Element> = set.items().cloned().collect();
    items.sort();
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_order() {
        let mut items = vec![
            Element::Tuple(vec![]),
            Element::from("a"),
            Element::from(3),
            Element::from(true),
            Element::Null,
        ];
        items.sort();
        assert_eq!(
            items,
            vec![
                Element::Null,
                Element::Bool(true),
                Element::Int(3),
                Element::Str("a".into()),
                Element::Tuple(vec![]),
            ]
        );
    }

    #[test]
    fn display() {
        let t = Element::Tuple(vec![Element::from("node"), Element::Null, Element::from(7)]);
        assert_eq!(t.to_string(), "(node, null, 7)");
    }

    #[test]
    fn serializes_untagged() {
        let t = Element::Tuple(vec![Element::from("x"), Element::Null, Element::from(false)]);
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"["x",null,false]"#);
    }

    #[test]
    fn sorted_is_deterministic() {
        let set: ElementSet = [Element::from(2), Element::from(-1), Element::from("z")]
            .into_iter()
            .collect();
        assert_eq!(
            sorted(&set),
            vec![Element::Int(-1), Element::Int(2), Element::Str("z".into())]
        );
    }
}
