use crate::{String, ToString, Vec};

/// An annotation instance attached to a declaration or member element.
///
/// Values are kept as flat key/value string pairs; this layer never
/// interprets them beyond equality on the annotation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub values: Vec<(String, String)>,
}

impl Annotation {
    pub fn new(name: &str) -> Annotation {
        Annotation {
            name: name.to_string(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Annotation {
        self.values.push((key.to_string(), value.to_string()));
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Produces a single documentation string from the documentation-annotation
/// instances attached to an element.
///
/// The formatting rules belong to the extractor; the handle layer only
/// forwards the call.
pub trait DocumentationExtractor {
    fn documentation(&self, docs: &[&Annotation]) -> Option<String>;
}

/// Default extractor: joins the non-empty `value` entries of each doc
/// annotation with a newline, in declaration order.
#[derive(Debug, Clone)]
pub struct DocJoiner {
    value_key: String,
}

impl DocJoiner {
    pub fn new(value_key: &str) -> DocJoiner {
        DocJoiner {
            value_key: value_key.to_string(),
        }
    }
}

impl Default for DocJoiner {
    fn default() -> DocJoiner {
        DocJoiner::new("value")
    }
}

impl DocumentationExtractor for DocJoiner {
    fn documentation(&self, docs: &[&Annotation]) -> Option<String> {
        let mut out = String::new();
        for doc in docs {
            if let Some(value) = doc.value(&self.value_key) {
                if !value.is_empty() {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(value);
                }
            }
        }
        if out.is_empty() { None } else { Some(out) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_joiner_joins_values() {
        let a = Annotation::new("Doc").with_value("value", "first line");
        let b = Annotation::new("Doc").with_value("value", "second line");
        let joiner = DocJoiner::default();

        let doc = joiner.documentation(&[&a, &b]);
        assert_eq!(doc.as_deref(), Some("first line\nsecond line"));
    }

    #[test]
    fn test_doc_joiner_skips_empty_values() {
        let a = Annotation::new("Doc").with_value("value", "");
        let joiner = DocJoiner::default();

        assert_eq!(joiner.documentation(&[&a]), None);
        assert_eq!(joiner.documentation(&[]), None);
    }
}
