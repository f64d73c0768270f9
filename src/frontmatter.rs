//! Frontmatter micro-parser.
//!
//! Content documents open with a metadata block delimited by `---` marker
//! lines. The grammar is deliberately line-oriented and minimal — it is not
//! YAML and must not be parsed as such:
//!
//! - each line splits at its first colon into key and value
//! - a value wrapped in square brackets is an ordered list, split on commas,
//!   each element trimmed, one layer of surrounding quotes stripped, empties
//!   dropped
//! - an all-digits value parses as an integer
//! - any other value loses exactly one layer of surrounding quotes
//! - lines without a colon are skipped silently
//!
//! No nesting, no multi-line values, no escapes. [`render`] produces the
//! normal form of a parsed block; rendering and re-extracting is lossless
//! for values the grammar can express.

use std::collections::BTreeMap;
use std::fmt;

/// A parsed frontmatter value: the grammar's three shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Quoted normal form so digits and brackets inside strings
            // survive re-extraction.
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Parsed metadata block, keyed by field name.
pub type Frontmatter = BTreeMap<String, Value>;

/// Extract the frontmatter block from raw document text.
///
/// Returns an empty map when no block is present. Malformed lines inside the
/// block are skipped, not reported.
pub fn extract(content: &str) -> Frontmatter {
    let mut fields = BTreeMap::new();

    let block = match block_of(content) {
        Some(block) => block,
        None => return fields,
    };

    for line in block.lines() {
        let colon = match line.find(':') {
            Some(pos) => pos,
            None => continue,
        };
        let key = line[..colon].trim();
        let raw = line[colon + 1..].trim();
        fields.insert(key.to_string(), parse_value(raw));
    }

    fields
}

/// Everything after the frontmatter block, or the whole document when no
/// block is present.
pub fn body_of(content: &str) -> &str {
    match content.strip_prefix("---\n") {
        Some(rest) => match rest.find("\n---") {
            Some(end) => {
                let after = &rest[end + "\n---".len()..];
                after.strip_prefix('\n').unwrap_or(after)
            }
            None => content,
        },
        None => content,
    }
}

/// Render a parsed block back to its marker-delimited text form.
pub fn render(fields: &Frontmatter) -> String {
    let mut out = String::from("---\n");
    for (key, value) in fields {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out.push_str("---\n");
    out
}

// The block is the text between an opening `---` on the first line and the
// next line starting with `---`.
fn block_of(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

fn parse_value(raw: &str) -> Value {
    if let Some(inner) = raw.strip_prefix('[') {
        let inner = inner.strip_suffix(']').unwrap_or(inner);
        let items = inner
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .filter(|item| !item.is_empty())
            .collect();
        return Value::List(items);
    }

    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
    }

    Value::Str(strip_quotes(raw).to_string())
}

// One layer only; leading and trailing quotes strip independently, and a
// single or double quote on either side counts.
fn strip_quotes(s: &str) -> &str {
    let s = s
        .strip_prefix('"')
        .or_else(|| s.strip_prefix('\''))
        .unwrap_or(s);
    s.strip_suffix('"')
        .or_else(|| s.strip_suffix('\''))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_block_returns_empty() {
        assert!(extract("# Just a heading\n\nBody text.").is_empty());
        assert!(extract("").is_empty());
        // Block must open on the first line
        assert!(extract("\n---\ntitle: Late\n---\n").is_empty());
    }

    #[test]
    fn test_unterminated_block_returns_empty() {
        assert!(extract("---\ntitle: Dangling\n").is_empty());
    }

    #[test]
    fn test_basic_fields() {
        let doc = "---\ntitle: Why RAG?\norder: 1\n---\n\nBody.";
        let fm = extract(doc);
        assert_eq!(fm["title"], Value::Str("Why RAG?".into()));
        assert_eq!(fm["order"], Value::Int(1));
    }

    #[test]
    fn test_quoted_strings_lose_one_layer() {
        let doc = "---\ntitle: \"Why RAG?\"\ndescription: 'single quoted'\n---\n";
        let fm = extract(doc);
        assert_eq!(fm["title"], Value::Str("Why RAG?".into()));
        assert_eq!(fm["description"], Value::Str("single quoted".into()));

        // Exactly one layer
        let fm = extract("---\ntitle: \"\"nested\"\"\n---\n");
        assert_eq!(fm["title"], Value::Str("\"nested\"".into()));
    }

    #[test]
    fn test_quoted_digits_stay_strings() {
        let fm = extract("---\norder: \"3\"\n---\n");
        assert_eq!(fm["order"], Value::Str("3".into()));
    }

    #[test]
    fn test_list_values() {
        let doc = "---\nprerequisites: [01-foundation/why-rag, \"01-foundation/naive-rag\"]\n---\n";
        let fm = extract(doc);
        assert_eq!(
            fm["prerequisites"],
            Value::List(vec![
                "01-foundation/why-rag".into(),
                "01-foundation/naive-rag".into(),
            ])
        );
    }

    #[test]
    fn test_empty_list_elements_dropped() {
        let fm = extract("---\ntags: [a, , b, ]\n---\n");
        assert_eq!(fm["tags"], Value::List(vec!["a".into(), "b".into()]));

        let fm = extract("---\ntags: []\n---\n");
        assert_eq!(fm["tags"], Value::List(vec![]));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let doc = "---\ntitle: Ok\nthis line has no colon\norder: 2\n---\n";
        let fm = extract(doc);
        assert_eq!(fm.len(), 2);
        assert_eq!(fm["order"], Value::Int(2));
    }

    #[test]
    fn test_value_may_contain_colons() {
        // Split happens at the first colon only
        let fm = extract("---\ntitle: HyDE: Hypothetical Document Embeddings\n---\n");
        assert_eq!(
            fm["title"],
            Value::Str("HyDE: Hypothetical Document Embeddings".into())
        );
    }

    #[test]
    fn test_body_of() {
        let doc = "---\ntitle: T\n---\n# Heading\n\nBody.";
        assert_eq!(body_of(doc), "# Heading\n\nBody.");
        assert_eq!(body_of("no frontmatter here"), "no frontmatter here");
    }

    #[test]
    fn test_render_extract_round_trip() {
        let mut fields = Frontmatter::new();
        fields.insert("title".into(), Value::Str("HyDE: Hypothetical".into()));
        fields.insert("description".into(), Value::Str("A bounded summary".into()));
        fields.insert("order".into(), Value::Int(2));
        fields.insert(
            "prerequisites".into(),
            Value::List(vec!["01-foundation/why-rag".into()]),
        );
        fields.insert("tags".into(), Value::List(vec!["hyde".into(), "rag".into()]));

        let rendered = render(&fields);
        let reparsed = extract(&rendered);
        assert_eq!(reparsed, fields);
    }

    #[test]
    fn test_round_trip_digit_string_stays_string() {
        let mut fields = Frontmatter::new();
        fields.insert("version".into(), Value::Str("42".into()));
        let reparsed = extract(&render(&fields));
        assert_eq!(reparsed["version"], Value::Str("42".into()));
    }
}
