//! Front-matter parsing
//!
//! A document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! categories: [x, y]
//! ---
//! Body text
//! ```
//!
//! Anything that does not open with that exact shape is all body.

use serde::de::Error as _;
use serde_yaml::{Mapping, Value};

/// Opening fence, must be the very first line
const OPENING: &str = "---\n";

/// Closing fence, a `---` line terminated by a newline
const CLOSING: &str = "\n---\n";

/// Front-matter data from a post
///
/// Values keep whatever YAML type they were written with. The accessors
/// return `None` on a type mismatch instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A document without a fenced block yields `None` and the whole input as
    /// body. A fenced block that is not a YAML mapping is an error. An empty
    /// block yields `None` with the block stripped from the body.
    pub fn parse(content: &str) -> Result<(Option<Self>, &str), serde_yaml::Error> {
        let Some((block, body)) = split_block(content) else {
            return Ok((None, content));
        };

        let front_matter = match serde_yaml::from_str::<Value>(block)? {
            Value::Null => None,
            Value::Mapping(fields) => Some(Self { fields }),
            other => {
                return Err(serde_yaml::Error::custom(format!(
                    "front-matter must be a mapping, found {}",
                    describe(&other)
                )))
            }
        };

        Ok((front_matter, body))
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value for a key, `None` when absent or not a string
    pub fn as_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// String elements of a sequence value, in order
    ///
    /// Non-string elements are skipped. `None` when the key is absent or not a
    /// sequence.
    pub fn as_string_sequence(&self, key: &str) -> Option<Vec<&str>> {
        let seq = self.get(key)?.as_sequence()?;
        Some(seq.iter().filter_map(Value::as_str).collect())
    }
}

/// Split `---\n<block>\n---\n<body>` into its block and body
fn split_block(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(OPENING)?;
    let end = rest.find(CLOSING)?;
    Some((&rest[..end], &rest[end + CLOSING.len()..]))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
