//! Metadata block splitting and parsing

use serde::{Deserialize, Deserializer};

use crate::error::{DelimiterPosition, Error, Result};

/// Marker that opens and closes the metadata block
pub const DELIMITER: &[u8] = b"---";

/// A document split into its metadata block and markdown body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Bytes strictly between the first two delimiters
    pub metadata: &'a [u8],
    /// Bytes after the second delimiter
    pub body: &'a [u8],
}

/// Split a document at the first two occurrences of `---`.
///
/// The search is a plain substring scan: a delimiter in the middle of a line
/// counts, and the first match after the opening delimiter closes the block.
/// Anything before the opening delimiter is dropped.
pub fn split_document(buf: &[u8]) -> Result<Split<'_>> {
    let start = find(buf, DELIMITER).ok_or(Error::MissingDelimiter {
        position: DelimiterPosition::Opening,
    })?;
    let rest = &buf[start + DELIMITER.len()..];

    let end = find(rest, DELIMITER).ok_or(Error::MissingDelimiter {
        position: DelimiterPosition::Closing,
    })?;

    tracing::debug!(
        "Metadata block spans bytes {}..{}",
        start + DELIMITER.len(),
        start + DELIMITER.len() + end
    );

    Ok(Split {
        metadata: &rest[..end],
        body: &rest[end + DELIMITER.len()..],
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Recognized metadata fields; unknown keys are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub author: String,
}

/// Treat an explicit YAML null (`~`, `null`) the same as an absent key
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Metadata {
    /// Decode a YAML metadata block.
    ///
    /// Absent `title` or `author` are left empty. An empty block is treated
    /// as an empty mapping.
    pub fn parse(block: &[u8]) -> Result<Self> {
        if block.iter().all(u8::is_ascii_whitespace) {
            tracing::warn!("Metadata block is empty");
            return Ok(Metadata::default());
        }

        let metadata: Metadata = serde_yaml::from_slice(block)?;

        if metadata.title.is_empty() {
            tracing::warn!("Metadata has no title");
        }
        if metadata.author.is_empty() {
            tracing::warn!("Metadata has no author");
        }

        Ok(metadata)
    }
}
