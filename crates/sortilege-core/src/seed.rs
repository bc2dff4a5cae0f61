//! Seed derivation from the querent's question.
//!
//! The seed is the single root of all entropy in a reading: SHA-256 over
//! the question, optionally joined with a timestamp by a `|` separator.
//! Identical inputs always derive the identical seed.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::error::{CastError, CastResult};

/// A 32-byte seed derived from the query material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Derive a seed from a query and an optional timestamp.
    ///
    /// With a timestamp the seed material is `{query}|{timestamp}`; without
    /// one it is the query alone, which is how the interactive deck ties a
    /// session to the question rather than the moment.
    pub fn derive(query: &str, timestamp: Option<&str>) -> CastResult<Self> {
        if query.trim().is_empty() {
            return Err(CastError::EmptyQuery);
        }
        let mut hasher = Sha256::new();
        match timestamp {
            Some(ts) => hasher.update(format!("{query}|{ts}").as_bytes()),
            None => hasher.update(query.as_bytes()),
        }
        Ok(Self(hasher.finalize().into()))
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering of the seed.
    pub fn to_hex(self) -> String {
        hex_string(&self.0)
    }
}

/// Render bytes as lowercase hex.
pub(crate) fn hex_string(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Resolve an optional caller-supplied timestamp.
///
/// An explicit timestamp must parse as RFC 3339 and is passed through
/// verbatim; otherwise the current UTC time is rendered at second
/// precision with a numeric offset.
pub fn resolve_timestamp(explicit: Option<&str>) -> CastResult<String> {
    match explicit {
        Some(ts) => {
            DateTime::parse_from_rfc3339(ts)
                .map_err(|_| CastError::InvalidTimestamp(ts.to_string()))?;
            Ok(ts.to_string())
        }
        None => Ok(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false)),
    }
}
