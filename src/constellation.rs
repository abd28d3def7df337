//! Constellation records and their star-index connections.
//!
//! Connections arrive as `"<i>-<j>"` strings. They are turned into
//! [`Connection`] values once, when a figure is built, and nothing downstream
//! ever looks at the strings again.

use tracing::warn;

use crate::error::ChartError;
use crate::Star;

/// One constellation figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    /// Unique name; also the navigation target of cross-references.
    pub name: String,
    /// Ordered stars. Index `k` in a connection refers to `stars[k]`.
    pub stars: Vec<Star>,
    /// Raw `"i-j"` connection strings as delivered.
    pub connections: Vec<String>,
    /// Descriptive text, possibly containing `<Name>` markers.
    pub general_info: Option<String>,
}

/// A validated edge between two distinct stars of a constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
}

impl Connection {
    /// Separator between the two indices.
    pub const SEPARATOR: char = '-';

    /// Parse `"i-j"` and check both indices against `star_count`.
    ///
    /// Self-loops (`i == j`) are rejected; they would render as zero-length segments.
    pub fn parse(raw: &str, star_count: usize) -> Result<Self, ChartError> {
        let malformed = |reason: String| ChartError::MalformedConnection {
            raw: raw.to_string(),
            reason,
        };

        let (lhs, rhs) = raw
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| malformed(format!("missing '{}' separator", Self::SEPARATOR)))?;

        let parse_index = |s: &str| -> Result<usize, ChartError> {
            let digits = s.trim();
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(format!("index \"{}\" is not a non-negative integer", s)));
            }
            digits
                .parse::<usize>()
                .map_err(|e| malformed(format!("index \"{}\" is not a non-negative integer: {}", s, e)))
        };
        let from = parse_index(lhs)?;
        let to = parse_index(rhs)?;

        for idx in [from, to] {
            if idx >= star_count {
                return Err(malformed(format!(
                    "index {} out of range for {} stars",
                    idx, star_count
                )));
            }
        }
        if from == to {
            return Err(malformed(format!("degenerate pair ({} == {})", from, to)));
        }

        Ok(Self { from, to })
    }
}

impl Constellation {
    /// Validate every connection string against the star list.
    ///
    /// Returns the usable pairs in input order, and one `MalformedConnection`
    /// per skipped string.
    pub fn resolve_connections(&self) -> (Vec<Connection>, Vec<ChartError>) {
        let mut valid = Vec::with_capacity(self.connections.len());
        let mut skipped = Vec::new();
        for raw in &self.connections {
            match Connection::parse(raw, self.stars.len()) {
                Ok(c) => valid.push(c),
                Err(e) => {
                    warn!("{}: skipping connection: {}", self.name, e);
                    skipped.push(e);
                }
            }
        }
        (valid, skipped)
    }

    /// Look up a star by name.
    pub fn star(&self, name: &str) -> Option<&Star> {
        self.stars.iter().find(|s| s.name == name)
    }

    /// Whether the record carries any descriptive text.
    pub fn has_general_info(&self) -> bool {
        self.general_info.as_deref().is_some_and(|s| !s.is_empty())
    }
}
