use std::collections::HashMap;

/// Column holding the page address each record came from. Always first in the output.
pub const URL_COLUMN: &str = "URL";

/// The metadata fields pulled from a series page, in output column order.
pub const FIELDS: [&str; 8] = [
    "Title",
    "Organism",
    "Overall Design",
    "Status",
    "Submission date",
    "Last update date",
    "Series accession",
    "Summary",
];

/// Value written into every field when the fetch or parse of a page fails outright.
/// Distinct from `""`, which means the field was absent on an otherwise-good page.
pub const ERROR_MARKER: &str = "ERROR";

/// One output row: the source URL plus a value for every entry in [`FIELDS`].
///
/// Only [`MetadataRecord::from_pairs`] and [`MetadataRecord::error`] can build
/// one, so a record always carries exactly the eight fields, never a subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    url: String,
    values: HashMap<&'static str, String>,
}

impl MetadataRecord {
    /// Build a record from label/value pairs scraped off a page.
    ///
    /// Labels outside [`FIELDS`] are dropped, a repeated label keeps the later
    /// value, and fields with no pair at all come out as the empty string.
    pub fn from_pairs(url: &str, pairs: Vec<(String, String)>) -> Self {
        let mut values: HashMap<&'static str, String> = HashMap::with_capacity(FIELDS.len());
        for (label, value) in pairs {
            if let Some(field) = FIELDS.iter().find(|f| **f == label) {
                values.insert(*field, value);
            }
        }
        for field in FIELDS {
            values.entry(field).or_default();
        }
        Self {
            url: url.to_string(),
            values,
        }
    }

    /// Sentinel record for a page whose fetch or parse failed entirely.
    pub fn error(url: &str) -> Self {
        let values = FIELDS
            .iter()
            .map(|field| (*field, ERROR_MARKER.to_string()))
            .collect();
        Self {
            url: url.to_string(),
            values,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value for one of the [`FIELDS`] names.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_error(&self) -> bool {
        FIELDS.iter().all(|f| self.value(f) == ERROR_MARKER)
    }
}
