pub mod form_table;

use crate::record::MetadataRecord;

/// Two-pass extraction: HTML → formTable label/value pairs → completed record.
pub fn extract_record(url: &str, html: &str) -> MetadataRecord {
    let pairs = form_table::label_value_pairs(html);
    MetadataRecord::from_pairs(url, pairs)
}
