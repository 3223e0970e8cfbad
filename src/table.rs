use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::{debug, info};

use crate::record::{MetadataRecord, FIELDS, URL_COLUMN};

/// Write all records as a tab-separated file: a header row (URL first, then
/// the fields in declaration order) and one row per record in sequence order.
/// An existing file is overwritten; an empty run still produces the header.
pub fn write_table(path: &Path, records: &[MetadataRecord]) -> Result<()> {
    debug!("Writing {} records to {}", records.len(), path.display());

    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    let mut header = vec![URL_COLUMN];
    header.extend(FIELDS);
    wtr.write_record(&header)?;

    for record in records {
        wtr.write_record(
            std::iter::once(record.url()).chain(FIELDS.iter().map(|f| record.value(f))),
        )?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("geo_scraper_{}_{}", std::process::id(), name))
    }

    #[test]
    fn header_then_one_row_per_record_in_order() {
        let records = vec![
            MetadataRecord::from_pairs(
                "http://example/A",
                vec![
                    ("Title".into(), "Foo".into()),
                    ("Organism".into(), "Human".into()),
                ],
            ),
            MetadataRecord::error("http://example/B"),
        ];

        let path = temp_path("two_rows.tsv");
        write_table(&path, &records).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "URL\tTitle\tOrganism\tOverall Design\tStatus\tSubmission date\tLast update date\tSeries accession\tSummary"
        );
        assert_eq!(lines[1], "http://example/A\tFoo\tHuman\t\t\t\t\t\t");
        assert_eq!(
            lines[2],
            "http://example/B\tERROR\tERROR\tERROR\tERROR\tERROR\tERROR\tERROR\tERROR"
        );
    }

    #[test]
    fn empty_run_writes_header_only() {
        let path = temp_path("empty.tsv");
        write_table(&path, &[]).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("URL\tTitle"));
    }

    #[test]
    fn embedded_tab_is_quoted_not_split() {
        let records = vec![MetadataRecord::from_pairs(
            "http://example/A",
            vec![("Summary".into(), "left\tright".into())],
        )];

        let path = temp_path("quoted.tsv");
        write_table(&path, &records).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let row = out.lines().nth(1).unwrap();
        // 9 columns regardless of the tab inside the value
        assert_eq!(row.matches("\"left\tright\"").count(), 1);
    }

    #[test]
    fn overwrites_existing_file() {
        let path = temp_path("overwrite.tsv");
        std::fs::write(&path, "stale content\n").unwrap();
        write_table(&path, &[]).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!out.contains("stale"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = PathBuf::from("/nonexistent-dir/out.tsv");
        let err = write_table(&path, &[]).unwrap_err();
        assert!(err.to_string().contains("out.tsv"));
    }
}
