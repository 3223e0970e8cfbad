use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static FORM_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.formTable").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// What one table row turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Exactly two cells: a label (trimmed, one trailing colon stripped) and a value (trimmed).
    Pair { label: String, value: String },
    /// Any other cell count. Dropped without further inspection.
    Ignored,
}

pub fn classify_row(row: ElementRef) -> Row {
    let cells: Vec<ElementRef> = row.select(&TD).collect();
    if cells.len() != 2 {
        return Row::Ignored;
    }

    let raw_label = cell_text(&cells[0]);
    let label = raw_label
        .strip_suffix(':')
        .unwrap_or(&raw_label)
        .to_string();
    let value = cell_text(&cells[1]);

    Row::Pair { label, value }
}

/// Label/value pairs from the first formTable in the document, in row order.
///
/// A document without a formTable yields no pairs rather than an error, so a
/// well-formed page that simply lacks the table degrades to an empty record.
pub fn label_value_pairs(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let Some(table) = document.select(&FORM_TABLE).next() else {
        return Vec::new();
    };

    table
        .select(&TR)
        .filter_map(|tr| match classify_row(tr) {
            Row::Pair { label, value } => Some((label, value)),
            Row::Ignored => None,
        })
        .collect()
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
