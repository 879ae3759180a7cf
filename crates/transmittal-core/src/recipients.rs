//! Recipient table model
//!
//! Each recipient becomes one row: the office line on the left and three
//! blank signing lines (printed name, signature, date) filled in by hand on
//! paper. An empty list becomes a single placeholder row.

use transmittal_ast::{Recipient, NOT_AVAILABLE};

/// Text of the placeholder row used when there are no recipients
pub const NO_RECIPIENTS: &str = "No recipients added.";

/// Captions printed under the three blank signing lines, left to right
pub const SIGNING_CAPTIONS: [&str; 3] = ["Printed Name", "Signature", "Date"];

/// Suffix appended to truncated office text
const ELLIPSIS: &str = "...";

/// One recipient row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRow {
    /// Office line, already truncated
    pub office: String,
    /// Postal address, shown under the office when present
    pub address: Option<String>,
}

/// Rows of the recipient table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientTable {
    /// One row per recipient, in input order
    Rows(Vec<RecipientRow>),
    /// The centered "No recipients added." row
    Empty,
}

impl RecipientTable {
    /// Build the table, truncating office text to `max_chars` characters
    pub fn build(recipients: &[Recipient], max_chars: usize) -> Self {
        if recipients.is_empty() {
            return Self::Empty;
        }

        let rows = recipients
            .iter()
            .map(|recipient| RecipientRow {
                office: truncate(recipient.office().unwrap_or(NOT_AVAILABLE), max_chars),
                address: recipient
                    .address
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(|a| truncate(a, max_chars)),
            })
            .collect();
        Self::Rows(rows)
    }

    /// Number of rendered rows (the placeholder counts as one)
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Empty => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str(ELLIPSIS);
    cut
}
