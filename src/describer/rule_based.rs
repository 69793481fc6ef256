// file: src/describer/rule_based.rs
// description: local rule-based table and equation descriptions
// reference: internal fallback rules

use crate::describer::Describer;
use crate::error::Result;
use futures::future::BoxFuture;

const SAMPLE_CELLS: usize = 3;
const ARITHMETIC_OPS: [char; 5] = ['+', '-', '*', '/', '^'];

pub struct RuleBasedDescriber;

impl RuleBasedDescriber {
    pub fn new() -> Self {
        Self
    }

    /// Row/column counts, header text, and a small data sample. Empty tables
    /// yield an empty description.
    pub fn table_summary(rows: &[Vec<String>]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let row_count = rows.len();
        let col_count = rows[0].len();

        let mut description = format!("Table with {} rows and {} columns. ", row_count, col_count);

        let header_text = rows[0]
            .iter()
            .filter(|cell| !cell.trim().is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if !header_text.is_empty() {
            description.push_str(&format!("Columns include: {}. ", header_text));
        }

        if let Some(sample_row) = rows.get(1) {
            let sample_text = sample_row
                .iter()
                .take(SAMPLE_CELLS)
                .filter(|cell| !cell.trim().is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if !sample_text.is_empty() {
                description.push_str(&format!("Sample data: {}.", sample_text));
            }
        }

        description.trim_end().to_string()
    }

    /// Classify the raw text and echo it: equation (has `=`), expression
    /// (has an arithmetic operator), or generic formula.
    pub fn equation_summary(equation: &str) -> String {
        if equation.contains('=') {
            format!("Mathematical equation: {}", equation)
        } else if equation.contains(ARITHMETIC_OPS) {
            format!("Mathematical expression: {}", equation)
        } else {
            format!("Formula: {}", equation)
        }
    }
}

impl Default for RuleBasedDescriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Describer for RuleBasedDescriber {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn describe_table<'a>(&'a self, rows: &'a [Vec<String>]) -> BoxFuture<'a, Result<String>> {
        Box::pin(std::future::ready(Ok(Self::table_summary(rows))))
    }

    fn describe_equation<'a>(&'a self, equation: &'a str) -> BoxFuture<'a, Result<String>> {
        Box::pin(std::future::ready(Ok(Self::equation_summary(equation))))
    }
}
