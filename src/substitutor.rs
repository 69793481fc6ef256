// file: src/substitutor.rs
// description: replaces equation spans and table references with prose descriptions
// reference: internal content substitution rules

use crate::describer::{Describer, RuleBasedDescriber};
use crate::error::Result;
use crate::extractor::patterns::{EQUATION, table_reference};
use crate::models::RawTable;
use crate::parser::TextNormalizer;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct SubstitutionOutcome {
    pub text: String,
    pub equations_replaced: usize,
    pub tables_described: usize,
    pub tables_dropped: usize,
}

pub struct ContentSubstitutor {
    describer: Arc<dyn Describer>,
    normalizer: TextNormalizer,
}

impl ContentSubstitutor {
    pub fn new(describer: Arc<dyn Describer>) -> Self {
        Self {
            describer,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Strip URL/DOI/email metadata, then replace equation spans and table
    /// references with descriptions. Line structure is preserved so the
    /// segmenter can still find headings. Describer failures degrade to
    /// rule-based prose per item; this method never fails on description.
    pub async fn substitute(&self, text: &str, tables: &[RawTable]) -> Result<SubstitutionOutcome> {
        let mut outcome = SubstitutionOutcome {
            text: self.normalizer.strip_metadata(text),
            ..Default::default()
        };

        self.replace_equations(&mut outcome).await;
        self.insert_table_descriptions(&mut outcome, tables).await;

        Ok(outcome)
    }

    /// Every textual occurrence of a matched equation substring is replaced,
    /// not just the matched span: short inline equations recur, and a
    /// positional replace would leave later copies raw. Distinct equations
    /// sharing a substring can therefore interfere; accepted limitation.
    async fn replace_equations(&self, outcome: &mut SubstitutionOutcome) {
        let spans: Vec<String> = EQUATION
            .find_iter(&outcome.text)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut seen = HashSet::new();
        for span in spans {
            if !seen.insert(span.clone()) {
                // Already replaced everywhere by the whole-string pass
                continue;
            }

            let description = match self.describer.describe_equation(&span).await {
                Ok(description) => description,
                Err(e) => {
                    warn!("Equation description failed ({}), using rule-based fallback", e);
                    RuleBasedDescriber::equation_summary(&span)
                }
            };

            outcome.text = outcome
                .text
                .replace(&span, &format!("[Equation: {}]", description));
            outcome.equations_replaced += 1;
        }
    }

    /// Tables are keyed by 1-based extraction order. A description is inserted
    /// immediately after the first textual "Table N" reference; a table whose
    /// number is never mentioned in the text is dropped.
    async fn insert_table_descriptions(
        &self,
        outcome: &mut SubstitutionOutcome,
        tables: &[RawTable],
    ) {
        for (i, table) in tables.iter().enumerate() {
            let index = i + 1;

            let description = match self.describer.describe_table(&table.rows).await {
                Ok(description) => description,
                Err(e) => {
                    warn!("Table description failed ({}), using rule-based fallback", e);
                    RuleBasedDescriber::table_summary(&table.rows)
                }
            };

            let insert_at = table_reference(index).find(&outcome.text).map(|m| m.end());
            match insert_at {
                Some(end) => {
                    let block = format!("\n\n[Table {}: {}]\n\n", index, description);
                    outcome.text.insert_str(end, &block);
                    outcome.tables_described += 1;
                }
                None => {
                    debug!("No textual reference for table {}, dropping its description", index);
                    outcome.tables_dropped += 1;
                }
            }
        }
    }
}
