use crate::commerce::CommerceRow;
use crate::product::ProductRecord;

/// Outcome of processing one item within a batch run.
#[derive(Debug, Clone)]
pub enum BatchItemResult {
    /// The item was normalized and projected into commerce rows.
    Exported {
        record: ProductRecord,
        rows: Vec<CommerceRow>,
    },
    /// The item was dropped from the batch; `reason` is user-facing.
    Skipped { item_id: String, reason: String },
}

/// Per-item results of a batch run, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub items: Vec<BatchItemResult>,
}

impl BatchReport {
    pub fn push(&mut self, item: BatchItemResult) {
        self.items.push(item);
    }

    /// Records of every exported item, in input order.
    #[must_use]
    pub fn records(&self) -> Vec<&ProductRecord> {
        self.items
            .iter()
            .filter_map(|item| match item {
                BatchItemResult::Exported { record, .. } => Some(record),
                BatchItemResult::Skipped { .. } => None,
            })
            .collect()
    }

    /// Commerce rows grouped per exported item, in input order.
    #[must_use]
    pub fn row_groups(&self) -> Vec<&[CommerceRow]> {
        self.items
            .iter()
            .filter_map(|item| match item {
                BatchItemResult::Exported { rows, .. } => Some(rows.as_slice()),
                BatchItemResult::Skipped { .. } => None,
            })
            .collect()
    }

    /// `(item_id, reason)` for every skipped item.
    #[must_use]
    pub fn skipped(&self) -> Vec<(&str, &str)> {
        self.items
            .iter()
            .filter_map(|item| match item {
                BatchItemResult::Skipped { item_id, reason } => {
                    Some((item_id.as_str(), reason.as_str()))
                }
                BatchItemResult::Exported { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn exported_count(&self) -> usize {
        self.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exported_count() == 0
    }
}
