//! Bill lifecycle.

use crate::bill::Bill;
use serde::{Deserialize, Serialize};

/// Where the current bill is in its lifecycle.
///
/// `Summarized` is a display state over the bill's lines: the lines stay
/// editable underneath, and closing the summary always returns to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillPhase {
    /// No lines, no summary showing.
    #[default]
    Empty,
    /// At least one line, no summary showing.
    Building,
    /// The summary for the bill is showing.
    Summarized,
}

impl BillPhase {
    /// Work out the phase from the bill and whether the summary is open.
    pub fn derive(bill: &Bill, summary_open: bool) -> Self {
        match (summary_open, bill.is_empty()) {
            (true, _) => BillPhase::Summarized,
            (false, true) => BillPhase::Empty,
            (false, false) => BillPhase::Building,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillPhase::Empty => "empty",
            BillPhase::Building => "building",
            BillPhase::Summarized => "summarized",
        }
    }

    /// Whether a summary can be generated from this phase.
    pub fn can_summarize(&self) -> bool {
        matches!(self, BillPhase::Building)
    }

    /// Whether there is an open summary to close.
    pub fn can_close(&self) -> bool {
        matches!(self, BillPhase::Summarized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use crate::seed::demo_catalog;

    #[test]
    fn test_derive() {
        let catalog = demo_catalog(Currency::INR);
        let mut bill = Bill::new(Currency::INR);
        assert_eq!(BillPhase::derive(&bill, false), BillPhase::Empty);

        bill.add_product(&catalog, ProductId::new(1)).unwrap();
        assert_eq!(BillPhase::derive(&bill, false), BillPhase::Building);
        assert_eq!(BillPhase::derive(&bill, true), BillPhase::Summarized);

        bill.clear();
        assert_eq!(BillPhase::derive(&bill, true), BillPhase::Summarized);
    }

    #[test]
    fn test_guards() {
        assert!(!BillPhase::Empty.can_summarize());
        assert!(BillPhase::Building.can_summarize());
        assert!(!BillPhase::Summarized.can_summarize());

        assert!(!BillPhase::Empty.can_close());
        assert!(!BillPhase::Building.can_close());
        assert!(BillPhase::Summarized.can_close());
    }
}
