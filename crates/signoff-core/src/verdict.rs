use serde::{Deserialize, Serialize};

use crate::commit::Commit;
use crate::label::Label;
use crate::report;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    pub pass: bool,
    /// Unsigned commits, in the order the host listed them.
    pub non_compliant: Vec<Commit>,
    /// Empty when `pass` is true.
    pub report: String,
}

impl ComplianceVerdict {
    /// Classify `commits` and render the report addressed to `author`.
    pub fn evaluate(author: &str, commits: &[Commit]) -> Self {
        let non_compliant: Vec<Commit> = commits
            .iter()
            .filter(|c| !c.is_signed_off())
            .cloned()
            .collect();
        let report = report::render(author, &non_compliant);
        Self {
            pass: non_compliant.is_empty(),
            non_compliant,
            report,
        }
    }

    pub fn label(&self) -> Label {
        Label::for_verdict(self.pass)
    }
}
