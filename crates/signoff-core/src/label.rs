use std::fmt;

use serde::{Deserialize, Serialize};

pub const PASS_LABEL: &str = "pass/signedoff";
pub const FAIL_LABEL: &str = "fail/signedoff";

/// Label attached to the pull request's issue after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "pass/signedoff")]
    Pass,
    #[serde(rename = "fail/signedoff")]
    Fail,
}

impl Label {
    pub fn for_verdict(pass: bool) -> Self {
        if pass {
            Label::Pass
        } else {
            Label::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Pass => PASS_LABEL,
            Label::Fail => FAIL_LABEL,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
