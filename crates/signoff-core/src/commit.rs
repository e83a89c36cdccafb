use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `.` does not match `\n`, so the name and email must sit on one line.
static SIGNED_OFF_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Signed-off-by: (.*) <(.*)>").expect("sign-off pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub url: String,
}

impl Commit {
    /// First line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(6) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }

    pub fn is_signed_off(&self) -> bool {
        has_sign_off(&self.message)
    }
}

/// True when `message` carries a `Signed-off-by: Name <email>` trailer, in any case.
pub fn has_sign_off(message: &str) -> bool {
    SIGNED_OFF_BY.is_match(message)
}
