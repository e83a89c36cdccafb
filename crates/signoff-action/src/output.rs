//! Step outputs and the failure annotation, following the workflow command
//! conventions of the runner.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

pub struct ActionOutput {
    /// `GITHUB_OUTPUT`; outputs are only logged when unset.
    path: Option<PathBuf>,
}

impl ActionOutput {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{name}={value}")
            }
            None => {
                info!("output {name}={value}");
                Ok(())
            }
        }
    }

    /// Print an `::error::` annotation. The caller exits non-zero.
    pub fn set_failed(&self, message: &str) {
        println!("{}", error_command(message));
    }
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
