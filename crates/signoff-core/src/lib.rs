pub mod commit;
pub mod context;
pub mod error;
pub mod label;
pub mod report;
pub mod verdict;

pub use commit::Commit;
pub use context::{PullRequestContext, RepoCoordinates};
pub use error::SignoffError;
pub use label::Label;
pub use verdict::ComplianceVerdict;
