//! Application Layer - Use Cases

pub mod check;
pub mod claim;
pub mod config;
pub mod issue;
pub mod list;
pub mod messages;

pub use check::{CheckTokenUseCase, TokenStatus};
pub use claim::{ClaimTokenInput, ClaimTokenOutput, ClaimTokenUseCase};
pub use config::WarrantyConfig;
pub use issue::IssueTokenUseCase;
pub use list::{ListTokensUseCase, TokenSummary};
