pub mod claim_collected;
pub mod contribute;
pub mod initialize_project;

pub use claim_collected::*;
pub use contribute::*;
pub use initialize_project::*;
