//! transmittal-ast - Data model definitions
//!
//! This crate provides the types shared by every stage of transmittal sheet
//! composition: the incoming document record, the signatory profile, the
//! humanized session date and the styled text runs produced for rendering.

pub mod record;
pub mod run;
pub mod session;
pub mod signatory;

pub use record::{DocumentKind, DocumentRecord, Recipient};
pub use run::{plain_text, RunStyle, StyledRun};
pub use session::{OrdinalSuffix, SessionDate};
pub use signatory::SignatoryProfile;

/// Literal rendered for every absent data field
pub const NOT_AVAILABLE: &str = "N/A";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
