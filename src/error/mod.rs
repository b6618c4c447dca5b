//! Error handling for compscan
//!
//! Two layers live here. [`ScanError`] is what the command-line surface can
//! fail with. [`Degradation`] names the recoveries the analysis engine makes
//! internally; those are logged and never returned to a caller.

pub mod context;
pub mod degradation;
pub mod types;


pub use context::ResultExt;
pub use degradation::{Degradation, ParseFailure};
pub use types::{ErrorSeverity, Result, ScanError};
