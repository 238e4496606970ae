//! Domain error and result types for AI Shield.
//!
//! All fallible library operations return [`Result<T, ShieldError>`]:
//!
//! ```rust,no_run
//! use aishield::domain::Result;
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = aishield::config::load_config("aishield.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! Transport failures of the remote scanning service are modelled separately
//! as [`RemoteError`] so the fallback orchestrator can recover from them
//! without inspecting HTTP client internals.

pub mod errors;
pub mod result;

pub use errors::{RemoteError, ShieldError};
pub use result::Result;
