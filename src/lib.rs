//! # csdict
//!
//! An interactive client for a simplified DICT (RFC 2229) dictionary server:
//! - Line-based request encoding (`SHOW DB`, `DEFINE`, `MATCH`, `QUIT`)
//! - Status-code driven response interpretation
//! - Automatic prefix-match fallback when a definition is not found
//! - Single synchronous TCP control connection with timeouts
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Front End (repl)                           │
//! │          prompt, tokenizing, validation, errors              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                Session Controller                            │
//! │        connection state + selected database                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │  Protocol   │          │ Interpreter  │
//!   │  (encode)   │          │ (responses)  │
//!   └──────┬──────┘          └──────┬───────┘
//!          │                        │
//!          ▼                        ▼
//!        ┌──────────────────────────────┐
//!        │   Network (line transport)   │
//!        └──────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod options;

pub mod protocol;
pub mod network;
pub mod interpreter;
pub mod session;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::Config;
pub use options::Options;
pub use interpreter::{Exchange, Interpretation, Outcome};
pub use session::{Session, SessionState};
pub use repl::Repl;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of csdict
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
