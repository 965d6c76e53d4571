//! Core library for docgen
//!
//! This crate is the **Functional Core** of docgen. It holds every decision
//! that does not need the network or the filesystem:
//!
//! - [`config`]: validation of the environment-provided inputs
//! - [`chat`]: chat-completion request construction and response extraction
//! - [`files`]: source file matching, output path mapping and markdown rendering
//!
//! The `docgen` binary is the Imperative Shell: it reads the environment, walks
//! the source tree, calls the AI endpoint and writes the documents, delegating
//! to these functions along the way.
//!
//! ```rust
//! use docgen_core::chat::extract_content;
//! use docgen_core::files::{output_path, render_markdown};
//! use std::path::Path;
//!
//! let doc = extract_content(r#"{"choices":[{"message":{"content":"DOC"}}]}"#).unwrap();
//! let target = output_path(Path::new("docs"), Path::new("sub/b.py"));
//!
//! assert_eq!(target, Path::new("docs/sub/b.md"));
//! assert_eq!(render_markdown("b.py", &doc), "# b.py\n\nDOC");
//! ```

pub mod chat;
pub mod config;
pub mod files;
