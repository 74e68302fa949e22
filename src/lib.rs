//! # Siroco - QR Label Compositor
//!
//! Siroco turns a spreadsheet of artists into printable labels and ships a
//! small companion web server. It provides:
//!
//! - **Label composition**: title, color-coded tag text and one or two QR codes
//! - **Tag text processing**: emoji stripping and two-line wrapping
//! - **Batch rendering**: one PNG per CSV row
//! - **HTTP server**: file uploads and JSON state snapshots
//!
//! ## Quick Start
//!
//! ```no_run
//! use siroco::{batch, config::LayoutConfig};
//! use std::path::Path;
//!
//! let config = LayoutConfig::default();
//! let report = batch::render_table(
//!     Path::new("data/gen.csv"),
//!     Path::new("data/images"),
//!     &config,
//! )?;
//! println!("{} labels written", report.written.len());
//!
//! # Ok::<(), siroco::error::SirocoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`compose`] | Layout planning and label rendering |
//! | [`text`] | Sanitizing, wrapping and word classification |
//! | [`qr`] | Link resolution and QR rasters |
//! | [`font`] | Configured TTF faces and the embedded bitmap font |
//! | [`config`] | Layout configuration |
//! | [`table`] | CSV input |
//! | [`batch`] | Table-to-directory rendering |
//! | [`server`] | Upload and snapshot HTTP server |
//! | [`error`] | Error types |

pub mod batch;
pub mod compose;
pub mod config;
pub mod error;
pub mod font;
pub mod qr;
pub mod server;
pub mod table;
pub mod text;

// Re-exports for convenience
pub use compose::{Record, compose};
pub use config::LayoutConfig;
pub use error::SirocoError;
