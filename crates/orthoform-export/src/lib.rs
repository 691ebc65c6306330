//! orthoform-export
//!
//! Narrative rendering, PDF + DOCX generation, and delivery of the
//! exported document to the host.

pub mod delivery;
pub mod docx;
pub mod error;
pub mod export;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod render;
pub mod styles;
