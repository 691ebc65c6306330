//! orthoform-core
//!
//! Shared vocabulary for the arthroplasty follow-up forms: the transient
//! form record, the gated answer type, review entries and field errors.
//! Pure data — no rendering or I/O.

pub mod error;
pub mod models;
