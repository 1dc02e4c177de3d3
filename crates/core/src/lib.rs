//! Domain rules for the phrasepin service.
//!
//! Pure validation and error types shared by the database and API layers.
//! No I/O happens here.

pub mod categories;
pub mod error;
pub mod phrases;
pub mod types;
