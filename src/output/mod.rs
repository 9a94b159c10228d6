//! Output file handling.
//!
//! This module writes collected files into the flattened dump.

pub mod writer;

pub use writer::EntryWriter;
