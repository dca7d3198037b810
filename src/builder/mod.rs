//! b2 configuration generation.
//!
//! This module probes the toolchain, renders the templates and assembles the
//! generated documents.

pub mod generator;
pub mod template;
pub mod toolchain;

pub use generator::{Generator, OutputDocuments};
pub use template::{render, TemplateSet};
pub use toolchain::{NullProber, Prober, SystemProber};
