//! # texmap
//!
//! Symbol maps for TeX-style tokenizing parsers: membership testing and
//! entry lookup over pattern maps, character tables and macro tables.
//!
//! See the [texmap module](texmap) for the map kinds and how they are built.

pub mod texmap;

pub use texmap::*;
