//! Edge-list input parsing.

pub mod reader;

pub use reader::EdgeListReader;
