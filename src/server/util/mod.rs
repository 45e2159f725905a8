//! Helpers shared by controllers and request parameter parsing.

pub mod parse;
