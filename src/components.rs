//! Reusable HTML components for page shells
//!
//! The page shell is split into the document wrapper, head metadata, and
//! body markup. Each piece is a Maud function taking only the data it
//! renders, so the shell renderer stays a thin composition.

pub mod body;
pub mod head;
pub mod layout;
