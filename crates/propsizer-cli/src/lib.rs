//! Propsizer CLI library.
//!
//! Terminal styling and output rendering for the `propsizer-cli` binary.

pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
