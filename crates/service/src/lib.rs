//! Service layer for the repair-shop directory.
//! - `shop::state` owns the collections and applies mutations.
//! - `shop::queries` holds the read-only filters and orderings.
//! - `shop::directory` exposes both behind one lock as an async trait.

pub mod errors;
pub mod shop;
#[cfg(test)]
pub mod test_support;
