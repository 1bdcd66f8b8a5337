//! # cicerone_core
//!
//! Core domain logic for Cicerone.

pub mod db;
pub mod favorites;
pub mod guide;
pub mod migrate;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
