//! Crate-level tests that do not belong to a single module file.
