//! Unit tests for `modlint_core` types.
