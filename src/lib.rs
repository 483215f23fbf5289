//! Cross-crate scenario tests for coinpane live under `tests/`.
