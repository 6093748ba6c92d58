//! Larger unit suites kept out of their implementation files.
