//! Integration tests
//!
//! Exercise the assembled router end to end against a real SQLite file.
