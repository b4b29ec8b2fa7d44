//! Integration tests for impact-graph
//!
//! Library tests run against the shared fixture; CLI tests run the built binary inside a
//! temporary directory.

mod helpers;
mod test_check;
mod test_fixture;
mod test_generate;
mod test_intersect;
mod test_lookup;
