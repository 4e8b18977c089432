//! Testing utilities and mock implementations.
//!
//! Available to downstream crates (the server's integration tests build
//! on these), so this module is compiled unconditionally.

mod mock_relevance;

pub mod fixtures;

pub use mock_relevance::{MockRelevance, RecordedRanking};
