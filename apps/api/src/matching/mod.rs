// Career-matching engine.
// Catalog → normalizer → similarity → aggregator → assembler, fronted by
// `engine::CareerMatcher`. Everything below the engine is pure and sync.

pub mod aggregator;
pub mod assembler;
pub mod cache;
pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod normalizer;
pub mod similarity;

pub use engine::CareerMatcher;
