// Assessment results: dimension schema, typed score records, HTTP handlers.
// Writes go through `CareerMatcher::save_assessment` so cached matches are
// dropped on every retake.

pub mod dimensions;
pub mod handlers;
pub mod scores;
