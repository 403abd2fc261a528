// Account records and the pre-launch waitlist.
// Only names and an email are kept; there is no password or session state.

pub mod handlers;
pub mod validation;
