pub mod assessment;
pub mod career;
pub mod user;
pub mod waitlist;
