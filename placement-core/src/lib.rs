pub mod errors;
pub mod offset;
pub mod position;
pub mod predicate;
pub mod ranking;
pub mod types;
