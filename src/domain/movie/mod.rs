pub mod entity;
pub mod invariants;

pub use entity::{split_multi_valued, Movie};
pub use invariants::validate_movie;
