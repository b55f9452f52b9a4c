pub mod ops;
pub mod posts;
