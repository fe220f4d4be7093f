pub mod count;
pub mod index;
pub mod seed;

pub use count::CountingStrategy;
