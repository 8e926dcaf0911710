pub mod intern;
pub mod inverted;

pub use inverted::InvertedIndex;
