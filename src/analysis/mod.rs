pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tokenizer::{contains_control_byte, split_into_words};
