//! Fragment matching: normalization, similarity scoring and the locator.

mod locator;
mod normalize;
mod similarity;
mod strategies;

pub use locator::{locate_fragment, Locator};
pub use normalize::{normalize, word_count};
pub use similarity::similarity;
pub use strategies::{
    exact_match, fuzzy_line_match, keyword_match, keyword_terms, multiline_match, Document,
    Fragment, Strategy, STRATEGIES,
};
