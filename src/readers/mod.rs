//! Readers for the search-result input.

mod input;
mod search_results;

pub use input::{read_input, read_stdin};
pub use search_results::{
    Edge, Highlight, Node, Repository, Search, SearchData, SearchResponse, TextMatch,
};
