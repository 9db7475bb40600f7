//! Core library functions for shelfmood

pub mod books;
pub mod recommend;
pub mod selection;

pub use books::BooksLib;
pub use recommend::RecommendLib;
pub use selection::SelectionLib;
