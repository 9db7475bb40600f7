//! In-memory stores for the song catalog, libraries, and sessions

mod catalog_store;
mod library_store;
mod session_store;

pub use catalog_store::SongCatalog;
pub use library_store::Library;
pub use session_store::SessionStore;
