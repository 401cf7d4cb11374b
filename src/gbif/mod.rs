//! Client for the GBIF species API.
//!
//! Two lookups back the pipeline: a name match that resolves a scientific name to a
//! backbone taxon key, and a species detail fetch that returns the classification for
//! that key.

mod client;
mod types;


pub use self::client::*;
pub use self::types::*;
