#![forbid(unsafe_code)]
//! pagebound-engine: page construction for the three source shapes.
//!
//! One truncation rule governs every path: collect up to `page_size + 1`
//! items; if that many were obtainable, keep the first `page_size` and flag
//! the page truncated. Sequences are read in a single forward pass, deferred
//! queries go through the rewriter so the bound executes inside the owning
//! engine, and async streams are consumed item-by-item under a cancel token.

pub mod cancel;
pub mod memory;
pub mod paginate;
pub mod query;
pub mod stream;

pub use cancel::CancelToken;
pub use memory::{MemoryEngine, MemoryQuery};
pub use paginate::{create_page, create_page_from_slice};
pub use query::{create_page_from_query, create_page_from_query_async};
pub use stream::create_page_from_stream;
