#![forbid(unsafe_code)]
//! pagebound: bounded pagination with truncation detection.
//!
//! Produces at most `page_size` items from a source plus a flag telling the
//! caller whether more items existed, without materializing or counting the
//! source. Three source shapes are supported: in-memory sequences, deferred
//! queries (the bound is pushed into the owning engine via expression
//! rewriting), and asynchronous streams (bounded, cancellable consumption).

pub use pagebound_catalog::{
    resolve_query_factory, resolve_take, BoxedQuery, DeferredQuery, QueryEngine,
    QueryFactoryHandle, SourceKind, TakeOperation, QUERY_TAKE, SEQUENCE_TAKE, STREAM_TAKE,
};
pub use pagebound_core::{Error, Page, PageRequest, PlanKey, QueryExpr, Result, TakeCount};
pub use pagebound_engine::{
    create_page, create_page_from_query, create_page_from_query_async, create_page_from_slice,
    create_page_from_stream, CancelToken, MemoryEngine, MemoryQuery,
};
pub use pagebound_rewrite::{rewrite, TAKE_PARAM};
