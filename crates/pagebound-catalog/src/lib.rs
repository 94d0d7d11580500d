#![forbid(unsafe_code)]
//! pagebound-catalog: the bounded-take operation resolver and the contracts
//! collaborator query engines implement.
//!
//! Design intent:
//! - Resolution is keyed on (element type, source kind) and cached once per
//!   process; concurrent first-use is safe and behaviorally deterministic.
//! - Only the truncation-relevant operations live here: bounded-take and the
//!   engine's "create typed query from expression" entry. Anything else a
//!   query toolkit might look up is a collaborator concern.

pub mod ops;
pub mod traits;

pub use ops::{
    resolve_query_factory, resolve_take, QueryFactoryHandle, SourceKind, TakeOperation,
    QUERY_TAKE, SEQUENCE_TAKE, STREAM_TAKE,
};
pub use traits::{BoxedQuery, DeferredQuery, QueryEngine};
