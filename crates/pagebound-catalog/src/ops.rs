//! Process-wide bounded-take operation table.
//!
//! Resolution happens once per (element type, source kind) pair and the
//! resulting handle is shared read-only for the process lifetime. A race on
//! first use only decides which of several identical handles gets cached.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use pagebound_core::error::Result;
use pagebound_core::expr::QueryExpr;

use crate::traits::{BoxedQuery, QueryEngine};

/// Operation key for a take over an in-memory, forward-only sequence.
pub const SEQUENCE_TAKE: &str = "sequence.take";
/// Operation key for a take that participates in deferred-query translation.
pub const QUERY_TAKE: &str = "query.take";
/// Operation key for bounded consumption of an asynchronous stream.
pub const STREAM_TAKE: &str = "stream.take";

const CREATE_QUERY: &str = "engine.create_query";

/// What shape of source a pagination call is working against. Computed from
/// the source's capability at call time; never stored on the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    BoundedSequence,
    DeferredQuery,
    AsyncStream,
}

/// Opaque handle for "the bounded-take capability applicable to this source",
/// resolved per element type and source kind. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeOperation {
    element: &'static str,
    kind: SourceKind,
    key: &'static str,
}

impl TakeOperation {
    /// Fully qualified name of the element type this operation was resolved for.
    pub fn element(&self) -> &'static str {
        self.element
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Stable operation key embedded into rewritten `Take` nodes.
    pub fn key(&self) -> &'static str {
        self.key
    }
}

type OpTable = HashMap<(TypeId, SourceKind), Arc<TakeOperation>>;

static OPERATIONS: Lazy<RwLock<OpTable>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Resolve the bounded-take operation for element type `T` and `kind`.
///
/// Deterministic per (T, kind): repeated calls return behaviorally identical
/// handles (and, after first use, the same cached `Arc`). Safe under
/// concurrent first-use; the first insert wins.
pub fn resolve_take<T: 'static>(kind: SourceKind) -> Result<Arc<TakeOperation>> {
    let id = TypeId::of::<T>();

    if let Some(op) = OPERATIONS.read().unwrap().get(&(id, kind)) {
        return Ok(Arc::clone(op));
    }

    let op = Arc::new(TakeOperation {
        element: type_name::<T>(),
        kind,
        key: match kind {
            SourceKind::BoundedSequence => SEQUENCE_TAKE,
            SourceKind::DeferredQuery => QUERY_TAKE,
            SourceKind::AsyncStream => STREAM_TAKE,
        },
    });

    let mut table = OPERATIONS.write().unwrap();
    Ok(Arc::clone(table.entry((id, kind)).or_insert(op)))
}

/// Handle for the engine's "create typed query from expression" operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFactoryHandle {
    key: &'static str,
}

impl QueryFactoryHandle {
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Ask `engine` to wrap `expr` into a new typed deferred query. Only the
    /// engine that owns the source query knows how to build a concrete
    /// queryable around an arbitrary expression, so this always goes through
    /// the engine rather than constructing anything locally.
    pub fn create<T: Send>(
        &self,
        engine: &dyn QueryEngine<T>,
        expr: QueryExpr,
    ) -> Result<BoxedQuery<T>> {
        engine.create_query(expr)
    }
}

/// The single entry point for the deferred-query engine's typed-query
/// creation operation.
pub fn resolve_query_factory() -> QueryFactoryHandle {
    QueryFactoryHandle { key: CREATE_QUERY }
}
