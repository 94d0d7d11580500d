//! Contracts a collaborator query engine must implement.
//!
//! A deferred query exposes its expression, the engine that owns it, and a
//! bounded evaluation path. The engine exposes exactly one construction
//! entry: build a new typed query around an arbitrary expression.

use futures::future::BoxFuture;

use pagebound_core::error::Result;
use pagebound_core::expr::QueryExpr;

use crate::ops::SourceKind;

pub type BoxedQuery<T> = Box<dyn DeferredQuery<T>>;

/// A source whose items are not computed until explicitly evaluated, and
/// whose plan can be composed further before evaluation.
pub trait DeferredQuery<T: Send + 'static>: Send + Sync {
    /// The query's current expression.
    fn expression(&self) -> &QueryExpr;

    /// The execution engine that owns this query.
    fn engine(&self) -> &dyn QueryEngine<T>;

    /// Which bounded-take operation family applies to this query.
    ///
    /// Genuine deferred queries report `DeferredQuery` so the rewriter picks
    /// a take that participates in expression translation. An in-memory
    /// sequence wrapped to look like a query must override this to
    /// `BoundedSequence`; handing it a translating take would be wrong the
    /// other way around, it would force the engine to pretend it can push
    /// the bound remotely.
    fn source_kind(&self) -> SourceKind {
        SourceKind::DeferredQuery
    }

    /// Evaluate the query and collect at most `limit` items.
    ///
    /// The materialization strategy is the engine's business; the core only
    /// requires that no more than `limit` items come back.
    fn evaluate(&self, limit: usize) -> Result<Vec<T>>;

    /// Asynchronous bounded evaluation. Engines with a native async path
    /// override this; the default adapts the synchronous one.
    fn evaluate_async<'a>(&'a self, limit: usize) -> BoxFuture<'a, Result<Vec<T>>> {
        Box::pin(std::future::ready(self.evaluate(limit)))
    }
}

/// The engine-side factory for typed deferred queries.
pub trait QueryEngine<T: Send>: Send + Sync {
    /// Wrap `expr` into a new, unevaluated query of the same element type.
    ///
    /// Fails with `Error::InvalidQueryShape` when the engine cannot
    /// round-trip the expression (a configuration error, not a normal
    /// runtime condition).
    fn create_query(&self, expr: QueryExpr) -> Result<BoxedQuery<T>>;
}
