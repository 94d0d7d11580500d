#![forbid(unsafe_code)]
//! pagebound-rewrite: construct "apply bounded-take(limit) to this query"
//! as a new deferred query, without evaluating anything.
//!
//! The rewriter owns expression construction only. Picking the right take
//! operation is the resolver's job; wrapping the new expression into a
//! concrete queryable is the owning engine's job.

use pagebound_catalog::{resolve_query_factory, resolve_take, BoxedQuery, DeferredQuery};
use pagebound_core::error::{Error, Result};
use pagebound_core::expr::{QueryExpr, TakeCount};

/// Name of the reusable bound parameter when parameterization is requested.
/// Kept stable so structurally identical rewrites share a plan key.
pub const TAKE_PARAM: &str = "take_count";

/// Rewrite `query` into a new unevaluated query whose plan ends in a
/// bounded-take of `limit` items.
///
/// `limit` is always `page_size + 1` here; the pagination engine computes it
/// (checked) before calling in. With `parameterize`, the bound is carried as
/// a named placeholder instead of a literal so the underlying engine can
/// reuse one compiled plan across varying page sizes.
pub fn rewrite<T, Q>(query: &Q, limit: usize, parameterize: bool) -> Result<BoxedQuery<T>>
where
    T: Send + 'static,
    Q: DeferredQuery<T> + ?Sized,
{
    if limit < 1 {
        return Err(Error::InvalidPageSize(limit));
    }

    // Keyed on the element type and on whether this is a genuine deferred
    // query or a wrapped in-memory sequence.
    let op = resolve_take::<T>(query.source_kind())?;

    let count = if parameterize {
        TakeCount::Parameter {
            name: TAKE_PARAM.to_string(),
            value: limit,
        }
    } else {
        TakeCount::Literal(limit)
    };

    let expr = QueryExpr::Take {
        input: Box::new(query.expression().clone()),
        count,
        op: op.key().to_string(),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        limit,
        parameterize,
        op = op.key(),
        element = op.element(),
        "rewriting query with bounded take"
    );

    resolve_query_factory().create(query.engine(), expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebound_catalog::{QueryEngine, SourceKind, QUERY_TAKE, SEQUENCE_TAKE};

    // A minimal engine that records nothing and evaluates nothing; enough to
    // observe the expression the rewriter hands back.
    struct NullEngine;

    struct NullQuery {
        expr: QueryExpr,
        kind: SourceKind,
    }

    impl QueryEngine<u32> for NullEngine {
        fn create_query(&self, expr: QueryExpr) -> Result<BoxedQuery<u32>> {
            Ok(Box::new(NullQuery {
                expr,
                kind: SourceKind::DeferredQuery,
            }))
        }
    }

    impl DeferredQuery<u32> for NullQuery {
        fn expression(&self) -> &QueryExpr {
            &self.expr
        }

        fn engine(&self) -> &dyn QueryEngine<u32> {
            &NullEngine
        }

        fn source_kind(&self) -> SourceKind {
            self.kind
        }

        fn evaluate(&self, _limit: usize) -> Result<Vec<u32>> {
            Ok(Vec::new())
        }
    }

    fn source_query(kind: SourceKind) -> NullQuery {
        NullQuery {
            expr: QueryExpr::Source {
                name: "items".to_string(),
            },
            kind,
        }
    }

    #[test]
    fn test_rewrite_appends_literal_take() {
        let q = source_query(SourceKind::DeferredQuery);
        let rewritten = rewrite(&q, 11, false).unwrap();

        match rewritten.expression() {
            QueryExpr::Take { input, count, op } => {
                assert_eq!(count, &TakeCount::Literal(11));
                assert_eq!(op, QUERY_TAKE);
                assert_eq!(
                    input.as_ref(),
                    &QueryExpr::Source {
                        name: "items".to_string()
                    }
                );
            }
            other => panic!("expected Take node, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_parameterizes_bound() {
        let q = source_query(SourceKind::DeferredQuery);
        let rewritten = rewrite(&q, 6, true).unwrap();

        match rewritten.expression() {
            QueryExpr::Take { count, .. } => {
                assert_eq!(
                    count,
                    &TakeCount::Parameter {
                        name: TAKE_PARAM.to_string(),
                        value: 6,
                    }
                );
            }
            other => panic!("expected Take node, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_picks_sequence_take_for_wrapped_sources() {
        let q = source_query(SourceKind::BoundedSequence);
        let rewritten = rewrite(&q, 4, false).unwrap();

        match rewritten.expression() {
            QueryExpr::Take { op, .. } => assert_eq!(op, SEQUENCE_TAKE),
            other => panic!("expected Take node, got {other:?}"),
        }
    }

    #[test]
    fn test_rewrite_rejects_zero_limit() {
        let q = source_query(SourceKind::DeferredQuery);
        assert!(matches!(
            rewrite(&q, 0, false),
            Err(Error::InvalidPageSize(0))
        ));
    }
}
