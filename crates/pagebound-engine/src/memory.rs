//! Reference in-memory query engine.
//!
//! Backs tests and local evaluation the way a real collaborator engine
//! would: sources are registered by name, queries carry an expression and a
//! handle back to the engine, and evaluation threads the bound top-down so
//! nothing is materialized beyond the requested limit.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use pagebound_catalog::{BoxedQuery, DeferredQuery, QueryEngine, SourceKind};
use pagebound_core::error::{Error, Result};
use pagebound_core::expr::QueryExpr;

pub struct MemoryEngine<T> {
    sources: RwLock<HashMap<String, Arc<Vec<T>>>>,
    // Queries need an owned handle back to their engine.
    self_ref: Weak<MemoryEngine<T>>,
}

impl<T: Clone + Send + Sync + 'static> MemoryEngine<T> {
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            sources: RwLock::new(HashMap::new()),
            self_ref: weak.clone(),
        })
    }

    /// Register (or replace) a named source.
    pub fn register(&self, name: &str, items: Vec<T>) {
        let mut sources = self.sources.write().unwrap();
        sources.insert(name.to_string(), Arc::new(items));
    }

    /// A genuine deferred query over a registered source.
    pub fn query(self: &Arc<Self>, source: &str) -> MemoryQuery<T> {
        MemoryQuery {
            expr: QueryExpr::Source {
                name: source.to_string(),
            },
            kind: SourceKind::DeferredQuery,
            engine: Arc::clone(self),
        }
    }

    /// The same source, presented as a plain in-memory sequence that merely
    /// looks like a query. The rewriter resolves the non-translating take
    /// for these.
    pub fn local_query(self: &Arc<Self>, source: &str) -> MemoryQuery<T> {
        MemoryQuery {
            expr: QueryExpr::Source {
                name: source.to_string(),
            },
            kind: SourceKind::BoundedSequence,
            engine: Arc::clone(self),
        }
    }

    /// Evaluate `expr` collecting at most `limit` items. The bound flows
    /// top-down so a `Take` only tightens it.
    fn eval_bounded(&self, expr: &QueryExpr, limit: usize) -> Result<Vec<T>> {
        match expr {
            QueryExpr::Source { name } => {
                let sources = self.sources.read().unwrap();
                let items = sources.get(name).ok_or(Error::NullSource)?;
                Ok(items.iter().take(limit).cloned().collect())
            }
            QueryExpr::Take { input, count, .. } => {
                self.eval_bounded(input, limit.min(count.value()))
            }
            other => Err(Error::Evaluation(format!(
                "memory engine cannot evaluate this node: {other:?}"
            ))),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> QueryEngine<T> for MemoryEngine<T> {
    fn create_query(&self, expr: QueryExpr) -> Result<BoxedQuery<T>> {
        let engine = self
            .self_ref
            .upgrade()
            .ok_or_else(|| Error::InvalidQueryShape("memory engine dropped".to_string()))?;
        Ok(Box::new(MemoryQuery {
            expr,
            kind: SourceKind::DeferredQuery,
            engine,
        }))
    }
}

pub struct MemoryQuery<T> {
    expr: QueryExpr,
    kind: SourceKind,
    engine: Arc<MemoryEngine<T>>,
}

impl<T: Clone + Send + Sync + 'static> DeferredQuery<T> for MemoryQuery<T> {
    fn expression(&self) -> &QueryExpr {
        &self.expr
    }

    fn engine(&self) -> &dyn QueryEngine<T> {
        self.engine.as_ref()
    }

    fn source_kind(&self) -> SourceKind {
        self.kind
    }

    fn evaluate(&self, limit: usize) -> Result<Vec<T>> {
        self.engine.eval_bounded(&self.expr, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_evaluation_respects_limit() {
        let engine = MemoryEngine::new();
        engine.register("nums", (1..=100).collect());

        let q = engine.query("nums");
        let items = q.evaluate(5).unwrap();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_take_node_tightens_bound() {
        let engine = MemoryEngine::new();
        engine.register("nums", (1..=100).collect());

        let q = engine.query("nums");
        let bounded = engine
            .create_query(QueryExpr::Take {
                input: Box::new(q.expression().clone()),
                count: pagebound_core::expr::TakeCount::Literal(3),
                op: pagebound_catalog::QUERY_TAKE.to_string(),
            })
            .unwrap();

        // Outer limit is looser than the Take; the Take wins.
        assert_eq!(bounded.evaluate(10).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_source_is_null_source() {
        let engine = MemoryEngine::<i32>::new();
        let q = engine.query("nowhere");
        assert!(matches!(q.evaluate(5), Err(Error::NullSource)));
    }

    #[test]
    fn test_unsupported_node_fails_evaluation() {
        let engine = MemoryEngine::new();
        engine.register("nums", vec![1, 2, 3]);

        let q = engine
            .create_query(QueryExpr::Filter {
                input: Box::new(QueryExpr::Source {
                    name: "nums".to_string(),
                }),
                predicate: "x > 1".to_string(),
            })
            .unwrap();
        assert!(matches!(q.evaluate(5), Err(Error::Evaluation(_))));
    }
}
