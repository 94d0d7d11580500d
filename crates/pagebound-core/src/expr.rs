//! Deferred-query expression AST.
//!
//! A deferred query carries one of these trees as its plan. The rewriter
//! appends a `Take` node; everything else is composed by the collaborator
//! engine before the query ever reaches this crate.

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The bound carried by a `Take` node: either a literal constant or a named,
/// reusable parameter placeholder (plan-cache friendly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TakeCount {
    Literal(usize),
    Parameter { name: String, value: usize },
}

impl TakeCount {
    /// The effective bound, regardless of representation.
    pub fn value(&self) -> usize {
        match self {
            TakeCount::Literal(n) => *n,
            TakeCount::Parameter { value, .. } => *value,
        }
    }
}

/// Expression nodes (source → transforms → bound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryExpr {
    Source {
        name: String,
    },
    Filter {
        input: Box<QueryExpr>,
        predicate: String,
    },
    Project {
        input: Box<QueryExpr>,
        columns: Vec<String>,
    },
    OrderBy {
        input: Box<QueryExpr>,
        keys: Vec<String>,
    },
    Take {
        input: Box<QueryExpr>,
        count: TakeCount,
        /// Key of the resolved bounded-take operation this node binds to.
        op: String,
    },
}

impl QueryExpr {
    /// Returns the number of inputs for this node.
    pub fn inputs(&self) -> usize {
        use QueryExpr::*;
        match self {
            Source { .. } => 0,
            Filter { .. } | Project { .. } | OrderBy { .. } | Take { .. } => 1,
        }
    }

    /// Returns true if this is a unary operator.
    pub fn is_unary(&self) -> bool {
        self.inputs() == 1
    }

    /// True if any node in the tree is already a bounded take.
    pub fn contains_take(&self) -> bool {
        use QueryExpr::*;
        match self {
            Take { .. } => true,
            Source { .. } => false,
            Filter { input, .. } | Project { input, .. } | OrderBy { input, .. } => {
                input.contains_take()
            }
        }
    }

    /// Deterministic fingerprint of the expression with parameter *values*
    /// masked out (parameter names survive). Two trees that differ only in a
    /// parameter binding share a key; trees that differ in a literal do not.
    /// Engines use this as their compiled-plan cache key.
    pub fn plan_key(&self) -> Result<PlanKey> {
        let masked = self.mask_parameters();
        let bytes =
            serde_json::to_vec(&masked).map_err(|e| Error::InvalidQueryShape(e.to_string()))?;
        let mut h = Hasher::new();
        h.update(&bytes);
        Ok(PlanKey(h.finalize().into()))
    }

    fn mask_parameters(&self) -> QueryExpr {
        use QueryExpr::*;
        match self {
            Source { name } => Source { name: name.clone() },
            Filter { input, predicate } => Filter {
                input: Box::new(input.mask_parameters()),
                predicate: predicate.clone(),
            },
            Project { input, columns } => Project {
                input: Box::new(input.mask_parameters()),
                columns: columns.clone(),
            },
            OrderBy { input, keys } => OrderBy {
                input: Box::new(input.mask_parameters()),
                keys: keys.clone(),
            },
            Take { input, count, op } => Take {
                input: Box::new(input.mask_parameters()),
                count: match count {
                    TakeCount::Literal(n) => TakeCount::Literal(*n),
                    TakeCount::Parameter { name, .. } => TakeCount::Parameter {
                        name: name.clone(),
                        value: 0,
                    },
                },
                op: op.clone(),
            },
        }
    }
}

/// Stable 32-byte plan fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanKey(pub [u8; 32]);

impl PlanKey {
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for b in &self.0 {
            use std::fmt::Write as _;
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl std::fmt::Display for PlanKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
