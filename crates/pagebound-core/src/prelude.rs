//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::expr::{PlanKey, QueryExpr, TakeCount};
pub use crate::page::Page;
pub use crate::request::PageRequest;
