#![forbid(unsafe_code)]
//! pagebound-core: result/request types, error taxonomy, and the query
//! expression AST shared by the resolver, rewriter, and engine crates.
//!
//! This crate is deliberately small and synchronous. The async surface and
//! the collaborator traits live in `pagebound-catalog` and `pagebound-engine`.

pub mod error;
pub mod expr;
pub mod page;
pub mod prelude;
pub mod request;

pub use error::{Error, Result};
pub use expr::{PlanKey, QueryExpr, TakeCount};
pub use page::Page;
pub use request::PageRequest;
