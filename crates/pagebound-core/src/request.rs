//! Caller-supplied pagination configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MIN_PAGE_SIZE: usize = 1;

/// Recognized options for a page construction call.
///
/// `total_count` is accepted as an externally supplied value and stored on
/// the resulting page verbatim; this engine never computes or checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page_size: usize,
    total_count: Option<u64>,
    parameterize: bool,
}

impl PageRequest {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            total_count: None,
            parameterize: false,
        }
    }

    pub fn with_total_count(mut self, total_count: u64) -> Self {
        self.total_count = Some(total_count);
        self
    }

    /// Represent the injected bound as a named, reusable parameter instead of
    /// a literal constant, so structurally identical queries with varying
    /// page sizes share a compiled plan on the underlying engine.
    pub fn parameterized(mut self) -> Self {
        self.parameterize = true;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn parameterize(&self) -> bool {
        self.parameterize
    }

    /// Validate before any iteration happens.
    pub fn validate(&self) -> Result<()> {
        if self.page_size < MIN_PAGE_SIZE {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    /// The number of items to request from a source: `page_size + 1`, so one
    /// extra item can signal truncation. Checked, as in the original
    /// formulation of this bound.
    pub fn fetch_limit(&self) -> Result<usize> {
        self.validate()?;
        self.page_size.checked_add(1).ok_or(Error::Overflow)
    }
}
