//! Page construction for deferred queries.
//!
//! The bound is pushed into the query itself: the rewriter appends a
//! bounded-take node and the owning engine materializes the rewritten query.
//! Truncation is then detected from the collected buffer exactly as in the
//! sequence path.

use pagebound_catalog::DeferredQuery;
use pagebound_core::error::{Error, Result};
use pagebound_core::page::Page;
use pagebound_core::request::PageRequest;
use pagebound_rewrite::rewrite;

use crate::cancel::CancelToken;

/// Build a page by rewriting `query` with `limit = page_size + 1` and
/// evaluating the rewritten query synchronously.
pub fn create_page_from_query<T, Q>(query: &Q, request: &PageRequest) -> Result<Page<T>>
where
    T: Send + 'static,
    Q: DeferredQuery<T> + ?Sized,
{
    let fetch = request.fetch_limit()?;

    let bounded = rewrite(query, fetch, request.parameterize())?;
    let items = bounded.evaluate(fetch)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        collected = items.len(),
        page_size = request.page_size(),
        parameterize = request.parameterize(),
        "deferred query page collected"
    );

    Ok(Page::from_buffer(items, request.page_size(), request.total_count()))
}

/// Asynchronous variant of [`create_page_from_query`].
///
/// Cancellation is checked before evaluation starts and raced against the
/// engine's await; a cancelled call fails with `Error::Cancelled` and never
/// returns a partial page.
pub async fn create_page_from_query_async<T, Q>(
    query: &Q,
    request: &PageRequest,
    cancel: Option<&CancelToken>,
) -> Result<Page<T>>
where
    T: Send + 'static,
    Q: DeferredQuery<T> + ?Sized,
{
    let fetch = request.fetch_limit()?;

    let bounded = rewrite(query, fetch, request.parameterize())?;

    let items = match cancel {
        Some(token) => {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
            tokio::select! {
                _ = token.cancelled() => return Err(Error::Cancelled),
                items = bounded.evaluate_async(fetch) => items?,
            }
        }
        None => bounded.evaluate_async(fetch).await?,
    };

    Ok(Page::from_buffer(items, request.page_size(), request.total_count()))
}
