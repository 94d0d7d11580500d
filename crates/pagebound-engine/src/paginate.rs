//! Page construction for in-memory sources.

use pagebound_core::prelude::{Page, PageRequest, Result};

/// Build a page from a forward-only sequence.
///
/// Single pass: iteration stops the moment a `(page_size + 1)`-th item is
/// observed. The source is never iterated twice and never counted.
pub fn create_page<T, I>(source: I, request: &PageRequest) -> Result<Page<T>>
where
    I: IntoIterator<Item = T>,
{
    let fetch = request.fetch_limit()?;

    let iter = source.into_iter();
    // Pre-size from the bound, capped by the source's own upper bound when
    // it advertises one.
    let (_, upper) = iter.size_hint();
    let mut buf = Vec::with_capacity(match upper {
        Some(n) => fetch.min(n),
        None => fetch,
    });

    for item in iter {
        buf.push(item);
        if buf.len() == fetch {
            // One extra item arrived; that is all we need to know.
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        collected = buf.len(),
        page_size = request.page_size(),
        "sequence page collected"
    );

    Ok(Page::from_buffer(buf, request.page_size(), request.total_count()))
}

/// Build a page from a random-access source with a known length.
///
/// Copies exactly `min(page_size + 1, len)` items by index; no traversal
/// beyond the bound.
pub fn create_page_from_slice<T: Clone>(source: &[T], request: &PageRequest) -> Result<Page<T>> {
    let fetch = request.fetch_limit()?;

    let take = fetch.min(source.len());
    let mut buf = Vec::with_capacity(take);
    buf.extend_from_slice(&source[..take]);

    Ok(Page::from_buffer(buf, request.page_size(), request.total_count()))
}
