//! Page construction for asynchronous push-based streams.

use futures::{Stream, StreamExt};

use pagebound_core::error::{Error, Result};
use pagebound_core::page::Page;
use pagebound_core::request::PageRequest;

use crate::cancel::CancelToken;

/// Consume `stream` item-by-item, stopping once `page_size + 1` items have
/// been collected or the stream ends.
///
/// Every `next()` is a suspension point and is raced against the cancel
/// token; cancellation fails the call with `Error::Cancelled` rather than
/// returning whatever was collected so far.
pub async fn create_page_from_stream<T, S>(
    stream: S,
    request: &PageRequest,
    cancel: Option<&CancelToken>,
) -> Result<Page<T>>
where
    S: Stream<Item = T>,
{
    let fetch = request.fetch_limit()?;

    let mut stream = std::pin::pin!(stream);
    let mut buf = Vec::new();

    while buf.len() < fetch {
        let item = match cancel {
            Some(token) => {
                if token.is_cancelled() {
                    return Err(Error::Cancelled);
                }
                tokio::select! {
                    _ = token.cancelled() => return Err(Error::Cancelled),
                    item = stream.next() => item,
                }
            }
            None => stream.next().await,
        };

        match item {
            Some(item) => buf.push(item),
            None => break,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        collected = buf.len(),
        page_size = request.page_size(),
        "stream page collected"
    );

    Ok(Page::from_buffer(buf, request.page_size(), request.total_count()))
}
