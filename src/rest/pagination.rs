//! Page-by-page draining of list endpoints.
//!
//! WooCommerce reports no cursor we rely on. A listing is drained by asking
//! for successive pages until one comes back shorter than the requested
//! page size.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use woocommerce_api::rest::PagedRequest;
//!
//! let mut pages = client.list_orders().per_page(50).drain(&client);
//! while let Some(page) = pages.next().await {
//!     let page = page?;
//!     println!("page {} had {} orders", page.page, page.items.len());
//! }
//! ```

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::clients::{HttpError, RestClient};
use crate::rest::params::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::rest::TypedRequest;

/// One page of a drained listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// The 1-based page number this page was requested as.
    pub page: u32,
    /// `true` when no further page will be requested.
    pub exhausted: bool,
}

/// What a drain does when one page request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFailurePolicy {
    /// Yield the error and stop.
    Propagate,
    /// Yield an empty exhausted page and stop.
    TreatAsEmpty,
}

enum DrainState<R> {
    Pending { request: R, page: u32 },
    Done,
}

/// A list request that can be paged and drained.
#[allow(async_fn_in_trait)]
pub trait PagedRequest<T>: TypedRequest<Response = Vec<T>>
where
    T: DeserializeOwned + Send,
{
    /// How a failed page ends the drain.
    const ON_PAGE_FAILURE: PageFailurePolicy;

    /// Current page of the collection. Default is 1.
    #[must_use]
    fn page(&self, page: u32) -> Self {
        self.with_query_param("page", page.to_string())
    }

    /// Maximum number of items per page. Default is 10, values above 100 are clamped.
    #[must_use]
    fn per_page(&self, per_page: u32) -> Self {
        self.with_query_param("per_page", per_page.min(MAX_PER_PAGE).to_string())
    }

    /// Returns the page the request will ask for.
    fn current_page(&self) -> u32 {
        self.descriptor()
            .query_param("page")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Returns the page size the request will ask for.
    fn current_per_page(&self) -> u32 {
        self.descriptor()
            .query_param("per_page")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Fetches pages sequentially, starting at [`current_page`](Self::current_page).
    ///
    /// The stream ends after a page shorter than the page size, or after
    /// a failed page (see [`ON_PAGE_FAILURE`](Self::ON_PAGE_FAILURE)).
    /// Nothing is requested until the stream is polled, and dropping it
    /// stops the drain. Drain a clone to start over.
    fn drain<'a>(
        self,
        client: &'a RestClient,
    ) -> impl Stream<Item = Result<Page<T>, HttpError>> + 'a
    where
        Self: 'a,
        T: 'a,
    {
        let start = self.current_page();
        let per_page = self.current_per_page();
        let policy = Self::ON_PAGE_FAILURE;

        stream::unfold(
            DrainState::Pending {
                request: self,
                page: start,
            },
            move |state| async move {
                let DrainState::Pending { request, page } = state else {
                    return None;
                };

                let page_request = request
                    .page(page)
                    .with_query_param("per_page", per_page.to_string());
                tracing::debug!(resource = Self::NAME, page, per_page, "requesting page");

                match page_request.execute(client).await {
                    Ok(items) => {
                        let page_size = usize::try_from(per_page).unwrap_or(usize::MAX);
                        let exhausted = items.is_empty() || items.len() < page_size;
                        let next = if exhausted {
                            DrainState::Done
                        } else {
                            DrainState::Pending {
                                request,
                                page: page.saturating_add(1),
                            }
                        };
                        Some((
                            Ok(Page {
                                items,
                                page,
                                exhausted,
                            }),
                            next,
                        ))
                    }
                    Err(error) => match policy {
                        PageFailurePolicy::Propagate => Some((Err(error), DrainState::Done)),
                        PageFailurePolicy::TreatAsEmpty => {
                            tracing::warn!(
                                resource = Self::NAME,
                                page,
                                error = %error,
                                "page request failed, ending drain"
                            );
                            Some((
                                Ok(Page {
                                    items: Vec::new(),
                                    page,
                                    exhausted: true,
                                }),
                                DrainState::Done,
                            ))
                        }
                    },
                }
            },
        )
    }

    /// Drains every page and concatenates the records.
    ///
    /// # Errors
    ///
    /// Returns the first error the drain yields.
    async fn fetch_all<'a>(self, client: &'a RestClient) -> Result<Vec<T>, HttpError>
    where
        Self: 'a,
        T: 'a,
    {
        self.drain(client)
            .try_fold(Vec::new(), |mut all, page| async move {
                all.extend(page.items);
                Ok(all)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use futures::StreamExt;
    use serde_json::json;

    use crate::clients::testing::ScriptedTransport;
    use crate::clients::HttpRequest;
    use crate::config::{ConsumerKey, ConsumerSecret, RootEndpoint};
    use crate::WooConfig;

    #[derive(Clone, Debug)]
    struct Numbers {
        descriptor: HttpRequest,
    }

    impl TypedRequest for Numbers {
        type Response = Vec<u32>;
        const NAME: &'static str = "Number";

        fn descriptor(&self) -> &HttpRequest {
            &self.descriptor
        }

        fn from_descriptor(descriptor: HttpRequest) -> Self {
            Self { descriptor }
        }
    }

    impl PagedRequest<u32> for Numbers {
        const ON_PAGE_FAILURE: PageFailurePolicy = PageFailurePolicy::Propagate;
    }

    #[derive(Clone, Debug)]
    struct LenientNumbers {
        descriptor: HttpRequest,
    }

    impl TypedRequest for LenientNumbers {
        type Response = Vec<u32>;
        const NAME: &'static str = "Number";

        fn descriptor(&self) -> &HttpRequest {
            &self.descriptor
        }

        fn from_descriptor(descriptor: HttpRequest) -> Self {
            Self { descriptor }
        }
    }

    impl PagedRequest<u32> for LenientNumbers {
        const ON_PAGE_FAILURE: PageFailurePolicy = PageFailurePolicy::TreatAsEmpty;
    }

    fn client(transport: &Arc<ScriptedTransport>) -> RestClient {
        let config = WooConfig::builder()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .consumer_secret(ConsumerSecret::new("cs").unwrap())
            .root_endpoint(RootEndpoint::new("https://shop.example.com/wp-json/wc/v3").unwrap())
            .build()
            .unwrap();
        RestClient::with_transport(config, transport.clone())
    }

    fn numbers<R: TypedRequest>() -> R {
        R::from_descriptor(HttpRequest::new(
            crate::clients::HttpMethod::Get,
            "https://shop.example.com/wp-json/wc/v3/numbers",
        ))
    }

    fn range(start: u32, len: u32) -> serde_json::Value {
        json!((start..start + len).collect::<Vec<_>>())
    }

    #[test]
    fn test_per_page_is_clamped() {
        let request: Numbers = numbers();
        assert_eq!(request.per_page(150).current_per_page(), 100);
        assert_eq!(request.per_page(100).current_per_page(), 100);
        assert_eq!(request.per_page(25).current_per_page(), 25);
    }

    #[test]
    fn test_defaults() {
        let request: Numbers = numbers();
        assert_eq!(request.current_page(), 1);
        assert_eq!(request.current_per_page(), 10);
        assert_eq!(request.page(4).current_page(), 4);
    }

    #[tokio::test]
    async fn test_drain_stops_on_short_page() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .push_json(200, &range(0, 10))
                .push_json(200, &range(10, 4)),
        );
        let client = client(&transport);

        let pages: Vec<_> = numbers::<Numbers>()
            .per_page(10)
            .drain(&client)
            .collect()
            .await;

        assert_eq!(pages.len(), 2);
        let first = pages[0].as_ref().unwrap();
        assert_eq!((first.page, first.items.len(), first.exhausted), (1, 10, false));
        let second = pages[1].as_ref().unwrap();
        assert_eq!((second.page, second.items.len(), second.exhausted), (2, 4, true));

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].url.contains("page=1"));
        assert!(sent[1].url.contains("page=2"));
        assert!(sent[1].url.contains("per_page=10"));
    }

    #[tokio::test]
    async fn test_drain_starts_at_requested_page() {
        let transport = Arc::new(ScriptedTransport::new().push_json(200, &range(0, 3)));
        let client = client(&transport);

        let pages: Vec<_> = numbers::<Numbers>().page(5).drain(&client).collect().await;

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].as_ref().unwrap().page, 5);
        assert!(transport.requests()[0].url.contains("page=5"));
    }

    #[tokio::test]
    async fn test_empty_page_is_exhausted() {
        let transport = Arc::new(ScriptedTransport::new().push_json(200, &json!([])));
        let client = client(&transport);

        let pages: Vec<_> = numbers::<Numbers>().per_page(0).drain(&client).collect().await;

        assert_eq!(pages.len(), 1);
        assert!(pages[0].as_ref().unwrap().exhausted);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_propagate_yields_error_and_stops() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .push_json(200, &range(0, 10))
                .push_json(500, &json!({"code": "internal", "message": "boom"})),
        );
        let client = client(&transport);

        let pages: Vec<_> = numbers::<Numbers>().drain(&client).collect().await;

        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_ok());
        assert!(matches!(pages[1], Err(HttpError::Response(ref e)) if e.code == 500));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_treat_as_empty_yields_exhausted_empty_page() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .push_json(200, &range(0, 10))
                .push_network_error("connection reset"),
        );
        let client = client(&transport);

        let pages: Vec<_> = numbers::<LenientNumbers>().drain(&client).collect().await;

        assert_eq!(pages.len(), 2);
        let last = pages[1].as_ref().unwrap();
        assert!(last.items.is_empty());
        assert!(last.exhausted);
        assert_eq!(last.page, 2);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_concatenates_pages() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .push_json(200, &range(0, 2))
                .push_json(200, &range(2, 1)),
        );
        let client = client(&transport);

        let all = numbers::<Numbers>().per_page(2).fetch_all(&client).await.unwrap();
        assert_eq!(all, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_all_returns_first_error() {
        let transport = Arc::new(ScriptedTransport::new().push_network_error("refused"));
        let client = client(&transport);

        let result = numbers::<Numbers>().fetch_all(&client).await;
        assert!(matches!(result, Err(HttpError::Network(_))));
    }
}
