//! Implements [TransactionQueryService] over HTTP with a reqwest client.

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::{
    Error, endpoints,
    transactions::{Transaction, TransactionFilter},
};

use super::TransactionQueryService;

/// A [TransactionQueryService] that queries a remote REST API.
///
/// Each fetch issues a single
/// `GET {base_url}/api/transactions?month=..&search=..&page=..&perPage=..`
/// request and decodes the body as a JSON array of transactions.
pub struct HttpQueryService {
    http_client: HttpClient,
    base_url: String,
}

impl HttpQueryService {
    /// Create a new client for the service at `base_url`,
    /// e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn request_url(&self, filter: &TransactionFilter) -> Result<String, Error> {
        let query_string = serde_urlencoded::to_string(filter.as_wire_params())
            .map_err(|error| Error::QueryFailed(format!("could not encode query: {error}")))?;

        Ok(format!(
            "{}{}?{}",
            self.base_url,
            endpoints::QUERY_SERVICE_TRANSACTIONS,
            query_string
        ))
    }
}

#[async_trait]
impl TransactionQueryService for HttpQueryService {
    async fn fetch_page(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        let url = self.request_url(filter)?;
        tracing::debug!("querying {url}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|error| Error::QueryFailed(format!("request failed: {error}")))?;

        if !response.status().is_success() {
            return Err(Error::QueryFailed(format!(
                "service returned {}",
                response.status()
            )));
        }

        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|error| Error::QueryFailed(format!("could not decode response: {error}")))
    }
}

#[cfg(test)]
mod http_query_service_tests {
    use crate::transactions::{Month, TransactionFilter};

    use super::HttpQueryService;

    #[test]
    fn builds_url_from_default_filter() {
        let service = HttpQueryService::new("http://localhost:8080");
        let filter = TransactionFilter::default();

        let got = service.request_url(&filter).unwrap();

        assert_eq!(
            got,
            "http://localhost:8080/api/transactions?month=March&search=&page=1&perPage=10"
        );
    }

    #[test]
    fn url_encodes_search_text() {
        let service = HttpQueryService::new("http://localhost:8080/");
        let mut filter = TransactionFilter::default();
        filter.set_month(Month::July);
        filter.set_search_text("wireless mouse".to_owned());

        let got = service.request_url(&filter).unwrap();

        assert_eq!(
            got,
            "http://localhost:8080/api/transactions?month=July&search=wireless+mouse&page=1&perPage=10"
        );
    }
}
