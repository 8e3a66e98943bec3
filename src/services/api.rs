use log::debug;
use tokio::sync::mpsc;

use artview::api::{ArticClient, ArtworksPage};

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch one page of artworks, tagged with the request generation
    FetchPage { generation: u64, page: u32 },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    PageResult {
        generation: u64,
        page: u32,
        result: Result<ArtworksPage, anyhow::Error>,
    },
}

/// API service worker that runs requests in the background
///
/// Each request runs in its own task so a slow page never blocks a newer
/// one. Responses come back in completion order; the consumer decides which
/// of them are still wanted.
pub struct ApiService {
    client: ArticClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: ArticClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
        }
    }

    fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            // Receiver gone means the app is shutting down
            let _ = response_tx.send(response);
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &ArticClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchPage { generation, page } => {
                debug!(
                    "[API Service FetchPage]: START generation={} page={}",
                    generation, page
                );
                let result = client.fetch_artworks(page).await;
                debug!(
                    "[API Service FetchPage]: END generation={} page={} success={}",
                    generation,
                    page,
                    result.is_ok()
                );

                ApiResponse::PageResult {
                    generation,
                    page,
                    result,
                }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: ArticClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(client, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        debug!("[API Service]: request channel closed, worker exiting");
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_fetch_keeps_generation_tag() {
        // Nothing listens on port 9; the request fails fast
        let client = ArticClient::new(
            "http://127.0.0.1:9".to_string(),
            12,
            Duration::from_secs(2),
        )
        .unwrap();

        let (tx, mut rx) = spawn_api_service(client);
        tx.send(ApiRequest::FetchPage {
            generation: 7,
            page: 3,
        })
        .unwrap();

        let response = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("worker should answer")
            .expect("channel open");

        let ApiResponse::PageResult {
            generation,
            page,
            result,
        } = response;
        assert_eq!(generation, 7);
        assert_eq!(page, 3);
        assert!(result.is_err());
    }
}
