use std::future::Future;

use tracing::{debug, info};

use self::response::Event;
use crate::{response::IntoResponse, Client, FetchError};

pub mod response;

/// Source of a user's public events, most recent first.
pub trait ActivitySource {
    fn fetch(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<Event>, FetchError>> + Send;
}

impl Client {
    #[tracing::instrument(skip(self))]
    pub async fn fetch_activity(
        &self,
        username: &str,
    ) -> Result<Vec<Event>, FetchError> {
        info!(task = "fetch activity", username);

        let result = self.load_events(username).await;
        if let Err(e) = &result {
            debug!(task = "fetch activity", username, err = e.detail());
        }

        result
    }

    async fn load_events(
        &self,
        username: &str,
    ) -> Result<Vec<Event>, FetchError> {
        let url = self.url(&["users", username, "events"])?;

        let text = self.get(url).await?;

        serde_json::from_str::<Vec<Event>>(&text)
            .into_response("failed to parse events")
    }
}

impl ActivitySource for Client {
    async fn fetch(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        self.fetch_activity(username).await
    }
}
