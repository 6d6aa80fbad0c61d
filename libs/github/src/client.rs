use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Url,
};

use crate::{response::IntoResponse, Config, FetchError, USER_AGENT};

#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            FetchError::InvalidUrl {
                message: format!(
                    "failed to parse base_url {}: {}",
                    config.base_url, e
                ),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                message: format!("base_url {} cannot be a base", base_url),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .into_response("failed to build http client")?;

        Ok(Self { base_url, client })
    }

    /// Appends `segments` to the base url, percent-encoding each one.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()
            .into_response("base_url cannot be a base")?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub(crate) async fn get(&self, url: Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .into_response("failed to send")?;

        let status = response.status();

        let text = response.text().await.into_response("failed to get text")?;

        if !status.is_success() {
            return Err(FetchError::FailedStatusCode {
                status_code: status,
                message: text,
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod test {
    use crate::{Config, FetchError};

    use super::Client;

    fn client(base_url: &str) -> Result<Client, FetchError> {
        Client::new(&Config {
            base_url: base_url.to_string(),
        })
    }

    #[test]
    fn test_url_appends_segments() {
        let client = client("https://api.github.com").unwrap();

        let url = client.url(&["users", "octocat", "events"]).unwrap();

        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/events");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = client("https://ghe.example.com/api/v3/").unwrap();

        let url = client.url(&["users", "octocat", "events"]).unwrap();

        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/users/octocat/events"
        );
    }

    #[test]
    fn test_url_encodes_username_as_one_segment() {
        let client = client("https://api.github.com").unwrap();

        let url = client.url(&["users", "../orgs/rust", "events"]).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/..%2Forgs%2Frust/events"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(matches!(
            client("not a url"),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            client("mailto:octocat@github.com"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
