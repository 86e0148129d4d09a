use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::DirectoryError;

/// A remote-platform account as returned by the directory API.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Opaque account identifier.
    pub id: String,
    pub username: String,
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
}

/// Client for a Mastodon-compatible directory API. Created once at startup
/// and shared by reference with every handler.
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DirectoryError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DirectoryError::Api {
                status: response.status(),
                path: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Search accounts matching the query string, in the API's result order.
    pub async fn search_accounts(&self, query: &str) -> Result<Vec<Account>, DirectoryError> {
        self.get_json("/api/v1/accounts/search", &[("q", query)]).await
    }

    /// Fetch a single account by its ID.
    pub async fn account(&self, id: &str) -> Result<Account, DirectoryError> {
        self.get_json(&format!("/api/v1/accounts/{id}"), &[]).await
    }

    /// The full account listing, used to offer candidate usernames.
    pub async fn directory(&self) -> Result<Vec<Account>, DirectoryError> {
        self.get_json("/api/v1/directory", &[]).await
    }

    /// Resolve a username to its account ID: the first search match wins.
    /// An empty result set is an error.
    pub async fn resolve_username(&self, username: &str) -> Result<String, DirectoryError> {
        let matches = self.search_accounts(username).await?;
        match matches.into_iter().next() {
            Some(account) => {
                debug!(username, account_id = %account.id, "resolved username");
                Ok(account.id)
            }
            None => Err(DirectoryError::NoMatch(username.to_string())),
        }
    }

    /// Look up the username behind an account ID.
    pub async fn account_username(&self, id: &str) -> Result<String, DirectoryError> {
        Ok(self.account(id).await?.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn account_json(id: &str, username: &str) -> serde_json::Value {
        json!({"id": id, "username": username, "acct": username, "display_name": username})
    }

    #[tokio::test]
    async fn test_resolve_username_takes_first_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/search"))
            .and(query_param("q", "ash"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                account_json("101", "ash"),
                account_json("102", "ashley"),
            ])))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(server.uri(), "test-token");
        assert_eq!(client.resolve_username("ash").await.unwrap(), "101");
    }

    #[tokio::test]
    async fn test_resolve_username_fails_on_empty_result_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(server.uri(), "test-token");
        let result = client.resolve_username("nobody").await;
        assert!(matches!(result, Err(DirectoryError::NoMatch(name)) if name == "nobody"));
    }

    #[tokio::test]
    async fn test_username_id_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/search"))
            .and(query_param("q", "brock"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([account_json("7", "brock")])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_json("7", "brock")))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(server.uri(), "test-token");
        let id = client.resolve_username("brock").await.unwrap();
        assert_eq!(client.account_username(&id).await.unwrap(), "brock");
    }

    #[tokio::test]
    async fn test_unknown_account_id_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Record not found"})))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(server.uri(), "test-token");
        let result = client.account_username("999").await;
        assert!(
            matches!(result, Err(DirectoryError::Api { status, .. }) if status == reqwest::StatusCode::NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn test_directory_lists_accounts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/directory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                account_json("1", "ash"),
                account_json("2", "misty"),
            ])))
            .mount(&server)
            .await;

        let client = DirectoryClient::new(format!("{}/", server.uri()), "test-token");
        let accounts = client.directory().await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].username, "misty");
    }
}
