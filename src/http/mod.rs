use crate::{
    config::GithubConfig,
    error::{Error, Result},
};
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }

    /// Issues a GET against `url` and returns the whole body.
    ///
    /// Any status >= 400 fails with [`Error::HttpStatusError`] before the
    /// body is read. The response is owned here and released on every path.
    pub async fn get_bytes(&self, url: &str, config: &GithubConfig) -> Result<Vec<u8>> {
        let request = self
            .get(url)
            .default_headers(config)
            .build()
            .map_err(|cause| Error::IoError {
                message: format!("Failed to build request for {}", url),
                cause: Box::new(cause),
            })?;

        log::debug!("GET {}", request.url());

        let response = self
            .execute(request)
            .await
            .map_err(|cause| Error::NetworkError { cause })?;

        let status = response.status();
        log::debug!("{} responded with {}", url, status);

        if status.as_u16() >= 400 {
            return Err(Error::HttpStatusError {
                status: status.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|cause| Error::IoError {
            message: "Failed to read response body".to_owned(),
            cause: Box::new(cause),
        })?;

        Ok(bytes.to_vec())
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, config: &GithubConfig) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, config: &GithubConfig) -> RequestBuilder {
        self.header(ACCEPT, &config.accept)
            .header(USER_AGENT, &config.user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::io::{self, Write};

    #[tokio::test]
    async fn should_send_api_headers_and_return_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("GET", "/")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("user-agent", "gitter")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = HttpClient::new()
            .get_bytes(&url, &GithubConfig::default())
            .await?;

        mock.assert_async().await;
        assert_eq!(response, expected_body.as_bytes());

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_with_status_line_on_client_error() {
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .with_status(403)
            .with_body("rate limited")
            .create_async()
            .await;

        let result = HttpClient::new()
            .get_bytes(&url, &GithubConfig::default())
            .await;

        mock.assert_async().await;
        match result {
            Err(Error::HttpStatusError { status }) => assert_eq!(status, "403 Forbidden"),
            other => panic!("expected HttpStatusError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_fail_with_status_line_on_server_error() {
        let mut server = Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let result = HttpClient::new()
            .get_bytes(&url, &GithubConfig::default())
            .await;

        assert!(matches!(
            result,
            Err(Error::HttpStatusError { status }) if status == "500 Internal Server Error"
        ));
    }

    #[tokio::test]
    async fn should_fail_with_network_error_when_nothing_listens() {
        let result = HttpClient::new()
            .get_bytes("http://127.0.0.1:1/", &GithubConfig::default())
            .await;

        assert!(matches!(result, Err(Error::NetworkError { .. })));
    }

    #[tokio::test]
    async fn should_fail_with_io_error_when_request_cannot_be_built() {
        let result = HttpClient::new()
            .get_bytes("not a url/repos/x/y", &GithubConfig::default())
            .await;

        assert!(matches!(result, Err(Error::IoError { .. })));
    }

    #[tokio::test]
    async fn should_fail_with_io_error_when_body_is_cut_short() {
        let mut server = Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_chunked_body(|w| {
                w.write_all(b"{\"tarball")?;
                Err(io::Error::new(io::ErrorKind::Other, "connection dropped"))
            })
            .create_async()
            .await;

        let result = HttpClient::new()
            .get_bytes(&url, &GithubConfig::default())
            .await;

        match result {
            Err(Error::IoError { message, .. }) => {
                assert_eq!(message, "Failed to read response body")
            }
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
