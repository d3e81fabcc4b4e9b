use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    NetworkError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("{status}")]
    HttpStatusError { status: String },
    #[error("{message}")]
    IoError {
        message: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Failed to parse response")]
    DecodeError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("no {archive} found for repository {repo}")]
    NotFoundError { archive: &'static str, repo: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_the_status_line() {
        let err = Error::HttpStatusError {
            status: "404 Not Found".to_owned(),
        };

        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn should_name_the_repository_when_no_tarball_exists() {
        let err = Error::NotFoundError {
            archive: "tarball",
            repo: "lineman".to_owned(),
        };

        assert_eq!(err.to_string(), "no tarball found for repository lineman");
    }

    #[test]
    fn should_keep_the_parser_diagnostic_as_source() {
        let cause = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        let diagnostic = cause.to_string();
        let err = Error::DecodeError { cause };

        let source = std::error::Error::source(&err).map(|s| s.to_string());

        assert_eq!(source, Some(diagnostic));
    }
}
