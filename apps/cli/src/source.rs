//! Where the question bank README comes from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::{parse, ConfigError, Language, ParseError, QuizDocument};
use reqwest::Client;
use thiserror::Error;
use tracing::info;

/// Errors retrieving the raw document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors producing a quiz document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] ParseError),
}

/// Supplies the raw markdown for a language edition.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, language: Language) -> Result<String, FetchError>;
}

/// Downloads README files over HTTP.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, language: Language) -> Result<String, FetchError> {
        let url = language.document_url(&self.base_url);
        info!(%url, "downloading question bank");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

/// Reads a local markdown file, whatever the language.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self, language: Language) -> Result<String, FetchError> {
        info!(path = %self.path.display(), %language, "reading question bank");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::File {
                path: self.path.clone(),
                source,
            })
    }
}

/// Resolve `code`, fetch its document and parse it.
///
/// The language is checked before the source is touched.
pub async fn load_quiz<S>(code: &str, source: &S) -> Result<QuizDocument, LoadError>
where
    S: DocumentSource + ?Sized,
{
    let language = Language::from_code(code)?;
    let body = source.fetch(language).await?;
    Ok(parse(&body, language)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ONE_QUESTION: &str = "Intro\n\n---\n\n###### 1. Pick one\n\nWhich?\n\n- A: this\n- B: that\n\n<details><summary><b>Answer</b></summary>\n<p>\n\n#### Answer: A\n\nThis one.\n\n</p>\n</details>\n\n---\n";

    struct CountingSource {
        body: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DocumentSource for CountingSource {
        async fn fetch(&self, _language: Language) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.to_string())
        }
    }

    fn counting(body: &'static str) -> CountingSource {
        CountingSource {
            body,
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn unsupported_language_never_fetches() {
        let source = counting(ONE_QUESTION);
        let result = load_quiz("zh", &source).await;

        assert!(matches!(result, Err(LoadError::Config(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn loads_and_parses_supported_language() {
        let source = counting(ONE_QUESTION);
        let doc = load_quiz("vi", &source).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(doc.language(), Language::Vi);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get(0).unwrap().answer, 'A');
    }

    #[tokio::test]
    async fn parse_failure_is_fatal() {
        let source = counting("Intro\n---\n###### 1. Broken\n");
        let result = load_quiz("en", &source).await;
        assert!(matches!(result, Err(LoadError::Parse(ParseError::MalformedSection { .. }))));
    }

    #[tokio::test]
    async fn file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_QUESTION.as_bytes()).unwrap();

        let doc = load_quiz("en", &FileSource::new(file.path())).await.unwrap();
        assert_eq!(doc.get(0).unwrap().title, "1. Pick one");
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_quiz("en", &FileSource::new(dir.path().join("nope.md"))).await;
        assert!(matches!(result, Err(LoadError::Fetch(FetchError::File { .. }))));
    }

    /// Serve `ONE_QUESTION` at `/README.md` and 404 everywhere else.
    async fn serve_readme() -> String {
        use axum::{routing::get, Router};

        let app = Router::new().route("/README.md", get(|| async { ONE_QUESTION }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn http_source_fetches_readme() {
        let base = serve_readme().await;
        let doc = load_quiz("en", &HttpSource::new(&base).unwrap()).await.unwrap();
        assert_eq!(doc.get(0).unwrap().title, "1. Pick one");
    }

    #[tokio::test]
    async fn http_error_status_is_a_fetch_error() {
        let base = serve_readme().await;
        let source = HttpSource::new(&format!("{base}/")).unwrap();

        let err = source.fetch(Language::De).await.unwrap_err();
        match err {
            FetchError::Status { status, url } => {
                assert_eq!(status, 404);
                assert_eq!(url, format!("{base}/README-de_DE.md"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn status_error_message() {
        let err = FetchError::Status {
            status: 404,
            url: "https://example.com/README-xx.md".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 fetching https://example.com/README-xx.md");
    }
}
