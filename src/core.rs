//! 核心类型：文档、错误以及逐文档的流处理约定
//!
//! 每个转换（内联或压缩）都实现 [`DocumentTransform`]，由 [`run_stream`]
//! 逐个文档调用。文档之间不共享任何状态。

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Represents errors that can occur while transforming a document
#[derive(Debug, Error)]
pub enum InternalizeError {
    /// 未知的转换类型
    #[error("Type must be [css|js|angular-template|resources|translations], got \"{0}\"")]
    UnsupportedTransformKind(String),

    /// 非缓冲区文档（例如已经是流）
    #[error("Only Buffer format is supported: {}", path.display())]
    UnsupportedPayloadKind { path: PathBuf },

    /// 引用的资源缺失或不可读
    #[error("failed to read \"{}\": {source}", path.display())]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid glob pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to expand glob: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("codec error: {0}")]
    Codec(String),

    #[error("invalid configuration \"{}\": {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl InternalizeError {
    /// Whether the stream may keep going after this error.
    ///
    /// Unsupported selectors and payloads only drop the offending document;
    /// everything else aborts the build.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InternalizeError::UnsupportedTransformKind(_)
                | InternalizeError::UnsupportedPayloadKind { .. }
        )
    }

    pub(crate) fn read_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        InternalizeError::FileReadFailure {
            path: path.into(),
            source,
        }
    }
}

pub type InternalizeResult<T> = Result<T, InternalizeError>;

/// Contents carried by a [`Document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// 空文档，原样透传
    Null,
    /// 目录，原样透传
    Directory,
    /// In-memory bytes, the only payload a transform rewrites
    Buffer(Vec<u8>),
    /// Streamed contents, rejected with `UnsupportedPayloadKind`
    Stream,
}

/// A single document travelling through the stream: an identity plus its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub payload: Payload,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, payload: Payload) -> Self {
        Self {
            path: path.into(),
            payload,
        }
    }

    pub fn buffer(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self::new(path, Payload::Buffer(contents.into()))
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Payload::Directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the buffered bytes, if this document carries any
    pub fn contents(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Buffer contents decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> Option<String> {
        self.contents()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Builds the replacement document: same identity, new contents
    pub fn with_contents(&self, contents: impl Into<Vec<u8>>) -> Self {
        Self::buffer(self.path.clone(), contents)
    }

    /// Null and directory documents are never transformed
    pub fn is_passthrough(&self) -> bool {
        matches!(self.payload, Payload::Null | Payload::Directory)
    }
}

/// A per-document transformation
///
/// `Ok(Some(doc))` re-emits a document, `Ok(None)` drops it silently.
pub trait DocumentTransform {
    fn transform(&self, document: Document) -> InternalizeResult<Option<Document>>;
}

impl<F> DocumentTransform for F
where
    F: Fn(Document) -> InternalizeResult<Option<Document>>,
{
    fn transform(&self, document: Document) -> InternalizeResult<Option<Document>> {
        self(document)
    }
}

/// Result of pushing a batch of documents through a transform
#[derive(Debug, Default)]
pub struct StreamOutcome {
    /// Documents re-emitted by the transform, in input order
    pub documents: Vec<Document>,
    /// Documents dropped because of a recoverable error
    pub rejected: Vec<(PathBuf, InternalizeError)>,
}

impl StreamOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Feeds every document through `transform`, one at a time
///
/// Recoverable errors are reported and the document is dropped; the stream
/// then continues. Any other error aborts and is returned to the caller.
pub fn run_stream<T, I>(transform: &T, documents: I) -> InternalizeResult<StreamOutcome>
where
    T: DocumentTransform + ?Sized,
    I: IntoIterator<Item = Document>,
{
    let mut outcome = StreamOutcome::default();

    for document in documents {
        let path = document.path.clone();
        match transform.transform(document) {
            Ok(Some(document)) => outcome.documents.push(document),
            Ok(None) => {}
            Err(e) if e.is_recoverable() => {
                tracing::warn!("dropping {}: {}", path.display(), e);
                outcome.rejected.push((path, e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
