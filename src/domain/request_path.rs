use unicode_segmentation::UnicodeSegmentation;

const MAX_PATH_LENGTH: usize = 2048;

/// A navigation path split into its non-empty segments.
///
/// Query strings and fragments are dropped, and leading, trailing or doubled
/// slashes do not produce segments, so `/admin/`, `admin` and `/admin` parse
/// to the same value. Segments are percent-decoded (`log%69n` is `login`) and
/// compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPath(Vec<String>);

impl RequestPath {
    pub fn parse(path: &str) -> Result<RequestPath, RequestPathError> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path.graphemes(true).count() > MAX_PATH_LENGTH {
            return Err(RequestPathError::TooLong);
        }

        let mut segments = Vec::new();
        for raw in path.split('/').filter(|s| !s.is_empty()) {
            let segment = urlencoding::decode(raw)
                .map_err(|_| RequestPathError::InvalidEncoding(raw.to_string()))?;
            if segment.contains('/') {
                return Err(RequestPathError::InvalidEncoding(raw.to_string()));
            }
            if segment.chars().any(char::is_control) {
                return Err(RequestPathError::ControlCharacter);
            }
            if segment == "." || segment == ".." {
                return Err(RequestPathError::DotSegment(segment.into_owned()));
            }
            segments.push(segment.into_owned());
        }
        Ok(Self(segments))
    }

    pub fn root() -> RequestPath {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `prefix` matches the leading segments of this path.
    pub fn starts_with(&self, prefix: &RequestPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// The segments left once `prefix` is removed, if it is a prefix at all.
    pub fn strip_prefix(&self, prefix: &RequestPath) -> Option<RequestPath> {
        self.0
            .strip_prefix(prefix.0.as_slice())
            .map(|rest| Self(rest.to_vec()))
    }

    pub fn join(&self, other: &RequestPath) -> RequestPath {
        let mut segments = self.0.clone();
        segments.extend(other.0.iter().cloned());
        Self(segments)
    }
}

impl std::fmt::Display for RequestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RequestPathError {
    #[error("Invalid path, longer than 2048 characters")]
    TooLong,
    #[error("Invalid path, control characters are not allowed")]
    ControlCharacter,
    #[error("Invalid path, `{0}` segments are not allowed")]
    DotSegment(String),
    #[error("Invalid path, `{0}` is not a valid percent-encoded segment")]
    InvalidEncoding(String),
}
