use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::path::Resource;

const FILE_SCHEME: &str = "file";

// Schemes whose paths are always rooted
const ROOTED_SCHEMES: &[&str] = &[FILE_SCHEME, "http", "https"];

/// A resource identifier of the form `scheme:[//authority]path[?query][#fragment]`.
///
/// Components are stored verbatim; no percent-decoding takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: String,
    authority: String,
    path: String,
    query: String,
    fragment: String,
}

/// Components to replace when deriving a new [`Uri`] with [`Uri::with`].
/// Components left unset are copied from the original.
#[derive(Debug, Default, Clone)]
pub struct UriChange {
    scheme: Option<String>,
    authority: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '.' | '-'))
}

/// Gives `path` a leading slash under an authority or a hierarchical scheme,
/// and collapses a `//` prefix that would otherwise read as an authority.
fn anchor_path(scheme: &str, authority: &str, path: String) -> String {
    let rooted = !authority.is_empty() || ROOTED_SCHEMES.iter().any(|&name| name == scheme);
    let path = if rooted && !path.is_empty() && !path.starts_with('/') {
        format!("/{}", path)
    } else {
        path
    };

    if authority.is_empty() && path.starts_with("//") {
        format!("/{}", path.trim_start_matches('/'))
    } else {
        path
    }
}

impl Uri {
    pub fn new(
        scheme: impl Into<String>,
        authority: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, Error> {
        let uri = Self {
            scheme: scheme.into(),
            authority: authority.into(),
            path: path.into(),
            query: String::new(),
            fragment: String::new(),
        };
        uri.validate()?;
        Ok(uri)
    }

    /// Parses the textual form of a URI.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let (rest, fragment) = text.split_once('#').unwrap_or((text, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

        // The scheme ends at the first colon, provided no slash comes before it
        let (scheme, rest) = match rest.find([':', '/']) {
            Some(idx) if idx > 0 && rest[idx..].starts_with(':') => (&rest[..idx], &rest[idx + 1..]),
            _ => ("", rest),
        };

        let (authority, path) = match rest.strip_prefix("//") {
            Some(rest) => match rest.find('/') {
                Some(idx) => (&rest[..idx], &rest[idx..]),
                None => (rest, ""),
            },
            None => ("", rest),
        };

        let uri = Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        };
        uri.validate()?;
        log::trace!("parsed {:?} as {:?}", text, uri);
        Ok(uri)
    }

    /// Builds a `file` URI from a filesystem path, accepting either slash
    /// style and UNC `//server/share` paths.
    pub fn file(path: &str) -> Self {
        let path = path.replace('\\', "/");

        let (authority, path) = match path.strip_prefix("//") {
            Some(rest) => match rest.find('/') {
                Some(idx) => (rest[..idx].to_string(), rest[idx..].to_string()),
                None => (rest.to_string(), String::from("/")),
            },
            None => (String::new(), path),
        };

        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        let path = anchor_path(FILE_SCHEME, &authority, path);

        Self {
            scheme: String::from(FILE_SCHEME),
            authority,
            path,
            query: String::new(),
            fragment: String::new(),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if !is_valid_scheme(&self.scheme) {
            return Err(Error::InvalidScheme(self.scheme.clone()));
        }
        if !self.authority.is_empty() {
            if !self.path.is_empty() && !self.path.starts_with('/') {
                return Err(Error::RelativePathWithAuthority);
            }
        } else if self.path.starts_with("//") {
            return Err(Error::DoubleSlashWithoutAuthority);
        }
        Ok(())
    }

    /// Returns a copy with the components named in `change` replaced.
    pub fn with(&self, change: UriChange) -> Result<Self, Error> {
        let uri = Self {
            scheme: change.scheme.unwrap_or_else(|| self.scheme.clone()),
            authority: change.authority.unwrap_or_else(|| self.authority.clone()),
            path: change.path.unwrap_or_else(|| self.path.clone()),
            query: change.query.unwrap_or_else(|| self.query.clone()),
            fragment: change.fragment.unwrap_or_else(|| self.fragment.clone()),
        };
        uri.validate()?;
        Ok(uri)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Resource for Uri {
    fn path(&self) -> &str {
        &self.path
    }

    /// Replaces the path, anchoring it the same way [`Uri::file`] does so
    /// the result stays a valid URI that prints and parses back unchanged.
    fn with_path(&self, path: String) -> Self {
        let path = anchor_path(&self.scheme, &self.authority, path);

        Self {
            path,
            ..self.clone()
        }
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if !self.authority.is_empty() || self.scheme == FILE_SCHEME {
            write!(f, "//{}", self.authority)?;
        }
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}
