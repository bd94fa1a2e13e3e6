pub mod error;
pub mod path;
pub mod service;
pub mod snippets;
pub mod stat;
pub mod uri;

pub use error::Error;
pub use path::{Resource, is_absolute_path, join_path, normalize_path, resolve_path};
pub use service::{FileService, MemoryFileService};
pub use snippets::{SyntaxKind, expand_aliased_keys};
pub use stat::{FileStat, FileType};
pub use uri::{Uri, UriChange};
