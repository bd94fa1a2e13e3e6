use std::collections::HashMap;
use std::time::SystemTime;

use crate::error::Error;
use crate::path::{normalize_path, resolve_path};
use crate::stat::{FileStat, FileType, systemtime_to_millis};
use crate::uri::Uri;

/// Read access to the resources an editor host exposes.
pub trait FileService {
    fn read_file(&self, uri: &Uri) -> Result<Vec<u8>, Error>;

    fn stat(&self, uri: &Uri) -> Result<FileStat, Error>;

    /// Reads `path` resolved against the directory `base`. Absolute paths
    /// replace the path of `base` but keep its scheme and authority.
    fn read_file_at(&self, base: &Uri, path: &str) -> Result<Vec<u8>, Error> {
        let uri = resolve_path(base, path);
        log::debug!("read_file_at({}, {:?}) -> {}", base, path, uri);
        self.read_file(&uri)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EntryKey {
    scheme: String,
    authority: String,
    path: String,
}

impl EntryKey {
    fn from_uri(uri: &Uri) -> Self {
        // Entries are always rooted, and a trailing separator names the same entry
        let normalized = normalize_path(uri.path().split('/'));
        Self {
            scheme: uri.scheme().to_string(),
            authority: uri.authority().to_string(),
            path: format!("/{}", normalized.trim_matches('/')),
        }
    }

    fn parent(&self) -> Option<Self> {
        let parent = match self.path.rfind('/')? {
            _ if self.path == "/" => return None,
            0 => "/",
            idx => &self.path[..idx],
        };
        Some(Self {
            path: parent.to_string(),
            ..self.clone()
        })
    }

    fn ancestors(&self) -> impl Iterator<Item = EntryKey> {
        std::iter::successors(self.parent(), |key| key.parent())
    }
}

#[derive(Debug)]
enum Entry {
    File {
        data: Vec<u8>,
        ctime: u64,
        mtime: u64,
    },
    Directory {
        ctime: u64,
    },
}

impl Entry {
    fn stat(&self) -> FileStat {
        match self {
            Entry::File { data, ctime, mtime } => FileStat {
                file_type: FileType::File,
                ctime: *ctime,
                mtime: *mtime,
                size: data.len() as u64,
            },
            Entry::Directory { ctime } => FileStat {
                file_type: FileType::Directory,
                ctime: *ctime,
                mtime: *ctime,
                size: 0,
            },
        }
    }
}

/// A [`FileService`] backed by an in-memory map, keyed by scheme, authority
/// and normalized path.
#[derive(Debug, Default)]
pub struct MemoryFileService {
    entries: HashMap<EntryKey, Entry>,
}

impl MemoryFileService {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_parents(&mut self, key: &EntryKey, now: u64) -> Result<(), Error> {
        let ancestors: Vec<EntryKey> = key.ancestors().collect();
        if ancestors
            .iter()
            .any(|parent| matches!(self.entries.get(parent), Some(Entry::File { .. })))
        {
            return Err(Error::NotADirectory);
        }

        for parent in ancestors {
            self.entries
                .entry(parent)
                .or_insert(Entry::Directory { ctime: now });
        }
        Ok(())
    }

    /// Stores a file, creating any missing parent directories. Replacing an
    /// existing file keeps its creation time.
    pub fn insert_file(&mut self, uri: &Uri, data: impl Into<Vec<u8>>) -> Result<(), Error> {
        let key = EntryKey::from_uri(uri);
        let now = systemtime_to_millis(SystemTime::now());

        let ctime = match self.entries.get(&key) {
            Some(Entry::Directory { .. }) => return Err(Error::IsADirectory),
            Some(Entry::File { ctime, .. }) => *ctime,
            None => now,
        };
        self.ensure_parents(&key, now)?;

        log::debug!("insert_file({})", uri);
        self.entries.insert(
            key,
            Entry::File {
                data: data.into(),
                ctime,
                mtime: now,
            },
        );
        Ok(())
    }

    pub fn insert_dir(&mut self, uri: &Uri) -> Result<(), Error> {
        let key = EntryKey::from_uri(uri);
        let now = systemtime_to_millis(SystemTime::now());

        if let Some(Entry::File { .. }) = self.entries.get(&key) {
            return Err(Error::NotADirectory);
        }
        self.ensure_parents(&key, now)?;

        log::debug!("insert_dir({})", uri);
        self.entries
            .entry(key)
            .or_insert(Entry::Directory { ctime: now });
        Ok(())
    }

    fn lookup(&self, uri: &Uri) -> Result<&Entry, Error> {
        let key = EntryKey::from_uri(uri);
        match self.entries.get(&key) {
            Some(entry) => Ok(entry),
            None => {
                log::debug!("{} not found", uri);
                Err(Error::NotFound)
            }
        }
    }
}

impl FileService for MemoryFileService {
    fn read_file(&self, uri: &Uri) -> Result<Vec<u8>, Error> {
        match self.lookup(uri)? {
            Entry::File { data, .. } => Ok(data.clone()),
            Entry::Directory { .. } => Err(Error::IsADirectory),
        }
    }

    fn stat(&self, uri: &Uri) -> Result<FileStat, Error> {
        Ok(self.lookup(uri)?.stat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn service() -> MemoryFileService {
        let mut fs = MemoryFileService::new();
        fs.insert_file(&Uri::file("/project/index.html"), "<link href=\"main.css\">")
            .unwrap();
        fs.insert_file(&Uri::file("/project/css/main.css"), "body {}")
            .unwrap();
        fs.insert_dir(&Uri::file("/project/empty")).unwrap();
        fs
    }

    #[test]
    fn read_inserted_files() {
        init();
        let fs = service();
        let data = fs.read_file(&Uri::file("/project/css/main.css")).unwrap();
        assert_eq!(data, b"body {}");

        // Lookups normalize the path first
        let data = fs.read_file(&Uri::file("/project/./css/../css/main.css/")).unwrap();
        assert_eq!(data, b"body {}");
    }

    #[test]
    fn parents_are_implicit_directories() {
        init();
        let fs = service();
        for path in ["/", "/project", "/project/css", "/project/empty"] {
            let stat = fs.stat(&Uri::file(path)).unwrap();
            assert!(stat.is_directory(), "{}", path);
            assert_eq!(stat.size, 0);
        }

        let stat = fs.stat(&Uri::file("/project/index.html")).unwrap();
        assert!(stat.is_file());
        assert_eq!(stat.size, 22);
        assert!(stat.mtime >= stat.ctime);
    }

    #[test]
    fn lookup_errors() {
        init();
        let mut fs = service();
        assert!(matches!(
            fs.read_file(&Uri::file("/project/missing.css")),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            fs.read_file(&Uri::file("/project/css")),
            Err(Error::IsADirectory)
        ));
        assert!(matches!(
            fs.insert_file(&Uri::file("/project/index.html/x"), "x"),
            Err(Error::NotADirectory)
        ));
        assert!(matches!(
            fs.insert_dir(&Uri::file("/project/index.html")),
            Err(Error::NotADirectory)
        ));
        assert!(matches!(
            fs.insert_file(&Uri::file("/project/css"), "x"),
            Err(Error::IsADirectory)
        ));
    }

    #[test]
    fn entries_are_scoped_by_scheme_and_authority() {
        init();
        let fs = service();
        let other = Uri::parse("mem:/project/index.html").unwrap();
        assert!(matches!(fs.stat(&other), Err(Error::NotFound)));

        let unc = Uri::file("//server/project/index.html");
        assert!(matches!(fs.stat(&unc), Err(Error::NotFound)));
    }

    #[test]
    fn read_relative_to_directory() {
        init();
        let fs = service();
        let dir = Uri::file("/project/css");
        assert_eq!(fs.read_file_at(&dir, "main.css").unwrap(), b"body {}");
        assert_eq!(
            fs.read_file_at(&dir, "../index.html").unwrap(),
            b"<link href=\"main.css\">"
        );
        assert_eq!(
            fs.read_file_at(&Uri::file("/elsewhere"), "/project/css/main.css")
                .unwrap(),
            b"body {}"
        );
    }

    #[test]
    fn replacing_a_file_keeps_ctime() {
        init();
        let mut fs = service();
        let uri = Uri::file("/project/css/main.css");
        let before = fs.stat(&uri).unwrap();
        fs.insert_file(&uri, "a {}").unwrap();
        let after = fs.stat(&uri).unwrap();
        assert_eq!(after.ctime, before.ctime);
        assert_eq!(after.size, 4);
        assert_eq!(fs.read_file(&uri).unwrap(), b"a {}");
    }
}
