use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Kind of entry a [`FileStat`] describes. The discriminants match the
/// numeric values exchanged with editor hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FileType {
    Unknown = 0,
    File = 1,
    Directory = 2,
    SymbolicLink = 64,
}

impl From<u32> for FileType {
    fn from(value: u32) -> Self {
        match value {
            1 => FileType::File,
            2 => FileType::Directory,
            64 => FileType::SymbolicLink,
            _ => FileType::Unknown,
        }
    }
}

impl From<FileType> for u32 {
    fn from(value: FileType) -> Self {
        value as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    pub file_type: FileType,
    /// Creation time in milliseconds since the Unix epoch (UTC)
    pub ctime: u64,
    /// Modification time in milliseconds since the Unix epoch (UTC)
    pub mtime: u64,
    /// Size in bytes
    pub size: u64,
}

fn millis_to_systemtime(millis: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_millis(millis)
}

pub(crate) fn systemtime_to_millis(time: SystemTime) -> u64 {
    // Clocks set before the epoch clamp to it
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl FileStat {
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::SymbolicLink
    }

    pub fn created(&self) -> SystemTime {
        millis_to_systemtime(self.ctime)
    }

    pub fn modified(&self) -> SystemTime {
        millis_to_systemtime(self.mtime)
    }
}
