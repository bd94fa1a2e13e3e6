/// A location whose path can be rewritten without touching its other parts.
///
/// The resolver only ever derives copies through [`Resource::with_path`], so
/// scheme, authority and anything else an implementor carries are preserved.
pub trait Resource: Sized {
    fn path(&self) -> &str;

    /// Returns a copy of `self` with the path replaced.
    fn with_path(&self, path: String) -> Self;
}

/// Returns true for POSIX (`/`, `//`), UNC (`\\`) and drive-letter
/// (`C:/`, `C:\`) absolute paths.
pub fn is_absolute_path(path: &str) -> bool {
    match path.as_bytes() {
        [b'/', ..] => true,
        [b'\\', b'\\', ..] => true,
        [drive, b':', b'/' | b'\\', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Collapses `.` and `..` segments and joins the rest with `/`, keeping a
/// leading and a trailing separator. An empty sequence yields `""`.
pub fn normalize_path<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stack: Vec<&str> = Vec::new();
    let mut first: Option<&str> = None;
    let mut last: Option<&str> = None;
    let mut count = 0usize;

    for part in parts {
        if first.is_none() {
            first = Some(part);
        }
        last = Some(part);
        count += 1;

        match part {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(part),
        }
    }

    // Keep the directory marker of a trailing separator
    if count > 1 && last == Some("") {
        stack.push("");
    }

    let joined = stack.join("/");
    if first == Some("") {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Appends the `/`-separated segments of each `extra` path to the path of
/// `base` and normalizes the result.
pub fn join_path<R, S>(base: &R, extra: &[S]) -> R
where
    R: Resource,
    S: AsRef<str>,
{
    let parts = base
        .path()
        .split('/')
        .chain(extra.iter().flat_map(|path| path.as_ref().split('/')));
    let path = normalize_path(parts);
    log::trace!("join_path({:?}) -> {:?}", base.path(), path);
    base.with_path(path)
}

/// Resolves `path` against `base`. An absolute `path` replaces the base path
/// outright.
pub fn resolve_path<R: Resource>(base: &R, path: &str) -> R {
    if is_absolute_path(path) {
        log::debug!("resolve_path: {:?} is absolute, ignoring base", path);
        return base.with_path(normalize_path(path.split('/')));
    }

    join_path(base, &[path])
}
