use vpath::{
    FileService, MemoryFileService, Resource, Uri, expand_aliased_keys, is_absolute_path,
    join_path, normalize_path, resolve_path,
};

fn id(path: &str) -> Uri {
    Uri::parse("mem://workspace").unwrap().with_path(path.to_string())
}

#[test]
fn normalize_properties() {
    assert_eq!(normalize_path(Vec::<&str>::new()), "");
    assert_eq!(normalize_path(["a", ".", "b"]), "a/b");
    assert_eq!(normalize_path(["a", "..", "b"]), "b");
    assert_eq!(normalize_path(["..", "a"]), "a");
    assert_eq!(normalize_path(["", "a", "b", ""]), "/a/b/");

    let once = normalize_path("/src/lib/mod.rs".split('/'));
    assert_eq!(normalize_path(once.split('/')), once);
}

#[test]
fn absolute_paths() {
    assert!(is_absolute_path("/a/b"));
    assert!(is_absolute_path("C:/a"));
    assert!(is_absolute_path("\\\\server\\share"));
    assert!(!is_absolute_path("a/b"));
    assert!(!is_absolute_path("C:a"));
}

#[test]
fn join_and_resolve() {
    assert_eq!(join_path(&id("/a/b"), &["../c"]).path(), "/a/c");
    assert_eq!(resolve_path(&id("/a/b"), "/x/y").path(), "/x/y");
    assert_eq!(resolve_path(&id("/a/b"), "c/../d").path(), "/a/b/d");

    let resolved = resolve_path(&id("/a/b"), "/x/y");
    assert_eq!(resolved.scheme(), "mem");
    assert_eq!(resolved.authority(), "workspace");
}

#[test]
fn stylesheet_import_lookup() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut fs = MemoryFileService::new();
    let root = Uri::parse("mem://workspace/site").unwrap();
    fs.insert_file(&join_path(&root, &["styles", "base.css"]), "html {}")
        .unwrap();

    let page_dir = join_path(&root, &["pages", "blog"]);
    let data = fs.read_file_at(&page_dir, "../../styles/base.css").unwrap();
    assert_eq!(data, b"html {}");

    let stat = fs.stat(&resolve_path(&page_dir, "/site/styles")).unwrap();
    assert!(stat.is_directory());
}

#[test]
fn snippet_aliases() {
    let expanded = expand_aliased_keys([("btn|button", "<button>"), ("a", "<a>")]);
    assert_eq!(expanded["btn"], "<button>");
    assert_eq!(expanded["button"], "<button>");
    assert_eq!(expanded["a"], "<a>");
}
