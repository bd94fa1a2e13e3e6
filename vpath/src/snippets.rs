use std::collections::BTreeMap;

pub const MARKUP_SYNTAXES: &[&str] = &[
    "html", "xml", "xsl", "jsx", "js", "pug", "slim", "haml", "vue",
];

pub const STYLESHEET_SYNTAXES: &[&str] = &["css", "sass", "scss", "less", "sss", "stylus"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    Markup,
    Stylesheet,
}

impl SyntaxKind {
    pub fn syntaxes(self) -> &'static [&'static str] {
        match self {
            SyntaxKind::Markup => MARKUP_SYNTAXES,
            SyntaxKind::Stylesheet => STYLESHEET_SYNTAXES,
        }
    }

    pub fn of(syntax: &str) -> Option<SyntaxKind> {
        [SyntaxKind::Markup, SyntaxKind::Stylesheet]
            .into_iter()
            .find(|kind| kind.syntaxes().iter().any(|&name| name == syntax))
    }
}

/// Expands keys holding several `|`-separated aliases into one entry per
/// alias. When an alias appears under more than one key, the key visited
/// last wins.
pub fn expand_aliased_keys<I, K, V>(table: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut result = BTreeMap::new();
    for (key, value) in table {
        for name in key.as_ref().split('|') {
            if let Some(previous) = result.insert(name.to_string(), value.as_ref().to_string()) {
                log::trace!("alias {:?} overrides {:?}", name, previous);
            }
        }
    }
    result
}
