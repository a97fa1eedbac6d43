/// Maps a request path to the relative key a page is looked up under.
///
/// `/` becomes `index.html`; any other path not already ending in `.html`
/// gets `/index.html` appended; the leading `/` is stripped last so the
/// key is relative.
///
/// The key is used verbatim by the store. No traversal sanitization is
/// applied, so a path containing `..` escapes the site root. Known
/// weakness; do not point a `DirSite` at a directory with secrets nearby.
pub fn resolve(path: &str) -> String {
    let mut key = path.to_string();

    if key == "/" {
        key = "index.html".to_string();
    } else if !key.ends_with(".html") {
        key.push_str("/index.html");
    }

    if let Some(stripped) = key.strip_prefix('/') {
        key = stripped.to_string();
    }

    key
}
