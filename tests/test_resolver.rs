use doorman::site::resolve;

#[test]
fn test_resolve_root_path() {
    assert_eq!(resolve("/"), "index.html");
}

#[test]
fn test_resolve_html_path_strips_leading_slash() {
    assert_eq!(resolve("/about.html"), "about.html");
}

#[test]
fn test_resolve_nested_html_path() {
    assert_eq!(resolve("/docs/guide.html"), "docs/guide.html");
}

#[test]
fn test_resolve_bare_path_appends_default_document() {
    assert_eq!(resolve("/blog"), "blog/index.html");
}

#[test]
fn test_resolve_nested_bare_path() {
    assert_eq!(resolve("/blog/2022"), "blog/2022/index.html");
}

#[test]
fn test_resolve_non_html_extension_gets_default_document() {
    // Only `.html` short-circuits the default-document rule
    assert_eq!(resolve("/style.css"), "style.css/index.html");
}

#[test]
fn test_resolve_does_not_sanitize_traversal() {
    // Documented weakness: `..` passes through to the lookup key untouched
    assert_eq!(resolve("/../secret"), "../secret/index.html");
}
