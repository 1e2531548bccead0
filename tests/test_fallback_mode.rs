use opengraph::{parse_html, OpenGraph};

const PLAIN_PAGE: &str = r#"
    <html>
    <head>
        <title>Hello</title>
        <meta property="description" content="  Described by property  ">
    </head>
    <body><p>No Open Graph here</p></body>
    </html>
"#;

fn with_fallbacks() -> OpenGraph {
    OpenGraph::builder().fallback_mode(true).build().unwrap()
}

#[test]
fn test_fallbacks_fill_missing_fields() {
    let object = with_fallbacks()
        .load_html(PLAIN_PAGE, Some("https://example.com/hello"))
        .unwrap();

    assert_eq!(object.title(), Some("Hello"));
    assert_eq!(object.description(), Some("Described by property"));
    assert_eq!(object.url(), Some("https://example.com/hello"));
}

#[test]
fn test_fallbacks_disabled_by_default() {
    let object = parse_html(PLAIN_PAGE, Some("https://example.com/hello")).unwrap();

    assert_eq!(object.title(), None);
    assert_eq!(object.description(), None);
    assert_eq!(object.url(), None);
}

#[test]
fn test_url_stays_unset_without_fallback_url() {
    let object = with_fallbacks().load_html(PLAIN_PAGE, None).unwrap();

    assert_eq!(object.title(), Some("Hello"));
    assert_eq!(object.url(), None);
}

#[test]
fn test_og_values_are_kept() {
    let html = r#"
        <html><head>
            <title>Document title</title>
            <meta property="description" content="Document description">
            <meta property="og:title" content="OG title">
            <meta property="og:url" content="https://example.com/canonical">
        </head></html>
    "#;
    let object = with_fallbacks()
        .load_html(html, Some("https://example.com/fetched?ref=1"))
        .unwrap();

    assert_eq!(object.title(), Some("OG title"));
    assert_eq!(object.url(), Some("https://example.com/canonical"));
    assert_eq!(object.description(), Some("Document description"));
}

#[test]
fn test_name_description_is_ignored() {
    let html = r#"
        <html><head>
            <meta name="description" content="Common practice, not consulted">
        </head></html>
    "#;
    let object = with_fallbacks().load_html(html, None).unwrap();

    assert_eq!(object.description(), None);
    assert_eq!(object.title(), None);
}

#[test]
fn test_empty_title_and_description_stay_unset() {
    let html = r#"
        <html><head>
            <title></title>
            <meta property="description" content="">
        </head></html>
    "#;
    let object = with_fallbacks()
        .load_html(html, Some("https://example.com/empty"))
        .unwrap();

    assert_eq!(object.title(), None);
    assert_eq!(object.description(), None);
    assert_eq!(object.url(), Some("https://example.com/empty"));
}
