use rs_readability::{extract, extract_with_options, Options};

const LONG: &str = "Researchers followed the migrating birds for three seasons, tagging more than two hundred of them along the coast.";
const SECOND: &str = "Most of the birds returned to the same wetlands each spring, although a few settled farther north than expected.";

fn options_with_base(url: &str) -> Options {
    Options {
        url: Some(url.to_string()),
        ..Options::default()
    }
}

#[test]
fn html_output_keeps_only_allowed_tags_and_attributes() {
    let html = format!(
        r#"<html><body><div class="article" id="main" style="color:red">
            <p class="lead" data-track="1">{LONG}</p>
            <p><em>Emphasis</em> and <strong>strong</strong> text. {SECOND}</p>
        </div></body></html>"#
    );

    let result = extract(&html);
    match result {
        Ok(result) => {
            assert!(result.content.starts_with("<div>"));
            assert!(result.content.contains("<p>Researchers"));
            assert!(result.content.contains("<p>Emphasis and <strong>strong</strong> text."));
            assert!(!result.content.contains("class="));
            assert!(!result.content.contains("style="));
            assert!(!result.content.contains("<em>"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn relative_links_and_images_are_made_absolute() {
    let html = format!(
        r#"<html><body><div class="article">
            <p>{LONG} <a href="/birds/map.html">See the map.</a></p>
            <p>{SECOND}</p>
            <p>{LONG}</p>
            <img src="images/heron.jpg">
            <a href="https://other.example.org/paper.pdf">Paper</a>
        </div></body></html>"#
    );

    let result = extract_with_options(&html, &options_with_base("https://example.com/news/birds.html"));
    match result {
        Ok(result) => {
            assert!(result.content.contains(r#"<a href="https://example.com/birds/map.html">"#));
            assert!(result.content.contains(r#"<img src="https://example.com/news/images/heron.jpg"/>"#));
            assert!(result.content.contains(r#"<a href="https://other.example.org/paper.pdf">"#));
            assert_eq!(result.url.as_deref(), Some("https://example.com/news/birds.html"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn links_stay_relative_without_base_url() {
    let html = format!(
        r#"<html><body><div class="article"><p>{LONG} <a href="/birds/map.html">map</a></p></div></body></html>"#
    );

    let result = extract(&html);
    match result {
        Ok(result) => {
            assert!(result.content.contains(r#"<a href="/birds/map.html">"#));
            assert!(result.url.is_none());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn void_elements_are_self_closing() {
    let html = "<html><body><p>Line one<br>Line two</p></body></html>";

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.content, "<p>Line one<br/>Line two</p>");
            assert_eq!(result.text_content, "Line one\nLine two");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn text_is_escaped_in_html_output() {
    let html = "<html><body><p>Fish &amp; chips &lt;tasty&gt;</p></body></html>";

    let result = extract(html);
    match result {
        Ok(result) => {
            assert_eq!(result.content, "<p>Fish &amp; chips &lt;tasty&gt;</p>");
            assert_eq!(result.text_content, "Fish & chips <tasty>");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn widgets_and_boilerplate_headers_are_removed() {
    let html = format!(
        r#"<html><body><div class="article">
            <h2 class="share-tools">Share this</h2>
            <h2>Findings</h2>
            <p>{LONG}</p>
            <p>{SECOND}</p>
            <iframe src="https://ads.example.com/frame"></iframe>
            <button>Subscribe</button>
            <object data="movie.swf"></object>
        </div></body></html>"#
    );

    let result = extract(&html);
    match result {
        Ok(result) => {
            assert!(result.content.contains("<h2>Findings</h2>"));
            assert!(!result.content.contains("Share this"));
            assert!(!result.content.contains("Subscribe"));
            assert!(!result.content.contains("iframe"));
            assert!(!result.content.contains("object"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn output_whitespace_is_normalized() {
    let html = format!(
        "<html><body><div class=\"article\">\n\n   <p>{LONG}</p>\n   \n  <p>{SECOND}</p>\n\n</div></body></html>"
    );

    let result = extract(&html);
    match result {
        Ok(result) => {
            assert!(!result.content.contains("  "));
            assert!(!result.content.contains("\n\n"));
            assert!(!result.content.starts_with(char::is_whitespace));
            assert!(!result.content.ends_with(char::is_whitespace));
            assert_eq!(result.text_content.lines().count(), 2);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
