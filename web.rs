//! Optional HTML-fetching capability for URL mode.
//!
//! Compiled in via the `web` feature (on by default). Without it,
//! [`fetch_and_extract_text`] still exists but fails with
//! `DependencyMissing`, so source dispatch stays uniform.

use std::time::Duration;

use url::Url;

use crate::error::Result;

#[cfg(feature = "web")]
pub fn fetch_and_extract_text(url: &Url, timeout: Duration) -> Result<String> {
    use reqwest::blocking::Client;

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("kwdensity/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let body = client.get(url.clone()).send()?.error_for_status()?.text()?;
    Ok(strip_tags(&body))
}

#[cfg(not(feature = "web"))]
pub fn fetch_and_extract_text(_url: &Url, _timeout: Duration) -> Result<String> {
    Err(crate::error::DensityError::DependencyMissing)
}

/// Strip HTML tags using html5ever+RcDom, skipping script/style/noscript
/// content. Entities are decoded by the parser; whitespace runs collapse to
/// single spaces.
#[cfg(feature = "web")]
fn strip_tags(input: &str) -> String {
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::{Handle, NodeData, RcDom};

    let dom: RcDom = parse_document(RcDom::default(), Default::default()).one(input);
    fn recurse(handle: &Handle, out: &mut String) {
        if let NodeData::Element { name, .. } = &handle.data {
            let tag = name.local.as_ref();
            if tag.eq_ignore_ascii_case("script")
                || tag.eq_ignore_ascii_case("style")
                || tag.eq_ignore_ascii_case("noscript")
            {
                return;
            }
        }
        if let NodeData::Text { contents } = &handle.data {
            out.push_str(&contents.borrow());
            out.push(' ');
        }
        for child in handle.children.borrow().iter() {
            recurse(child, out);
        }
    }
    let mut text = String::new();
    recurse(&dom.document, &mut text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
