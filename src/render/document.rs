//! Document-under-test preparation.

use regex::Regex;

/// Wraps a pasted snippet into a complete HTML document.
///
/// A snippet that already carries an `<html>` tag is passed through verbatim;
/// anything else is treated as a body fragment and wrapped with the usual
/// charset and viewport boilerplate.
#[must_use]
pub fn build_document(snippet: &str) -> String {
    let raw = snippet.trim();
    let html_tag_re = Regex::new(r"(?i)<\s*html[\s>]").unwrap();
    if html_tag_re.is_match(raw) {
        return raw.to_string();
    }

    format!(
        "<!doctype html><html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         </head>\n\
         <body>\n\
         {raw}\n\
         </body></html>"
    )
}
