//! Document reading for the corpus builder.
//!
//! Pages are fetched outside the tool (curl, wget); this module reads the
//! saved files and strips markup from HTML so only visible text reaches the
//! chunker. No HTML parser dependency: the strip is a single scan that drops
//! tags, skips script/style blocks, and decodes the common entities.

use std::path::Path;

use tourbot_core::{Result, TourbotError};

/// Read one document, stripping HTML when the extension says so.
pub fn read_document(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => Ok(strip_html(&raw)),
        Some(_) | None => Ok(raw),
    }
}

/// Extract visible text from an HTML document.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len() / 2);
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('>') else {
            // Unterminated tag: drop the remainder.
            rest = "";
            break;
        };
        let tag = &rest[1..close];
        rest = &rest[close + 1..];

        let name = tag_name(tag);
        match name.as_str() {
            "script" | "style" => {
                // Skip everything up to and including the matching close tag.
                let needle = format!("</{}", name);
                if let Some(end) = rest.to_ascii_lowercase().find(&needle) {
                    let after = &rest[end..];
                    match after.find('>') {
                        Some(gt) => rest = &after[gt + 1..],
                        None => rest = "",
                    }
                } else {
                    rest = "";
                }
            }
            // Block-level boundaries become line breaks so the chunker can
            // split on them.
            "/p" | "/div" | "/li" | "/h1" | "/h2" | "/h3" | "/h4" | "/h5" | "/h6" | "br"
            | "br/" | "/tr" | "/table" | "/ul" | "/ol" => out.push('\n'),
            _ => {}
        }
    }
    out.push_str(rest);

    collapse_blank_lines(&decode_entities(&out))
}

fn tag_name(tag: &str) -> String {
    tag.split(|c: char| c.is_whitespace())
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        out.push_str(line.trim_end());
        blank_run = 0;
    }
    out
}
