//! HTML tag-name harvester
//!
//! Builds the `tags.hpp` header the parser uses to recognise element names,
//! from the element tables of the MDN HTML reference. The page is fetched
//! once; every failure aborts before anything is written.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::HarvestError;
use crate::pattern::compiled;

/// MDN's HTML element reference
pub const DEFAULT_TAGS_URL: &str = "https://developer.mozilla.org/en/docs/Web/HTML/Element";

/// Entries the reference lists as a range instead of a tag
const BLACKLIST: &[&str] = &["h1–h6"];

/// Tags the blacklisted range stands for
const SUPPLEMENTAL: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

const TABLE_PATTERN: &str = r#"(?s)<table\b[^>]*class="[^"]*\bstandard-table\b[^"]*"[^>]*>(.*?)</table>"#;
const ANCHOR_PATTERN: &str = r"(?s)<a\b[^>]*>(.*?)</a>";
const CODE_PATTERN: &str = r"(?s)<code\b[^>]*>(.*?)</code>";

static TABLE_RE: OnceLock<Regex> = OnceLock::new();
static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();
static CODE_RE: OnceLock<Regex> = OnceLock::new();

/// Sorted, deduplicated tag names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFile {
    tags: Vec<String>,
}

impl TagFile {
    /// Blacklist, supplement, dedupe and sort raw tag names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.is_empty() && !BLACKLIST.contains(&name.as_str()))
            .chain(SUPPLEMENTAL.iter().map(|s| s.to_string()))
            .collect();

        Self {
            tags: tags.into_iter().collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Serialize as a C++ header
    pub fn render(&self) -> String {
        let mut output = String::from("#ifndef SEE_PHIT_TAGS_HPP\n#define SEE_PHIT_TAGS_HPP\n\n");
        output.push_str("constexpr const char *tags[] = {\n");
        for tag in &self.tags {
            output.push_str(&format!("  \"{}\",\n", tag));
        }
        output.push_str("};\n\n");
        output.push_str("#endif\n");
        output
    }
}

/// Fetch `url` and build the tag file.
pub fn harvest_tags(url: &str) -> Result<TagFile, HarvestError> {
    let html = fetch_page(url)?;
    let names = extract_tags(&html)?;
    if names.is_empty() {
        return Err(HarvestError::NoMatch {
            url: url.to_string(),
        });
    }
    Ok(TagFile::new(names))
}

/// GET the page body; non-2xx statuses count as network failures.
pub fn fetch_page(url: &str) -> Result<String, HarvestError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| HarvestError::Network(e.to_string()))?;
    response
        .into_string()
        .map_err(|e| HarvestError::Network(format!("failed to read response body: {}", e)))
}

/// Text of every `.standard-table a code` element, split into tag names.
///
/// Cells read like `&lt;abbr&gt;`; a cell may hold several `<name>` tokens.
/// The `<code>` may sit anywhere inside the link.
pub fn extract_tags(html: &str) -> Result<Vec<String>, HarvestError> {
    let table_re = compiled(&TABLE_RE, TABLE_PATTERN)?;
    let anchor_re = compiled(&ANCHOR_RE, ANCHOR_PATTERN)?;
    let code_re = compiled(&CODE_RE, CODE_PATTERN)?;

    let mut names = Vec::new();
    let anchors = table_re
        .captures_iter(html)
        .filter_map(|table| table.get(1))
        .flat_map(|body| anchor_re.captures_iter(body.as_str()))
        .filter_map(|anchor| anchor.get(1));
    for anchor in anchors {
        for code in code_re.captures_iter(anchor.as_str()) {
            let Some(text) = code.get(1) else {
                continue;
            };
            let text = decode_entities(text.as_str());
            names.extend(
                text.split('>')
                    .filter_map(|token| token.rsplit('<').next())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            );
        }
    }
    Ok(names)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
