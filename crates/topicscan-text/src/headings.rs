use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use topicscan_core::config::HeadingLevels;
use topicscan_core::traits::StructuralExtractor;
use topicscan_core::types::HeadingSegment;

// One pattern per level: an opening tag only pairs with a closing tag of its own level.
static HEADING_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	(1..=6).map(|n| Regex::new(&format!(r"(?is)<h{n}\b[^>]*>(.*?)</h{n}\s*>")).expect("heading regex")).collect()
});
static INNER_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("inner tag regex"));
static ENTITY_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("entity regex"));

/// Finds `<h1>`..`<h6>` elements whose level falls inside the configured range.
///
/// Each heading counts on its own; nesting under a higher-level heading is not
/// considered. Headings with no text are still returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlHeadingExtractor {
	levels: HeadingLevels,
}

impl HtmlHeadingExtractor {
	pub fn new(levels: HeadingLevels) -> Self { Self { levels } }
}

impl StructuralExtractor for HtmlHeadingExtractor {
	fn extract_top_level_headings(&self, text: &str) -> Vec<HeadingSegment> {
		let mut found: Vec<(usize, u8, String)> = Vec::new();
		for (re, level) in HEADING_RES.iter().zip(1u8..) {
			if !self.levels.contains(level) { continue; }
			for caps in re.captures_iter(text) {
				let start = caps.get(0).map_or(0, |m| m.start());
				found.push((start, level, heading_text(&caps[1])));
			}
		}
		found.sort_by_key(|(start, _, _)| *start);
		let segments: Vec<HeadingSegment> = found
			.into_iter()
			.enumerate()
			.map(|(position, (_, level, text))| HeadingSegment { position, level, text })
			.collect();
		debug!(headings = segments.len(), min = self.levels.min, max = self.levels.max, "extracted top-level headings");
		segments
	}
}

fn heading_text(inner: &str) -> String {
	let without_tags = INNER_TAG_RE.replace_all(inner, " ");
	let decoded = ENTITY_RE.replace_all(&without_tags, |caps: &Captures| decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string()));
	decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(name: &str) -> Option<String> {
	let decoded = match name {
		"amp" => '&',
		"lt" => '<',
		"gt" => '>',
		"quot" => '"',
		"apos" => '\'',
		"nbsp" => ' ',
		_ => {
			let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
				u32::from_str_radix(hex, 16).ok()?
			} else {
				name.strip_prefix('#')?.parse().ok()?
			};
			char::from_u32(code)?
		}
	};
	Some(decoded.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_named_and_numeric_entities() {
		assert_eq!(heading_text("Cats &amp; dogs &#38; &#x26; &hellip;"), "Cats & dogs & & &hellip;");
	}

	#[test]
	fn inner_tags_become_word_breaks() {
		assert_eq!(heading_text("  <em>Black</em><br/>cat \n care "), "Black cat care");
	}
}
