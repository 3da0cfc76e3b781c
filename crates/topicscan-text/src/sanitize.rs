use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use topicscan_core::traits::Sanitizer;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("script regex"));
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("style regex"));
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?([a-z][a-z0-9]*)\b[^>]*>").expect("tag regex"));

/// Tags that give text its structure; everything else is unwrapped.
const TEXT_TAGS: &[&str] = &[
	"h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "section", "article", "blockquote",
	"ul", "ol", "li", "dl", "dt", "dd", "table", "thead", "tbody", "tr", "td", "th", "br",
];

/// Drops scripts, styles and comments with their content, and unwraps every
/// tag that is not a text-structure tag. An unwrapped tag leaves a space behind
/// so words on either side of it stay separate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl HtmlSanitizer {
	pub fn new() -> Self { Self }

	fn pass(text: &str) -> String {
		let text = SCRIPT_RE.replace_all(text, "");
		let text = STYLE_RE.replace_all(&text, "");
		let text = COMMENT_RE.replace_all(&text, "");
		TAG_RE
			.replace_all(&text, |caps: &Captures| {
				let name = caps[1].to_ascii_lowercase();
				if TEXT_TAGS.contains(&name.as_str()) { caps[0].to_string() } else { " ".to_string() }
			})
			.into_owned()
	}
}

impl Sanitizer for HtmlSanitizer {
	fn strip_non_text_markup(&self, raw: &str) -> String {
		// Removing a block can splice a new tag together ("<scr<!-- -->ipt>"), so run to a fixpoint.
		let mut current = Self::pass(raw);
		loop {
			let next = Self::pass(&current);
			if next == current { break; }
			current = next;
		}
		trace!(input_len = raw.len(), output_len = current.len(), "sanitized markup");
		current
	}
}
