//! HTML escaping helpers used when rendering attributes and strategy markup

/// Replaces the characters that are unsafe inside element text and quoted
/// attribute values with their entities.
///
/// ```
/// use reinhardt_grid::html::escape;
///
/// assert_eq!(escape("u.name"), "u.name");
/// assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
/// 	"&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;");
/// ```
pub fn escape(text: &str) -> String {
	text.chars().fold(String::with_capacity(text.len()), |mut out, ch| {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(ch),
		}
		out
	})
}

/// Render `key="value"` pairs, each preceded by a space
///
/// Keys that are not valid attribute names are skipped.
///
/// # Examples
///
/// ```
/// use reinhardt_grid::html::attributes;
///
/// let attrs = [("class", "col-status"), ("data-x", "a\"b")];
/// assert_eq!(
///     attributes(attrs.iter().map(|(k, v)| (*k, *v))),
///     r#" class="col-status" data-x="a&quot;b""#
/// );
/// ```
pub fn attributes<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
	let mut html = String::new();
	for (key, value) in pairs {
		if !is_attribute_name(key) {
			continue;
		}
		html.push_str(&format!(r#" {}="{}""#, key, escape(value)));
	}
	html
}

fn is_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& name
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}
