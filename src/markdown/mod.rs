use colored::Colorize;

/// A piece of a line. Markers keep their literal text so rendering never
/// drops characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
	PlainText(&'a str),
	HeadingMarker(&'a str),
	EmphasisMarker(&'a str),
	StrongMarker(&'a str),
	CodeMarker(&'a str),
}

impl Span<'_> {
	pub fn render(&self) -> String {
		match *self {
			Span::PlainText(t) => t.to_string(),
			Span::HeadingMarker(t) => t.magenta().to_string(),
			Span::EmphasisMarker(t) => t.cyan().to_string(),
			Span::StrongMarker(t) => t.green().to_string(),
			Span::CodeMarker(t) => t.yellow().to_string(),
		}
	}
}

/// Splits one line into plain runs and marker tokens. `**` is matched
/// before a lone `*`, which stays plain text.
pub fn tokenize(line: &str) -> Vec<Span<'_>> {
	let bytes = line.as_bytes();
	let mut spans = Vec::new();
	let mut plain_start = 0;
	let mut i = 0;

	while i < bytes.len() {
		let len = match bytes[i] {
			b'#' | b'_' | b'`' => 1,
			b'*' if bytes.get(i + 1) == Some(&b'*') => 2,
			_ => {
				i += 1;
				continue;
			},
		};
		if plain_start < i {
			spans.push(Span::PlainText(&line[plain_start..i]));
		}
		let token = &line[i..i + len];
		spans.push(match bytes[i] {
			b'#' => Span::HeadingMarker(token),
			b'_' => Span::EmphasisMarker(token),
			b'`' => Span::CodeMarker(token),
			_ => Span::StrongMarker(token),
		});
		i += len;
		plain_start = i;
	}
	if plain_start < bytes.len() {
		spans.push(Span::PlainText(&line[plain_start..]));
	}
	spans
}

pub fn colorize_line(line: &str) -> String {
	tokenize(line).iter().map(Span::render).collect()
}

/// Colors markdown punctuation line by line. Nothing spans lines, so a
/// fenced block is just a line with three code markers. Running it twice
/// wraps the markers a second time.
pub fn colorize(text: &str) -> String {
	text.split('\n')
		.map(colorize_line)
		.collect::<Vec<_>>()
		.join("\n")
}
