/// Greedy word wrap. Runs of whitespace collapse to one separator and
/// words are never split, so a word wider than `line_width` sits alone on
/// its line. Widths count Unicode scalar values.
pub fn word_wrap(text: &str, line_width: usize) -> String {
	word_wrap_bytes(text.as_bytes(), line_width)
}

/// Wraps every `\n` separated line on its own, so line breaks already in
/// the text survive.
pub fn wrap_lines(text: &str, line_width: usize) -> String {
	text.split('\n')
		.map(|line| word_wrap(line, line_width))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Same as `word_wrap` for raw input. Every invalid UTF-8 byte acts as a
/// space.
pub fn word_wrap_bytes(text: &[u8], line_width: usize) -> String {
	let mut filler = LineFiller::new(text.len(), line_width);
	// scalars scanned so far, invalid bytes count as one each
	let mut scanned = 0usize;

	for chunk in text.utf8_chunks() {
		let valid = chunk.valid();
		let mut word_start: Option<usize> = None;
		for (i, ch) in valid.char_indices() {
			if ch.is_whitespace() {
				if let Some(start) = word_start.take() {
					filler.push_word(&valid[start..i], scanned);
				}
			} else if word_start.is_none() {
				word_start = Some(i);
			}
			scanned += 1;
		}
		// a chunk ends at an invalid sequence or at end of input
		if let Some(start) = word_start {
			filler.push_word(&valid[start..], scanned);
		}
		scanned += chunk.invalid().len();
	}
	filler.out
}

struct LineFiller {
	out: String,
	out_len: usize,
	eo_line: usize,
	line_width: usize,
}

impl LineFiller {
	fn new(capacity: usize, line_width: usize) -> Self {
		LineFiller {
			out: String::with_capacity(capacity + 2 * capacity / line_width.max(1)),
			out_len: 0,
			eo_line: line_width,
			line_width,
		}
	}

	fn push_word(&mut self, word: &str, scanned: usize) {
		if !self.out.is_empty() {
			if scanned >= self.eo_line {
				self.out.push('\n');
				self.out_len += 1;
				self.eo_line = self.out_len + self.line_width;
			} else {
				self.out.push(' ');
				self.out_len += 1;
			}
		}
		self.out.push_str(word);
		self.out_len += word.chars().count();
	}
}
