use crate::config::Config;

pub const EXPLAIN_INSTRUCTION: &str = "explain in detail, with usage instructions if it is code, the following content:";
pub const MARKDOWN_DIRECTIVE: &str = "Your response must be in markdown format.";
pub const LANGUAGE_DIRECTIVE: &str = "Your response must be in ";

/// Per-run options derived from the command line. `colorize` holds the
/// effective decision, see `colorize_allowed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
	pub colorize: bool,
	pub explain: bool,
	pub format_as_markdown: bool,
	pub language: Option<String>,
	pub prompt_override: Option<String>,
	pub temperature: f64,
	pub wrap: bool,
}

/// Coloring only makes sense when a markdown response was asked for.
pub fn colorize_allowed(requested: bool, format_as_markdown: bool) -> bool {
	requested && format_as_markdown
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.is_empty())
}

pub fn base_instruction<'a>(options: &'a RunOptions, config: &'a Config) -> &'a str {
	if options.explain {
		EXPLAIN_INSTRUCTION
	} else if let Some(prompt) = non_empty(&options.prompt_override) {
		prompt
	} else {
		&config.default_prompt
	}
}

/// Assembles `<markdown><language><instruction>\n<content>`. Directives are
/// joined without separators and the content is forwarded untouched.
pub fn build(options: &RunOptions, config: &Config, file_content: &str) -> String {
	let instruction = base_instruction(options, config);
	let mut prompt = String::with_capacity(instruction.len() + file_content.len() + 96);
	if options.format_as_markdown {
		prompt.push_str(MARKDOWN_DIRECTIVE);
	}
	if let Some(language) = non_empty(&options.language) {
		prompt.push_str(LANGUAGE_DIRECTIVE);
		prompt.push_str(language);
	}
	prompt.push_str(instruction);
	prompt.push('\n');
	prompt.push_str(file_content);
	prompt
}
