use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod generate;
mod helpers;
mod markdown;
mod prompt;
mod wrap;

#[cfg(test)]
mod test;

use config::{Config, APP_NAME};
use error::GatError;
use generate::{GenerateClient, GenerateRequest};
use prompt::RunOptions;

/// Send a file to a local text-generation endpoint and print the reply.
#[derive(Parser, Debug)]
#[clap(name = "gat", disable_help_flag = true)]
struct Cli {
	/// File to send (`-` reads stdin)
	filename: PathBuf,
	#[clap(short = 'c')]
	/// colorize the output (requires -f)
	colorize: bool,
	#[clap(short = 'e')]
	/// ask for an explanation instead of a summary
	explain: bool,
	#[clap(short = 'f')]
	/// ask for a markdown formatted response
	format: bool,
	#[clap(short = 't')]
	/// sampling temperature (default taken from the config file)
	temperature: Option<f64>,
	#[clap(short = 'l')]
	/// language the response must be written in
	language: Option<String>,
	#[clap(short = 'h')]
	/// generation endpoint, overrides the config file
	host: Option<String>,
	#[clap(short = 'm')]
	/// model name, overrides the config file
	model: Option<String>,
	#[clap(short = 'p')]
	/// instruction used instead of the configured prompt
	prompt: Option<String>,
	#[clap(short = 'w', long)]
	/// word wrap each line of the response at the configured column count
	wrap: bool,
	#[clap(short = 'n', long)]
	/// print the request payload, do not perform an API call
	dry_run: bool,
	#[clap(short = 'v', long)]
	/// debug logging on stderr
	verbose: bool,
	#[clap(long, action = clap::ArgAction::Help)]
	/// print help
	help: Option<bool>,
}

impl Cli {
	fn run_options(&self, config: &Config) -> RunOptions {
		let colorize = prompt::colorize_allowed(self.colorize, self.format);
		if self.colorize && !colorize {
			tracing::debug!("colorize ignored without -f");
		}
		RunOptions {
			colorize,
			explain: self.explain,
			format_as_markdown: self.format,
			language: self.language.clone(),
			prompt_override: self.prompt.clone(),
			temperature: self.temperature.unwrap_or(config.temperature),
			wrap: self.wrap,
		}
	}
}

fn init_logging(verbose: bool) {
	let default = if verbose { "gat=debug" } else { "gat=warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

/// Wrapping runs first so escape sequences never count toward the width.
fn render_response(response: String, options: &RunOptions, columns: usize) -> String {
	let response = if options.wrap { wrap::wrap_lines(&response, columns) } else { response };
	if options.colorize {
		markdown::colorize(&response)
	} else {
		response
	}
}

async fn execute(cli: &Cli, config_dir: &Path) -> Result<String, GatError> {
	let config = Config::load_or_create(config_dir)?
		.with_overrides(cli.model.as_deref(), cli.host.as_deref());
	let file_content = helpers::read_input(&cli.filename).map_err(GatError::File)?;
	let options = cli.run_options(&config);

	let prompt = prompt::build(&options, &config, &file_content);
	let request = GenerateRequest::new(&config, &options, prompt);
	if cli.dry_run {
		return request.to_json_pretty();
	}

	let client = GenerateClient::new(&config.endpoint)?;
	let response = client.call_api(&request).await?;
	Ok(render_response(response, &options, config.columns))
}

fn config_dir() -> Result<PathBuf, GatError> {
	Ok(helpers::config_get_dir(Some(APP_NAME))?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let result = match config_dir() {
		Ok(dir) => execute(&cli, &dir).await,
		Err(e) => Err(e),
	};
	match result {
		Ok(output) => println!("{}", output),
		Err(e) => {
			eprintln!("{}", e);
			std::process::exit(1);
		},
	}
}
