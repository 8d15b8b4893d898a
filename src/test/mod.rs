use super::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};


fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
	let file = dir.path().join(name);
	fs::write(&file, content).unwrap();
	file.to_string_lossy().into_owned()
}

fn write_config(dir: &Path, endpoint: &str) {
	let config = Config {
		model: "m".to_string(),
		endpoint: endpoint.to_string(),
		temperature: 0.5,
		default_prompt: "summarize:".to_string(),
		stream: false,
		columns: 80,
	};
	helpers::save_to_json(Config::path_in(dir), &config).unwrap();
}

async fn mock_generate(server: &MockServer, prompt: &str, reply: &str) {
	Mock::given(method("POST"))
		.and(path("/api/generate"))
		.and(body_partial_json(serde_json::json!({
			"model": "m",
			"prompt": prompt,
			"stream": false,
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": reply })))
		.expect(1)
		.mount(server)
		.await;
}

#[tokio::test]
async fn execute_sends_default_prompt_and_prints_raw_reply() {
	let server = MockServer::start().await;
	mock_generate(&server, "summarize:\nhello world", "# Title").await;

	let dir = TempDir::new().unwrap();
	write_config(dir.path(), &format!("{}/api/generate", server.uri()));
	let input = write_fixture(&dir, "input.txt", "hello world");

	// -c without -f leaves the reply uncolored
	let cli = Cli::try_parse_from(["gat", input.as_str(), "-c"]).unwrap();
	let output = execute(&cli, dir.path()).await.unwrap();
	assert_eq!(output, "# Title");
}

#[tokio::test]
async fn execute_with_markdown_flag_colorizes_reply() {
	colored::control::set_override(true);
	let server = MockServer::start().await;
	let reply = "# Title\n**bold** and `code`";
	mock_generate(&server, "Your response must be in markdown format.summarize:\nhello world", reply).await;

	let dir = TempDir::new().unwrap();
	write_config(dir.path(), &format!("{}/api/generate", server.uri()));
	let input = write_fixture(&dir, "input.txt", "hello world");

	let cli = Cli::try_parse_from(["gat", input.as_str(), "-f", "-c"]).unwrap();
	let output = execute(&cli, dir.path()).await.unwrap();
	assert_eq!(output, crate::markdown::colorize(reply));
	assert_ne!(output, reply);
}

#[tokio::test]
async fn execute_applies_host_and_model_overrides_without_saving_them() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/other"))
		.and(body_partial_json(serde_json::json!({ "model": "llama3", "temperature": 0.9 })))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "ok" })))
		.expect(1)
		.mount(&server)
		.await;

	let dir = TempDir::new().unwrap();
	write_config(dir.path(), "http://127.0.0.1:9/unused");
	let input = write_fixture(&dir, "input.txt", "hello world");
	let host = format!("{}/other", server.uri());

	let cli = Cli::try_parse_from(["gat", input.as_str(), "-h", host.as_str(), "-m", "llama3", "-t", "0.9"]).unwrap();
	assert_eq!(execute(&cli, dir.path()).await.unwrap(), "ok");

	let saved = Config::load_or_create(dir.path()).unwrap();
	assert_eq!(saved.model, "m");
	assert_eq!(saved.endpoint, "http://127.0.0.1:9/unused");
}

#[tokio::test]
async fn execute_wraps_reply_when_asked() {
	let server = MockServer::start().await;
	mock_generate(&server, "summarize:\nhello world", "the quick brown fox").await;

	let dir = TempDir::new().unwrap();
	let config = Config {
		model: "m".to_string(),
		endpoint: format!("{}/api/generate", server.uri()),
		default_prompt: "summarize:".to_string(),
		columns: 10,
		..Config::default()
	};
	helpers::save_to_json(Config::path_in(dir.path()), &config).unwrap();
	let input = write_fixture(&dir, "input.txt", "hello world");

	let cli = Cli::try_parse_from(["gat", input.as_str(), "-w"]).unwrap();
	assert_eq!(execute(&cli, dir.path()).await.unwrap(), "the quick\nbrown fox");
}

#[tokio::test]
async fn dry_run_prints_payload_without_network() {
	let dir = TempDir::new().unwrap();
	write_config(dir.path(), "http://127.0.0.1:9/unused");
	let input = write_fixture(&dir, "input.txt", "hello world");

	let cli = Cli::try_parse_from(["gat", input.as_str(), "-n", "-l", "French"]).unwrap();
	let output = execute(&cli, dir.path()).await.unwrap();
	let payload: GenerateRequest = serde_json::from_str(&output).unwrap();
	assert_eq!(payload.model, "m");
	assert_eq!(payload.prompt, "Your response must be in Frenchsummarize:\nhello world");
	assert!(!payload.stream);
	assert_eq!(payload.temperature, 0.5);
}

#[tokio::test]
async fn missing_input_file_is_a_file_error() {
	let dir = TempDir::new().unwrap();
	write_config(dir.path(), "http://127.0.0.1:9/unused");
	let missing = dir.path().join("nope.txt");

	let cli = Cli::try_parse_from(["gat", missing.to_str().unwrap()]).unwrap();
	let err = execute(&cli, dir.path()).await.unwrap_err();
	assert!(matches!(err, GatError::File(_)));
	assert!(err.to_string().starts_with("Error opening file:"));
}

#[tokio::test]
async fn server_error_status_is_a_network_error() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500).set_body_string("boom"))
		.mount(&server)
		.await;

	let dir = TempDir::new().unwrap();
	write_config(dir.path(), &format!("{}/api/generate", server.uri()));
	let input = write_fixture(&dir, "input.txt", "hello world");

	let cli = Cli::try_parse_from(["gat", input.as_str()]).unwrap();
	let err = execute(&cli, dir.path()).await.unwrap_err();
	assert!(matches!(err, GatError::Network(_)));
}

#[tokio::test]
async fn unexpected_reply_shape_is_a_decode_error() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "content": "hi" })))
		.mount(&server)
		.await;

	let dir = TempDir::new().unwrap();
	write_config(dir.path(), &format!("{}/api/generate", server.uri()));
	let input = write_fixture(&dir, "input.txt", "hello world");

	let cli = Cli::try_parse_from(["gat", input.as_str()]).unwrap();
	let err = execute(&cli, dir.path()).await.unwrap_err();
	assert!(matches!(err, GatError::Decode(_)));
}

#[tokio::test]
async fn invalid_endpoint_is_reported() {
	let dir = TempDir::new().unwrap();
	write_config(dir.path(), "not a url");
	let input = write_fixture(&dir, "input.txt", "hello world");

	let cli = Cli::try_parse_from(["gat", input.as_str()]).unwrap();
	let err = execute(&cli, dir.path()).await.unwrap_err();
	assert!(matches!(err, GatError::Endpoint(_)));
}

#[test]
fn render_wraps_each_line_then_colorizes() {
	colored::control::set_override(true);
	let options = RunOptions { wrap: true, colorize: true, ..RunOptions::default() };
	let rendered = render_response("# Title\nthe quick brown fox".to_string(), &options, 10);
	assert_eq!(rendered, crate::markdown::colorize("# Title\nthe quick\nbrown fox"));
}

#[test]
fn cli_requires_a_filename() {
	assert!(Cli::try_parse_from(["gat"]).is_err());
}

#[test]
fn temperature_flag_overrides_config() {
	let config = Config::default();
	let cli = Cli::try_parse_from(["gat", "file.txt"]).unwrap();
	assert_eq!(cli.run_options(&config).temperature, 0.5);
	let cli = Cli::try_parse_from(["gat", "file.txt", "-t", "0.1"]).unwrap();
	assert_eq!(cli.run_options(&config).temperature, 0.1);
}

#[test]
fn colorize_is_dropped_without_markdown_format() {
	let config = Config::default();
	let cli = Cli::try_parse_from(["gat", "file.txt", "-c"]).unwrap();
	assert!(!cli.run_options(&config).colorize);
	let cli = Cli::try_parse_from(["gat", "file.txt", "-c", "-f"]).unwrap();
	assert!(cli.run_options(&config).colorize);
}

#[test]
fn lossy_input_decoding() {
	let dir = TempDir::new().unwrap();
	let file = dir.path().join("bin.dat");
	fs::write(&file, b"ab\xffcd").unwrap();
	let content = helpers::read_input(&file).unwrap();
	assert_eq!(content, "ab\u{FFFD}cd");
}
