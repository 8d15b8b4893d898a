use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::env;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Serde error: {0}")]
	Serde(#[from] serde_json::Error),
	#[error("Other Error {0}")]
	FromString(String),
}

impl HelperError {
	pub fn msg<M: Into<String>>(msg: M) -> Self {
		HelperError::FromString(msg.into())
	}
}

/// Resolves the per-user configuration directory: `$XDG_CONFIG_HOME`, or
/// `$HOME/.config` when it is unset. `name` is appended when given.
pub fn config_get_dir(name: Option<&str>) -> Result<PathBuf, HelperError> {
	let mut pb = match env::var("XDG_CONFIG_HOME") {
		Ok(config_home) if !config_home.is_empty() => PathBuf::from(config_home),
		_ => {
			let home = env::var("HOME").map_err(|_| HelperError::msg("XDG_CONFIG_HOME or HOME not found"))?;
			let mut config_home = PathBuf::from(home);
			config_home.push(".config");
			config_home
		},
	};
	if let Some(app_name) = name {
		pb.push(app_name);
	}
	tracing::debug!(dir = %pb.display(), "resolved config dir");
	Ok(pb)
}

pub fn read_from_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T, HelperError> {
	let mut file = File::open(file_path.as_ref())?;
	let mut content = String::new();
	file.read_to_string(&mut content)?;
	let parsed_json: T = serde_json::from_str(&content)?;
	Ok(parsed_json)
}

/// Writes `object` as pretty JSON, creating the parent directory if needed.
pub fn save_to_json<T: Serialize>(file_path: impl AsRef<Path>, object: &T) -> Result<(), HelperError> {
	let serialised = serde_json::to_string_pretty(&object)?;
	if let Some(parent) = file_path.as_ref().parent() {
		fs::create_dir_all(parent)?;
	}
	let mut file = OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(true)
		.open(file_path.as_ref())?;
	writeln!(file, "{}", &serialised)?;
	Ok(())
}

/// Reads the whole input named on the command line; `-` means stdin.
/// Bytes that are not valid UTF-8 become U+FFFD.
pub fn read_input(name: &Path) -> Result<String, io::Error> {
	let mut buffer = Vec::new();
	if name == Path::new("-") {
		io::stdin().lock().read_to_end(&mut buffer)?;
	} else {
		File::open(name)?.read_to_end(&mut buffer)?;
	}
	Ok(match String::from_utf8(buffer) {
		Ok(content) => content,
		Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
	})
}
