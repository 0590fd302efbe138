//! Common utilities for rangevec-cmd

use anyhow::Result;
use std::path::Path;

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Installs the `env_logger` backend.
///
/// `RUST_LOG` takes precedence; otherwise the level defaults to `warn`, raised
/// to `debug` by `-v` and to `trace` by `-vv`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::validate_file_exists;

    #[test]
    fn test_validate_file_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_file_exists(file.path().to_str().unwrap()).is_ok());
        assert!(validate_file_exists(dir.path().to_str().unwrap()).is_err());
        assert!(validate_file_exists("/definitely/not/here.rvs").is_err());
    }
}
