/* Common utilities shared between the generator commands */

use anyhow::Context;
use sol_gen::config;
use sol_types::GeneratorConfig;
use std::path::Path;

/* Load the configuration file, or the built-in defaults */
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
  Ok(config::load(path)?)
}

/* Read a Solidity source file */
pub fn read_source(path: &Path) -> anyhow::Result<String> {
  std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/* Write a generated file, creating its directory first */
pub fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
  tracing::info!(path = %path.display(), bytes = contents.len(), "wrote generated source");
  Ok(())
}
