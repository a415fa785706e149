/* Solarray command - generate the array-builder library */

use super::common::write_output;
use sol_gen::solarray;
use sol_types::{GeneratorConfig, TypeSpec};
use std::path::PathBuf;

/* Command-line values taking precedence over the configuration file */
#[derive(Debug, Default)]
pub struct Overrides {
  pub max_arity: Option<usize>,
  pub types: Vec<String>,
  pub library: Option<String>,
}

impl Overrides {
  fn apply(self, config: &mut GeneratorConfig) {
    if let Some(max_arity) = self.max_arity {
      config.solarray.max_arity = max_arity;
    }
    if !self.types.is_empty() {
      config.solarray.types = self.types.into_iter().map(TypeSpec::new).collect();
    }
    if let Some(library) = self.library {
      config.solarray.library_name = library;
    }
  }
}

/* Execute the solarray command */
pub fn run(
  mut config: GeneratorConfig,
  overrides: Overrides,
  output: Option<PathBuf>,
  verbose: bool,
) -> anyhow::Result<()> {
  overrides.apply(&mut config);

  if verbose {
    eprintln!("[~] Configuration:");
    eprintln!("  Library: {}", config.solarray.library_name);
    eprintln!("  Arities: 1..{}", config.solarray.max_arity);
    eprintln!("  Types: {}", config.solarray.types.len());
    for spec in &config.solarray.types {
      eprintln!("    - {} -> {}", spec, solarray::function_name(spec));
    }
  }

  let text = solarray::generate(&config)?;

  match output {
    Some(path) => {
      write_output(&path, &text)?;
      println!("[✓] Generated {} in {}", config.solarray.library_name, path.display());
    }
    None => print!("{}", text),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn overrides_replace_configured_values() {
    let mut config = GeneratorConfig::default();
    Overrides {
      max_arity: Some(3),
      types: vec!["address".to_string()],
      library: Some("Arrays".to_string()),
    }
    .apply(&mut config);

    assert_eq!(config.solarray.max_arity, 3);
    assert_eq!(config.solarray.types, vec![TypeSpec::from("address")]);
    assert_eq!(config.solarray.library_name, "Arrays");
  }

  #[test]
  fn empty_overrides_keep_configuration() {
    let mut config = GeneratorConfig::default();
    Overrides::default().apply(&mut config);
    assert_eq!(config, GeneratorConfig::default());
  }
}
