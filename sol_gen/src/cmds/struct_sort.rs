/* Struct-sort command - mirror struct definitions with sorted fields */

use super::common::{read_source, write_output};
use sol_gen::struct_mirror;
use sol_types::GeneratorConfig;
use std::path::PathBuf;

/* Command-line values taking precedence over the configuration file */
#[derive(Debug, Default)]
pub struct Overrides {
  pub resolve_forward_refs: bool,
  pub strict: bool,
  pub original_path: Option<String>,
}

impl Overrides {
  /* Flags only ever switch options on */
  fn apply(self, config: &mut GeneratorConfig) {
    let mirror = &mut config.struct_mirror;
    mirror.resolve_forward_refs |= self.resolve_forward_refs;
    mirror.strict |= self.strict;
    if let Some(path) = self.original_path {
      mirror.original_path = path;
    }
  }
}

/* Execute the struct-sort command */
pub fn run(
  mut config: GeneratorConfig,
  overrides: Overrides,
  file: PathBuf,
  output_dir: PathBuf,
  verbose: bool,
) -> anyhow::Result<()> {
  overrides.apply(&mut config);
  let mirror = &config.struct_mirror;

  if verbose {
    eprintln!("[~] Configuration:");
    eprintln!("  Input: {}", file.display());
    eprintln!("  Output directory: {}", output_dir.display());
    eprintln!("  Forward references: {}", if mirror.resolve_forward_refs { "resolved" } else { "left as-is" });
    eprintln!("  Strict: {}", mirror.strict);
    eprintln!();
  }

  let source = read_source(&file)?;
  let output = struct_mirror::generate(&source, &config)?;

  let structs_path = output_dir.join(&mirror.structs_file);
  let library_path = output_dir.join(&mirror.library_file);
  write_output(&structs_path, &output.structs)?;
  write_output(&library_path, &output.library)?;

  println!("[✓] Generated mirrored structs:");
  println!("    - {}", structs_path.display());
  println!("    - {}", library_path.display());
  Ok(())
}
