/* Inspect command - report what the struct scanner recovers from a file */

use super::common::read_source;
use serde_derive::Serialize;
use sol_gen::struct_mirror::{self, MirrorPlan};
use sol_types::{Field, GeneratorConfig, SkippedMember};
use std::io::Write;
use std::path::PathBuf;

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct FieldReport {
  #[serde(flatten)]
  pub field: Field,
  /* Type is rewritten to a mirrored struct */
  pub mirrored: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct StructReport {
  pub name: String,
  pub line_span: (usize, usize),
  pub fields: Vec<FieldReport>,
  pub sorted: Vec<String>,
  /* Field names whose type is rewritten to a mirrored struct */
  pub mirrored: Vec<String>,
  pub skipped: Vec<SkippedMember>,
}

fn line_of(source: &str, offset: usize) -> usize {
  source[..offset].matches('\n').count() + 1
}

pub fn build_report(source: &str, plans: &[MirrorPlan]) -> Vec<StructReport> {
  plans
    .iter()
    .map(|plan| {
      let def = &plan.def;
      StructReport {
        name: def.name.clone(),
        line_span: (line_of(source, def.span.start), line_of(source, def.span.end)),
        fields: def
          .fields
          .iter()
          .map(|f| FieldReport { field: f.clone(), mirrored: plan.is_mirrored(f) })
          .collect(),
        sorted: def.sorted_fields().iter().map(|f| f.name.clone()).collect(),
        mirrored: def
          .fields
          .iter()
          .filter(|f| plan.is_mirrored(f))
          .map(|f| f.name.clone())
          .collect(),
        skipped: def.skipped.clone(),
      }
    })
    .collect()
}

fn field_decl(field: &Field) -> String {
  let mut decl = field.base_type.clone();
  if field.is_array {
    decl.push_str("[]");
  }
  if let Some(modifier) = field.modifier {
    decl.push(' ');
    decl.push_str(modifier.keyword());
  }
  format!("{} {}", decl, field.name)
}

fn write_text<W: Write>(out: &mut W, reports: &[StructReport]) -> std::io::Result<()> {
  if reports.is_empty() {
    return writeln!(out, "[~] No struct definitions found");
  }

  writeln!(out, "[~] {} struct definition(s):", reports.len())?;
  for report in reports {
    writeln!(out, "\n  {} (lines {}-{})", report.name, report.line_span.0, report.line_span.1)?;
    for field in &report.fields {
      let marker = if field.mirrored { " -> mirrored" } else { "" };
      writeln!(out, "    - {}{}", field_decl(&field.field), marker)?;
    }
    writeln!(out, "    Sorted: {}", report.sorted.join(", "))?;
    for skipped in &report.skipped {
      writeln!(out, "    [!] line {}: skipped '{}'", skipped.line, skipped.text)?;
    }
  }
  Ok(())
}

/* Execute the inspect command */
pub fn run(mut config: GeneratorConfig, file: PathBuf, resolve_forward_refs: bool, json: bool) -> anyhow::Result<()> {
  config.struct_mirror.resolve_forward_refs |= resolve_forward_refs;

  let source = read_source(&file)?;
  let structs = struct_mirror::parse_structs(&source, &config.struct_mirror)?;
  let plans = struct_mirror::plan(structs, config.struct_mirror.resolve_forward_refs);
  let reports = build_report(&source, &plans);

  if json {
    println!("{}", serde_json::to_string_pretty(&reports)?);
  } else {
    write_text(&mut std::io::stdout().lock(), &reports)?;
  }
  Ok(())
}
