/* Mirrored struct generation
 *
 * Every struct found in a source gets a `<Name>Json` twin whose fields are
 * sorted by name, plus a pair of `toStandard` conversions (single value and
 * array) turning the twin back into the original. Field types naming another
 * known struct are rewritten to that struct's twin and converted with a
 * chained `.toStandard()` call. */

use crate::error::{GenError, GenResult};
use crate::ir::{
    Expr, FunctionDecl, Import, Item, LibraryDecl, LoopVar, MemberDecl, Param, SourceUnit, Stmt, StructDecl, UsingFor,
};
use crate::render::Renderer;
use crate::scanner::{Scan, scan_structs};
use sol_types::{Field, GeneratorConfig, NameSet, StructDef, StructMirrorConfig};
use tracing::{debug, warn};

pub const CONVERSION_FN: &str = "toStandard";

const SOURCE_PARAM: &str = "a";
const RESULT_VAR: &str = "b";
const INDEX_VAR: &str = "i";

/* One struct together with the names visible when it was processed */
#[derive(Debug, Clone)]
pub struct MirrorPlan {
    pub def: StructDef,
    pub names: NameSet,
}

impl MirrorPlan {
    /* True when the field's type is rewritten to a mirrored struct */
    pub fn is_mirrored(&self, field: &Field) -> bool {
        self.names.contains(&field.base_type)
    }
}

/* Generated text for both output files */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutput {
    pub structs: String,
    pub library: String,
}

/* Scan `source` and apply the permissive/strict policy from `config` */
pub fn parse_structs(source: &str, config: &StructMirrorConfig) -> GenResult<Vec<StructDef>> {
    let Scan { structs, unterminated } = scan_structs(source);

    if let Some(open) = unterminated.first() {
        if config.strict {
            return Err(GenError::UnterminatedStruct {
                name: open.name.clone(),
                line: open.line,
            });
        }
        for open in &unterminated {
            warn!(name = %open.name, line = open.line, "dropping struct with unterminated body");
        }
    }

    if config.strict {
        validate_strict(&structs)?;
    }
    Ok(structs)
}

fn validate_strict(structs: &[StructDef]) -> GenResult<()> {
    let mut seen = NameSet::new();
    for def in structs {
        if !seen.insert(&def.name) {
            return Err(GenError::DuplicateStruct { name: def.name.clone() });
        }
        if let Some(skipped) = def.skipped.first() {
            return Err(GenError::UnrecognizedMember {
                struct_name: def.name.clone(),
                text: skipped.text.clone(),
                line: skipped.line,
            });
        }
        if let Some(field) = def.duplicate_field() {
            return Err(GenError::DuplicateField {
                struct_name: def.name.clone(),
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

/* Attach to each struct the name set in effect while it is generated.
 *
 * By default names accumulate in file order: a struct sees itself and
 * everything before it, so a reference to a struct defined later is left
 * untouched. With `resolve_forward_refs` every name is collected first. */
pub fn plan(structs: Vec<StructDef>, resolve_forward_refs: bool) -> Vec<MirrorPlan> {
    let mut names = if resolve_forward_refs {
        structs.iter().map(|def| def.name.as_str()).collect::<NameSet>()
    } else {
        NameSet::new()
    };

    structs
        .into_iter()
        .map(|def| {
            names.insert(&def.name);
            MirrorPlan {
                def,
                names: names.clone(),
            }
        })
        .collect()
}

fn mirror_name(name: &str, suffix: &str) -> String {
    format!("{}{}", name, suffix)
}

/* `struct <Name><suffix>` with sorted, type-rewritten members */
pub fn mirrored_struct(plan: &MirrorPlan, suffix: &str) -> StructDecl {
    let members = plan
        .def
        .sorted_fields()
        .into_iter()
        .map(|field| {
            let base = if plan.is_mirrored(field) {
                mirror_name(&field.base_type, suffix)
            } else {
                field.base_type.clone()
            };
            MemberDecl {
                ty: if field.is_array { format!("{}[]", base) } else { base },
                modifier: field.modifier.map(|m| m.keyword().to_string()),
                name: field.name.clone(),
            }
        })
        .collect();

    StructDecl {
        name: mirror_name(&plan.def.name, suffix),
        members,
    }
}

/* `<Name>({ f: <source>.f, g: <source>.g.toStandard(), ... })`, fields in sorted order */
pub fn construct_expr(plan: &MirrorPlan, source: &Expr) -> Expr {
    let args = plan
        .def
        .sorted_fields()
        .into_iter()
        .map(|field| {
            let value = source.clone().member(field.name.clone());
            let value = if plan.is_mirrored(field) {
                value.method_call(CONVERSION_FN)
            } else {
                value
            };
            (field.name.clone(), value)
        })
        .collect();
    Expr::NamedCall(Box::new(Expr::ident(plan.def.name.clone())), args)
}

/* `toStandard(<Name>Json memory a)` */
pub fn single_conversion(plan: &MirrorPlan, suffix: &str) -> FunctionDecl {
    let name = &plan.def.name;
    FunctionDecl::internal_pure(CONVERSION_FN)
        .param(Param::named(format!("{} memory", mirror_name(name, suffix)), SOURCE_PARAM))
        .returns(Param::unnamed(format!("{} memory", name)))
        .stmt(Stmt::Return(construct_expr(plan, &Expr::ident(SOURCE_PARAM))))
}

/* `toStandard(<Name>Json[] memory a)`, same construction applied per element */
pub fn sequence_conversion(plan: &MirrorPlan, suffix: &str) -> FunctionDecl {
    let name = &plan.def.name;
    let array_ty = format!("{}[]", name);
    let length = Expr::ident(SOURCE_PARAM).member("length");
    let element = Expr::ident(SOURCE_PARAM).index(Expr::ident(INDEX_VAR));

    let fill = Stmt::For {
        init: LoopVar {
            ty: "uint256".to_string(),
            name: INDEX_VAR.to_string(),
            init: Expr::Number(0),
        },
        cond: Expr::ident(INDEX_VAR).lt(length.clone()),
        step: Expr::ident(INDEX_VAR).post_increment(),
        body: vec![Stmt::Assign {
            target: Expr::ident(RESULT_VAR).index(Expr::ident(INDEX_VAR)),
            value: construct_expr(plan, &element),
        }],
    };

    FunctionDecl::internal_pure(CONVERSION_FN)
        .param(Param::named(format!("{}[] memory", mirror_name(name, suffix)), SOURCE_PARAM))
        .returns(Param::unnamed(format!("{} memory", array_ty)))
        .stmt(Stmt::VarDecl {
            ty: format!("{} memory", array_ty),
            name: RESULT_VAR.to_string(),
            init: Expr::new_array(array_ty, length),
        })
        .stmt(fill)
        .stmt(Stmt::Return(Expr::ident(RESULT_VAR)))
}

/* Source unit holding every mirrored struct */
pub fn structs_unit(plans: &[MirrorPlan], config: &GeneratorConfig) -> SourceUnit {
    let suffix = &config.struct_mirror.suffix;
    let mut unit = SourceUnit::new(config.license.clone(), config.pragma.clone());
    unit.items = plans.iter().map(|plan| Item::Struct(mirrored_struct(plan, suffix))).collect();
    unit
}

/* Source unit holding the conversion library and its imports */
pub fn library_unit(plans: &[MirrorPlan], config: &GeneratorConfig) -> SourceUnit {
    let mirror = &config.struct_mirror;
    let suffix = &mirror.suffix;
    let mut unit = SourceUnit::new(config.license.clone(), config.pragma.clone());

    unit.imports.push(Import {
        symbols: plans.iter().map(|p| mirror_name(&p.def.name, suffix)).collect(),
        path: format!("./{}", mirror.structs_file),
    });
    unit.imports.push(Import {
        symbols: plans.iter().map(|p| p.def.name.clone()).collect(),
        path: mirror.original_path.clone(),
    });

    let mut library = LibraryDecl {
        name: mirror.library_name.clone(),
        usings: Vec::with_capacity(plans.len() * 2),
        functions: Vec::with_capacity(plans.len() * 2),
    };
    for plan in plans {
        let mirrored = mirror_name(&plan.def.name, suffix);
        library.usings.push(UsingFor {
            library: mirror.library_name.clone(),
            target: mirrored.clone(),
        });
        library.usings.push(UsingFor {
            library: mirror.library_name.clone(),
            target: format!("{}[]", mirrored),
        });
        library.functions.push(single_conversion(plan, suffix));
        library.functions.push(sequence_conversion(plan, suffix));
    }
    unit.items.push(Item::Library(library));
    unit
}

/* Parse `source` and render both output files */
pub fn generate(source: &str, config: &GeneratorConfig) -> GenResult<MirrorOutput> {
    let structs = parse_structs(source, &config.struct_mirror)?;
    debug!(count = structs.len(), "parsed struct definitions");

    let plans = plan(structs, config.struct_mirror.resolve_forward_refs);
    let renderer = Renderer::new(config.indent);
    Ok(MirrorOutput {
        structs: renderer.render_unit(&structs_unit(&plans, config))?,
        library: renderer.render_unit(&library_unit(&plans, config))?,
    })
}
