/* Array-builder library generation
 *
 * For every configured type and every arity in `1..max_arity` one helper is
 * emitted:
 *
 *   function Orders(Order memory a, Order memory b) internal pure returns (Order[] memory) {
 *       Order[] memory arr = new Order[](2);
 *       arr[0] = a;
 *       arr[1] = b;
 *       return arr;
 *   }
 */

use crate::error::{GenError, GenResult};
use crate::ir::{Expr, FunctionDecl, Item, LibraryDecl, Param, SourceUnit, Stmt};
use crate::render::Renderer;
use sol_types::{GeneratorConfig, SolarrayConfig, TypeSpec};
use tracing::debug;

/* Parameters are named `a`..`z` */
pub const ARITY_LIMIT: usize = 27;

const ARRAY_VAR: &str = "arr";

/* Sequential parameter name for position `index`; `None` past `z` */
pub fn param_name(index: usize) -> Option<String> {
    u8::try_from(index)
        .ok()
        .filter(|offset| *offset < 26)
        .map(|offset| char::from(b'a' + offset).to_string())
}

/* `Order` -> `Orders`, `address` -> `addresses`, `Foo[]` -> `FooArrays` */
pub fn function_name(spec: &TypeSpec) -> String {
    let element = spec.element_name();
    let depth = spec.array_depth();
    let mut name = format!("{}{}", element, "Array".repeat(depth));
    if element == "address" && depth == 0 {
        name.push('e');
    }
    name.push('s');
    name
}

/* One helper taking `arity` values of `spec` and returning them as an array */
pub fn builder_function(spec: &TypeSpec, arity: usize) -> GenResult<FunctionDecl> {
    if arity >= ARITY_LIMIT {
        return Err(GenError::InvalidArity {
            max_arity: arity + 1,
            limit: ARITY_LIMIT,
        });
    }

    let base = spec.base_name();
    let array_ty = format!("{}[]", base);
    let arr_decl_ty = format!("{} memory", array_ty);

    let mut func = FunctionDecl::internal_pure(function_name(spec)).returns(Param::unnamed(arr_decl_ty.clone()));
    func = func.stmt(Stmt::VarDecl {
        ty: arr_decl_ty,
        name: ARRAY_VAR.to_string(),
        init: Expr::new_array(array_ty, Expr::Number(arity as u64)),
    });

    for (index, name) in (0..arity).map_while(param_name).enumerate() {
        func = func.param(Param::named(spec.as_str(), name.clone())).stmt(Stmt::Assign {
            target: Expr::ident(ARRAY_VAR).index(Expr::Number(index as u64)),
            value: Expr::ident(name),
        });
    }

    Ok(func.stmt(Stmt::Return(Expr::ident(ARRAY_VAR))))
}

fn validate(config: &SolarrayConfig) -> GenResult<()> {
    if config.max_arity == 0 || config.max_arity > ARITY_LIMIT {
        return Err(GenError::InvalidArity {
            max_arity: config.max_arity,
            limit: ARITY_LIMIT,
        });
    }
    if let Some(index) = config.types.iter().position(TypeSpec::is_blank) {
        return Err(GenError::InvalidTypeSpec { index });
    }
    Ok(())
}

/* Every helper, types in configured order and arities ascending within a type */
pub fn build_library(config: &SolarrayConfig) -> GenResult<LibraryDecl> {
    validate(config)?;

    let mut functions = Vec::with_capacity(config.types.len() * (config.max_arity - 1));
    for spec in &config.types {
        for arity in 1..config.max_arity {
            functions.push(builder_function(spec, arity)?);
        }
        debug!(ty = %spec, name = %function_name(spec), "generated array builders");
    }

    Ok(LibraryDecl {
        name: config.library_name.clone(),
        usings: Vec::new(),
        functions,
    })
}

/* Complete source text of the array-builder library */
pub fn generate(config: &GeneratorConfig) -> GenResult<String> {
    let library = build_library(&config.solarray)?;
    let mut unit = SourceUnit::new(config.license.clone(), config.pragma.clone());
    unit.items.push(Item::Library(library));
    Renderer::new(config.indent).render_unit(&unit)
}
