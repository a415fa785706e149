/* Formatter turning the Solidity IR into source text */

use crate::error::GenResult;
use crate::ir::{
    Expr, FunctionDecl, Import, Item, LibraryDecl, MemberDecl, Param, SourceUnit, Stmt, StructDecl,
};
use std::fmt::{self, Display, Write};

pub struct Renderer {
    indent: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(sol_types::DEFAULT_INDENT)
    }
}

impl Renderer {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }

    pub fn render_unit(&self, unit: &SourceUnit) -> GenResult<String> {
        let mut out = String::new();
        writeln!(out, "// SPDX-License-Identifier: {}", unit.license)?;
        if let Some(pragma) = &unit.pragma {
            writeln!(out, "pragma solidity {};", pragma)?;
        }

        let imports: Vec<&Import> = unit.imports.iter().filter(|i| !i.symbols.is_empty()).collect();
        if !imports.is_empty() {
            out.push('\n');
            for import in imports {
                self.write_import(&mut out, import)?;
            }
        }

        for item in &unit.items {
            out.push('\n');
            match item {
                Item::Struct(decl) => self.write_struct(&mut out, decl, 0)?,
                Item::Library(decl) => self.write_library(&mut out, decl)?,
            }
        }
        Ok(out)
    }

    fn write_import(&self, out: &mut String, import: &Import) -> fmt::Result {
        writeln!(out, "import {{")?;
        let last = import.symbols.len() - 1;
        for (i, symbol) in import.symbols.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            writeln!(out, "{}{}{}", self.pad(1), symbol, sep)?;
        }
        writeln!(out, "}} from \"{}\";", import.path)
    }

    fn write_struct(&self, out: &mut String, decl: &StructDecl, level: usize) -> fmt::Result {
        let pad = self.pad(level);
        if decl.members.is_empty() {
            return writeln!(out, "{}struct {} {{}}", pad, decl.name);
        }
        writeln!(out, "{}struct {} {{", pad, decl.name)?;
        for member in &decl.members {
            writeln!(out, "{}{};", self.pad(level + 1), member)?;
        }
        writeln!(out, "{}}}", pad)
    }

    fn write_library(&self, out: &mut String, decl: &LibraryDecl) -> fmt::Result {
        if decl.usings.is_empty() && decl.functions.is_empty() {
            return writeln!(out, "library {} {{}}", decl.name);
        }
        writeln!(out, "library {} {{", decl.name)?;
        for using in &decl.usings {
            writeln!(out, "{}using {} for {};", self.pad(1), using.library, using.target)?;
        }
        for (i, func) in decl.functions.iter().enumerate() {
            if i > 0 || !decl.usings.is_empty() {
                out.push('\n');
            }
            self.write_function(out, func, 1)?;
        }
        writeln!(out, "}}")
    }

    fn write_function(&self, out: &mut String, func: &FunctionDecl, level: usize) -> fmt::Result {
        write!(out, "{}function {}({}) internal pure", self.pad(level), func.name, join(&func.params))?;
        if !func.returns.is_empty() {
            write!(out, " returns ({})", join(&func.returns))?;
        }
        writeln!(out, " {{")?;
        self.write_block(out, &func.body, level + 1)?;
        writeln!(out, "{}}}", self.pad(level))
    }

    fn write_block(&self, out: &mut String, body: &[Stmt], level: usize) -> fmt::Result {
        for stmt in body {
            self.write_stmt(out, stmt, level)?;
        }
        Ok(())
    }

    fn write_stmt(&self, out: &mut String, stmt: &Stmt, level: usize) -> fmt::Result {
        let pad = self.pad(level);
        match stmt {
            Stmt::VarDecl { ty, name, init } => writeln!(out, "{}{} {} = {};", pad, ty, name, init),
            Stmt::Assign { target, value } => writeln!(out, "{}{} = {};", pad, target, value),
            Stmt::Return(expr) => writeln!(out, "{}return {};", pad, expr),
            Stmt::For { init, cond, step, body } => {
                writeln!(out, "{}for ({} {} = {}; {}; {}) {{", pad, init.ty, init.name, init.init, cond, step)?;
                self.write_block(out, body, level + 1)?;
                writeln!(out, "{}}}", pad)
            }
        }
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", self.ty, name),
            None => f.write_str(&self.ty),
        }
    }
}

impl Display for MemberDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.modifier {
            Some(modifier) => write!(f, "{} {} {}", self.ty, modifier, self.name),
            None => write!(f, "{} {}", self.ty, self.name),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Member(base, member) => write!(f, "{}.{}", base, member),
            Expr::Index(base, index) => write!(f, "{}[{}]", base, index),
            Expr::Call(callee, args) => write!(f, "{}({})", callee, join(args)),
            Expr::NamedCall(callee, args) => {
                if args.is_empty() {
                    return write!(f, "{}({{}})", callee);
                }
                let args: Vec<String> = args.iter().map(|(name, value)| format!("{}: {}", name, value)).collect();
                write!(f, "{}({{ {} }})", callee, args.join(", "))
            }
            Expr::New(ty, len) => write!(f, "new {}({})", ty, len),
            Expr::Binary(lhs, op, rhs) => write!(f, "{} {} {}", lhs, op.symbol(), rhs),
            Expr::PostIncrement(operand) => write!(f, "{}++", operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{LoopVar, UsingFor};

    #[test]
    fn renders_expressions() {
        let expr = Expr::ident("a").index(Expr::ident("i")).member("offer").method_call("toStandard");
        assert_eq!(expr.to_string(), "a[i].offer.toStandard()");

        let named = Expr::NamedCall(
            Box::new(Expr::ident("Foo")),
            vec![("x".to_string(), Expr::ident("a").member("x")), ("y".to_string(), Expr::Number(1))],
        );
        assert_eq!(named.to_string(), "Foo({ x: a.x, y: 1 })");
        assert_eq!(Expr::NamedCall(Box::new(Expr::ident("Empty")), vec![]).to_string(), "Empty({})");
        assert_eq!(Expr::new_array("Foo[]", Expr::ident("a").member("length")).to_string(), "new Foo[](a.length)");
    }

    #[test]
    fn renders_function_with_loop() {
        let func = FunctionDecl::internal_pure("copy")
            .param(Param::named("uint256[] memory", "a"))
            .returns(Param::unnamed("uint256[] memory"))
            .stmt(Stmt::VarDecl {
                ty: "uint256[] memory".to_string(),
                name: "b".to_string(),
                init: Expr::new_array("uint256[]", Expr::ident("a").member("length")),
            })
            .stmt(Stmt::For {
                init: LoopVar { ty: "uint256".to_string(), name: "i".to_string(), init: Expr::Number(0) },
                cond: Expr::ident("i").lt(Expr::ident("a").member("length")),
                step: Expr::ident("i").post_increment(),
                body: vec![Stmt::Assign {
                    target: Expr::ident("b").index(Expr::ident("i")),
                    value: Expr::ident("a").index(Expr::ident("i")),
                }],
            })
            .stmt(Stmt::Return(Expr::ident("b")));

        let mut text = String::new();
        Renderer::new(2).write_function(&mut text, &func, 0).unwrap();
        let expected = "\
function copy(uint256[] memory a) internal pure returns (uint256[] memory) {
  uint256[] memory b = new uint256[](a.length);
  for (uint256 i = 0; i < a.length; i++) {
    b[i] = a[i];
  }
  return b;
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_unit_layout() {
        let mut unit = SourceUnit::new("MIT", Some("^0.8.17".to_string()));
        unit.imports.push(Import { symbols: vec!["AJson".to_string(), "BJson".to_string()], path: "./J.sol".to_string() });
        unit.imports.push(Import { symbols: vec![], path: "./skipped.sol".to_string() });
        unit.items.push(Item::Struct(StructDecl {
            name: "AJson".to_string(),
            members: vec![MemberDecl { ty: "address".to_string(), modifier: Some("payable".to_string()), name: "to".to_string() }],
        }));
        unit.items.push(Item::Library(LibraryDecl {
            name: "Lib".to_string(),
            usings: vec![UsingFor { library: "Lib".to_string(), target: "AJson".to_string() }],
            functions: vec![],
        }));

        let expected = "\
// SPDX-License-Identifier: MIT
pragma solidity ^0.8.17;

import {
    AJson,
    BJson
} from \"./J.sol\";

struct AJson {
    address payable to;
}

library Lib {
    using Lib for AJson;
}
";
        assert_eq!(Renderer::default().render_unit(&unit).unwrap(), expected);
    }

    #[test]
    fn renders_empty_containers() {
        let mut unit = SourceUnit::new("MIT", None);
        unit.items.push(Item::Struct(StructDecl { name: "E".to_string(), members: vec![] }));
        unit.items.push(Item::Library(LibraryDecl { name: "L".to_string(), usings: vec![], functions: vec![] }));
        assert_eq!(
            Renderer::default().render_unit(&unit).unwrap(),
            "// SPDX-License-Identifier: MIT\n\nstruct E {}\n\nlibrary L {}\n"
        );
    }
}
