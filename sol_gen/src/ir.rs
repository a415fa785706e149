/* Typed description of the Solidity text the generators emit
 *
 * Generators build these values; `render` turns them into source text. Only
 * the constructs the generators need are modelled. */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub license: String,
    pub pragma: Option<String>,
    pub imports: Vec<Import>,
    pub items: Vec<Item>,
}

impl SourceUnit {
    pub fn new(license: impl Into<String>, pragma: Option<String>) -> Self {
        Self {
            license: license.into(),
            pragma,
            imports: Vec::new(),
            items: Vec::new(),
        }
    }
}

/* `import { A, B } from "path";` */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub symbols: Vec<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Struct(StructDecl),
    Library(LibraryDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub ty: String,
    pub modifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDecl {
    pub name: String,
    pub usings: Vec<UsingFor>,
    pub functions: Vec<FunctionDecl>,
}

/* `using <library> for <target>;` */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingFor {
    pub library: String,
    pub target: String,
}

/* Every generated function is `internal pure` */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: Vec<Param>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    pub fn internal_pure(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, param: Param) -> Self {
        self.returns.push(param);
        self
    }

    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }
}

/* Parameter or return slot; `ty` carries the data location ("Order memory") */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: Option<String>,
}

impl Param {
    pub fn named(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: Some(name.into()),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /* `<ty> <name> = <init>;` */
    VarDecl { ty: String, name: String, init: Expr },
    /* `<target> = <value>;` */
    Assign { target: Expr, value: Expr },
    /* `for (<init> <cond>; <step>) { <body> }` */
    For {
        init: LoopVar,
        cond: Expr,
        step: Expr,
        body: Vec<Stmt>,
    },
    Return(Expr),
}

/* Loop counter declared in a `for` header: `<ty> <name> = <init>;` */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopVar {
    pub ty: String,
    pub name: String,
    pub init: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Number(u64),
    /* `<base>.<member>` */
    Member(Box<Expr>, String),
    /* `<base>[<index>]` */
    Index(Box<Expr>, Box<Expr>),
    /* `<callee>(<args>)` */
    Call(Box<Expr>, Vec<Expr>),
    /* `<callee>({ name: value, ... })` */
    NamedCall(Box<Expr>, Vec<(String, Expr)>),
    /* `new <ty>(<len>)` */
    New(String, Box<Expr>),
    Binary(Box<Expr>, BinOp, Box<Expr>),
    /* `<operand>++` */
    PostIncrement(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Lt,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Lt => "<",
        }
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn member(self, member: impl Into<String>) -> Self {
        Expr::Member(Box::new(self), member.into())
    }

    pub fn index(self, index: Expr) -> Self {
        Expr::Index(Box::new(self), Box::new(index))
    }

    /* `<self>.<method>()` */
    pub fn method_call(self, method: impl Into<String>) -> Self {
        Expr::Call(Box::new(self.member(method)), Vec::new())
    }

    pub fn new_array(ty: impl Into<String>, len: Expr) -> Self {
        Expr::New(ty.into(), Box::new(len))
    }

    pub fn lt(self, rhs: Expr) -> Self {
        Expr::Binary(Box::new(self), BinOp::Lt, Box::new(rhs))
    }

    pub fn post_increment(self) -> Self {
        Expr::PostIncrement(Box::new(self))
    }
}
