use thiserror::Error;

/// Result alias used across the generators.
pub type GenResult<T> = Result<T, GenError>;

/// Errors produced while scanning sources or generating Solidity text.
#[derive(Debug, Error)]
pub enum GenError {
    /// Maximum arity outside the range single-letter parameter names allow.
    #[error("max arity {max_arity} is out of range (expected 1..={limit})")]
    InvalidArity { max_arity: usize, limit: usize },

    /// A configured type spec has no type name.
    #[error("type spec #{index} is blank")]
    InvalidTypeSpec { index: usize },

    /// A struct body has no closing brace.
    #[error("struct '{name}' opened on line {line} is never closed")]
    UnterminatedStruct { name: String, line: usize },

    /// Strict mode: a member statement does not have the `<type>[[]] [payable] <name>` shape.
    #[error("struct '{struct_name}' line {line}: unrecognized member '{text}'")]
    UnrecognizedMember {
        struct_name: String,
        text: String,
        line: usize,
    },

    /// Strict mode: a field name is declared twice within one struct.
    #[error("struct '{struct_name}' declares field '{field}' more than once")]
    DuplicateField { struct_name: String, field: String },

    /// Strict mode: a struct name is declared twice within one source.
    #[error("struct '{name}' is defined more than once")]
    DuplicateStruct { name: String },

    /// Writing into the output buffer failed.
    #[error("failed to render generated source: {0}")]
    Render(#[from] std::fmt::Error),
}
