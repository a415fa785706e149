use indexmap::IndexSet;
use serde_derive::{Deserialize, Serialize};
use std::ops::Range;

/* ============================================================================
   Array-builder inputs
   ============================================================================ */

/* A parameter type as written in a Solidity parameter list, data location
 * included (e.g. "Order memory", "FulfillmentComponent[] memory", "address") */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Hash)]
#[serde(transparent)]
pub struct TypeSpec(String);

impl TypeSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        TypeSpec(spec.into())
    }

    /* Full declaration text, used verbatim for parameters */
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /* First whitespace-separated token, i.e. the type without its data location */
    pub fn base_name(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }

    /* Base name with every trailing `[]` removed */
    pub fn element_name(&self) -> &str {
        let mut name = self.base_name();
        while let Some(stripped) = name.strip_suffix("[]") {
            name = stripped;
        }
        name
    }

    /* Number of `[]` pairs on the base name */
    pub fn array_depth(&self) -> usize {
        let base = self.base_name();
        (base.len() - self.element_name().len()) / 2
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for TypeSpec {
    fn from(spec: &str) -> Self {
        TypeSpec::new(spec)
    }
}

impl std::fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/* ============================================================================
   Struct definitions
   ============================================================================ */

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum FieldModifier {
    Payable,
}

impl FieldModifier {
    pub fn keyword(self) -> &'static str {
        match self {
            FieldModifier::Payable => "payable",
        }
    }
}

/* One `<type>[[]] [payable] <name>;` member of a struct */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Field {
    pub base_type: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<FieldModifier>,
    pub name: String,
}

impl Field {
    pub fn new(base_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
            is_array: false,
            modifier: None,
            name: name.into(),
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn payable(mut self) -> Self {
        self.modifier = Some(FieldModifier::Payable);
        self
    }
}

/* Member statement the scanner could not interpret */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SkippedMember {
    pub text: String,
    pub line: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct StructDef {
    pub name: String,
    /* Authored order */
    pub fields: Vec<Field>,
    /* Byte range of the whole `struct ... { ... }` text in the source */
    pub span: Range<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedMember>,
}

impl StructDef {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            span: 0..0,
            skipped: Vec::new(),
        }
    }

    /* Fields ordered by name; stable, so duplicate names keep authored order */
    pub fn sorted_fields(&self) -> Vec<&Field> {
        let mut sorted: Vec<&Field> = self.fields.iter().collect();
        sorted.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        sorted
    }

    /* First field name that appears more than once, if any */
    pub fn duplicate_field(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.fields
            .iter()
            .find(|field| !seen.insert(field.name.as_str()))
            .map(|field| field.name.as_str())
    }
}

/* ============================================================================
   Name set
   ============================================================================ */

/* Struct names whose field types get rewritten to the mirrored variant.
 * Insertion order is kept so diagnostics list names in file order. */
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct NameSet(IndexSet<String>);

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /* Returns false when the name was already present */
    pub fn insert(&mut self, name: &str) -> bool {
        self.0.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for NameSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        NameSet(iter.into_iter().map(str::to_string).collect())
    }
}
