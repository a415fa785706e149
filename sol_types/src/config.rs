use crate::types::TypeSpec;
use serde_derive::{Deserialize, Serialize};

/* ============================================================================
   Generator configuration
   ============================================================================ */

pub const DEFAULT_LICENSE: &str = "MIT";
pub const DEFAULT_MAX_ARITY: usize = 8;
pub const DEFAULT_SOLARRAY_LIBRARY: &str = "Solarray";
pub const DEFAULT_MIRROR_SUFFIX: &str = "Json";
pub const DEFAULT_MIRROR_LIBRARY: &str = "JsonStructLib";
pub const DEFAULT_STRUCTS_FILE: &str = "JsonStructs.sol";
pub const DEFAULT_LIBRARY_FILE: &str = "JsonStructLib.sol";
pub const DEFAULT_ORIGINAL_PATH: &str = "path/to/Original.sol";
pub const DEFAULT_INDENT: usize = 4;

/* Seaport types the array-builder library is generated for */
pub const DEFAULT_SOLARRAY_TYPES: &[&str] = &[
    "Order memory",
    "AdvancedOrder memory",
    "OrderComponents memory",
    "OrderParameters memory",
    "OfferItem memory",
    "ConsiderationItem memory",
    "SpentItem memory",
    "ReceivedItem memory",
    "FulfillmentComponent memory",
    "FulfillmentComponent[] memory",
    "CriteriaResolver memory",
    "AdditionalRecipient memory",
    "BasicOrderParameters memory",
    "Fulfillment memory",
];

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorConfig {
    /* SPDX identifier written at the top of every generated unit */
    pub license: String,
    /* Version constraint for an optional `pragma solidity` line */
    pub pragma: Option<String>,
    /* Spaces per indentation level */
    pub indent: usize,
    pub solarray: SolarrayConfig,
    pub struct_mirror: StructMirrorConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            license: DEFAULT_LICENSE.to_string(),
            pragma: None,
            indent: DEFAULT_INDENT,
            solarray: SolarrayConfig::default(),
            struct_mirror: StructMirrorConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default)]
pub struct SolarrayConfig {
    pub library_name: String,
    /* Exclusive upper bound: arities 1..max_arity are generated */
    pub max_arity: usize,
    pub types: Vec<TypeSpec>,
}

impl Default for SolarrayConfig {
    fn default() -> Self {
        Self {
            library_name: DEFAULT_SOLARRAY_LIBRARY.to_string(),
            max_arity: DEFAULT_MAX_ARITY,
            types: DEFAULT_SOLARRAY_TYPES.iter().map(|t| TypeSpec::from(*t)).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default)]
pub struct StructMirrorConfig {
    pub suffix: String,
    pub library_name: String,
    pub structs_file: String,
    pub library_file: String,
    /* Import path of the original struct definitions */
    pub original_path: String,
    /* Collect every struct name before rewriting any field type */
    pub resolve_forward_refs: bool,
    /* Turn skipped members, duplicate names and unterminated bodies into errors */
    pub strict: bool,
}

impl Default for StructMirrorConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_MIRROR_SUFFIX.to_string(),
            library_name: DEFAULT_MIRROR_LIBRARY.to_string(),
            structs_file: DEFAULT_STRUCTS_FILE.to_string(),
            library_file: DEFAULT_LIBRARY_FILE.to_string(),
            original_path: DEFAULT_ORIGINAL_PATH.to_string(),
            resolve_forward_refs: false,
            strict: false,
        }
    }
}
