/* Array-builder library tests */

use sol_gen::solarray;
use sol_types::{GeneratorConfig, TypeSpec, DEFAULT_SOLARRAY_TYPES};

fn config_with(types: &[&str], max_arity: usize) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    config.solarray.types = types.iter().map(|t| TypeSpec::from(*t)).collect();
    config.solarray.max_arity = max_arity;
    config
}

/* (name, parameter list) of every generated function signature */
fn signatures(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.trim_start().strip_prefix("function "))
        .map(|rest| {
            let open = rest.find('(').unwrap();
            let close = rest.find(')').unwrap();
            (rest[..open].to_string(), rest[open + 1..close].to_string())
        })
        .collect()
}

#[test]
fn test_default_library_covers_every_type_and_arity() {
    let text = solarray::generate(&GeneratorConfig::default()).unwrap();
    let sigs = signatures(&text);
    assert_eq!(sigs.len(), DEFAULT_SOLARRAY_TYPES.len() * 7);

    for (type_idx, ty) in DEFAULT_SOLARRAY_TYPES.iter().enumerate() {
        let spec = TypeSpec::from(*ty);
        for arity in 1..8 {
            let (name, params) = &sigs[type_idx * 7 + arity - 1];
            assert_eq!(name, &solarray::function_name(&spec));
            let expected: Vec<String> = (0..arity).map(|i| format!("{} {}", ty, solarray::param_name(i).unwrap())).collect();
            assert_eq!(params, &expected.join(", "));
        }
    }
}

#[test]
fn test_body_assigns_each_parameter_to_its_index() {
    let text = solarray::generate(&config_with(&["uint256"], 6)).unwrap();
    let body_of_five = text.split("function ").nth(5).unwrap();
    assert!(body_of_five.contains("uint256[] memory arr = new uint256[](5);"));
    for (index, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        assert!(body_of_five.contains(&format!("arr[{}] = {};", index, name)));
    }
    assert!(!body_of_five.contains("arr[5]"));
    assert!(body_of_five.contains("return arr;"));
}

#[test]
fn test_address_pluralization() {
    let text = solarray::generate(&config_with(&["address", "uint256", "bytes32"], 3)).unwrap();
    let names: Vec<String> = signatures(&text).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["addresses", "addresses", "uint256s", "uint256s", "bytes32s", "bytes32s"]);
    assert!(text.contains("function addresses(address a) internal pure returns (address[] memory) {"));
}

#[test]
fn test_array_element_type_gets_valid_name() {
    let text = solarray::generate(&config_with(&["FulfillmentComponent[] memory"], 2)).unwrap();
    assert!(text.contains(
        "function FulfillmentComponentArrays(FulfillmentComponent[] memory a) internal pure returns (FulfillmentComponent[][] memory) {"
    ));
    assert!(text.contains("FulfillmentComponent[][] memory arr = new FulfillmentComponent[][](1);"));
}

#[test]
fn test_empty_type_list_is_an_empty_library() {
    let text = solarray::generate(&config_with(&[], 8)).unwrap();
    assert_eq!(text, "// SPDX-License-Identifier: MIT\n\nlibrary Solarray {}\n");
}

#[test]
fn test_indent_and_library_name_are_configurable() {
    let mut config = config_with(&["bool"], 2);
    config.indent = 2;
    config.solarray.library_name = "Arrays".to_string();
    let text = solarray::generate(&config).unwrap();
    assert!(text.contains("library Arrays {\n  function bools(bool a) internal pure returns (bool[] memory) {\n    bool[] memory arr"));
}
