use arbor_parser::{ParseError, extract_json_block, parse_response, parse_tree};
use proptest::prelude::*;

const RESPONSE: &str = r#"Certainly! Below is a mind map for "Photosynthesis".

```json
{
    "center": "Photosynthesis",
    "branches": [
        {
            "text": "Light reactions",
            "children": [
                {"text": "Photosystem II"},
                {"text": "Electron transport"}
            ]
        },
        {
            "text": "Calvin cycle",
            "children": [{"text": "Carbon fixation"}]
        },
        {"text": "Chlorophyll"}
    ]
}
```

Let me know if you need more detail."#;

#[test]
fn parses_realistic_response() {
    let tree = parse_response(RESPONSE).unwrap();

    assert_eq!(tree.center(), "Photosynthesis");
    assert_eq!(tree.branches().len(), 3);
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.max_depth(), 2);

    let labels: Vec<&str> = tree.branches().iter().map(|b| b.text()).collect();
    assert_eq!(labels, ["Light reactions", "Calvin cycle", "Chlorophyll"]);
}

#[test]
fn malformed_block_in_response() {
    let response = "```json\n{\"center\": \"X\", \"branches\": [\n```";
    match parse_response(response) {
        Err(ParseError::MalformedJson { offset, .. }) => assert!(offset <= response.len()),
        other => panic!("expected MalformedJson, got {other:?}"),
    }
}

#[test]
fn missing_center_in_response() {
    let response = "```json\n{\"topic\": \"X\"}\n```";
    assert_eq!(parse_response(response), Err(ParseError::MissingCenter));
}

fn check_extract_ignores_surrounding_prose(prefix: &str, suffix: &str) {
    let response = format!("{prefix}```json\n{{\"center\": \"Topic\"}}\n```{suffix}");
    let block = extract_json_block(&response).unwrap();
    assert_eq!(block.content(), "{\"center\": \"Topic\"}");
    assert_eq!(parse_tree(block.content()).unwrap().center(), "Topic");
}

fn check_label_survives_parsing(label: &str) {
    let json = serde_json::json!({ "center": label, "branches": [{ "text": label }] }).to_string();
    let tree = parse_tree(&json).unwrap();
    assert_eq!(tree.center(), label);
    assert_eq!(tree.branches()[0].text(), label);
}

proptest! {
    #[test]
    fn extract_ignores_surrounding_prose(prefix in "[a-zA-Z .,!\n]{0,40}", suffix in "[a-zA-Z .,!\n`]{0,40}") {
        check_extract_ignores_surrounding_prose(&prefix, &suffix);
    }

    #[test]
    fn label_survives_parsing(label in "\\PC{0,24}") {
        check_label_survives_parsing(&label);
    }
}
