use crate::NodeType;

use std::str::FromStr;

#[test]
fn test_node_type_from_str_accepts_every_variant() {
    for node_type in NodeType::ALL {
        assert_eq!(NodeType::from_str(node_type.as_str()).unwrap(), node_type);
    }
}

#[test]
fn test_node_type_from_str_rejects_unknown() {
    assert!(NodeType::from_str("basement").is_err());
}

#[test]
fn test_node_type_default() {
    assert_eq!(NodeType::default(), NodeType::Room);
}
