//! Builtin host types installed into every environment
//!
//! The host prelude: the standard value types with their guest alias
//! tokens. The array-family root lives in the SDK because derived array
//! types link back to it.

use gantry_sdk::{HostType, HostTypeBuilder, TypeKind};
use once_cell::sync::Lazy;

static INT64: Lazy<HostType> = Lazy::new(|| builtin("Int64"));
static FLOAT64: Lazy<HostType> = Lazy::new(|| builtin("Float64"));
static BOOLEAN: Lazy<HostType> = Lazy::new(|| builtin("Boolean"));
static TEXT: Lazy<HostType> = Lazy::new(|| builtin("Text"));

fn builtin(name: &str) -> HostType {
    HostTypeBuilder::new(name)
        .namespace("Host")
        .kind(TypeKind::Builtin)
        .build()
}

/// The builtin 64-bit integer type
pub fn int64() -> HostType {
    INT64.clone()
}

/// The builtin 64-bit float type
pub fn float64() -> HostType {
    FLOAT64.clone()
}

/// The builtin boolean type
pub fn boolean() -> HostType {
    BOOLEAN.clone()
}

/// The builtin text type
pub fn text() -> HostType {
    TEXT.clone()
}

/// Guest alias tokens installed by every new environment
pub fn standard_aliases() -> Vec<(&'static str, HostType)> {
    vec![
        ("int", int64()),
        ("float", float64()),
        ("bool", boolean()),
        ("str", text()),
    ]
}

/// All builtin types, including the array root
pub fn builtin_types() -> Vec<HostType> {
    vec![
        HostType::array_root(),
        int64(),
        float64(),
        boolean(),
        text(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(int64().qualified_name(), "Host.Int64");
        assert_eq!(float64().qualified_name(), "Host.Float64");
        assert_eq!(boolean().qualified_name(), "Host.Boolean");
        assert_eq!(text().qualified_name(), "Host.Text");
    }

    #[test]
    fn test_builtins_are_interned() {
        assert_eq!(int64(), int64());
        assert!(matches!(int64().kind(), TypeKind::Builtin));
    }

    #[test]
    fn test_standard_aliases_cover_value_types() {
        let aliases = standard_aliases();
        let tokens: Vec<&str> = aliases.iter().map(|(token, _)| *token).collect();
        assert_eq!(tokens, ["int", "float", "bool", "str"]);
    }

    #[test]
    fn test_builtin_types_include_array_root() {
        let types = builtin_types();
        assert!(types.iter().any(|ty| ty.is_array_root()));
        assert_eq!(types.len(), 5);
    }
}
