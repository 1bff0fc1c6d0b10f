//! 128-bit host type identity
//!
//! Identifies a host type independently of its reflection metadata. The
//! identity is stable for the lifetime of a host type and serves as the
//! key of the engine's resolution cache.

use std::fmt;
use std::str::FromStr;

/// 128-bit identifier naming a host type.
///
/// Rendered and parsed in the canonical hyphenated form
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (lowercase hex, optional
/// surrounding braces accepted on parse).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentity([u8; 16]);

/// Error produced when parsing a [`TypeIdentity`] from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityParseError {
    /// Wrong number of hex digits (32 expected)
    #[error("identity must contain 32 hex digits, found {0}")]
    Length(usize),

    /// A character that is neither a hex digit nor a separator
    #[error("invalid character {0:?} in identity")]
    Character(char),
}

impl TypeIdentity {
    /// The all-zero identity
    pub const NIL: TypeIdentity = TypeIdentity([0; 16]);

    /// Create an identity from raw bytes
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        TypeIdentity(bytes)
    }

    /// Raw bytes of the identity
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Whether this is the all-zero identity
    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]
        )
    }
}

impl FromStr for TypeIdentity {
    type Err = IdentityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .trim_start_matches('{')
            .trim_end_matches('}');

        let mut bytes = [0u8; 16];
        let mut nibbles = 0usize;
        for c in body.chars() {
            if c == '-' {
                continue;
            }
            let digit = c.to_digit(16).ok_or(IdentityParseError::Character(c))? as u8;
            if nibbles < 32 {
                let index = nibbles / 2;
                if nibbles % 2 == 0 {
                    bytes[index] = digit << 4;
                } else {
                    bytes[index] |= digit;
                }
            }
            nibbles += 1;
        }
        if nibbles != 32 {
            return Err(IdentityParseError::Length(nibbles));
        }
        Ok(TypeIdentity(bytes))
    }
}

impl serde::Serialize for TypeIdentity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TypeIdentity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        let id = TypeIdentity::from_bytes([
            0x00, 0x02, 0xdf, 0x01, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x46,
        ]);
        let rendered = id.to_string();
        assert_eq!(rendered, "0002df01-0000-0000-c000-000000000046");
        assert_eq!(rendered.parse::<TypeIdentity>().unwrap(), id);
    }

    #[test]
    fn test_parse_braced_and_uppercase() {
        let id: TypeIdentity = "{0002DF01-0000-0000-C000-000000000046}".parse().unwrap();
        assert_eq!(id.to_string(), "0002df01-0000-0000-c000-000000000046");
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = "0002df01".parse::<TypeIdentity>().unwrap_err();
        assert_eq!(err, IdentityParseError::Length(8));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = "0002df01-0000-0000-c000-00000000004z"
            .parse::<TypeIdentity>()
            .unwrap_err();
        assert_eq!(err, IdentityParseError::Character('z'));
    }

    #[test]
    fn test_nil() {
        assert!(TypeIdentity::NIL.is_nil());
        assert_eq!(
            TypeIdentity::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        let parsed: TypeIdentity = "00000000-0000-0000-0000-000000000000".parse().unwrap();
        assert!(parsed.is_nil());
    }

    #[test]
    fn test_ordering_is_byte_order() {
        let low = TypeIdentity::from_bytes([0; 16]);
        let mut raised = [0u8; 16];
        raised[0] = 1;
        let high = TypeIdentity::from_bytes(raised);
        assert!(low < high);
    }
}
