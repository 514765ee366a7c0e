use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, de};
use serde::{Serialize, Serializer};

use crate::{SecurityIdentifier, SidIdentifierAuthority};

/// Always the string form: the binary form has no reader to come back through.
impl Serialize for SecurityIdentifier {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SecurityIdentifier {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SidVisitor;

        impl de::Visitor<'_> for SidVisitor {
            type Value = SecurityIdentifier;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a Windows SID as a string (e.g., \"S-1-...\")")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SecurityIdentifier::from_str(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(SidVisitor)
    }
}

impl Serialize for SidIdentifierAuthority {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.value)
        }
    }
}

/// Reads back the `Display` form: a decimal `u32`, or `0x` and twelve hex digits.
fn parse_authority(v: &str) -> Option<SidIdentifierAuthority> {
    if let Some(hex) = v.strip_prefix("0x") {
        if hex.len() != 12 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let [_, _, a, b, c, d, e, f] = u64::from_str_radix(hex, 16).ok()?.to_be_bytes();
        Some(SidIdentifierAuthority::from_bytes([a, b, c, d, e, f]))
    } else if v.bytes().all(|b| b.is_ascii_digit()) {
        v.parse::<u32>().ok().map(SidIdentifierAuthority::from)
    } else {
        None
    }
}

impl<'de> Deserialize<'de> for SidIdentifierAuthority {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AuthorityVisitor;

        impl de::Visitor<'_> for AuthorityVisitor {
            type Value = SidIdentifierAuthority;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a SID identifier authority as a string (e.g., \"5\") or as 6 raw bytes")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_authority(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                <[u8; 6]>::try_from(v)
                    .map(SidIdentifierAuthority::from_bytes)
                    .map_err(|_| E::invalid_length(v.len(), &self))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(AuthorityVisitor)
        } else {
            deserializer.deserialize_bytes(AuthorityVisitor)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Unwrap is not an issue in test")]
mod test {
    use crate::{SecurityIdentifier, SidIdentifierAuthority, well_known};
    use serde_test::{self, Configure, Token};

    #[test]
    fn test_compact() {
        serde_test::assert_tokens(
            &well_known::builtin_administrators().compact(),
            &[Token::String("S-1-5-32-544")],
        );
    }

    #[test]
    fn test_human() {
        serde_test::assert_tokens(
            &well_known::builtin_administrators().readable(),
            &[Token::String("S-1-5-32-544")],
        );
    }

    #[test]
    fn test_inconsistent_count_serializes_rendered_form() {
        let mut sid = well_known::builtin_administrators();
        sid.sub_authority_count = 3;
        serde_test::assert_ser_tokens(&sid.compact(), &[Token::String("S-1-5-32-544")]);
    }

    #[test]
    fn test_invalid_string() {
        serde_test::assert_de_tokens_error::<serde_test::Readable<SecurityIdentifier>>(
            &[Token::Str("S-1-5")],
            "invalid value: string \"S-1-5\", expected a Windows SID as a string (e.g., \"S-1-...\")",
        );
    }

    #[test]
    fn test_authority() {
        serde_test::assert_tokens(
            &SidIdentifierAuthority::from_bytes([1, 0, 0, 0, 0, 0]).readable(),
            &[Token::String("0x010000000000")],
        );
        serde_test::assert_tokens(
            &SidIdentifierAuthority::NT_AUTHORITY.readable(),
            &[Token::String("5")],
        );
        serde_test::assert_tokens(
            &SidIdentifierAuthority::NT_AUTHORITY.compact(),
            &[Token::Bytes(&[0, 0, 0, 0, 0, 5])],
        );
    }

    #[test]
    fn test_invalid_authority() {
        serde_test::assert_de_tokens_error::<serde_test::Readable<SidIdentifierAuthority>>(
            &[Token::Str("0x12")],
            "invalid value: string \"0x12\", expected a SID identifier authority as a string (e.g., \"5\") or as 6 raw bytes",
        );
        serde_test::assert_de_tokens_error::<serde_test::Readable<SidIdentifierAuthority>>(
            &[Token::Str("+5")],
            "invalid value: string \"+5\", expected a SID identifier authority as a string (e.g., \"5\") or as 6 raw bytes",
        );
        serde_test::assert_de_tokens_error::<serde_test::Compact<SidIdentifierAuthority>>(
            &[Token::Bytes(&[0, 5])],
            "invalid length 2, expected a SID identifier authority as a string (e.g., \"5\") or as 6 raw bytes",
        );
    }

    #[test]
    fn test_json() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Account {
            sid: SecurityIdentifier,
            authority: SidIdentifierAuthority,
        }
        let json = r#"{"sid":"S-1-5-21-3623811015-3361044348-30300820-1013","authority":"0x123456789abc"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.sid.sub_authority_count, 5);
        assert_eq!(account.authority.value, [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]);
        assert_eq!(serde_json::to_string(&account).unwrap(), json);
    }
}
