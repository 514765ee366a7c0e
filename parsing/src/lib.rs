//! String grammar for Windows Security Identifiers, shared by `sid-codec` and
//! its `sid!` macro.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::num::ParseIntError;
use core::str::FromStr;

use thiserror::Error;

/// Separator between the components of a SID string.
pub const SEPARATOR: char = '-';

/// Raw components of a SID string (`S-<revision>-<authority>-<sub>...`).
///
/// Only [`FromStr`] builds this type, so it never holds more than
/// [`u8::MAX`] sub-authorities:
/// ```compile_fail
/// let components = sid_codec_parsing::SidComponents {
///     revision: 1,
///     identifier_authority: [0, 0, 0, 0, 0, 5],
///     sub_authority: vec![0; 300],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidComponents {
    revision: u8,
    identifier_authority: [u8; 6],
    sub_authority: Vec<u32>,
}

impl SidComponents {
    /// The SID revision value, truncated to 8 bits.
    #[must_use]
    #[inline]
    pub const fn revision(&self) -> u8 {
        self.revision
    }

    /// The SID identifier authority, two zero bytes then the big-endian `u32`.
    #[must_use]
    #[inline]
    pub const fn identifier_authority(&self) -> [u8; 6] {
        self.identifier_authority
    }

    /// The SID sub-authority values.
    #[must_use]
    #[inline]
    pub fn sub_authority(&self) -> &[u32] {
        &self.sub_authority
    }

    /// Consumes the components and returns the sub-authority values.
    #[must_use]
    #[inline]
    pub fn into_sub_authority(self) -> Vec<u32> {
        self.sub_authority
    }

    /// Number of parsed sub-authorities. Always equals `sub_authority().len()`.
    #[must_use]
    #[inline]
    pub fn sub_authority_count(&self) -> u8 {
        // `from_str` refuses more than `u8::MAX` entries, so this never saturates.
        u8::try_from(self.sub_authority.len()).unwrap_or(u8::MAX)
    }
}

/// Numeric field of a SID string that failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidField {
    /// The revision, second component.
    Revision,
    /// The identifier authority, third component.
    Authority,
    /// The sub-authority at the given zero-based position.
    SubAuthority(usize),
}

impl Display for SidField {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revision => f.write_str("revision"),
            Self::Authority => f.write_str("identifier authority"),
            Self::SubAuthority(index) => write!(f, "sub-authority {index}"),
        }
    }
}

/// Error returned when a SID string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseSidError {
    /// Fewer than four `-` separated components.
    #[error("invalid SID representation")]
    InvalidFormat,
    /// A component is not a base-10 unsigned 32-bit integer.
    #[error("couldn't convert {field} to an integer: {source}")]
    InvalidNumber {
        /// Which component failed.
        field: SidField,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// More sub-authorities than an 8-bit count can describe.
    #[error("too many sub-authorities: {0} exceeds the 8-bit count")]
    TooManySubAuthorities(usize),
}

/// Parses a bare run of ASCII digits into a `u32`.
fn parse_decimal(field: SidField, s: &str) -> Result<u32, ParseSidError> {
    // `u32::from_str` accepts a leading `+`; parsing the lone sign reports it as an invalid digit.
    let digits = if s.starts_with('+') { "+" } else { s };
    digits
        .parse::<u32>()
        .map_err(|source| ParseSidError::InvalidNumber { field, source })
}

impl FromStr for SidComponents {
    type Err = ParseSidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        // The leading `S` is never checked, only the component count.
        let [_, revision, authority, sub_parts @ ..] = parts.as_slice() else {
            return Err(ParseSidError::InvalidFormat);
        };
        if sub_parts.is_empty() {
            return Err(ParseSidError::InvalidFormat);
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "The revision is read as 32 bits and kept as its low 8 bits"
        )]
        let revision = parse_decimal(SidField::Revision, revision)? as u8;

        let authority = parse_decimal(SidField::Authority, authority)?.to_be_bytes();
        let [a, b, c, d] = authority;
        let identifier_authority = [0, 0, a, b, c, d];

        let mut sub_authority = Vec::with_capacity(sub_parts.len());
        for (index, part) in sub_parts.iter().enumerate() {
            if index == usize::from(u8::MAX) {
                return Err(ParseSidError::TooManySubAuthorities(sub_parts.len()));
            }
            sub_authority.push(parse_decimal(SidField::SubAuthority(index), part)?);
        }

        Ok(Self {
            revision,
            identifier_authority,
            sub_authority,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Unwrap is not an issue in test")]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use proptest::prelude::*;

    #[test]
    fn parses_domain_user() {
        let parsed: SidComponents = "S-1-5-21-3623811015-3361044348-30300820-1013"
            .parse()
            .unwrap();
        assert_eq!(parsed.revision, 1);
        assert_eq!(parsed.identifier_authority, [0, 0, 0, 0, 0, 5]);
        assert_eq!(
            parsed.sub_authority,
            [21, 3_623_811_015, 3_361_044_348, 30_300_820, 1013]
        );
        assert_eq!(parsed.sub_authority_count(), 5);
    }

    #[test]
    fn rejects_fewer_than_four_parts() {
        for input in ["", "S", "S-1", "S-1-5"] {
            assert_eq!(
                input.parse::<SidComponents>(),
                Err(ParseSidError::InvalidFormat),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn leading_component_is_not_checked() {
        let parsed: SidComponents = "X-1-5-18".parse().unwrap();
        assert_eq!(parsed.sub_authority, [18]);
    }

    #[test]
    fn reports_failing_field() {
        let field_of = |input: &str| match input.parse::<SidComponents>() {
            Err(ParseSidError::InvalidNumber { field, .. }) => Some(field),
            _ => None,
        };
        assert_eq!(field_of("S-x-5-1"), Some(SidField::Revision));
        assert_eq!(field_of("S-1-0x5-1"), Some(SidField::Authority));
        assert_eq!(field_of("S-1-4294967296-1"), Some(SidField::Authority));
        assert_eq!(field_of("S-1-5-abc"), Some(SidField::SubAuthority(0)));
        assert_eq!(field_of("S-1-5-21-"), Some(SidField::SubAuthority(1)));
        assert_eq!(field_of("S-1-5-+21"), Some(SidField::SubAuthority(0)));
    }

    #[test]
    fn revision_is_truncated() {
        let parsed: SidComponents = "S-257-5-1".parse().unwrap();
        assert_eq!(parsed.revision, 1);
    }

    #[test]
    fn authority_is_big_endian_u32() {
        let parsed: SidComponents = "S-1-4294967295-1".parse().unwrap();
        assert_eq!(parsed.identifier_authority, [0, 0, 0xff, 0xff, 0xff, 0xff]);
        let parsed: SidComponents = "S-1-66051-1".parse().unwrap();
        assert_eq!(parsed.identifier_authority, [0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn count_matches_len_at_limit() {
        let mut input = String::from("S-1-5");
        for i in 0..255 {
            input.push_str(&format!("-{i}"));
        }
        let parsed: SidComponents = input.parse().unwrap();
        assert_eq!(parsed.sub_authority_count(), u8::MAX);
        assert_eq!(parsed.sub_authority().len(), 255);
    }

    #[test]
    fn too_many_sub_authorities() {
        let mut input = String::from("S-1-5");
        for i in 0..256 {
            input.push_str(&format!("-{i}"));
        }
        assert_eq!(
            input.parse::<SidComponents>(),
            Err(ParseSidError::TooManySubAuthorities(256))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            format!("{}", ParseSidError::InvalidFormat),
            "invalid SID representation"
        );
        let err = "S-1-5-abc".parse::<SidComponents>().unwrap_err();
        assert!(
            format!("{err}").starts_with("couldn't convert sub-authority 0 to an integer"),
            "unexpected message: {err}"
        );
    }

    proptest! {
        #[test]
        fn count_matches_len(subs in proptest::collection::vec(any::<u32>(), 1..=40)) {
            let mut input = String::from("S-1-5");
            for sub in &subs {
                input.push_str(&format!("-{sub}"));
            }
            let parsed: SidComponents = input.parse().unwrap();
            prop_assert_eq!(usize::from(parsed.sub_authority_count()), parsed.sub_authority.len());
            prop_assert_eq!(parsed.sub_authority, subs);
        }
    }
}
