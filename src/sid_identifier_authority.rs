use core::fmt::{self, Display};

/// Top-level authority of a SID, six bytes read as a big-endian 48-bit value.
///
/// The bytes are stored exactly as they appear on the wire. String rendering
/// reinterprets them as a big-endian integer, see the [`Display`] impl.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SidIdentifierAuthority {
    /// Raw authority bytes, most significant first.
    pub value: [u8; 6],
}

impl SidIdentifierAuthority {
    /// `S-1-0`
    pub const NULL_AUTHORITY: Self = Self::from_bytes([0, 0, 0, 0, 0, 0]);
    /// `S-1-1`
    pub const WORLD_AUTHORITY: Self = Self::from_bytes([0, 0, 0, 0, 0, 1]);
    /// `S-1-2`
    pub const LOCAL_AUTHORITY: Self = Self::from_bytes([0, 0, 0, 0, 0, 2]);
    /// `S-1-3`
    pub const CREATOR_AUTHORITY: Self = Self::from_bytes([0, 0, 0, 0, 0, 3]);
    /// `S-1-5`, the NT authority.
    pub const NT_AUTHORITY: Self = Self::from_bytes([0, 0, 0, 0, 0, 5]);

    /// Wraps raw authority bytes.
    #[must_use]
    #[inline]
    pub const fn from_bytes(value: [u8; 6]) -> Self {
        Self { value }
    }

    /// The authority as a 48-bit big-endian integer.
    ///
    /// # Examples
    /// ```rust
    /// # use sid_codec::SidIdentifierAuthority;
    /// assert_eq!(SidIdentifierAuthority::NT_AUTHORITY.value(), 5);
    /// assert_eq!(SidIdentifierAuthority::from_bytes([1, 0, 0, 0, 0, 0]).value(), 1 << 40);
    /// ```
    #[must_use]
    #[inline]
    pub const fn value(&self) -> u64 {
        let [a, b, c, d, e, f] = self.value;
        u64::from_be_bytes([0, 0, a, b, c, d, e, f])
    }
}

impl From<[u8; 6]> for SidIdentifierAuthority {
    #[inline]
    fn from(value: [u8; 6]) -> Self {
        Self { value }
    }
}

impl From<SidIdentifierAuthority> for [u8; 6] {
    #[inline]
    fn from(value: SidIdentifierAuthority) -> Self {
        value.value
    }
}

/// Two zero bytes followed by the big-endian `u32`, the encoding used by string parsing.
impl From<u32> for SidIdentifierAuthority {
    #[inline]
    fn from(value: u32) -> Self {
        let [a, b, c, d] = value.to_be_bytes();
        Self::from_bytes([0, 0, a, b, c, d])
    }
}

/// Decimal when the value fits in 32 bits, otherwise `0x` followed by the
/// twelve lowercase hex digits of the raw bytes.
impl Display for SidIdentifierAuthority {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        if value > u64::from(u32::MAX) {
            f.write_str("0x")?;
            for byte in self.value {
                write!(f, "{byte:02x}")?;
            }
            Ok(())
        } else {
            write!(f, "{value}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Unwrap is not an issue in test")]
pub(crate) mod test {
    use super::*;
    use alloc::string::ToString;
    use proptest::prelude::*;

    prop_compose! {
        pub fn arb_identifier_authority()
            (val in any::<u32>())
            -> SidIdentifierAuthority {
            SidIdentifierAuthority::from(val)
        }
    }

    pub fn arb_wide_identifier_authority() -> impl Strategy<Value = SidIdentifierAuthority> {
        any::<[u8; 6]>().prop_map(SidIdentifierAuthority::from_bytes)
    }

    #[test]
    fn display_threshold() {
        assert_eq!(SidIdentifierAuthority::NT_AUTHORITY.to_string(), "5");
        assert_eq!(SidIdentifierAuthority::from(u32::MAX).to_string(), "4294967295");
        assert_eq!(
            SidIdentifierAuthority::from_bytes([0, 1, 0, 0, 0, 0]).to_string(),
            "0x000100000000"
        );
        assert_eq!(
            SidIdentifierAuthority::from_bytes([0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc]).to_string(),
            "0x123456789abc"
        );
    }

    proptest! {
        #[test]
        fn hex_form_is_twelve_digits(authority in arb_wide_identifier_authority()) {
            let rendered = authority.to_string();
            if authority.value() > u64::from(u32::MAX) {
                prop_assert_eq!(rendered.len(), 14);
                prop_assert_eq!(u64::from_str_radix(&rendered[2..], 16).unwrap(), authority.value());
            } else {
                prop_assert_eq!(rendered.parse::<u64>().unwrap(), authority.value());
            }
        }
    }
}
