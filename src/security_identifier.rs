use crate::{SidIdentifierAuthority, SubAuthorities};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;
use parsing::{ParseSidError, SidComponents};
#[cfg(feature = "std")]
use std::io;

mod write_error;
#[cfg(feature = "std")]
pub use write_error::WriteSidError;
pub use write_error::SubAuthorityOutOfRange;

/// Size of the fixed part of the binary form: revision, count and authority.
pub const SID_HEAD_SIZE: usize = 8;

/// Windows **Security Identifier** (SID) as a plain value.
///
/// All fields are public, so a SID can be built by field assignment, by
/// [`SecurityIdentifier::new`], or parsed from text with [`FromStr`].
///
/// # Count and length
/// `sub_authority_count` is stored next to `sub_authority` and is **not**
/// kept in sync with it. Each operation reads a different one:
/// - [`Display`] renders every entry of `sub_authority`, ignoring the count.
/// - [`write_to`](Self::write_to) and [`to_bytes`](Self::to_bytes) emit
///   exactly `sub_authority_count` entries. Extra entries are dropped and a
///   count larger than the sequence is an error.
/// - Parsing always yields a count equal to the length.
///
/// Callers that assign the fields directly are responsible for keeping them
/// consistent, see [`is_consistent`](Self::is_consistent).
///
/// # Examples
/// ```rust
/// # use sid_codec::{SecurityIdentifier, SidIdentifierAuthority};
/// let sid = SecurityIdentifier::new(1, SidIdentifierAuthority::NT_AUTHORITY, [32, 544]);
/// assert_eq!(sid.to_string(), "S-1-5-32-544");
/// assert_eq!(sid.to_bytes().unwrap(), [1, 2, 0, 0, 0, 0, 0, 5, 32, 0, 0, 0, 32, 2, 0, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SecurityIdentifier {
    /// The SID revision value, generally 1. Not validated.
    pub revision: u8,
    /// Number of sub-authorities written by the binary form.
    pub sub_authority_count: u8,
    /// The SID identifier authority value.
    pub identifier_authority: SidIdentifierAuthority,
    /// The SID sub-authority values.
    pub sub_authority: SubAuthorities,
}

impl SecurityIdentifier {
    /// The only revision defined by Windows.
    pub const REVISION: u8 = 1;

    /// Largest sub-authority count Windows accepts. Not enforced by this type.
    pub const MAX_SUBAUTHORITY_COUNT: u8 = 15;

    /// Creates a SID whose count matches its sub-authorities.
    ///
    /// More than 255 sub-authorities saturate the count at 255. Use
    /// [`try_new`](Self::try_new) to reject such input instead.
    #[must_use]
    #[inline]
    pub fn new<I, S>(revision: u8, identifier_authority: I, sub_authority: S) -> Self
    where
        I: Into<SidIdentifierAuthority>,
        S: Into<SubAuthorities>,
    {
        let sub_authority = sub_authority.into();
        Self {
            revision,
            sub_authority_count: u8::try_from(sub_authority.len()).unwrap_or(u8::MAX),
            identifier_authority: identifier_authority.into(),
            sub_authority,
        }
    }

    /// Creates a SID whose count matches its sub-authorities.
    ///
    /// Returns `None` if there are more sub-authorities than an 8-bit count
    /// can describe.
    ///
    /// # Examples
    /// ```rust
    /// # use sid_codec::{SecurityIdentifier, SidIdentifierAuthority};
    /// let sid = SecurityIdentifier::try_new(1, SidIdentifierAuthority::NT_AUTHORITY, [18]).unwrap();
    /// assert_eq!(sid.sub_authority_count, 1);
    /// assert!(SecurityIdentifier::try_new(1, SidIdentifierAuthority::NT_AUTHORITY, vec![0; 256]).is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn try_new<I, S>(revision: u8, identifier_authority: I, sub_authority: S) -> Option<Self>
    where
        I: Into<SidIdentifierAuthority>,
        S: Into<SubAuthorities>,
    {
        let sub_authority = sub_authority.into();
        let sub_authority_count = u8::try_from(sub_authority.len()).ok()?;
        Some(Self {
            revision,
            sub_authority_count,
            identifier_authority: identifier_authority.into(),
            sub_authority,
        })
    }

    /// Builds a SID from raw parts. Used by the `sid!` macro expansion.
    #[doc(hidden)]
    #[must_use]
    #[inline]
    pub fn from_components(revision: u8, identifier_authority: [u8; 6], sub_authority: &[u32]) -> Self {
        Self::new(revision, identifier_authority, sub_authority)
    }

    /// `true` when `sub_authority_count` equals the number of sub-authorities.
    #[must_use]
    #[inline]
    pub fn is_consistent(&self) -> bool {
        usize::from(self.sub_authority_count) == self.sub_authority.len()
    }

    /// Size in bytes of the binary form: `8 + 4 * sub_authority_count`.
    #[must_use]
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        SID_HEAD_SIZE + self.sub_authority_count as usize * size_of::<u32>()
    }

    /// The first `sub_authority_count` sub-authorities, the ones the binary form carries.
    ///
    /// # Errors
    /// [`SubAuthorityOutOfRange`] if the count exceeds the sequence length.
    #[inline]
    pub fn counted_sub_authorities(&self) -> Result<&[u32], SubAuthorityOutOfRange> {
        self.sub_authority
            .get(..usize::from(self.sub_authority_count))
            .ok_or(SubAuthorityOutOfRange {
                count: self.sub_authority_count,
                len: self.sub_authority.len(),
            })
    }

    /// Writes the binary form to `writer`.
    ///
    /// Layout: revision, count, the six raw authority bytes as stored, then
    /// `sub_authority_count` little-endian `u32` values. The writer is
    /// neither flushed nor closed.
    ///
    /// # Errors
    /// - [`WriteSidError::OutOfRange`] if `sub_authority_count` exceeds the
    ///   number of sub-authorities. Checked before anything is written.
    /// - [`WriteSidError::Io`] as soon as the writer fails. Earlier fields may
    ///   already be in the writer.
    ///
    /// # Examples
    /// ```rust
    /// # use sid_codec::{SecurityIdentifier, SidIdentifierAuthority};
    /// let mut sid = SecurityIdentifier::new(1, SidIdentifierAuthority::NT_AUTHORITY, [10, 20, 30]);
    /// sid.sub_authority_count = 2;
    /// let mut out = Vec::new();
    /// sid.write_to(&mut out).unwrap();
    /// assert_eq!(out, [1, 2, 0, 0, 0, 0, 0, 5, 10, 0, 0, 0, 20, 0, 0, 0]);
    ///
    /// sid.sub_authority_count = 5;
    /// assert!(sid.write_to(&mut Vec::new()).is_err());
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn write_to<W: io::Write + ?Sized>(&self, writer: &mut W) -> Result<(), WriteSidError> {
        let sub_authorities = self.counted_sub_authorities()?;
        writer.write_all(&[self.revision, self.sub_authority_count])?;
        writer.write_all(&self.identifier_authority.value)?;
        for sub_authority in sub_authorities {
            writer.write_all(&sub_authority.to_le_bytes())?;
        }
        Ok(())
    }

    /// Returns the binary form in a new buffer of [`encoded_len`](Self::encoded_len) bytes.
    ///
    /// # Errors
    /// [`SubAuthorityOutOfRange`] if `sub_authority_count` exceeds the number
    /// of sub-authorities.
    #[inline]
    pub fn to_bytes(&self) -> Result<Vec<u8>, SubAuthorityOutOfRange> {
        let sub_authorities = self.counted_sub_authorities()?;
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.extend_from_slice(&[self.revision, self.sub_authority_count]);
        bytes.extend_from_slice(&self.identifier_authority.value);
        bytes.extend(sub_authorities.iter().flat_map(|sub| sub.to_le_bytes()));
        Ok(bytes)
    }
}

impl From<SidComponents> for SecurityIdentifier {
    #[inline]
    fn from(components: SidComponents) -> Self {
        Self {
            revision: components.revision(),
            sub_authority_count: components.sub_authority_count(),
            identifier_authority: components.identifier_authority().into(),
            sub_authority: components.into_sub_authority().into(),
        }
    }
}

/// Parses `S-<revision>-<authority>-<sub>...`.
///
/// Only decimal authorities up to `u32::MAX` are accepted, so the `0x` form
/// produced by [`Display`] for wider authorities does not parse back.
impl FromStr for SecurityIdentifier {
    type Err = ParseSidError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SidComponents::from_str(s).map(Self::from)
    }
}

impl TryFrom<&str> for SecurityIdentifier {
    type Error = ParseSidError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for SecurityIdentifier {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}-{}", self.revision, self.identifier_authority)?;
        for sub_authority in &self.sub_authority {
            write!(f, "-{sub_authority}")?;
        }
        Ok(())
    }
}
