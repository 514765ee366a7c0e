//! Well-known SIDs
//!
//! Source: <https://learn.microsoft.com/windows/win32/secauthz/well-known-sids>
//!
//! Each function returns a fresh, consistent [`SecurityIdentifier`] with
//! revision 1.

use crate::{SecurityIdentifier, SidIdentifierAuthority};

fn well_known<const N: usize>(authority: SidIdentifierAuthority, sub_authority: [u32; N]) -> SecurityIdentifier {
    SecurityIdentifier::new(SecurityIdentifier::REVISION, authority, sub_authority)
}

// ---- Basic Authorities ----

/// Null SID (S-1-0-0)
#[must_use]
#[inline]
pub fn null() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NULL_AUTHORITY, [0])
}

/// World SID (S-1-1-0)
#[must_use]
#[inline]
pub fn world() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::WORLD_AUTHORITY, [0])
}

/// Local SID (S-1-2-0)
#[must_use]
#[inline]
pub fn local() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::LOCAL_AUTHORITY, [0])
}

/// Creator Owner SID (S-1-3-0)
#[must_use]
#[inline]
pub fn creator_owner() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::CREATOR_AUTHORITY, [0])
}

/// Creator Group SID (S-1-3-1)
#[must_use]
#[inline]
pub fn creator_group() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::CREATOR_AUTHORITY, [1])
}

// ---- NT Authority (S-1-5) ----

/// Local System (S-1-5-18)
#[must_use]
#[inline]
pub fn local_system() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NT_AUTHORITY, [18])
}

/// Local Service (S-1-5-19)
#[must_use]
#[inline]
pub fn local_service() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NT_AUTHORITY, [19])
}

/// Network Service (S-1-5-20)
#[must_use]
#[inline]
pub fn network_service() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NT_AUTHORITY, [20])
}

// ---- BUILTIN Domain (S-1-5-32) ----

/// BUILTIN\Administrators (S-1-5-32-544)
#[must_use]
#[inline]
pub fn builtin_administrators() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NT_AUTHORITY, [32, 544])
}

/// BUILTIN\Users (S-1-5-32-545)
#[must_use]
#[inline]
pub fn builtin_users() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NT_AUTHORITY, [32, 545])
}

/// BUILTIN\Guests (S-1-5-32-546)
#[must_use]
#[inline]
pub fn builtin_guests() -> SecurityIdentifier {
    well_known(SidIdentifierAuthority::NT_AUTHORITY, [32, 546])
}
