//! # Windows Security Identifier (SID) codec for Rust
//!
//! Encodes, decodes and renders Windows **SIDs** as used by Windows-family
//! authentication and directory protocols. The crate provides:
//! - [`SecurityIdentifier`]: the SID as a plain value with public fields.
//! - [`SidIdentifierAuthority`]: the 6-byte authority component of SIDs.
//! - [`SubAuthorities`]: the owned, ordered list of sub-authorities.
//! - [`well_known`]: constructors for common SIDs.
//!
//! ## Conversions
//! - **Text**: [`Display`](core::fmt::Display) renders
//!   `S-<revision>-<authority>-<sub>...`, [`FromStr`](core::str::FromStr)
//!   parses it back (decimal authorities up to `u32::MAX` only).
//! - **Binary**: [`SecurityIdentifier::write_to`] writes the little-endian
//!   wire form to any [`std::io::Write`], [`SecurityIdentifier::to_bytes`]
//!   returns it as a buffer. Reading the binary form is not provided.
//!
//! ## Count and length
//! `sub_authority_count` is a field of its own and is not kept in sync with
//! `sub_authority`. Rendering uses the real length, the binary form uses the
//! count. See [`SecurityIdentifier`] for details.
//!
//! ## Examples
//! ### Parse and render
//! ```rust
//! use sid_codec::SecurityIdentifier;
//!
//! let sid: SecurityIdentifier = "S-1-5-21-3623811015-3361044348-30300820-1013".parse().unwrap();
//! assert_eq!(sid.sub_authority_count, 5);
//! assert_eq!(sid.to_string(), "S-1-5-21-3623811015-3361044348-30300820-1013");
//! ```
//!
//! ### Write the binary form
//! ```rust
//! # #[cfg(feature = "std")]
//! # {
//! use sid_codec::well_known;
//!
//! let mut out = Vec::new();
//! well_known::local_system().write_to(&mut out).unwrap();
//! assert_eq!(out, [1, 1, 0, 0, 0, 0, 0, 5, 18, 0, 0, 0]);
//! # }
//! ```
//!
//! ## No-std?
//! Supported with `default-features = false`; an allocator is still needed.
//! Without `std`, only [`SecurityIdentifier::to_bytes`] produces the binary form.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

extern crate alloc;
// Lets the `sid!` expansion name this crate from inside it.
extern crate self as sid_codec;

mod security_identifier;
mod sid_identifier_authority;
mod sub_authorities;

pub use security_identifier::{SID_HEAD_SIZE, SecurityIdentifier, SubAuthorityOutOfRange};
#[cfg(feature = "std")]
pub use security_identifier::WriteSidError;

/// Identifier authority component of a SID (6-byte value).
///
/// See also: [`SecurityIdentifier::identifier_authority`].
pub use sid_identifier_authority::SidIdentifierAuthority;

/// Owned sub-authority list of a SID.
pub use sub_authorities::SubAuthorities;

/// Errors and field names reported when parsing a SID string.
pub use parsing::{ParseSidError, SidField};

pub mod well_known;

#[cfg(feature = "serde")]
mod serde_impl;

/// Compile-time checked SID literal.
///
/// ```rust
/// use sid_codec::sid;
/// let admins = sid!("S-1-5-32-544");
/// assert_eq!(admins, sid_codec::well_known::builtin_administrators());
/// ```
///
/// A malformed literal is a compile error:
/// ```compile_fail
/// let bad = sid_codec::sid!("S-1-5");
/// ```
#[cfg(feature = "macro")]
pub use sid_macro::sid;
