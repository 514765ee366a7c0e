use thiserror::Error;

/// `sub_authority_count` names more entries than `sub_authority` holds.
///
/// The binary form writes exactly `sub_authority_count` sub-authorities, so
/// it cannot be produced for such a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sub-authority count {count} exceeds the {len} sub-authorities present")]
pub struct SubAuthorityOutOfRange {
    /// The declared `sub_authority_count`.
    pub count: u8,
    /// The actual number of sub-authorities.
    pub len: usize,
}

/// Errors that can occur when writing the binary form of a SID to a sink.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteSidError {
    /// The count field cannot be honoured, nothing was written.
    #[error(transparent)]
    OutOfRange(#[from] SubAuthorityOutOfRange),

    /// The sink rejected a write. Bytes written before the failure stay in the sink.
    #[error("failed to write SID: {0}")]
    Io(#[from] std::io::Error),
}
