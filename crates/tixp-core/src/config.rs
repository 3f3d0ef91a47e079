//! tixp Configuration
//!
//! Decode-time options for the .8xp codec.
//! Configuration selects behavior only; enforcement lives in the decoder.

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TixpConfig {
    /// Recompute the trailing checksum and reject containers whose stored
    /// value differs. Off by default; the stored checksum is never rewritten.
    pub verify_checksum: bool,

    /// Strip trailing NUL padding from the comment and name fields
    pub trim_padding: bool,
}

impl Default for TixpConfig {
    fn default() -> Self {
        TixpConfig {
            verify_checksum: false,
            trim_padding: true,
        }
    }
}

impl TixpConfig {
    /// Create a new configuration with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options plus checksum verification
    pub fn strict() -> Self {
        TixpConfig {
            verify_checksum: true,
            ..Self::default()
        }
    }
}
