//! Status words returned by late-binding calls

use std::fmt;

/// Raw status word from the host's late-binding layer.
///
/// Non-negative words report success. The engine treats
/// [`UNKNOWN_NAME`](Self::UNKNOWN_NAME) as a plain negative lookup result;
/// every other failure status is escalated with the raw word preserved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DispatchStatus(i32);

impl DispatchStatus {
    /// Success
    pub const OK: DispatchStatus = DispatchStatus(0);

    /// The requested member name is not known to the object
    pub const UNKNOWN_NAME: DispatchStatus = DispatchStatus(0x8002_0006_u32 as i32);

    /// Unspecified failure
    pub const FAIL: DispatchStatus = DispatchStatus(0x8000_4005_u32 as i32);

    /// Wrap a raw status word
    pub const fn from_raw(raw: i32) -> Self {
        DispatchStatus(raw)
    }

    /// The raw status word
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether the word reports success
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// Whether the word is the unknown-member-name status
    pub const fn is_unknown_name(self) -> bool {
        self.0 == Self::UNKNOWN_NAME.0
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0 as u32)
    }
}
