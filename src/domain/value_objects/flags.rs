use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// One-shot setup steps a character has already been through
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct InitializationFlags: u8 {
        const CURRENCY = 1 << 0;
    }
}
