//! Handlers for the resources the simulated device exposes

mod read;
mod write;

pub use read::{read_big_int, read_small_int};
pub use write::write_small_int;

/// Resources the driver knows how to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// 32-bit signed reading
    BigInt,
    /// 8-bit signed reading, also writable
    SmallInt,
}

impl Resource {
    pub const BIG_INT: &'static str = "BigInt";
    pub const SMALL_INT: &'static str = "SmallInt";

    /// Look up a resource by device resource name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::BIG_INT => Some(Resource::BigInt),
            Self::SMALL_INT => Some(Resource::SmallInt),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::BigInt => Self::BIG_INT,
            Resource::SmallInt => Self::SMALL_INT,
        }
    }
}
