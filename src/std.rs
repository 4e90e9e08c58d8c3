#![no_std]
/// proxy file for when no_std support is enabled. Simply defines aliases for std modules so we don't need to
/// deal with different names elsewhere

pub mod collections {
    pub use hashbrown::HashMap;
}

pub mod convert {
    pub use core::convert::From;
    pub use core::convert::TryFrom;
}

pub mod default {
    pub use core::default::Default;
}

pub mod fmt {
    pub use core::fmt::{Debug, Display, Error, Formatter, Result, Write};
}

pub mod vec {
    pub use alloc::vec::Vec;
}

pub mod string {
    pub use alloc::string::String;
}
