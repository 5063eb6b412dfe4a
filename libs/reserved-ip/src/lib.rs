#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod classify;
mod error;
mod table;
pub use classify::{classify, classify_text, is_reserved, is_reserved_text, Classification, Reason};
pub use error::{Error, Result};
pub use table::{reserved_networks, ReservedNetwork};
