//! Common code used by the `ipguard` binary

pub mod input;
pub mod logging;
pub mod report;
