//! Foundation utilities shared by the bootstrap and its binaries

pub mod logging;
