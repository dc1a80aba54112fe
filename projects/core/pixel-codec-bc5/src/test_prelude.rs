//! Common test imports for BC5 tests
#![allow(unused_imports)]

pub use rstest::rstest;

pub use crate::error::*;
pub use crate::util::*;
