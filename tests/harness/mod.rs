#![allow(dead_code, unused_imports)]

pub(crate) mod layout;

pub(crate) use layout::{BUILTIN_DIRECTORIES, BUILTIN_LAYOUT};
pub(crate) use test_context::TestContext;
