//! UI binding crate for the DevHub palette core.

pub mod api;
