// ABOUTME: Library crate for numdesk exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod binfile;
pub mod cli;
pub mod config;
pub mod pool;
pub mod subscriber;
pub mod ui;
pub mod validate;
