//! comment-directives - parse configuration directives embedded in source comments
//!
//! Static-analysis tools let users override configuration from inside a
//! source file, e.g. `/* eslint semi: 2 */` or `/* global foo:writable */`.
//! This crate turns the text of such comments into structured data.
//!
//! ## Module Structure
//!
//! - `core`: The parsers (structured objects, name/value lists, flag lists, directive splitting)
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer

pub mod cli;
pub mod config;
pub mod core;
