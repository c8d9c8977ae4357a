#![doc = "docindex-core: core logic library for docindex."]

//! This crate contains the pipeline that turns a documentation tool's HTML
//! output into a standalone index page with public source links.
//! The CLI crate only loads configuration and calls [`build::build_index`].
//!
//! # Usage
//! Build an [`config::IndexConfig`], pick a [`contract::DocGenerator`]
//! (usually [`generate::CommandDocGenerator`]) and await `build_index`.

pub mod build;
pub mod config;
pub mod contract;
pub mod generate;
pub mod index_file;
pub mod rewrite;
pub mod template;
