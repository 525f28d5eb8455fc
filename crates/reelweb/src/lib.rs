//! Reelgrab — web front-end for the Instagram video resolver.
//!
//! This library exposes the CLI definition and the web surface so the
//! integration tests can drive the router without binding a socket; the
//! binary entry point lives in `main.rs`.

pub mod cli;
pub mod web;
