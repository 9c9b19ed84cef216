//! Static site content compiled into the bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listing metadata, certificate records and article bodies are immutable and
//! defined at build time. State modules filter over these slices; pages render
//! them. Image paths are relative to the public assets directory.

pub mod articles;
pub mod bodies;
pub mod certifications;
