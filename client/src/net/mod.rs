//! Networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one async function per endpoint. Wire types live in the shared
//! `models` crate so the stub server and CLI decode the same shapes. `query`
//! puts the query cache in front of those calls for page resources.

pub mod api;
pub mod query;
