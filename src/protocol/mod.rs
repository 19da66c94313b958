//! Request envelopes and method parameters for the A2A JSON-RPC binding.

pub mod jsonrpc;
pub mod params;

pub use jsonrpc::*;
pub use params::*;
