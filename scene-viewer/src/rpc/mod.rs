//! JSON-RPC bridge to the hosting page.
//!
//! Lets an embedding frontend submit command lines and receive pose, FPS and
//! error notifications over `window.postMessage` on WASM builds.

/// JSON-RPC 2.0 envelope types, message queue and request handling.
pub mod web_rpc;
