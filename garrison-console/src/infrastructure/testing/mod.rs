//! In-memory service stubs for driving the console without a server.

pub mod stubs;
