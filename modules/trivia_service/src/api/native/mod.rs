//! Native (in-process) client

mod client;

pub use client::NativeClient;
