//! Integration tests for the debate analysis proxy.

mod analyze_flow;
mod common;
mod cors;
