//! Shared test fixtures
#![allow(dead_code)]

#[path = "../../src/test_support.rs"]
mod genesis_fixture;

pub use genesis_fixture::*;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
