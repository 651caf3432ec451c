// Library crate exposing modules for integration tests

pub mod ingest;
pub mod model;
pub mod util;
