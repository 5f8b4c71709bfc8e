// Library surface so integration tests and embedders can wire the pipeline
// the same way the quorum binary does.
pub mod analysis;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod observation;
pub mod orchestrator;
pub mod reflection;
pub mod synthesis;
pub mod types;
