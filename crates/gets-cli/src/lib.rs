//! Library side of the readiness CLI: logging setup and input loading.

pub mod inputs;
pub mod logging;
