//! Library half of the `hmpi` command line: logging setup and the report
//! pipeline shared by the binary and its tests.

pub mod logging;
pub mod pipeline;
