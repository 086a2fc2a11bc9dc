//! Configuration sources, lowest to highest precedence: site file, environment.

pub mod environment;
pub mod site_file;
