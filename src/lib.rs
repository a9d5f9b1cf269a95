// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Helpers for the telematics lab speed tests: `speedtest-diagrams`
//! turns timing tables into charts and `table-to-line` pulls the value
//! column out of precision tables.

pub mod config;
pub mod extract;
pub mod render;

mod error;

pub use crate::config::{app, Config, Tool};
pub use crate::error::Error;
pub use crate::extract::{extract_column, extract_tables, extract_value};
pub use crate::render::{image_name, render_tree};

use logger::Logger;

/// Install the stdout logger at the configured level.
pub fn init_logging(config: &Config, tool: Tool) {
    Logger::new()
        .label(tool.name())
        .level(config.general().logging())
        .init()
        .expect("Failed to initialize logger");
}
