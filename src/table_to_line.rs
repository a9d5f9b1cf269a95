// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use labutils::*;
use logger::{fatal, info};

fn main() {
    let tool = Tool::Extract;
    let config = match Config::new(tool) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config, tool);

    info!("{} {} initializing...", tool.name(), config::VERSION);
    config.print(tool);

    if let Err(e) = extract_tables(config.extract()) {
        fatal!("{}", e);
    }
}
