// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use labutils::*;
use logger::{fatal, info};

fn main() {
    let tool = Tool::Diagrams;
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

    let diagrams = config.diagrams();
    let mut plot = diagrams.plot_config();
    match render_tree(diagrams.directory(), diagrams.output(), &mut plot) {
        Ok(images) => info!("wrote {} images", images.len()),
        Err(e) => fatal!("{}", e),
    }
}
