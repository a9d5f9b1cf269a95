// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use clap::{App, Arg, ArgMatches};
use logger::{info, Level};
use serde_derive::*;
use speedgraph::PlotConfig;

use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which binary the command line belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tool {
    Diagrams,
    Extract,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Diagrams => "speedtest-diagrams",
            Tool::Extract => "table-to-line",
        }
    }

    fn about(self) -> &'static str {
        match self {
            Tool::Diagrams => "Render speed test results as line charts",
            Tool::Extract => "Extract the value column from precision tables",
        }
    }
}

/// Command line definition shared by both binaries.
pub fn app(tool: Tool) -> App<'static, 'static> {
    let app = App::new(tool.name())
        .version(VERSION)
        .about(tool.about())
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
        .arg(
            Arg::with_name("directory")
                .short("d")
                .long("directory")
                .value_name("DIR")
                .help("Directory to read input files from")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("DIR")
                .help("Directory to write results to")
                .takes_value(true),
        );

    match tool {
        Tool::Diagrams => app,
        Tool::Extract => app.arg(
            Arg::with_name("names")
                .value_name("NAME")
                .help("Dataset names, each read from <NAME>_table.txt")
                .multiple(true)
                .index(1),
        ),
    }
}

fn default_logging() -> Level {
    Level::Info
}

fn default_speedtests() -> PathBuf {
    PathBuf::from("../../../speedTests")
}

fn current_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_y_label() -> String {
    speedgraph::DEFAULT_Y_DESC.to_owned()
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_font() -> String {
    "sans-serif".to_owned()
}

fn default_grid() -> bool {
    true
}

fn default_names() -> Vec<String> {
    vec!["e".to_owned(), "pi".to_owned(), "sqrt2".to_owned()]
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    diagrams: Diagrams,
    #[serde(default)]
    extract: Extract,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_logging")]
    logging: Level,
}

impl Default for General {
    fn default() -> Self {
        Self {
            logging: default_logging(),
        }
    }
}

impl General {
    pub fn logging(&self) -> Level {
        self.logging
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Diagrams {
    #[serde(default = "default_speedtests")]
    directory: PathBuf,
    #[serde(default = "current_dir")]
    output: PathBuf,
    #[serde(default = "default_y_label")]
    y_label: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "default_font")]
    font: String,
    #[serde(default = "default_grid")]
    grid: bool,
}

impl Default for Diagrams {
    fn default() -> Self {
        Self {
            directory: default_speedtests(),
            output: current_dir(),
            y_label: default_y_label(),
            width: default_width(),
            height: default_height(),
            font: default_font(),
            grid: default_grid(),
        }
    }
}

impl Diagrams {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn plot_config(&self) -> PlotConfig {
        let mut plot = PlotConfig::new();
        plot.y_desc(&self.y_label)
            .font(&self.font)
            .size(self.size())
            .grid(self.grid);
        plot
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Extract {
    #[serde(default = "default_names")]
    names: Vec<String>,
    #[serde(default = "current_dir")]
    directory: PathBuf,
    #[serde(default = "current_dir")]
    output: PathBuf,
}

impl Default for Extract {
    fn default() -> Self {
        Self {
            names: default_names(),
            directory: current_dir(),
            output: current_dir(),
        }
    }
}

impl Extract {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}_table.txt", name))
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output.join(format!("{}.txt", name))
    }
}

impl Config {
    /// Parse the process arguments for `tool` and return the `Config`.
    pub fn new(tool: Tool) -> Result<Self, Error> {
        let matches = app(tool).get_matches();
        Self::from_matches(tool, &matches)
    }

    /// Start from the config file (if any) and apply command line overrides.
    pub fn from_matches(tool: Tool, matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.value_of("config") {
            Some(file) => Self::load_from_file(file)?,
            None => Self::default(),
        };

        config.general.logging =
            logger::verbosity(config.general.logging, matches.occurrences_of("verbose"));

        let directory = matches.value_of("directory").map(PathBuf::from);
        let output = matches.value_of("output").map(PathBuf::from);

        match tool {
            Tool::Diagrams => {
                if let Some(directory) = directory {
                    config.diagrams.directory = directory;
                }
                if let Some(output) = output {
                    config.diagrams.output = output;
                }
            }
            Tool::Extract => {
                if let Some(directory) = directory {
                    config.extract.directory = directory;
                }
                if let Some(output) = output {
                    config.extract.output = output;
                }
                if let Some(names) = matches.values_of("names") {
                    config.extract.names = names.map(str::to_owned).collect();
                }
            }
        }

        Ok(config)
    }

    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let filename = filename.as_ref();
        let content = std::fs::read_to_string(filename).map_err(Error::io(filename))?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: filename.to_owned(),
            source,
        })
    }

    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn diagrams(&self) -> &Diagrams {
        &self.diagrams
    }

    pub fn extract(&self) -> &Extract {
        &self.extract
    }

    pub fn print(&self, tool: Tool) {
        info!("-----");
        info!("Config:");
        info!("Config: Logging: {}", self.general.logging);
        match tool {
            Tool::Diagrams => {
                info!("Config: Directory: {}", self.diagrams.directory.display());
                info!("Config: Output: {}", self.diagrams.output.display());
                info!("Config: Y label: {}", self.diagrams.y_label);
                info!("Config: Size: {}x{}", self.diagrams.width, self.diagrams.height);
            }
            Tool::Extract => {
                info!("Config: Names: {}", self.extract.names.join(" "));
                info!("Config: Directory: {}", self.extract.directory.display());
                info!("Config: Output: {}", self.extract.output.display());
            }
        }
    }
}
