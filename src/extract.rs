// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::Extract;
use crate::Error;

use logger::{debug, info};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// The second single-space separated token of `line` with its last
/// character removed. `None` when the line has only one token.
pub fn extract_value(line: &str) -> Option<&str> {
    let mut tokens = line.split(' ');
    tokens.next();
    let token = tokens.next()?;

    let mut chars = token.chars();
    chars.next_back();
    Some(chars.as_str())
}

/// Which side of a copy failed.
#[derive(Debug)]
enum Failed {
    Read(io::Error),
    Write(io::Error),
}

impl Failed {
    fn into_inner(self) -> io::Error {
        match self {
            Failed::Read(e) | Failed::Write(e) => e,
        }
    }
}

/// Copy extracted values, one per line, until the first line without a
/// second token. Returns the number of lines written.
pub fn extract_column<R: BufRead, W: Write>(reader: R, writer: W) -> io::Result<usize> {
    copy_column(reader, writer).map_err(Failed::into_inner)
}

fn copy_column<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<usize, Failed> {
    let mut buf = String::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_line(&mut buf).map_err(Failed::Read)? == 0 {
            break;
        }
        if buf.ends_with("\r\n") {
            buf.truncate(buf.len() - 2);
            buf.push('\n');
        }

        match extract_value(&buf) {
            Some(value) => {
                writeln!(writer, "{}", value).map_err(Failed::Write)?;
                lines += 1;
            }
            None => {
                debug!("stopping at line {}: {:?}", lines + 1, buf);
                break;
            }
        }
    }

    writer.flush().map_err(Failed::Write)?;
    Ok(lines)
}

/// Run the extraction for every configured name, in order. A failure on
/// one name ends the run before later names are touched.
pub fn extract_tables(config: &Extract) -> Result<Vec<PathBuf>, Error> {
    let mut outputs = Vec::with_capacity(config.names().len());

    for name in config.names() {
        let input = config.input_path(name);
        let output = config.output_path(name);

        let table = File::open(&input).map_err(Error::io(&input))?;
        let lines = File::create(&output).map_err(Error::io(&output))?;

        let count = match copy_column(BufReader::new(table), BufWriter::new(lines)) {
            Ok(count) => count,
            Err(Failed::Read(e)) => return Err(Error::io(&input)(e)),
            Err(Failed::Write(e)) => return Err(Error::io(&output)(e)),
        };
        info!("{} -> {}: {} values", input.display(), output.display(), count);

        outputs.push(output);
    }

    Ok(outputs)
}
