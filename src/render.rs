// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use logger::{debug, info};
use speedgraph::{Benchmark, Render};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

/// Image name for a benchmark file: everything before the first `.`,
/// plus `.png`.
pub fn image_name(file_name: &str) -> String {
    let base = file_name.split('.').next().unwrap_or_default();
    format!("{}.png", base)
}

/// Walk `root` recursively and render one image per file into `output`.
///
/// Entries are visited in file name order. The first failure ends the
/// walk; images written before it are left on disk.
pub fn render_tree<R: Render>(
    root: &Path,
    output: &Path,
    renderer: &mut R,
) -> Result<Vec<PathBuf>, Error> {
    let mut images = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            info!("{}", path.display());
            continue;
        }

        let file_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::FileName(path.to_owned()))?;
        info!("{}", path.display());

        let benchmark = Benchmark::from_path(path).map_err(|source| Error::Benchmark {
            path: path.to_owned(),
            source,
        })?;
        debug!(
            "{}: {} series over {} categories",
            benchmark.title,
            benchmark.series.len(),
            benchmark.categories.len()
        );

        let image = output.join(image_name(file_name));
        renderer
            .render(&benchmark, &image)
            .map_err(|source| Error::Benchmark {
                path: path.to_owned(),
                source,
            })?;
        images.push(image);
    }

    Ok(images)
}
