// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use labutils::{render_tree, Error};
use speedgraph::{Benchmark, Render};

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Keeps every chart it is asked to draw instead of writing images.
#[derive(Default)]
struct Recorder {
    charts: Vec<(PathBuf, Benchmark)>,
}

impl Render for Recorder {
    fn render(&mut self, benchmark: &Benchmark, filename: &Path) -> Result<(), speedgraph::Error> {
        self.charts.push((filename.to_owned(), benchmark.clone()));
        Ok(())
    }
}

const SORT_TIME: &str = "Sort Time\nSize\t10\t20\t30\nBubble\t1.0\t4.0\t9.0\n";

#[test]
fn one_chart_per_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(input.path().join("sort.txt"), SORT_TIME).unwrap();
    fs::create_dir(input.path().join("pi")).unwrap();
    fs::write(
        input.path().join("pi").join("BB4.txt"),
        "Алгоритм BB4\nТочность\t500\t1000\nОдин поток\t3.5\t9.25\nМногопоточность\t2.0\t5.5\n",
    )
    .unwrap();

    let mut recorder = Recorder::default();
    let images = render_tree(input.path(), output.path(), &mut recorder).unwrap();

    assert_eq!(
        images,
        vec![output.path().join("BB4.png"), output.path().join("sort.png")]
    );
    assert_eq!(recorder.charts.len(), 2);

    let (path, sort) = &recorder.charts[1];
    assert_eq!(path, &output.path().join("sort.png"));
    assert_eq!(sort.title, "Sort Time");
    assert_eq!(sort.x_desc, "Size");
    assert_eq!(sort.categories, vec!["10", "20", "30"]);
    assert_eq!(sort.series.len(), 1);
    assert_eq!(sort.series[0].label, "Bubble");

    let (_, bb4) = &recorder.charts[0];
    assert_eq!(bb4.series.len(), 2);
}

#[test]
fn empty_directory_renders_nothing() {
    let input = TempDir::new().unwrap();
    let mut recorder = Recorder::default();

    let images = render_tree(input.path(), input.path(), &mut recorder).unwrap();
    assert!(images.is_empty());
    assert!(recorder.charts.is_empty());
}

#[test]
fn header_without_categories_is_fatal() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), SORT_TIME).unwrap();
    fs::write(input.path().join("b.txt"), "Broken\nSize\n").unwrap();
    fs::write(input.path().join("c.txt"), SORT_TIME).unwrap();

    let mut recorder = Recorder::default();
    match render_tree(input.path(), input.path(), &mut recorder) {
        Err(Error::Benchmark {
            path,
            source: speedgraph::Error::EmptyHeader,
        }) => assert_eq!(path, input.path().join("b.txt")),
        other => panic!("unexpected: {:?}", other),
    }
    assert_eq!(recorder.charts.len(), 1);
}

#[test]
fn non_numeric_value_is_fatal() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("slow.txt"), "T\nX\t1\nS\tfast\n").unwrap();

    let mut recorder = Recorder::default();
    assert!(matches!(
        render_tree(input.path(), input.path(), &mut recorder),
        Err(Error::Benchmark {
            source: speedgraph::Error::InvalidValue { line: 3, .. },
            ..
        })
    ));
}

#[test]
fn invalid_utf8_is_fatal() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("bin.txt"), b"T\nX\t1\nS\t\xff\n").unwrap();

    let mut recorder = Recorder::default();
    assert!(matches!(
        render_tree(input.path(), input.path(), &mut recorder),
        Err(Error::Benchmark {
            source: speedgraph::Error::Io(_),
            ..
        })
    ));
}

#[test]
fn missing_directory_is_fatal() {
    let input = TempDir::new().unwrap();
    let mut recorder = Recorder::default();

    assert!(matches!(
        render_tree(&input.path().join("speedTests"), input.path(), &mut recorder),
        Err(Error::Walk(_))
    ));
}
