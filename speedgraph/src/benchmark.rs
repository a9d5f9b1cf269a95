use crate::Error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One named line on a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// A parsed benchmark file: title, x axis and one series per data row.
#[derive(Clone, Debug, PartialEq)]
pub struct Benchmark {
    pub title: String,
    pub x_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl Benchmark {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        parse_benchmark(BufReader::new(file))
    }

    /// Smallest and largest finite value across all series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }
}

// Reads one line, mapping `\r\n` to `\n`. Returns false at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> Result<bool, Error> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with("\r\n") {
        buf.truncate(buf.len() - 2);
        buf.push('\n');
    }
    Ok(true)
}

fn chomp(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

/// Parse a tab-separated benchmark file.
///
/// Line one is the title. Line two is `x label\tcat1\tcat2...`. Every
/// later line is `series label\tv1\tv2...` with one value per category.
pub fn parse_benchmark<R: BufRead>(mut reader: R) -> Result<Benchmark, Error> {
    let mut buf = String::new();

    read_line(&mut reader, &mut buf)?;
    let title = chomp(&buf).to_owned();

    read_line(&mut reader, &mut buf)?;
    let mut header = chomp(&buf).split('\t');
    let x_desc = header.next().unwrap_or_default().to_owned();
    let categories: Vec<String> = header.map(str::to_owned).collect();
    if categories.is_empty() {
        return Err(Error::EmptyHeader);
    }
    logger::debug!("header: {:?} {:?}", x_desc, categories);

    let mut series = Vec::new();
    let mut line = 2;
    while read_line(&mut reader, &mut buf)? {
        line += 1;

        let mut fields = buf.split('\t');
        let label = fields.next().unwrap_or_default().to_owned();
        let values = fields
            .map(|token| {
                token.trim().parse::<f64>().map_err(|_| Error::InvalidValue {
                    line,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<f64>, Error>>()?;

        if values.len() != categories.len() {
            return Err(Error::SeriesLength {
                line,
                label,
                values: values.len(),
                categories: categories.len(),
            });
        }
        series.push(Series { label, values });
    }

    Ok(Benchmark {
        title,
        x_desc,
        categories,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_time() {
        let input = "Sort Time\nSize\t10\t20\t30\nBubble\t1.0\t4.0\t9.0\n";
        let benchmark = parse_benchmark(input.as_bytes()).unwrap();

        assert_eq!(benchmark.title, "Sort Time");
        assert_eq!(benchmark.x_desc, "Size");
        assert_eq!(benchmark.categories, vec!["10", "20", "30"]);
        assert_eq!(
            benchmark.series,
            vec![Series {
                label: "Bubble".to_owned(),
                values: vec![1.0, 4.0, 9.0],
            }]
        );
    }

    #[test]
    fn multiple_series() {
        let input = "Вычисление e\nТочность\t500\t1000\nОдин поток\t12.5\t40.25\nМногопоточность\t8.0\t21.75\n";
        let benchmark = parse_benchmark(input.as_bytes()).unwrap();

        assert_eq!(benchmark.series.len(), 2);
        assert_eq!(benchmark.series[1].label, "Многопоточность");
        assert_eq!(benchmark.series[1].values, vec![8.0, 21.75]);
        assert_eq!(benchmark.value_range(), Some((8.0, 40.25)));
    }

    #[test]
    fn crlf_line_endings() {
        let input = "T\r\nX\ta\tb\r\nS\t1\t2\r\n";
        let benchmark = parse_benchmark(input.as_bytes()).unwrap();

        assert_eq!(benchmark.title, "T");
        assert_eq!(benchmark.categories, vec!["a", "b"]);
        assert_eq!(benchmark.series[0].values, vec![1.0, 2.0]);
    }

    #[test]
    fn no_series() {
        let benchmark = parse_benchmark("T\nX\ta\n".as_bytes()).unwrap();
        assert!(benchmark.series.is_empty());
        assert_eq!(benchmark.value_range(), None);
    }

    #[test]
    fn header_without_categories() {
        assert!(matches!(
            parse_benchmark("T\nSize\n".as_bytes()),
            Err(Error::EmptyHeader)
        ));
        assert!(matches!(
            parse_benchmark("".as_bytes()),
            Err(Error::EmptyHeader)
        ));
    }

    #[test]
    fn non_numeric_value() {
        match parse_benchmark("T\nX\ta\tb\nS\t1.0\tslow\n".as_bytes()) {
            Err(Error::InvalidValue { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "slow\n");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn blank_row_is_rejected() {
        assert!(matches!(
            parse_benchmark("T\nX\ta\nS\t1\n\n".as_bytes()),
            Err(Error::SeriesLength { line: 4, values: 0, .. })
        ));
    }

    #[test]
    fn short_row_is_rejected() {
        assert!(matches!(
            parse_benchmark("T\nX\ta\tb\tc\nS\t1\t2\n".as_bytes()),
            Err(Error::SeriesLength {
                values: 2,
                categories: 3,
                ..
            })
        ));
    }
}
