//! Load file parser.
//!
//! One load per line, fields separated by single spaces:
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```
//!
//! A line whose first field is `loadNumber` is a header. Blank lines are
//! skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use nom::character::complete::{char, u32 as load_number};
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

use crate::error::{DispatchError, DispatchResult};
use crate::models::{LoadId, Point};
use crate::registry::LoadRegistry;

/// Field name that marks the header line.
pub const HEADER_TOKEN: &str = "loadNumber";

/// One parsed line of the load file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadRecord {
    /// Load identifier.
    pub id: LoadId,
    /// Pickup location.
    pub start: Point,
    /// Drop-off location.
    pub end: Point,
}

fn coordinates(input: &str) -> IResult<&str, (f64, f64)> {
    delimited(char('('), separated_pair(double, char(','), double), char(')'))(input)
}

fn parse_id(text: &str, line: usize) -> DispatchResult<LoadId> {
    let (_, id) = all_consuming(load_number::<_, nom::error::Error<&str>>)(text).map_err(|_| {
        DispatchError::Parse {
            line,
            field: "loadNumber",
            reason: format!("expected a positive integer, found `{text}`"),
        }
    })?;
    if id == 0 {
        return Err(DispatchError::Parse {
            line,
            field: "loadNumber",
            reason: "load identifiers must be positive".to_string(),
        });
    }
    Ok(id)
}

fn parse_point(text: &str, line: usize, field: &'static str) -> DispatchResult<Point> {
    let (_, (x, y)) = all_consuming(coordinates)(text).map_err(|_| DispatchError::Parse {
        line,
        field,
        reason: format!("expected `(x,y)`, found `{text}`"),
    })?;
    if !x.is_finite() || !y.is_finite() {
        return Err(DispatchError::Parse {
            line,
            field,
            reason: format!("coordinates must be finite, found `{text}`"),
        });
    }
    Ok(Point::new(x, y))
}

/// Parses one line. Returns `Ok(None)` for the header and blank lines.
///
/// `line` is the 1-based line number used in error messages.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::parse_line;
/// use u_dispatch::models::Point;
///
/// let record = parse_line("3 (1.5,-2) (0,4.25)", 1).unwrap().unwrap();
/// assert_eq!(record.id, 3);
/// assert_eq!(record.start, Point::new(1.5, -2.0));
/// assert_eq!(record.end, Point::new(0.0, 4.25));
///
/// assert!(parse_line("loadNumber pickup dropoff", 1).unwrap().is_none());
/// assert!(parse_line("x (1,2) (3,4)", 2).is_err());
/// ```
pub fn parse_line(text: &str, line: usize) -> DispatchResult<Option<LoadRecord>> {
    let text = text.trim_end();
    if text.trim_start().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = text.split(' ').collect();
    if fields[0] == HEADER_TOKEN {
        return Ok(None);
    }
    if fields.len() != 3 {
        return Err(DispatchError::Parse {
            line,
            field: "record",
            reason: format!("expected 3 space-separated fields, found {}", fields.len()),
        });
    }

    Ok(Some(LoadRecord {
        id: parse_id(fields[0], line)?,
        start: parse_point(fields[1], line, "start")?,
        end: parse_point(fields[2], line, "end")?,
    }))
}

/// Reads every load from `reader` into a registry built around `depot`.
///
/// Any read failure aborts: loads parsed before it are discarded.
pub fn parse_loads<R: BufRead>(reader: R, depot: Point) -> DispatchResult<LoadRegistry> {
    let mut registry = LoadRegistry::new(depot);
    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let line = idx + 1;
        if let Some(record) = parse_line(&text, line)? {
            registry
                .insert(record.id, record.start, record.end)
                .map_err(|err| match err {
                    DispatchError::DuplicateLoad(id) => DispatchError::Parse {
                        line,
                        field: "loadNumber",
                        reason: format!("duplicate load identifier {id}"),
                    },
                    other => other,
                })?;
        }
    }
    Ok(registry)
}

/// Opens and parses a load file.
pub fn read_loads<P: AsRef<Path>>(path: P, depot: Point) -> DispatchResult<LoadRegistry> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let registry = parse_loads(BufReader::new(file), depot)?;
    debug!("read {} loads from {}", registry.len(), path.display());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    const SAMPLE: &str = "loadNumber pickup dropoff
1 (-9.100071078494038,-48.89301103772511) (-116.78442279683607,76.80147820713637)
2 (73.3888357135069,-0.1261431504189942) (-32.09995047646549,-83.50458627103588)

3 (0,0) (10,0)
";

    fn expect_parse_error(text: &str, expected_line: usize, expected_field: &str) {
        match parse_loads(text.as_bytes(), Point::ORIGIN) {
            Err(DispatchError::Parse { line, field, .. }) => {
                assert_eq!(line, expected_line);
                assert_eq!(field, expected_field);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sample() {
        let reg = parse_loads(SAMPLE.as_bytes(), Point::ORIGIN).expect("valid");
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec![1, 2, 3]);
        let load = reg.get(1).expect("present");
        assert_eq!(load.start(), Point::new(-9.100071078494038, -48.89301103772511));
        assert_eq!(load.end(), Point::new(-116.78442279683607, 76.80147820713637));
        assert_eq!(reg.get(3).expect("present").load_distance(), 10.0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let reg = parse_loads("1 (0,0) (1,1)\r\n2 (1,1) (2,2)\r\n".as_bytes(), Point::ORIGIN)
            .expect("valid");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_bad_identifier() {
        expect_parse_error("abc (0,0) (1,1)\n", 1, "loadNumber");
        expect_parse_error("1 (0,0) (1,1)\n0 (0,0) (1,1)\n", 2, "loadNumber");
        expect_parse_error("-4 (0,0) (1,1)\n", 1, "loadNumber");
    }

    #[test]
    fn test_bad_coordinates() {
        expect_parse_error("1 (0,x) (1,1)\n", 1, "start");
        expect_parse_error("1 (0,0) 1,1\n", 1, "end");
        expect_parse_error("1 (0,0) (1,1,2)\n", 1, "end");
        expect_parse_error("1 (inf,0) (1,1)\n", 1, "start");
    }

    #[test]
    fn test_wrong_field_count() {
        expect_parse_error("1 (0,0)\n", 1, "record");
        expect_parse_error("1 (0,0)  (1,1)\n", 1, "record");
    }

    #[test]
    fn test_duplicate_identifier() {
        expect_parse_error("1 (0,0) (1,1)\n1 (2,2) (3,3)\n", 2, "loadNumber");
    }

    #[test]
    fn test_duplicate_identifier_names_the_id() {
        let text = "loadNumber pickup dropoff\n4 (0,0) (1,1)\n9 (1,1) (2,2)\n4 (2,2) (3,3)\n";
        match parse_loads(text.as_bytes(), Point::ORIGIN) {
            Err(DispatchError::Parse { line, field, reason }) => {
                assert_eq!(line, 4);
                assert_eq!(field, "loadNumber");
                assert_eq!(reason, "duplicate load identifier 4");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk went away"));
            }
            self.served = true;
            let data = b"1 (0,0) (1,1)\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_failure_aborts() {
        let reader = BufReader::new(FailingReader { served: false });
        assert!(matches!(
            parse_loads(reader, Point::ORIGIN),
            Err(DispatchError::Io(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_loads("/nonexistent/u-dispatch/loads.txt", Point::ORIGIN);
        assert!(matches!(result, Err(DispatchError::Io(_))));
    }
}
