// Line-oriented legacy encoding, one field per line:
//
//   <entity count>
//   per entity:
//     <shape type>
//     <color name>
//     <thickness>
//     <point count>
//     <x> <y>            (point count lines)
//
// Plines carry no color, so entities are written black at unit thickness and
// those two fields are checked but otherwise ignored on read.

use std::fmt::Write as _;

use kurbo::Point;

use super::build_pline;
use crate::error::{DesignError, DesignResult};
use crate::pline::Pline;

const DEFAULT_COLOR: &str = "Black";
const DEFAULT_THICKNESS: f64 = 1.0;

pub fn encode(plines: &[Pline]) -> String {
    if plines.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", plines.len());
    for pline in plines {
        let _ = writeln!(out, "{}", pline.kind().tag());
        let _ = writeln!(out, "{DEFAULT_COLOR}");
        let _ = writeln!(out, "{DEFAULT_THICKNESS}");
        let _ = writeln!(out, "{}", pline.points().len());
        for pt in pline.points() {
            let _ = writeln!(out, "{} {}", pt.x, pt.y);
        }
    }
    out
}

pub fn decode(text: &str) -> DesignResult<Vec<Pline>> {
    let mut lines = Lines::new(text);
    if lines.at_end() {
        return Ok(Vec::new());
    }
    let count: usize = lines.parse("entity count")?;
    let mut plines = Vec::new();
    for _ in 0..count {
        let tag: i32 = lines.parse("shape type")?;
        lines.next_line("color")?;
        let thickness: f64 = lines.parse("thickness")?;
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(lines.corrupt(&format!("bad thickness {thickness}")));
        }
        let point_count: usize = lines.parse("point count")?;
        let mut points = Vec::new();
        for _ in 0..point_count {
            points.push(lines.point()?);
        }
        plines.push(build_pline(tag, points)?);
    }
    if !lines.at_end() {
        return Err(lines.corrupt("trailing data after last entity"));
    }
    Ok(plines)
}

/// Non-blank lines with their 1-based line numbers, for error messages
struct Lines<'a> {
    inner: std::iter::Peekable<Box<dyn Iterator<Item = (usize, &'a str)> + 'a>>,
    line_no: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a> = Box::new(
            text.lines()
                .enumerate()
                .map(|(i, line)| (i + 1, line.trim()))
                .filter(|(_, line)| !line.is_empty()),
        );
        Self {
            inner: iter.peekable(),
            line_no: 0,
        }
    }

    fn at_end(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn corrupt(&self, msg: &str) -> DesignError {
        DesignError::CorruptDocument(format!("line {}: {msg}", self.line_no))
    }

    fn next_line(&mut self, what: &str) -> DesignResult<&'a str> {
        match self.inner.next() {
            Some((no, line)) => {
                self.line_no = no;
                Ok(line)
            }
            None => Err(DesignError::CorruptDocument(format!(
                "unexpected end of text, expected {what}"
            ))),
        }
    }

    fn parse<T: std::str::FromStr>(&mut self, what: &str) -> DesignResult<T> {
        let line = self.next_line(what)?;
        line.parse()
            .map_err(|_| self.corrupt(&format!("expected {what}, found {line:?}")))
    }

    fn point(&mut self) -> DesignResult<Point> {
        let line = self.next_line("point")?;
        let mut fields = line.split_whitespace().map(str::parse::<f64>);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(x)), Some(Ok(y)), None) => Ok(Point::new(x, y)),
            _ => Err(self.corrupt(&format!("expected \"x y\", found {line:?}"))),
        }
    }
}
