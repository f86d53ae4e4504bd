// Little-endian layout:
//
//   i32 entity_count
//   repeat entity_count:
//     i32 shape_type      (1 connected, 2 line, 3 rectangle, 4 ellipse)
//     i32 point_count
//     repeat point_count: f64 x, f64 y
//
// An empty document is a zero-length stream.

use kurbo::Point;

use super::build_pline;
use crate::error::{DesignError, DesignResult};
use crate::pline::Pline;

const POINT_SIZE: usize = 16;

/// Encodes a whole document. Fails if a count does not fit the i32 fields.
pub fn encode(plines: &[Pline]) -> DesignResult<Vec<u8>> {
    if plines.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    write_count(&mut out, plines.len(), "entity count")?;
    for pline in plines {
        out.extend_from_slice(&pline.kind().tag().to_le_bytes());
        write_count(&mut out, pline.points().len(), "point count")?;
        for pt in pline.points() {
            out.extend_from_slice(&pt.x.to_le_bytes());
            out.extend_from_slice(&pt.y.to_le_bytes());
        }
    }
    Ok(out)
}

/// Decodes a whole document. Any defect rejects the entire stream.
pub fn decode(bytes: &[u8]) -> DesignResult<Vec<Pline>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = Reader { bytes, pos: 0 };
    let count = reader.read_count("entity count")?;
    let mut plines = Vec::with_capacity(count.min(reader.remaining() / 8));
    for index in 0..count {
        let tag = reader.read_i32()?;
        let point_count = reader.read_count("point count")?;
        if point_count > reader.remaining() / POINT_SIZE {
            return Err(DesignError::CorruptDocument(format!(
                "entity {index} claims {point_count} points past end of stream"
            )));
        }
        let mut points = Vec::with_capacity(point_count);
        for _ in 0..point_count {
            let x = reader.read_f64()?;
            let y = reader.read_f64()?;
            points.push(Point::new(x, y));
        }
        plines.push(build_pline(tag, points)?);
    }
    if reader.remaining() != 0 {
        return Err(DesignError::CorruptDocument(format!(
            "{} trailing bytes after last entity",
            reader.remaining()
        )));
    }
    Ok(plines)
}

fn write_count(out: &mut Vec<u8>, value: usize, what: &str) -> DesignResult<()> {
    let value = i32::try_from(value)
        .map_err(|_| DesignError::TooLarge(format!("{what} {value} exceeds {}", i32::MAX)))?;
    out.extend_from_slice(&value.to_le_bytes());
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take<const N: usize>(&mut self) -> DesignResult<[u8; N]> {
        let end = self.pos + N;
        let slice = self.bytes.get(self.pos..end).ok_or_else(|| {
            DesignError::CorruptDocument(format!("unexpected end of stream at byte {}", self.pos))
        })?;
        self.pos = end;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        Ok(buf)
    }

    fn read_i32(&mut self) -> DesignResult<i32> {
        Ok(i32::from_le_bytes(self.take::<4>()?))
    }

    fn read_f64(&mut self) -> DesignResult<f64> {
        Ok(f64::from_le_bytes(self.take::<8>()?))
    }

    fn read_count(&mut self, what: &str) -> DesignResult<usize> {
        let value = self.read_i32()?;
        usize::try_from(value)
            .map_err(|_| DesignError::CorruptDocument(format!("negative {what}: {value}")))
    }
}
