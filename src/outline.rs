//! Decoding of `glyf` records into paths.
//!
//! TrueType outlines consist of quadratic segments with implied on-curve
//! points between two consecutive off-curve points. Composite glyphs are
//! resolved recursively and flattened into one path.

use crate::stream::{Readable, Reader};
use kurbo::{Affine, BezPath, Point};

pub(crate) const ARG_1_AND_2_ARE_WORDS: u16 = 0x0001;
pub(crate) const ARGS_ARE_XY_VALUES: u16 = 0x0002;
pub(crate) const WE_HAVE_A_SCALE: u16 = 0x0008;
pub(crate) const MORE_COMPONENTS: u16 = 0x0020;
pub(crate) const WE_HAVE_AN_X_AND_Y_SCALE: u16 = 0x0040;
pub(crate) const WE_HAVE_A_TWO_BY_TWO: u16 = 0x0080;

const ON_CURVE_POINT: u8 = 0x01;
const X_SHORT_VECTOR: u8 = 0x02;
const Y_SHORT_VECTOR: u8 = 0x04;
const REPEAT_FLAG: u8 = 0x08;
const X_IS_SAME_OR_POSITIVE: u8 = 0x10;
const Y_IS_SAME_OR_POSITIVE: u8 = 0x20;

/// How deeply composite glyphs may nest before we give up.
const MAX_COMPONENT_DEPTH: u8 = 16;

/// A reference to another glyph inside a composite glyph.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Component {
    /// Offset of the component's glyph index inside the glyph record.
    pub glyph_offset: usize,
    pub glyph: u16,
    pub transform: Affine,
}

/// Parse the component records of a composite glyph.
///
/// Returns `None` if the record is truncated.
pub(crate) fn components(data: &[u8]) -> Option<Vec<Component>> {
    let mut r = Reader::new(data);
    let num_contours = r.read::<i16>()?;
    if num_contours >= 0 {
        return Some(vec![]);
    }

    r.skip_bytes(8)?;

    let mut components = vec![];
    loop {
        let flags = r.read::<u16>()?;
        let glyph_offset = r.offset();
        let glyph = r.read::<u16>()?;

        let (arg1, arg2) = if flags & ARG_1_AND_2_ARE_WORDS != 0 {
            if flags & ARGS_ARE_XY_VALUES != 0 {
                (f64::from(r.read::<i16>()?), f64::from(r.read::<i16>()?))
            } else {
                (f64::from(r.read::<u16>()?), f64::from(r.read::<u16>()?))
            }
        } else if flags & ARGS_ARE_XY_VALUES != 0 {
            (f64::from(r.read::<i8>()?), f64::from(r.read::<i8>()?))
        } else {
            (f64::from(r.read::<u8>()?), f64::from(r.read::<u8>()?))
        };

        // Point matching is not supported, such components are placed at the
        // origin of the composite.
        let (dx, dy) =
            if flags & ARGS_ARE_XY_VALUES != 0 { (arg1, arg2) } else { (0.0, 0.0) };

        let [a, b, c, d] = if flags & WE_HAVE_A_SCALE != 0 {
            let s = f2dot14(&mut r)?;
            [s, 0.0, 0.0, s]
        } else if flags & WE_HAVE_AN_X_AND_Y_SCALE != 0 {
            let sx = f2dot14(&mut r)?;
            let sy = f2dot14(&mut r)?;
            [sx, 0.0, 0.0, sy]
        } else if flags & WE_HAVE_A_TWO_BY_TWO != 0 {
            [f2dot14(&mut r)?, f2dot14(&mut r)?, f2dot14(&mut r)?, f2dot14(&mut r)?]
        } else {
            [1.0, 0.0, 0.0, 1.0]
        };

        components.push(Component {
            glyph_offset,
            glyph,
            transform: Affine::new([a, b, c, d, dx, dy]),
        });

        if flags & MORE_COMPONENTS == 0 {
            break;
        }
    }

    Some(components)
}

fn f2dot14(r: &mut Reader) -> Option<f64> {
    r.read::<i16>().map(|v| f64::from(v) / 16384.0)
}

/// Build the outline of `glyph`, looking up glyph records through `lookup`.
pub(crate) fn glyf_outline<'a>(
    lookup: &dyn Fn(u16) -> Option<&'a [u8]>,
    glyph: u16,
) -> Option<BezPath> {
    let mut path = BezPath::new();
    append_glyph(lookup, glyph, Affine::IDENTITY, 0, &mut path)?;
    Some(path)
}

fn append_glyph<'a>(
    lookup: &dyn Fn(u16) -> Option<&'a [u8]>,
    glyph: u16,
    transform: Affine,
    depth: u8,
    path: &mut BezPath,
) -> Option<()> {
    if depth > MAX_COMPONENT_DEPTH {
        return None;
    }

    let data = lookup(glyph)?;
    if data.is_empty() {
        return Some(());
    }

    let num_contours = i16::read_at(data, 0)?;
    if num_contours >= 0 {
        let mut simple = simple_outline(data, num_contours as u16)?;
        simple.apply_affine(transform);
        for el in simple.elements() {
            path.push(*el);
        }
    } else {
        for component in components(data)? {
            append_glyph(
                lookup,
                component.glyph,
                transform * component.transform,
                depth + 1,
                path,
            )?;
        }
    }

    Some(())
}

struct GlyphPoint {
    point: Point,
    on_curve: bool,
}

fn simple_outline(data: &[u8], num_contours: u16) -> Option<BezPath> {
    let mut r = Reader::new_at(data, 10);
    let end_points = r.read_vector::<u16>(usize::from(num_contours))?;
    let instructions_len = r.read::<u16>()?;
    r.skip_bytes(usize::from(instructions_len))?;

    let num_points = match end_points.last() {
        Some(&last) => usize::from(last) + 1,
        None => return Some(BezPath::new()),
    };

    let mut flags = Vec::with_capacity(num_points);
    while flags.len() < num_points {
        let flag = r.read::<u8>()?;
        flags.push(flag);
        if flag & REPEAT_FLAG != 0 {
            let count = r.read::<u8>()?;
            for _ in 0..count {
                flags.push(flag);
            }
        }
    }
    flags.truncate(num_points);

    let xs = read_coordinates(&mut r, &flags, X_SHORT_VECTOR, X_IS_SAME_OR_POSITIVE)?;
    let ys = read_coordinates(&mut r, &flags, Y_SHORT_VECTOR, Y_IS_SAME_OR_POSITIVE)?;

    let points: Vec<_> = flags
        .iter()
        .zip(xs.iter().zip(&ys))
        .map(|(&flag, (&x, &y))| GlyphPoint {
            point: Point::new(f64::from(x), f64::from(y)),
            on_curve: flag & ON_CURVE_POINT != 0,
        })
        .collect();

    let mut path = BezPath::new();
    let mut start = 0;
    for &end in &end_points {
        let end = usize::from(end) + 1;
        if end < start || end > points.len() {
            return None;
        }
        push_contour(&mut path, &points[start..end]);
        start = end;
    }

    Some(path)
}

fn read_coordinates(
    r: &mut Reader,
    flags: &[u8],
    short: u8,
    same_or_positive: u8,
) -> Option<Vec<i32>> {
    let mut coords = Vec::with_capacity(flags.len());
    let mut value = 0i32;
    for &flag in flags {
        if flag & short != 0 {
            let delta = i32::from(r.read::<u8>()?);
            value += if flag & same_or_positive != 0 { delta } else { -delta };
        } else if flag & same_or_positive == 0 {
            value += i32::from(r.read::<i16>()?);
        }
        coords.push(value);
    }
    Some(coords)
}

fn push_contour(path: &mut BezPath, points: &[GlyphPoint]) {
    let Some(last) = points.last() else { return };

    // Find an on-curve point to start from. If there is none, start at the
    // implied point between the last and the first point.
    let (start, rest): (Point, Vec<&GlyphPoint>) =
        match points.iter().position(|p| p.on_curve) {
            Some(i) => {
                let n = points.len();
                (points[i].point, (1..n).map(|k| &points[(i + k) % n]).collect())
            }
            None => (points[0].point.midpoint(last.point), points.iter().collect()),
        };

    path.move_to(start);

    let mut control: Option<Point> = None;
    for p in rest {
        match (p.on_curve, control) {
            (true, Some(c)) => {
                path.quad_to(c, p.point);
                control = None;
            }
            (true, None) => path.line_to(p.point),
            (false, Some(c)) => {
                path.quad_to(c, c.midpoint(p.point));
                control = Some(p.point);
            }
            (false, None) => control = Some(p.point),
        }
    }

    if let Some(c) = control {
        path.quad_to(c, start);
    }

    path.close_path();
}
