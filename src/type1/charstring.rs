//! Type 1 charstrings.
//!
//! TrueType outlines are quadratic, Type 1 outlines cubic. Every quadratic
//! segment is elevated to the cubic segment describing the same curve.
//! Coordinates are rounded to integers, and all deltas are computed between
//! rounded points so that rounding errors don't accumulate.

use kurbo::{BezPath, PathEl, Point};
use std::fmt::{self, Debug, Formatter};

pub(crate) mod operator {
    pub const RLINETO: u8 = 5;
    pub const RRCURVETO: u8 = 8;
    pub const CLOSEPATH: u8 = 9;
    pub const HSBW: u8 = 13;
    pub const ENDCHAR: u8 = 14;
    pub const RMOVETO: u8 = 21;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Instruction {
    Operand(i32),
    Operator(u8),
}

/// An unencrypted charstring program.
#[derive(Default, Eq, PartialEq)]
pub(crate) struct Program(Vec<Instruction>);

impl Debug for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut formatted_strings = vec![];
        let mut str_buffer = vec![];

        for instr in &self.0 {
            match instr {
                Instruction::Operand(n) => str_buffer.push(n.to_string()),
                Instruction::Operator(op) => {
                    str_buffer.push(format!("op({op})"));
                    formatted_strings.push(str_buffer.join(" "));
                    str_buffer.clear();
                }
            }
        }

        write!(f, "{}", formatted_strings.join("\n"))
    }
}

impl Program {
    /// Build the charstring of a glyph.
    ///
    /// Without an outline, the charstring only sets the metrics.
    pub fn build(path: Option<&BezPath>, lsb: i16, advance: u16) -> Self {
        let mut program = Program::default();
        let lsb = i32::from(lsb);
        program.op(&[lsb, i32::from(advance)], operator::HSBW);

        // hsbw moves the current point to the side bearing.
        let mut cur = (lsb, 0);
        let mut start = cur;
        let mut float_cur = Point::new(f64::from(lsb), 0.0);

        for el in path.map(BezPath::elements).unwrap_or_default() {
            match *el {
                PathEl::MoveTo(p) => {
                    let p = round(p);
                    program.op(&[p.0 - cur.0, p.1 - cur.1], operator::RMOVETO);
                    cur = p;
                    start = p;
                }
                PathEl::LineTo(p) => {
                    let p = round(p);
                    program.op(&[p.0 - cur.0, p.1 - cur.1], operator::RLINETO);
                    cur = p;
                }
                PathEl::QuadTo(c, p) => {
                    let c1 = float_cur + (c - float_cur) * (2.0 / 3.0);
                    let c2 = p + (c - p) * (2.0 / 3.0);
                    cur = program.curve(cur, round(c1), round(c2), round(p));
                }
                PathEl::CurveTo(c1, c2, p) => {
                    cur = program.curve(cur, round(c1), round(c2), round(p));
                }
                PathEl::ClosePath => {
                    // Interpreters disagree on where closepath leaves the
                    // current point, so we always end a contour at its start.
                    if cur != start {
                        program.op(&[start.0 - cur.0, start.1 - cur.1], operator::RLINETO);
                        cur = start;
                    }
                    program.op(&[], operator::CLOSEPATH);
                }
            }

            if let Some(p) = el.end_point() {
                float_cur = p;
            } else {
                float_cur = Point::new(f64::from(start.0), f64::from(start.1));
            }
        }

        program.op(&[], operator::ENDCHAR);
        program
    }

    fn op(&mut self, operands: &[i32], op: u8) {
        self.0.extend(operands.iter().map(|&n| Instruction::Operand(n)));
        self.0.push(Instruction::Operator(op));
    }

    fn curve(
        &mut self,
        cur: (i32, i32),
        c1: (i32, i32),
        c2: (i32, i32),
        p: (i32, i32),
    ) -> (i32, i32) {
        self.op(
            &[c1.0 - cur.0, c1.1 - cur.1, c2.0 - c1.0, c2.1 - c1.1, p.0 - c2.0, p.1 - c2.1],
            operator::RRCURVETO,
        );
        p
    }

    #[cfg(test)]
    pub fn instructions(&self) -> &[Instruction] {
        &self.0
    }

    /// Encode the program, without encryption.
    pub fn compile(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() * 2);
        for instr in &self.0 {
            match *instr {
                Instruction::Operand(n) => write_number(&mut out, n),
                Instruction::Operator(op) => out.push(op),
            }
        }
        out
    }
}

fn round(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Encode a number in the charstring number format.
fn write_number(out: &mut Vec<u8>, n: i32) {
    match n {
        -107..=107 => out.push((n + 139) as u8),
        108..=1131 => {
            let n = n - 108;
            out.push((n / 256 + 247) as u8);
            out.push((n % 256) as u8);
        }
        -1131..=-108 => {
            let n = -n - 108;
            out.push((n / 256 + 251) as u8);
            out.push((n % 256) as u8);
        }
        _ => {
            out.push(255);
            out.extend(n.to_be_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Instruction::{Operand, Operator};

    fn number(n: i32) -> Vec<u8> {
        let mut out = vec![];
        write_number(&mut out, n);
        out
    }

    #[test]
    fn number_encoding() {
        assert_eq!(number(0), vec![139]);
        assert_eq!(number(-107), vec![32]);
        assert_eq!(number(107), vec![246]);
        assert_eq!(number(108), vec![247, 0]);
        assert_eq!(number(1131), vec![250, 255]);
        assert_eq!(number(-108), vec![251, 0]);
        assert_eq!(number(-1131), vec![254, 255]);
        assert_eq!(number(1132), vec![255, 0, 0, 4, 108]);
        assert_eq!(number(-40000), vec![255, 0xFF, 0xFF, 0x63, 0xC0]);
    }

    #[test]
    fn empty_glyph() {
        let program = Program::build(None, 0, 250);
        assert_eq!(
            program.instructions(),
            &[Operand(0), Operand(250), Operator(operator::HSBW), Operator(operator::ENDCHAR)]
        );
        assert_eq!(program.compile(), vec![139, 139, 247, 142, 13, 14]);
    }

    #[test]
    fn lines_are_relative_to_side_bearing() {
        let mut path = BezPath::new();
        path.move_to((10.0, 0.0));
        path.line_to((110.0, 0.0));
        path.line_to((10.0, 100.0));
        path.close_path();

        let program = Program::build(Some(&path), 10, 600);
        assert_eq!(
            format!("{program:?}"),
            "10 600 op(13)\n0 0 op(21)\n100 0 op(5)\n-100 100 op(5)\n0 -100 op(5)\nop(9)\nop(14)"
        );
    }

    #[test]
    fn quadratics_are_elevated() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.quad_to((150.0, 300.0), (300.0, 0.0));
        path.close_path();

        let program = Program::build(Some(&path), 0, 300);
        assert_eq!(
            format!("{program:?}"),
            "0 300 op(13)\n0 0 op(21)\n100 200 100 0 100 -200 op(8)\n-300 0 op(5)\nop(9)\nop(14)"
        );
    }
}
