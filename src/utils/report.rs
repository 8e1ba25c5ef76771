//! Human-readable dumps of vectors and matrices.
//!
//! Vector:
//! ```text
//! Vector with 3 entries
//! data[0] = 0
//! data[1] = 0
//! data[2] = 7
//! ```
//!
//! Matrix (row-major, one row per line):
//! ```text
//! 4x3 Matrix
//! 1 0 0
//! 0 1 0
//! 0 0 1
//! 0 0 0
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::config::PrintOptions;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Something that can dump its dimensions and entries as text.
pub trait Report {
    fn fmt_report(&self, f: &mut fmt::Formatter<'_>, opts: &PrintOptions) -> fmt::Result;

    /// Write the dump to `out`.
    fn report<W: Write>(&self, out: &mut W, opts: &PrintOptions) -> io::Result<()> {
        write!(out, "{}", Dump { item: self, opts })
    }

    /// Write the dump to stdout with default options.
    fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.report(&mut lock, &PrintOptions::default())?;
        lock.flush()
    }
}

/// `Display` adapter pairing an item with its print options.
pub struct Dump<'a, T: ?Sized> {
    pub item: &'a T,
    pub opts: &'a PrintOptions,
}

impl<T: Report + ?Sized> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.item.fmt_report(f, self.opts)
    }
}

fn write_entry(f: &mut fmt::Formatter<'_>, x: f64, opts: &PrintOptions) -> fmt::Result {
    match opts.precision {
        Some(p) => write!(f, "{:.*}", p, x),
        None => write!(f, "{}", x),
    }
}

impl Report for Vector {
    fn fmt_report(&self, f: &mut fmt::Formatter<'_>, opts: &PrintOptions) -> fmt::Result {
        writeln!(f, "Vector with {} entries", self.num_elements())?;
        for (i, &x) in self.iter().enumerate() {
            write!(f, "data[{}] = ", i)?;
            write_entry(f, x, opts)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Report for Matrix {
    fn fmt_report(&self, f: &mut fmt::Formatter<'_>, opts: &PrintOptions) -> fmt::Result {
        writeln!(f, "{}x{} Matrix", self.nrows(), self.ncols())?;
        for row in self.rows() {
            for &x in row {
                write_entry(f, x, opts)?;
                f.write_str(&opts.separator)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_report(f, &PrintOptions::default())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_report(f, &PrintOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_dump() {
        let mut v = Vector::new(3);
        v[2] = 7.0;
        assert_eq!(v.to_string(), "Vector with 3 entries\ndata[0] = 0\ndata[1] = 0\ndata[2] = 7\n");
    }

    #[test]
    fn matrix_dump_is_row_major() {
        let mut m = Matrix::new(4, 3);
        for i in 0..3 {
            m[(i, i)] = 1.0;
        }
        assert_eq!(m.to_string(), "4x3 Matrix\n1 0 0 \n0 1 0 \n0 0 1 \n0 0 0 \n");
    }

    #[test]
    fn report_honours_options() {
        let m = Matrix::from_row_slice(1, 2, &[0.5, 1.0 / 3.0]);
        let opts = PrintOptions { precision: Some(2), separator: ", ".to_string() };
        let mut out = Vec::new();
        m.report(&mut out, &opts).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1x2 Matrix\n0.50, 0.33, \n");
    }
}
