//! Connectivity table (CT) writer.
//!
//! One record per molecule: a header line with the length, then one line
//! per base
//!
//! ```text
//! index base index-1 index+1 partner index
//! ```
//!
//! where `index+1` is 0 for the last base and `partner` is 0 for unpaired
//! bases. Each record is followed by one blank line.
//!
//! CT has a single partner column, so pairs come from
//! [`RnaMolecule::simplified_pair_map`]. Tertiary contacts are dropped.
//!

use std::fmt;
use log::debug;
use rc_structure::RnaMolecule;
use rc_structure::NAIDX;

use crate::StructureWriter;

#[derive(Debug, Clone, Copy, Default)]
pub struct CtWriter;

impl CtWriter {
    pub fn new() -> Self {
        CtWriter
    }
}

impl StructureWriter for CtWriter {
    fn write_molecule<W: fmt::Write>(&self, molecule: &RnaMolecule, out: &mut W) -> fmt::Result {
        let length = molecule.len();
        let sequence = molecule.sequence();
        let pairs = molecule.simplified_pair_map();
        debug!(
            "Writing CT record for molecule {} ({} nt, {} paired).",
            molecule.id(),
            length,
            pairs.len()
        );

        writeln!(out, "{}", length)?;
        for (n, symbol) in sequence.chars().enumerate() {
            let i = n + 1;
            let next = if i == length { 0 } else { i + 1 };
            let partner = NAIDX::try_from(i)
                .ok()
                .and_then(|k| pairs.get(&k))
                .copied()
                .unwrap_or(0);
            writeln!(out, "{} {} {} {} {} {}", i, symbol, n, next, partner, i)?;
        }
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn molecule(id: usize, seq: &str, pairs: &[(NAIDX, NAIDX)]) -> RnaMolecule {
        let mut m = RnaMolecule::new(id);
        for c in seq.chars() {
            m.append_base(c).unwrap();
        }
        for &(i, j) in pairs {
            m.add_pair(i, j).unwrap();
        }
        m
    }

    #[test]
    fn test_hairpin_record() {
        init();
        let m = molecule(1, "GCAU", &[(1, 4), (2, 3)]);
        let out = CtWriter::new().write(&[m]).unwrap();
        assert_eq!(out, "4\n\
                         1 G 0 2 4 1\n\
                         2 C 1 3 3 2\n\
                         3 A 2 4 2 3\n\
                         4 U 3 0 1 4\n\
                         \n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "1 G 0 2 4 1");
        assert_eq!(lines[4], "4 U 3 0 1 4");
    }

    #[test]
    fn test_empty_molecule() {
        init();
        let out = CtWriter::new().write(&[RnaMolecule::new(7)]).unwrap();
        assert_eq!(out, "0\n\n");
        assert_eq!(CtWriter::new().write(&[]).unwrap(), "");
    }

    #[test]
    fn test_unpaired_and_multiple_records() {
        init();
        let a = molecule(1, "AN", &[]);
        let b = molecule(2, "G", &[]);
        let out = CtWriter::new().write(&[a, b]).unwrap();
        assert_eq!(out, "2\n1 A 0 2 0 1\n2 N 1 0 0 2\n\n1\n1 G 0 0 0 1\n\n");
    }

    #[test]
    fn test_one_partner_per_base() {
        init();
        // Base 1 is claimed three times; only the first claim survives.
        let mut m = molecule(1, "GGGCCC", &[(1, 6), (1, 5), (1, 4), (2, 5)]);
        m.add_tertiary_pair(3, 4).unwrap();
        let out = CtWriter::new().write(&[m]).unwrap();
        let partners: Vec<&str> = out.lines()
            .skip(1)
            .filter(|l| !l.is_empty())
            .map(|l| l.split(' ').nth(4).unwrap())
            .collect();
        assert_eq!(partners, vec!["6", "5", "0", "0", "2", "1"]);
    }

    #[test]
    fn test_partner_beyond_chain() {
        init();
        let m = molecule(1, "GC", &[(1, 9)]);
        let out = CtWriter::new().write(&[m]).unwrap();
        assert_eq!(out, "2\n1 G 0 2 9 1\n2 C 1 0 0 2\n\n");
    }

    #[test]
    fn test_deterministic() {
        let m = molecule(3, "GGAAUCC", &[(1, 7), (2, 6), (6, 3), (7, 4)]);
        let w = CtWriter::new();
        let once = w.write(std::slice::from_ref(&m)).unwrap();
        let twice = w.write(std::slice::from_ref(&m)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_write_to() {
        init();
        let m = molecule(1, "GCAU", &[(1, 4)]);
        let mut buf: Vec<u8> = Vec::new();
        CtWriter::new().write_to(&mut buf, &[m.clone()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), CtWriter::new().write(&[m]).unwrap());
    }
}
