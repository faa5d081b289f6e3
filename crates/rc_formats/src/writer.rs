use std::fmt;
use std::io;
use rc_structure::RnaMolecule;

/// Turns molecules into serialized text.
///
/// Encoding is pure. Persisting the result is a separate step with its own
/// error, see [`StructureWriter::write_to`].
pub trait StructureWriter {
    /// Append the record of one molecule to `out`.
    fn write_molecule<W: fmt::Write>(&self, molecule: &RnaMolecule, out: &mut W) -> fmt::Result;

    /// Encode all molecules, records in the given order.
    fn write(&self, molecules: &[RnaMolecule]) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for molecule in molecules {
            self.write_molecule(molecule, &mut out)?;
        }
        Ok(out)
    }

    /// Encode all molecules and hand the bytes to `writer`.
    fn write_to<W: io::Write>(&self, mut writer: W, molecules: &[RnaMolecule]) -> io::Result<()> {
        let text = self.write(molecules).map_err(io::Error::other)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}
