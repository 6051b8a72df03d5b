use crate::io::error::Error;
use crate::model::atom::Atom;
use crate::model::complex::ComplexStructure;
use std::io::Write;

/// Writes one XYZ frame.
///
/// Line breaks inside `comment` are replaced by spaces so the frame stays
/// well formed. Coordinates are written with six decimals.
pub fn write_xyz<W: Write>(mut writer: W, atoms: &[Atom], comment: &str) -> Result<(), Error> {
    if atoms.is_empty() {
        return Err(Error::EmptyStructure);
    }
    if let Some((index, atom)) = atoms.iter().enumerate().find(|(_, a)| !a.is_finite()) {
        return Err(Error::NonFiniteCoordinate {
            index,
            label: atom.label.clone(),
        });
    }

    writeln!(writer, "{}", atoms.len())?;
    writeln!(writer, "{}", comment.replace(['\r', '\n'], " "))?;
    for atom in atoms {
        let [x, y, z] = atom.position.map(without_negative_zero);
        writeln!(writer, "{} {:.6} {:.6} {:.6}", atom.label, x, y, z)?;
    }
    Ok(())
}

/// Writes a complex with its site assignment as the comment line.
pub fn write_complex<W: Write>(writer: W, complex: &ComplexStructure) -> Result<(), Error> {
    write_xyz(writer, &complex.to_atoms(), &complex.description())
}

// Values that round to zero would otherwise print as -0.000000.
fn without_negative_zero(c: f64) -> f64 {
    if c.abs() < 5e-7 { 0.0 } else { c }
}
