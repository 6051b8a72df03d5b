use super::XyzFrame;
use crate::io::error::Error;
use crate::model::atom::Atom;
use std::io::BufRead;

/// Reads the first frame of an XYZ stream.
///
/// Leading blank lines are skipped. Columns after the three coordinates are
/// ignored, so extended XYZ records with extra properties are accepted.
pub fn read_xyz<R: BufRead>(reader: R) -> Result<XyzFrame, Error> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|content| (i + 1, content)))
        .skip_while(|line| matches!(line, Ok((_, content)) if content.trim().is_empty()));

    let (count_line_no, count_line) = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::parse(1, "missing atom count line"))?;
    let atom_count = count_line
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(|| Error::parse(count_line_no, "invalid atom count"))?;
    if atom_count == 0 {
        return Err(Error::EmptyStructure);
    }

    let (_, comment) = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::parse(count_line_no + 1, "missing comment line"))?;

    let mut atoms = Vec::with_capacity(atom_count);
    let mut last_line_no = count_line_no + 1;
    while atoms.len() < atom_count {
        let Some((ln, raw)) = lines.next().transpose()? else {
            return Err(Error::parse(
                last_line_no,
                format!(
                    "expected {} atom records, found {}",
                    atom_count,
                    atoms.len()
                ),
            ));
        };
        last_line_no = ln;
        atoms.push(parse_atom(&raw, ln)?);
    }

    Ok(XyzFrame {
        comment: comment.trim_end().to_string(),
        atoms,
    })
}

fn parse_atom(raw: &str, line_no: usize) -> Result<Atom, Error> {
    let tokens: Vec<_> = raw.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::parse(
            line_no,
            "atom record must contain a label and three coordinates",
        ));
    }

    let mut position = [0.0; 3];
    for (axis, (slot, token)) in position.iter_mut().zip(&tokens[1..4]).enumerate() {
        *slot = token.parse::<f64>().map_err(|_| {
            Error::parse(
                line_no,
                format!("invalid {} coordinate '{}'", ["x", "y", "z"][axis], token),
            )
        })?;
    }

    Ok(Atom::new(tokens[0], position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_first_frame() {
        let text = "\n3\nwater\nO 0.0 0.0 0.0\nH 0.7591 0.0 0.5877\nH -0.7591 0.0 0.5877 extra\n1\nnext\nX 0 0 0\n";
        let frame = read_xyz(Cursor::new(text)).unwrap();

        assert_eq!(frame.comment, "water");
        assert_eq!(frame.atoms.len(), 3);
        assert_eq!(frame.atoms[0], Atom::new("O", [0.0, 0.0, 0.0]));
        assert_eq!(frame.atoms[2], Atom::new("H", [-0.7591, 0.0, 0.5877]));
    }

    #[test]
    fn empty_comment_line_is_allowed() {
        let frame = read_xyz(Cursor::new("1\n\nCl 0 0 0\n")).unwrap();
        assert_eq!(frame.comment, "");
        assert_eq!(frame.atoms[0].label, "Cl");
    }

    #[test]
    fn reports_line_of_bad_coordinate() {
        let err = read_xyz(Cursor::new("2\nbad\nC 0 0 0\nO 0 zero 1.13\n")).unwrap_err();
        match err {
            Error::Parse { line, details } => {
                assert_eq!(line, 4);
                assert!(details.contains("y coordinate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_truncated_and_malformed_headers() {
        assert!(matches!(
            read_xyz(Cursor::new("3\ncomment\nC 0 0 0\n")),
            Err(Error::Parse { line: 3, .. })
        ));
        assert!(matches!(
            read_xyz(Cursor::new("three\ncomment\n")),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(read_xyz(Cursor::new("")), Err(Error::Parse { .. })));
        assert!(matches!(
            read_xyz(Cursor::new("0\nnothing\n")),
            Err(Error::EmptyStructure)
        ));
        assert!(matches!(
            read_xyz(Cursor::new("1\nshort\nC 0 0\n")),
            Err(Error::Parse { line: 3, .. })
        ));
    }
}
