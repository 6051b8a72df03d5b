use std::io::{self, Write};

use anyhow::Error;
use octa_forge::{BuildError, GeometryError, IoError, LibraryError};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        for cause in err.chain() {
            if let Some(e) = cause.downcast_ref::<BuildError>() {
                collector.collect_build_hints(e);
            } else if let Some(e) = cause.downcast_ref::<LibraryError>() {
                collector.collect_library_hints(e);
            } else if let Some(e) = cause.downcast_ref::<IoError>() {
                collector.collect_io_hints(e);
            } else if let Some(e) = cause.downcast_ref::<GeometryError>() {
                collector.collect_geometry_hints(e);
            } else if let Some(e) = cause.downcast_ref::<io::Error>() {
                collector.collect_std_io_hints(e);
            }
            if collector.has_typed_hints {
                break;
            }
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_build_hints(&mut self, err: &BuildError) {
        self.mark_typed();

        match err {
            BuildError::LigandCount(n) => {
                self.add(format!("{} ligand names were given; an octahedron has 6 sites", n));
                self.add("Repeat a name to use the same ligand on several sites");
                self.add("Example: oforge build -m Co Ammonia Ammonia Ammonia Ammonia Chloride Chloride");
            }

            BuildError::LigandNotFound(name) => {
                self.add(format!("'{}' is not in the ligand library", name));
                self.add("Ligand names are case-sensitive");
                self.add("Run `oforge library list` to see the available names");
                self.add("Add new ligands with `oforge library import --library FILE`");
            }

            BuildError::EmptyCentralLabel => {
                self.add("Pass the central atom with -m/--metal, e.g. -m Fe");
            }

            BuildError::InvalidBondLength(_) => {
                self.add("--bond-length must be a positive distance in Å, e.g. 2.0");
            }

            BuildError::InvalidGeometry { ligand, source } => {
                self.add(format!("The stored geometry of '{}' cannot be placed", ligand));
                self.collect_geometry_hints(source);
            }

            BuildError::Library(_) => {
                self.add("The ligand library could not be queried");
                self.add("Check the file given with --library");
            }
        }
    }

    fn collect_geometry_hints(&mut self, err: &GeometryError) {
        self.mark_typed();

        match err {
            GeometryError::MissingOriginAtom { .. } => {
                self.add("Stored ligands need their donor atom at (0, 0, 0)");
                self.add("Re-import the fragment with `oforge library import --anchor N` to align it");
            }

            GeometryError::NonFiniteCoordinate { index, label } => {
                self.add(format!("Atom {} ('{}') has a NaN or infinite coordinate", index, label));
                self.add("Fix the coordinates in the library or input file");
            }

            GeometryError::ZeroVector => {
                self.add("A zero-length direction was requested; check --bond-length");
            }

            GeometryError::AnchorOutOfRange { count, .. } => {
                self.add(format!("--anchor must be between 0 and {}", count.saturating_sub(1)));
                self.add("Atoms are counted from 0 after --strip has removed its atoms");
            }

            GeometryError::Empty => {
                self.add("No atoms are left to import");
                self.add("Check that --strip does not match every atom of the fragment");
            }
        }
    }

    fn collect_library_hints(&mut self, err: &LibraryError) {
        self.mark_typed();

        match err {
            LibraryError::Parse(_) => {
                self.add("Ligand library file has invalid TOML or an unexpected layout");
                self.add("Each entry is a [[ligand]] table with `name` and `atoms`");
                self.add("Atoms are written as { label = \"O\", position = [x, y, z] }");
            }

            LibraryError::Serialize(_) => {
                self.add("The library could not be written as TOML");
            }

            LibraryError::Io { source, .. } => {
                self.collect_std_io_hints(source);
            }

            LibraryError::NotFound(name) => {
                self.add(format!("'{}' is not in the ligand library", name));
                self.add("Run `oforge library list` to see the available names");
            }

            LibraryError::Duplicate(name) => {
                self.add(format!("A ligand named '{}' already exists", name));
                self.add("Use --force to overwrite it, or choose another name");
            }

            LibraryError::EmptyName => {
                self.add("Give the ligand a non-empty name");
            }
        }
    }

    fn collect_io_hints(&mut self, err: &IoError) {
        self.mark_typed();

        match err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::Parse { line, .. } => {
                self.add(format!("XYZ parser stopped near line {}", line));
                self.add("Line 1 holds the atom count, line 2 a comment");
                self.add("Each further line needs a label and three coordinates");
            }

            IoError::EmptyStructure => {
                self.add("The structure has no atoms");
            }

            IoError::NonFiniteCoordinate { index, label } => {
                self.add(format!("Atom {} ('{}') has a NaN or infinite coordinate", index, label));
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &io::Error) {
        use io::ErrorKind;

        self.mark_typed();

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file and directory permissions with `ls -la`");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide the fragment with -i/--input or pipe it to stdin");
            return;
        }

        if msg.contains("--library") {
            self.add("Editing commands work on a library file, not the built-in set");
            self.add("Export the built-in set first: oforge library export -o ligands.toml");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
