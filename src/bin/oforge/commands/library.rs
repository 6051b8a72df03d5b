use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use octa_forge::geometry::align_ligand;
use octa_forge::io::{read_xyz, write_xyz};
use octa_forge::{LigandLibrary, LigandStore};

use crate::cli::{ImportArgs, LibraryAction, LibraryArgs, LibraryOptions};
use crate::config::{library_source_name, load_library};
use crate::display::{Context as DisplayContext, Progress, composition, print_library_table};
use crate::io::{create_output, open_input, stdin_is_tty, stdout_is_tty};

const IMPORT_STEPS: u8 = 3;

pub fn run_library(args: LibraryArgs, ctx: DisplayContext) -> Result<()> {
    match args.action {
        LibraryAction::List => list(&args.library, ctx),
        LibraryAction::Show { name } => show(&args.library, &name),
        LibraryAction::Export { output } => export(&args.library, output.as_deref()),
        LibraryAction::Import(import) => import_ligand(&args.library, import, ctx),
        LibraryAction::Remove { name } => remove(&args.library, &name),
    }
}

fn list(opts: &LibraryOptions, ctx: DisplayContext) -> Result<()> {
    let library = load_library(opts)?;

    if ctx.interactive && stdout_is_tty() {
        print_library_table(&library, &library_source_name(opts));
        return Ok(());
    }

    let mut out = create_output(None)?;
    for (name, geometry) in library.iter() {
        writeln!(
            out,
            "{}\t{}\t{}",
            name,
            geometry.atom_count(),
            composition(geometry)
        )?;
    }
    out.flush()?;
    Ok(())
}

fn show(opts: &LibraryOptions, name: &str) -> Result<()> {
    let library = load_library(opts)?;
    let geometry = library.fetch_ligand_geometry(name)?;

    let mut out = create_output(None)?;
    write_xyz(&mut out, &geometry.atoms, name)
        .with_context(|| format!("Failed to print ligand '{}'", name))?;
    out.flush()?;
    Ok(())
}

fn export(opts: &LibraryOptions, output: Option<&Path>) -> Result<()> {
    let library = load_library(opts)?;
    let text = library.to_toml_string()?;

    let mut out = create_output(output)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn import_ligand(opts: &LibraryOptions, args: ImportArgs, ctx: DisplayContext) -> Result<()> {
    let path = editable_library_path(opts, "import")?;
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: oforge library import <NAME> -i <FRAGMENT.xyz> --library <FILE>"
        );
    }

    let mut progress = Progress::new(ctx.interactive, IMPORT_STEPS);

    progress.step("Reading fragment");
    let input = open_input(args.input.as_deref())?;
    let frame = read_xyz(input).context("Failed to read ligand fragment")?;
    let read_count = frame.atoms.len();

    let atoms: Vec<_> = match &args.strip {
        Some(label) => frame
            .atoms
            .into_iter()
            .filter(|atom| atom.label != *label)
            .collect(),
        None => frame.atoms,
    };
    let stripped = read_count - atoms.len();
    if let Some(label) = &args.strip {
        if stripped == 0 {
            warn!("No atoms labelled '{}' were found to strip", label);
        } else {
            info!("Stripped {} atom(s) labelled '{}'", stripped, label);
        }
    }
    progress.complete_step(
        "Reading fragment",
        &[format!("{} atoms read, {} stripped", read_count, stripped)],
    );

    progress.step("Aligning ligand");
    let geometry = align_ligand(&atoms, args.anchor)
        .with_context(|| format!("Failed to align ligand '{}'", args.name))?;
    progress.complete_step(
        "Aligning ligand",
        &[format!(
            "Donor atom {} ('{}') at the origin, ligand along +z",
            args.anchor, geometry.atoms[args.anchor].label
        )],
    );

    progress.step("Saving library");
    let mut library = if path.exists() {
        LigandLibrary::load(path)?
    } else {
        info!("Creating new ligand library {}", path.display());
        LigandLibrary::new()
    };
    let replaced = if args.force {
        library.replace(args.name.as_str(), geometry)?.is_some()
    } else {
        library.store_ligand_geometry(&args.name, geometry)?;
        false
    };
    library.save(path)?;
    progress.complete_step(
        "Saving library",
        &[format!(
            "{} '{}' in {}",
            if replaced { "Replaced" } else { "Added" },
            args.name,
            path.display()
        )],
    );

    progress.finish(&format!("Imported '{}'", args.name));
    Ok(())
}

fn remove(opts: &LibraryOptions, name: &str) -> Result<()> {
    let path = editable_library_path(opts, "remove")?;

    let mut library = LigandLibrary::load(path)?;
    library.remove(name)?;
    library.save(path)?;
    info!("Removed '{}' from {}", name, path.display());
    Ok(())
}

fn editable_library_path<'a>(opts: &'a LibraryOptions, action: &str) -> Result<&'a Path> {
    match opts.library.as_deref() {
        Some(path) => Ok(path),
        None => bail!(
            "The built-in library is read-only; '{}' needs --library <FILE>",
            action
        ),
    }
}
