use std::io::Write;

use anyhow::{Context, Result, bail};
use log::info;

use octa_forge::build_complexes;
use octa_forge::io::write_complex;

use crate::cli::BuildArgs;
use crate::config::{build_config, library_source_name, load_library};
use crate::display::{Context as DisplayContext, Progress, print_arrangements, print_build_summary};
use crate::io::{create_output, ensure_dir, structure_path};

const TOTAL_STEPS: u8 = 3;

pub fn run_build(args: BuildArgs, ctx: DisplayContext) -> Result<()> {
    if args.output.prefix.trim().is_empty() {
        bail!("Output prefix must not be empty (see --prefix)");
    }

    let config = build_config(&args.geometry);
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading ligand library");
    let library = load_library(&args.library)?;
    let source = library_source_name(&args.library);
    progress.complete_step(
        "Loading ligand library",
        &[format!("{} ligands ({})", library.len(), source)],
    );

    progress.step("Enumerating arrangements");
    let complexes = build_complexes(&library, &args.central, &args.ligands[..], &config)
        .context("Failed to build complexes")?;
    progress.complete_step(
        "Enumerating arrangements",
        &[
            format!("Reduce under Oh ({:?})", config.dedup),
            format!("{} distinct arrangements", complexes.len()),
            format!("Place ligands at {:.3} Å", config.bond_length),
        ],
    );

    if ctx.interactive {
        print_build_summary(
            &args.central,
            &args.ligands,
            &source,
            &config,
            complexes.len(),
        );
        print_arrangements(complexes.iter().map(|c| &c.assignment));
    }

    progress.counted_step("Writing XYZ files", complexes.len() as u64);
    ensure_dir(&args.output.dir)?;
    for (i, complex) in complexes.iter().enumerate() {
        let path = structure_path(&args.output.dir, &args.output.prefix, i + 1);
        let mut writer = create_output(Some(&path))?;
        write_complex(&mut writer, complex)
            .and_then(|()| writer.flush().map_err(Into::into))
            .with_context(|| format!("Failed to write structure file: {}", path.display()))?;
        info!("Wrote {} ({})", path.display(), complex.assignment);
        progress.inc();
    }
    progress.complete_step(
        "Writing XYZ files",
        &[format!(
            "{} files → {}",
            complexes.len(),
            args.output
                .dir
                .join(format!("{}_*.xyz", args.output.prefix))
                .display()
        )],
    );

    progress.finish(&format!("{} structures written", complexes.len()));

    Ok(())
}
