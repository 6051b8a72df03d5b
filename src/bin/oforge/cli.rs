use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "oforge",
    about = "Symmetry-distinct isomers and 3-D structures of octahedral complexes",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress banner, progress and summary output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build one XYZ structure per distinct ligand arrangement
    #[command(visible_alias = "b")]
    Build(BuildArgs),

    /// List the distinct ligand arrangements without building structures
    #[command(visible_alias = "e")]
    Enumerate(EnumerateArgs),

    /// Inspect and edit ligand library files
    #[command(visible_alias = "l")]
    Library(LibraryArgs),
}

/// Ligand library selection shared by all commands that read geometries.
#[derive(Args)]
#[command(next_help_heading = "Ligand Library")]
pub struct LibraryOptions {
    /// Ligand library file (TOML); the built-in library is used if omitted
    #[arg(long, value_name = "FILE", global = true)]
    pub library: Option<PathBuf>,
}

#[derive(Args)]
#[command(next_help_heading = "Geometry")]
pub struct GeometryOptions {
    /// Distance from the central atom to each donor atom (Å)
    #[arg(long = "bond-length", value_name = "Å", default_value = "2.0")]
    pub bond_length: f64,

    /// Strategy used to discard symmetry-equivalent arrangements
    #[arg(long, value_name = "STRATEGY", default_value = "canonical")]
    pub dedup: DedupMode,
}

#[derive(Args)]
#[command(next_help_heading = "Output")]
pub struct OutputOptions {
    /// Directory for the generated XYZ files (created if missing)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// File name prefix; files are named <PREFIX>_<N>.xyz
    #[arg(long, value_name = "PREFIX", default_value = "octahedral_complex")]
    pub prefix: String,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Label of the central atom (e.g. Co, Fe, Pt)
    #[arg(short = 'm', long = "metal", value_name = "LABEL")]
    pub central: String,

    /// Six ligand names, space- or comma-separated
    #[arg(value_name = "LIGAND", num_args = 1.., value_delimiter = ',', required = true)]
    pub ligands: Vec<String>,

    #[command(flatten)]
    pub library: LibraryOptions,

    #[command(flatten)]
    pub geometry: GeometryOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct EnumerateArgs {
    /// Six ligand labels, space- or comma-separated
    #[arg(value_name = "LIGAND", num_args = 1.., value_delimiter = ',', required = true)]
    pub ligands: Vec<String>,

    /// Strategy used to discard symmetry-equivalent arrangements
    #[arg(long, value_name = "STRATEGY", default_value = "canonical")]
    pub dedup: DedupMode,
}

#[derive(Args)]
pub struct LibraryArgs {
    #[command(subcommand)]
    pub action: LibraryAction,

    #[command(flatten)]
    pub library: LibraryOptions,
}

#[derive(Subcommand)]
pub enum LibraryAction {
    /// List ligand names with their atom counts
    List,

    /// Print the atoms of one ligand
    Show {
        /// Ligand name
        name: String,
    },

    /// Write the library as TOML (stdout if no file is given)
    Export {
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Align a ligand fragment from an XYZ file and add it to --library
    Import(ImportArgs),

    /// Remove a ligand from --library
    Remove {
        /// Ligand name
        name: String,
    },
}

#[derive(Args)]
pub struct ImportArgs {
    /// Name to store the ligand under
    pub name: String,

    /// XYZ file with the fragment (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Zero-based index of the donor atom, after stripping
    #[arg(long, value_name = "N", default_value = "0")]
    pub anchor: usize,

    /// Drop atoms with this label first (e.g. the metal the fragment was cut from)
    #[arg(long, value_name = "LABEL")]
    pub strip: Option<String>,

    /// Overwrite an existing ligand of the same name
    #[arg(long)]
    pub force: bool,
}

/// Symmetry reduction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DedupMode {
    /// Keep the distinct lexicographically smallest images
    Canonical,
    /// Compare each candidate against all kept representatives
    Pairwise,
}

pub fn parse() -> Cli {
    Cli::parse()
}
