use std::io::{self, Write};

use octa_forge::{BuildConfig, DedupStrategy, LigandGeometry, LigandLibrary, Site, SiteAssignment};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_ROWS: usize = 30;

pub fn print_build_summary(
    central: &str,
    ligands: &[String],
    library: &str,
    config: &BuildConfig,
    structures: usize,
) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut distinct: Vec<&str> = ligands.iter().map(String::as_str).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let dedup = match config.dedup {
        DedupStrategy::Canonical => "canonical form",
        DedupStrategy::Pairwise => "pairwise",
    };

    let rows = vec![
        ("Central Atom", central.to_string()),
        ("Ligand Types", distinct.join(", ")),
        ("Library", library.to_string()),
        ("Bond Length", format!("{:.3} Å", config.bond_length)),
        ("Reduction", dedup.to_string()),
        ("Structures", structures.to_string()),
    ];

    print_kv_table(&mut out, "Build Summary", &rows);
}

/// Arrangements as trans pairs: the ligands on +/- of each axis.
pub fn print_arrangements<'a>(arrangements: impl ExactSizeIterator<Item = &'a SiteAssignment>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let total = arrangements.len();
    let index_w = 4usize;
    let sep_overhead = 10;
    let axis_w = SAFE_TABLE_WIDTH.saturating_sub(index_w + sep_overhead) / 3;

    let _ = writeln!(out, "{}┌─ Distinct Arrangements ({}) ─┐", INDENT, total);
    let _ = writeln!(
        out,
        "{}┌{i_line}┬{a_line}┬{a_line}┬{a_line}┐",
        INDENT,
        i_line = "─".repeat(index_w + 2),
        a_line = "─".repeat(axis_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:>index_w$} │ {:<axis_w$} │ {:<axis_w$} │ {:<axis_w$} │",
        INDENT,
        "#",
        "x (+/-)",
        "y (+/-)",
        "z (+/-)",
        index_w = index_w,
        axis_w = axis_w
    );
    let _ = writeln!(
        out,
        "{}├{i_line}┼{a_line}┼{a_line}┼{a_line}┤",
        INDENT,
        i_line = "─".repeat(index_w + 2),
        a_line = "─".repeat(axis_w + 2)
    );

    for (i, assignment) in arrangements.take(MAX_ROWS).enumerate() {
        let pair = |pos: Site, neg: Site| {
            truncate(
                &format!("{}/{}", assignment.ligand_at(pos), assignment.ligand_at(neg)),
                axis_w,
            )
        };
        let _ = writeln!(
            out,
            "{}│ {:>index_w$} │ {:<axis_w$} │ {:<axis_w$} │ {:<axis_w$} │",
            INDENT,
            i + 1,
            pair(Site::PosX, Site::NegX),
            pair(Site::PosY, Site::NegY),
            pair(Site::PosZ, Site::NegZ),
            index_w = index_w,
            axis_w = axis_w
        );
    }

    if total > MAX_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:>index_w$} │ {:<axis_w$} │ {:<axis_w$} │ {:<axis_w$} │",
            INDENT,
            "...",
            format!("({} more)", total - MAX_ROWS),
            "",
            "",
            index_w = index_w,
            axis_w = axis_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{i_line}┴{a_line}┴{a_line}┴{a_line}┘",
        INDENT,
        i_line = "─".repeat(index_w + 2),
        a_line = "─".repeat(axis_w + 2)
    );
}

pub fn print_library_table(library: &LigandLibrary, source: &str) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let name_w = 16usize;
    let count_w = 5usize;
    let sep_overhead = 8;
    let comp_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(&format!("Ligands ({source})"), SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{n_line}┬{c_line}┬{f_line}┐",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        c_line = "─".repeat(count_w + 2),
        f_line = "─".repeat(comp_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<comp_w$} │",
        INDENT,
        "Name",
        "Atoms",
        "Composition",
        name_w = name_w,
        count_w = count_w,
        comp_w = comp_w
    );
    let _ = writeln!(
        out,
        "{}├{n_line}┼{c_line}┼{f_line}┤",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        c_line = "─".repeat(count_w + 2),
        f_line = "─".repeat(comp_w + 2)
    );

    for (name, geometry) in library.iter() {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<comp_w$} │",
            INDENT,
            truncate(name, name_w),
            geometry.atom_count(),
            truncate(&composition(geometry), comp_w),
            name_w = name_w,
            count_w = count_w,
            comp_w = comp_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{n_line}┴{c_line}┴{f_line}┘",
        INDENT,
        n_line = "─".repeat(name_w + 2),
        c_line = "─".repeat(count_w + 2),
        f_line = "─".repeat(comp_w + 2)
    );
}

/// Label counts in order of first appearance, e.g. `NH3` for ammonia.
pub fn composition(geometry: &LigandGeometry) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in geometry.labels() {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }

    counts
        .into_iter()
        .map(|(label, n)| {
            if n == 1 {
                label.to_string()
            } else {
                format!("{label}{n}")
            }
        })
        .collect()
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use octa_forge::Atom;

    #[test]
    fn composition_counts_repeated_labels() {
        let water = LigandLibrary::builtin().get("Water").cloned().unwrap_or_default();
        assert_eq!(composition(&water), "OH2");

        let mixed = LigandGeometry::new(vec![
            Atom::new("S", [0.0; 3]),
            Atom::new("C", [0.0, 0.0, 1.6]),
            Atom::new("N", [0.0, 0.0, 2.8]),
        ]);
        assert_eq!(composition(&mixed), "SCN");
    }
}
