/// Greedy word wrap; widths are counted in characters, not bytes.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        _ => {
            let mut out: String = s.chars().take(max_len - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("ligand not found", 40), vec!["ligand not found"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("an octahedral complex needs exactly 6 ligands", 20),
            vec!["an octahedral", "complex needs", "exactly 6 ligands"]
        );
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wrap_counts_characters() {
        assert_eq!(wrap("Å Å Å", 3), vec!["Å Å", "Å"]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("Water", 5), "Water");
        assert_eq!(truncate("Water", 8), "Water");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Ammonia/Chloride", 10), "Ammonia/C…");
        assert_eq!(truncate("Chloride", 1), "…");
        assert_eq!(truncate("Chloride", 0), "");
        assert_eq!(truncate("ÅÅÅÅ", 3), "ÅÅ…");
    }
}
