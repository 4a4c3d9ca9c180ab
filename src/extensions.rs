/// Derives one glob pattern per forbidden extension, in input order.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Every other line is taken verbatim as an extension, so compound
/// extensions like `tar.gz` work without special casing. Duplicates are
/// kept as-is.
pub fn glob_patterns(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|ext| format!("*.{ext}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::glob_patterns;

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "# images\nexe\nbat\n\ntar.gz\n";
        let patterns = glob_patterns(input);
        assert_eq!(patterns, vec!["*.exe", "*.bat", "*.tar.gz"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let input = "  exe  \n\t# indented comment\n   \nzip";
        let patterns = glob_patterns(input);
        assert_eq!(patterns, vec!["*.exe", "*.zip"]);
    }

    #[test]
    fn keeps_duplicates_in_input_order() {
        let input = "exe\ndll\nexe\n";
        let patterns = glob_patterns(input);
        assert_eq!(patterns, vec!["*.exe", "*.dll", "*.exe"]);
    }

    #[test]
    fn empty_input_yields_no_patterns() {
        assert!(glob_patterns("").is_empty());
        assert!(glob_patterns("# only comments\n\n").is_empty());
    }
}
