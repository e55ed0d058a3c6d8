// src/core/sanitize.rs

/// Leading/trailing whitespace off.
pub fn trim(s: &str) -> String {
    s!(s.trim())
}

/// Trim, then drop every tab and newline left inside the text.
/// Naver splits the market-cap figure across lines inside its `<em>`.
pub fn trim_drop_breaks(s: &str) -> String {
    s.trim().chars().filter(|&c| c != '\t' && c != '\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_keeps_inner_whitespace() {
        assert_eq!(trim("  0.15 %\n"), "0.15 %");
    }

    #[test]
    fn breaks_are_removed_inside() {
        assert_eq!(trim_drop_breaks("\n\t\t5\n\t\t000000000000\n\t"), "5000000000000");
        assert_eq!(trim_drop_breaks(" 5조\n\t3,210 "), "5조3,210");
    }
}
