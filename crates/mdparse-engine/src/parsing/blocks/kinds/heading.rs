use super::strip_nonindent_space;

/// ATX (`# Title`) and setext (`Title` / `=====`) headings.
pub struct Heading;

impl Heading {
    pub const ATX_MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Parses an ATX heading line into its level and inline text.
    ///
    /// A space after the hashes is optional; trailing hashes are dropped.
    pub fn atx(line: &str) -> Option<(u8, &str)> {
        let t = strip_nonindent_space(line)?;
        let level = t.chars().take_while(|c| *c == Self::ATX_MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = t[level..]
            .trim()
            .trim_end_matches(Self::ATX_MARKER)
            .trim_end();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }

    /// Level of a setext underline: `=` for 1, `-` for 2.
    pub fn setext_level(line: &str) -> Option<u8> {
        let t = line.trim_end();
        let all = |c: char| !t.is_empty() && t.chars().all(|x| x == c);
        if all('=') {
            Some(1)
        } else if all('-') {
            Some(2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atx_levels() {
        assert_eq!(Heading::atx("# One"), Some((1, "One")));
        assert_eq!(Heading::atx("###### Six"), Some((6, "Six")));
        assert_eq!(Heading::atx("####### Seven"), None);
    }

    #[test]
    fn atx_trailing_hashes_and_tight_form() {
        assert_eq!(Heading::atx("## Title ##"), Some((2, "Title")));
        assert_eq!(Heading::atx("#Tight"), Some((1, "Tight")));
        assert_eq!(Heading::atx("#"), None);
    }

    #[test]
    fn setext_underlines() {
        assert_eq!(Heading::setext_level("====="), Some(1));
        assert_eq!(Heading::setext_level("---  "), Some(2));
        assert_eq!(Heading::setext_level("-=-"), None);
        assert_eq!(Heading::setext_level(""), None);
    }
}
