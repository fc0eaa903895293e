use super::strip_nonindent_space;

pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKERS: [char; 3] = ['*', '-', '_'];

    /// Three or more of the same marker, optionally separated by spaces.
    pub fn matches(line: &str) -> bool {
        let Some(t) = strip_nonindent_space(line) else {
            return false;
        };
        let t = t.trim_end();
        let Some(marker) = t.chars().next().filter(|c| Self::MARKERS.contains(c)) else {
            return false;
        };
        let mut count = 0;
        for c in t.chars() {
            match c {
                c if c == marker => count += 1,
                ' ' => {}
                _ => return false,
            }
        }
        count >= 3
    }
}
