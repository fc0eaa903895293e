/// Code span type with owned delimiter constant.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';

    /// Parses a code span at the start of `s`.
    ///
    /// The closing run must have exactly as many backticks as the opening
    /// one. Returns the trimmed code text and the number of bytes consumed.
    pub fn parse(s: &str) -> Option<(&str, usize)> {
        let open = s.chars().take_while(|c| *c == Self::TICK).count();
        if open == 0 {
            return None;
        }
        let body = &s[open..];
        let mut i = 0;
        while i < body.len() {
            let run = body[i..].chars().take_while(|c| *c == Self::TICK).count();
            if run == 0 {
                i += body[i..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            if run == open {
                let code = body[..i].trim_matches([' ', '\t', '\n']);
                if code.is_empty() {
                    return None;
                }
                return Some((code, open + i + run));
            }
            i += run;
        }
        None
    }
}
