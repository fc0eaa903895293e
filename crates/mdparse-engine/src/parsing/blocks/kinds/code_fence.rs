use super::strip_nonindent_space;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks(usize),
    Tildes(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;

    /// Detects a fence line, returning its marker kind and run length.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = strip_nonindent_space(line)?;
        let run = |c: char| t.chars().take_while(|x| *x == c).count();
        let ticks = run(Self::BACKTICK);
        if ticks >= Self::MIN_LEN {
            // An info string may not contain backticks.
            if t[ticks..].contains(Self::BACKTICK) {
                return None;
            }
            return Some(FenceSig::Backticks(ticks));
        }
        let tildes = run(Self::TILDE);
        (tildes >= Self::MIN_LEN).then_some(FenceSig::Tildes(tildes))
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks(_) => FenceKind::Backticks,
            FenceSig::Tildes(_) => FenceKind::Tildes,
        }
    }

    fn len(sig: FenceSig) -> usize {
        match sig {
            FenceSig::Backticks(n) | FenceSig::Tildes(n) => n,
        }
    }

    /// A closing fence uses the same marker, is at least as long as the
    /// opener and carries no info string.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        let Some(sig) = Self::sig(line) else {
            return false;
        };
        let marker_only = line
            .trim()
            .chars()
            .all(|c| c == Self::BACKTICK || c == Self::TILDE);
        Self::kind(sig) == Self::kind(open) && Self::len(sig) >= Self::len(open) && marker_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceSig::Backticks(3)));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~~"), Some(FenceSig::Tildes(4)));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``"), None);
        assert_eq!(CodeFence::sig("``` a ` b"), None);
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(FenceSig::Backticks(3), "```"));
        assert!(CodeFence::closes(FenceSig::Backticks(3), "`````"));
        assert!(CodeFence::closes(FenceSig::Tildes(3), "~~~"));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(!CodeFence::closes(FenceSig::Backticks(3), "~~~"));
        assert!(!CodeFence::closes(FenceSig::Tildes(3), "```"));
        assert!(!CodeFence::closes(FenceSig::Backticks(4), "```"));
        assert!(!CodeFence::closes(FenceSig::Backticks(3), "```rust"));
    }
}
