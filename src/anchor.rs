use std::borrow::Cow;

/// Plain-substring span replacement: first occurrence of `start` through the
/// end of the first occurrence of `end` at or after it.
///
/// This is the indexOf-style sibling of [`PatchSpec`](crate::PatchSpec) for
/// targets where a literal anchor pair is enough and a regex would only add
/// escaping noise. A missing anchor is the same silent no-op as a zero-match
/// regex pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSpec<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub replacement: &'a str,
}

impl<'a> AnchorSpec<'a> {
    pub const fn new(start: &'a str, end: &'a str, replacement: &'a str) -> Self {
        Self {
            start,
            end,
            replacement,
        }
    }

    /// Replace the first anchored span, or return the input unchanged when
    /// either anchor is absent.
    pub fn apply<'s>(&self, source: &'s str) -> Cow<'s, str> {
        let Some(start) = source.find(self.start) else {
            return Cow::Borrowed(source);
        };
        let Some(end_offset) = source[start..].find(self.end) else {
            return Cow::Borrowed(source);
        };
        let end = start + end_offset + self.end.len();

        let mut patched =
            String::with_capacity(source.len() - (end - start) + self.replacement.len());
        patched.push_str(&source[..start]);
        patched.push_str(self.replacement);
        patched.push_str(&source[end..]);

        Cow::Owned(patched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_first_anchored_span() {
        let source = "aaa const simularTrajeto = async () => { corpo(); }; bbb";
        let spec = AnchorSpec::new("const simularTrajeto = async", "};", "NOVO");

        let result = spec.apply(source);
        assert_eq!(result, "aaa NOVO bbb");
    }

    #[test]
    fn end_anchor_is_included_in_the_span() {
        let source = "x = 1; // fim\ny = 2;";
        let spec = AnchorSpec::new("x = 1", "fim", "REPL");

        assert_eq!(spec.apply(source), "REPL\ny = 2;");
    }

    #[test]
    fn missing_start_anchor_is_a_no_op() {
        let source = "nada para substituir aqui };";
        let spec = AnchorSpec::new("const simularTrajeto", "};", "NOVO");

        let result = spec.apply(source);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, source);
    }

    #[test]
    fn missing_end_anchor_is_a_no_op() {
        let source = "const simularTrajeto = async () => { sem fechamento";
        let spec = AnchorSpec::new("const simularTrajeto", "};", "NOVO");

        assert_eq!(spec.apply(source), source);
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let source = "fn(); }; fn(); };";
        let spec = AnchorSpec::new("fn()", "};", "X");

        assert_eq!(spec.apply(source), "X fn(); };");
    }
}
