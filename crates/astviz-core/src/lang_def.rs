use crate::tree::SyntaxTree;
use astviz_error::Result;

/// A parser collaborator: turns source bytes into a categorized [`SyntaxTree`].
pub trait LanguageTrait {
    /// Display name, e.g. `java`.
    fn name() -> &'static str;

    /// File extensions this language handles, without the dot.
    fn supported_extensions() -> &'static [&'static str];

    fn parse(source: &[u8]) -> Result<SyntaxTree>;

    /// Flat JSON export of the first function in `source`.
    fn flat_dump(source: &[u8]) -> Result<String>;

    fn accepts_extension(ext: &str) -> bool {
        Self::supported_extensions()
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}
