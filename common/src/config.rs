#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Quiet level.
    ///
    /// `0` prints headers and details, `1` drops the decorations,
    /// `2` prints bare results only.
    pub quiet: u8,
    /// Disables ANSI colors in every output line.
    pub no_color: bool,
}
