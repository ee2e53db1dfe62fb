/// Floating-point text format selector.
///
/// Only [`FloatFormat::General`] is currently parsed; requesting any other
/// format yields [`Status::InvalidArgument`](crate::Status::InvalidArgument)
/// without consuming input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FloatFormat {
    /// Fixed or scientific notation, whichever the input uses.
    #[default]
    General,
    /// Scientific notation only (unsupported).
    Scientific,
    /// Fixed notation only (unsupported).
    Fixed,
    /// Hexadecimal significand (unsupported).
    Hex,
}
