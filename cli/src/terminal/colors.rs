use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const VALID: Color = Color::BrightGreen;
pub const INVALID: Color = Color::BrightRed;
pub const MALFORMED: Color = Color::Yellow;
