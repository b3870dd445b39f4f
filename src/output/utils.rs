//! Shared helpers for drawing tree lines

use termcolor::Color;

/// Connector for an entry that has more siblings after it.
pub const BRANCH: &str = "├─── ";
/// Connector for the last entry of a layer.
pub const LAST_BRANCH: &str = "└─── ";

const CONTINUE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Connector drawn in front of an entry name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for the children of an entry.
/// The vertical bar continues while siblings still follow.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK_INDENT)
    } else {
        format!("{}{}", prefix, CONTINUE_INDENT)
    }
}

/// Directory name color for a layer, alternating with depth.
pub fn layer_color(depth: usize) -> Color {
    if depth % 2 == 1 {
        Color::Cyan
    } else {
        Color::Magenta
    }
}
