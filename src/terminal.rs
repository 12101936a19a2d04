/// Width assumed when the terminal does not report one.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Columns of the attached terminal, or [`DEFAULT_TERMINAL_WIDTH`].
pub fn terminal_width() -> usize {
    width_or_default(crossterm::terminal::size().ok().map(|(cols, _)| cols))
}

pub fn width_or_default(reported: Option<u16>) -> usize {
    match reported {
        Some(cols) if cols > 0 => cols as usize,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}
