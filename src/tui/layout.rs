/// Width breakpoints for the authenticated screen.
///
/// Single source of truth for width thresholds; render code asks for a
/// breakpoint instead of comparing raw column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols: sidebar and segments stacked above the content
    Compact,
    /// 80-119 cols: three columns, narrow sidebar
    Normal,
    /// 120+ cols: three columns, roomy sidebar
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Whether the panes sit side by side
    pub fn is_columns(&self) -> bool {
        *self >= Breakpoint::Normal
    }

    /// Sidebar and segment list widths in columns
    pub fn nav_widths(&self) -> (u16, u16) {
        match self {
            Breakpoint::Compact => (0, 0),
            Breakpoint::Normal => (26, 18),
            Breakpoint::Wide => (34, 22),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(79), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(119), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(120), Breakpoint::Wide);
    }

    #[test]
    fn only_compact_stacks() {
        assert!(!Breakpoint::Compact.is_columns());
        assert!(Breakpoint::Normal.is_columns());
        assert!(Breakpoint::Wide.nav_widths().0 > Breakpoint::Normal.nav_widths().0);
    }
}
