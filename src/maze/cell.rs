use std::fmt;

/// Classification of a single grid position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Wall,
    Path,
    Start,
    End,
}

impl CellKind {
    /// Glyph used by the textual grid form.
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Path => '.',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<CellKind> {
        match glyph {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::Path),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            _ => None,
        }
    }

    /// Anything but a wall can be stepped on.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
