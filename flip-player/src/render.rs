//! Text rendering of a [`Snapshot`]. Pure: builds strings, never prints.

use flip_othello::{Cell, Player, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Characters used to draw each cell state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Glyphs {
    pub empty: char,
    pub black: char,
    pub white: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: '.',
            black: 'B',
            white: 'W',
        }
    }
}

impl Glyphs {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Black => self.black,
            Cell::White => self.white,
        }
    }

    pub fn player(&self, player: Player) -> char {
        self.glyph(player.into())
    }
}

/// A [`Snapshot`] paired with the glyphs to draw it in.
///
/// ```text
/// 0 1 2 3 4 5 6 7 8
/// 1 . . . . . . . .
/// ...
/// OTHELLO: Player B, please play your move - as r, c
/// ```
pub struct BoardView<'a> {
    snapshot: &'a Snapshot,
    glyphs: &'a Glyphs,
}

impl<'a> BoardView<'a> {
    pub fn new(snapshot: &'a Snapshot, glyphs: &'a Glyphs) -> Self {
        Self { snapshot, glyphs }
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0")?;
        for label in Snapshot::COL_LABELS {
            write!(f, " {}", label)?;
        }

        for (label, row) in self.snapshot.rows() {
            write!(f, "\n{}", label)?;
            for &cell in row {
                write!(f, " {}", self.glyphs.glyph(cell))?;
            }
        }

        write!(
            f,
            "\nOTHELLO: Player {}, please play your move - as r, c",
            self.glyphs.player(self.snapshot.active)
        )
    }
}

/// Render `snapshot` to a string.
pub fn render(snapshot: &Snapshot, glyphs: &Glyphs) -> String {
    BoardView::new(snapshot, glyphs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flip_othello::Board;

    #[test]
    fn renders_starting_board() {
        let text = render(&Board::new().snapshot(), &Glyphs::default());
        let expected = "\
0 1 2 3 4 5 6 7 8
1 . . . . . . . .
2 . . . . . . . .
3 . . . . . . . .
4 . . . W B . . .
5 . . . B W . . .
6 . . . . . . . .
7 . . . . . . . .
8 . . . . . . . .
OTHELLO: Player B, please play your move - as r, c";
        assert_eq!(text, expected);
    }

    #[test]
    fn custom_glyphs() {
        let glyphs = Glyphs {
            empty: '-',
            black: 'x',
            white: 'o',
        };
        let snapshot = Board::with_first_player(Player::White).snapshot();
        let text = render(&snapshot, &glyphs);

        assert!(text.contains("\n4 - - - o x - - -\n"));
        assert!(text.ends_with("Player o, please play your move - as r, c"));
    }
}
