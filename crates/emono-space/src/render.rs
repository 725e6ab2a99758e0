//! ASCII debug rendering of the perimeter mapping.

use crate::perimeter::PerimeterMap;
use std::fmt;

/// Displays a [`PerimeterMap`] as a grid with each board index drawn in its
/// cell and `.` in the unused interior.
///
/// ```
/// use emono_space::{GridRender, PerimeterMap};
///
/// let map = PerimeterMap::for_board_size(4).unwrap();
/// let text = GridRender::new(&map).to_string();
/// assert!(text.contains("  0 |  2  3 |"));
/// assert!(text.contains("  1 |  1  0 |"));
/// ```
pub struct GridRender<'a> {
    map: &'a PerimeterMap,
}

impl<'a> GridRender<'a> {
    /// Wrap `map` for display.
    pub fn new(map: &'a PerimeterMap) -> Self {
        Self { map }
    }
}

impl fmt::Display for GridRender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.map.grid_side();
        let border = format!("    +{}+", "-".repeat(3 * side as usize + 1));

        write!(f, "     ")?;
        for col in 0..side {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        writeln!(f, "{border}")?;
        for row in 0..side {
            write!(f, "{row:>3} |")?;
            for col in 0..side {
                match self.map.index_at((row, col).into()) {
                    Some(index) => write!(f, "{index:>3}")?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "{border}")
    }
}
