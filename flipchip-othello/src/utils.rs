//! Text layout shared by the board renderers.

use crate::{EDGE_LENGTH, NUM_SPACES};
use itertools::Itertools;
use std::fmt::{self, Formatter};

const HEADER: &str = "   A B C D E F G H";

/// Lay out one symbol per cell as a grid, with column letters across the top and row numbers
/// down the side. Fails unless `symbols` yields exactly one symbol per cell, in index order.
pub fn format_grid<I: IntoIterator<Item = char>>(symbols: I, f: &mut Formatter) -> fmt::Result {
    let symbols: Vec<char> = symbols.into_iter().collect();
    if symbols.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    f.write_str(HEADER)?;
    for (row, line) in symbols.chunks(EDGE_LENGTH).enumerate() {
        write!(f, "\n {} {} ", row + 1, line.iter().join(" "))?;
    }
    Ok(())
}
