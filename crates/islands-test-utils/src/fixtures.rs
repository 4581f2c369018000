//! Known-answer grids.
//!
//! Each fixture was counted by hand or cross-checked by all three solvers.

use islands_view::{View, ViewError};

use crate::grid_from_str;

/// A grid in text form plus its island count.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub islands: usize,
}

impl Fixture {
    /// Parse the rows into a fresh grid.
    pub fn grid(&self) -> Result<View<2>, ViewError> {
        grid_from_str(self.rows)
    }
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "single_clear_cell",
        rows: &["0"],
        islands: 0,
    },
    Fixture {
        name: "single_set_cell",
        rows: &["1"],
        islands: 1,
    },
    Fixture {
        name: "one_row",
        rows: &["1010"],
        islands: 2,
    },
    Fixture {
        name: "three_rows",
        rows: &["1010", "0111", "0010"],
        islands: 2,
    },
    Fixture {
        name: "tall_narrow",
        rows: &["1010", "0111", "0010", "1100", "0101"],
        islands: 4,
    },
    Fixture {
        name: "coalescing",
        rows: &["01010", "00111", "10010", "01100", "10101"],
        islands: 6,
    },
    Fixture {
        name: "coalescing_bridged",
        rows: &["01010", "00111", "10110", "01100", "10101"],
        islands: 5,
    },
    Fixture {
        name: "full_square",
        rows: &["11111", "11111", "11111", "11111", "11111"],
        islands: 1,
    },
    Fixture {
        name: "square_12_a",
        rows: &[
            "100111001101",
            "101110010011",
            "011101001111",
            "000111110101",
            "011001000111",
            "111101101011",
            "110000100110",
            "100000111110",
            "010000111101",
            "110010101001",
            "001001000011",
            "001001101100",
        ],
        islands: 12,
    },
    Fixture {
        name: "square_12_b",
        rows: &[
            "000111101101",
            "001011001001",
            "110011001100",
            "011110010100",
            "001110100011",
            "010111011111",
            "101100011011",
            "100111110110",
            "111111101010",
            "000111011011",
            "101100010101",
            "010110111001",
        ],
        islands: 11,
    },
    Fixture {
        name: "rect_17x16",
        rows: &[
            "1100011110001111",
            "1110000001000001",
            "1000011100011000",
            "1010010011101110",
            "1010001000101111",
            "0001001100100101",
            "1001110000101001",
            "1111110011000010",
            "0000011010110111",
            "0001110100100000",
            "0011000111111110",
            "1100100110001101",
            "0011011011101011",
            "1000101111101001",
            "1101111001001000",
            "1000010111001001",
            "0011011100111111",
        ],
        islands: 20,
    },
];

/// All known-answer grids, smallest first.
pub fn fixtures() -> &'static [Fixture] {
    FIXTURES
}
