//! Hardcoded block layout for the walking level.
//!
//! Each string is one row along +X; each character one cell along +Z. `0` is empty, any
//! other digit is a block whose value picks its palette entry. Blocks are cubes of edge
//! [`BLOCK_SIZE`] with centres at
//! `((row - rows / 2) * BLOCK_SIZE, BLOCK_CENTER_Y, (col - cols / 2) * BLOCK_SIZE)`.

use shared::Vec3;

pub const BLOCK_SIZE: f32 = 6.0;
pub const BLOCK_CENTER_Y: f32 = -2.0;

#[rustfmt::skip]
pub const LAYOUT: &[&str] = &[
    "78879789789778978789878978897897",
    "80000000000000000000000000000008",
    "80000000000000000000000000000009",
    "90000000000000000000000000000008",
    "70000000000000000000000000000007",
    "80000000000000000000000000000007",
    "80000000000000000000000000000009",
    "70000000000000000000000000000009",
    "90000000000000000000000000000009",
    "90000000000000000000000000000008",
    "80000000000000000000000000000008",
    "90000000000000000000000000000008",
    "70000000000000000000000000000007",
    "90000000000000000000000000000009",
    "80000000000000000000000000000008",
    "80000000000000000000000000000009",
    "70000000000000000000000000000009",
    "80000000000000000000000000000009",
    "90000000000000000000000000000008",
    "90000000000000000000000000000008",
    "80000000000000000000000000000007",
    "70000000000000000000000000000007",
    "70000000000000000000000000000007",
    "70000000000000000000000000000008",
    "80000000000000000000000000000009",
    "90000000000000000000000000000008",
    "70000000000000000000000000000007",
    "80000000000000000000000000000007",
    "80000000000000000000000000000008",
    "90000000000000000000000000000009",
    "90000000000000000000000000000008",
    "97878978988888300388889979787878",
    "00000000080000000000009000000000",
    "00000000080001000010009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000080000000000009000000000",
    "00000000089999999999999000000000",
];

/// A filled layout cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockCell {
    pub row: usize,
    pub col: usize,
    pub kind: u8,
}

/// Iterate the non-empty cells of `layout` in row-major order.
///
/// Characters that are not digits are treated as empty.
pub fn block_cells<'a>(layout: &'a [&'a str]) -> impl Iterator<Item = BlockCell> + 'a {
    layout.iter().enumerate().flat_map(|(row, line)| {
        line.chars().enumerate().filter_map(move |(col, c)| {
            let kind = c.to_digit(10)? as u8;
            (kind > 0).then_some(BlockCell { row, col, kind })
        })
    })
}

/// World-space centre of a cell.
///
/// `row_len` is the length of the cell's own row, so ragged layouts stay centred per row.
pub fn cell_center(cell: &BlockCell, rows: usize, row_len: usize) -> Vec3 {
    Vec3::new(
        (cell.row as f32 - rows as f32 / 2.0) * BLOCK_SIZE,
        BLOCK_CENTER_Y,
        (cell.col as f32 - row_len as f32 / 2.0) * BLOCK_SIZE,
    )
}

/// Centres and kinds of every block in `layout`.
pub fn block_centers(layout: &[&str]) -> Vec<(Vec3, u8)> {
    block_cells(layout)
        .map(|cell| {
            let row_len = layout[cell.row].chars().count();
            (cell_center(&cell, layout.len(), row_len), cell.kind)
        })
        .collect()
}
