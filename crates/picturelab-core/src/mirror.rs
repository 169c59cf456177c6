//! Mirror operations.
//!
//! Every mirror copies the color (red, green, blue) of a master pixel onto
//! its reflection; the reflected pixel keeps its own alpha. Nothing here
//! checks that reflections land inside the picture: a target outside the
//! grid panics.
//!
//! # Reflection formulas
//!
//! Two index formulas are in use and they are deliberately different:
//!
//! - [`mirror_vertical`] and [`mirror_horizontal_over_point`] reflect to the
//!   mirror-adjacent cell: `col -> width - 1 - col`,
//!   `row -> 2 * line - row - 1`.
//! - [`mirror_vertical_over_point`], [`mirror_arms`] and [`mirror_temple`]
//!   reflect to `2 * point - index`, one cell further out. The pixel at the
//!   mirror point itself is never written. The collage offsets are tuned
//!   against this, so it must not be "fixed".

use log::debug;

use crate::Picture;

/// Row band reflected by [`mirror_arms`].
pub const ARMS_START_ROW: usize = 162;
/// Mirror row for [`mirror_arms`]; also the end of its row band.
pub const ARMS_MIRROR_ROW: usize = 207;
/// Column band reflected by [`mirror_arms`], `[96, 298)`.
pub const ARMS_START_COL: usize = 96;
pub const ARMS_END_COL: usize = 298;

/// Row band reflected by [`mirror_temple`], `[27, 97)`.
pub const TEMPLE_START_ROW: usize = 27;
pub const TEMPLE_END_ROW: usize = 97;
/// First column reflected by [`mirror_temple`].
pub const TEMPLE_START_COL: usize = 13;
/// Mirror column for [`mirror_temple`]; also the end of its column band.
pub const TEMPLE_MIRROR_COL: usize = 276;

/// Mirror the left half onto the right half.
///
/// For an even width, applying this twice is the same as applying it once;
/// the left half is never written.
pub fn mirror_vertical(picture: &mut Picture) {
    debug!("mirror_vertical on {}x{}", picture.height(), picture.width());
    let width = picture.width();
    for row in 0..picture.height() {
        let cells = picture.row_mut(row);
        for col in 0..width / 2 {
            let color = cells[col];
            cells[width - 1 - col].set_color(color);
        }
    }
}

/// Mirror the right half onto the left half.
pub fn mirror_vertical_right_to_left(picture: &mut Picture) {
    debug!(
        "mirror_vertical_right_to_left on {}x{}",
        picture.height(),
        picture.width()
    );
    let width = picture.width();
    for row in 0..picture.height() {
        let cells = picture.row_mut(row);
        for col in 0..width / 2 {
            let color = cells[width - 1 - col];
            cells[col].set_color(color);
        }
    }
}

/// Reflect the rows above `mirror_line` downward across it.
///
/// Row `r` in `[0, mirror_line)` is copied to row `2 * mirror_line - r - 1`.
///
/// # Panics
///
/// Panics if `2 * mirror_line > height`.
pub fn mirror_horizontal_over_point(picture: &mut Picture, mirror_line: usize) {
    debug!("mirror_horizontal_over_point at row {mirror_line}");
    for row in 0..mirror_line {
        let target = 2 * mirror_line - row - 1;
        for col in 0..picture.width() {
            picture.copy_color((row, col), (target, col));
        }
    }
}

/// Reflect the columns left of `mirror_point` to the right of it.
///
/// Column `c` in `[0, mirror_point)` is copied to column
/// `2 * mirror_point - c`, on every row.
///
/// # Panics
///
/// Panics if `2 * mirror_point >= width` (and the picture has rows).
pub fn mirror_vertical_over_point(picture: &mut Picture, mirror_point: usize) {
    debug!("mirror_vertical_over_point at col {mirror_point}");
    for row in 0..picture.height() {
        let cells = picture.row_mut(row);
        for col in 0..mirror_point {
            let color = cells[col];
            cells[2 * mirror_point - col].set_color(color);
        }
    }
}

/// Reflect the snowman's arms (rows 162..207, columns 96..298) downward
/// across row 207.
///
/// # Panics
///
/// Panics on pictures smaller than 253 rows by 298 columns.
pub fn mirror_arms(picture: &mut Picture) {
    debug!("mirror_arms");
    for row in ARMS_START_ROW..ARMS_MIRROR_ROW {
        let target = 2 * ARMS_MIRROR_ROW - row;
        for col in ARMS_START_COL..ARMS_END_COL {
            picture.copy_color((row, col), (target, col));
        }
    }
}

/// Reflect part of the temple roof (rows 27..97, columns 13..276) across
/// column 276.
///
/// # Panics
///
/// Panics on pictures smaller than 97 rows by 540 columns.
pub fn mirror_temple(picture: &mut Picture) {
    debug!("mirror_temple");
    for row in TEMPLE_START_ROW..TEMPLE_END_ROW {
        let cells = picture.row_mut(row);
        for col in TEMPLE_START_COL..TEMPLE_MIRROR_COL {
            let color = cells[col];
            cells[2 * TEMPLE_MIRROR_COL - col].set_color(color);
        }
    }
}

/// Reflect across the main diagonal.
///
/// Works on the top-left square of side `min(height, width)`: every pixel
/// strictly below the diagonal is copied onto its transpose, so the lower
/// triangle is the master and the upper triangle is overwritten. Cells
/// outside the square are untouched.
///
/// The diagonal is not scaled by `height / width` on non-square pictures;
/// `(row, col)` always maps to `(col, row)`.
pub fn mirror_diagonal(picture: &mut Picture) {
    debug!("mirror_diagonal on {}x{}", picture.height(), picture.width());
    let side = picture.height().min(picture.width());
    for row in 0..side {
        for col in 0..row {
            picture.copy_color((row, col), (col, row));
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::Pixel;
    use proptest::prelude::*;

    fn picture_strategy(widths: impl Strategy<Value = usize>) -> impl Strategy<Value = Picture> {
        (1usize..=10, widths).prop_flat_map(|(height, width)| {
            prop::collection::vec(any::<(u8, u8, u8)>(), height * width).prop_map(move |cells| {
                let mut pic = Picture::new(height, width);
                for (slot, (r, g, b)) in pic.pixels_mut().iter_mut().zip(cells) {
                    *slot = Pixel::rgb(r, g, b);
                }
                pic
            })
        })
    }

    proptest! {
        /// Property: on even widths a second mirror changes nothing.
        #[test]
        fn prop_mirror_vertical_idempotent(pic in picture_strategy((1usize..=8).prop_map(|w| w * 2))) {
            let mut once = pic.clone();
            mirror_vertical(&mut once);
            let mut twice = once.clone();
            mirror_vertical(&mut twice);
            prop_assert_eq!(twice, once);
        }

        /// Property: after mirroring every row reads the same both ways.
        #[test]
        fn prop_mirror_vertical_symmetric(pic in picture_strategy(1usize..=15)) {
            let mut mirrored = pic.clone();
            mirror_vertical(&mut mirrored);
            for row in 0..mirrored.height() {
                let cells = mirrored.row(row);
                let reversed: Vec<Pixel> = cells.iter().rev().copied().collect();
                prop_assert_eq!(cells, reversed.as_slice());
            }
        }

        /// Property: the diagonal mirror leaves the square symmetric.
        #[test]
        fn prop_mirror_diagonal_symmetric(pic in picture_strategy(1usize..=10)) {
            let mut mirrored = pic.clone();
            mirror_diagonal(&mut mirrored);
            let side = mirrored.height().min(mirrored.width());
            for row in 0..side {
                for col in 0..side {
                    prop_assert_eq!(mirrored[(row, col)], mirrored[(col, row)]);
                }
            }
        }
    }
}
