//! Collage composition scripts.
//!
//! These are fixed, ordered sequences of transform calls. The offsets are
//! literal and were tuned against the input pictures' known sizes (tux is
//! 265 wide by 314 high) and against the `2 * point - col` reflection of
//! [`mirror_vertical_over_point`]. Reordering any step changes the output.
//!
//! # Penguin collage layout
//!
//! ```text
//! +---------+---------+--------+--------+---------+---------+
//! | tux     | negated | macbook ...    ... mirror of left half|
//! |         | mirror  |                 (top-right sepia)     |
//! +---------+---------+----- windows logo blended ------------+
//! | mirror of top half                                        |
//! | (bottom-left posterized)         (bottom-right blue only) |
//! +-----------------------------------------------------------+
//! ```

use log::info;

use crate::compose::{copy, copy_and_mix_colors};
use crate::config::CollageConfig;
use crate::filters::{keep_only_blue, negate, posterize, sepia, set_transparency, zero_blue};
use crate::io::{load_picture, save_picture, PictureError};
use crate::mirror::{mirror_horizontal_over_point, mirror_vertical, mirror_vertical_over_point};
use crate::{Picture, Region};

pub const CANVAS_HEIGHT: usize = 850;
pub const CANVAS_WIDTH: usize = 1680;

/// Width of the tux picture.
pub const TUX_WIDTH: usize = 265;
/// Height of the tux picture.
pub const TUX_HEIGHT: usize = 314;
/// Column tux is reflected across, one past its right edge.
pub const TUX_MIRROR_COL: usize = 266;

/// Half the side of the blended logo.
const LOGO_HALF_SIDE: usize = 113;

/// Number of bins for the bottom-left corner.
const POSTERIZE_BINS: u32 = 3;

const TOP_RIGHT: Region = Region::new(0, 1410, 304, 1679);
const BOTTOM_RIGHT: Region = Region::new(536, 1413, 850, 1674);
const BOTTOM_LEFT: Region = Region::new(537, 0, 850, 264);

/// Inputs of the penguin collage.
#[derive(Debug, Clone)]
pub struct CollageSources {
    pub tux: Picture,
    pub mac_book: Picture,
    pub windows_logo: Picture,
}

/// Assemble the penguin collage on a blank canvas.
pub fn compose_collage(sources: CollageSources) -> Picture {
    let CollageSources {
        tux,
        mut mac_book,
        windows_logo,
    } = sources;

    let mut canvas = Picture::new(CANVAS_HEIGHT, CANVAS_WIDTH);

    copy(&mut canvas, &tux, 0, 0);
    mirror_vertical_over_point(&mut canvas, TUX_MIRROR_COL);

    // the laptop goes right of tux and his reflection
    set_transparency(&mut mac_book, 255);
    copy(&mut canvas, &mac_book, 0, TUX_MIRROR_COL + TUX_WIDTH);
    negate(
        &mut canvas,
        Region::new(0, TUX_MIRROR_COL, TUX_HEIGHT, TUX_MIRROR_COL + TUX_WIDTH),
    );

    mirror_horizontal_over_point(&mut canvas, CANVAS_HEIGHT / 2);
    mirror_vertical_over_point(&mut canvas, CANVAS_WIDTH / 2 - 1);

    copy_and_mix_colors(
        &mut canvas,
        &windows_logo,
        CANVAS_HEIGHT / 2 - LOGO_HALF_SIDE,
        CANVAS_WIDTH / 2 - LOGO_HALF_SIDE,
    );

    sepia(&mut canvas, TOP_RIGHT);
    keep_only_blue(&mut canvas, BOTTOM_RIGHT);
    posterize(&mut canvas, BOTTOM_LEFT, POSTERIZE_BINS);

    canvas
}

/// Stack flower pictures down the left edge of `canvas` every 100 rows,
/// then mirror the left half onto the right.
///
/// The fourth slot gets a copy of `flower2` with its blue removed.
pub fn compose_flower_collage(canvas: &mut Picture, flower1: &Picture, flower2: &Picture) {
    let mut flower_no_blue = flower2.clone();
    zero_blue(&mut flower_no_blue);

    copy(canvas, flower1, 0, 0);
    copy(canvas, flower2, 100, 0);
    copy(canvas, flower1, 200, 0);
    copy(canvas, &flower_no_blue, 300, 0);
    copy(canvas, flower1, 400, 0);
    copy(canvas, flower2, 500, 0);
    mirror_vertical(canvas);
}

/// Show a picture.
///
/// There is no viewer here; the picture's description is logged instead.
pub fn explore(picture: &Picture) {
    info!("explore: {picture}");
}

/// Load the inputs named by `config`, build the penguin collage, show it
/// and save it.
///
/// Any I/O failure aborts the run.
pub fn run(config: &CollageConfig) -> Result<Picture, PictureError> {
    let sources = CollageSources {
        tux: load_picture(config.asset(&config.tux))?,
        mac_book: load_picture(config.asset(&config.mac_book))?,
        windows_logo: load_picture(config.asset(&config.windows_logo))?,
    };

    let canvas = compose_collage(sources);
    explore(&canvas);
    save_picture(&canvas, &config.output)?;
    Ok(canvas)
}
