//! Page composition: fit a source image inside a fixed page and center it
//!
//! Both functions are pure. The geometry lives in [`fit_placement`] so it can
//! be checked without touching pixels; [`compose`] applies it.

use crate::page::Page;
use crate::types::*;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Compute the scaled size and centered offset of a `src_width`x`src_height`
/// image on a `page_width`x`page_height` page.
///
/// The image is width-limited when it is relatively wider than the page and
/// height-limited otherwise. Odd leftover space is split with integer floor
/// division, so the image may sit one pixel closer to the top-left edge.
pub fn fit_placement(
    src_width: u32,
    src_height: u32,
    page_width: u32,
    page_height: u32,
) -> Result<Placement> {
    if src_width == 0 || src_height == 0 {
        return Err(PageError::InvalidImage {
            width: src_width,
            height: src_height,
        });
    }
    if page_width == 0 || page_height == 0 {
        return Err(PageError::InvalidDimensions {
            width: page_width,
            height: page_height,
        });
    }

    let (sw, sh) = (src_width as u64, src_height as u64);
    let (pw, ph) = (page_width as u64, page_height as u64);

    // sw/sh > pw/ph, compared exactly
    let (width, height) = if sw * ph > pw * sh {
        let height = fitted_side(pw as f64 * sh as f64 / sw as f64, page_height);
        (page_width, height)
    } else {
        let width = fitted_side(ph as f64 * sw as f64 / sh as f64, page_width);
        (width, page_height)
    };

    Ok(Placement {
        x: (page_width - width) / 2,
        y: (page_height - height) / 2,
        width,
        height,
    })
}

fn fitted_side(exact: f64, limit: u32) -> u32 {
    (exact.round_ties_even() as u32).clamp(1, limit)
}

/// Scale `image` to fit a `page_width`x`page_height` canvas filled with
/// `background` and paste it centered.
///
/// The paste is an opaque overwrite: any alpha channel is dropped first.
pub fn compose(
    image: &DynamicImage,
    page_width: u32,
    page_height: u32,
    background: Background,
) -> Result<Page> {
    let placement = fit_placement(image.width(), image.height(), page_width, page_height)?;

    let source = image.to_rgb8();
    let resized = if source.dimensions() == (placement.width, placement.height) {
        source
    } else {
        imageops::resize(
            &source,
            placement.width,
            placement.height,
            FilterType::Lanczos3,
        )
    };

    let mut canvas = RgbImage::from_pixel(page_width, page_height, background.to_pixel());
    imageops::replace(
        &mut canvas,
        &resized,
        placement.x as i64,
        placement.y as i64,
    );

    Ok(Page::new(canvas, placement))
}
