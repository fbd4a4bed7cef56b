//! Surface sizing: fit the picture's aspect ratio into the container.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::geom::Size;

/// Largest size with the image's aspect ratio that fits inside `container`.
///
/// The width is whole pixels, the height follows from it, so the height may
/// be fractional. An image with no area yields a zero size.
#[must_use]
pub fn fit_aspect(image: Size, container: Size) -> Size {
    if !image.is_drawable() {
        return Size::default();
    }
    let w = container.w.min((container.h / image.h * image.w).floor()).max(0.0);
    Size::new(w, w / image.w * image.h)
}
