//! Fixed-canvas text placement. All coordinates are in pixels on the
//! 3627×2599 page, matching the template artwork.

pub const CANVAS_WIDTH: u32 = 3627;
pub const CANVAS_HEIGHT: u32 = 2599;

/// Vertical center line the name sits on.
pub const NAME_CENTER_Y: i32 = 1300;
pub const NAME_MAX_WIDTH_RATIO: f32 = 0.7;
pub const NAME_START_SIZE: f32 = 120.0;
pub const NAME_MIN_SIZE: f32 = 40.0;
pub const NAME_SIZE_STEP: f32 = 2.0;

pub const ID_SIZE: f32 = 36.0;
pub const ID_RIGHT_MARGIN: i32 = 200;
pub const ID_BOTTOM_MARGIN: i32 = 50;

/// Shrink-to-fit: start at [`NAME_START_SIZE`] and step down until the
/// measured width fits in `max_width` or the floor is reached. The width is
/// re-measured at every candidate size.
pub fn fit_font_size(max_width: f32, mut measure: impl FnMut(f32) -> f32) -> f32 {
    let mut size = NAME_START_SIZE;

    while measure(size) > max_width && size > NAME_MIN_SIZE {
        size -= NAME_SIZE_STEP;
    }

    size
}

pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i32 - text_width as i32) / 2
}

/// Top coordinate for text whose vertical middle should sit on `center_y`.
pub fn middle_y(center_y: i32, text_height: u32) -> i32 {
    center_y - text_height as i32 / 2
}

pub fn right_aligned_x(canvas_width: u32, right_margin: i32, text_width: u32) -> i32 {
    canvas_width as i32 - right_margin - text_width as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitting_text_keeps_start_size() {
        // Width proportional to size, already inside the budget at 120.
        let size = fit_font_size(1000.0, |size| size * 5.0);

        assert_eq!(size, NAME_START_SIZE);
    }

    #[test]
    fn test_wide_text_shrinks_until_it_fits() {
        // 20 px of width per size unit: fits exactly at size 50.
        let size = fit_font_size(1000.0, |size| size * 20.0);

        assert_eq!(size, 50.0);
    }

    #[test]
    fn test_floor_stops_the_loop() {
        let size = fit_font_size(10.0, |size| size * 100.0);

        assert_eq!(size, NAME_MIN_SIZE);
    }

    #[test]
    fn test_measure_called_per_step() {
        let mut calls = 0;
        fit_font_size(1000.0, |size| {
            calls += 1;
            size * 20.0
        });

        // 120 down to 50 inclusive, one measurement per candidate.
        assert_eq!(calls, 36);
    }

    #[test]
    fn test_positions() {
        assert_eq!(centered_x(3627, 627), 1500);
        assert_eq!(middle_y(1300, 100), 1250);
        assert_eq!(right_aligned_x(3627, 200, 427), 3000);
    }
}
