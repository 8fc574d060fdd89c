use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Rgba, RgbaImage, imageops::FilterType};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::layout::{
    CANVAS_HEIGHT, CANVAS_WIDTH, ID_BOTTOM_MARGIN, ID_RIGHT_MARGIN, ID_SIZE, NAME_CENTER_Y,
    NAME_MAX_WIDTH_RATIO, centered_x, fit_font_size, middle_y, right_aligned_x,
};

const NAME_COLOR: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xff]);
const ID_COLOR: Rgba<u8> = Rgba([0xf7, 0xf2, 0xec, 0xff]);

/// Draw the template at full canvas resolution, then overlay the uppercased
/// name (centered, shrink-to-fit) and the id line (bottom right).
pub fn compose(
    template: &DynamicImage,
    name_font: &FontVec,
    id_font: &FontVec,
    name: &str,
    certificate_id: &str,
) -> RgbaImage {
    let mut canvas = template
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle)
        .to_rgba8();

    let name = name.trim().to_uppercase();
    let max_width = CANVAS_WIDTH as f32 * NAME_MAX_WIDTH_RATIO;

    let size = fit_font_size(max_width, |size| {
        text_size(PxScale::from(size), name_font, &name).0 as f32
    });

    let scale = PxScale::from(size);
    let (name_width, name_height) = text_size(scale, name_font, &name);
    draw_text_mut(
        &mut canvas,
        NAME_COLOR,
        centered_x(CANVAS_WIDTH, name_width),
        middle_y(NAME_CENTER_Y, name_height),
        scale,
        name_font,
        &name,
    );

    let id_line = format!("ID: {certificate_id}");
    let id_scale = PxScale::from(ID_SIZE);
    let (id_width, id_height) = text_size(id_scale, id_font, &id_line);
    draw_text_mut(
        &mut canvas,
        ID_COLOR,
        right_aligned_x(CANVAS_WIDTH, ID_RIGHT_MARGIN, id_width),
        middle_y(CANVAS_HEIGHT as i32 - ID_BOTTOM_MARGIN, id_height),
        id_scale,
        id_font,
        &id_line,
    );

    canvas
}
