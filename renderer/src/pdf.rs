use std::io::{BufWriter, Write};

use image::{DynamicImage, RgbaImage};
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};

use crate::RenderError;

// jsPDF-style px page: the document is sized so one image pixel maps onto one
// page pixel at 96 dpi.
const DPI: f32 = 96.0;
const MM_PER_INCH: f32 = 25.4;

fn px_to_mm(px: u32) -> Mm {
    Mm(px as f32 * MM_PER_INCH / DPI)
}

/// Embed the rendered page as a single full-page image in a landscape
/// document matching the page's pixel dimensions.
pub fn write_pdf<W: Write>(page: &RgbaImage, writer: W) -> Result<(), RenderError> {
    let (width, height) = page.dimensions();

    let (doc, page_index, layer_index) = PdfDocument::new(
        "Certificate",
        px_to_mm(width),
        px_to_mm(height),
        "certificate",
    );
    let layer = doc.get_page(page_index).get_layer(layer_index);

    let image = Image::from(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: DynamicImage::ImageRgba8(page.clone()).to_rgb8().into_raw(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    });

    image.add_to_layer(
        layer,
        ImageTransform {
            dpi: Some(DPI),
            ..Default::default()
        },
    );

    doc.save(&mut BufWriter::new(writer))
        .map_err(|e| RenderError::Pdf(e.to_string()))
}
