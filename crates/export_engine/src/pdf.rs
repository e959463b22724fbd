//! PDF painter: replays a finished layout plan into a printpdf document
//!
//! The plan's coordinates are points with Y growing downward from the
//! page top (text Y at the baseline); PDF space grows upward from the
//! bottom-left in millimeters, so both axes convert here and nowhere
//! else.

use crate::{DocumentPlan, DrawOp, ExportError, FetchedImage, Result};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfLayerReference, Px, Rgb,
};
use std::io::{BufWriter, Cursor};
use text_metrics::Font;

const PT_TO_MM: f32 = 25.4 / 72.0;

struct FontSet {
    helvetica: IndirectFontRef,
    helvetica_bold: IndirectFontRef,
    helvetica_oblique: IndirectFontRef,
    times_roman: IndirectFontRef,
    times_bold: IndirectFontRef,
    times_italic: IndirectFontRef,
}

impl FontSet {
    fn load(doc: &printpdf::PdfDocumentReference) -> Result<Self> {
        let builtin = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|err| ExportError::Pdf(err.to_string()))
        };
        Ok(Self {
            helvetica: builtin(BuiltinFont::Helvetica)?,
            helvetica_bold: builtin(BuiltinFont::HelveticaBold)?,
            helvetica_oblique: builtin(BuiltinFont::HelveticaOblique)?,
            times_roman: builtin(BuiltinFont::TimesRoman)?,
            times_bold: builtin(BuiltinFont::TimesBold)?,
            times_italic: builtin(BuiltinFont::TimesItalic)?,
        })
    }

    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.helvetica,
            Font::HelveticaBold => &self.helvetica_bold,
            Font::HelveticaOblique => &self.helvetica_oblique,
            Font::TimesRoman => &self.times_roman,
            Font::TimesBold => &self.times_bold,
            Font::TimesItalic => &self.times_italic,
        }
    }
}

/// Paint the plan into PDF bytes.
pub fn paint(plan: &DocumentPlan, title: &str) -> Result<Vec<u8>> {
    let page_w = Mm(plan.config.page_width * PT_TO_MM);
    let page_h = Mm(plan.config.page_height * PT_TO_MM);
    let page_height_pt = plan.config.page_height;

    let (doc, first_page, first_layer) = PdfDocument::new(title, page_w, page_h, "Conteúdo");
    let fonts = FontSet::load(&doc)?;

    let mut layers: Vec<PdfLayerReference> =
        vec![doc.get_page(first_page).get_layer(first_layer)];
    for _ in 1..plan.pages.len() {
        let (page, layer) = doc.add_page(page_w, page_h, "Conteúdo");
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for (page, layer) in plan.pages.iter().zip(layers.iter()) {
        for op in &page.ops {
            match op {
                DrawOp::Text {
                    x,
                    y,
                    content,
                    font,
                    size,
                    color,
                } => {
                    layer.set_fill_color(printpdf::Color::Rgb(Rgb::new(
                        color.r, color.g, color.b, None,
                    )));
                    layer.use_text(
                        content.clone(),
                        *size,
                        Mm(x * PT_TO_MM),
                        Mm((page_height_pt - y) * PT_TO_MM),
                        fonts.get(*font),
                    );
                }
                DrawOp::Image {
                    x,
                    y,
                    width,
                    height,
                    pixels,
                } => {
                    draw_image(layer, pixels, *x, *y, *width, *height, page_height_pt);
                }
            }
        }
    }

    let mut bytes = Vec::new();
    {
        let cursor = Cursor::new(&mut bytes);
        let mut writer = BufWriter::new(cursor);
        doc.save(&mut writer)
            .map_err(|err| ExportError::Pdf(err.to_string()))?;
    }
    Ok(bytes)
}

fn draw_image(
    layer: &PdfLayerReference,
    pixels: &FetchedImage,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    page_height_pt: f32,
) {
    let xobject = ImageXObject {
        width: Px(pixels.width_px as usize),
        height: Px(pixels.height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: pixels.pixels.clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    };
    let image = printpdf::Image::from(xobject);

    // 72 dpi makes 1px == 1pt, so the scale maps pixels to the planned
    // display size directly.
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x * PT_TO_MM)),
            translate_y: Some(Mm((page_height_pt - y - height) * PT_TO_MM)),
            scale_x: Some(width / pixels.width_px as f32),
            scale_y: Some(height / pixels.height_px as f32),
            dpi: Some(72.0),
            ..Default::default()
        },
    );
}
