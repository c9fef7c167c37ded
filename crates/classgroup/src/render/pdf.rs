use super::layout::{
    DOCUMENT_TITLE, Layout, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PlacedLine, Style,
};
use crate::{Error, Result};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

const LAYER: &str = "Layer 1";
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Horizontal padding between a line box and its text.
const TEXT_PADDING_MM: f32 = 1.0;
/// Advance width of [`DOCUMENT_TITLE`] in Helvetica-Bold, in em.
const TITLE_ADVANCE_EM: f32 = 12.503;
/// Header shading: RGB (240, 240, 240).
const SHADE: f32 = 240.0 / 255.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn for_style(&self, style: Style) -> &IndirectFontRef {
        if style.is_bold() {
            &self.bold
        } else {
            &self.regular
        }
    }
}

fn render_err<E: core::fmt::Debug>(err: E) -> Error {
    Error::Render(format!("{err:?}"))
}

fn gray(level: f32) -> Color {
    Color::Rgb(Rgb::new(level, level, level, None))
}

/// Converts a distance from the top edge into PDF's bottom-up coordinates.
fn from_top(mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - mm)
}

fn draw_line(layer: &PdfLayerReference, fonts: &Fonts, line: &PlacedLine) {
    let height = line.style.line_height_mm();
    let font_size = line.style.font_size_pt();
    let text_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

    if line.style.is_shaded() {
        layer.set_fill_color(gray(SHADE));
        let band = Rect::new(
            Mm(MARGIN_MM),
            from_top(line.bottom_mm()),
            Mm(MARGIN_MM + text_width),
            from_top(line.top_mm),
        )
        .with_mode(PaintMode::Fill);
        layer.add_rect(band);
    }
    layer.set_fill_color(gray(0.0));

    // Baseline sits slightly below the vertical centre of the line box.
    let baseline = line.top_mm + 0.5 * height + 0.3 * font_size * PT_TO_MM;
    let x = match line.style {
        Style::Title => {
            let advance = TITLE_ADVANCE_EM * font_size * PT_TO_MM;
            MARGIN_MM + (text_width - advance) / 2.0
        }
        Style::GroupHeader | Style::Member => MARGIN_MM + TEXT_PADDING_MM,
    };

    layer.use_text(
        line.text.as_str(),
        font_size,
        Mm(x),
        from_top(baseline),
        fonts.for_style(line.style),
    );
}

pub(super) fn write(layout: &Layout) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER,
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_err)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_err)?,
    };

    for (index, page) in layout.pages().iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER);
            doc.get_page(page).get_layer(layer)
        };
        for line in page.lines() {
            draw_line(&layer, &fonts, line);
        }
    }

    doc.save_to_bytes().map_err(render_err)
}
