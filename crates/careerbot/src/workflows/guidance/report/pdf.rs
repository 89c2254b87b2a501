use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::{ReportDocument, ReportError};

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 50.0;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";
const OBLIQUE: &str = "F3";

/// Renders the report as a single A4 page.
pub fn render_pdf(report: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let mut page = PageWriter::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    page.centered(BOLD, 18.0, y, &report.title);
    y -= 28.0;
    page.centered(REGULAR, 14.0, y, &report.subtitle);
    y -= 32.0;
    page.rule(y);
    y -= 28.0;

    for section in &report.sections {
        page.text(BOLD, 12.0, MARGIN, y, section.heading);
        y -= 18.0;
        for bullet in &section.bullets {
            page.text(REGULAR, 11.0, MARGIN + 14.0, y, &format!("\u{2022} {bullet}"));
            y -= 14.0;
        }
    }

    y -= 10.0;
    page.rule(y);
    y -= 18.0;
    page.text(OBLIQUE, 11.0, MARGIN, y, &report.closing);

    page.finish()
}

struct PageWriter {
    operations: Vec<Operation>,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn centered(&mut self, font: &str, size: f32, y: f32, text: &str) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.text(font, size, x.max(MARGIN), y, text);
    }

    fn rule(&mut self, y: f32) {
        self.operations.extend([
            Operation::new("m", vec![MARGIN.into(), y.into()]),
            Operation::new("l", vec![(PAGE_WIDTH - MARGIN).into(), y.into()]),
            Operation::new("S", vec![]),
        ]);
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font = |base: &str| {
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => Object::Name(base.as_bytes().to_vec()),
                "Encoding" => "WinAnsiEncoding",
            }
        };
        let regular_id = doc.add_object(font("Helvetica"));
        let bold_id = doc.add_object(font("Helvetica-Bold"));
        let oblique_id = doc.add_object(font("Helvetica-Oblique"));

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR => regular_id,
                BOLD => bold_id,
                OBLIQUE => oblique_id,
            },
        });

        let content = Content {
            operations: self.operations,
        };
        let encoded = content
            .encode()
            .map_err(|err| ReportError::Render(err.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|err| ReportError::Render(err.to_string()))?;
        Ok(bytes)
    }
}

/// Maps text onto the WinAnsi code page used by the standard Type1 fonts.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85,
            ch if (ch as u32) < 0x80 => ch as u8,
            ch if (0xA0..=0xFF).contains(&(ch as u32)) => ch as u8,
            _ => b'?',
        })
        .collect()
}

/// Helvetica advance widths (1/1000 em) for printable ASCII.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556,
    556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722,
    722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722,
    667, 944, 667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556,
    556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500,
    500, 334, 260, 334, 584,
];

fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|ch| match ch as u32 {
            code @ 32..=126 => u32::from(HELVETICA_WIDTHS[(code - 32) as usize]),
            _ => 556,
        })
        .sum();
    units as f32 * size / 1000.0
}
