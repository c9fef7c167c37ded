use crate::{GroupSet, to_latin1_lossy};

/// Title printed at the top of the first page.
pub const DOCUMENT_TITLE: &str = "Class Group Assignments";

/// A4 width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left, right and top margin.
pub const MARGIN_MM: f32 = 10.0;
/// A line whose bottom would pass this offset from the top starts a new page.
pub const PAGE_BREAK_MM: f32 = PAGE_HEIGHT_MM - 20.0;

const TITLE_GAP_MM: f32 = 10.0;
const GROUP_GAP_MM: f32 = 5.0;

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Centered, bold, 16 pt.
    Title,
    /// Bold, 12 pt, on a light grey band across the text width.
    GroupHeader,
    /// Regular, 11 pt.
    Member,
}

impl Style {
    pub const fn font_size_pt(self) -> f32 {
        match self {
            Style::Title => 16.0,
            Style::GroupHeader => 12.0,
            Style::Member => 11.0,
        }
    }

    pub const fn line_height_mm(self) -> f32 {
        match self {
            Style::Title | Style::GroupHeader => 10.0,
            Style::Member => 8.0,
        }
    }

    pub const fn is_bold(self) -> bool {
        matches!(self, Style::Title | Style::GroupHeader)
    }

    pub const fn is_shaded(self) -> bool {
        matches!(self, Style::GroupHeader)
    }
}

/// One line of text at a fixed position on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: Style,
    /// Distance from the top edge of the page to the top of the line box.
    pub top_mm: f32,
}

impl PlacedLine {
    pub fn bottom_mm(&self) -> f32 {
        self.top_mm + self.style.line_height_mm()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    lines: Vec<PlacedLine>,
}

impl Page {
    pub fn lines(&self) -> &[PlacedLine] {
        &self.lines
    }
}

/// The document as a sequence of pages, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pages: Vec<Page>,
}

impl Layout {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Every line in reading order, across pages.
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }
}

/// Text of the header line introducing the `index`th (1-based) group.
///
/// The noun is always "members", including for single-member groups.
pub fn group_header(index: usize, count: usize) -> String {
    format!("Group {index} ({count} members)")
}

/// Text of a member line.
pub fn member_line(name: &str) -> String {
    format!("  - {}", to_latin1_lossy(name))
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN_MM,
        }
    }

    fn push(&mut self, text: String, style: Style) {
        if self.y + style.line_height_mm() > PAGE_BREAK_MM {
            self.pages.push(Page::default());
            self.y = MARGIN_MM;
        }
        let top_mm = self.y;
        self.y += style.line_height_mm();

        // `pages` always holds at least the first page.
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                style,
                top_mm,
            });
        }
    }

    /// Vertical gap; never starts a page on its own.
    fn skip(&mut self, mm: f32) {
        self.y += mm;
    }
}

/// Flows `groups` onto pages.
///
/// The first page opens with [`DOCUMENT_TITLE`]. Each group contributes a
/// [`group_header`] line followed by one [`member_line`] per member, then a
/// small gap. A page break happens before any line that would cross
/// [`PAGE_BREAK_MM`], so a header may end up alone at the bottom of a page.
pub fn layout(groups: &GroupSet) -> Layout {
    let mut cursor = Cursor::new();

    cursor.push(DOCUMENT_TITLE.to_owned(), Style::Title);
    cursor.skip(TITLE_GAP_MM);

    for (index, group) in groups.iter().enumerate() {
        cursor.push(group_header(index + 1, group.len()), Style::GroupHeader);
        for name in group {
            cursor.push(member_line(name), Style::Member);
        }
        cursor.skip(GROUP_GAP_MM);
    }

    Layout {
        pages: cursor.pages,
    }
}
