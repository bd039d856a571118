use crate::domain::WorkpaperDraft;

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

const LEFT_MARGIN: f32 = 50.0;
const TOP_START: f32 = 50.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const BODY_FONT_SIZE: f32 = 10.0;
const BODY_LINE_HEIGHT: f32 = 12.0;
const PAGE_BREAK_Y: f32 = 780.0;
const WRAP_WIDTH: usize = 90;

/// One piece of text placed on a page. `y` is measured downward from the
/// top of the page, matching the cursor arithmetic below; the PDF writer
/// flips it into PDF coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// Lays out the three-section workpaper: control name, wrapped description,
/// wrapped testing procedure. Body lines break to a new page once the cursor
/// passes 780; section headers are placed wherever the cursor sits.
pub fn lay_out_workpaper(draft: &WorkpaperDraft) -> Vec<Page> {
    let mut cursor = Cursor::new();

    cursor.place(
        format!("Control Name: {}", draft.control_name),
        HEADER_FONT_SIZE,
    );
    cursor.y += 20.0;

    cursor.place("Control Description:".to_string(), HEADER_FONT_SIZE);
    cursor.y += 15.0;
    cursor.place_body(&draft.control_description);

    cursor.y += 20.0;
    cursor.place("Suggested Testing Procedures:".to_string(), HEADER_FONT_SIZE);
    cursor.y += 15.0;
    cursor.place_body(&draft.suggestion);

    cursor.pages
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: TOP_START,
        }
    }

    fn place(&mut self, text: String, font_size: f32) {
        // a page always exists; Cursor::new seeds the first one
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(TextLine {
                x: LEFT_MARGIN,
                y: self.y,
                font_size,
                text,
            });
        }
    }

    fn place_body(&mut self, text: &str) {
        for line in wrap_text(text, WRAP_WIDTH) {
            self.place(line, BODY_FONT_SIZE);
            self.y += BODY_LINE_HEIGHT;
            if self.y > PAGE_BREAK_Y {
                self.pages.push(Page::default());
                self.y = TOP_START;
            }
        }
    }
}

/// Greedy word wrap counting characters, not bytes. Words longer than the
/// width are split into width-sized chunks. Empty or whitespace-only text
/// yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        for chunk in split_into_chunks(word, width) {
            let chunk_len = chunk.chars().count();
            if current_len == 0 {
                current = chunk;
                current_len = chunk_len;
            } else if current_len + 1 + chunk_len <= width {
                current.push(' ');
                current.push_str(&chunk);
                current_len += 1 + chunk_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current = chunk;
                current_len = chunk_len;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

fn split_into_chunks(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
