use fieldwork::domain::WorkpaperDraft;
use fieldwork::infrastructure::export::layout::{lay_out_workpaper, wrap_text};

fn draft(name: &str, description: &str, suggestion: &str) -> WorkpaperDraft {
    WorkpaperDraft {
        control_name: name.to_string(),
        control_description: description.to_string(),
        suggestion: suggestion.to_string(),
    }
}

#[test]
fn given_300_char_word_when_wrapped_at_90_then_yields_4_chunked_lines() {
    let lines = wrap_text(&"a".repeat(300), 90);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].chars().count(), 90);
    assert_eq!(lines[1].chars().count(), 90);
    assert_eq!(lines[2].chars().count(), 90);
    assert_eq!(lines[3].chars().count(), 30);
}

#[test]
fn given_words_when_wrapped_then_fills_greedily_on_whitespace() {
    let lines = wrap_text("alpha beta gamma", 11);

    assert_eq!(lines, vec!["alpha beta".to_string(), "gamma".to_string()]);
}

#[test]
fn given_empty_text_when_wrapped_then_yields_no_lines() {
    assert!(wrap_text("", 90).is_empty());
    assert!(wrap_text("   \n  ", 90).is_empty());
}

#[test]
fn given_short_draft_when_laid_out_then_sections_sit_at_fixed_offsets() {
    let pages = lay_out_workpaper(&draft(
        "AP-01",
        &"d".repeat(300),
        "Recalculate the sample.",
    ));

    assert_eq!(pages.len(), 1);
    let lines = &pages[0].lines;

    assert_eq!(lines[0].text, "Control Name: AP-01");
    assert_eq!(lines[0].y, 50.0);
    assert_eq!(lines[0].font_size, 12.0);

    assert_eq!(lines[1].text, "Control Description:");
    assert_eq!(lines[1].y, 70.0);

    // 300-char description wraps to 4 body lines at 12-unit spacing
    assert_eq!(lines[2].y, 85.0);
    assert_eq!(lines[2].font_size, 10.0);
    assert_eq!(lines[3].y, 97.0);
    assert_eq!(lines[4].y, 109.0);
    assert_eq!(lines[5].y, 121.0);

    // cursor lands at 133 after the body, then 20 + 15 around the header
    assert_eq!(lines[6].text, "Suggested Testing Procedures:");
    assert_eq!(lines[6].y, 153.0);
    assert_eq!(lines[7].text, "Recalculate the sample.");
    assert_eq!(lines[7].y, 168.0);

    for line in lines {
        assert_eq!(line.x, 50.0);
    }
}

#[test]
fn given_long_description_when_laid_out_then_breaks_page_past_780() {
    // 59 words of exactly 90 chars: one body line each, so the description
    // fills the first page (lines at y = 85..769) and spills one line over
    let description = vec!["a".repeat(90); 59].join(" ");
    let pages = lay_out_workpaper(&draft("AP-02", &description, "Inspect."));

    assert_eq!(pages.len(), 2);

    // page 1: name, description header, then 58 body lines
    assert_eq!(pages[0].lines.len(), 60);
    assert_eq!(pages[0].lines[2].y, 85.0);
    assert_eq!(pages[0].lines.last().unwrap().y, 769.0);

    // page 2: the 59th body line restarts at the top margin
    assert_eq!(pages[1].lines[0].y, 50.0);
    assert_eq!(pages[1].lines[0].font_size, 10.0);

    // the procedure section continues below it on the same page
    assert_eq!(pages[1].lines[1].text, "Suggested Testing Procedures:");
    assert_eq!(pages[1].lines[1].y, 82.0);
    assert_eq!(pages[1].lines[2].text, "Inspect.");
    assert_eq!(pages[1].lines[2].y, 97.0);
}

#[test]
fn given_empty_bodies_when_laid_out_then_only_headers_are_placed() {
    let pages = lay_out_workpaper(&draft("AP-03", "", ""));

    assert_eq!(pages.len(), 1);
    let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Control Name: AP-03",
            "Control Description:",
            "Suggested Testing Procedures:",
        ]
    );
}
