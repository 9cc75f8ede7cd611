//! End-to-end behaviour on small hand-built documents.

use repaginate::layout::{PaginationOptions, Paginator};
use repaginate::parser::{ArtifactDetector, ArtifactOptions, LineAssembler, LineOptions};
use repaginate::render::strip_markers;
use repaginate::{
    parse_pages, parse_text, HeadingClassifier, Paragraph, ParsedBook, PositionedToken,
};

fn token(text: &str, x: f32, y: f32) -> PositionedToken {
    PositionedToken::new(text, x, y)
}

fn body(len: usize) -> String {
    let mut text = "and so the story went on ".repeat(len / 25 + 1);
    text.truncate(len - 1);
    text.push('.');
    text
}

#[test]
fn test_page_number_footers_removed() {
    let pages = vec![
        vec![
            token("The morning light crept across the valley floor.", 72.0, 700.0),
            token("- 12 -", 290.0, 40.0),
        ],
        vec![
            token("Nobody in the village had seen the stranger arrive.", 72.0, 700.0),
            token("- 13 -", 290.0, 40.0),
        ],
    ];

    let assembler = LineAssembler::new(LineOptions::default());
    let raw: Vec<_> = pages
        .iter()
        .enumerate()
        .map(|(i, tokens)| assembler.assemble_page(i as u32 + 1, tokens))
        .collect();
    let artifacts = ArtifactDetector::new(ArtifactOptions::default()).detect(&raw);
    assert!(artifacts.contains("- 12 -"));
    assert!(artifacts.contains("- 13 -"));

    let book = parse_pages(&pages).unwrap();
    assert!(!book.content.contains("- 12 -"));
    assert!(!book.content.contains("- 13 -"));
    assert_eq!(book.paragraphs.len(), 2);
    assert_eq!(book.total_pages, 1);
}

#[test]
fn test_oversized_paragraph_isolated() {
    let before: Vec<String> = (0..5).map(|_| body(300)).collect();
    let after: Vec<String> = (0..5).map(|_| body(300)).collect();
    let oversized = body(3000);

    let mut text = before.join("\n\n");
    text.push_str("\n\n");
    text.push_str(&oversized);
    text.push_str("\n\n");
    text.push_str(&after.join("\n\n"));

    let book = parse_text(&text).unwrap();
    let pages = book.pages().unwrap();

    // 5 x 300 = 1508 chars with separators, under max: one page each side
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].text, before.join("\n\n"));
    assert_eq!(pages[1].text, oversized);
    assert_eq!(pages[2].text, after.join("\n\n"));
}

#[test]
fn test_oversized_paragraph_keeps_neighbour_boundaries() {
    let paginator = Paginator::new(PaginationOptions::default(), HeadingClassifier::default());
    let before: Vec<Paragraph> = (0..12).map(|_| Paragraph::new(body(400))).collect();

    let alone = paginator.paginate(&before);
    let mut with_oversized = before.clone();
    with_oversized.push(Paragraph::new(body(3000)));
    let combined = paginator.paginate(&with_oversized);

    assert_eq!(combined.pages[..alone.pages.len()], alone.pages[..]);
    assert_eq!(combined.pages.len(), alone.pages.len() + 1);
    assert_eq!(combined.pages.last().unwrap().char_len(), 3000);
}

#[test]
fn test_chapter_heading_in_plain_text() {
    let book = parse_text("Chapter 1\n\nHello world.").unwrap();

    assert_eq!(book.chapters.len(), 1);
    assert_eq!(book.chapters[0].title, "Chapter 1");
    assert_eq!(book.chapters[0].page, 1);
    assert_eq!(book.total_pages, 1);
}

#[test]
fn test_hyphenated_word_rejoined() {
    let pages = vec![vec![
        token("The old sailor spoke of a word-", 72.0, 700.0),
        token("continued tale that never ended.", 72.0, 686.0),
    ]];

    let book = parse_pages(&pages).unwrap();
    assert_eq!(
        book.paragraphs[0].text(),
        "The old sailor spoke of a wordcontinued tale that never ended."
    );
    assert!(!book.content.contains("word-"));
}

#[test]
fn test_running_header_removed_from_long_book() {
    let pages: Vec<Vec<PositionedToken>> = (1..=12)
        .map(|n| {
            vec![
                token("A Tale of Two Valleys", 200.0, 760.0),
                token(&format!("Source page {} tells its own part of the story.", n), 72.0, 700.0),
                token(&n.to_string(), 300.0, 40.0),
            ]
        })
        .collect();

    let book = parse_pages(&pages).unwrap();
    assert_eq!(book.paragraphs.len(), 12);
    assert!(!book.content.contains("A Tale of Two Valleys"));
    assert!(book.chapters.is_empty());
}

#[test]
fn test_running_footer_removed() {
    let pages: Vec<Vec<PositionedToken>> = (1..=9)
        .map(|n| {
            vec![
                token(&format!("Source page {} carries its own narrative line.", n), 72.0, 700.0),
                token("Copyright Acme Press", 250.0, 40.0),
            ]
        })
        .collect();

    let book = parse_pages(&pages).unwrap();
    assert!(!book.content.contains("Copyright Acme Press"));
    assert_eq!(book.paragraphs.len(), 9);
    assert!(book.chapters.is_empty());
}

#[test]
fn test_blank_document() {
    let book = parse_pages(&[vec![], vec![token("   ", 0.0, 0.0)]]).unwrap();
    assert!(book.is_empty());
    assert_eq!(book.content, "");

    let book = parse_text("\n\n   \n").unwrap();
    assert!(book.is_empty());
}

fn assert_content_matches_paragraphs(book: &ParsedBook) {
    let pages = book.pages().unwrap();
    assert_eq!(pages.len(), book.total_pages);

    let laid_out: Vec<&str> = pages.iter().flat_map(|p| p.paragraphs()).collect();
    let expected: Vec<&str> = book.paragraphs.iter().map(Paragraph::text).collect();
    assert_eq!(laid_out, expected);

    let reader_pages: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(strip_markers(&book.content), reader_pages);
}

#[test]
fn test_marker_literals_in_plain_text() {
    let book = parse_text(
        "A paragraph that quotes <<LUMINA_PAGE_BREAK>> in its body text.\n\n\
         The footnote read <<PAGE:7>> exactly as printed in the book.",
    )
    .unwrap();

    assert_eq!(book.total_pages, 1);
    assert_eq!(
        book.paragraphs[0].text(),
        "A paragraph that quotes in its body text."
    );
    assert_eq!(
        book.paragraphs[1].text(),
        "The footnote read exactly as printed in the book."
    );
    assert_content_matches_paragraphs(&book);
}

#[test]
fn test_marker_literals_in_tokens() {
    let pages = vec![
        vec![
            token("Chapter 1 <<PAGE:2>>", 72.0, 720.0),
            token("", 72.0, 700.0),
            token("The printer left a stray <<LUMINA_PAGE_BREAK>>", 72.0, 660.0),
            token("marker inside this sentence.", 72.0, 646.0),
        ],
        vec![token(
            "<<LUMINA_PAGE_BREAK>> Another page opens with one more.",
            72.0,
            720.0,
        )],
    ];

    let book = parse_pages(&pages).unwrap();
    assert!(!book.paragraphs.iter().any(|p| p.text().contains("<<")));
    assert_eq!(book.chapters.len(), 1);
    assert_content_matches_paragraphs(&book);
}
