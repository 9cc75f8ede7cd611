//! Loading books from text files on disk.

use std::io::Write;

use repaginate::{parse_text_file, BookParser, Error, ParseOptions};
use tempfile::NamedTempFile;

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_text_file() {
    let file = write_temp(
        "Chapter 1\r\n\r\nIt was the best of times, it was the worst of times.\r\n\r\n\
         Chapter 2\r\n\r\nThe second chapter opens on a quiet street.\r\n"
            .as_bytes(),
    );

    let book = parse_text_file(file.path()).unwrap();
    assert_eq!(book.total_pages, 2);
    assert_eq!(book.chapters.len(), 2);
    assert_eq!(book.chapters[1].title, "Chapter 2");
    assert_eq!(book.chapters[1].page, 2);
}

#[test]
fn test_parse_hebrew_text_file() {
    let file = write_temp("פרק א\n\nזהו משפט ארוך מספיק כדי להיחשב פסקה של ממש.\n".as_bytes());

    let book = parse_text_file(file.path()).unwrap();
    assert_eq!(book.chapters.len(), 1);
    assert_eq!(book.chapters[0].title, "פרק א");
    assert_eq!(book.paragraphs.len(), 2);
}

#[test]
fn test_byte_order_mark_stripped() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"Chapter 7\n\nA paragraph of ordinary prose follows.");
    let file = write_temp(&bytes);

    let book = parse_text_file(file.path()).unwrap();
    assert_eq!(book.chapters[0].title, "Chapter 7");
}

#[test]
fn test_invalid_utf8_rejected() {
    let file = write_temp(&[0x66, 0x6f, 0x80, 0x6f]);
    assert!(matches!(
        parse_text_file(file.path()),
        Err(Error::Encoding(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = BookParser::with_options(ParseOptions::new().sequential())
        .parse_text_file(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}
