//! Asynchronous page sources.
#![cfg(feature = "async")]

use repaginate::{AsyncPageSource, BookParser, Error, PositionedToken, Result};

struct RemoteBook {
    pages: Vec<Vec<PositionedToken>>,
    fail_on: Option<u32>,
}

impl AsyncPageSource for RemoteBook {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn page_tokens(&self, page_number: u32) -> Result<Vec<PositionedToken>> {
        if self.fail_on == Some(page_number) {
            return Err(Error::extraction(page_number, "connection reset"));
        }
        tokio::task::yield_now().await;
        Ok(self.pages[page_number as usize - 1].clone())
    }
}

fn remote_book(fail_on: Option<u32>) -> RemoteBook {
    RemoteBook {
        pages: vec![
            vec![
                PositionedToken::new("Chapter 1", 72.0, 720.0),
                PositionedToken::new("The lamps were lit along the harbour wall.", 72.0, 680.0),
            ],
            vec![PositionedToken::new(
                "Ships came and went through the night.",
                72.0,
                720.0,
            )],
        ],
        fail_on,
    }
}

#[tokio::test]
async fn test_parse_async_source() {
    let book = BookParser::new()
        .parse_source_async(&remote_book(None))
        .await
        .unwrap();

    // No blank line after the heading, so it shares a paragraph with the text
    assert_eq!(book.paragraphs.len(), 2);
    assert_eq!(book.chapters.len(), 1);
    assert!(book.chapters[0].title.starts_with("Chapter 1 The lamps"));
    assert_eq!(book.total_pages, 1);
}

#[tokio::test]
async fn test_async_extraction_failure() {
    let result = BookParser::new()
        .parse_source_async(&remote_book(Some(2)))
        .await;
    assert!(matches!(result, Err(Error::Extraction { page: 2, .. })));
}
