//! Paragraph-boundary text chunker.
//!
//! Splits document content into pieces that respect an optional maximum
//! length. Splitting occurs on blank-line paragraph boundaries to preserve
//! semantic coherence within each piece; the limit is measured in characters
//! with cuts always landing on UTF-8 character boundaries.
//!
//! # Algorithm
//!
//! 1. With no limit configured, the whole trimmed document is one chunk.
//! 2. Otherwise split the text on `\n\n` paragraph boundaries.
//! 3. Accumulate paragraphs into a buffer until adding the next paragraph
//!    would exceed `max_chars`.
//! 4. When exceeded, flush the buffer as a chunk and start a new one.
//! 5. If a single paragraph exceeds `max_chars`, perform a hard split at
//!    the nearest newline or space boundary, falling back to a mid-word cut.
//!
//! # Guarantees
//!
//! - Non-blank input always yields at least one non-empty chunk.
//! - Blank input yields no chunks.
//! - Chunk order follows source order, so joining the chunks in sequence
//!   reproduces the document modulo boundary whitespace.

/// Split `text` into chunks of at most `max_chars` characters each.
///
/// `None` disables splitting: the whole trimmed document becomes a single
/// chunk, which is the right policy for short formatted records.
pub fn chunk_text(text: &str, max_chars: Option<usize>) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let max_chars = match max_chars {
        Some(n) => n.max(1),
        None => return vec![trimmed.to_string()],
    };

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for para in trimmed.split("\n\n") {
        let para = para.trim();
        if para.is_empty() {
            continue;
        }

        let para_chars = para.chars().count();
        let would_be = if current.is_empty() {
            para_chars
        } else {
            current_chars + 2 + para_chars
        };

        if would_be > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if para_chars > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            hard_split(para, max_chars, &mut chunks);
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
                current_chars += 2;
            }
            current.push_str(para);
            current_chars += para_chars;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Split an oversized paragraph, preferring the nearest newline or space
/// before the character limit and cutting mid-word only as a last resort.
fn hard_split(para: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut remaining = para;
    while !remaining.is_empty() {
        let limit = byte_index_for_chars(remaining, max_chars);
        if limit >= remaining.len() {
            let piece = remaining.trim();
            if !piece.is_empty() {
                chunks.push(piece.to_string());
            }
            break;
        }

        let cut = remaining[..limit]
            .rfind('\n')
            .or_else(|| remaining[..limit].rfind(' '))
            .map(|pos| pos + 1)
            .unwrap_or(limit);

        let piece = remaining[..cut].trim();
        if !piece.is_empty() {
            chunks.push(piece.to_string());
        }
        remaining = &remaining[cut..];
    }
}

/// Byte index of the `n`-th character, or the string's length if shorter.
fn byte_index_for_chars(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_text_single_chunk() {
        let chunks = chunk_text("Hello, world!", Some(700));
        assert_eq!(chunks, vec!["Hello, world!"]);
    }

    #[test]
    fn test_blank_text_yields_no_chunks() {
        assert!(chunk_text("", Some(700)).is_empty());
        assert!(chunk_text("   \n\n  ", Some(700)).is_empty());
        assert!(chunk_text("", None).is_empty());
    }

    #[test]
    fn test_no_limit_keeps_whole_document() {
        let text = "First paragraph.\n\nSecond paragraph.\n\nThird paragraph.";
        let chunks = chunk_text(text, None);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_multiple_paragraphs_under_limit() {
        let text = "First paragraph.\n\nSecond paragraph.\n\nThird paragraph.";
        let chunks = chunk_text(text, Some(700));
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("First paragraph."));
        assert!(chunks[0].contains("Third paragraph."));
    }

    #[test]
    fn test_multiple_paragraphs_exceed_limit() {
        let text = "This is paragraph one.\n\nThis is paragraph two.\n\nThis is paragraph three.";
        let chunks = chunk_text(text, Some(30));
        assert!(chunks.len() > 1);
        for c in &chunks {
            assert!(c.chars().count() <= 30, "Chunk too long: {:?}", c);
            assert!(!c.trim().is_empty());
        }
    }

    #[test]
    fn test_source_order_preserved() {
        let text = (0..20)
            .map(|i| format!("Paragraph number {}.", i))
            .collect::<Vec<_>>()
            .join("\n\n");
        let chunks = chunk_text(&text, Some(40));
        let rejoined = chunks.join("\n\n");
        for i in 0..20 {
            let marker = format!("Paragraph number {}.", i);
            assert!(rejoined.contains(&marker), "Missing {:?}", marker);
        }
        assert!(rejoined.find("number 0.").unwrap() < rejoined.find("number 19.").unwrap());
    }

    #[test]
    fn test_oversized_paragraph_hard_split() {
        let text = "word ".repeat(50);
        let chunks = chunk_text(&text, Some(20));
        assert!(chunks.len() > 1);
        for c in &chunks {
            assert!(c.chars().count() <= 20);
        }
    }

    #[test]
    fn test_multibyte_utf8_chars() {
        let text = "┌──────────────────┐\n│ Hello world      │\n└──────────────────┘";
        let chunks = chunk_text(text, Some(12));
        assert!(!chunks.is_empty());
        for c in &chunks {
            assert!(!c.is_empty());
            assert!(c.chars().count() <= 12);
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Alpha\n\nBeta\n\nGamma\n\nDelta";
        let c1 = chunk_text(text, Some(12));
        let c2 = chunk_text(text, Some(12));
        assert_eq!(c1, c2);
    }
}
