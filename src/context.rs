//! Context assembly from ranked search hits.
//!
//! Assembly is pure formatting over an already-ordered sequence: no
//! deduplication, no re-ranking.

use crate::search::SearchHit;

/// Join hit contents into a single context block for the generation step.
///
/// Each chunk's content is trimmed and blank chunks are skipped; what
/// remains is joined in ranked order with `separator` (no leading or
/// trailing separator). Returns `None` when nothing remains, which callers
/// treat as "no relevant content".
pub fn assemble(hits: &[SearchHit], separator: &str) -> Option<String> {
    let parts: Vec<&str> = hits
        .iter()
        .map(|hit| hit.chunk.content.trim())
        .filter(|content| !content.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chunk;
    use std::sync::Arc;

    fn hit(content: &str, distance: f32) -> SearchHit {
        SearchHit {
            chunk: Arc::new(Chunk {
                document_id: "doc-1".into(),
                chunk_index: 0,
                content: content.to_string(),
                embedding: vec![0.0],
            }),
            distance,
        }
    }

    #[test]
    fn test_empty_hits_yield_none() {
        assert_eq!(assemble(&[], " | "), None);
    }

    #[test]
    fn test_blank_chunks_are_skipped() {
        let hits = vec![hit("   ", 0.1), hit("\n\n", 0.2)];
        assert_eq!(assemble(&hits, " | "), None);
    }

    #[test]
    fn test_joined_in_ranked_order_with_separator() {
        let hits = vec![hit("first", 0.1), hit("second", 0.2), hit("third", 0.3)];
        let context = assemble(&hits, "\n\n---\n\n").unwrap();
        assert_eq!(context, "first\n\n---\n\nsecond\n\n---\n\nthird");
        assert!(!context.starts_with("\n\n---\n\n"));
        assert!(!context.ends_with("\n\n---\n\n"));
    }

    #[test]
    fn test_contents_are_trimmed() {
        let hits = vec![hit("  padded  ", 0.1), hit("\ttabbed\n", 0.2)];
        assert_eq!(assemble(&hits, " | ").unwrap(), "padded | tabbed");
    }

    #[test]
    fn test_single_hit_has_no_separator() {
        let hits = vec![hit("only", 0.1)];
        assert_eq!(assemble(&hits, " | ").unwrap(), "only");
    }
}
