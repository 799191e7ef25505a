#[cfg(test)]
mod expression {
    use crate::expression::{parse_chunks, Chunk, ChunkKind, Expression, ExpressionError};

    #[test]
    fn parameter_and_text() {
        let chunks = parse_chunks("$P{p 1} + 1").unwrap();
        assert_eq!(chunks, vec![Chunk::parameter("p 1"), Chunk::literal(" + 1")]);
    }

    #[test]
    fn adjacent_references() {
        let chunks = parse_chunks("$F{amount}$V{total}$R{greeting}").unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk::field("amount"),
                Chunk::variable("total"),
                Chunk::resource("greeting"),
            ]
        );
    }

    #[test]
    fn stray_dollars_stay_literal() {
        let chunks = parse_chunks("cost $ $P{x").unwrap();
        assert_eq!(chunks, vec![Chunk::literal("cost $ $P{x")]);

        let chunks = parse_chunks("\"$\" + $F{price}").unwrap();
        assert_eq!(chunks, vec![Chunk::literal("\"$\" + "), Chunk::field("price")]);
    }

    #[test]
    fn empty_text() {
        let expression = Expression::parse(3, "").unwrap();
        assert!(expression.is_empty());
        assert_eq!(expression.id, 3);
    }

    #[test]
    fn text_from_chunks() {
        let source = "new Integer($V{PAGE_NUMBER}.intValue() + $P{offset}) + $R{suffix}";
        let expression = Expression::parse(0, source).unwrap();
        assert_eq!(expression.chunks.len(), 6);
        assert_eq!(expression.text(), source);
    }

    #[test]
    fn missing_chunk_text_reads_empty() {
        let chunk = Chunk { kind: ChunkKind::Text, text: None };
        assert_eq!(chunk.text(), "");
    }

    #[test]
    fn source_must_be_text_or_chunks() {
        let both = r#"{"id": 4, "text": "1", "chunks": []}"#;
        let err = serde_json::from_str::<Expression>(both).unwrap_err();
        assert!(err.to_string().contains(&ExpressionError::AmbiguousSource(4).to_string()));

        let neither = r#"{"id": 5}"#;
        let err = serde_json::from_str::<Expression>(neither).unwrap_err();
        assert!(err.to_string().contains(&ExpressionError::MissingSource(5).to_string()));
    }

    #[test]
    fn chunks_from_json() {
        let json = r#"{"id": 7, "chunks": [{"kind": "variable", "text": "total"}, {"kind": "text"}]}"#;
        let expression: Expression = serde_json::from_str(json).unwrap();
        assert_eq!(expression.id, 7);
        assert_eq!(expression.chunks[0], Chunk::variable("total"));
        assert_eq!(expression.chunks[1].kind, ChunkKind::Text);
        assert_eq!(expression.chunks[1].text, None);
    }
}
