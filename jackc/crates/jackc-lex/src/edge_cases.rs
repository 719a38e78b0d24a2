//! Edge case and property tests for jackc-lex

#[cfg(test)]
mod tests {
    use crate::normalize::fragments;
    use crate::{LexError, Span, Token, TokenKind, TokenStream, TokenValue, TokenizerOptions};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token> {
        TokenStream::new(source).unwrap().into_tokens()
    }

    /// Rebuilds each line by placing every token's raw text at its column.
    fn rebuild(tokens: &[Token]) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut last_line = 0;
        for token in tokens {
            let span = token.span();
            if span.line != last_line {
                lines.push(String::new());
                last_line = span.line;
            }
            if let Some(line) = lines.last_mut() {
                while (line.len() as u32) + 1 < span.column {
                    line.push(' ');
                }
                line.push_str(token.raw());
            }
        }
        lines
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("   \n\t  \n  ").is_empty());
    }

    #[test]
    fn test_edge_crlf_lines() {
        let tokens = lex_all("let x = 1;\r\nlet y = 2;\r\n");
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[5].span(), Span::new(2, 1, 3));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("let {} = 1;", name));
        assert_eq!(tokens[1].value(), &TokenValue::Identifier(name));
    }

    #[test]
    fn test_edge_empty_string() {
        let tokens = lex_all("\"\"");
        assert_eq!(tokens[0].value(), &TokenValue::StringConstant(String::new()));
    }

    #[test]
    fn test_edge_string_with_only_spaces() {
        let tokens = lex_all("\"   \"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value(), &TokenValue::StringConstant("   ".into()));
    }

    #[test]
    fn test_edge_all_symbols_packed() {
        let tokens = lex_all("{}()[].,;+-*/&|<>=~");
        assert_eq!(tokens.len(), 19);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Symbol));
    }

    #[test]
    fn test_edge_division_before_comment() {
        let tokens = lex_all("let q = a / b; // quotient");
        let raws: Vec<&str> = tokens.iter().map(Token::raw).collect();
        assert_eq!(raws, ["let", "q", "=", "a", "/", "b", ";"]);
    }

    #[test]
    fn test_edge_comment_directly_after_code() {
        let raws: Vec<String> = lex_all("return x;//done")
            .iter()
            .map(|t| t.raw().to_string())
            .collect();
        assert_eq!(raws, ["return", "x", ";"]);
    }

    #[test]
    fn test_edge_integer_boundaries() {
        assert_eq!(lex_all("0")[0].value(), &TokenValue::IntegerConstant(0));
        assert_eq!(lex_all("32767")[0].value(), &TokenValue::IntegerConstant(32767));
        assert!(matches!(
            TokenStream::new("32768"),
            Err(LexError::IntegerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_edge_unterminated_string_fails_whole_unit() {
        let result = TokenStream::new("let a = 1;\nlet s = \"open;\nlet b = 2;");
        assert_eq!(
            result.map(|s| s.len()),
            Err(LexError::UnterminatedString {
                span: Span::new(2, 9, 6)
            })
        );
    }

    #[test]
    fn test_edge_string_cannot_span_lines() {
        assert!(matches!(
            TokenStream::new("\"first\nsecond\""),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_edge_identifier_looks_like_keyword_prefix() {
        let tokens = lex_all("classes returned iffy");
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_rebuild_matches_stripped_source() {
        let source = "class Main {   // entry\n    function void main() {\n\tdo Output.printString(\"a // b\");\n  }\n}";
        let tokens = lex_all(source);
        let expected: Vec<String> = source
            .lines()
            .map(|line| {
                let code = line.split("// entry").next().unwrap_or(line);
                code.trim_end().replace('\t', " ")
            })
            .collect();
        assert_eq!(rebuild(&tokens), expected);
    }

    // ==================== PROPERTIES ====================

    fn word() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
            "[0-9]{1,4}",
            "\"[a-zA-Z0-9 ,;/.+()*-]{0,16}\"",
            proptest::sample::select(crate::SYMBOLS.to_vec()).prop_map(String::from),
        ]
    }

    proptest! {
        #[test]
        fn prop_advance_true_exactly_len_times(words in prop::collection::vec(word(), 0..40)) {
            let source = words.join(" ");
            let mut stream = TokenStream::new(&source).unwrap();
            let len = stream.len();
            let mut count = 0;
            while stream.advance() {
                count += 1;
            }
            prop_assert_eq!(count, len);
            prop_assert!(!stream.advance());
            prop_assert!(!stream.advance());
        }

        #[test]
        fn prop_raw_texts_join_back_to_source(words in prop::collection::vec(word(), 1..40)) {
            let source = words.join(" ");
            let tokens = lex_all(&source);
            let rebuilt: Vec<&str> = tokens.iter().map(Token::raw).collect();
            prop_assert_eq!(rebuilt.join(" "), source);
        }

        #[test]
        fn prop_rebuild_from_spans(lines in prop::collection::vec(prop::collection::vec(word(), 1..8), 1..8)) {
            let source: Vec<String> = lines.iter().map(|l| l.join("  ")).collect();
            let tokens = lex_all(&source.join("\n"));
            prop_assert_eq!(rebuild(&tokens), source);
        }

        #[test]
        fn prop_string_contents_are_opaque(content in "[^\"\\r\\n]{0,60}") {
            let source = format!("\"{}\"", content);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].value(), &TokenValue::StringConstant(content));
        }

        #[test]
        fn prop_integer_range_policy(n in 0u32..200_000) {
            let result = TokenStream::new(&n.to_string());
            if n <= 32767 {
                let tokens = result.unwrap().into_tokens();
                prop_assert_eq!(tokens[0].value(), &TokenValue::IntegerConstant(n as i16));
            } else {
                let is_range_error = matches!(result, Err(LexError::IntegerOutOfRange { .. }));
                prop_assert!(is_range_error);
            }
        }

        #[test]
        fn prop_every_word_classifies(text in "[^\\s\"]{1,20}") {
            let value = crate::classify::classify_value(
                &text,
                Span::new(1, 1, text.len() as u32),
                &TokenizerOptions::default(),
            );
            match value {
                Ok(_) => {},
                Err(LexError::IntegerOutOfRange { .. }) => {
                    prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
                },
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }

        #[test]
        fn prop_line_comments_produce_nothing(comment in "[^\\r\\n]{0,60}") {
            let source = format!("// {}", comment);
            prop_assert_eq!(fragments(source.lines()).count(), 0);
        }
    }
}
