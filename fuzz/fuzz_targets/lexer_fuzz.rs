//! Fuzz test for the schedule phrase lexer
//!
//! Feeds arbitrary UTF-8 to the lexer looking for panics, non-terminating
//! scans, and spans that do not tile the input.
//!
//! Run with: cargo +nightly fuzz run lexer_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use shield_timespec::lexer::{Lexer, TokenKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let tokens = Lexer::new(input).tokenize();

        let Some(last) = tokens.last() else {
            panic!("Tokenization should produce at least Eof");
        };
        assert_eq!(last.kind, TokenKind::Eof, "Last token should always be Eof");
        assert_eq!(last.span.end, input.len(), "Eof should sit at the end of input");

        let mut previous_end = 0;
        for token in &tokens {
            assert!(token.span.start <= token.span.end, "Span start should be <= end");
            assert!(token.span.start >= previous_end, "Spans should not overlap");
            assert!(input.is_char_boundary(token.span.start));
            assert!(input.is_char_boundary(token.span.end));
            if token.kind != TokenKind::Eof {
                assert!(token.span.end > token.span.start, "Only Eof may be empty");
            }
            previous_end = token.span.end;
        }
    }
});
