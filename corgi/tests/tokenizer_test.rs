//! Integration tests for the Corgi tokenizer.

use corgi::options::ParserOptions;
use corgi::parser::tokens::token::Token;
use corgi::parser::tokens::tokenizer::LexicalError;
use corgi::TokenKind;
use speculate::speculate;

fn kinds(source: &str) -> Vec<TokenKind> {
    corgi::tokenize_all(source, &ParserOptions::default())
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn lexemes(source: &str) -> Vec<String> {
    corgi::tokenize_all(source, &ParserOptions::default())
        .unwrap()
        .into_iter()
        .map(|token| token.lexeme)
        .collect()
}

speculate! {
    describe "scanning a class" {
        const SOURCE: &'static str = "Foo {\n  var x = 5\n  var y = \"hi\"\n  print x\n}\n";

        it "produces tokens in source order" {
            use TokenKind::*;
            assert_eq!(
                kinds(SOURCE),
                vec![
                    Identifier, LeftBrace,
                    KwVar, Identifier, Assign, Number,
                    KwVar, Identifier, Assign, String,
                    KwPrint, Identifier,
                    RightBrace, Eof,
                ]
            );
        }

        it "keeps exact lexemes" {
            assert_eq!(
                lexemes(SOURCE),
                vec!["Foo", "{", "var", "x", "=", "5", "var", "y", "=", "\"hi\"", "print", "x", "}", ""]
            );
        }

        it "records offsets and lengths" {
            let tokens = corgi::tokenize_all(SOURCE, &ParserOptions::default()).unwrap();
            let quoted = &tokens[9];
            assert_eq!(quoted.offset(), SOURCE.find('"').unwrap());
            assert_eq!(quoted.len(), 4);
            assert_eq!(&SOURCE[quoted.span.start..quoted.span.end], "\"hi\"");

            let eof = tokens.last().unwrap();
            assert_eq!(eof.kind, TokenKind::Eof);
            assert_eq!(eof.offset(), SOURCE.len());
            assert_eq!(eof.len(), 0);
        }

        it "is deterministic across invocations" {
            let first: Vec<Token> = corgi::tokenize("B { print q }").map(Result::unwrap).collect();
            let second: Vec<Token> = corgi::tokenize("B { print q }").map(Result::unwrap).collect();
            assert_eq!(first, second);
        }
    }

    describe "reserved words" {
        it "are never identifiers" {
            use TokenKind::*;
            assert_eq!(
                kinds("boolean string char byte short int long float double void return if else var print"),
                vec![
                    KwBoolean, KwString, KwChar, KwByte, KwShort, KwInt, KwLong, KwFloat,
                    KwDouble, KwVoid, KwReturn, KwIf, KwElse, KwVar, KwPrint, Eof,
                ]
            );
        }

        it "are case sensitive" {
            assert_eq!(kinds("Var PRINT"), vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
        }

        it "only match whole words" {
            assert_eq!(
                kinds("variable printx if_"),
                vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
            );
        }
    }

    describe "punctuation and operators" {
        it "are recognized with longest match" {
            use TokenKind::*;
            assert_eq!(
                kinds("{ } ( ) , [ ] -> * / + - > < == != >= <= ="),
                vec![
                    LeftBrace, RightBrace, LeftParen, RightParen, Comma, LeftBracket,
                    RightBracket, Arrow, Star, Slash, Plus, Minus, Greater, Less, DoubleEquals,
                    NotEquals, GreaterEqual, LessEqual, Assign, Eof,
                ]
            );
        }

        it "do not need surrounding whitespace" {
            use TokenKind::*;
            assert_eq!(kinds("a<=b"), vec![Identifier, LessEqual, Identifier, Eof]);
            assert_eq!(kinds("x=5"), vec![Identifier, Assign, Number, Eof]);
        }
    }

    describe "numbers" {
        it "accept a leading minus" {
            assert_eq!(lexemes("-17"), vec!["-17", ""]);
            assert_eq!(kinds("-17"), vec![TokenKind::Number, TokenKind::Eof]);
        }

        it "accept dot-separated digit groups" {
            assert_eq!(lexemes("3.14 1.2.3"), vec!["3.14", "1.2.3", ""]);
            assert_eq!(kinds("1.2.3"), vec![TokenKind::Number, TokenKind::Eof]);
        }

        it "reject a second fraction in strict mode" {
            let tokens = corgi::tokenize_all("var x = 1.2.3", &ParserOptions::strict()).unwrap();
            assert_eq!(tokens[3].kind, TokenKind::QualifiedName);

            let error = corgi::tokenize_all("-1.2.3", &ParserOptions::strict()).unwrap_err();
            assert_eq!(error, LexicalError::UnrecognizedCharacter { character: '.', offset: 4 });
        }
    }

    describe "identifiers" {
        it "may contain digits and underscores anywhere" {
            assert_eq!(lexemes("_a 1b a_1"), vec!["_a", "1b", "a_1", ""]);
            assert_eq!(
                kinds("_a 1b a_1"),
                vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
            );
        }

        it "form qualified names when joined by dots" {
            assert_eq!(kinds("corgi.lang.Main"), vec![TokenKind::QualifiedName, TokenKind::Eof]);
        }
    }

    describe "strings" {
        it "keep quotes in the lexeme" {
            assert_eq!(lexemes("\"a b\\n\""), vec!["\"a b\\n\"", ""]);
        }

        it "fail when unterminated" {
            let error = corgi::tokenize_all("var x = \"abc", &ParserOptions::default()).unwrap_err();
            assert_eq!(
                error,
                LexicalError::UnterminatedString { lexeme: "\"abc".to_string(), offset: 8 }
            );
        }

        it "cannot span lines" {
            let error = corgi::tokenize_all("\"abc\ndef\"", &ParserOptions::default()).unwrap_err();
            assert_eq!(error, LexicalError::UnterminatedString { lexeme: "\"abc".to_string(), offset: 0 });
        }
    }

    describe "lexical errors" {
        it "report the offending character and offset" {
            let error = corgi::tokenize_all("A { @ }", &ParserOptions::default()).unwrap_err();
            assert_eq!(error, LexicalError::UnrecognizedCharacter { character: '@', offset: 4 });
            assert_eq!(error.offset(), 4);
        }

        it "stop the token sequence" {
            let results: Vec<_> = corgi::tokenize("a # b c").collect();
            assert_eq!(results.len(), 2);
            assert!(results[0].is_ok());
            assert!(results[1].is_err());
        }

        it "cover non-ASCII characters" {
            let error = corgi::tokenize_all("é", &ParserOptions::default()).unwrap_err();
            assert_eq!(error.span().len(), 2);
        }
    }

    describe "whitespace" {
        it "is never emitted" {
            assert_eq!(kinds(" \t\r\n"), vec![TokenKind::Eof]);
            assert_eq!(kinds(""), vec![TokenKind::Eof]);
        }
    }
}
