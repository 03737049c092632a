//! 符号流
//!
//! 构造时就把整个输入扫描成符号序列，第一个非法字符即报
//! `Undefined`，错误信息带字符和位置。

use tracing::debug;

use crate::error::{MathError, MathResult};
use crate::symbol::Symbol;

/// 可回放的符号流
#[derive(Debug, Clone)]
pub struct SymbolStream {
    symbols: Vec<Symbol>,
    cursor: usize,
}

impl SymbolStream {
    pub fn new(input: &str) -> MathResult<Self> {
        let mut symbols = Vec::with_capacity(input.len());
        for (position, ch) in input.chars().enumerate() {
            match Symbol::from_char(ch) {
                Some(symbol) => symbols.push(symbol),
                None => {
                    return Err(MathError::Undefined(format!(
                        "'{ch}' at position {position}"
                    )));
                }
            }
        }
        debug!(target: "ratlab::tokenizer", count = symbols.len(), "tokenized input");
        Ok(Self { symbols, cursor: 0 })
    }

    /// 取下一个符号并前进
    pub fn next_symbol(&mut self) -> Option<Symbol> {
        let symbol = self.symbols.get(self.cursor).copied();
        if symbol.is_some() {
            self.cursor += 1;
        }
        symbol
    }

    /// 看一眼下一个符号，不前进
    pub fn peek(&self) -> Option<Symbol> {
        self.symbols.get(self.cursor).copied()
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.symbols.len()
    }

    /// 回到流的开头
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Iterator for SymbolStream {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        self.next_symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_expression() {
        let stream = SymbolStream::new("1+2=").unwrap();
        let symbols: Vec<Symbol> = stream.collect();
        assert_eq!(
            symbols,
            vec![Symbol::One, Symbol::Add, Symbol::Two, Symbol::Equal]
        );
    }

    #[test]
    fn test_undefined_char_reports_position() {
        let err = SymbolStream::new("1@2=").unwrap_err();
        match err {
            MathError::Undefined(msg) => {
                assert!(msg.contains('@'));
                assert!(msg.contains("position 1"));
            }
            other => panic!("expected Undefined, got {other:?}"),
        }
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut stream = SymbolStream::new("42").unwrap();
        assert_eq!(stream.peek(), Some(Symbol::Four));
        assert_eq!(stream.peek(), Some(Symbol::Four));
        assert_eq!(stream.next_symbol(), Some(Symbol::Four));
        assert_eq!(stream.next_symbol(), Some(Symbol::Two));
        assert!(!stream.has_next());
        assert_eq!(stream.next_symbol(), None);
    }

    #[test]
    fn test_reset() {
        let mut stream = SymbolStream::new("7=").unwrap();
        stream.next_symbol();
        stream.next_symbol();
        assert!(!stream.has_next());
        stream.reset();
        assert_eq!(stream.next_symbol(), Some(Symbol::Seven));
    }

    #[test]
    fn test_empty_input() {
        let stream = SymbolStream::new("").unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.len(), 0);
    }
}
