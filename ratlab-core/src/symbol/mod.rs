//! 符号与符号流
//!
//! 表达式先整体转换成符号序列，无法识别的字符在这一步就报错，
//! 不会流到求值阶段。

mod stream;

pub use stream::SymbolStream;

/// 表达式中允许出现的符号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Dot,
    Add,
    Subtract,
    Multiply,
    Divide,
    LeftBracket,
    RightBracket,
    Equal,
}

impl Symbol {
    /// 识别单个字符，无法识别时返回 None
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            '.' => Some(Self::Dot),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '(' => Some(Self::LeftBracket),
            ')' => Some(Self::RightBracket),
            '=' => Some(Self::Equal),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Dot => '.',
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::LeftBracket => '(',
            Self::RightBracket => ')',
            Self::Equal => '=',
        }
    }

    pub fn is_digit(self) -> bool {
        self.digit_value().is_some()
    }

    /// 数字符号的数值
    pub fn digit_value(self) -> Option<i64> {
        match self {
            Self::Zero => Some(0),
            Self::One => Some(1),
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for ch in "0123456789.+-*/()=".chars() {
            let symbol = Symbol::from_char(ch).unwrap();
            assert_eq!(symbol.to_char(), ch);
        }
    }

    #[test]
    fn test_unknown_char() {
        assert_eq!(Symbol::from_char('@'), None);
        assert_eq!(Symbol::from_char(' '), None);
        assert_eq!(Symbol::from_char('x'), None);
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(Symbol::Seven.digit_value(), Some(7));
        assert!(Symbol::Zero.is_digit());
        assert_eq!(Symbol::Dot.digit_value(), None);
        assert!(!Symbol::Equal.is_digit());
    }
}
