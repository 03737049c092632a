//! 数字字符串修饰
//!
//! 千分位逗号只作用于整数部分，小数部分与符号原样保留。

/// 从个位起每 `interval` 位插入一个逗号。interval 为 0 时原样返回
pub fn add_comma(digits: &str, interval: usize) -> String {
    if interval == 0 {
        return digits.to_string();
    }
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(unsigned.len() + unsigned.len() / interval);
    let chars: Vec<char> = integer.chars().collect();
    for (index, ch) in chars.iter().enumerate() {
        if index > 0 && (chars.len() - index) % interval == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// 去掉所有逗号
pub fn remove_comma(digits: &str) -> String {
    digits.chars().filter(|ch| *ch != ',').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_comma() {
        assert_eq!(add_comma("1234567", 3), "1,234,567");
        assert_eq!(add_comma("123", 3), "123");
        assert_eq!(add_comma("1234", 3), "1,234");
        assert_eq!(add_comma("1234567", 4), "123,4567");
    }

    #[test]
    fn test_add_comma_sign_and_fraction() {
        assert_eq!(add_comma("-1234567.890123", 3), "-1,234,567.890123");
        assert_eq!(add_comma("-123.45", 3), "-123.45");
        assert_eq!(add_comma("0.5", 3), "0.5");
    }

    #[test]
    fn test_add_comma_zero_interval() {
        assert_eq!(add_comma("1234567", 0), "1234567");
    }

    #[test]
    fn test_remove_comma() {
        assert_eq!(remove_comma("1,234,567.89"), "1234567.89");
        assert_eq!(remove_comma("12"), "12");
    }

    #[test]
    fn test_round_trip() {
        let original = "-9876543210.25";
        assert_eq!(remove_comma(&add_comma(original, 3)), original);
    }
}
