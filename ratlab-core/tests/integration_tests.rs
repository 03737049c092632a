//! 集成测试 - 端到端求值测试

use ratlab_core::{CalculatorState, Evaluator, Figure, Rational};

/// 辅助函数：求值表达式并返回精确结果
fn calculate(expression: &str) -> Result<Rational, String> {
    let mut evaluator = Evaluator::new();
    let output = evaluator.evaluate(expression);
    match output.state {
        CalculatorState::End => output
            .result
            .ok_or_else(|| "End state without result".to_string()),
        _ => Err(output.prompt_msg),
    }
}

fn rat(n: i64, d: i64) -> Rational {
    Rational::new(Figure::from(n), Figure::from(d)).unwrap()
}

#[test]
fn test_calculate_mixed_expression() {
    let result = calculate("2334.623*6345-234/1234+234*(254-45.242)=");
    assert_eq!(result, Ok(rat(9169873816419, 617000)));
}

#[test]
fn test_mixed_expression_approximation() {
    let result = calculate("2334.623*6345-234/1234+234*(254-45.242)=").unwrap();
    assert!((result.to_f64() - 14862032.117372772).abs() < 1e-6);
}

#[test]
fn test_decimal_literal_is_exact() {
    assert_eq!(calculate("4.6="), Ok(rat(23, 5)));
    // 二进制浮点无法精确表示的和
    assert_eq!(calculate("0.1+0.2="), Ok(rat(3, 10)));
}

#[test]
fn test_leading_dot_literal_is_reported() {
    let err = calculate(".5=").unwrap_err();
    assert!(err.contains("digit"), "unexpected message: {err}");
    assert!(calculate("-.5=").is_err());
    assert!(calculate("1+.5=").is_err());
}

#[test]
fn test_unary_minus() {
    assert_eq!(calculate("-4.6="), Ok(rat(-23, 5)));
    assert_eq!(calculate("-(2+3)="), Ok(Rational::from(-5)));
}

#[test]
fn test_result_is_reduced() {
    let result = calculate("4/6=").unwrap();
    assert_eq!(result.numerator(), &Figure::from(2));
    assert_eq!(result.denominator(), &Figure::from(3));
}

#[test]
fn test_large_intermediate_values() {
    // 中间值远超 i64，结果回落到小整数
    let result = calculate("(10000000000*10000000000*10000000000)/(10000000000*10000000000)=");
    assert_eq!(result, Ok(Rational::from(10000000000)));
}

#[test]
fn test_division_by_zero_is_reported() {
    let err = calculate("1/0=").unwrap_err();
    assert!(err.contains("divisor"), "unexpected message: {err}");
}

#[test]
fn test_unbalanced_brackets_are_reported() {
    assert!(calculate("(2+3))=").is_err());
    assert!(calculate("((2+3)=").is_err());
}

#[test]
fn test_undefined_symbol_is_reported() {
    let err = calculate("1@2=").unwrap_err();
    assert!(err.contains("Undefined"), "unexpected message: {err}");
}

#[test]
fn test_missing_terminator_is_reported() {
    let err = calculate("1+2").unwrap_err();
    assert!(err.contains("'='"), "unexpected message: {err}");
}

#[test]
fn test_evaluator_reuse_across_errors() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("1/0=").state, CalculatorState::Error);
    let output = evaluator.evaluate("3*7=");
    assert_eq!(output.state, CalculatorState::End);
    assert_eq!(output.result, Some(Rational::from(21)));
}
