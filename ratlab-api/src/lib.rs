//! Ratlab API - 求值编排层
//!
//! 提供统一的求值入口，包括：
//! - 求值流程编排
//! - 配置抽象（RunConfig）
//! - 统一错误处理（ApiError）
//!
//! 为 CLI 方便提供了全局单例 API。
//! 作为库使用时，优先用显式的 `evaluate_with_config(expression, &config)`。

use tracing::info;

use ratlab_core::{Evaluator, StepEvent};

// Re-export config
pub mod config;
pub use config::{
    config as get_config, config_or_default, init as init_config, is_initialized, RunConfig,
};

// Re-export config types from ratlab_config
pub use ratlab_config::{OutputConfig, Phase};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ApiError, ErrorReport, MathError};
pub use types::EvaluateOutput;

// Re-export core types
pub use ratlab_core;
pub use ratlab_core::{CalculationOutput, CalculatorState, Rational};

/// Evaluate with explicit configuration
///
/// This is the recommended API for library users.
pub fn evaluate_with_config(
    expression: &str,
    config: &RunConfig,
) -> Result<EvaluateOutput, ApiError> {
    info!(target: "ratlab::api", "starting evaluation");

    let mut evaluator = Evaluator::new();
    let output = evaluator.evaluate(expression);

    match output.result {
        Some(result) => {
            info!(target: "ratlab::api", "evaluation completed");
            Ok(EvaluateOutput {
                approx: result.to_f64_string(&config.output),
                result,
                process: output.process,
            })
        }
        None => {
            let fault = evaluator
                .events()
                .iter()
                .rev()
                .find_map(|event| match event {
                    StepEvent::Faulted(err) => Some(err.clone()),
                    _ => None,
                })
                .unwrap_or_else(|| {
                    MathError::Unknown("evaluation failed without a fault event".to_string())
                });
            Err(ApiError::Math(fault))
        }
    }
}

// ==================== Legacy API (using global config) ====================

/// Evaluate an expression (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn evaluate(expression: &str) -> Result<EvaluateOutput, ApiError> {
    let config = get_config();
    evaluate_with_config(expression, config)
}

/// Quick evaluate with default config (auto-initializes if needed)
pub fn quick_evaluate(expression: &str) -> Result<EvaluateOutput, ApiError> {
    let config = config_or_default();
    evaluate_with_config(expression, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_with_explicit_config() {
        let config = RunConfig::default();
        let output = evaluate_with_config("1/3+1/6=", &config).unwrap();
        assert_eq!(output.result.to_plain_string(), "1/2");
        assert_eq!(output.process, "1/3+1/6=");
        assert_eq!(output.approx, "0.500000");
    }

    #[test]
    fn test_evaluate_error_becomes_report() {
        let config = RunConfig::default();
        let err = evaluate_with_config("1/0=", &config).unwrap_err();
        let report = err.to_report();
        assert_eq!(report.phase, "evaluator");
        assert_eq!(report.error_kind, "syntax");
        assert!(report.message.contains("divisor"));
    }

    #[test]
    fn test_tokenizer_fault_phase() {
        let config = RunConfig::default();
        let err = evaluate_with_config("1@2=", &config).unwrap_err();
        assert_eq!(err.phase(), "tokenizer");
    }

    #[test]
    fn test_quick_evaluate() {
        let output = quick_evaluate("2+2=").unwrap();
        assert_eq!(output.result, Rational::from(4));
    }

    #[test]
    fn test_approx_respects_output_config() {
        let config = RunConfig {
            show_steps: false,
            output: OutputConfig {
                precision: 2,
                comma_interval: Some(3),
            },
        };
        let output = evaluate_with_config("1000*1234=", &config).unwrap();
        assert_eq!(output.approx, "1,234,000.00");
    }
}
