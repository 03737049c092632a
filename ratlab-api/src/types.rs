//! API 类型定义
//!
//! 求值的输出类型。

use ratlab_core::Rational;

/// 求值输出
#[derive(Debug, Clone)]
pub struct EvaluateOutput {
    /// 精确结果（最简有理数）
    pub result: Rational,
    /// 按配置渲染的 f64 近似值
    pub approx: String,
    /// 已被接受的符号串
    pub process: String,
}
