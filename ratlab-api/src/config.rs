//! API 层配置
//!
//! 包含求值配置 RunConfig 和全局单例（供 CLI 使用）

use once_cell::sync::OnceCell;
use ratlab_config::OutputConfig;

/// 求值配置
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// 是否随结果一并输出求值过程
    pub show_steps: bool,
    /// 近似值的显示配置
    pub output: OutputConfig,
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Get global config, initializing with defaults if nobody has yet
pub fn config_or_default() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert!(!cfg.show_steps);
        assert_eq!(cfg.output.precision, 6);
        assert_eq!(cfg.output.comma_interval, None);
    }

    #[test]
    fn test_run_config_clone() {
        let cfg = RunConfig {
            show_steps: true,
            output: OutputConfig {
                precision: 2,
                comma_interval: Some(3),
            },
        };
        let cloned = cfg.clone();
        assert_eq!(cfg.show_steps, cloned.show_steps);
        assert_eq!(cfg.output.precision, cloned.output.precision);
    }

    #[test]
    fn test_global_config_or_default() {
        // 注意：全局状态，full test suite 里可能已被其他测试初始化
        let cfg = config_or_default();
        assert!(is_initialized());
        assert!(!cfg.show_steps);
    }
}
