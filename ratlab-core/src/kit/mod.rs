//! 零散工具

pub mod digit_string;
