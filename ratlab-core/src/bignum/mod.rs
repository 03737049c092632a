//! 自研无界整数表示
//!
//! 计算核心不借助任何第三方大数库，所有大数运算都落在本模块的
//! [`BigInt`] 上。`Figure` 的小整数快路径溢出后会提升到这里。

mod unbounded;

pub use unbounded::BigInt;
