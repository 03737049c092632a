//! 操作数上的纯运算
//!
//! 全部为自由函数：取两个值，返回新值，不修改入参。
//! 有失败语义的运算返回 `MathResult`，其余直接返回值。

pub mod figure;
pub mod rational;
