//! 无界有符号整数
//!
//! 表示：符号位 + 低位在前的 u32 肢（limb）数组。
//! 不变量：肢数组无高位零肢；零的肢数组为空且符号恒为正。
//! 除法采用向零截断（truncating），余数与被除数同号。

use std::cmp::Ordering;
use std::fmt;

/// 无界有符号整数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    /// 是否为负数。零恒为 false
    negative: bool,
    /// 低位在前的肢数组，基数 2^32
    mag: Vec<u32>,
}

// ==================== 构造 ====================

impl BigInt {
    /// 零
    pub fn zero() -> Self {
        Self {
            negative: false,
            mag: Vec::new(),
        }
    }

    /// 一
    pub fn one() -> Self {
        Self {
            negative: false,
            mag: vec![1],
        }
    }

    pub fn from_i64(num: i64) -> Self {
        Self::from_magnitude(num.unsigned_abs() as u128, num < 0)
    }

    pub fn from_i128(num: i128) -> Self {
        Self::from_magnitude(num.unsigned_abs(), num < 0)
    }

    fn from_magnitude(mut magnitude: u128, negative: bool) -> Self {
        let mut mag = Vec::new();
        while magnitude > 0 {
            mag.push(magnitude as u32);
            magnitude >>= 32;
        }
        Self {
            negative: negative && !mag.is_empty(),
            mag,
        }
    }
}

// ==================== 判断与比较 ====================

impl BigInt {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.mag.is_empty()
    }

    /// 二进制位长。零的位长为 0
    pub fn bit_len(&self) -> usize {
        match self.mag.last() {
            Some(top) => self.mag.len() * 32 - top.leading_zeros() as usize,
            None => 0,
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => mag_cmp(&self.mag, &other.mag),
            (true, true) => mag_cmp(&other.mag, &self.mag),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ==================== 算术 ====================

impl BigInt {
    /// 相反数
    pub fn neg(&self) -> Self {
        Self {
            negative: !self.negative && !self.mag.is_empty(),
            mag: self.mag.clone(),
        }
    }

    /// 绝对值
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            mag: self.mag.clone(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            return Self {
                negative: self.negative,
                mag: mag_add(&self.mag, &other.mag),
            };
        }
        // 异号：大减小，符号取较大者
        match mag_cmp(&self.mag, &other.mag) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self {
                negative: self.negative,
                mag: mag_sub(&self.mag, &other.mag),
            },
            Ordering::Less => Self {
                negative: other.negative,
                mag: mag_sub(&other.mag, &self.mag),
            },
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self {
            negative: self.negative != other.negative,
            mag: mag_mul(&self.mag, &other.mag),
        }
    }

    /// 向零截断除法，返回（商，余数）。余数与被除数同号
    ///
    /// 除数为零是上层的约定违规，调用方必须先行检查
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "BigInt division by zero");
        let (q_mag, r_mag) = mag_div_rem(&self.mag, &divisor.mag);
        let quotient = Self {
            negative: (self.negative != divisor.negative) && !q_mag.is_empty(),
            mag: q_mag,
        };
        let remainder = Self {
            negative: self.negative && !r_mag.is_empty(),
            mag: r_mag,
        };
        (quotient, remainder)
    }

    /// 除以一个 i64，余数以 i64 返回（|余数| < |除数| 恒可容纳）
    pub fn div_rem_i64(&self, divisor: i64) -> (Self, i64) {
        let (quotient, remainder) = self.div_rem(&Self::from_i64(divisor));
        let low = *remainder.mag.first().unwrap_or(&0) as u64;
        let high = *remainder.mag.get(1).unwrap_or(&0) as u64;
        let magnitude = low | (high << 32);
        let value = if remainder.negative {
            -(magnitude as i64)
        } else {
            magnitude as i64
        };
        (quotient, value)
    }

    /// 最大公约数。结果恒非负；gcd(a, 0) = |a|；gcd(0, 0) = 0
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        a
    }

    /// 非负整数次乘方（快速幂）
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }
        result
    }
}

// ==================== 窄化 ====================

impl BigInt {
    /// 尝试转换为 i64。放不下时返回 None
    pub fn to_i64(&self) -> Option<i64> {
        if self.mag.len() > 2 {
            return None;
        }
        let low = *self.mag.first().unwrap_or(&0) as u64;
        let high = *self.mag.get(1).unwrap_or(&0) as u64;
        let magnitude = low | (high << 32);
        if self.negative {
            if magnitude <= 1u64 << 63 {
                Some((-(magnitude as i128)) as i64)
            } else {
                None
            }
        } else if magnitude <= i64::MAX as u64 {
            Some(magnitude as i64)
        } else {
            None
        }
    }
}

// ==================== 十进制渲染 ====================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        // 反复除以 10^9，得到低位在前的十进制块
        const CHUNK: u32 = 1_000_000_000;
        let mut chunks = Vec::new();
        let mut mag = self.mag.clone();
        while !mag.is_empty() {
            let (q, r) = mag_div_rem_small(&mag, CHUNK);
            chunks.push(r);
            mag = q;
        }
        if self.negative {
            write!(f, "-")?;
        }
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for chunk in iter {
            write!(f, "{chunk:09}")?;
        }
        Ok(())
    }
}

// ==================== 肢数组运算 ====================

/// 去除高位零肢
fn trim(mag: &mut Vec<u32>) {
    while mag.last() == Some(&0) {
        mag.pop();
    }
}

fn mag_cmp(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

fn mag_add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u64;
    for i in 0..a.len().max(b.len()) {
        let x = *a.get(i).unwrap_or(&0) as u64;
        let y = *b.get(i).unwrap_or(&0) as u64;
        let sum = x + y + carry;
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    out
}

/// 要求 a >= b
fn mag_sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let x = a[i] as i64;
        let y = *b.get(i).unwrap_or(&0) as i64;
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += 1i64 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    trim(&mut out);
    out
}

fn mag_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let cur = out[i + j] as u64 + x as u64 * y as u64 + carry;
            out[i + j] = cur as u32;
            carry = cur >> 32;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let cur = out[k] as u64 + carry;
            out[k] = cur as u32;
            carry = cur >> 32;
            k += 1;
        }
    }
    trim(&mut out);
    out
}

/// 二进制长除法。要求除数非零
fn mag_div_rem(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!b.is_empty());
    if mag_cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (q, r) = mag_div_rem_small(a, b[0]);
        let rem = if r == 0 { Vec::new() } else { vec![r] };
        return (q, rem);
    }

    let bits = match a.last() {
        Some(top) => a.len() * 32 - top.leading_zeros() as usize,
        None => 0,
    };
    let mut quot = vec![0u32; a.len()];
    let mut rem: Vec<u32> = Vec::new();
    for i in (0..bits).rev() {
        // rem = (rem << 1) | bit(a, i)
        shl1(&mut rem);
        if (a[i / 32] >> (i % 32)) & 1 == 1 {
            if rem.is_empty() {
                rem.push(1);
            } else {
                rem[0] |= 1;
            }
        }
        if mag_cmp(&rem, b) != Ordering::Less {
            rem = mag_sub(&rem, b);
            quot[i / 32] |= 1 << (i % 32);
        }
    }
    trim(&mut quot);
    trim(&mut rem);
    (quot, rem)
}

/// 单肢除法（也用于十进制渲染）
fn mag_div_rem_small(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let mut quot = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = (rem << 32) | a[i] as u64;
        quot[i] = (cur / d as u64) as u32;
        rem = cur % d as u64;
    }
    trim(&mut quot);
    (quot, rem as u32)
}

/// 左移一位
fn shl1(mag: &mut Vec<u32>) {
    let mut carry = 0u32;
    for limb in mag.iter_mut() {
        let new_carry = *limb >> 31;
        *limb = (*limb << 1) | carry;
        carry = new_carry;
    }
    if carry > 0 {
        mag.push(carry);
    }
}
