//! 求值器
//!
//! 双栈算法：操作数栈与运算符栈。数字和小数点先攒进字面量缓冲，
//! 遇到运算符、括号或 `=` 时整体交给 `Decimal` 解析。一元负号作为
//! 最高优先级的运算符入栈，操作数完成后立即结算。
//!
//! 求值器可以复用：每次 `evaluate` 都从 `Init` 重新开始，
//! 上一次的出错状态不会传染。

use tracing::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::expr::state::{CalculationOutput, CalculatorState, StepEvent};
use crate::operand::{Decimal, Rational};
use crate::operation::rational as rational_op;
use crate::symbol::{Symbol, SymbolStream};

// ==================== 运算符 ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    LeftBracket,
}

impl OpKind {
    fn precedence(self) -> u8 {
        match self {
            OpKind::LeftBracket => 0,
            OpKind::Add | OpKind::Subtract => 1,
            OpKind::Multiply | OpKind::Divide => 2,
            OpKind::Negate => 3,
        }
    }
}

// ==================== 求值器 ====================

/// 表达式求值器
#[derive(Debug, Default)]
pub struct Evaluator {
    state: CalculatorState,
    events: Vec<StepEvent>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前状态。`evaluate` 返回后为 `End` 或 `Error`
    pub fn state(&self) -> CalculatorState {
        self.state
    }

    /// 上一次求值产生的事件序列
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// 求值一条以 `=` 结尾的表达式
    pub fn evaluate(&mut self, input: &str) -> CalculationOutput {
        self.state = CalculatorState::Init;
        let mut machine = Machine::new();
        let run = machine.run(input, &mut self.state);
        self.events = machine.events;

        let output = match run {
            Ok(value) => {
                debug!(
                    target: "ratlab::evaluator",
                    result = %value,
                    "calculation finished"
                );
                self.events.push(StepEvent::ResultReady(value.clone()));
                CalculationOutput {
                    state: CalculatorState::End,
                    state_msg: CalculatorState::End.to_string(),
                    prompt_msg: "calculation complete".to_string(),
                    process: machine.process,
                    result: Some(value),
                }
            }
            Err(err) => {
                debug!(
                    target: "ratlab::evaluator",
                    kind = err.kind(),
                    message = err.message(),
                    "calculation failed"
                );
                self.events.push(StepEvent::Faulted(err.clone()));
                CalculationOutput {
                    state: CalculatorState::Error,
                    state_msg: CalculatorState::Error.to_string(),
                    prompt_msg: err.to_string(),
                    process: machine.process,
                    result: None,
                }
            }
        };
        self.state = output.state;
        output
    }
}

// ==================== 双栈机 ====================

#[derive(Debug)]
struct Machine {
    operands: Vec<Rational>,
    operators: Vec<OpKind>,
    literal: Vec<Symbol>,
    expect_operand: bool,
    // 上一个接受的符号是否为一元负号，负号不可叠用
    after_negate: bool,
    process: String,
    events: Vec<StepEvent>,
}

impl Machine {
    fn new() -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
            literal: Vec::new(),
            expect_operand: true,
            after_negate: false,
            process: String::new(),
            events: Vec::new(),
        }
    }

    fn run(&mut self, input: &str, state: &mut CalculatorState) -> MathResult<Rational> {
        let mut stream = SymbolStream::new(input)?;
        let mut result = None;
        while let Some(symbol) = stream.next_symbol() {
            if result.is_some() {
                return Err(MathError::Syntax(format!("'{symbol}' appears after '='")));
            }
            *state = CalculatorState::Normal;
            if symbol == Symbol::Equal {
                let value = self.finish()?;
                self.record(symbol);
                result = Some(value);
            } else {
                self.accept(symbol)?;
                self.record(symbol);
            }
        }
        result.ok_or_else(|| MathError::Syntax("expression must end with '='".to_string()))
    }

    fn record(&mut self, symbol: Symbol) {
        trace!(target: "ratlab::evaluator", symbol = %symbol, "accepted");
        self.process.push(symbol.to_char());
        self.events.push(StepEvent::SymbolAccepted(symbol));
    }

    fn accept(&mut self, symbol: Symbol) -> MathResult<()> {
        let after_negate = self.after_negate;
        self.after_negate = false;
        match symbol {
            digit if digit.is_digit() || digit == Symbol::Dot => {
                if !self.expect_operand {
                    return Err(MathError::Syntax(format!(
                        "operator expected before '{digit}'"
                    )));
                }
                self.literal.push(digit);
                Ok(())
            }
            Symbol::Add | Symbol::Subtract | Symbol::Multiply | Symbol::Divide => {
                self.flush_literal()?;
                if self.expect_operand {
                    if symbol == Symbol::Subtract {
                        if after_negate {
                            return Err(MathError::Syntax(
                                "consecutive '-' operators".to_string(),
                            ));
                        }
                        self.operators.push(OpKind::Negate);
                        self.after_negate = true;
                        Ok(())
                    } else {
                        Err(MathError::Syntax(format!(
                            "operand expected before '{symbol}'"
                        )))
                    }
                } else {
                    let incoming = match symbol {
                        Symbol::Add => OpKind::Add,
                        Symbol::Subtract => OpKind::Subtract,
                        Symbol::Multiply => OpKind::Multiply,
                        _ => OpKind::Divide,
                    };
                    // 左结合：弹出所有优先级不低于自己的运算符
                    while let Some(top) = self.operators.last().copied() {
                        if top == OpKind::LeftBracket || top.precedence() < incoming.precedence()
                        {
                            break;
                        }
                        self.operators.pop();
                        self.apply(top)?;
                    }
                    self.operators.push(incoming);
                    self.expect_operand = true;
                    Ok(())
                }
            }
            Symbol::LeftBracket => {
                if !self.expect_operand || !self.literal.is_empty() {
                    return Err(MathError::Syntax(
                        "operator expected before '('".to_string(),
                    ));
                }
                self.operators.push(OpKind::LeftBracket);
                Ok(())
            }
            Symbol::RightBracket => {
                self.flush_literal()?;
                if self.expect_operand {
                    return Err(MathError::Syntax(
                        "operand expected before ')'".to_string(),
                    ));
                }
                loop {
                    match self.operators.pop() {
                        Some(OpKind::LeftBracket) => break,
                        Some(op) => self.apply(op)?,
                        None => return Err(MathError::Syntax("unmatched ')'".to_string())),
                    }
                }
                // 括号整体可能带一元负号
                self.settle_operand()
            }
            _ => Err(MathError::Unknown(format!(
                "'{symbol}' escaped expression dispatch"
            ))),
        }
    }

    /// 把攒下的字面量解析成操作数压栈
    fn flush_literal(&mut self) -> MathResult<()> {
        if self.literal.is_empty() {
            return Ok(());
        }
        let symbols = std::mem::take(&mut self.literal);
        let value = Decimal::from_symbols(&symbols)?.to_rational();
        self.events.push(StepEvent::OperandCompleted(value.clone()));
        self.operands.push(value);
        self.expect_operand = false;
        self.settle_operand()
    }

    /// 操作数完成后立即结算悬挂的一元负号
    fn settle_operand(&mut self) -> MathResult<()> {
        while self.operators.last() == Some(&OpKind::Negate) {
            self.operators.pop();
            self.apply(OpKind::Negate)?;
        }
        Ok(())
    }

    fn apply(&mut self, op: OpKind) -> MathResult<()> {
        match op {
            OpKind::Negate => {
                let value = self.pop_operand()?;
                self.operands.push(rational_op::opposite(&value));
                Ok(())
            }
            OpKind::LeftBracket => Err(MathError::Syntax("unmatched '('".to_string())),
            OpKind::Add | OpKind::Subtract | OpKind::Multiply | OpKind::Divide => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                let value = match op {
                    OpKind::Add => rational_op::add(&left, &right),
                    OpKind::Subtract => rational_op::subtract(&left, &right),
                    OpKind::Multiply => rational_op::multiply(&left, &right),
                    _ => rational_op::divide(&left, &right)?,
                };
                self.operands.push(value);
                Ok(())
            }
        }
    }

    fn pop_operand(&mut self) -> MathResult<Rational> {
        self.operands
            .pop()
            .ok_or_else(|| MathError::Syntax("operand expected".to_string()))
    }

    /// `=` 触发：清空两个栈，产出唯一结果
    fn finish(&mut self) -> MathResult<Rational> {
        self.flush_literal()?;
        if self.expect_operand {
            if self.operands.is_empty() && self.operators.is_empty() {
                return Err(MathError::Syntax("empty expression".to_string()));
            }
            return Err(MathError::Syntax("operand expected before '='".to_string()));
        }
        while let Some(op) = self.operators.pop() {
            self.apply(op)?;
        }
        let value = self.pop_operand()?;
        if !self.operands.is_empty() {
            return Err(MathError::Syntax("malformed expression".to_string()));
        }
        Ok(value)
    }
}
