use crate::errors::*;
use crate::value::*;

/// A pending element of the operator stack
#[derive(Clone, Copy, Debug)]
pub(crate) enum Entry {
    Op(OpKind),
    Func(FuncKind),
    OpenB,
}

impl Entry {
    fn priority(self) -> i32 {
        match self {
            Entry::Op(op) => op.priority(),
            Entry::Func(..) => FUNC_PRIORITY,
            // a barrier: never drained by priority comparison
            Entry::OpenB => 0,
        }
    }
}

/// Evaluation state of a single expression: pending operators and
/// operands not yet consumed by an operator. Created fresh for every
/// evaluation and discarded when it returns
pub(crate) struct Stack {
    ops: Vec<Entry>,
    values: Vec<f64>,
}

impl Stack {
    pub(crate) fn new() -> Self {
        Stack {
            ops: Vec::new(),
            values: Vec::new(),
        }
    }

    pub(crate) fn push_value(&mut self, v: f64) {
        self.values.push(v);
    }

    // the function waits on the operator stack for its argument
    pub(crate) fn push_function(&mut self, f: FuncKind) {
        self.ops.push(Entry::Func(f));
    }

    pub(crate) fn open_bracket(&mut self) {
        self.ops.push(Entry::OpenB);
    }

    // reduce the parenthesized sub-expression, drop the bracket marker,
    // then apply the function the bracket belonged to, if any
    pub(crate) fn close_bracket(&mut self) -> CalcErrorResult {
        loop {
            match self.ops.last().copied() {
                None => return Err(CalcError::MismatchedParentheses),
                Some(Entry::OpenB) => break,
                Some(..) => self.apply()?,
            }
        }
        self.ops.pop();
        if let Some(Entry::Func(..)) = self.ops.last().copied() {
            self.apply()?;
        }
        Ok(())
    }

    // apply pending operators with the same or higher priority first:
    // equal priority drains left to right, power included
    pub(crate) fn push_operator(&mut self, op: OpKind) -> CalcErrorResult {
        loop {
            let top = match self.ops.last().copied() {
                Some(Entry::OpenB) | None => break,
                Some(e) => e,
            };
            if top.priority() < op.priority() {
                break;
            }
            self.apply()?;
        }
        self.ops.push(Entry::Op(op));
        Ok(())
    }

    // pop one operator and its operands, push the result back
    fn apply(&mut self) -> CalcErrorResult {
        let e = match self.ops.pop() {
            Some(e) => e,
            None => return Err(CalcError::StackUnderflow),
        };
        match e {
            Entry::Func(f) => {
                let arg = self.pop_value()?;
                let v = f.apply(arg)?;
                self.values.push(v);
            }
            Entry::Op(op) => {
                // the right operand was pushed last
                let rhs = self.pop_value()?;
                let lhs = self.pop_value()?;
                let v = op.apply(lhs, rhs)?;
                self.values.push(v);
            }
            // a bracket marker is never applied; callers stop at it
            Entry::OpenB => return Err(CalcError::StackUnderflow),
        }
        Ok(())
    }

    fn pop_value(&mut self) -> CalcResult {
        self.values.pop().ok_or(CalcError::StackUnderflow)
    }

    /// Drains everything left when the expression ends and returns the
    /// final value
    pub(crate) fn calculate(&mut self) -> CalcResult {
        loop {
            match self.ops.last().copied() {
                None => break,
                Some(Entry::OpenB) => return Err(CalcError::MismatchedParentheses),
                Some(..) => self.apply()?,
            }
        }
        let result = match self.values.pop() {
            Some(v) => v,
            None => return Err(CalcError::EmptyExpression),
        };
        if !self.values.is_empty() {
            return Err(CalcError::IncompleteExpression);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_order() {
        let mut stack = Stack::new();
        // 2 + 3 * 2 + 5 = 13
        stack.push_value(2.0);
        stack.push_operator(OpKind::Add).unwrap();
        stack.push_value(3.0);
        stack.push_operator(OpKind::Mul).unwrap();
        stack.push_value(2.0);
        stack.push_operator(OpKind::Add).unwrap();
        stack.push_value(5.0);
        assert_eq!(stack.calculate(), Ok(13.0));
    }

    #[test]
    fn test_brackets() {
        let mut stack = Stack::new();
        // 2 + 3 * (2 + 5) = 23
        stack.push_value(2.0);
        stack.push_operator(OpKind::Add).unwrap();
        stack.push_value(3.0);
        stack.push_operator(OpKind::Mul).unwrap();
        stack.open_bracket();
        stack.push_value(2.0);
        stack.push_operator(OpKind::Add).unwrap();
        stack.push_value(5.0);
        stack.close_bracket().unwrap();
        assert_eq!(stack.calculate(), Ok(23.0));
    }

    #[test]
    fn test_function_after_bracket() {
        let mut stack = Stack::new();
        // exp(0) + 2 = 3
        stack.push_function(FuncKind::Exp);
        stack.open_bracket();
        stack.push_value(0.0);
        stack.close_bracket().unwrap();
        stack.push_operator(OpKind::Add).unwrap();
        stack.push_value(2.0);
        assert_eq!(stack.calculate(), Ok(3.0));
    }

    #[test]
    fn test_power_drains_left_to_right() {
        let mut stack = Stack::new();
        // 2 ^ 3 ^ 2 = (2 ^ 3) ^ 2 = 64
        stack.push_value(2.0);
        stack.push_operator(OpKind::Pow).unwrap();
        stack.push_value(3.0);
        stack.push_operator(OpKind::Pow).unwrap();
        stack.push_value(2.0);
        assert_eq!(stack.calculate(), Ok(64.0));
    }

    #[test]
    fn test_mismatched_brackets() {
        let mut stack = Stack::new();
        stack.open_bracket();
        stack.push_value(2.0);
        assert_eq!(stack.calculate(), Err(CalcError::MismatchedParentheses));

        let mut stack = Stack::new();
        stack.push_value(2.0);
        assert_eq!(stack.close_bracket(), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn test_underflow() {
        let mut stack = Stack::new();
        stack.push_value(2.0);
        stack.push_operator(OpKind::Add).unwrap();
        assert_eq!(stack.calculate(), Err(CalcError::StackUnderflow));
    }

    #[test]
    fn test_value_count() {
        let mut stack = Stack::new();
        assert_eq!(stack.calculate(), Err(CalcError::EmptyExpression));

        let mut stack = Stack::new();
        stack.push_value(2.0);
        stack.push_value(3.0);
        assert_eq!(stack.calculate(), Err(CalcError::IncompleteExpression));
    }
}
