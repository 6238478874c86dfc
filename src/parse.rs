use std::iter::Peekable;

use log::debug;
use pest::iterators::{Pair, Pairs};
use pest::Parser;

use crate::errors::*;
use crate::stack::Stack;
use crate::value::*;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// The atomic lexical unit of an expression
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Func(FuncKind),
    Op(OpKind),
    OpenBracket,
    CloseBracket,
}

/// Lazy token stream over the expression text, consumed once by the
/// evaluation driver
pub(crate) struct Tokenizer<'e> {
    pairs: Peekable<Pairs<'e, Rule>>,
    prev: Option<Token>,
}

impl<'e> Tokenizer<'e> {
    pub(crate) fn new(expr: &'e str) -> Result<Self, CalcError> {
        let pairs = match CalcParser::parse(Rule::expr, expr) {
            Ok(p) => p,
            Err(..) => return Err(CalcError::ParseFailed("invalid expression".to_string())),
        };
        Ok(Tokenizer {
            pairs: pairs.peekable(),
            prev: None,
        })
    }

    // a minus starts a literal only where no operand can precede it:
    // at the start of input, after an open bracket, or after an operator
    fn minus_starts_literal(&self) -> bool {
        match self.prev {
            None | Some(Token::OpenBracket) | Some(Token::Op(..)) => true,
            _ => false,
        }
    }

    fn token_from(&mut self, pair: Pair<'e, Rule>) -> Result<Token, CalcError> {
        match pair.as_rule() {
            Rule::float => Ok(Token::Number(parse_float(pair.as_str())?)),
            Rule::ident => {
                let name = pair.as_str();
                match FuncKind::from_name(name) {
                    Some(f) => Ok(Token::Func(f)),
                    None => Err(CalcError::UnknownFunction(name.to_string())),
                }
            }
            Rule::open_b => Ok(Token::OpenBracket),
            Rule::close_b => Ok(Token::CloseBracket),
            Rule::operator => {
                let op = match pair.as_str() {
                    "+" => OpKind::Add,
                    "-" => OpKind::Sub,
                    "*" => OpKind::Mul,
                    "/" => OpKind::Div,
                    "^" => OpKind::Pow,
                    s => return Err(CalcError::ParseFailed(format!("bad operator '{}'", s))),
                };
                if op == OpKind::Sub && self.minus_starts_literal() {
                    if let Some(next) = self.pairs.peek() {
                        if next.as_rule() == Rule::float {
                            // the minus is part of a negative literal,
                            // not an operator; peeked above, unwrap is OK
                            let next = self.pairs.next().unwrap();
                            let v = parse_float(next.as_str())?;
                            return Ok(Token::Number(-v));
                        }
                    }
                }
                Ok(Token::Op(op))
            }
            Rule::unknown => {
                // the rule matches exactly one character, unwrap is OK
                let c = pair.as_str().chars().next().unwrap();
                Err(CalcError::UnknownCharacter(c))
            }
            _ => Err(CalcError::ParseFailed("unexpected token".to_string())),
        }
    }
}

impl<'e> Iterator for Tokenizer<'e> {
    type Item = Result<Token, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.pairs.next()?;
        match self.token_from(pair) {
            Ok(token) => {
                self.prev = Some(token);
                Some(Ok(token))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

fn parse_float(s: &str) -> Result<f64, CalcError> {
    match s.parse::<f64>() {
        Ok(v) => Ok(v),
        Err(..) => Err(CalcError::StrToFloat(s.to_string())),
    }
}

/// Evaluates a single infix expression and returns either the numeric
/// result or the first failure. Every call owns its own evaluation state,
/// nothing is shared between calls
pub fn eval(expr: &str) -> CalcResult {
    debug!("evaluating {:?}", expr);
    let mut stk = Stack::new();
    for token in Tokenizer::new(expr)? {
        match token? {
            Token::Number(v) => stk.push_value(v),
            Token::Func(f) => stk.push_function(f),
            Token::OpenBracket => stk.open_bracket(),
            Token::CloseBracket => stk.close_bracket()?,
            Token::Op(op) => stk.push_operator(op)?,
        }
    }
    stk.calculate()
}
