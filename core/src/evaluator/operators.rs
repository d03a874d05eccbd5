//! Built-in operator semantics and the table mapping host symbols to them.
//!
//! The host resolves its own operator functions (`Int.plus`, `String.plus`,
//! `&&`, ...) to [`SymbolId`]s. An [`OperatorTable`] maps those identities to
//! a [`Builtin`], whose [`Combinator`] supplies arity, expected argument kinds
//! and the actual computation.

use crate::{
    Vec,
    evaluator::Inapplicable,
    ir::SymbolId,
    values::{Value, ValueKind},
};
use ecow::EcoString;
use hashbrown::HashMap;

/// Every operator the evaluator knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    IntPlus,
    IntMinus,
    IntTimes,
    IntDiv,
    IntRem,
    IntInc,
    IntDec,
    IntAnd,
    IntOr,
    IntInv,
    IntXor,
    IntGreater,
    IntGreaterOrEqual,
    IntLess,
    IntLessOrEqual,
    EqEq,
    AndAnd,
    OrOr,
    BooleanNot,
    /// `"a".plus("b")`
    MemberStringPlus,
    /// `"a" + "b"` resolved through the extension on `String?`
    ExtensionStringPlus,
}

impl Builtin {
    pub const ALL: [Builtin; 21] = [
        Builtin::IntPlus,
        Builtin::IntMinus,
        Builtin::IntTimes,
        Builtin::IntDiv,
        Builtin::IntRem,
        Builtin::IntInc,
        Builtin::IntDec,
        Builtin::IntAnd,
        Builtin::IntOr,
        Builtin::IntInv,
        Builtin::IntXor,
        Builtin::IntGreater,
        Builtin::IntGreaterOrEqual,
        Builtin::IntLess,
        Builtin::IntLessOrEqual,
        Builtin::EqEq,
        Builtin::AndAnd,
        Builtin::OrOr,
        Builtin::BooleanNot,
        Builtin::MemberStringPlus,
        Builtin::ExtensionStringPlus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::IntPlus => "Int.plus",
            Builtin::IntMinus => "Int.minus",
            Builtin::IntTimes => "Int.times",
            Builtin::IntDiv => "Int.div",
            Builtin::IntRem => "Int.rem",
            Builtin::IntInc => "Int.inc",
            Builtin::IntDec => "Int.dec",
            Builtin::IntAnd => "Int.and",
            Builtin::IntOr => "Int.or",
            Builtin::IntInv => "Int.inv",
            Builtin::IntXor => "Int.xor",
            Builtin::IntGreater => "greater",
            Builtin::IntGreaterOrEqual => "greaterOrEqual",
            Builtin::IntLess => "less",
            Builtin::IntLessOrEqual => "lessOrEqual",
            Builtin::EqEq => "EQEQ",
            Builtin::AndAnd => "ANDAND",
            Builtin::OrOr => "OROR",
            Builtin::BooleanNot => "Boolean.not",
            Builtin::MemberStringPlus => "String.plus",
            Builtin::ExtensionStringPlus => "String?.plus",
        }
    }

    pub fn combinator(self) -> Combinator {
        use Combinator::*;
        match self {
            Builtin::IntPlus => IntBinary(|l, r| Ok(l.wrapping_add(r))),
            Builtin::IntMinus => IntBinary(|l, r| Ok(l.wrapping_sub(r))),
            Builtin::IntTimes => IntBinary(|l, r| Ok(l.wrapping_mul(r))),
            Builtin::IntDiv => IntBinary(int_div),
            Builtin::IntRem => IntBinary(int_rem),
            Builtin::IntInc => IntUnary(|i| i.wrapping_add(1)),
            Builtin::IntDec => IntUnary(|i| i.wrapping_sub(1)),
            Builtin::IntAnd => IntBinary(|l, r| Ok(l & r)),
            Builtin::IntOr => IntBinary(|l, r| Ok(l | r)),
            Builtin::IntInv => IntUnary(|i| !i),
            Builtin::IntXor => IntBinary(|l, r| Ok(l ^ r)),
            Builtin::IntGreater => IntCompare(|l, r| l > r),
            Builtin::IntGreaterOrEqual => IntCompare(|l, r| l >= r),
            Builtin::IntLess => IntCompare(|l, r| l < r),
            Builtin::IntLessOrEqual => IntCompare(|l, r| l <= r),
            Builtin::EqEq => IntCompare(|l, r| l == r),
            Builtin::AndAnd => ShortCircuit {
                short: |l| !l,
                combine: |l, r| l && r,
            },
            Builtin::OrOr => ShortCircuit {
                short: |l| l,
                combine: |l, r| l || r,
            },
            Builtin::BooleanNot => BooleanUnary(|b| !b),
            Builtin::MemberStringPlus | Builtin::ExtensionStringPlus => TextBinary(concat),
        }
    }
}

/// Truncating division. `i32::MIN / -1` wraps to `i32::MIN`.
fn int_div(left: i32, right: i32) -> Result<i32, Inapplicable> {
    if right == 0 {
        return Err(Inapplicable::DivisionByZero);
    }
    Ok(left.wrapping_div(right))
}

/// Remainder with the sign of the dividend. `i32::MIN % -1` is 0.
fn int_rem(left: i32, right: i32) -> Result<i32, Inapplicable> {
    if right == 0 {
        return Err(Inapplicable::DivisionByZero);
    }
    Ok(left.wrapping_rem(right))
}

fn concat(left: &str, right: &str) -> EcoString {
    let mut out = EcoString::with_capacity(left.len() + right.len());
    out.push_str(left);
    out.push_str(right);
    out
}

/// The computation behind a [`Builtin`].
///
/// The variant fixes arity and the expected argument kinds.
#[derive(Debug, Clone, Copy)]
pub enum Combinator {
    IntUnary(fn(i32) -> i32),
    IntBinary(fn(i32, i32) -> Result<i32, Inapplicable>),
    IntCompare(fn(i32, i32) -> bool),
    BooleanUnary(fn(bool) -> bool),
    /// Boolean binary operator whose right operand is only needed when
    /// `short(left)` is false.
    ShortCircuit {
        short: fn(bool) -> bool,
        combine: fn(bool, bool) -> bool,
    },
    TextBinary(fn(&str, &str) -> EcoString),
}

impl Combinator {
    pub fn arity(&self) -> usize {
        self.parameter_kinds().len()
    }

    pub fn parameter_kinds(&self) -> &'static [ValueKind] {
        match self {
            Combinator::IntUnary(_) => &[ValueKind::Int],
            Combinator::IntBinary(_) | Combinator::IntCompare(_) => {
                &[ValueKind::Int, ValueKind::Int]
            }
            Combinator::BooleanUnary(_) => &[ValueKind::Boolean],
            Combinator::ShortCircuit { .. } => &[ValueKind::Boolean, ValueKind::Boolean],
            Combinator::TextBinary(_) => &[ValueKind::Text, ValueKind::Text],
        }
    }

    /// The predicate on the first argument that makes the second irrelevant.
    pub fn short_circuit(&self) -> Option<fn(bool) -> bool> {
        match self {
            Combinator::ShortCircuit { short, .. } => Some(*short),
            _ => None,
        }
    }

    /// Apply to fully evaluated arguments.
    pub fn apply(&self, args: &[Value]) -> Result<Value, Inapplicable> {
        check_arity(self.arity(), args.len())?;
        match self {
            Combinator::IntUnary(f) => Ok(Value::Int(f(args[0].as_int()?))),
            Combinator::IntBinary(f) => {
                let (l, r) = (args[0].as_int()?, args[1].as_int()?);
                Ok(Value::Int(f(l, r)?))
            }
            Combinator::IntCompare(f) => {
                let (l, r) = (args[0].as_int()?, args[1].as_int()?);
                Ok(Value::Boolean(f(l, r)))
            }
            Combinator::BooleanUnary(f) => Ok(Value::Boolean(f(args[0].as_bool()?))),
            Combinator::ShortCircuit { combine, .. } => {
                let (l, r) = (args[0].as_bool()?, args[1].as_bool()?);
                Ok(Value::Boolean(combine(l, r)))
            }
            Combinator::TextBinary(f) => {
                let (l, r) = (args[0].as_text()?, args[1].as_text()?);
                Ok(Value::Text(f(l, r)))
            }
        }
    }
}

pub(super) fn check_arity(expected: usize, found: usize) -> Result<(), Inapplicable> {
    if expected != found {
        return Err(Inapplicable::ArityMismatch { expected, found });
    }
    Ok(())
}

/// One row of the operator table.
#[derive(Debug, Clone, Copy)]
pub struct OperatorEntry {
    pub symbol: SymbolId,
    pub builtin: Builtin,
    pub combinator: Combinator,
}

/// Immutable mapping from host symbols to built-in operators.
///
/// Built once per evaluation session. Lookups of unknown symbols return
/// `None`, which callers treat as "not a built-in".
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    entries: HashMap<SymbolId, OperatorEntry>,
}

impl OperatorTable {
    pub fn builder() -> OperatorTableBuilder {
        OperatorTableBuilder::default()
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&OperatorEntry> {
        self.entries.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects `(symbol, builtin)` registrations for an [`OperatorTable`].
///
/// Several symbols may share a builtin. Registering a symbol again replaces
/// the earlier registration.
#[derive(Debug, Default)]
pub struct OperatorTableBuilder {
    registrations: Vec<(SymbolId, Builtin)>,
}

impl OperatorTableBuilder {
    pub fn register(&mut self, symbol: SymbolId, builtin: Builtin) -> &mut Self {
        self.registrations.push((symbol, builtin));
        self
    }

    pub fn build(self) -> OperatorTable {
        let entries = self
            .registrations
            .into_iter()
            .map(|(symbol, builtin)| {
                let entry = OperatorEntry {
                    symbol,
                    builtin,
                    combinator: builtin.combinator(),
                };
                (symbol, entry)
            })
            .collect();
        OperatorTable { entries }
    }
}
