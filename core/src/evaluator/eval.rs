//! Core evaluation logic.

use crate::{
    evaluator::{
        EvaluatorOptions, Inapplicable, Interrupt, Outcome,
        budget::StepBudget,
        operators::{OperatorTable, check_arity},
    },
    frame::Frame,
    ir::{
        Body, Call, Constant, Function, FunctionTable, Loop, LoopKind, Node, Parameter,
        TypeOperator,
    },
    values::{Literal, Value},
};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Remaining stack below which evaluation switches to a fresh segment.
#[cfg(any(feature = "std", test))]
const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
#[cfg(any(feature = "std", test))]
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Argument expressions of one call, after defaults are filled in.
type Slots<'a> = SmallVec<[&'a Node<'a>; 4]>;

/// Bounded tree-walking evaluator.
///
/// One evaluator serves one top-level request: its step budget is created
/// with it and is never replenished, and every call it inlines draws on the
/// same budget.
pub struct Evaluator<'p, 'a> {
    options: EvaluatorOptions,
    functions: &'p dyn FunctionTable<'a>,
    operators: &'p OperatorTable,
    budget: StepBudget,
    depth: usize,
}

impl<'p, 'a> Evaluator<'p, 'a> {
    pub fn new(
        options: EvaluatorOptions,
        functions: &'p dyn FunctionTable<'a>,
        operators: &'p OperatorTable,
    ) -> Self {
        Self {
            budget: StepBudget::new(options.max_steps),
            options,
            functions,
            operators,
            depth: 0,
        }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Steps consumed so far.
    pub fn steps_used(&self) -> usize {
        self.budget.used()
    }

    /// Evaluate a call site down to a literal.
    ///
    /// The node is evaluated in an empty root frame.
    pub fn eval(&mut self, node: &Node<'a>) -> Result<Literal, Inapplicable> {
        let mut root = Frame::new();
        let result = match self.eval_node(node, &mut root) {
            Ok(value) => Literal::try_from(value),
            Err(Interrupt::Inapplicable(e)) => Err(e),
            Err(Interrupt::Return(_) | Interrupt::Break(_) | Interrupt::Continue(_)) => {
                Err(Inapplicable::Unsupported {
                    construct: "control transfer outside of a function",
                })
            }
        };

        match &result {
            Ok(literal) => debug!(steps = self.budget.used(), "evaluated to {}", literal),
            Err(reason) => debug!(steps = self.budget.used(), "not evaluable: {}", reason),
        }
        result
    }

    /// Evaluate one node in the given frame.
    ///
    /// Every invocation costs one step, charged before the node is inspected.
    pub(crate) fn eval_node(&mut self, node: &Node<'a>, frame: &mut Frame) -> Outcome {
        self.budget.take()?;

        if self.depth >= self.options.max_depth {
            return Err(Inapplicable::DepthExceeded {
                limit: self.options.max_depth,
            }
            .into());
        }

        self.depth += 1;
        let result = self.eval_node_on_stack(node, frame);
        self.depth -= 1;

        result
    }

    #[cfg(any(feature = "std", test))]
    fn eval_node_on_stack(&mut self, node: &Node<'a>, frame: &mut Frame) -> Outcome {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.eval_node_inner(node, frame)
        })
    }

    #[cfg(not(any(feature = "std", test)))]
    fn eval_node_on_stack(&mut self, node: &Node<'a>, frame: &mut Frame) -> Outcome {
        self.eval_node_inner(node, frame)
    }

    fn eval_node_inner(&mut self, node: &Node<'a>, frame: &mut Frame) -> Outcome {
        match *node {
            Node::Const(constant) => Ok(value_of(constant)?),

            Node::Get(variable) => Ok(frame.get(variable)?.clone()),

            Node::Set { variable, value } => {
                let value = self.eval_node(value, frame)?;
                frame.bind(variable, value);
                Ok(Value::Unit)
            }

            Node::Variable {
                variable,
                initializer,
            } => {
                // Without an initializer nothing is bound; a read before the
                // first assignment is then an unbound read.
                if let Some(initializer) = initializer {
                    let value = self.eval_node(initializer, frame)?;
                    frame.bind(variable, value);
                }
                Ok(Value::Unit)
            }

            Node::Block(statements) => self.eval_statements(statements, frame),

            Node::Call(call) => self.eval_call(&call, frame),

            Node::Return(value) => {
                let value = match value {
                    Some(value) => self.eval_node(value, frame)?,
                    None => Value::Unit,
                };
                Err(Interrupt::Return(value))
            }

            Node::When(branches) => {
                for branch in branches {
                    if self.eval_condition(&branch.condition, frame)? {
                        return self.eval_node(&branch.result, frame);
                    }
                }
                Ok(Value::Unit)
            }

            Node::Loop(lp) => self.eval_loop(lp, frame),

            Node::Break(target) => Err(Interrupt::Break(target)),

            Node::Continue(target) => Err(Interrupt::Continue(target)),

            Node::TypeOperator { operator, argument } => match operator {
                TypeOperator::ImplicitCoercionToUnit => {
                    self.eval_node(argument, frame)?;
                    Ok(Value::Unit)
                }
                other => Err(Inapplicable::Unsupported {
                    construct: other.name(),
                }
                .into()),
            },
        }
    }

    /// Evaluate statements in order. The result is the last statement's value,
    /// or Unit for an empty sequence.
    fn eval_statements(&mut self, statements: &[Node<'a>], frame: &mut Frame) -> Outcome {
        let mut last = Value::Unit;
        for statement in statements {
            last = self.eval_node(statement, frame)?;
        }
        Ok(last)
    }

    fn eval_condition(
        &mut self,
        condition: &Node<'a>,
        frame: &mut Frame,
    ) -> Result<bool, Interrupt> {
        Ok(self.eval_node(condition, frame)?.as_bool()?)
    }

    fn eval_loop(&mut self, lp: &Loop<'a>, frame: &mut Frame) -> Outcome {
        trace!(target_loop = %lp.id, kind = ?lp.kind, "entering loop");

        let mut proceed = match lp.kind {
            LoopKind::PreTest => self.eval_condition(&lp.condition, frame)?,
            LoopKind::PostTest => true,
        };

        while proceed {
            let iteration = match &lp.body {
                Some(body) => self.eval_node(body, frame),
                None => Ok(Value::Unit),
            };

            match iteration {
                Ok(_) => {}
                Err(Interrupt::Break(target)) if target == lp.id => break,
                Err(Interrupt::Continue(target)) if target == lp.id => {}
                // Returns, jumps to outer loops and failures leave the loop.
                Err(other) => return Err(other),
            }

            proceed = self.eval_condition(&lp.condition, frame)?;
        }

        Ok(Value::Unit)
    }

    fn eval_call(&mut self, call: &Call<'a>, frame: &mut Frame) -> Outcome {
        let declaration = self.functions.function(call.callee);

        match declaration {
            Some(function) => match function.body {
                Some(body) => self.inline(function, body, call, frame),
                None => self.eval_builtin(call, Some(function.parameters), frame),
            },
            None => self.eval_builtin(call, None, frame),
        }
    }

    /// Evaluate a user function's body in a fresh frame.
    fn inline(
        &mut self,
        function: &'a Function<'a>,
        body: Body<'a>,
        call: &Call<'a>,
        caller: &mut Frame,
    ) -> Outcome {
        trace!(callee = function.name, "inlining call");

        let slots = resolve_arguments(call, Some(function.parameters))?;

        // Arguments are evaluated left to right in the caller's frame.
        let mut callee = Frame::with_capacity(slots.len());
        for (parameter, argument) in function.parameters.iter().zip(slots) {
            let value = self.eval_node(argument, caller)?;
            callee.bind(parameter.variable, value);
        }

        let result = match body {
            Body::Block(statements) => self.eval_statements(statements, &mut callee),
            Body::Expression(expression) => self.eval_node(expression, &mut callee),
        };

        match result {
            Ok(value) | Err(Interrupt::Return(value)) => Ok(value),
            Err(Interrupt::Inapplicable(e)) => Err(e.into()),
            Err(Interrupt::Break(_) | Interrupt::Continue(_)) => {
                Err(Inapplicable::AbnormalExit(call.callee).into())
            }
        }
    }

    /// Dispatch a call without an available body to the operator table.
    fn eval_builtin(
        &mut self,
        call: &Call<'a>,
        parameters: Option<&'a [Parameter<'a>]>,
        frame: &mut Frame,
    ) -> Outcome {
        let Some(entry) = self.operators.get(call.callee).copied() else {
            return Err(Inapplicable::UnknownCallee(call.callee).into());
        };

        let slots = resolve_arguments(call, parameters)?;
        let combinator = entry.combinator;
        check_arity(combinator.arity(), slots.len())?;

        if let Some(short) = combinator.short_circuit() {
            // The right operand is only evaluated when the left one does not
            // decide the result, and in that case the result is the left one.
            let left = self.eval_node(slots[0], frame)?;
            if short(left.as_bool()?) {
                return Ok(left);
            }
            let right = self.eval_node(slots[1], frame)?;
            return Ok(combinator.apply(&[left, right])?);
        }

        let mut args: SmallVec<[Value; 4]> = SmallVec::with_capacity(slots.len());
        for slot in slots {
            args.push(self.eval_node(slot, frame)?);
        }
        Ok(combinator.apply(&args)?)
    }
}

/// Pair each parameter with the caller's argument, or its declared default.
///
/// Without a declaration, every argument must be supplied at the call site.
fn resolve_arguments<'a>(
    call: &Call<'a>,
    parameters: Option<&'a [Parameter<'a>]>,
) -> Result<Slots<'a>, Inapplicable> {
    let count = match parameters {
        Some(parameters) => {
            if call.arguments.len() > parameters.len() {
                return Err(Inapplicable::ArityMismatch {
                    expected: parameters.len(),
                    found: call.arguments.len(),
                });
            }
            parameters.len()
        }
        None => call.arguments.len(),
    };

    (0..count)
        .map(|index| {
            call.arguments
                .get(index)
                .and_then(Option::as_ref)
                .or_else(|| parameters.and_then(|p| p[index].default.as_ref()))
                .ok_or(Inapplicable::MissingArgument {
                    callee: call.callee,
                    index,
                })
        })
        .collect()
}

fn value_of(constant: Constant<'_>) -> Result<Value, Inapplicable> {
    match constant {
        Constant::Int(i) => Ok(Value::Int(i)),
        Constant::Boolean(b) => Ok(Value::Boolean(b)),
        Constant::String(s) => Ok(Value::text(s)),
        other => Err(Inapplicable::Unsupported {
            construct: other.kind_name(),
        }),
    }
}
