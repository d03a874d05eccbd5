#![allow(dead_code)]

use ceval::{Builtin, EvaluatorOptions, Session, SymbolId};
use once_cell::sync::Lazy;

/// Session with every builtin registered under the symbol `ProgramBuilder`
/// reserves for it.
pub static SESSION: Lazy<Session> = Lazy::new(|| session(EvaluatorOptions::default()));

/// Same operators, with a budget small enough to trip in a few iterations.
pub static TIGHT: Lazy<Session> = Lazy::new(|| {
    session(EvaluatorOptions {
        max_steps: 100,
        ..Default::default()
    })
});

pub fn session(options: EvaluatorOptions) -> Session {
    Session::new(options, |ops| {
        for builtin in Builtin::ALL {
            ops.register(SymbolId(builtin as u32), builtin);
        }
    })
}

/// Build a program, then fold the call the builder block evaluates to.
///
/// ```ignore
/// fold_case! {
///     name: sum,
///     program: |b| { b.call_builtin(Builtin::IntPlus, &[b.int(1), b.int(2)]) },
///     expect: Ok(Literal::Int(3)),
/// }
/// ```
#[macro_export]
macro_rules! fold_case {
    (
        name: $name:ident,
        $(session: $session:expr,)?
        program: |$b:ident| $build:block,
        expect: $expect:expr $(,)?
    ) => {
        #[test]
        #[allow(unused_mut)]
        fn $name() {
            let arena = ::ceval::Bump::new();
            let mut $b = ::ceval::ProgramBuilder::new(&arena);
            let call: ::ceval::Node<'_> = $build;
            let program = $b.finish();

            let session: &::ceval::Session = $crate::fold_case!(@session $($session)?);
            pretty_assertions::assert_eq!(session.fold(&program, &call), $expect);
        }
    };
    (@session) => {
        &*cases::SESSION
    };
    (@session $session:expr) => {
        &*$session
    };
}
