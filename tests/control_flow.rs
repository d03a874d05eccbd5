use ceval::{Builtin, Inapplicable, Literal};

mod cases;

// ============================================================================
// Conditionals
// ============================================================================

fold_case! {
    name: if_returns_early,
    // fun evalAddIf(a: Int, b: Int): Int {
    //     val sum: Int; if (a < 0) return b else sum = a + b; return sum
    // }
    program: |b| {
        let sym = b.symbol();
        let (x, y, sum) = (b.variable(), b.variable(), b.variable());
        let body = b.block_body(&[
            b.declare_uninit(sum),
            b.if_else(
                b.call_builtin(Builtin::IntLess, &[b.get(x), b.int(0)]),
                b.ret(b.get(y)),
                b.set(sum, b.call_builtin(Builtin::IntPlus, &[b.get(x), b.get(y)])),
            ),
            b.ret(b.get(sum)),
        ]);
        let params = [b.parameter(x), b.parameter(y)];
        b.function(sym, "evalAddIf", &params, Some(body));
        b.call(sym, &[b.int(-1), b.int(2)])
    },
    expect: Ok(Literal::Int(2)),
}

fold_case! {
    name: when_picks_first_true_branch,
    program: |b| {
        b.when(&[
            (b.bool(false), b.int(1)),
            (b.bool(true), b.int(2)),
            (b.bool(true), b.int(3)),
        ])
    },
    expect: Ok(Literal::Int(2)),
}

fold_case! {
    name: when_value_is_last_statement_of_block,
    program: |b| {
        let x = b.variable();
        let sym = b.symbol();
        let body = b.expression_body(b.if_else(
            b.bool(true),
            b.block(&[
                b.declare(x, b.int(5)),
                b.call_builtin(Builtin::IntTimes, &[b.get(x), b.get(x)]),
            ]),
            b.int(0),
        ));
        b.function(sym, "evalSquare", &[], Some(body));
        b.call(sym, &[])
    },
    expect: Ok(Literal::Int(25)),
}

fold_case! {
    name: when_without_match_is_not_a_literal,
    program: |b| { b.if_then(b.bool(false), b.int(1)) },
    expect: Err(Inapplicable::NotALiteral),
}

// ============================================================================
// Loops
// ============================================================================

fold_case! {
    name: while_counts_down,
    // var c = a; var d: Int; d = b; while (c > 0) { c -= 1; d++ }; return d
    program: |b| {
        let sym = b.symbol();
        let (x, y, c, d) = (b.variable(), b.variable(), b.variable(), b.variable());
        let lp = b.loop_id();
        let body = b.block_body(&[
            b.declare(c, b.get(x)),
            b.declare_uninit(d),
            b.set(d, b.get(y)),
            b.while_loop(
                lp,
                b.call_builtin(Builtin::IntGreater, &[b.get(c), b.int(0)]),
                Some(b.block(&[
                    b.set(c, b.call_builtin(Builtin::IntMinus, &[b.get(c), b.int(1)])),
                    b.set(d, b.call_builtin(Builtin::IntInc, &[b.get(d)])),
                ])),
            ),
            b.ret(b.get(d)),
        ]);
        let params = [b.parameter(x), b.parameter(y)];
        b.function(sym, "evalAddLoop", &params, Some(body));
        b.call(sym, &[b.int(1), b.int(2)])
    },
    expect: Ok(Literal::Int(3)),
}

fold_case! {
    name: break_and_continue,
    program: |b| {
        let sym = b.symbol();
        let (x, y, c, d) = (b.variable(), b.variable(), b.variable(), b.variable());
        let lp = b.loop_id();
        let body = b.block_body(&[
            b.declare(c, b.get(x)),
            b.declare(d, b.get(y)),
            b.while_loop(
                lp,
                b.call_builtin(Builtin::IntGreater, &[b.get(c), b.int(0)]),
                Some(b.block(&[
                    b.set(c, b.call_builtin(Builtin::IntMinus, &[b.get(c), b.int(1)])),
                    b.if_then(
                        b.call_builtin(Builtin::EqEq, &[b.get(c), b.int(4)]),
                        b.continue_to(lp),
                    ),
                    b.if_then(
                        b.call_builtin(Builtin::EqEq, &[b.get(d), b.int(3)]),
                        b.break_to(lp),
                    ),
                    b.set(d, b.call_builtin(Builtin::IntInc, &[b.get(d)])),
                ])),
            ),
            b.ret(b.call_builtin(
                Builtin::IntPlus,
                &[b.call_builtin(Builtin::IntTimes, &[b.int(10), b.get(c)]), b.get(d)],
            )),
        ]);
        let params = [b.parameter(x), b.parameter(y)];
        b.function(sym, "evalLoopBreakContinue", &params, Some(body));
        b.call(sym, &[b.int(5), b.int(2)])
    },
    expect: Ok(Literal::Int(23)),
}

fold_case! {
    name: labeled_break_leaves_outer_loop,
    program: |b| {
        let sym = b.symbol();
        let (x, y, c, d) = (b.variable(), b.variable(), b.variable(), b.variable());
        let (outer, inner) = (b.loop_id(), b.loop_id());
        let inner_loop = b.while_loop(
            inner,
            b.call_builtin(Builtin::IntGreater, &[b.get(c), b.int(0)]),
            Some(b.block(&[
                b.set(d, b.call_builtin(Builtin::IntInc, &[b.get(d)])),
                b.if_then(
                    b.call_builtin(Builtin::EqEq, &[b.get(d), b.int(3)]),
                    b.continue_to(inner),
                ),
                b.set(c, b.call_builtin(Builtin::IntDec, &[b.get(c)])),
                b.if_then(
                    b.call_builtin(Builtin::EqEq, &[b.get(c), b.int(2)]),
                    b.break_to(outer),
                ),
            ])),
        );
        let body = b.block_body(&[
            b.declare(c, b.get(x)),
            b.declare(d, b.get(y)),
            b.while_loop(outer, b.bool(true), Some(b.block(&[inner_loop, b.ret(b.int(0))]))),
            b.ret(b.call_builtin(Builtin::IntTimes, &[b.get(c), b.get(d)])),
        ]);
        let params = [b.parameter(x), b.parameter(y)];
        b.function(sym, "evalNestedLoops", &params, Some(body));
        b.call(sym, &[b.int(4), b.int(2)])
    },
    expect: Ok(Literal::Int(10)),
}

fold_case! {
    name: do_while_checks_after_body,
    program: |b| {
        let sym = b.symbol();
        let (n, lp) = (b.variable(), b.loop_id());
        let body = b.block_body(&[
            b.declare(n, b.int(0)),
            b.do_while(
                lp,
                Some(b.set(n, b.call_builtin(Builtin::IntPlus, &[b.get(n), b.int(3)]))),
                b.call_builtin(Builtin::IntLess, &[b.get(n), b.int(10)]),
            ),
            b.ret(b.get(n)),
        ]);
        b.function(sym, "evalStepUp", &[], Some(body));
        b.call(sym, &[])
    },
    expect: Ok(Literal::Int(12)),
}

fold_case! {
    name: do_while_continue_and_break,
    // var n = 0; var sum = 0
    // do { n++; if (n == 2) continue; if (n == 5) break; sum += n } while (n < 10)
    program: |b| {
        let sym = b.symbol();
        let (n, sum, lp) = (b.variable(), b.variable(), b.loop_id());
        let body = b.block_body(&[
            b.declare(n, b.int(0)),
            b.declare(sum, b.int(0)),
            b.do_while(
                lp,
                Some(b.block(&[
                    b.set(n, b.call_builtin(Builtin::IntInc, &[b.get(n)])),
                    b.if_then(
                        b.call_builtin(Builtin::EqEq, &[b.get(n), b.int(2)]),
                        b.continue_to(lp),
                    ),
                    b.if_then(
                        b.call_builtin(Builtin::EqEq, &[b.get(n), b.int(5)]),
                        b.break_to(lp),
                    ),
                    b.set(sum, b.call_builtin(Builtin::IntPlus, &[b.get(sum), b.get(n)])),
                ])),
                b.call_builtin(Builtin::IntLess, &[b.get(n), b.int(10)]),
            ),
            b.ret(b.get(sum)),
        ]);
        b.function(sym, "evalDoWhileJumps", &[], Some(body));
        b.call(sym, &[])
    },
    expect: Ok(Literal::Int(8)),
}

fold_case! {
    name: continue_resumes_outer_loop,
    // outer@while (i < 3) {
    //     i++; var j = 0
    //     while (true) { j++; if (j == 2) continue@outer; hits++ }
    // }
    // return hits * 10 + i
    program: |b| {
        let sym = b.symbol();
        let (i, hits, j) = (b.variable(), b.variable(), b.variable());
        let (outer, inner) = (b.loop_id(), b.loop_id());
        let inner_loop = b.while_loop(
            inner,
            b.bool(true),
            Some(b.block(&[
                b.set(j, b.call_builtin(Builtin::IntInc, &[b.get(j)])),
                b.if_then(
                    b.call_builtin(Builtin::EqEq, &[b.get(j), b.int(2)]),
                    b.continue_to(outer),
                ),
                b.set(hits, b.call_builtin(Builtin::IntInc, &[b.get(hits)])),
            ])),
        );
        let body = b.block_body(&[
            b.declare(i, b.int(0)),
            b.declare(hits, b.int(0)),
            b.while_loop(
                outer,
                b.call_builtin(Builtin::IntLess, &[b.get(i), b.int(3)]),
                Some(b.block(&[
                    b.set(i, b.call_builtin(Builtin::IntInc, &[b.get(i)])),
                    b.declare(j, b.int(0)),
                    inner_loop,
                ])),
            ),
            b.ret(b.call_builtin(
                Builtin::IntPlus,
                &[b.call_builtin(Builtin::IntTimes, &[b.get(hits), b.int(10)]), b.get(i)],
            )),
        ]);
        b.function(sym, "evalOuterContinue", &[], Some(body));
        b.call(sym, &[])
    },
    expect: Ok(Literal::Int(33)),
}

fold_case! {
    name: loop_without_body,
    program: |b| {
        let sym = b.symbol();
        let lp = b.loop_id();
        let body = b.block_body(&[
            b.while_loop(lp, b.bool(false), None),
            b.ret(b.bool(true)),
        ]);
        b.function(sym, "evalEmptyLoop", &[], Some(body));
        b.call(sym, &[])
    },
    expect: Ok(Literal::Boolean(true)),
}

fold_case! {
    name: return_from_inside_loop,
    program: |b| {
        let sym = b.symbol();
        let (n, lp) = (b.variable(), b.loop_id());
        let body = b.block_body(&[
            b.declare(n, b.int(0)),
            b.while_loop(
                lp,
                b.bool(true),
                Some(b.block(&[
                    b.set(n, b.call_builtin(Builtin::IntInc, &[b.get(n)])),
                    b.if_then(
                        b.call_builtin(Builtin::EqEq, &[b.get(n), b.int(7)]),
                        b.ret(b.get(n)),
                    ),
                ])),
            ),
            b.ret(b.int(-1)),
        ]);
        b.function(sym, "evalFindSeven", &[], Some(body));
        b.call(sym, &[])
    },
    expect: Ok(Literal::Int(7)),
}

fold_case! {
    name: loop_condition_must_be_boolean,
    program: |b| {
        let lp = b.loop_id();
        b.while_loop(lp, b.int(1), None)
    },
    expect: Err(Inapplicable::TypeMismatch {
        expected: ceval::values::ValueKind::Boolean,
        found: ceval::values::ValueKind::Int,
    }),
}
