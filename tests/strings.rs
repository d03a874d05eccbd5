use ceval::{Builtin, Inapplicable, Literal, values::ValueKind};

mod cases;

fold_case! {
    name: member_plus,
    program: |b| { b.call_builtin(Builtin::MemberStringPlus, &[b.str("foo"), b.str("bar")]) },
    expect: Ok(Literal::Text("foobar".into())),
}

fold_case! {
    name: extension_plus,
    program: |b| { b.call_builtin(Builtin::ExtensionStringPlus, &[b.str("foo"), b.str("bar")]) },
    expect: Ok(Literal::Text("foobar".into())),
}

fold_case! {
    name: concat_through_function,
    // fun evalConcat(a: String, b: String): String { return a + b }
    program: |b| {
        let sym = b.symbol();
        let (x, y) = (b.variable(), b.variable());
        let body = b.block_body(&[b.ret(
            b.call_builtin(Builtin::MemberStringPlus, &[b.get(x), b.get(y)]),
        )]);
        let params = [b.parameter(x), b.parameter(y)];
        b.function(sym, "evalConcat", &params, Some(body));
        b.call(sym, &[b.str("foo"), b.str("bar")])
    },
    expect: Ok(Literal::Text("foobar".into())),
}

fold_case! {
    name: empty_strings,
    program: |b| {
        let inner = b.call_builtin(Builtin::MemberStringPlus, &[b.str(""), b.str("")]);
        b.call_builtin(Builtin::MemberStringPlus, &[inner, b.str("x")])
    },
    expect: Ok(Literal::Text("x".into())),
}

fold_case! {
    name: non_ascii_is_preserved,
    program: |b| {
        b.call_builtin(Builtin::MemberStringPlus, &[b.str("grüß "), b.str("日本")])
    },
    expect: Ok(Literal::Text("grüß 日本".into())),
}

fold_case! {
    name: plus_with_int_operand,
    program: |b| { b.call_builtin(Builtin::MemberStringPlus, &[b.str("n="), b.int(1)]) },
    expect: Err(Inapplicable::TypeMismatch {
        expected: ValueKind::Text,
        found: ValueKind::Int,
    }),
}
