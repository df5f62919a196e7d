use policy_compiler::{
    after, and, compile, or, preimage_check, signature_check, template_verify, Clause, Hash, Key,
    Opcode, TimeSpec, Variable, WitnessItem,
};

fn bound_hash(name: &str, bytes: &[u8]) -> Variable<Hash> {
    Variable::bound(name.to_string(), bytes.to_vec())
}

/// S1 — single signature: one branch, witness = [signature, key], script
/// ends with CHECKSIGVERIFY then a literal true.
#[test]
fn s1_single_signature() {
    let key = Variable::<Key>::new("alice");
    let (script, witnesses) = compile(signature_check(key)).unwrap();

    assert_eq!(witnesses.len(), 1);
    assert_eq!(
        witnesses[0].items,
        vec![
            WitnessItem::Name("alice_0_signature".into()),
            WitnessItem::Name("alice".into()),
        ]
    );

    let bytes = script.into_bytes();
    assert_eq!(bytes[bytes.len() - 2], Opcode::CheckSigVerify.to_byte());
    assert_eq!(bytes[bytes.len() - 1], 0x51); // OP_1, the trailing literal true
}

/// S2 — OR of two signatures: two branches, IF/ELSE/ENDIF wrapping, each
/// witness led by its complementary selector.
#[test]
fn s2_or_of_two_signatures() {
    let c = or(
        signature_check(Variable::new("k1")),
        signature_check(Variable::new("k2")),
    );
    let (script, witnesses) = compile(c).unwrap();

    assert_eq!(witnesses.len(), 2);
    assert_eq!(
        witnesses[0].items,
        vec![
            WitnessItem::Selector(1),
            WitnessItem::Name("k1_0_signature".into()),
            WitnessItem::Name("k1".into()),
        ]
    );
    assert_eq!(
        witnesses[1].items,
        vec![
            WitnessItem::Selector(0),
            WitnessItem::Name("k2_0_signature".into()),
            WitnessItem::Name("k2".into()),
        ]
    );

    let bytes = script.into_bytes();
    assert_eq!(bytes[0], Opcode::If.to_byte());
    assert!(bytes.contains(&Opcode::Else.to_byte()));
    assert!(bytes.contains(&Opcode::EndIf.to_byte()));
}

/// S3 — AND of a signature and a hashlock: one branch combining both
/// leaves' script fragments, in source order.
#[test]
fn s3_and_of_signature_and_hashlock() {
    let key = Variable::<Key>::new("alice");
    let hash = Variable::<Hash>::new("secret_hash");
    let c = and(signature_check(key), preimage_check(hash));
    let (script, witnesses) = compile(c).unwrap();

    assert_eq!(witnesses.len(), 1);
    let bytes = script.into_bytes();
    assert!(bytes.contains(&Opcode::Sha256.to_byte()));
    assert!(bytes.contains(&Opcode::Equal.to_byte()));
    assert!(bytes.contains(&Opcode::CheckSigVerify.to_byte()));

    // Signature-check's two items, then hashlock's two items, as separate
    // leaves processed left to right (hashlock's fragment leads).
    assert_eq!(
        witnesses[0].items,
        vec![
            WitnessItem::Name("secret_hash_0_preimage".into()),
            WitnessItem::Name("secret_hash".into()),
            WitnessItem::Name("alice_0_signature".into()),
            WitnessItem::Name("alice".into()),
        ]
    );
}

/// S4 — distribution: (A+B)*(D+E) normalizes to four conjunctions and
/// compiles with a range-checked selector ladder against 4.
#[test]
fn s4_distribution_into_four_branches() {
    let a = signature_check(Variable::new("a"));
    let b = signature_check(Variable::new("b"));
    let d = signature_check(Variable::new("d"));
    let e = signature_check(Variable::new("e"));
    let c = and(or(a, b), or(d, e));
    let (script, witnesses) = compile(c).unwrap();

    assert_eq!(witnesses.len(), 4);
    for (idx, w) in witnesses.iter().enumerate() {
        assert_eq!(w.items.first(), Some(&WitnessItem::Selector(idx as i64 + 1)));
    }
    let bytes = script.into_bytes();
    assert!(bytes.contains(&Opcode::Within.to_byte()));
    assert!(bytes.contains(&Opcode::Verify.to_byte()));
}

/// S5 — template-verify with a bound commitment hash: one branch, the
/// commitment is pushed literally and the branch's nickname is set to it.
#[test]
fn s5_template_verify_with_binding() {
    let commitment = vec![0xDE, 0xAD, 0xBE, 0xEF];
    let template = bound_hash("template_hash", &commitment);
    let (script, witnesses) = compile(template_verify(template)).unwrap();

    assert_eq!(witnesses.len(), 1);
    assert!(witnesses[0].items.is_empty());
    assert_eq!(witnesses[0].nickname, Some(commitment.clone()));

    let bytes = script.into_bytes();
    assert!(bytes.contains(&Opcode::CheckTemplateVerify.to_byte()));
    assert!(bytes.windows(commitment.len()).any(|w| w == commitment));
}

/// S6 — relative timelock: one branch, CHECKSEQUENCEVERIFY over the bound
/// relative time value.
#[test]
fn s6_relative_timelock() {
    let time = TimeSpec::weeks(2);
    let (script, witnesses) = compile(after(time)).unwrap();

    assert_eq!(witnesses.len(), 1);
    assert!(witnesses[0].items.is_empty());

    let bytes = script.into_bytes();
    assert!(bytes.contains(&Opcode::CheckSequenceVerify.to_byte()));
    assert!(bytes.contains(&Opcode::Drop.to_byte()));
}

#[test]
fn unbound_after_clause_fails_to_compile() {
    let time = Variable::<TimeSpec>::new("t");
    let err = compile(Clause::After { time }).unwrap_err();
    assert!(matches!(err, policy_compiler::Error::UnboundRequiredValue { .. }));
}

#[test]
fn unbound_template_verify_fails_to_compile() {
    let template = Variable::<Hash>::new("h");
    let err = compile(template_verify(template)).unwrap_err();
    assert!(matches!(err, policy_compiler::Error::UnboundRequiredValue { .. }));
}
