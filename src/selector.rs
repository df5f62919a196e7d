use crate::clause::Clause;
use crate::emit::{emit_leaf, template_verify_nickname};
use crate::error::Result;
use crate::opcode::Opcode;
use crate::script::Script;
use crate::witness::{WitnessItem, WitnessTemplate};

/// Wrap `branches` (a DNF's flattened conjunctions) in the branch-selector
/// strategy appropriate to their count, per `spec.md` §4.5, and emit each
/// branch's leaves in turn.
///
/// - One branch: no selector needed, the branch runs unconditionally.
/// - Two branches: a plain `IF`/`ELSE`/`ENDIF`.
/// - Three or more: a range-checked selector followed by a decrement ladder,
///   each rung peeling off one branch with `IFDUP`/`NOTIF`.
pub(crate) fn build(branches: Vec<Vec<Clause>>) -> Result<(Script, Vec<WitnessTemplate>)> {
    let n = branches.len();
    let mut witnesses: Vec<WitnessTemplate> = (0..n).map(|_| WitnessTemplate::new()).collect();

    let script = match n {
        0 => Script::new(),
        1 => build_single(&branches[0], &mut witnesses[0])?,
        2 => build_pair(&branches, &mut witnesses)?,
        _ => build_ladder(&branches, &mut witnesses)?,
    };

    Ok((script, witnesses))
}

/// Emit a conjunction's leaves left to right, merging their witness
/// fragments so that the rightmost leaf's items lead the branch's witness
/// sequence (see `WitnessTemplate::prepend_fragment`).
fn emit_conjunction(leaves: &[Clause], witness: &mut WitnessTemplate) -> Result<Script> {
    let mut script = Script::new();
    for leaf in leaves {
        let (fragment, items) = emit_leaf(leaf)?;
        script = script.push_script(fragment);
        witness.prepend_fragment(items);
        if let Some(nickname) = template_verify_nickname(leaf) {
            witness.set_nickname(nickname.to_vec());
        }
    }
    Ok(script)
}

fn build_single(leaves: &[Clause], witness: &mut WitnessTemplate) -> Result<Script> {
    log::debug!("policy_compiler: single branch, {} leaf(es), no selector", leaves.len());
    Ok(emit_conjunction(leaves, witness)?.push_int(1))
}

fn build_pair(branches: &[Vec<Clause>], witnesses: &mut [WitnessTemplate]) -> Result<Script> {
    log::debug!("policy_compiler: two branches, wrapping in IF/ELSE/ENDIF");

    let branch_a = emit_conjunction(&branches[0], &mut witnesses[0])?;
    let branch_b = emit_conjunction(&branches[1], &mut witnesses[1])?;
    witnesses[0].push_front(WitnessItem::Selector(1));
    witnesses[1].push_front(WitnessItem::Selector(0));

    Ok(Script::new()
        .push_opcode(Opcode::If)
        .push_script(branch_a)
        .push_opcode(Opcode::Else)
        .push_script(branch_b)
        .push_opcode(Opcode::EndIf)
        .push_int(1))
}

fn build_ladder(branches: &[Vec<Clause>], witnesses: &mut [WitnessTemplate]) -> Result<Script> {
    let n = branches.len();
    log::debug!("policy_compiler: {n} branches, emitting range-check and decrement ladder");

    let mut script = Script::new()
        .push_opcode(Opcode::Dup)
        .push_int(0)
        .push_int(n as i64)
        .push_opcode(Opcode::Within)
        .push_opcode(Opcode::Verify);

    for (idx, leaves) in branches.iter().enumerate() {
        let body = emit_conjunction(leaves, &mut witnesses[idx])?;
        witnesses[idx].push_front(WitnessItem::Selector(idx as i64 + 1));
        script = script
            .push_opcode(Opcode::SubOne)
            .push_opcode(Opcode::IfDup)
            .push_opcode(Opcode::NotIf)
            .push_script(body)
            .push_opcode(Opcode::Zero)
            .push_opcode(Opcode::EndIf);
    }
    Ok(script)
}
