use crate::clause::Clause;
use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::script::Script;
use crate::value::{Hash, Key};
use crate::variable::{TimeSpec, Variable};
use crate::witness::WitnessItem;

/// Emit the script fragment for a single leaf clause, along with the
/// witness items it discovers, in the order the leaf's own table entry
/// (`spec.md` §4.4) specifies.
///
/// `clause` must be a leaf — `And`/`Or` reaching this function means a
/// conjunction was handed to the emitter without first being flattened,
/// which this crate's own pipeline never does; it is kept as a checked
/// error rather than a panic so a caller driving the passes directly still
/// gets a clean failure.
pub(crate) fn emit_leaf(clause: &Clause) -> Result<(Script, Vec<WitnessItem>)> {
    match clause {
        Clause::Satisfied => Ok((Script::new(), Vec::new())),
        Clause::Unsatisfiable => Ok((emit_unsatisfiable(), Vec::new())),
        Clause::SignatureCheck { key, signature } => Ok(emit_signature_check(key, signature)),
        Clause::PreImageCheck { hash, preimage } => Ok(emit_preimage_check(hash, preimage)),
        Clause::TemplateVerify { template } => {
            let script = emit_template_verify(template)?;
            Ok((script, Vec::new()))
        }
        Clause::After { time } => {
            let script = emit_after(time)?;
            Ok((script, Vec::new()))
        }
        Clause::Var(v) => Ok(emit_bytes_variable(v)),
        Clause::And(..) | Clause::Or(..) => Err(Error::UnsupportedClause {
            stage: "emitter",
            clause: clause.to_string(),
        }),
    }
}

/// `Unsatisfiable` must compile to a fragment that always fails, not an
/// empty one — an empty fragment leaves whatever `build_single` appends
/// next (a truthy literal) as the branch's only effect, silently inverting
/// an always-false leaf into an always-true script. `OP_0 OP_VERIFY`
/// unconditionally aborts the script when reached.
fn emit_unsatisfiable() -> Script {
    Script::new().push_opcode(Opcode::Zero).push_opcode(Opcode::Verify)
}

/// `key*signature → CHECKSIGVERIFY`. Named for what it emits, not for the
/// dispatch-table slip in the implementation this crate descends from
/// (see `DESIGN.md`).
fn emit_signature_check(key: &Variable<Key>, signature: &Variable<Key>) -> (Script, Vec<WitnessItem>) {
    let (sig_script, mut items) = emit_bytes_variable(signature);
    let (key_script, key_items) = emit_bytes_variable(key);
    items.extend(key_items);
    let script = sig_script.push_script(key_script).push_opcode(Opcode::CheckSigVerify);
    (script, items)
}

fn emit_preimage_check(hash: &Variable<Hash>, preimage: &Variable<Hash>) -> (Script, Vec<WitnessItem>) {
    let (preimage_script, mut items) = emit_bytes_variable(preimage);
    let (hash_script, hash_items) = emit_bytes_variable(hash);
    items.extend(hash_items);
    let script = preimage_script
        .push_opcode(Opcode::Sha256)
        .push_script(hash_script)
        .push_opcode(Opcode::Equal);
    (script, items)
}

fn emit_bytes_variable(variable: &Variable<Vec<u8>>) -> (Script, Vec<WitnessItem>) {
    match variable.value() {
        Some(bytes) => (Script::new().push_bytes(bytes), Vec::new()),
        None => (Script::new(), vec![WitnessItem::Name(variable.name().to_string())]),
    }
}

/// The byte value a bound `TemplateVerify` leaf commits to, kept separately
/// from the leaf's script/witness fragment since it also becomes the
/// branch's nickname — a concern the emitter signature above doesn't carry.
pub(crate) fn template_verify_nickname(clause: &Clause) -> Option<&[u8]> {
    match clause {
        Clause::TemplateVerify { template } => template.value().map(Vec::as_slice),
        _ => None,
    }
}

fn emit_template_verify(template: &Variable<Hash>) -> Result<Script> {
    let value = template.value().ok_or_else(|| Error::UnboundRequiredValue {
        clause_kind: "TemplateVerify",
        variable: template.name().to_string(),
    })?;
    Ok(Script::new()
        .push_bytes(value)
        .push_opcode(Opcode::CheckTemplateVerify)
        .push_opcode(Opcode::Drop))
}

fn emit_after(time: &Variable<TimeSpec>) -> Result<Script> {
    let spec = time.value().ok_or_else(|| Error::UnboundRequiredValue {
        clause_kind: "After",
        variable: time.name().to_string(),
    })?;
    let (value, opcode) = match spec {
        TimeSpec::Absolute(v) => (*v, Opcode::CheckLockTimeVerify),
        TimeSpec::Relative(v) => (*v, Opcode::CheckSequenceVerify),
    };
    Ok(Script::new().push_int(value as i64).push_opcode(opcode).push_opcode(Opcode::Drop))
}
