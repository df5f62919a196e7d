use bitcoin::opcodes::all as op;

/// The fixed opcode alphabet this compiler emits, named per `spec.md` §6.
///
/// Byte values are sourced from the `bitcoin` crate's opcode table rather
/// than hand-copied, so a reader can cross-check them against the wider
/// Bitcoin Script ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Zero,
    If,
    Else,
    EndIf,
    NotIf,
    IfDup,
    Dup,
    Within,
    Verify,
    SubOne,
    Sha256,
    Equal,
    CheckSigVerify,
    /// BIP-119 repurposes the no-op OP_NOP4 as OP_CHECKTEMPLATEVERIFY.
    CheckTemplateVerify,
    /// BIP-65, repurposing OP_NOP2.
    CheckLockTimeVerify,
    /// BIP-112, repurposing OP_NOP3.
    CheckSequenceVerify,
    Drop,
}

impl Opcode {
    pub fn to_byte(self) -> u8 {
        match self {
            Opcode::Zero => op::OP_PUSHBYTES_0.to_u8(),
            Opcode::If => op::OP_IF.to_u8(),
            Opcode::Else => op::OP_ELSE.to_u8(),
            Opcode::EndIf => op::OP_ENDIF.to_u8(),
            Opcode::NotIf => op::OP_NOTIF.to_u8(),
            Opcode::IfDup => op::OP_IFDUP.to_u8(),
            Opcode::Dup => op::OP_DUP.to_u8(),
            Opcode::Within => op::OP_WITHIN.to_u8(),
            Opcode::Verify => op::OP_VERIFY.to_u8(),
            Opcode::SubOne => op::OP_1SUB.to_u8(),
            Opcode::Sha256 => op::OP_SHA256.to_u8(),
            Opcode::Equal => op::OP_EQUAL.to_u8(),
            Opcode::CheckSigVerify => op::OP_CHECKSIGVERIFY.to_u8(),
            Opcode::CheckTemplateVerify => op::OP_NOP4.to_u8(),
            Opcode::CheckLockTimeVerify => op::OP_CLTV.to_u8(),
            Opcode::CheckSequenceVerify => op::OP_CSV.to_u8(),
            Opcode::Drop => op::OP_DROP.to_u8(),
        }
    }
}
