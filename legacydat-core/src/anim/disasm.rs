//! Turns animation bytecode back into the textual listing format consumed
//! by the assembler: one bracketed `[POP2_<id>[_<label>]]` header per
//! animation, followed by one instruction per line, CRLF-separated.

use super::names;
use super::opcode::{action_name, Opcode};
use crate::error::{CoreError, Result};

/// Renders the `POP2_<id>[_<label>]` form used for both animation headers
/// and `Anim`/`Anim_IfFeather`/`RandomBranch` jump targets.
fn anim_label(id: u16) -> String {
    match names::lookup(id) {
        Some(label) => format!("POP2_{id:03}_{label}"),
        None => format!("POP2_{id:03}"),
    }
}

fn action_operand(value: i16) -> String {
    match action_name(value) {
        Some(name) => name.to_string(),
        None => value.to_string(),
    }
}

fn read_i16(data: &[u8], pos: &mut usize) -> Result<i16> {
    let bytes = data
        .get(*pos..*pos + 2)
        .ok_or_else(|| CoreError::Assembly("bytecode truncated mid-instruction".into()))?;
    *pos += 2;
    Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
}

fn render_instruction(op: i16, data: &[u8], pos: &mut usize) -> Result<String> {
    Ok(match op {
        n if n >= 0 => format!("{} {n}", Opcode::ShowFrame(0).mnemonic()),
        -2 => Opcode::Flip.mnemonic().to_string(),
        -3 => Opcode::MoveUp.mnemonic().to_string(),
        -4 => Opcode::MoveDown.mnemonic().to_string(),
        -12 => Opcode::KnockUp.mnemonic().to_string(),
        -13 => Opcode::KnockDown.mnemonic().to_string(),
        -16 => Opcode::EndLevel.mnemonic().to_string(),
        -17 => Opcode::Disappear.mnemonic().to_string(),
        -18 => Opcode::ResetSetAnim.mnemonic().to_string(),
        -19 => Opcode::AlignToFloor.mnemonic().to_string(),
        -23 => Opcode::RepeatLastFrame.mnemonic().to_string(),
        -27 => Opcode::UnknownOp27.mnemonic().to_string(),
        -30 => Opcode::UnknownOp30.mnemonic().to_string(),
        -33 => Opcode::UnknownOp33.mnemonic().to_string(),
        -36 => Opcode::UnknownOp36.mnemonic().to_string(),
        -63 => Opcode::UnknownOp63.mnemonic().to_string(),
        -1 => format!("Anim {}", anim_label(read_i16(data, pos)? as u16)),
        -10 => format!("Anim_IfFeather {}", anim_label(read_i16(data, pos)? as u16)),
        -5 => format!("MoveX {}", read_i16(data, pos)?),
        -6 => format!("MoveY {}", read_i16(data, pos)?),
        -7 => format!("Action {}", action_operand(read_i16(data, pos)?)),
        -11 => format!("SetDeathType {}", read_i16(data, pos)?),
        -14 => format!("GetItem {}", read_i16(data, pos)?),
        -15 => format!("PlaySound {}", read_i16(data, pos)?),
        -21 => format!("SetSpecialState {}", read_i16(data, pos)?),
        -24 => format!("SetPalette {}", read_i16(data, pos)?),
        -8 => {
            let a = read_i16(data, pos)?;
            let b = read_i16(data, pos)?;
            format!("SetFall {a} {b}")
        }
        -9 => {
            let a = read_i16(data, pos)?;
            let b = read_i16(data, pos)?;
            format!("AddMomentum {a} {b}")
        }
        -22 => {
            let v = read_i16(data, pos)?;
            let a1 = read_i16(data, pos)? as u16;
            let a2 = read_i16(data, pos)? as u16;
            format!("RandomBranch {v} {} {}", anim_label(a1), anim_label(a2))
        }
        other => return Err(CoreError::Assembly(format!("unrecognized opcode discriminant {other}"))),
    })
}

/// Disassembles one animation's bytecode into its full `[header]` + body
/// text, matching the S2 scenario's exact CRLF layout.
pub fn disassemble_animation(id: u16, bytecode: &[u8]) -> Result<String> {
    let mut out = String::new();
    out.push('[');
    out.push_str(&anim_label(id));
    out.push(']');

    let mut pos = 0;
    while pos + 1 < bytecode.len() {
        let op = read_i16(bytecode, &mut pos)?;
        out.push_str("\r\n");
        out.push_str(&render_instruction(op, bytecode, &mut pos)?);
    }
    Ok(out)
}

/// Disassembles a whole sequence (one text block per animation, separated
/// by a blank line).
pub fn disassemble_sequence(animations: &[(u16, Vec<u8>)]) -> Result<String> {
    let mut blocks = Vec::with_capacity(animations.len());
    for (id, bytecode) in animations {
        blocks.push(disassemble_animation(*id, bytecode)?);
    }
    Ok(blocks.join("\r\n\r\n"))
}
