//! Parses the `sequences.txt` script text back into assembled animations,
//! resolving `Anim`/`Anim_IfFeather`/`RandomBranch` label operands to
//! numeric ids once every animation header has been seen.

use super::opcode::{action_value, Opcode};
use crate::error::{CoreError, Result};
use crate::io::ByteWriter;

/// One assembled animation: its script name, numeric id (parsed from the
/// name), and final bytecode with all jump labels resolved.
#[derive(Debug, Clone)]
pub struct AssembledAnimation {
    pub script_name: String,
    pub id: u16,
    pub bytecode: Vec<u8>,
}

struct PendingJump {
    anim_index: usize,
    byte_offset: usize,
    target: String,
    sub_label: Option<String>,
}

/// Splits `target` into its animation-name component and an optional
/// `:sub_label` suffix. The sub-label slot is never resolved to a byte
/// offset (see the module docs on backpatching below) - its presence is
/// only logged.
fn split_label(target: &str) -> (String, Option<String>) {
    match target.split_once(':') {
        Some((label, sub)) => (label.to_string(), Some(sub.to_string())),
        None => (target.to_string(), None),
    }
}

/// Parses the id embedded in a script name: strips the canonical `POP2_`
/// prefix (if present) so the `NNN` field is what gets scanned, then takes
/// the first run of ASCII digits wherever it occurs and strips leading
/// zeros - e.g. `"POP2_002_Stand"` -> `2`, `"POP2_042_FullStep"` -> `42`.
fn parse_id_from_name(name: &str) -> Option<u16> {
    let name = if name.len() >= 5 && name[..5].eq_ignore_ascii_case("POP2_") {
        &name[5..]
    } else {
        name
    };
    let mut chars = name.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            break;
        }
        chars.next();
    }
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    if digits.is_empty() {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    let value = if trimmed.is_empty() { "0" } else { trimmed };
    value.parse::<u32>().ok().map(|v| v as u16)
}

/// Splits script text into logical lines: normalizes CRLF/CR/LF to `\n`,
/// strips each physical line's `#` end-of-line comment, then further
/// splits what remains on `;` so multiple statements can share one line.
/// Stripping the comment first ensures `#` suppresses everything after it
/// on the line, including any `;`-separated statements.
fn logical_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = Vec::new();
    for physical in normalized.split('\n') {
        let physical = match physical.split_once('#') {
            Some((before, _)) => before,
            None => physical,
        };
        for stmt in physical.split(';') {
            out.push(stmt.trim().to_string());
        }
    }
    out
}

fn parse_i16(arg: Option<&&str>, mnemonic: &str) -> Result<i16> {
    arg.ok_or_else(|| CoreError::Assembly(format!("{mnemonic} is missing an argument")))?
        .parse::<i16>()
        .map_err(|_| CoreError::Assembly(format!("{mnemonic} has a non-numeric argument")))
}

fn emit_instruction(
    line: &str,
    anim_index: usize,
    w: &mut ByteWriter,
    pending: &mut Vec<PendingJump>,
) -> Result<()> {
    let mut tokens = line.split_whitespace();
    let mnemonic = tokens
        .next()
        .ok_or_else(|| CoreError::Assembly("empty instruction line".into()))?;
    let args: Vec<&str> = tokens.collect();

    if mnemonic.eq_ignore_ascii_case("ShowFrame") {
        w.write_i16_le(parse_i16(args.first(), "ShowFrame")?);
        return Ok(());
    }
    if mnemonic.eq_ignore_ascii_case("Action") {
        w.write_i16_le(-7);
        let raw = args
            .first()
            .ok_or_else(|| CoreError::Assembly("Action is missing an argument".into()))?;
        let value = action_value(raw)
            .or_else(|| raw.parse::<i16>().ok())
            .ok_or_else(|| CoreError::Assembly(format!("unrecognized Action argument '{raw}'")))?;
        w.write_i16_le(value);
        return Ok(());
    }
    if mnemonic.eq_ignore_ascii_case("Anim") || mnemonic.eq_ignore_ascii_case("Anim_IfFeather") {
        let discriminant = if mnemonic.eq_ignore_ascii_case("Anim") { -1 } else { -10 };
        w.write_i16_le(discriminant);
        let raw = args
            .first()
            .ok_or_else(|| CoreError::Assembly(format!("{mnemonic} is missing a target animation")))?;
        let (target, sub_label) = split_label(raw);
        pending.push(PendingJump { anim_index, byte_offset: w.len(), target, sub_label });
        w.write_i16_le(0);
        return Ok(());
    }
    if mnemonic.eq_ignore_ascii_case("RandomBranch") {
        w.write_i16_le(-22);
        w.write_i16_le(parse_i16(args.first(), "RandomBranch")?);
        let targets = args.get(1..3).ok_or_else(|| {
            CoreError::Assembly("RandomBranch requires two target animations".into())
        })?;
        for raw in targets {
            let (target, sub_label) = split_label(raw);
            pending.push(PendingJump { anim_index, byte_offset: w.len(), target, sub_label });
            w.write_i16_le(0);
        }
        return Ok(());
    }

    let discriminant = Opcode::mnemonic_to_discriminant(mnemonic)
        .ok_or_else(|| CoreError::Assembly(format!("unrecognized script command '{mnemonic}'")))?;
    w.write_i16_le(discriminant);
    for i in 0..Opcode::operand_count(discriminant) {
        w.write_i16_le(parse_i16(args.get(i), mnemonic)?);
    }
    Ok(())
}

/// Assembles the full `sequences.txt` text into a list of animations with
/// resolved bytecode, in the order their `[name]` headers appeared.
pub fn assemble(text: &str) -> Result<Vec<AssembledAnimation>> {
    let mut animations: Vec<(String, ByteWriter)> = Vec::new();
    let mut pending: Vec<PendingJump> = Vec::new();

    for line in logical_lines(text) {
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or_else(|| CoreError::Assembly(format!("unterminated animation header: {line}")))?
                .trim();
            if name.is_empty() {
                return Err(CoreError::Assembly("animation header has no name".into()));
            }
            animations.push((name.to_string(), ByteWriter::new()));
            continue;
        }

        let anim_index = animations.len().checked_sub(1).ok_or_else(|| {
            CoreError::Assembly(format!("instruction before any animation header: {line}"))
        })?;
        let writer = &mut animations[anim_index].1;
        emit_instruction(&line, anim_index, writer, &mut pending)?;
    }

    if animations.is_empty() {
        return Err(CoreError::Assembly("script contains no animations".into()));
    }

    let mut resolved: Vec<AssembledAnimation> = animations
        .into_iter()
        .map(|(script_name, w)| {
            let id = parse_id_from_name(&script_name).ok_or_else(|| {
                CoreError::Assembly(format!(
                    "could not parse a numeric id from animation name '{script_name}'"
                ))
            })?;
            Ok(AssembledAnimation { script_name, id, bytecode: w.into_bytes() })
        })
        .collect::<Result<_>>()?;

    for job in pending {
        let target_idx = resolved
            .iter()
            .position(|a| a.script_name.eq_ignore_ascii_case(&job.target))
            .ok_or_else(|| CoreError::Assembly(format!("unresolved animation label '{}'", job.target)))?;
        if let Some(sub) = &job.sub_label {
            tracing::warn!(
                label = %job.target,
                sub = %sub,
                "sub-label jump targets are not tracked; writing the target animation id with no sub-offset"
            );
        }
        let target_id = resolved[target_idx].id;
        let bytes = target_id.to_le_bytes();
        let anim = &mut resolved[job.anim_index];
        anim.bytecode[job.byte_offset] = bytes[0];
        anim.bytecode[job.byte_offset + 1] = bytes[1];
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_single_showframe_animation() {
        let result = assemble("[POP2_009_Hang]\r\nShowFrame 9").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 9);
        assert_eq!(result[0].script_name, "POP2_009_Hang");
        assert_eq!(result[0].bytecode, vec![9, 0]);
    }

    #[test]
    fn resolves_forward_anim_reference() {
        let script = "[POP2_001_StartRun]\r\nAnim POP2_002_Stand\r\n\r\n[POP2_002_Stand]\r\nShowFrame 2";
        let result = assemble(script).unwrap();
        assert_eq!(result[0].bytecode, vec![0xFF, 0xFF, 2, 0]);
    }

    #[test]
    fn rejects_unresolved_label() {
        let err = assemble("[POP2_001_StartRun]\r\nAnim POP2_999_Nope").unwrap_err();
        assert!(matches!(err, CoreError::Assembly(_)));
    }

    #[test]
    fn sub_label_jump_writes_zero_sub_offset_without_failing() {
        let script = "[POP2_001_StartRun]\r\nAnim POP2_002_Stand:sub\r\n\r\n[POP2_002_Stand]\r\nShowFrame 2";
        let result = assemble(script).unwrap();
        assert_eq!(result[0].bytecode, vec![0xFF, 0xFF, 2, 0]);
    }

    #[test]
    fn semicolons_separate_statements_on_one_line() {
        let result = assemble("[POP2_009_Hang]\r\nFlip; ShowFrame 9").unwrap();
        assert_eq!(result[0].bytecode, vec![0xFE, 0xFF, 9, 0]);
    }

    #[test]
    fn comments_are_stripped() {
        let result = assemble("[POP2_009_Hang]\r\nShowFrame 9 # the only frame").unwrap();
        assert_eq!(result[0].bytecode, vec![9, 0]);
    }

    #[test]
    fn comment_suppresses_trailing_semicolon_statement() {
        // Everything after '#' is a comment, including a ';'-separated
        // statement that would otherwise look like a second instruction.
        let result = assemble("[POP2_009_Hang]\r\nFlip # note ; ShowFrame 9").unwrap();
        assert_eq!(result[0].bytecode, vec![0xFE, 0xFF]);
    }

    #[test]
    fn unknown_mnemonic_is_an_assembly_error() {
        let err = assemble("[POP2_009_Hang]\r\nTotallyBogusCommand").unwrap_err();
        assert!(matches!(err, CoreError::Assembly(_)));
    }

    #[test]
    fn id_parsed_from_first_digit_run_in_name() {
        let result = assemble("[POP2_042_FullStep]\r\nShowFrame 1").unwrap();
        assert_eq!(result[0].id, 42);
    }
}
