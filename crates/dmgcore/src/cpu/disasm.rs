use super::{Bus, Instruction, BASE_TABLE, CB_PREFIX, CB_TABLE};

/// Render `instruction` with its operand placeholders filled in.
///
/// `operands` holds the bytes after the opcode in memory order; missing
/// bytes read as zero.
pub fn format_instruction(instruction: &Instruction, operands: &[u8]) -> String {
    let byte = |i: usize| operands.get(i).copied().unwrap_or(0);
    let text = instruction.mnemonic;

    if text.contains("u16") {
        let value = u16::from_le_bytes([byte(0), byte(1)]);
        text.replace("u16", &format!("{value:04X}h"))
    } else if text.contains("u8") {
        text.replace("u8", &format!("{:02X}h", byte(0)))
    } else if text.contains("i8") {
        text.replace("i8", &format!("{:+}", byte(0) as i8))
    } else {
        text.to_string()
    }
}

/// Disassemble the instruction at `address`.
///
/// Returns the text and the encoded length in bytes. Undefined opcodes
/// render as `UNUSED` with length 1.
pub fn disassemble(bus: &mut dyn Bus, address: u16) -> (String, u8) {
    let opcode = bus.read8(address);
    if opcode == CB_PREFIX {
        let cb = bus.read8(address.wrapping_add(1));
        let instruction = &CB_TABLE[cb as usize];
        return (instruction.mnemonic.to_string(), instruction.length);
    }

    let instruction = &BASE_TABLE[opcode as usize];
    let operands: Vec<u8> = (1..instruction.length as u16)
        .map(|offset| bus.read8(address.wrapping_add(offset)))
        .collect();
    (
        format_instruction(instruction, &operands),
        instruction.length,
    )
}
