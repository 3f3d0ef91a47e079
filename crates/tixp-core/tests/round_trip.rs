use tixp_core::bytecode::Opcode;
use tixp_core::tokens::{self, CLR_HOME, DISP, END, IF, NEWLINE, STORE, THEN};
use tixp_core::{
    decode, Instruction, InstructionTable, ProgramDecoder, ProgramEncoder, TixpConfig, TixpError,
};

#[test]
fn fields_and_instructions_survive() {
    let mut enc = ProgramEncoder::new();
    enc.set_name("ROUND").expect("name");
    enc.set_comment("Created by TI Connect CE 5.6").expect("comment");
    enc.append_all(tokens::text("5").expect("digit"))
        .append(STORE)
        .append_all(tokens::text("A").expect("letter"))
        .append(NEWLINE)
        .append(IF)
        .append_all(tokens::text("A>3").expect("condition"))
        .append(NEWLINE)
        .append(THEN)
        .append(NEWLINE)
        .append(DISP)
        .append_all(tokens::string("big").expect("string"))
        .append(NEWLINE)
        .append(END);

    let bytes = enc.compile().expect("compile");
    let program = decode(&bytes).expect("decode");

    assert_eq!(program, enc.to_program());
    assert_eq!(program.comment(), "Created by TI Connect CE 5.6");
    assert!(!program.is_uneditable());
}

#[test]
fn every_standard_token_round_trips() {
    let table = InstructionTable::standard();
    let mut enc = ProgramEncoder::new();
    enc.append_all(table.iter().cloned());

    let bytes = enc.compile().expect("compile");
    let program = decode(&bytes).expect("decode");
    assert_eq!(program.instructions(), enc.instructions());
    assert_eq!(program.code_len(), enc.code_len());
}

#[test]
fn strict_mode_accepts_own_output() {
    let mut enc = ProgramEncoder::new();
    enc.set_uneditable(true)
        .append_all(std::iter::repeat(CLR_HOME).take(400));
    let bytes = enc.compile().expect("compile");

    let decoder = ProgramDecoder::with_config(InstructionTable::standard(), TixpConfig::strict());
    let program = decoder.decode(&bytes).expect("strict decode");
    assert_eq!(program.instructions().len(), 400);
}

#[test]
fn corrupt_stream_aborts_whole_decode() {
    let mut enc = ProgramEncoder::new();
    enc.append_all(vec![CLR_HOME, DISP, CLR_HOME]);
    let mut bytes = enc.compile().expect("compile");
    // second instruction becomes 0x00, which is neither a token nor a prefix
    bytes[75] = 0x00;

    assert_eq!(
        decode(&bytes).unwrap_err(),
        TixpError::UnknownOpcode { offset: 1, bytes: vec![0x00, 0xE1] }
    );
}

#[test]
fn trailing_prefix_byte_is_truncated_stream() {
    let mut enc = ProgramEncoder::new();
    enc.append(CLR_HOME).append(Instruction::new("prefix", Opcode::single(0xBB)));
    let bytes = enc.compile().expect("compile");

    assert_eq!(
        decode(&bytes).unwrap_err(),
        TixpError::TruncatedStream { offset: 1, byte: 0xBB }
    );
}

#[test]
fn custom_table_unknown_ff() {
    let table = InstructionTable::new(vec![CLR_HOME, DISP]).expect("table");
    let mut enc = ProgramEncoder::new();
    enc.append(DISP)
        .append(Instruction::new("LinReg(ax+b)", Opcode::single(0xFF)))
        .append(DISP);
    let bytes = enc.compile().expect("compile");

    let err = ProgramDecoder::new(&table).decode(&bytes).unwrap_err();
    assert_eq!(err, TixpError::UnknownOpcode { offset: 1, bytes: vec![0xFF, 0xDE] });
}
