use tixp_core::container::{read_u16, stored_checksum, HEADER_LEN, NAME, PROTECTION};
use tixp_core::tokens::{self, CLR_HOME, DISP, NEXT_LINE_AND_CARRIAGE};
use tixp_core::{decode, ProgramEncoder};

// The demo program the command-line tool writes: clear the screen and
// display a greeting, locked against editing.
fn hello_world() -> ProgramEncoder {
    let mut enc = ProgramEncoder::new();
    enc.set_name("HELOWRLD").expect("name fits");
    enc.set_uneditable(true)
        .append(CLR_HOME)
        .append(NEXT_LINE_AND_CARRIAGE)
        .append(DISP)
        .append_all(tokens::string("Hello World!").expect("encodable"));
    enc
}

#[test]
fn hello_world_layout() {
    let bytes = hello_world().compile().expect("compile failed");

    assert_eq!(bytes[PROTECTION], 6);
    assert_eq!(&bytes[NAME], b"HELOWRLD");

    let code = &bytes[HEADER_LEN..bytes.len() - 2];
    // ClrHome, newline, Disp, quote, H, e..o (lowercase, 2 bytes each), ...
    assert_eq!(&code[..5], &[0xE1, 0x3F, 0xDE, 0x2A, 0x48]);
    assert_eq!(*code.last().expect("non-empty"), 0x2A);
    // 3 commands + 2 quotes + uppercase H and W, space, '!' + 8 lowercase letters
    assert_eq!(code.len(), 3 + 2 + 4 + 8 * 2);
    assert_eq!(read_u16(&bytes, 72) as usize, code.len());
}

#[test]
fn hello_world_checksum() {
    let bytes = hello_world().compile().expect("compile failed");
    let code = &bytes[HEADER_LEN..bytes.len() - 2];
    let count = code.len() as u32;

    let mut expected: u32 = 13;
    expected += 2 * (count + 2);
    expected += 6;
    expected += b"HELOWRLD".iter().map(|&b| b as u32).sum::<u32>();
    expected += count;
    expected += code.iter().map(|&b| b as u32).sum::<u32>();

    assert_eq!(stored_checksum(&bytes), (expected % 65536) as u16);
}

#[test]
fn hello_world_decodes() {
    let bytes = hello_world().compile().expect("compile failed");
    let program = decode(&bytes).expect("decode failed");
    assert_eq!(program.name(), "HELOWRLD");
    assert!(program.is_uneditable());
    assert_eq!(program.listing(), "ClrHome\nDisp \"Hello World!\"");
}
