//! Standard Token Data
//!
//! TI-83 Plus token assignments. Opcode values are fixed by the calculator
//! firmware; prefix bytes 0x5C, 0x5D, 0x5E, 0x60, 0x61, 0x63, 0x7E, 0xAA and
//! 0xBB are never tokens on their own.

use crate::error::TixpResult;

use super::instruction::Instruction;
use super::table::InstructionTable;

pub const STORE: Instruction = Instruction::single("→", 0x04);
pub const QUOTE: Instruction = Instruction::single("\"", 0x2A);
pub const COLON: Instruction = Instruction::single(":", 0x3E);
pub const NEWLINE: Instruction = Instruction::single("\n", 0x3F);
pub const NEXT_LINE_AND_CARRIAGE: Instruction = NEWLINE;
pub const IF: Instruction = Instruction::single("If", 0xCE);
pub const THEN: Instruction = Instruction::single("Then", 0xCF);
pub const ELSE: Instruction = Instruction::single("Else", 0xD0);
pub const END: Instruction = Instruction::single("End", 0xD4);
pub const INPUT: Instruction = Instruction::single("Input", 0xDC);
pub const PROMPT: Instruction = Instruction::single("Prompt", 0xDD);
pub const DISP: Instruction = Instruction::single("Disp", 0xDE);
pub const OUTPUT: Instruction = Instruction::single("Output(", 0xE0);
pub const CLR_HOME: Instruction = Instruction::single("ClrHome", 0xE1);
pub const GET_KEY: Instruction = Instruction::single("getKey", 0xAD);

pub static STANDARD_TOKENS: &[Instruction] = &[
    // One-byte tokens
    Instruction::single("►DMS", 0x01),
    Instruction::single("►Dec", 0x02),
    Instruction::single("►Frac", 0x03),
    Instruction::single("→", 0x04),
    Instruction::single("Boxplot", 0x05),
    Instruction::single("[", 0x06),
    Instruction::single("]", 0x07),
    Instruction::single("{", 0x08),
    Instruction::single("}", 0x09),
    Instruction::single("ʳ", 0x0A),
    Instruction::single("°", 0x0B),
    Instruction::single("⁻¹", 0x0C),
    Instruction::single("²", 0x0D),
    Instruction::single("ᵀ", 0x0E),
    Instruction::single("³", 0x0F),
    Instruction::single("(", 0x10),
    Instruction::single(")", 0x11),
    Instruction::single("round(", 0x12),
    Instruction::single("pxl-Test(", 0x13),
    Instruction::single("augment(", 0x14),
    Instruction::single("rowSwap(", 0x15),
    Instruction::single("row+(", 0x16),
    Instruction::single("*row(", 0x17),
    Instruction::single("*row+(", 0x18),
    Instruction::single("max(", 0x19),
    Instruction::single("min(", 0x1A),
    Instruction::single("R►Pr(", 0x1B),
    Instruction::single("R►Pθ(", 0x1C),
    Instruction::single("P►Rx(", 0x1D),
    Instruction::single("P►Ry(", 0x1E),
    Instruction::single("median(", 0x1F),
    Instruction::single("randM(", 0x20),
    Instruction::single("mean(", 0x21),
    Instruction::single("solve(", 0x22),
    Instruction::single("seq(", 0x23),
    Instruction::single("fnInt(", 0x24),
    Instruction::single("nDeriv(", 0x25),
    Instruction::single("fMin(", 0x27),
    Instruction::single("fMax(", 0x28),
    Instruction::single(" ", 0x29),
    Instruction::single("\"", 0x2A),
    Instruction::single(",", 0x2B),
    Instruction::single("[i]", 0x2C),
    Instruction::single("!", 0x2D),
    Instruction::single("CubicReg", 0x2E),
    Instruction::single("QuartReg", 0x2F),
    Instruction::single("0", 0x30),
    Instruction::single("1", 0x31),
    Instruction::single("2", 0x32),
    Instruction::single("3", 0x33),
    Instruction::single("4", 0x34),
    Instruction::single("5", 0x35),
    Instruction::single("6", 0x36),
    Instruction::single("7", 0x37),
    Instruction::single("8", 0x38),
    Instruction::single("9", 0x39),
    Instruction::single(".", 0x3A),
    Instruction::single("ᴇ", 0x3B),
    Instruction::single(" or ", 0x3C),
    Instruction::single(" xor ", 0x3D),
    Instruction::single(":", 0x3E),
    Instruction::single("\n", 0x3F),
    Instruction::single(" and ", 0x40),
    Instruction::single("A", 0x41),
    Instruction::single("B", 0x42),
    Instruction::single("C", 0x43),
    Instruction::single("D", 0x44),
    Instruction::single("E", 0x45),
    Instruction::single("F", 0x46),
    Instruction::single("G", 0x47),
    Instruction::single("H", 0x48),
    Instruction::single("I", 0x49),
    Instruction::single("J", 0x4A),
    Instruction::single("K", 0x4B),
    Instruction::single("L", 0x4C),
    Instruction::single("M", 0x4D),
    Instruction::single("N", 0x4E),
    Instruction::single("O", 0x4F),
    Instruction::single("P", 0x50),
    Instruction::single("Q", 0x51),
    Instruction::single("R", 0x52),
    Instruction::single("S", 0x53),
    Instruction::single("T", 0x54),
    Instruction::single("U", 0x55),
    Instruction::single("V", 0x56),
    Instruction::single("W", 0x57),
    Instruction::single("X", 0x58),
    Instruction::single("Y", 0x59),
    Instruction::single("Z", 0x5A),
    Instruction::single("θ", 0x5B),
    Instruction::single("prgm", 0x5F),
    Instruction::single("Radian", 0x64),
    Instruction::single("Degree", 0x65),
    Instruction::single("Normal", 0x66),
    Instruction::single("Sci", 0x67),
    Instruction::single("Eng", 0x68),
    Instruction::single("Float", 0x69),
    Instruction::single("=", 0x6A),
    Instruction::single("<", 0x6B),
    Instruction::single(">", 0x6C),
    Instruction::single("≤", 0x6D),
    Instruction::single("≥", 0x6E),
    Instruction::single("≠", 0x6F),
    Instruction::single("+", 0x70),
    Instruction::single("-", 0x71),
    Instruction::single("Ans", 0x72),
    Instruction::single("Fix", 0x73),
    Instruction::single("Horiz", 0x74),
    Instruction::single("Full", 0x75),
    Instruction::single("Func", 0x76),
    Instruction::single("Param", 0x77),
    Instruction::single("Polar", 0x78),
    Instruction::single("Seq", 0x79),
    Instruction::single("IndpntAuto", 0x7A),
    Instruction::single("IndpntAsk", 0x7B),
    Instruction::single("DependAuto", 0x7C),
    Instruction::single("DependAsk", 0x7D),
    Instruction::single("▫", 0x7F),
    Instruction::single("﹢", 0x80),
    Instruction::single("·", 0x81),
    Instruction::single("*", 0x82),
    Instruction::single("/", 0x83),
    Instruction::single("Trace", 0x84),
    Instruction::single("ClrDraw", 0x85),
    Instruction::single("ZStandard", 0x86),
    Instruction::single("ZTrig", 0x87),
    Instruction::single("ZBox", 0x88),
    Instruction::single("Zoom In", 0x89),
    Instruction::single("Zoom Out", 0x8A),
    Instruction::single("ZSquare", 0x8B),
    Instruction::single("ZInteger", 0x8C),
    Instruction::single("ZPrevious", 0x8D),
    Instruction::single("ZDecimal", 0x8E),
    Instruction::single("ZoomStat", 0x8F),
    Instruction::single("ZoomRcl", 0x90),
    Instruction::single("PrintScreen", 0x91),
    Instruction::single("ZoomSto", 0x92),
    Instruction::single("Text(", 0x93),
    Instruction::single(" nPr ", 0x94),
    Instruction::single(" nCr ", 0x95),
    Instruction::single("FnOn", 0x96),
    Instruction::single("FnOff", 0x97),
    Instruction::single("StorePic", 0x98),
    Instruction::single("RecallPic", 0x99),
    Instruction::single("StoreGDB", 0x9A),
    Instruction::single("RecallGDB", 0x9B),
    Instruction::single("Line(", 0x9C),
    Instruction::single("Vertical", 0x9D),
    Instruction::single("Pt-On(", 0x9E),
    Instruction::single("Pt-Off(", 0x9F),
    Instruction::single("Pt-Change(", 0xA0),
    Instruction::single("Pxl-On(", 0xA1),
    Instruction::single("Pxl-Off(", 0xA2),
    Instruction::single("Pxl-Change(", 0xA3),
    Instruction::single("Shade(", 0xA4),
    Instruction::single("Circle(", 0xA5),
    Instruction::single("Horizontal", 0xA6),
    Instruction::single("Tangent(", 0xA7),
    Instruction::single("DrawInv", 0xA8),
    Instruction::single("DrawF", 0xA9),
    Instruction::single("rand", 0xAB),
    Instruction::single("π", 0xAC),
    Instruction::single("getKey", 0xAD),
    Instruction::single("'", 0xAE),
    Instruction::single("?", 0xAF),
    Instruction::single("⁻", 0xB0),
    Instruction::single("int(", 0xB1),
    Instruction::single("abs(", 0xB2),
    Instruction::single("det(", 0xB3),
    Instruction::single("identity(", 0xB4),
    Instruction::single("dim(", 0xB5),
    Instruction::single("sum(", 0xB6),
    Instruction::single("prod(", 0xB7),
    Instruction::single("not(", 0xB8),
    Instruction::single("iPart(", 0xB9),
    Instruction::single("fPart(", 0xBA),
    Instruction::single("√(", 0xBC),
    Instruction::single("³√(", 0xBD),
    Instruction::single("ln(", 0xBE),
    Instruction::single("e^(", 0xBF),
    Instruction::single("log(", 0xC0),
    Instruction::single("₁₀^(", 0xC1),
    Instruction::single("sin(", 0xC2),
    Instruction::single("sin⁻¹(", 0xC3),
    Instruction::single("cos(", 0xC4),
    Instruction::single("cos⁻¹(", 0xC5),
    Instruction::single("tan(", 0xC6),
    Instruction::single("tan⁻¹(", 0xC7),
    Instruction::single("sinh(", 0xC8),
    Instruction::single("sinh⁻¹(", 0xC9),
    Instruction::single("cosh(", 0xCA),
    Instruction::single("cosh⁻¹(", 0xCB),
    Instruction::single("tanh(", 0xCC),
    Instruction::single("tanh⁻¹(", 0xCD),
    Instruction::single("If", 0xCE),
    Instruction::single("Then", 0xCF),
    Instruction::single("Else", 0xD0),
    Instruction::single("While", 0xD1),
    Instruction::single("Repeat", 0xD2),
    Instruction::single("For(", 0xD3),
    Instruction::single("End", 0xD4),
    Instruction::single("Return", 0xD5),
    Instruction::single("Lbl", 0xD6),
    Instruction::single("Goto", 0xD7),
    Instruction::single("Pause", 0xD8),
    Instruction::single("Stop", 0xD9),
    Instruction::single("IS>(", 0xDA),
    Instruction::single("DS<(", 0xDB),
    Instruction::single("Input", 0xDC),
    Instruction::single("Prompt", 0xDD),
    Instruction::single("Disp", 0xDE),
    Instruction::single("DispGraph", 0xDF),
    Instruction::single("Output(", 0xE0),
    Instruction::single("ClrHome", 0xE1),
    Instruction::single("Fill(", 0xE2),
    Instruction::single("SortA(", 0xE3),
    Instruction::single("SortD(", 0xE4),
    Instruction::single("DispTable", 0xE5),
    Instruction::single("Menu(", 0xE6),
    Instruction::single("Send(", 0xE7),
    Instruction::single("Get(", 0xE8),
    Instruction::single("PlotsOn", 0xE9),
    Instruction::single("PlotsOff", 0xEA),
    Instruction::single("ʟ", 0xEB),
    Instruction::single("Plot1(", 0xEC),
    Instruction::single("Plot2(", 0xED),
    Instruction::single("Plot3(", 0xEE),
    Instruction::single("^", 0xF0),
    Instruction::single("×√", 0xF1),
    Instruction::single("1-Var Stats", 0xF2),
    Instruction::single("2-Var Stats", 0xF3),
    Instruction::single("LinReg(a+bx)", 0xF4),
    Instruction::single("ExpReg", 0xF5),
    Instruction::single("LnReg", 0xF6),
    Instruction::single("PwrReg", 0xF7),
    Instruction::single("Med-Med", 0xF8),
    Instruction::single("QuadReg", 0xF9),
    Instruction::single("ClrList", 0xFA),
    Instruction::single("ClrTable", 0xFB),
    Instruction::single("Histogram", 0xFC),
    Instruction::single("xyLine", 0xFD),
    Instruction::single("Scatter", 0xFE),
    Instruction::single("LinReg(ax+b)", 0xFF),
    // Matrices
    Instruction::double("[A]", 0x5C, 0x00),
    Instruction::double("[B]", 0x5C, 0x01),
    Instruction::double("[C]", 0x5C, 0x02),
    Instruction::double("[D]", 0x5C, 0x03),
    Instruction::double("[E]", 0x5C, 0x04),
    Instruction::double("[F]", 0x5C, 0x05),
    Instruction::double("[G]", 0x5C, 0x06),
    Instruction::double("[H]", 0x5C, 0x07),
    Instruction::double("[I]", 0x5C, 0x08),
    Instruction::double("[J]", 0x5C, 0x09),
    // Lists
    Instruction::double("L1", 0x5D, 0x00),
    Instruction::double("L2", 0x5D, 0x01),
    Instruction::double("L3", 0x5D, 0x02),
    Instruction::double("L4", 0x5D, 0x03),
    Instruction::double("L5", 0x5D, 0x04),
    Instruction::double("L6", 0x5D, 0x05),
    // Y-vars
    Instruction::double("Y1", 0x5E, 0x10),
    Instruction::double("Y2", 0x5E, 0x11),
    Instruction::double("Y3", 0x5E, 0x12),
    Instruction::double("Y4", 0x5E, 0x13),
    Instruction::double("Y5", 0x5E, 0x14),
    Instruction::double("Y6", 0x5E, 0x15),
    Instruction::double("Y7", 0x5E, 0x16),
    Instruction::double("Y8", 0x5E, 0x17),
    Instruction::double("Y9", 0x5E, 0x18),
    Instruction::double("Y0", 0x5E, 0x19),
    // Pictures
    Instruction::double("Pic1", 0x60, 0x00),
    Instruction::double("Pic2", 0x60, 0x01),
    Instruction::double("Pic3", 0x60, 0x02),
    Instruction::double("Pic4", 0x60, 0x03),
    Instruction::double("Pic5", 0x60, 0x04),
    Instruction::double("Pic6", 0x60, 0x05),
    Instruction::double("Pic7", 0x60, 0x06),
    Instruction::double("Pic8", 0x60, 0x07),
    Instruction::double("Pic9", 0x60, 0x08),
    Instruction::double("Pic0", 0x60, 0x09),
    // Graph databases
    Instruction::double("GDB1", 0x61, 0x00),
    Instruction::double("GDB2", 0x61, 0x01),
    Instruction::double("GDB3", 0x61, 0x02),
    Instruction::double("GDB4", 0x61, 0x03),
    Instruction::double("GDB5", 0x61, 0x04),
    Instruction::double("GDB6", 0x61, 0x05),
    Instruction::double("GDB7", 0x61, 0x06),
    Instruction::double("GDB8", 0x61, 0x07),
    Instruction::double("GDB9", 0x61, 0x08),
    Instruction::double("GDB0", 0x61, 0x09),
    // Window variables
    Instruction::double("ZXscl", 0x63, 0x00),
    Instruction::double("ZYscl", 0x63, 0x01),
    Instruction::double("Xscl", 0x63, 0x02),
    Instruction::double("Yscl", 0x63, 0x03),
    Instruction::double("Xmin", 0x63, 0x0A),
    Instruction::double("Xmax", 0x63, 0x0B),
    Instruction::double("Ymin", 0x63, 0x0C),
    Instruction::double("Ymax", 0x63, 0x0D),
    // Graph format
    Instruction::double("Sequential", 0x7E, 0x00),
    Instruction::double("Simul", 0x7E, 0x01),
    Instruction::double("PolarGC", 0x7E, 0x02),
    Instruction::double("RectGC", 0x7E, 0x03),
    Instruction::double("CoordOn", 0x7E, 0x04),
    Instruction::double("CoordOff", 0x7E, 0x05),
    Instruction::double("Connected", 0x7E, 0x06),
    Instruction::double("Dot", 0x7E, 0x07),
    Instruction::double("AxesOn", 0x7E, 0x08),
    Instruction::double("AxesOff", 0x7E, 0x09),
    Instruction::double("GridOn", 0x7E, 0x0A),
    Instruction::double("GridOff", 0x7E, 0x0B),
    Instruction::double("LabelOn", 0x7E, 0x0C),
    Instruction::double("LabelOff", 0x7E, 0x0D),
    // Strings
    Instruction::double("Str1", 0xAA, 0x00),
    Instruction::double("Str2", 0xAA, 0x01),
    Instruction::double("Str3", 0xAA, 0x02),
    Instruction::double("Str4", 0xAA, 0x03),
    Instruction::double("Str5", 0xAA, 0x04),
    Instruction::double("Str6", 0xAA, 0x05),
    Instruction::double("Str7", 0xAA, 0x06),
    Instruction::double("Str8", 0xAA, 0x07),
    Instruction::double("Str9", 0xAA, 0x08),
    Instruction::double("Str0", 0xAA, 0x09),
    // 0xBB page: statistics and finance functions, lowercase letters
    Instruction::double("npv(", 0xBB, 0x00),
    Instruction::double("irr(", 0xBB, 0x01),
    Instruction::double("bal(", 0xBB, 0x02),
    Instruction::double("ΣPrn(", 0xBB, 0x03),
    Instruction::double("ΣInt(", 0xBB, 0x04),
    Instruction::double("►Nom(", 0xBB, 0x05),
    Instruction::double("►Eff(", 0xBB, 0x06),
    Instruction::double("dbd(", 0xBB, 0x07),
    Instruction::double("lcm(", 0xBB, 0x08),
    Instruction::double("gcd(", 0xBB, 0x09),
    Instruction::double("randInt(", 0xBB, 0x0A),
    Instruction::double("randBin(", 0xBB, 0x0B),
    Instruction::double("sub(", 0xBB, 0x0C),
    Instruction::double("stdDev(", 0xBB, 0x0D),
    Instruction::double("variance(", 0xBB, 0x0E),
    Instruction::double("inString(", 0xBB, 0x0F),
    Instruction::double("normalcdf(", 0xBB, 0x10),
    Instruction::double("invNorm(", 0xBB, 0x11),
    Instruction::double("tcdf(", 0xBB, 0x12),
    Instruction::double("χ²cdf(", 0xBB, 0x13),
    Instruction::double("Fcdf(", 0xBB, 0x14),
    Instruction::double("binompdf(", 0xBB, 0x15),
    Instruction::double("binomcdf(", 0xBB, 0x16),
    Instruction::double("poissonpdf(", 0xBB, 0x17),
    Instruction::double("poissoncdf(", 0xBB, 0x18),
    Instruction::double("geometpdf(", 0xBB, 0x19),
    Instruction::double("geometcdf(", 0xBB, 0x1A),
    Instruction::double("normalpdf(", 0xBB, 0x1B),
    Instruction::double("tpdf(", 0xBB, 0x1C),
    Instruction::double("χ²pdf(", 0xBB, 0x1D),
    Instruction::double("Fpdf(", 0xBB, 0x1E),
    Instruction::double("randNorm(", 0xBB, 0x1F),
    Instruction::double("a", 0xBB, 0xB0),
    Instruction::double("b", 0xBB, 0xB1),
    Instruction::double("c", 0xBB, 0xB2),
    Instruction::double("d", 0xBB, 0xB3),
    Instruction::double("e", 0xBB, 0xB4),
    Instruction::double("f", 0xBB, 0xB5),
    Instruction::double("g", 0xBB, 0xB6),
    Instruction::double("h", 0xBB, 0xB7),
    Instruction::double("i", 0xBB, 0xB8),
    Instruction::double("j", 0xBB, 0xB9),
    Instruction::double("k", 0xBB, 0xBA),
    Instruction::double("l", 0xBB, 0xBC),
    Instruction::double("m", 0xBB, 0xBD),
    Instruction::double("n", 0xBB, 0xBE),
    Instruction::double("o", 0xBB, 0xBF),
    Instruction::double("p", 0xBB, 0xC0),
    Instruction::double("q", 0xBB, 0xC1),
    Instruction::double("r", 0xBB, 0xC2),
    Instruction::double("s", 0xBB, 0xC3),
    Instruction::double("t", 0xBB, 0xC4),
    Instruction::double("u", 0xBB, 0xC5),
    Instruction::double("v", 0xBB, 0xC6),
    Instruction::double("w", 0xBB, 0xC7),
    Instruction::double("x", 0xBB, 0xC8),
    Instruction::double("y", 0xBB, 0xC9),
    Instruction::double("z", 0xBB, 0xCA),
];
/// Tokens spelling `text` one character at a time.
///
/// Every character must have a standard token whose display name is exactly
/// that character (letters, digits, space and common punctuation).
pub fn text(text: &str) -> TixpResult<Vec<Instruction>> {
    let table = InstructionTable::standard();
    let mut buf = [0u8; 4];
    text.chars()
        .map(|ch| table.require(ch.encode_utf8(&mut buf)).cloned())
        .collect()
}

/// A quoted string literal: `"`, the characters of `text`, `"`.
pub fn string(text: &str) -> TixpResult<Vec<Instruction>> {
    let body = self::text(text)?;
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(QUOTE);
    out.extend(body);
    out.push(QUOTE);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TixpError;

    #[test]
    fn named_constants_match_table() {
        let table = InstructionTable::standard();
        for constant in [STORE, QUOTE, COLON, NEWLINE, IF, THEN, ELSE, END, INPUT, PROMPT, DISP, OUTPUT, CLR_HOME, GET_KEY] {
            let entry = table.get(constant.opcode()).expect("constant missing from table");
            assert_eq!(entry.name(), constant.name());
        }
    }

    #[test]
    fn string_wraps_in_quotes() {
        let tokens = string("Hi!").expect("encodable");
        let bytes: Vec<u8> = tokens.iter().flat_map(|t| t.bytes().to_vec()).collect();
        assert_eq!(bytes, vec![0x2A, 0x48, 0xBB, 0xB8, 0x2D, 0x2A]);
    }

    #[test]
    fn lowercase_skips_bbbb() {
        let tokens = text("kl").expect("encodable");
        assert_eq!(tokens[0].bytes(), &[0xBB, 0xBA]);
        assert_eq!(tokens[1].bytes(), &[0xBB, 0xBC]);
    }

    #[test]
    fn unmapped_character_is_an_error() {
        let err = text("A~").unwrap_err();
        assert_eq!(err, TixpError::UnknownInstruction { name: "~".to_string() });
    }
}
