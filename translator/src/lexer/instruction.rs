use phf::phf_map;

/// Grammatical role an operand token has to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Var,
    Symb,
    Label,
    Type,
}

impl std::fmt::Display for OperandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperandKind::Var => "variable",
            OperandKind::Symb => "symbol",
            OperandKind::Label => "label",
            OperandKind::Type => "type",
        };
        f.write_str(name)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    MOVE,
    CREATEFRAME,
    PUSHFRAME,
    POPFRAME,
    DEFVAR,
    CALL,
    RETURN,
    PUSHS,
    POPS,
    ADD,
    SUB,
    MUL,
    IDIV,
    LT,
    GT,
    EQ,
    AND,
    OR,
    NOT,
    INT2CHAR,
    STRI2INT,
    READ,
    WRITE,
    CONCAT,
    STRLEN,
    GETCHAR,
    SETCHAR,
    TYPE,
    LABEL,
    JUMP,
    JUMPIFEQ,
    JUMPIFNEQ,
    EXIT,
    DPRINT,
    BREAK,
}

static OPCODE: phf::Map<&'static str, Opcode> = phf_map! {
    "MOVE" => Opcode::MOVE,
    "CREATEFRAME" => Opcode::CREATEFRAME,
    "PUSHFRAME" => Opcode::PUSHFRAME,
    "POPFRAME" => Opcode::POPFRAME,
    "DEFVAR" => Opcode::DEFVAR,
    "CALL" => Opcode::CALL,
    "RETURN" => Opcode::RETURN,
    "PUSHS" => Opcode::PUSHS,
    "POPS" => Opcode::POPS,
    "ADD" => Opcode::ADD,
    "SUB" => Opcode::SUB,
    "MUL" => Opcode::MUL,
    "IDIV" => Opcode::IDIV,
    "LT" => Opcode::LT,
    "GT" => Opcode::GT,
    "EQ" => Opcode::EQ,
    "AND" => Opcode::AND,
    "OR" => Opcode::OR,
    "NOT" => Opcode::NOT,
    "INT2CHAR" => Opcode::INT2CHAR,
    "STRI2INT" => Opcode::STRI2INT,
    "READ" => Opcode::READ,
    "WRITE" => Opcode::WRITE,
    "CONCAT" => Opcode::CONCAT,
    "STRLEN" => Opcode::STRLEN,
    "GETCHAR" => Opcode::GETCHAR,
    "SETCHAR" => Opcode::SETCHAR,
    "TYPE" => Opcode::TYPE,
    "LABEL" => Opcode::LABEL,
    "JUMP" => Opcode::JUMP,
    "JUMPIFEQ" => Opcode::JUMPIFEQ,
    "JUMPIFNEQ" => Opcode::JUMPIFNEQ,
    "EXIT" => Opcode::EXIT,
    "DPRINT" => Opcode::DPRINT,
    "BREAK" => Opcode::BREAK,
};

/// Looks the opcode up case-insensitively.
pub fn parse_opcode(s: &str) -> Option<Opcode> {
    OPCODE.get(s.to_ascii_uppercase().as_str()).copied()
}

impl Opcode {
    pub fn operands(self) -> &'static [OperandKind] {
        use OperandKind as OK;
        match self {
            Opcode::CREATEFRAME
            | Opcode::PUSHFRAME
            | Opcode::POPFRAME
            | Opcode::RETURN
            | Opcode::BREAK => &[],
            Opcode::DEFVAR | Opcode::POPS => &[OK::Var],
            Opcode::CALL | Opcode::LABEL | Opcode::JUMP => &[OK::Label],
            Opcode::PUSHS | Opcode::WRITE | Opcode::EXIT | Opcode::DPRINT => &[OK::Symb],
            Opcode::MOVE | Opcode::NOT | Opcode::INT2CHAR | Opcode::STRLEN | Opcode::TYPE => {
                &[OK::Var, OK::Symb]
            }
            Opcode::READ => &[OK::Var, OK::Type],
            Opcode::ADD
            | Opcode::SUB
            | Opcode::MUL
            | Opcode::IDIV
            | Opcode::LT
            | Opcode::GT
            | Opcode::EQ
            | Opcode::AND
            | Opcode::OR
            | Opcode::STRI2INT
            | Opcode::CONCAT
            | Opcode::GETCHAR
            | Opcode::SETCHAR => &[OK::Var, OK::Symb, OK::Symb],
            Opcode::JUMPIFEQ | Opcode::JUMPIFNEQ => &[OK::Label, OK::Symb, OK::Symb],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::MOVE => "MOVE",
            Opcode::CREATEFRAME => "CREATEFRAME",
            Opcode::PUSHFRAME => "PUSHFRAME",
            Opcode::POPFRAME => "POPFRAME",
            Opcode::DEFVAR => "DEFVAR",
            Opcode::CALL => "CALL",
            Opcode::RETURN => "RETURN",
            Opcode::PUSHS => "PUSHS",
            Opcode::POPS => "POPS",
            Opcode::ADD => "ADD",
            Opcode::SUB => "SUB",
            Opcode::MUL => "MUL",
            Opcode::IDIV => "IDIV",
            Opcode::LT => "LT",
            Opcode::GT => "GT",
            Opcode::EQ => "EQ",
            Opcode::AND => "AND",
            Opcode::OR => "OR",
            Opcode::NOT => "NOT",
            Opcode::INT2CHAR => "INT2CHAR",
            Opcode::STRI2INT => "STRI2INT",
            Opcode::READ => "READ",
            Opcode::WRITE => "WRITE",
            Opcode::CONCAT => "CONCAT",
            Opcode::STRLEN => "STRLEN",
            Opcode::GETCHAR => "GETCHAR",
            Opcode::SETCHAR => "SETCHAR",
            Opcode::TYPE => "TYPE",
            Opcode::LABEL => "LABEL",
            Opcode::JUMP => "JUMP",
            Opcode::JUMPIFEQ => "JUMPIFEQ",
            Opcode::JUMPIFNEQ => "JUMPIFNEQ",
            Opcode::EXIT => "EXIT",
            Opcode::DPRINT => "DPRINT",
            Opcode::BREAK => "BREAK",
        }
    }

    /// Jumps whose direction is tracked in the statistics. `CALL` is not one of them.
    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::JUMP | Opcode::JUMPIFEQ | Opcode::JUMPIFNEQ)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
