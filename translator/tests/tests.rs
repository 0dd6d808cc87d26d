mod common;

use std::fs;

use common::{arg_texts, expect_error, make_test, stats_of, unescape};
use tempfile::tempdir;
use translator::{
    Error, ErrorKind,
    lexer::instruction::Opcode,
    parser::document::ArgKind,
    stats::{StatsItem, StatsTarget, write_stats},
    translate,
};

#[test]
fn single_defvar() {
    let translation = make_test(
        ".IPPcode24\nDEFVAR GF@x\n",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<program language="IPPcode24">
    <instruction order="1" opcode="DEFVAR">
        <arg1 type="var">GF@x</arg1>
    </instruction>
</program>
"#,
    );

    let ins = &translation.document.instructions[0];
    assert_eq!(ins.opcode, Opcode::DEFVAR);
    assert_eq!(ins.args[0].kind, ArgKind::Var);
    assert_eq!(ins.args[0].text, "GF@x");
}

#[test]
fn whole_program() {
    make_test(
        "
# factorial-ish
.IPPcode24   # header comment
DEFVAR GF@counter
move GF@counter int@0x0A
LABEL $loop
  WRITE string@Counter:\\032<&>
  SUB GF@counter GF@counter int@+1
  JUMPIFNEQ $loop GF@counter int@0
READ LF@in bool
type TF@t nil@nil

CREATEFRAME
EXIT int@0o7",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<program language="IPPcode24">
    <instruction order="1" opcode="DEFVAR">
        <arg1 type="var">GF@counter</arg1>
    </instruction>
    <instruction order="2" opcode="MOVE">
        <arg1 type="var">GF@counter</arg1>
        <arg2 type="int">0x0A</arg2>
    </instruction>
    <instruction order="3" opcode="LABEL">
        <arg1 type="label">$loop</arg1>
    </instruction>
    <instruction order="4" opcode="WRITE">
        <arg1 type="string">Counter:\032&lt;&amp;&gt;</arg1>
    </instruction>
    <instruction order="5" opcode="SUB">
        <arg1 type="var">GF@counter</arg1>
        <arg2 type="var">GF@counter</arg2>
        <arg3 type="int">+1</arg3>
    </instruction>
    <instruction order="6" opcode="JUMPIFNEQ">
        <arg1 type="label">$loop</arg1>
        <arg2 type="var">GF@counter</arg2>
        <arg3 type="int">0</arg3>
    </instruction>
    <instruction order="7" opcode="READ">
        <arg1 type="var">LF@in</arg1>
        <arg2 type="type">bool</arg2>
    </instruction>
    <instruction order="8" opcode="TYPE">
        <arg1 type="var">TF@t</arg1>
        <arg2 type="nil">nil</arg2>
    </instruction>
    <instruction order="9" opcode="CREATEFRAME"/>
    <instruction order="10" opcode="EXIT">
        <arg1 type="int">0o7</arg1>
    </instruction>
</program>
"#,
    );
}

#[test]
fn header_only() {
    make_test(
        "\n\n.ippcode24",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<program language=\"IPPcode24\"/>\n",
    );
}

#[test]
fn orders_have_no_gaps() {
    let translation = translate(
        ".IPPcode24\n\nBREAK\n# only a comment\n\nCREATEFRAME\nPUSHFRAME\n\n\nPOPFRAME\n",
    )
    .unwrap();

    let orders: Vec<_> = translation
        .document
        .instructions
        .iter()
        .map(|ins| ins.order)
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);
    assert_eq!(translation.stats.instructions, 4);
}

#[test]
fn header_errors() {
    expect_error("DEFVAR GF@x\n", ErrorKind::Header);
    expect_error("", ErrorKind::Header);
    expect_error("# nothing but a comment\n", ErrorKind::Header);
    expect_error(".IPPcode23\nBREAK\n", ErrorKind::Header);
    expect_error(".IPPcode24 BREAK\n", ErrorKind::Header);
    expect_error(".IPPcode24\n.IPPcode24\n", ErrorKind::Header);
    expect_error(".IPPcode24\nWRITE .IPPcode24\n", ErrorKind::Header);
}

#[test]
fn failing_sources_exit_codes() {
    let cases = [
        ("DEFVAR GF@x\n", 21),
        (".IPPcode24\n.IPPcode24\n", 21),
        (".IPPcode24\nNOPE\n", 22),
        (".IPPcode24\nWRITE int@abc\n", 23),
        (".IPPcode24\nMOVE GF@x\n", 23),
    ];
    for (src, code) in cases {
        let err = Error::from(translate(src).unwrap_err());
        assert_eq!(err.exit_code(), code, "{src:?}");
    }
}

#[test]
fn unknown_instructions() {
    expect_error(".IPPcode24\nNOPE\n", ErrorKind::UnknownInstruction);
    expect_error(".IPPcode24\nNOPE GF@x int@1\n", ErrorKind::UnknownInstruction);
    expect_error(".IPPcode24\nGF@x\n", ErrorKind::UnknownInstruction);
    expect_error(".IPPcode24\nint@1 DEFVAR\n", ErrorKind::UnknownInstruction);
    expect_error(".IPPcode24\nint\n", ErrorKind::UnknownInstruction);
}

#[test]
fn malformed_literals() {
    expect_error(".IPPcode24\nADD GF@r int@abc GF@s\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nWRITE string@bad\\escape\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nWRITE bool@True\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nDEFVAR XF@x\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nDEFVAR GF@9lives\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nJUMP lab.el\n", ErrorKind::Syntax);
}

#[test]
fn operand_count_and_kind() {
    // too few
    expect_error(".IPPcode24\nMOVE GF@x\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nDEFVAR", ErrorKind::Syntax);
    // too many
    expect_error(".IPPcode24\nBREAK GF@x\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nDEFVAR GF@x GF@y\n", ErrorKind::Syntax);
    // wrong kind
    expect_error(".IPPcode24\nDEFVAR int@1\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nREAD GF@x string@int\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nJUMP GF@x\n", ErrorKind::Syntax);
    expect_error(".IPPcode24\nWRITE label\n", ErrorKind::Syntax);
}

#[test]
fn arguments_follow_the_table() {
    let translation = translate(
        ".IPPcode24\nJUMPIFEQ end GF@a string@b\nREAD GF@x string\nLABEL end\nSTRLEN GF@n GF@s\n",
    )
    .unwrap();

    for ins in &translation.document.instructions {
        assert_eq!(ins.args.len(), ins.opcode.operands().len(), "{}", ins.opcode);
        let positions: Vec<_> = ins.args.iter().map(|a| a.position).collect();
        assert_eq!(positions, (1..=ins.args.len()).collect::<Vec<_>>());
    }
}

#[test]
fn type_keywords_as_labels() {
    make_test(
        ".IPPcode24\nLABEL int\nJUMP string\n",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<program language="IPPcode24">
    <instruction order="1" opcode="LABEL">
        <arg1 type="label">int</arg1>
    </instruction>
    <instruction order="2" opcode="JUMP">
        <arg1 type="label">string</arg1>
    </instruction>
</program>
"#,
    );
}

#[test]
fn escaped_text_round_trips() {
    let src = ".IPPcode24\nWRITE string@<tag>&amp;\"quoted\"'s\nWRITE string@\\092\\035\nPUSHS string@\n";
    let translation = translate(src).unwrap();
    let xml = translation.to_xml();

    let originals: Vec<_> = translation
        .document
        .instructions
        .iter()
        .flat_map(|ins| ins.args.iter().map(|a| a.text.clone()))
        .collect();
    let rendered: Vec<_> = arg_texts(&xml).iter().map(|t| unescape(t)).collect();

    assert_eq!(originals, rendered);
    assert_eq!(originals[0], "<tag>&amp;\"quoted\"'s");
}

#[test]
fn backward_jump() {
    let stats = stats_of(".IPPcode24\nLABEL L1\nJUMP L1\n");
    assert_eq!(stats.back_jumps, 1);
    assert_eq!(stats.forward_jumps, 0);
    assert_eq!(stats.bad_jumps, 0);
}

#[test]
fn forward_jump() {
    let stats = stats_of(".IPPcode24\nJUMP L2\nLABEL L2\n");
    assert_eq!(stats.back_jumps, 0);
    assert_eq!(stats.forward_jumps, 1);
    assert_eq!(stats.bad_jumps, 0);
}

#[test]
fn jump_statistics() {
    let stats = stats_of(
        "\
.IPPcode24
JUMP later         # forward
JUMPIFEQ nowhere int@1 int@1  # bad
LABEL start
LABEL start
JUMPIFNEQ start bool@true bool@false  # backward
CALL later         # not a jump
LABEL later
JUMP later         # backward
JUMP start         # backward
",
    );

    assert_eq!(stats.labels, 2);
    assert_eq!(stats.back_jumps, 3);
    assert_eq!(stats.forward_jumps, 1);
    assert_eq!(stats.bad_jumps, 1);
    assert_eq!(stats.jumps(), 5);
    assert_eq!(stats.comments, 6);
    assert_eq!(stats.instructions, 9);
    assert_eq!(stats.frequent(), "JUMP,LABEL,JUMPIFEQ,JUMPIFNEQ,CALL");
}

#[test]
fn writes_statistics_files() {
    let tmpdir = tempdir().unwrap();
    let dir = tmpdir.path();

    let stats = stats_of(
        ".IPPcode24 # hi\nLABEL a\nJUMP a\nJUMP b\nWRITE int@1\nWRITE int@2\n",
    );

    let first = StatsTarget {
        path: dir.join("first.txt"),
        items: vec![
            StatsItem::Loc,
            StatsItem::Comments,
            StatsItem::Print("---".to_string()),
            StatsItem::Eol,
            StatsItem::Frequent,
            StatsItem::Loc,
        ],
    };
    let second = StatsTarget {
        path: dir.join("second.txt"),
        items: vec![
            StatsItem::Labels,
            StatsItem::Jumps,
            StatsItem::FwJumps,
            StatsItem::BackJumps,
            StatsItem::BadJumps,
        ],
    };

    write_stats(&[first, second], &stats).unwrap();

    pretty_assertions::assert_eq!(
        fs::read_to_string(dir.join("first.txt")).unwrap(),
        "5\n1\n---\n\nJUMP,WRITE,LABEL\n5\n"
    );
    pretty_assertions::assert_eq!(
        fs::read_to_string(dir.join("second.txt")).unwrap(),
        "1\n2\n0\n1\n1\n"
    );
}

#[test]
fn duplicate_statistics_file() {
    let tmpdir = tempdir().unwrap();
    let path = tmpdir.path().join("stats.txt");

    let targets = [StatsTarget::new(&path), StatsTarget::new(&path)];
    let err = write_stats(&targets, &stats_of(".IPPcode24\n")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::OutputIo);
    assert_eq!(err.exit_code(), 12);
    assert!(!path.exists());
}

#[test]
fn unwritable_statistics_file() {
    let tmpdir = tempdir().unwrap();
    let target = StatsTarget {
        path: tmpdir.path().join("missing-dir").join("stats.txt"),
        items: vec![StatsItem::Loc],
    };

    let err = write_stats(&[target], &stats_of(".IPPcode24\n")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutputIo);
}
