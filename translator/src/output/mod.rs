use std::fmt::{self, Write as _};

use crate::parser::{Translation, document::Document};

const INDENT: &str = "    ";

impl Translation {
    pub fn to_xml(&self) -> String {
        render_xml(&self.document)
    }
}

/// Pretty-printed XML, four spaces per level. Empty elements are self-closing.
pub fn render_xml(document: &Document) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, document);
    out
}

fn write_document(out: &mut String, document: &Document) -> fmt::Result {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;

    let root = format!("program language=\"{}\"", escape(document.language));
    if document.instructions.is_empty() {
        return writeln!(out, "<{root}/>");
    }

    writeln!(out, "<{root}>")?;
    for ins in &document.instructions {
        let open = format!("instruction order=\"{}\" opcode=\"{}\"", ins.order, ins.opcode);
        if ins.args.is_empty() {
            writeln!(out, "{INDENT}<{open}/>")?;
            continue;
        }

        writeln!(out, "{INDENT}<{open}>")?;
        for arg in &ins.args {
            let tag = format!("arg{}", arg.position);
            let kind = arg.kind.as_str();
            if arg.text.is_empty() {
                writeln!(out, "{INDENT}{INDENT}<{tag} type=\"{kind}\"/>")?;
            } else {
                writeln!(
                    out,
                    "{INDENT}{INDENT}<{tag} type=\"{kind}\">{}</{tag}>",
                    escape(&arg.text)
                )?;
            }
        }
        writeln!(out, "{INDENT}</instruction>")?;
    }
    writeln!(out, "</program>")
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
