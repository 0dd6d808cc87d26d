#![allow(dead_code)]

use translator::{ErrorKind, Translation, translate};

pub fn make_test(src: &str, expected_xml: &str) -> Translation {
    let translation = match translate(src) {
        Ok(translation) => translation,
        Err(e) => panic!("failed to translate source: {e} at {:?}\n{src}", e.span),
    };

    pretty_assertions::assert_eq!(expected_xml, translation.to_xml());
    translation
}

pub fn expect_error(src: &str, kind: ErrorKind) {
    match translate(src) {
        Ok(translation) => panic!(
            "expected {kind:?}, translation succeeded:\n{}",
            translation.to_xml()
        ),
        Err(e) => assert_eq!(e.kind, kind, "{e} for source:\n{src}"),
    }
}

pub fn stats_of(src: &str) -> translator::stats::Stats {
    translate(src).expect("Failed to translate source code").stats
}

/// Inverse of the renderer's escaping.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Text between the tags of every `<argN ...>` element in rendered XML.
pub fn arg_texts(xml: &str) -> Vec<String> {
    xml.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<arg"))
        .map(|line| match (line.find('>'), line.rfind("</")) {
            (Some(open), Some(close)) if !line.ends_with("/>") => {
                line[open + 1..close].to_string()
            }
            _ => String::new(),
        })
        .collect()
}
