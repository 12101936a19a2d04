use insta::assert_snapshot;
use wormhole_config::TextWrapper;

const PARAGRAPH: &str = "Wormhole connects many blockchains. Tokens locked on the origin chain are minted as wrapped tokens on every other chain, and burning them releases the originals. Configure exactly one LOCKING chain per deployment.";

fn strip(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

#[test]
fn test_paragraph_snapshot() {
    assert_snapshot!(TextWrapper::wrap(PARAGRAPH, 30), @r"
    Wormhole connects many blockc-
    hains. Tokens locked on the
    origin chain are minted as
    wrapped tokens on every
    other chain, and burning
    them releases the originals.
    Configure exactly one
    LOCKING chain per deployment.
    ");
}

#[test]
fn test_lines_fit_and_content_is_kept() {
    for width in [12, 16, 20, 25, 30, 40, 50, 60, 80] {
        let wrapped = TextWrapper::wrap(PARAGRAPH, width);
        for line in wrapped.lines() {
            assert!(
                line.chars().count() <= width as usize,
                "line {line:?} is wider than {width}"
            );
        }
        assert_eq!(strip(&wrapped), strip(PARAGRAPH), "content changed at width {width}");
    }
}

#[test]
fn test_blank_lines_survive() {
    let text = "First paragraph line\n\nSecond paragraph that goes on for a while";
    assert_eq!(
        TextWrapper::wrap(text, 20),
        "First paragraph\nline\n\nSecond paragraph\nthat goes on for a\nwhile"
    );
}

#[test]
fn test_wrap_default_width() {
    let text = "short text stays on one line";
    assert_eq!(TextWrapper::wrap_default(text), text);
    assert_eq!(TextWrapper::wrap(PARAGRAPH, 0), PARAGRAPH);
}
