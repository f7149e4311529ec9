//! Document tree dump for diagnostics.

use crate::widget::{Element, ElementId, SimDocument};
use std::fmt::Write;

/// Render the tree attached to the document root, one element per line.
pub fn format_tree(doc: &SimDocument) -> String {
    let mut out = String::new();
    write_element(doc, doc.root(), 0, &mut out);
    out
}

/// Dump the document tree to stdout.
pub fn print_tree(doc: &SimDocument) {
    print!("{}", format_tree(doc));
}

fn write_element(doc: &SimDocument, id: ElementId, depth: usize, out: &mut String) {
    let Some(element) = doc.get(id) else { return };
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), describe(element));
    for &child in &element.children {
        write_element(doc, child, depth + 1, out);
    }
}

fn describe(element: &Element) -> String {
    let mut line = String::from(element.kind.as_str());
    for class in &element.classes {
        line.push('.');
        line.push_str(class);
    }
    if !element.attributes.is_empty() {
        let attrs: Vec<String> = element
            .attributes
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, v))
            .collect();
        let _ = write!(line, " [{}]", attrs.join(" "));
    }
    if !element.styles.is_empty() {
        let styles: Vec<String> = element
            .styles
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        let _ = write!(line, " style({})", styles.join("; "));
    }
    let _ = write!(
        line,
        " @({},{}) {}x{}",
        element.position.left, element.position.top, element.size.width, element.size.height
    );
    if let Some(text) = &element.text {
        let _ = write!(line, " {:?}", text);
    }
    line
}
