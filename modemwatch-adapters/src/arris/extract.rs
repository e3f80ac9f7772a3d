//! Row extraction from status page markup.
//!
//! The modem renders every status section as an HTML table. This stage walks
//! the parsed document, collects one [`RowGroup`] per table body, and
//! flattens each row's nested markup into the ordered list of text tokens
//! the section decoders consume. It is schema-agnostic: it knows which text
//! looks meaningful, not what any section should contain, so arity checks
//! happen later in [`decode`](crate::arris::decode).

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// One table row, reduced to its meaningful text tokens.
pub type Row = Vec<String>;

/// All rows extracted from a single table body.
///
/// Corresponds to one logical section of the status page; blank rows are
/// already dropped. At this stage a group is just ordered text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowGroup {
    /// Rows in document order.
    pub rows: Vec<Row>,
}

/// Tag that groups the rows of one status section.
///
/// The HTML5 parsing algorithm inserts an implicit `tbody` around bare
/// `tr` rows inside a `table`, which is exactly what the device emits, so
/// every table with rows surfaces as one group.
const GROUP_TAG: &str = "tbody";

/// Tag that delimits a single row within a group.
const ROW_TAG: &str = "tr";

/// Decorative wrapper tags dropped during token extraction.
///
/// This is a closed, hand-curated list: any wrapper tag NOT listed here
/// leaks its tag name into the row's token stream, so layout changes on the
/// device belong in this list rather than in the traversal.
const NOISE_TAGS: &[&str] = &["b", "font", "td"];

/// Collect every row group in the document, in traversal order.
pub fn row_groups(html: &Html) -> Vec<RowGroup> {
    let mut groups = Vec::new();
    collect_groups(html.tree.root(), &mut groups);
    groups
}

fn collect_groups(node: NodeRef<'_, Node>, groups: &mut Vec<RowGroup>) {
    for child in node.children() {
        collect_groups(child, groups);

        // Empty groups are kept; the decoder reports them rather than
        // skipping silently.
        if is_element(child, GROUP_TAG) {
            groups.push(extract_group(child));
        }
    }
}

/// Collect the rows of a single group element.
fn extract_group(tbody: NodeRef<'_, Node>) -> RowGroup {
    let mut rows = Vec::new();
    collect_rows(tbody, &mut rows);
    RowGroup { rows }
}

fn collect_rows(node: NodeRef<'_, Node>, rows: &mut Vec<Row>) {
    for child in node.children() {
        collect_rows(child, rows);

        if !is_element(child, ROW_TAG) {
            continue;
        }

        // Blank rows are structural spacers in the source markup.
        let row = extract_row(child);
        if !row.is_empty() {
            rows.push(row);
        }
    }
}

/// Flatten one row element into its ordered text tokens.
///
/// Every descendant is visited, subtree before node: text nodes contribute
/// their trimmed content, elements contribute their tag name unless listed
/// in [`NOISE_TAGS`]. Empty tokens are discarded. The result is the row's
/// meaningful text in document order, independent of how deeply each value
/// is nested inside formatting wrappers.
fn extract_row(tr: NodeRef<'_, Node>) -> Row {
    let mut row = Vec::new();
    collect_tokens(tr, &mut row);
    row
}

fn collect_tokens(node: NodeRef<'_, Node>, row: &mut Vec<String>) {
    for child in node.children() {
        collect_tokens(child, row);

        let token = match child.value() {
            Node::Text(text) => text.text.trim(),
            Node::Element(element) => element.name(),
            _ => continue,
        };
        if token.is_empty() || NOISE_TAGS.contains(&token) {
            continue;
        }

        row.push(token.to_string());
    }
}

fn is_element(node: NodeRef<'_, Node>, name: &str) -> bool {
    node.value().as_element().is_some_and(|e| e.name() == name)
}
