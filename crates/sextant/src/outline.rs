//! Outline serialization: a syntax tree as indented display lines plus the
//! position index that maps each line back to source.
//!
//! ## Line format
//!
//! ```text
//! {indent}{field: }{[anonymous] }{kind} [{start_row + 1}, {start_col}] - [{end_row + 1}, {end_col}]
//! ```
//!
//! - one two-space indent per level of depth
//! - `field: ` when the parent assigns the node a field name
//! - `[anonymous] ` for unnamed tokens (punctuation, keywords)
//! - rows are shown 1-based, columns as raw 0-based byte offsets
//!
//! Existing consumers parse this text, so the row/column asymmetry is kept as is.
//! The position index records the unadjusted 0-based coordinates.
//!
//! ## Traversal
//!
//! Pre-order, with an explicit stack of frames instead of recursion so deeply
//! nested trees cannot overflow the call stack. Children are pushed in reverse
//! so the first child is popped first. Each frame carries the field name its
//! parent assigned, which is why nodes never need a parent reference.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::index::{PositionIndex, SourceRange};
use crate::tree::SyntaxNode;

/// Indentation unit, repeated once per level of depth.
pub const INDENT: &str = "  ";

/// Prefix marking anonymous nodes.
pub const ANONYMOUS_MARKER: &str = "[anonymous] ";

/// One visited node of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    /// Depth below the root (the root is 0)
    pub depth: usize,
    /// Field name assigned by the parent, if any
    pub field: Option<String>,
    /// `true` for anonymous tokens
    pub anonymous: bool,
    /// Grammar type name
    pub kind: String,
    /// Source range in raw 0-based coordinates
    pub range: SourceRange,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        if let Some(field) = &self.field {
            write!(f, "{field}: ")?;
        }
        if self.anonymous {
            f.write_str(ANONYMOUS_MARKER)?;
        }
        // Anonymous tokens can be line breaks; keep one display line per node.
        for c in self.kind.chars() {
            match c {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => write!(f, "{c}")?,
            }
        }
        let range = &self.range;
        write!(
            f,
            " [{}, {}] - [{}, {}]",
            range.start_row + 1,
            range.start_col,
            range.end_row + 1,
            range.end_col
        )
    }
}

/// Stack frame for the pre-order walk.
struct Frame<'t, N> {
    node: N,
    depth: usize,
    field: Option<&'t str>,
}

/// A serialized tree: display lines, their rendering, and the position index.
///
/// All three are built together and never change afterward.
#[derive(Debug, Clone, Serialize)]
pub struct Outline {
    lines: Vec<DisplayLine>,
    #[serde(skip)]
    rendered: Vec<String>,
    #[serde(skip)]
    index: PositionIndex,
    has_errors: bool,
}

impl Outline {
    /// Serialize the tree rooted at `root`.
    ///
    /// Runs in time and space linear in the number of nodes.
    pub fn serialize<'t, N: SyntaxNode<'t>>(root: N) -> Self {
        let mut lines = Vec::new();
        let mut has_errors = false;
        let mut stack = vec![Frame {
            node: root,
            depth: 0,
            field: None,
        }];

        while let Some(Frame { node, depth, field }) = stack.pop() {
            has_errors |= node.is_error_node();
            lines.push(DisplayLine {
                depth,
                field: field.filter(|f| !f.is_empty()).map(str::to_string),
                anonymous: !node.is_named(),
                kind: node.kind().to_string(),
                range: node.source_range(),
            });

            stack.extend(
                node.field_children()
                    .into_iter()
                    .rev()
                    .map(|(field, child)| Frame {
                        node: child,
                        depth: depth + 1,
                        field,
                    }),
            );
        }

        debug!(lines = lines.len(), has_errors, "Serialized outline");
        Self::from_lines(lines, has_errors)
    }

    fn from_lines(lines: Vec<DisplayLine>, has_errors: bool) -> Self {
        let rendered = lines.iter().map(ToString::to_string).collect();
        let index = PositionIndex::from_ranges(lines.iter().map(|line| line.range));
        Self {
            lines,
            rendered,
            index,
            has_errors,
        }
    }

    /// Display lines in emission order; line `i` is index entry `i`.
    #[must_use]
    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    /// Each display line rendered as text.
    #[must_use]
    pub fn rendered_lines(&self) -> &[String] {
        &self.rendered
    }

    /// All rendered lines joined with `\n` (no trailing newline).
    #[must_use]
    pub fn text(&self) -> String {
        self.rendered.join("\n")
    }

    /// The position index built alongside the lines.
    #[must_use]
    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    /// Number of display lines, equal to the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no lines. Never the case for a parsed tree,
    /// which always has a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any node was an `ERROR` (or, for tree-sitter trees, `MISSING`) node.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// In-memory tree used to exercise the serializer without a grammar.
    #[derive(Debug, Clone)]
    struct TestNode {
        kind: String,
        named: bool,
        range: SourceRange,
        children: Vec<(Option<String>, TestNode)>,
    }

    impl TestNode {
        fn new(kind: &str, range: [usize; 4]) -> Self {
            Self {
                kind: kind.to_string(),
                named: true,
                range: range.into(),
                children: Vec::new(),
            }
        }

        fn anonymous(mut self) -> Self {
            self.named = false;
            self
        }

        fn child(mut self, child: TestNode) -> Self {
            self.children.push((None, child));
            self
        }

        fn field(mut self, field: &str, child: TestNode) -> Self {
            self.children.push((Some(field.to_string()), child));
            self
        }

        fn count(&self) -> usize {
            1 + self.children.iter().map(|(_, c)| c.count()).sum::<usize>()
        }
    }

    impl<'t> SyntaxNode<'t> for &'t TestNode {
        fn kind(&self) -> &'t str {
            &self.kind
        }

        fn is_named(&self) -> bool {
            self.named
        }

        fn source_range(&self) -> SourceRange {
            self.range
        }

        fn field_children(&self) -> Vec<(Option<&'t str>, Self)> {
            self.children
                .iter()
                .map(|(field, child)| (field.as_deref(), child))
                .collect()
        }
    }

    fn sample_tree() -> TestNode {
        TestNode::new("module", [0, 0, 2, 0])
            .child(
                TestNode::new("function", [0, 0, 1, 10])
                    .field("name", TestNode::new("identifier", [0, 4, 0, 7]))
                    .child(TestNode::new("parameters", [0, 7, 0, 9]).anonymous()),
            )
            .child(TestNode::new("variable", [1, 0, 1, 5]))
    }

    #[test]
    fn renders_pre_order_with_fields_and_markers() {
        let tree = sample_tree();

        let outline = Outline::serialize(&tree);

        assert_eq!(
            outline.text(),
            "module [1, 0] - [3, 0]\n\
             \x20 function [1, 0] - [2, 10]\n\
             \x20   name: identifier [1, 4] - [1, 7]\n\
             \x20   [anonymous] parameters [1, 7] - [1, 9]\n\
             \x20 variable [2, 0] - [2, 5]"
        );
    }

    #[test]
    fn index_keeps_raw_rows() {
        let tree = sample_tree();

        let outline = Outline::serialize(&tree);

        assert_eq!(outline.index().range_of(0), Some(SourceRange::new(0, 0, 2, 0)));
        assert_eq!(outline.index().range_of(2), Some(SourceRange::new(0, 4, 0, 7)));
        assert_eq!(outline.index().range_of(5), None);
    }

    #[test]
    fn single_leaf_root_has_no_field_or_indent() {
        let tree = TestNode::new("document", [0, 0, 0, 0]);

        let outline = Outline::serialize(&tree);

        assert_eq!(outline.rendered_lines(), ["document [1, 0] - [1, 0]"]);
        assert_eq!(outline.len(), 1);
    }

    #[test]
    fn root_field_is_never_rendered() {
        // Even a node that would carry a field under its parent starts bare as root.
        let parent = TestNode::new("call", [0, 0, 0, 6])
            .field("function", TestNode::new("identifier", [0, 0, 0, 4]));
        let (_, child) = &parent.children[0];

        let outline = Outline::serialize(child);

        assert_eq!(outline.text(), "identifier [1, 0] - [1, 4]");
    }

    #[test]
    fn line_break_tokens_stay_on_one_line() {
        let tree = TestNode::new("program", [0, 0, 1, 0])
            .child(TestNode::new("\n", [0, 5, 1, 0]).anonymous());

        let outline = Outline::serialize(&tree);

        assert_eq!(outline.text().lines().count(), 2);
        assert_eq!(outline.rendered_lines()[1], "  [anonymous] \\n [1, 5] - [2, 0]");
    }

    #[test]
    fn error_nodes_are_outlined_like_any_other() {
        let tree = TestNode::new("module", [0, 0, 0, 4])
            .child(TestNode::new("ERROR", [0, 0, 0, 4]));

        let outline = Outline::serialize(&tree);

        assert!(outline.has_errors());
        assert_eq!(outline.rendered_lines()[1], "  ERROR [1, 0] - [1, 4]");
    }

    #[test]
    fn wide_nodes_keep_left_to_right_order() {
        let mut root = TestNode::new("list", [0, 0, 0, 200]);
        for i in 0..100 {
            root = root.child(TestNode::new(&format!("item{i}"), [0, i * 2, 0, i * 2 + 1]));
        }

        let outline = Outline::serialize(&root);

        let kinds: Vec<_> = outline.lines()[1..].iter().map(|l| l.kind.as_str()).collect();
        let expected: Vec<_> = (0..100).map(|i| format!("item{i}")).collect();
        assert_eq!(kinds, expected);
    }

    // ========================================================================
    // Property tests over generated trees
    // ========================================================================

    #[derive(Debug, Clone)]
    struct Shape {
        kind: String,
        named: bool,
        field: Option<String>,
        children: Vec<Shape>,
    }

    fn shape() -> impl Strategy<Value = Shape> {
        let leaf = ("[a-z_]{1,10}", any::<bool>(), proptest::option::of("[a-z]{1,8}")).prop_map(
            |(kind, named, field)| Shape {
                kind,
                named,
                field,
                children: Vec::new(),
            },
        );
        leaf.prop_recursive(6, 64, 4, |inner| {
            (
                "[a-z_]{1,10}",
                any::<bool>(),
                proptest::option::of("[a-z]{1,8}"),
                proptest::collection::vec(inner, 0..4),
            )
                .prop_map(|(kind, named, field, children)| Shape {
                    kind,
                    named,
                    field,
                    children,
                })
        })
    }

    /// Lay leaves out as 3-byte tokens, five per row; parents span their leaves.
    fn layout(shape: &Shape, next_leaf: &mut usize) -> TestNode {
        let children: Vec<_> = shape
            .children
            .iter()
            .map(|child| (child.field.clone(), layout(child, next_leaf)))
            .collect();

        let range = match (children.first(), children.last()) {
            (Some((_, first)), Some((_, last))) => SourceRange::new(
                first.range.start_row,
                first.range.start_col,
                last.range.end_row,
                last.range.end_col,
            ),
            _ => {
                let leaf = *next_leaf;
                *next_leaf += 1;
                let col = (leaf % 5) * 4;
                SourceRange::new(leaf / 5, col, leaf / 5, col + 3)
            }
        };

        TestNode {
            kind: shape.kind.clone(),
            named: shape.named,
            range,
            children,
        }
    }

    fn arb_tree() -> impl Strategy<Value = TestNode> {
        shape().prop_map(|shape| layout(&shape, &mut 0))
    }

    proptest! {
        #[test]
        fn line_count_matches_index_and_node_count(tree in arb_tree()) {
            let outline = Outline::serialize(&tree);

            prop_assert_eq!(outline.len(), tree.count());
            prop_assert_eq!(outline.index().len(), tree.count());
            prop_assert_eq!(outline.text().lines().count(), tree.count());
        }

        #[test]
        fn rendered_range_matches_index_entry(tree in arb_tree()) {
            let outline = Outline::serialize(&tree);

            for (i, text) in outline.rendered_lines().iter().enumerate() {
                let r = outline.index().range_of(i).expect("every line has an entry");
                let suffix = format!(
                    " [{}, {}] - [{}, {}]",
                    r.start_row + 1, r.start_col, r.end_row + 1, r.end_col
                );
                prop_assert!(text.ends_with(&suffix), "line {} = {:?}", i, text);
            }
        }

        #[test]
        fn serialization_is_deterministic(tree in arb_tree()) {
            let first = Outline::serialize(&tree);
            let second = Outline::serialize(&tree);

            prop_assert_eq!(first.text(), second.text());
            prop_assert_eq!(first.index(), second.index());
        }

        #[test]
        fn enclosing_entry_is_the_minimal_container(
            tree in arb_tree(),
            row in 0usize..16,
            col in 0usize..24,
        ) {
            let outline = Outline::serialize(&tree);
            let index = outline.index();

            let best = index
                .iter()
                .filter(|(_, r)| r.contains(row, col))
                .map(|(_, r)| (r.row_span(), r.col_span()))
                .min();

            match index.enclosing_entry(row, col) {
                Some(found) => {
                    let range = index.range_of(found).expect("entry exists");
                    prop_assert!(range.contains(row, col));
                    prop_assert_eq!(Some((range.row_span(), range.col_span())), best);
                }
                None => prop_assert_eq!(best, None),
            }
        }

        #[test]
        fn nothing_encloses_points_past_the_root(tree in arb_tree(), col in 0usize..24) {
            let outline = Outline::serialize(&tree);
            let root = outline.index().range_of(0).expect("root entry");

            prop_assert_eq!(outline.index().enclosing_entry(root.end_row + 1, col), None);
            prop_assert_eq!(
                outline.index().enclosing_entry(root.end_row, root.end_col + 1),
                None
            );
        }

        #[test]
        fn children_are_one_level_deeper_than_their_parent(tree in arb_tree()) {
            let outline = Outline::serialize(&tree);
            let lines = outline.lines();

            prop_assert_eq!(lines[0].depth, 0);
            for pair in lines.windows(2) {
                prop_assert!(pair[1].depth <= pair[0].depth + 1);
            }
        }
    }
}
