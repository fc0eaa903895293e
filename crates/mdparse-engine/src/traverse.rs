//! Depth-first tree traversal.
//!
//! Visiting is pre-order: a node is shown to the visitor first, and its
//! children are visited (at `depth + 1`) only when the visitor returns `true`.
//! The walk keeps its own explicit stack, so traversal depth is not limited
//! by the call stack.

use crate::element::Element;

/// Decides, per node, whether to descend into its children.
pub trait Visitor {
    fn visit(&mut self, element: &Element, depth: usize) -> bool;
}

impl<F> Visitor for F
where
    F: FnMut(&Element, usize) -> bool,
{
    fn visit(&mut self, element: &Element, depth: usize) -> bool {
        self(element, depth)
    }
}

/// Visits `root` at depth 0 and then, as the visitor allows, its descendants.
pub fn traverse<V: Visitor + ?Sized>(root: &Element, visitor: &mut V) {
    walk(vec![(root, 0)], visitor);
}

/// Visits every element of a sibling sequence at depth 0, left to right,
/// each followed by its own descendants.
pub fn traverse_list<V: Visitor + ?Sized>(elements: &[Element], visitor: &mut V) {
    walk(elements.iter().rev().map(|el| (el, 0)).collect(), visitor);
}

fn walk<V: Visitor + ?Sized>(mut stack: Vec<(&Element, usize)>, visitor: &mut V) {
    while let Some((element, depth)) = stack.pop() {
        if visitor.visit(element, depth) {
            stack.extend(element.children().iter().rev().map(|child| (child, depth + 1)));
        }
    }
}
