//! Post-order release of element trees.
//!
//! The compiler-generated drop glue for `Vec<Element>` recurses once per tree
//! level, which overflows the stack on pathologically deep input (thousands of
//! nested `>` markers, for example). [`Element`]'s `Drop` instead walks the
//! subtree with an explicit stack and frees every descendant before the node
//! that owned it. A shared note body joins the walk when the last reference
//! to it goes away.

use std::sync::Arc;

use crate::element::{Content, Element};

impl Element {
    /// Takes everything this node owns below it, including a note body held
    /// by no other reference.
    fn detach_descendants(&mut self) -> Vec<Element> {
        let mut children = std::mem::take(&mut self.children);
        if let Content::NoteRef(note) = &mut self.content {
            if let Some(body) = note.body.take().and_then(Arc::into_inner) {
                children.extend(body);
            }
        }
        children
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        let detached = self.detach_descendants();
        if detached.is_empty() {
            return;
        }

        // (node, children already detached)
        let mut stack: Vec<(Element, bool)> = detached
            .into_iter()
            .rev()
            .map(|child| (child, false))
            .collect();

        while let Some((mut node, expanded)) = stack.pop() {
            if expanded {
                drop(node);
                continue;
            }
            let children = node.detach_descendants();
            if children.is_empty() {
                // Leaf: its own drop only releases the payload.
                drop(node);
                continue;
            }
            stack.push((node, true));
            stack.extend(children.into_iter().rev().map(|child| (child, false)));
        }
    }
}
