mod content;
mod node;

pub use content::{Content, InputView};
pub use node::{Element, ResponderCaptureFn};

/// Depth-first search for the element with `id`.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}
