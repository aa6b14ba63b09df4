use ptree::{print_tree, TreeBuilder};
use singly::List;
use std::fmt::Display;

/// Each node hangs below its predecessor, so the tree reads as the chain.
fn build_tree<T: Display>(tree: &mut TreeBuilder, list: &List<T>) {
    let mut depth = 0;
    for (position, value) in list.iter().enumerate() {
        tree.begin_child(format!("[{}] {}", position, value));
        depth += 1;
    }
    for _ in 0..depth {
        tree.end_child();
    }
}

pub fn print_list<T: Display>(list: &List<T>) -> std::io::Result<()> {
    let mut tree = TreeBuilder::new(format!("List ({})", list.length()));
    build_tree(&mut tree, list);
    let tree = tree.build();
    print_tree(&tree)
}
