//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `orgchart_core` linkage.
//! - Print the sample org tree for quick local sanity checks.

use orgchart_core::{ChartService, HierarchyNode, NodeKind};

fn main() {
    let mut service = ChartService::default();
    service.load_sample();

    println!("orgchart_core version={}", orgchart_core::core_version());
    println!("people={}", service.people().len());

    match service.build_tree() {
        Ok(tree) => {
            println!("tree people={}", tree.person_count());
            print_node(&tree, 0);
        }
        Err(err) => eprintln!("tree derivation failed: {err}"),
    }
}

fn print_node(node: &HierarchyNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.kind {
        NodeKind::Person => println!("{indent}{} ({})", node.name, node.position),
        NodeKind::Team => println!("{indent}[{}]", node.name),
        NodeKind::VirtualRoot => println!("{indent}*"),
    }
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
