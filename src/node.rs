//! Hierarchy inspection commands: `soc node` and `soc leaf-text`.

use anyhow::{Context, Result};

use soc_index_core::{HierarchyNode, SocCode};

use crate::catalog::Catalog;

/// CLI entry point for `soc node`.
///
/// Fails on a malformed code or one missing from the hierarchy.
pub fn run_node(catalog: &Catalog, code: &str) -> Result<()> {
    let code = SocCode::new(code).with_context(|| format!("invalid code {:?}", code))?;
    let hierarchy = &catalog.hierarchy;
    let node = hierarchy.by_code(code.as_str())?;

    println!("--- {} ---", node);
    println!("code:         {}", node.soc_code());
    println!("level:        {}", node.group_level());
    match hierarchy.parent(node) {
        Some(parent) => println!("parent:       {}", parent),
        None => println!("parent:       (none)"),
    }
    println!("title:        {}", node.group_title());
    println!("description:  {}", node.group_description());

    if node.soc_code().is_unit() {
        println!(
            "quals:        {}",
            node.qualifications().unwrap_or("(none)")
        );
        print_list("Tasks", node.tasks());
        print_list("Job titles", node.job_titles());
    }

    let children: Vec<&HierarchyNode> = hierarchy.children(node).collect();
    if !children.is_empty() {
        println!();
        println!("--- Children ({}) ---", children.len());
        for child in children {
            println!("  {}", child);
        }
    }

    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    println!();
    println!("--- {} ({}) ---", heading, items.len());
    for item in items {
        println!("  {}", item);
    }
}

/// CLI entry point for `soc leaf-text`: one JSON object per line.
pub fn run_leaf_text(catalog: &Catalog, code: Option<&str>) -> Result<()> {
    for row in catalog.hierarchy.all_leaf_text() {
        if code.is_some_and(|c| c != row.code) {
            continue;
        }
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}
