//! List views command implementation

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::adapters::host::Document;
use crate::adapters::scene::load_scene_manifest;
use crate::core::sanitize::fbx_file_name;
use crate::domain::view::{Element, ResolvedView};
use clap::Args;

/// Arguments for the list-views command
#[derive(Args, Debug)]
pub struct ListViewsArgs {
    /// Scene manifest describing the document
    #[arg(short, long)]
    pub document: String,
}

impl ListViewsArgs {
    /// Execute the list-views command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let document = match load_scene_manifest(&self.document) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Failed to load scene document: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let lines = view_lines(&document);
        println!("3D views in '{}':", document.title());
        if lines.is_empty() {
            println!("  (none)");
        }
        for line in &lines {
            println!("  {line}");
        }

        Ok(EXIT_SUCCESS)
    }
}

/// One line per 3D view: id, name, template flag and derived file name
fn view_lines(document: &dyn Document) -> Vec<String> {
    document
        .collect_where(&|e: &Element| e.is_view_3d())
        .into_iter()
        .map(|element| {
            if element.is_template() {
                format!("{}  {}  [template, not exported]", element.id, element.name)
            } else {
                let file_name = fbx_file_name(&ResolvedView::from(element));
                format!("{}  {}  -> {}", element.id, element.name, file_name)
            }
        })
        .collect()
}
