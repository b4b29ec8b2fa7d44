//! `impact-graph project` - show one project's configuration
//!
//! Besides the configured lists, shows the direct edges from the structural view:
//! which projects this one impacts and which projects impact it (self-loops left out).

use impact_graph::core::context::ImpactContext;
use impact_graph::core::error::ImpactResult;
use impact_graph::graph::DependencyGraph;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectView<'a> {
  name: &'a str,
  #[serde(flatten)]
  project: &'a impact_graph::ProjectConfig,
  impacts: Vec<String>,
  impacted_by: Vec<String>,
}

/// Run the project command
pub fn run_project(ctx: &ImpactContext, name: String, json: bool) -> ImpactResult<()> {
  let project = ctx.graph.project(&name)?;
  let structure = DependencyGraph::from_config(ctx.graph.config());
  let impacts = structure.direct_dependents(&name)?;
  let impacted_by = structure.direct_dependencies(&name)?;

  if json {
    let view = ProjectView {
      name: &name,
      project,
      impacts,
      impacted_by,
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    return Ok(());
  }

  println!("📦 {}", name);
  print_list("Included globs", &project.included_globs);
  print_list("Excluded globs", &project.excluded_globs);
  print_list("Dependent projects", &project.dependent_projects);
  print_list("Directly impacts", &impacts);
  print_list("Directly impacted by", &impacted_by);

  Ok(())
}

fn print_list(title: &str, items: &[String]) {
  println!();
  println!("{}: {}", title, items.len());
  for item in items {
    println!("  {}", item);
  }
}
