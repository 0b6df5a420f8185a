//! Command implementations.
//!
//! Every command writes its user-facing output to `out`; logging goes
//! through the `log` facade.

use crate::cli::Commands;
use anyhow::{Context, Result};
use famtree::export::DotOptions;
use famtree::{import_snapshots, load_snapshot_file, FamilyTree, Node, NodeId, PersonUpdate};
use log::{info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run a command against stdout.
pub fn execute(command: Commands) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(command, &mut out)
}

/// Run a command, writing its output to `out`.
pub fn run(command: Commands, out: &mut impl Write) -> Result<ExitCode> {
    match command {
        Commands::Merge { inputs, output } => cmd_merge(&inputs, &output, out),
        Commands::Render {
            inputs,
            output,
            style,
        } => cmd_render(&inputs, output.as_deref(), style.as_deref(), out),
        Commands::Check { inputs } => cmd_check(&inputs, out),
        Commands::AddPerson {
            file,
            name,
            gender,
            birth,
            death,
        } => edit_file(&file, out, |tree, out| {
            let id = tree.create_person(&name, gender, birth, death);
            writeln!(out, "{id}")?;
            Ok(())
        }),
        Commands::UpdatePerson {
            file,
            name,
            id,
            gender,
            birth,
            death,
        } => {
            let mut update = PersonUpdate::new();
            if let Some(gender) = gender {
                update = update.gender(gender);
            }
            if let Some(year) = birth {
                update = update.birth_year(year);
            }
            if let Some(year) = death {
                update = update.death_year(year);
            }
            edit_file(&file, out, |tree, out| {
                let id = tree
                    .update_person(&name, update, id)
                    .with_context(|| format!("Failed to update '{name}'"))?;
                writeln!(out, "{id}")?;
                Ok(())
            })
        }
        Commands::Marry {
            file,
            spouse1,
            spouse2,
            children,
        } => edit_file(&file, out, |tree, out| {
            warn_unknown_people(tree, [spouse1, spouse2].iter().chain(&children));
            let id = tree.create_marriage(spouse1, spouse2, Some(children));
            writeln!(out, "{id}")?;
            Ok(())
        }),
        Commands::SetChildren {
            file,
            spouse1,
            spouse2,
            children,
        } => edit_file(&file, out, |tree, out| {
            warn_unknown_people(tree, &children);
            match tree.update_marriage(spouse1, spouse2, Some(children)) {
                Some(id) => writeln!(out, "{id}")?,
                None => writeln!(out, "No marriage between {spouse1} and {spouse2}")?,
            }
            Ok(())
        }),
        Commands::Delete { file, id } => edit_file(&file, out, |tree, out| {
            tree.delete_node(id)
                .with_context(|| format!("Failed to delete {id}"))?;
            writeln!(out, "Deleted {id}")?;
            Ok(())
        }),
    }
}

fn cmd_merge(inputs: &[PathBuf], output: &Path, out: &mut impl Write) -> Result<ExitCode> {
    let tree = load_inputs(inputs)?;
    tree.save_snapshot_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    writeln!(
        out,
        "Merged {} snapshots: {} people, {} marriages, {} edges",
        inputs.len(),
        tree.person_count(),
        tree.marriage_count(),
        tree.edge_count()
    )?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_render(
    inputs: &[PathBuf],
    output: Option<&Path>,
    style: Option<&Path>,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let options = match style {
        Some(path) => load_style(path)?,
        None => DotOptions::default(),
    };
    let tree = load_inputs(inputs)?;
    let dot = tree.export_dot_styled(&options);

    match output {
        Some(path) => {
            std::fs::write(path, dot)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote DOT to {}", path.display());
        }
        None => out.write_all(dot.as_bytes())?,
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(inputs: &[PathBuf], out: &mut impl Write) -> Result<ExitCode> {
    let tree = load_inputs(inputs)?;
    writeln!(
        out,
        "people: {}, marriages: {}, edges: {}",
        tree.person_count(),
        tree.marriage_count(),
        tree.edge_count()
    )?;

    if tree.is_connected() {
        writeln!(out, "connected: yes")?;
        return Ok(ExitCode::SUCCESS);
    }

    let components = tree.connected_components();
    writeln!(out, "connected: no ({} components)", components.len())?;
    for (index, component) in components.iter().enumerate().skip(1) {
        let names: Vec<&str> = component
            .iter()
            .filter_map(|id| tree.person(*id).ok())
            .map(|p| p.name.as_str())
            .collect();
        writeln!(
            out,
            "  detached #{index}: {} nodes [{}]",
            component.len(),
            names.join(", ")
        )?;
    }
    for id in tree.dangling_references() {
        writeln!(out, "  dangling reference: {id}")?;
    }
    Ok(ExitCode::FAILURE)
}

/// Read every input file and import them in order.
fn load_inputs(paths: &[PathBuf]) -> Result<FamilyTree> {
    let snapshots = paths
        .iter()
        .map(|path| {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    import_snapshots(&snapshots).context("Failed to import snapshots")
}

fn load_style(path: &Path) -> Result<DotOptions> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read style {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid style {}", path.display()))
}

/// Load `path` (or start empty if it does not exist), apply `edit`, then
/// sort and save.
fn edit_file<W, F>(path: &Path, out: &mut W, edit: F) -> Result<ExitCode>
where
    W: Write,
    F: FnOnce(&mut FamilyTree, &mut W) -> Result<()>,
{
    let mut tree = if path.exists() {
        load_snapshot_file(path).with_context(|| format!("Failed to load {}", path.display()))?
    } else {
        info!("{} does not exist, starting a new tree", path.display());
        FamilyTree::new()
    };

    edit(&mut tree, out)?;
    tree.sort();
    tree.save_snapshot_file(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(ExitCode::SUCCESS)
}

fn warn_unknown_people<'a>(tree: &FamilyTree, ids: impl IntoIterator<Item = &'a NodeId>) {
    for id in ids {
        match tree.node(*id) {
            Ok(Node::Person(_)) => {}
            Ok(_) => warn!("{id} is not a person"),
            Err(_) => warn!("{id} is not in the tree"),
        }
    }
}
