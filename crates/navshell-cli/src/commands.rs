use anyhow::{Result, bail};
use comfy_table::{Cell, CellAlignment, Table};

use navshell_cli::session::{load_script, replay};
use navshell_cli::settings::Settings;
use navshell_core::{NavigationController, render_outline};
use navshell_model::{DropdownKind, Section};

use crate::cli::{MenuArgs, OptionsArgs, RenderFormatArg, ReplayArgs, TierArgs};
use crate::summary::{
    align_column, apply_table_style, count_cell, dim_cell, header_cell, tier_cell,
};

pub fn run_sections(settings: &Settings) -> Result<()> {
    let catalog = settings.catalog()?;
    let policy = settings.policy()?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Title"),
        header_cell("Categories"),
        header_cell("Leaves"),
        header_cell("Restricted"),
    ]);
    apply_table_style(&mut table);
    for section in catalog.sections() {
        let restricted = section
            .leaf_refs()
            .filter(|leaf| policy.is_restricted(&leaf.leaf_name))
            .count();
        table.add_row(vec![
            header_cell(&section.key),
            Cell::new(&section.title),
            count_cell(section.categories.len()),
            count_cell(section.leaf_count()),
            count_cell(restricted),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    println!("{table}");
    Ok(())
}

pub fn run_menu(settings: &Settings, args: &MenuArgs) -> Result<()> {
    let catalog = settings.catalog()?;
    let policy = settings.policy()?;
    let Some(section) = catalog.section(&args.section) else {
        bail!(
            "unknown section '{}' (known: {})",
            args.section,
            section_keys(catalog.sections())
        );
    };
    println!("{} ({})", section.title, section.key);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Leaf"),
        header_cell("Tier"),
        header_cell("Badges"),
    ]);
    apply_table_style(&mut table);
    for leaf in section.leaf_refs() {
        let mut badges = Vec::new();
        if catalog.is_recommended(&leaf.leaf_name) {
            badges.push("recommended");
        }
        if catalog.is_new(&leaf.leaf_name) {
            badges.push("new");
        }
        let badges = if badges.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(badges.join(", "))
        };
        table.add_row(vec![
            dim_cell(&leaf.category_title),
            Cell::new(&leaf.leaf_name),
            tier_cell(policy.restriction_tier(&leaf.leaf_name)),
            badges,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_tier(settings: &Settings, args: &TierArgs) -> Result<()> {
    let catalog = settings.catalog()?;
    let policy = settings.policy()?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Leaf"),
        header_cell("Tier"),
        header_cell("Plan"),
        header_cell("Catalog"),
    ]);
    apply_table_style(&mut table);
    for name in &args.leaves {
        let tier = policy.restriction_tier(name);
        let positions: Vec<String> = catalog
            .leaf_refs()
            .filter(|leaf| &leaf.leaf_name == name)
            .map(|leaf| format!("{} / {}", leaf.section_key, leaf.category_title))
            .collect();
        let location = if positions.is_empty() {
            dim_cell("not in catalog")
        } else {
            Cell::new(positions.join("\n"))
        };
        table.add_row(vec![
            Cell::new(name),
            tier_cell(tier),
            Cell::new(tier.plan_name()),
            location,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_replay(settings: &Settings, args: &ReplayArgs) -> Result<()> {
    let actions = load_script(&args.script)?;
    let controller =
        NavigationController::new(settings.catalog()?, settings.policy()?, settings.shell.clone());
    let report = replay(controller, &actions);

    let instructions = if args.each {
        report.frames
    } else {
        vec![report.last]
    };
    let mut first = true;
    for instruction in &instructions {
        match args.format {
            RenderFormatArg::Outline => {
                if !first {
                    println!();
                }
                print!("{}", render_outline(instruction));
            }
            RenderFormatArg::Json => {
                println!("{}", serde_json::to_string_pretty(instruction)?);
            }
        }
        first = false;
    }
    Ok(())
}

pub fn run_options(settings: &Settings, args: &OptionsArgs) -> Result<()> {
    let catalog = settings.catalog()?;
    let kind = DropdownKind::from(args.kind);
    let dropdown = catalog.dropdown(kind);
    let matches = dropdown.filter(args.filter.as_deref().unwrap_or_default());
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(&dropdown.placeholder)]);
    apply_table_style(&mut table);
    for (index, option) in matches.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(option)]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    println!("{table}");
    if matches.is_empty() {
        println!("no {kind} options match");
    }
    Ok(())
}

fn section_keys(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| section.key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
