//! Plain-text outline of a render instruction.

use std::fmt;

use navshell_model::RestrictionTier;

use crate::render::{ContentView, DropdownView, LeafView, MenuCard, RenderInstruction, SideNavView};

/// Display adapter printing a [`RenderInstruction`] as an indented outline.
pub struct Outline<'a>(pub &'a RenderInstruction);

pub fn render_outline(instruction: &RenderInstruction) -> String {
    Outline(instruction).to_string()
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instruction = self.0;
        writeln!(f, "section: {}", instruction.active_section_key)?;

        let top_nav: Vec<String> = instruction
            .top_nav
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.key)
                } else {
                    item.key.clone()
                }
            })
            .collect();
        writeln!(f, "top nav: {}", top_nav.join(" | "))?;

        write_side_nav(f, instruction)?;
        write_content(f, &instruction.content)?;

        match &instruction.overlay {
            Some(overlay) => writeln!(
                f,
                "overlay: {} at {} ({})",
                overlay.state.tier, overlay.state.anchor_offset_left, overlay.content.cta_label
            )?,
            None => writeln!(f, "overlay: none")?,
        }

        let favorites: usize = instruction
            .favorites
            .iter()
            .map(|group| group.entries.len())
            .sum();
        writeln!(f, "favorites: {favorites}")
    }
}

fn write_side_nav(f: &mut fmt::Formatter<'_>, instruction: &RenderInstruction) -> fmt::Result {
    let dropdown = match &instruction.side_nav {
        SideNavView::Hidden => return writeln!(f, "side nav: hidden"),
        SideNavView::Dashboard { dropdown, .. } => Some(dropdown),
        SideNavView::Menu { dropdown, .. } => dropdown.as_ref(),
    };
    let state = if instruction.side_nav_collapsed {
        "collapsed"
    } else {
        "expanded"
    };
    writeln!(f, "side nav: {state}")?;
    if let Some(dropdown) = dropdown {
        write_dropdown(f, dropdown)?;
    }
    for category in instruction.side_nav.categories() {
        if !category.expanded {
            writeln!(f, "  [+] {}", category.title)?;
            continue;
        }
        writeln!(f, "  [-] {}", category.title)?;
        for leaf in &category.leaves {
            write_leaf(f, leaf)?;
        }
    }
    Ok(())
}

fn write_dropdown(f: &mut fmt::Formatter<'_>, dropdown: &DropdownView) -> fmt::Result {
    if dropdown.placeholder {
        writeln!(f, "  dropdown {}: ({})", dropdown.slot, dropdown.text)
    } else {
        writeln!(f, "  dropdown {}: {}", dropdown.slot, dropdown.text)
    }
}

fn write_leaf(f: &mut fmt::Formatter<'_>, leaf: &LeafView) -> fmt::Result {
    let marker = if leaf.active { "*" } else { " " };
    write!(f, "    {marker} {}", leaf.name)?;
    write_tier(f, leaf.tier)?;
    if leaf.favorite {
        f.write_str(" (fav)")?;
    }
    writeln!(f)
}

fn write_tier(f: &mut fmt::Formatter<'_>, tier: RestrictionTier) -> fmt::Result {
    if tier.is_restricted() {
        write!(f, " [{tier}]")?;
    }
    Ok(())
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &MenuCard) -> fmt::Result {
    write!(f, "    - {}", card.name)?;
    write_tier(f, card.tier)?;
    if card.recommended {
        f.write_str(" (recommended)")?;
    }
    if card.new {
        f.write_str(" (new)")?;
    }
    if card.favorite {
        f.write_str(" (fav)")?;
    }
    writeln!(f)
}

fn write_content(f: &mut fmt::Formatter<'_>, content: &ContentView) -> fmt::Result {
    match content {
        ContentView::MenuList { groups, .. } => {
            writeln!(f, "content: menu list")?;
            for group in groups {
                writeln!(f, "  {}", group.category)?;
                for card in &group.cards {
                    write_card(f, card)?;
                }
            }
            Ok(())
        }
        ContentView::Leaf { leaf, artifact } => {
            writeln!(f, "content: leaf {leaf} -> {artifact}")
        }
        ContentView::DashboardHome { artifact } => {
            writeln!(f, "content: dashboard home -> {artifact}")
        }
        ContentView::Favorites {
            groups,
            empty_message,
        } => {
            writeln!(f, "content: favorites")?;
            if let Some(message) = empty_message {
                writeln!(f, "  {message}")?;
            }
            for group in groups {
                writeln!(f, "  {}", group.section_key)?;
                for entry in &group.entries {
                    writeln!(f, "    - {}: {}", entry.name(), entry.description)?;
                }
            }
            Ok(())
        }
    }
}
