// src/utils/display.rs

//! Terminal rendering of the views.
//!
//! Every function returns the text to print so the output can be tested.

use std::fmt::Write;

use crate::models::{Messages, Rating, Recipe};
use crate::utils::markup::markup_to_text;
use crate::views::{BrowseState, BrowseView, DetailState, DetailView, SavedView};

const WIDTH: usize = 60;

/// Title framed by double rules.
pub fn header(title: &str) -> String {
    let rule = "═".repeat(WIDTH);
    format!("{rule}\n  {title}\n{rule}\n")
}

/// Single-rule separator line.
pub fn separator() -> String {
    "─".repeat(WIDTH)
}

/// One recipe in a list.
pub fn card(recipe: &Recipe) -> String {
    let mut out = format!("[{}] {}", recipe.id, recipe.title);
    if let Some(minutes) = recipe.ready_in_minutes {
        let _ = write!(out, " ({minutes} min)");
    }
    if let Some(image) = &recipe.image {
        let _ = write!(out, "\n    {image}");
    }
    out
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

/// Search page: session line, filters, notices and the recipe list.
pub fn render_browse(view: &BrowseView, messages: &Messages) -> String {
    let mut out = header("Recipes");

    match view.welcome(messages) {
        Some(line) => push_line(&mut out, line),
        None => push_line(&mut out, "Not logged in (use `login` to save and rate)"),
    }

    let filters = view.filters();
    push_line(
        &mut out,
        format!(
            "Search: {:?}  Diet: {}  Cuisine: {}",
            view.search_term(),
            filters.diet.as_deref().unwrap_or("all"),
            filters.cuisine.as_deref().unwrap_or("all"),
        ),
    );
    push_line(&mut out, separator());

    if view.state() == BrowseState::Loading {
        push_line(&mut out, "Loading...");
    }
    if let Some(alert) = view.alert() {
        push_line(&mut out, format!("! {}", alert.text(messages)));
    }
    if let Some(notice) = view.notice() {
        push_line(&mut out, notice.text(messages));
    }

    for recipe in view.recipes() {
        push_line(&mut out, card(recipe));
        let saved = if view.is_saved(recipe.id) {
            "Saved"
        } else {
            "Save to Favorites"
        };
        push_line(
            &mut out,
            format!("    {saved} | Rate: {}", Rating::bar(view.rating(recipe.id))),
        );
    }
    out
}

/// Detail page: title, image, ingredients and instructions as text.
pub fn render_detail(view: &DetailView, messages: &Messages) -> String {
    let recipe = match view.state() {
        DetailState::Loading => return "Loading...\n".to_string(),
        DetailState::Failed => return format!("{}\n", messages.detail_failed),
        DetailState::Loaded(recipe) => recipe,
    };

    let mut out = header(&recipe.title);
    if let Some(image) = &recipe.image {
        push_line(&mut out, image);
    }
    let mut facts = Vec::new();
    if let Some(minutes) = recipe.ready_in_minutes {
        facts.push(format!("Ready in {minutes} min"));
    }
    if let Some(servings) = recipe.servings {
        facts.push(format!("Serves {servings}"));
    }
    if !facts.is_empty() {
        push_line(&mut out, facts.join(" · "));
    }
    if let Some(summary) = recipe.summary.as_deref() {
        push_line(&mut out, "");
        for line in markup_to_text(summary).lines() {
            push_line(&mut out, line);
        }
    }

    push_line(&mut out, "\nIngredients");
    push_line(&mut out, separator());
    for ingredient in recipe.ingredients() {
        push_line(&mut out, format!("  - {}", ingredient.original));
    }

    push_line(&mut out, "\nInstructions");
    push_line(&mut out, separator());
    let instructions = recipe
        .instructions
        .as_deref()
        .map(markup_to_text)
        .unwrap_or_default();
    for line in instructions.lines() {
        push_line(&mut out, format!("  {line}"));
    }

    if let Some(source) = &recipe.source_url {
        push_line(&mut out, format!("\nSource: {source}"));
    }
    out
}

/// Saved page: banner, removal alert and saved cards.
pub fn render_saved(view: &SavedView, messages: &Messages) -> String {
    let mut out = header("Saved Recipes");
    push_line(&mut out, view.banner(messages));
    push_line(&mut out, separator());

    if let Some(alert) = view.alert() {
        push_line(&mut out, format!("! {}", alert.text(messages)));
    }
    if let Some(notice) = view.notice() {
        push_line(&mut out, notice.text(messages));
    }
    for recipe in view.recipes() {
        push_line(&mut out, card(recipe));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card() {
        let recipe = Recipe::new(5, "Soup").with_image("https://img.example.com/5.jpg");
        assert_eq!(card(&recipe), "[5] Soup\n    https://img.example.com/5.jpg");
    }

    #[test]
    fn test_header_frames_title() {
        let text = header("Recipes");
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().nth(1), Some("  Recipes"));
    }
}
