//! Plain-text rendering for terminals.

use crate::format::{format_time, parse_nutrients, parse_text_list, rating_value, star_rating};
use crate::model::Recipe;
use crate::pagination::PaginationView;
use crate::view::Screen;

pub fn recipe_cards(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return format!("{}\n", super::html::EMPTY_RESULTS_MESSAGE);
    }

    recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| recipe_card(index, recipe))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recipe_card(index: usize, recipe: &Recipe) -> String {
    let mut lines = vec![
        format!(
            "[{}] {}  {}",
            index,
            recipe.title.as_deref().unwrap_or_default(),
            star_rating(recipe.rating)
        ),
        format!("    Cuisine: {}", recipe.cuisine_text()),
        format!("    Total Time: {}", format_time(recipe.total_time)),
        format!(
            "    Serves: {}",
            recipe.serves_text().as_deref().unwrap_or("N/A")
        ),
    ];
    if let Some(calories) = recipe.calories_value() {
        lines.push(format!("    Calories: {}", calories));
    }
    lines.join("\n") + "\n"
}

pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut lines = vec![
        recipe.title.clone().unwrap_or_default(),
        String::new(),
        format!("Cuisine: {}", recipe.cuisine_text()),
        format!(
            "Rating: {} {}",
            star_rating(recipe.rating),
            rating_value(recipe.rating)
        ),
    ];

    if let Some(description) = recipe.description_text() {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    lines.push(String::new());
    lines.push(format!("Prep Time: {}", format_time(recipe.prep_time)));
    lines.push(format!("Cook Time: {}", format_time(recipe.cook_time)));
    lines.push(format!("Total Time: {}", format_time(recipe.total_time)));
    if let Some(serves) = recipe.serves_text() {
        lines.push(format!("Serves: {}", serves));
    }

    let ingredients = parse_text_list(recipe.ingredients.as_ref());
    if !ingredients.is_empty() {
        lines.push(String::new());
        lines.push("Ingredients".to_string());
        lines.extend(ingredients.iter().map(|item| format!("  - {}", item)));
    }

    let instructions = parse_text_list(recipe.instructions.as_ref());
    if !instructions.is_empty() {
        lines.push(String::new());
        lines.push("Instructions".to_string());
        lines.extend(
            instructions
                .iter()
                .enumerate()
                .map(|(i, step)| format!("  {}. {}", i + 1, step)),
        );
    }

    if let Some(nutrients) = parse_nutrients(recipe.nutrients.as_ref()) {
        lines.push(String::new());
        lines.push("Nutritional Information".to_string());
        lines.push(format!("  {}", nutrients));
    }

    lines.join("\n") + "\n"
}

pub fn pagination(pager: &PaginationView) -> String {
    let control = |label: &str, disabled: bool| {
        if disabled {
            format!("({})", label)
        } else {
            format!("[{}]", label)
        }
    };

    format!(
        "{}\n{} {} {} {} {}\n",
        pager.results_label(),
        control("First", pager.first_disabled()),
        control("Prev", pager.prev_disabled()),
        pager.page_label(),
        control("Next", pager.next_disabled()),
        control("Last", pager.last_disabled()),
    )
}

pub fn screen(screen: &Screen) -> String {
    let mut out = String::new();
    if screen.loading {
        out.push_str("Loading recipes...\n");
    }
    if let Some(error) = &screen.error {
        out.push_str(error);
        out.push('\n');
    }
    if let Some(loaded) = &screen.results {
        out.push_str(&pagination(&loaded.pagination));
        out.push('\n');
        out.push_str(&recipe_cards(&loaded.result.data));
    }
    if let Some(detail) = &screen.detail {
        out.push('\n');
        out.push_str(&recipe_detail(detail));
    }
    out
}
