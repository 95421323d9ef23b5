//! HTML fragments for the results list, pager and detail modal.
//!
//! Every piece of API text goes through [`encode_text`]. Cards carry only
//! their index; the record itself stays in memory on the browser.

use crate::format::{
    format_time, parse_nutrients, parse_text_list, rating_value, star_rating, NOT_AVAILABLE,
};
use crate::model::Recipe;
use crate::pagination::PaginationView;
use crate::view::Screen;
use html_escape::encode_text;

pub const EMPTY_RESULTS_MESSAGE: &str = "No recipes found. Try adjusting your search criteria.";

/// All cards of a result page, or the single placeholder card when empty.
pub fn recipe_cards(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return format!(
            r#"<div class="recipe-card"><p>{}</p></div>"#,
            EMPTY_RESULTS_MESSAGE
        );
    }

    recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| recipe_card(index, recipe))
        .collect()
}

pub fn recipe_card(index: usize, recipe: &Recipe) -> String {
    let calories = recipe
        .calories_value()
        .map(|calories| {
            format!(
                r#"<div class="recipe-detail-item"><strong>Calories:</strong> {}</div>"#,
                calories
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="recipe-card" data-card="{index}">"#,
            r#"<div class="recipe-header"><div>"#,
            r#"<div class="recipe-title">{title}</div>"#,
            r#"<span class="recipe-cuisine">{cuisine}</span>"#,
            r#"</div><div class="recipe-rating">{stars}</div></div>"#,
            r#"<div class="recipe-details">"#,
            r#"<div class="recipe-detail-item"><strong>Total Time:</strong> {time}</div>"#,
            r#"<div class="recipe-detail-item"><strong>Serves:</strong> {serves}</div>"#,
            "{calories}",
            "</div></div>"
        ),
        index = index,
        title = text(recipe.title.as_deref()),
        cuisine = encode_text(recipe.cuisine_text()),
        stars = star_rating(recipe.rating),
        time = format_time(recipe.total_time),
        serves = encode_text(&recipe.serves_text().unwrap_or_else(|| NOT_AVAILABLE.to_string())),
        calories = calories,
    )
}

/// Body of the detail modal for one recipe.
pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut sections = Vec::new();

    sections.push(format!("<h2>{}</h2>", text(recipe.title.as_deref())));
    sections.push(format!(
        concat!(
            r#"<div class="detail-section">"#,
            "<p><strong>Cuisine:</strong> {}</p>",
            "<p><strong>Rating:</strong> {} {}</p>",
            "</div>"
        ),
        encode_text(recipe.cuisine_text()),
        star_rating(recipe.rating),
        rating_value(recipe.rating),
    ));

    if let Some(description) = recipe.description_text() {
        sections.push(format!(
            r#"<div class="detail-section"><h3>Description</h3><p>{}</p></div>"#,
            encode_text(description)
        ));
    }

    sections.push(format!(
        concat!(
            r#"<div class="detail-section"><h3>Time Information</h3>"#,
            "<p><strong>Prep Time:</strong> {}</p>",
            "<p><strong>Cook Time:</strong> {}</p>",
            "<p><strong>Total Time:</strong> {}</p>",
            "</div>"
        ),
        format_time(recipe.prep_time),
        format_time(recipe.cook_time),
        format_time(recipe.total_time),
    ));

    if let Some(serves) = recipe.serves_text() {
        sections.push(format!(
            r#"<div class="detail-section"><p><strong>Serves:</strong> {}</p></div>"#,
            encode_text(&serves)
        ));
    }

    let ingredients = parse_text_list(recipe.ingredients.as_ref());
    if !ingredients.is_empty() {
        sections.push(format!(
            r#"<div class="detail-section"><h3>Ingredients</h3><ul>{}</ul></div>"#,
            list_items(&ingredients)
        ));
    }

    let instructions = parse_text_list(recipe.instructions.as_ref());
    if !instructions.is_empty() {
        sections.push(format!(
            r#"<div class="detail-section"><h3>Instructions</h3><ol>{}</ol></div>"#,
            list_items(&instructions)
        ));
    }

    if let Some(nutrients) = parse_nutrients(recipe.nutrients.as_ref()) {
        sections.push(format!(
            r#"<div class="detail-section"><h3>Nutritional Information</h3><p>{}</p></div>"#,
            encode_text(&nutrients)
        ));
    }

    format!(
        r#"<div class="recipe-detail-content">{}</div>"#,
        sections.concat()
    )
}

/// Count label, pager buttons and page label.
pub fn pagination(pager: &PaginationView) -> String {
    format!(
        concat!(
            r#"<h2 id="resultsCount">{count}</h2>"#,
            r#"<div class="pagination">"#,
            r#"<button id="firstPage"{first}>First</button>"#,
            r#"<button id="prevPage"{prev}>Previous</button>"#,
            r#"<span id="pageInfo">{page}</span>"#,
            r#"<button id="nextPage"{next}>Next</button>"#,
            r#"<button id="lastPage"{last}>Last</button>"#,
            "</div>"
        ),
        count = pager.results_label(),
        first = disabled(pager.first_disabled()),
        prev = disabled(pager.prev_disabled()),
        page = pager.page_label(),
        next = disabled(pager.next_disabled()),
        last = disabled(pager.last_disabled()),
    )
}

/// The whole view: loading indicator, error banner, results, pager and modal.
pub fn screen(screen: &Screen) -> String {
    let cards = screen
        .results
        .as_ref()
        .map(|loaded| recipe_cards(&loaded.result.data))
        .unwrap_or_default();
    let pager = screen
        .results
        .as_ref()
        .map(|loaded| pagination(&loaded.pagination))
        .unwrap_or_default();
    let detail = screen.detail.as_ref().map(recipe_detail).unwrap_or_default();

    format!(
        concat!(
            r#"<div id="loading" class="loading{loading_hidden}">Loading recipes...</div>"#,
            r#"<div id="error" class="error{error_hidden}">{error}</div>"#,
            r#"<div id="recipesContainer">{cards}</div>"#,
            "{pager}",
            r#"<div id="recipeModal" class="modal{modal_hidden}">"#,
            r#"<div id="recipeDetails">{detail}</div></div>"#
        ),
        loading_hidden = hidden(!screen.loading),
        error_hidden = hidden(screen.error.is_none()),
        error = encode_text(screen.error.as_deref().unwrap_or_default()),
        cards = cards,
        pager = pager,
        modal_hidden = hidden(screen.detail.is_none()),
        detail = detail,
    )
}

fn text(value: Option<&str>) -> String {
    encode_text(value.unwrap_or_default()).into_owned()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", encode_text(item)))
        .collect()
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

fn hidden(flag: bool) -> &'static str {
    if flag {
        " hidden"
    } else {
        ""
    }
}
