//! Plain-text rendering of the search view.

use std::fmt::Write as _;

use mealsearch_core::Meal;

use crate::state::{SearchPhase, SearchView};

/// Renders the result list: one numbered line per meal with its score.
pub fn render_results(view: &SearchView) -> String {
    let mut out = String::new();
    match view.phase() {
        SearchPhase::Idle => {
            out.push_str("Type a query and press Enter to search.\n");
            return out;
        },
        SearchPhase::Searching => out.push_str("Searching…\n"),
        SearchPhase::Results => {},
    }

    if view.results().is_empty() {
        if !view.is_searching() {
            out.push_str("No meals found.\n");
        }
        return out;
    }

    for (i, meal) in view.results().iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} ({:.2})", i + 1, meal.meal_name, meal.score);
    }
    let shown = view.results().len();
    if view.total() > shown {
        let _ = writeln!(out, "Showing {shown} of {} matches", view.total());
    }
    out
}

/// Renders the detail panel of a single meal.
pub fn render_details(meal: &Meal) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", meal.meal_name);
    let _ = writeln!(out, "{}", "=".repeat(meal.meal_name.chars().count().max(1)));
    let _ = writeln!(out, "Id:             {}", meal.meal_id);
    let _ = writeln!(out, "Score:          {:.4}", meal.score);
    if !meal.food_type.is_empty() {
        let _ = writeln!(out, "Food type:      {}", meal.food_type);
    }
    if !meal.cooking_method.is_empty() {
        let _ = writeln!(out, "Cooking method: {}", meal.cooking_method);
    }
    if !meal.meal_types.is_empty() {
        let _ = writeln!(out, "Meal types:     {}", meal.meal_types.join(", "));
    }

    out.push_str("\nNutrition targets\n");
    let _ = writeln!(out, "  Calories: {} kcal", meal.target_calories);
    let _ = writeln!(out, "  Protein:  {} g", meal.target_protein);
    let _ = writeln!(out, "  Carbs:    {} g", meal.target_carbs);
    let _ = writeln!(out, "  Fats:     {} g", meal.target_fats);

    if !meal.ingredients.is_empty() {
        out.push_str("\nIngredients\n");
        for line in &meal.ingredients {
            match line.quantity() {
                Some(qty) => {
                    let _ = writeln!(out, "  - {} ({qty})", line.ingredient.name);
                },
                None => {
                    let _ = writeln!(out, "  - {}", line.ingredient.name);
                },
            }
        }
    }

    if !meal.description.is_empty() {
        let _ = writeln!(out, "\n{}", meal.description);
    }
    if let Some(url) = meal.meal_image_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "\nImage: {url}");
    }
    out
}
