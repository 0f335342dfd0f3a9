use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

/// One line of a meal's recipe. Portion and unit are absent when the recipe
/// does not specify a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealIngredient {
    pub ingredient: Ingredient,
    #[serde(default)]
    pub portion: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl MealIngredient {
    /// Human readable quantity, e.g. `150g`, or `None` when no portion is known.
    #[must_use]
    pub fn quantity(&self) -> Option<String> {
        let portion = self.portion?;
        let amount = if portion.fract() == 0.0 && portion.is_finite() {
            format!("{portion:.0}")
        } else {
            portion.to_string()
        };
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => Some(format!("{amount}{unit}")),
            _ => Some(amount),
        }
    }
}

/// A meal returned by the search service, together with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "mealId")]
    pub meal_id: String,
    #[serde(rename = "mealimageurl", default)]
    pub meal_image_url: Option<String>,
    #[serde(rename = "mealName")]
    pub meal_name: String,
    #[serde(rename = "foodType")]
    pub food_type: String,
    pub cooking_method: String,
    #[serde(rename = "mealTargetCalories")]
    pub target_calories: f64,
    #[serde(rename = "mealTargetProtein")]
    pub target_protein: f64,
    #[serde(rename = "mealTargetCarbs")]
    pub target_carbs: f64,
    #[serde(rename = "mealTargetFats")]
    pub target_fats: f64,
    pub description: String,
    #[serde(rename = "mealTypes")]
    pub meal_types: Vec<String>,
    #[serde(rename = "mealIngredients")]
    pub ingredients: Vec<MealIngredient>,
    /// Relevance assigned by the service. Opaque to this client.
    pub score: f64,
}

/// Response envelope of `GET /meals/search`.
///
/// `results` keeps the server's relevance order. `total` is the match count
/// reported by the server and may exceed `results.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSearchResponse {
    pub results: Vec<Meal>,
    pub total: usize,
}
