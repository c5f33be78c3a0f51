use plateup_shared::{Ingredient, Recipe};

/// Catalog quantities are written for this many servings.
pub const BASE_SERVINGS: u32 = 2;
pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings(u32);

impl Servings {
    pub fn new(servings: u32) -> Self {
        Self(servings.clamp(MIN_SERVINGS, MAX_SERVINGS))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(self.0 + 1)
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    pub fn scale(self, base_quantity: f64) -> f64 {
        base_quantity * self.0 as f64 / BASE_SERVINGS as f64
    }
}

impl Default for Servings {
    fn default() -> Self {
        Self(BASE_SERVINGS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredient<'a> {
    pub ingredient: &'a Ingredient,
    pub quantity: f64,
    pub display: String,
}

pub fn scaled_ingredients(recipe: &Recipe, servings: Servings) -> Vec<ScaledIngredient<'_>> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let quantity = servings.scale(ingredient.quantity);

            ScaledIngredient {
                ingredient,
                quantity,
                display: format_quantity(quantity, &ingredient.unit),
            }
        })
        .collect()
}

const FRACTIONS: &[(f64, &str)] = &[
    (0.25, "¼"),
    (0.5, "½"),
    (0.75, "¾"),
    (0.33, "⅓"),
    (0.333, "⅓"),
    (0.66, "⅔"),
    (0.667, "⅔"),
];

fn is_measure(unit: &str) -> bool {
    matches!(
        unit,
        "tablespoon" | "tablespoons" | "teaspoon" | "teaspoons" | "cup" | "cups"
    )
}

/// Kitchen-friendly quantity: whole numbers print bare, spoon and cup
/// measures use vulgar fractions, anything else keeps one decimal.
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    if is_measure(unit) {
        let fraction = FRACTIONS
            .iter()
            .find(|(value, _)| *value == quantity)
            .map(|(_, glyph)| *glyph);

        if let Some(fraction) = fraction {
            return fraction.to_owned();
        }
    }

    if quantity.fract() == 0.0 {
        return format!("{quantity}");
    }

    // halves round away from zero
    let rounded = format!("{:.1}", (quantity * 10.0).round() / 10.0);
    match rounded.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => rounded,
    }
}

/// °F to whole °C, halves rounding up.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> i64 {
    ((fahrenheit - 32.0) * 5.0 / 9.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servings_are_clamped() {
        assert_eq!(Servings::new(0).get(), 1);
        assert_eq!(Servings::new(20).get(), 8);
        assert_eq!(Servings::new(8).increment().get(), 8);
        assert_eq!(Servings::new(1).decrement().get(), 1);
        assert_eq!(Servings::default().increment().get(), 3);
    }

    #[test]
    fn test_scale_from_two_servings() {
        assert_eq!(Servings::new(4).scale(1.5), 3.0);
        assert_eq!(Servings::new(1).scale(1.0), 0.5);
        assert_eq!(Servings::default().scale(2.0), 2.0);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0, "pieces"), "2");
        assert_eq!(format_quantity(0.5, "cup"), "½");
        assert_eq!(format_quantity(0.25, "teaspoon"), "¼");
        assert_eq!(format_quantity(0.75, "tablespoons"), "¾");
        assert_eq!(format_quantity(0.5, "medium"), "0.5");
        assert_eq!(format_quantity(1.6, "cups"), "1.6");
        assert_eq!(format_quantity(2.96, "grams"), "3");
        assert_eq!(format_quantity(0.375, "pinch"), "0.4");
        assert_eq!(format_quantity(0.25, "medium"), "0.3");
        assert_eq!(format_quantity(1.25, "cups"), "1.3");
        assert_eq!(format_quantity(2.25, "pieces"), "2.3");
        assert_eq!(format_quantity(0.75, "medium"), "0.8");
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(350.0), 177);
        assert_eq!(fahrenheit_to_celsius(212.0), 100);
        assert_eq!(fahrenheit_to_celsius(32.0), 0);
        assert_eq!(fahrenheit_to_celsius(425.0), 218);
    }
}
