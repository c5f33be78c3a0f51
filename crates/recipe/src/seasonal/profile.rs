use plateup_shared::Season;

/// Static keyword tables for one season.
///
/// Every keyword is lowercase; callers lowercase the text they search.
#[derive(Debug)]
pub struct SeasonProfile {
    pub title: &'static str,
    /// Name/description words that make a recipe fit the season.
    pub suitable_keywords: &'static [&'static str],
    /// Name/description words that rule a recipe out.
    pub unsuitable_keywords: &'static [&'static str],
    /// Substrings of in-season ingredient items, used to include and rank.
    pub ingredient_keywords: &'static [&'static str],
    /// Chip labels shown next to the seasonal panel title.
    pub display_ingredients: &'static [&'static str],
}

static SPRING: SeasonProfile = SeasonProfile {
    title: "Spring",
    suitable_keywords: &["fresh", "light", "green", "salad", "vegetable"],
    unsuitable_keywords: &["heavy", "stew", "soup", "hot chocolate"],
    ingredient_keywords: &[
        "asparagus",
        "peas",
        "mint",
        "strawberry",
        "spring greens",
        "fresh",
        "light",
    ],
    display_ingredients: &["Asparagus", "Peas", "Strawberries", "Mint", "Spring Greens"],
};

static SUMMER: SeasonProfile = SeasonProfile {
    title: "Summer",
    suitable_keywords: &[
        "cold",
        "fresh",
        "refreshing",
        "chilled",
        "salad",
        "ice cream",
        "frozen",
        "grill",
        "bbq",
    ],
    unsuitable_keywords: &["stew", "soup", "hot", "heavy", "warming"],
    ingredient_keywords: &[
        "watermelon",
        "tomato",
        "corn",
        "zucchini",
        "berries",
        "mango",
        "cucumber",
        "cold",
        "refreshing",
        "grill",
        "bbq",
        "light",
    ],
    display_ingredients: &[
        "Watermelon",
        "Tomatoes",
        "Corn",
        "Zucchini",
        "Mangoes",
        "Berries",
        "Cucumber",
        "Yogurt",
    ],
};

static FALL: SeasonProfile = SeasonProfile {
    title: "Fall",
    suitable_keywords: &[
        "warm", "spiced", "pumpkin", "apple", "cinnamon", "hearty", "comfort",
    ],
    unsuitable_keywords: &["ice cream", "frozen", "very cold"],
    ingredient_keywords: &[
        "pumpkin",
        "apple",
        "cinnamon",
        "squash",
        "cranberry",
        "warm",
        "spiced",
    ],
    display_ingredients: &[
        "Pumpkin",
        "Apples",
        "Squash",
        "Sweet Potatoes",
        "Cranberries",
    ],
};

static WINTER: SeasonProfile = SeasonProfile {
    title: "Winter",
    suitable_keywords: &[
        "hot", "warm", "soup", "stew", "hearty", "comfort", "roasted", "baked",
    ],
    unsuitable_keywords: &["ice cream", "frozen", "chilled", "very cold"],
    ingredient_keywords: &[
        "root vegetable",
        "potato",
        "citrus",
        "kale",
        "brussels sprouts",
        "hearty",
        "warm",
        "stew",
    ],
    display_ingredients: &[
        "Citrus Fruits",
        "Root Vegetables",
        "Winter Squash",
        "Kale",
        "Brussels Sprouts",
    ],
};

static RAINY: SeasonProfile = SeasonProfile {
    title: "Rainy Season",
    suitable_keywords: &[
        "soup", "hot", "tea", "coffee", "stew", "pakora", "bhajji", "samosa", "warm", "ginger",
        "comfort",
    ],
    unsuitable_keywords: &["ice cream", "frozen", "cold", "chilled"],
    ingredient_keywords: &[
        "soup", "hot", "tea", "coffee", "stew", "pakora", "bhajji", "samosa", "warm", "ginger",
        "comfort",
    ],
    display_ingredients: &["Ginger", "Lentils", "Onions", "Garlic", "Tea Leaves", "Spices"],
};

pub fn profile(season: Season) -> &'static SeasonProfile {
    match season {
        Season::Spring => &SPRING,
        Season::Summer => &SUMMER,
        Season::Fall => &FALL,
        Season::Winter => &WINTER,
        Season::Rainy => &RAINY,
    }
}
