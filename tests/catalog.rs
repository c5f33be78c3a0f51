mod helpers;

use plateup::catalog;
use plateup::config::CatalogConfig;
use plateup_recipe::{Servings, match_recipes, recommend, scaled_ingredients};
use plateup_shared::Season;
use temp_dir::TempDir;

#[test]
fn test_bundled_catalog_is_valid() -> anyhow::Result<()> {
    let catalog = catalog::bundled()?;

    assert_eq!(catalog.len(), 12);
    assert_eq!(
        catalog.find(1).map(|r| r.name.as_str()),
        Some("Tomato Basil Pasta")
    );
    assert!(catalog.find(101).is_none());

    let options = catalog.ingredient_options();
    assert!(options["Vegetables"].contains("tomato"));
    assert!(options["Dairy"].contains("cheese"));

    Ok(())
}

#[test]
fn test_load_uses_bundled_catalog_without_path() -> anyhow::Result<()> {
    let catalog = catalog::load(&CatalogConfig::default())?;

    assert_eq!(catalog.len(), 12);

    Ok(())
}

#[test]
fn test_load_reads_configured_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = helpers::write_file(
        &dir,
        "recipes.json",
        r#"[{"id": 7, "name": "Toast", "ingredients": [{"item": "bread", "quantity": 1}]}]"#,
    )?;

    let catalog = catalog::load(&CatalogConfig {
        path: Some(helpers::path_string(&path)),
    })?;

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find(7).map(|r| r.name.as_str()), Some("Toast"));

    Ok(())
}

#[test]
fn test_invalid_catalog_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let duplicate = helpers::write_file(
        &dir,
        "duplicate.json",
        r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#,
    )?;
    let zero_id = helpers::write_file(&dir, "zero.json", r#"[{"id": 0, "name": "A"}]"#)?;

    assert!(catalog::from_path(&duplicate).is_err());
    assert!(catalog::from_path(&zero_id).is_err());
    assert!(catalog::from_path(dir.child("missing.json")).is_err());

    Ok(())
}

#[test]
fn test_matching_against_bundled_catalog() -> anyhow::Result<()> {
    let catalog = catalog::bundled()?;

    let matches = match_recipes(&["egg", "cheese", "butter"], catalog.recipes());
    let ids: Vec<u32> = matches.iter().map(|m| m.recipe.id).collect();
    assert_eq!(ids, vec![2, 4]);
    assert_eq!(matches[0].match_percentage, 75.0);

    let matches = match_recipes(&["tomato", "garlic", "onion"], catalog.recipes());
    let ids: Vec<u32> = matches.iter().map(|m| m.recipe.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(matches[0].match_percentage, 60.0);

    Ok(())
}

#[test]
fn test_seasonal_tags_in_bundled_catalog() -> anyhow::Result<()> {
    let catalog = catalog::bundled()?;

    for season in [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::Rainy,
    ] {
        let recommendations = recommend(season, catalog.recipes());
        let ids: Vec<u32> = recommendations.recipes.iter().map(|r| r.id).collect();

        assert!((1..=6).contains(&ids.len()), "{season}: {ids:?}");
        assert_eq!(
            ids.contains(&5),
            matches!(season, Season::Winter | Season::Fall),
            "{season}: {ids:?}"
        );
        assert_eq!(ids.contains(&6), season == Season::Spring, "{season}: {ids:?}");
    }

    Ok(())
}

#[test]
fn test_recipe_detail_scales_bundled_recipe() -> anyhow::Result<()> {
    let catalog = catalog::bundled()?;
    let recipe = catalog.find(1).expect("recipe 1 is bundled");

    let scaled = scaled_ingredients(recipe, Servings::new(4));
    let displays: Vec<&str> = scaled.iter().map(|s| s.display.as_str()).collect();

    assert_eq!(displays, vec!["400", "6", "4", "½", "4"]);

    Ok(())
}

#[test]
fn test_scaled_quantities_round_halves_up() -> anyhow::Result<()> {
    let catalog = catalog::bundled()?;
    let recipe = catalog.get(2)?;

    let scaled = scaled_ingredients(recipe, Servings::new(5));
    let displays: Vec<&str> = scaled.iter().map(|s| s.display.as_str()).collect();

    assert_eq!(displays, vec!["7.5", "1.3", "2.5", "0.6"]);

    Ok(())
}
