//! End-to-end checks of the recipe form contract.

use cookbook_core::{
    DraftForm, Field, Ingredient, RecipeDraft, RecipeSummary, SearchAffordance, SearchBuffer,
    StagedImage,
};

fn staged_image() -> StagedImage {
    StagedImage::new("bolo.jpg", "image/jpeg", 48_213, "blob:http://localhost/0d1f")
}

fn bolo_form() -> DraftForm {
    let mut form = DraftForm::new();
    form.update_field(Field::Title, "Bolo").unwrap();
    form.update_field(Field::Description, "Bolo de chocolate").unwrap();
    form.update_field(Field::IngredientName(0), "Farinha").unwrap();
    form.update_field(Field::IngredientQuantity(0), "2 xícaras").unwrap();
    form.update_field(Field::PreparationTime, "01:30").unwrap();
    form.update_field(Field::Step(0), "Misture tudo").unwrap();
    form.set_categories(["doce"]);
    form.attach_image(staged_image());
    form
}

#[test]
fn complete_draft_is_emitted_once() {
    let mut form = bolo_form();
    let mut emitted = Vec::new();

    form.submit(|draft| emitted.push(draft)).unwrap();

    assert_eq!(emitted.len(), 1);
    let draft = &emitted[0];
    assert_eq!(draft.title, "Bolo");
    assert_eq!(draft.description, "Bolo de chocolate");
    assert_eq!(draft.ingredients, vec![Ingredient::new("Farinha", "2 xícaras")]);
    assert_eq!(draft.preparation_time, "01:30");
    assert_eq!(draft.steps, vec!["Misture tudo".to_string()]);
    assert_eq!(draft.categories.iter().collect::<Vec<_>>(), vec!["doce"]);
    assert_eq!(draft.image, Some(staged_image()));
}

#[test]
fn each_missing_field_is_reported_alone() {
    type Blank = fn(&mut DraftForm);
    let cases: [(Field, Blank); 8] = [
        (Field::Title, |f| f.update_field(Field::Title, "").unwrap()),
        (Field::Description, |f| {
            f.update_field(Field::Description, "").unwrap()
        }),
        (Field::IngredientName(0), |f| {
            f.update_field(Field::IngredientName(0), "").unwrap()
        }),
        (Field::IngredientQuantity(0), |f| {
            f.update_field(Field::IngredientQuantity(0), "").unwrap()
        }),
        (Field::PreparationTime, |f| {
            f.update_field(Field::PreparationTime, "").unwrap()
        }),
        (Field::Step(0), |f| f.update_field(Field::Step(0), "").unwrap()),
        (Field::Categories, |f| {
            f.set_categories(Vec::<String>::new())
        }),
        (Field::Image, |f| {
            f.clear_image();
        }),
    ];

    for (field, blank) in cases {
        let mut form = bolo_form();
        blank(&mut form);

        let mut calls = 0;
        let errors = form.submit(|_| calls += 1).unwrap_err();

        assert_eq!(calls, 0, "{field} must not complete");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
        assert!(form.visible_error(field).is_some(), "{field} should show its error");
    }
}

#[test]
fn several_missing_fields_are_all_reported() {
    let mut form = bolo_form();
    form.update_field(Field::Title, "").unwrap();
    form.clear_image();

    let errors = form.submit(|_| panic!("must not complete")).unwrap_err();
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![Field::Title, Field::Image]
    );
}

#[test]
fn first_ingredient_is_never_removed() {
    for len in 1..8 {
        let mut draft = RecipeDraft::new();
        for _ in 1..len {
            draft.add_ingredient();
        }
        for _ in 0..len {
            draft.remove_ingredient(0);
        }
        assert_eq!(draft.ingredients.len(), len);
    }
}

#[test]
fn add_then_remove_last_ingredient_is_identity() {
    let mut form = bolo_form();
    form.add_ingredient();
    form.update_field(Field::IngredientName(1), "Ovos").unwrap();
    form.update_field(Field::IngredientQuantity(1), "3").unwrap();
    let before = form.draft().ingredients.clone();

    form.add_ingredient();
    let last = form.draft().ingredients.len() - 1;
    assert!(form.remove_ingredient(last));

    assert_eq!(form.draft().ingredients, before);
}

#[test]
fn steps_follow_the_same_contract() {
    let mut form = DraftForm::new();
    assert!(!form.remove_step(0));
    form.add_step();
    let last = form.draft().steps.len() - 1;
    assert!(form.remove_step(last));
    assert_eq!(form.draft().steps, vec![String::new()]);
}

#[test]
fn search_affordance_tracks_buffer() {
    let mut buffer = SearchBuffer::new();
    assert_eq!(buffer.affordance(), SearchAffordance::Search);
    buffer.set("   ");
    assert_eq!(buffer.affordance(), SearchAffordance::Clear);
    buffer.clear();
    assert_eq!(buffer.affordance(), SearchAffordance::Search);
}

#[test]
fn card_duration_labels() {
    let card = RecipeSummary::new("Lasanha", "Bolonhesa");
    assert_eq!(card.duration_label(), None);
    assert_eq!(
        card.clone().with_duration(Some(2), Some(30)).duration_label().as_deref(),
        Some("2 hr 30 min")
    );
    assert_eq!(
        card.with_duration(Some(2), None).duration_label().as_deref(),
        Some("2 hr")
    );
}
