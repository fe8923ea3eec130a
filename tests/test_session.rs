//! Integration tests for the explorer controller driven by user intents.

mod common;

use common::*;

#[tokio::test]
async fn test_intents_recompute_the_view() -> anyhow::Result<()> {
    let mut explorer = loaded_explorer(sample_countries()).await;

    explorer.handle(Intent::SetQuery("g".into()));
    assert_eq!(names(explorer.matches()), vec!["Germany", "Ghana"]);

    explorer.handle(Intent::SelectCategory(Category::Europe));
    assert_eq!(names(explorer.matches()), vec!["Germany"]);
    assert_eq!(explorer.page().heading(), "Countries (1 found)");

    explorer.handle(Intent::SetQuery("zz".into()));
    assert!(explorer.is_zero_match());
    assert_eq!(explorer.status(), LoadStatus::Ready);

    explorer.handle(Intent::SetQuery(String::new()));
    explorer.handle(Intent::SelectCategory(Category::All));
    assert_eq!(explorer.match_count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_overflow_through_explorer() -> anyhow::Result<()> {
    let explorer = loaded_explorer(numbered_countries(12, "Africa")).await;
    let page = explorer.page();

    assert_eq!(page.shown.len(), 10);
    assert_eq!(
        page.overflow_notice().as_deref(),
        Some("Showing 10 of 12 countries. Use search or filter to narrow results.")
    );

    Ok(())
}

#[tokio::test]
async fn test_detail_view_open_and_close() -> anyhow::Result<()> {
    let mut explorer = loaded_explorer(sample_countries()).await;
    assert!(explorer.selected_country().is_none());

    explorer.handle(Intent::OpenDetails("GH".into()));
    assert_eq!(explorer.selected_country().map(Country::common_name), Some("Ghana"));

    // Unknown codes leave the current selection alone.
    explorer.handle(Intent::OpenDetails("XX".into()));
    assert_eq!(explorer.selected_country().map(Country::common_name), Some("Ghana"));

    // Filtering does not close the detail view.
    explorer.handle(Intent::SetQuery("france".into()));
    assert_eq!(explorer.selected_country().map(Country::common_name), Some("Ghana"));

    explorer.handle(Intent::CloseDetails);
    assert!(explorer.selected_country().is_none());

    Ok(())
}

#[tokio::test]
async fn test_person_form_through_intents() -> anyhow::Result<()> {
    let mut explorer = loaded_explorer(sample_countries()).await;
    assert_eq!(explorer.country_names(), vec!["France", "Germany", "Ghana"]);

    explorer.handle(Intent::EditDraft(DraftField::FullName, "Ann".into()));
    explorer.handle(Intent::EditDraft(DraftField::Email, "a@x.com".into()));
    explorer.handle(Intent::SubmitDraft);
    assert!(explorer.persons().is_empty(), "country is still missing");
    assert_eq!(explorer.draft().full_name, "Ann");

    explorer.handle(Intent::EditDraft(DraftField::Country, "France".into()));
    explorer.handle(Intent::EditDraft(DraftField::City, "Lyon".into()));
    explorer.handle(Intent::SubmitDraft);
    assert_eq!(explorer.persons().len(), 1);
    assert!(explorer.draft().is_empty());

    let person = explorer.persons()[0].clone();
    assert_eq!(person.country_name, "France");
    assert_eq!(person.city.as_deref(), Some("Lyon"));
    assert_eq!(person.phone, None);

    explorer.handle(Intent::RemovePerson(PersonId::generate()));
    assert_eq!(explorer.persons().len(), 1);
    explorer.handle(Intent::RemovePerson(person.id));
    assert!(explorer.persons().is_empty());

    Ok(())
}

#[test]
fn test_people_can_be_added_while_loading() {
    let mut explorer = Explorer::new();
    assert!(explorer.status().is_loading());
    assert!(explorer.country_names().is_empty());

    for (field, value) in [
        (DraftField::FullName, "Ann"),
        (DraftField::Email, "a@x.com"),
        (DraftField::Country, "France"),
    ] {
        explorer.handle(Intent::EditDraft(field, value.into()));
    }
    explorer.handle(Intent::SubmitDraft);
    assert_eq!(explorer.records().len(), 1);
}

#[test]
fn test_theme_toggle_and_counter() {
    let mut explorer = Explorer::new();
    assert!(!explorer.dark_mode());

    explorer.handle(Intent::ToggleDarkMode);
    assert!(explorer.dark_mode());
    explorer.handle(Intent::ToggleDarkMode);
    assert!(!explorer.dark_mode());

    explorer.handle(Intent::DecrementCounter);
    explorer.handle(Intent::DecrementCounter);
    explorer.handle(Intent::IncrementCounter);
    assert_eq!(explorer.counter(), -1);
}
