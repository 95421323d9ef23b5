use mockito::{Matcher, Server};
use recipe_browser::{
    first_page_html, http_browser, render, Action, BrowserConfig, FilterForm, NavAction,
    RecipeBrowser,
};
use scraper::{Html, Selector};

const PAGE_ONE: &str = r#"{
    "data": [
        {
            "title": "Sweet Potato Pie",
            "cuisine": "Southern Recipes",
            "rating": 4.8,
            "total_time": 115,
            "serves": "8 servings",
            "calories": 389
        },
        {
            "title": "Buttermilk Biscuits",
            "cuisine": null,
            "rating": "NaN",
            "total_time": 30,
            "serves": null
        }
    ],
    "total": 40,
    "totalPages": 3
}"#;

fn browser_for(server: &Server) -> RecipeBrowser<recipe_browser::HttpRecipeApi> {
    http_browser(BrowserConfig::with_base_url(server.url())).unwrap()
}

fn select_all(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

#[tokio::test]
async fn test_initial_load_renders_cards_and_pager() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "15".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PAGE_ONE)
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    assert!(browser.load().await);
    mock.assert_async().await;

    let html = render::html::screen(browser.screen());
    assert_eq!(
        select_all(&html, ".recipe-title"),
        vec!["Sweet Potato Pie", "Buttermilk Biscuits"]
    );
    assert_eq!(
        select_all(&html, ".recipe-cuisine"),
        vec!["Southern Recipes", "N/A"]
    );
    assert_eq!(select_all(&html, ".recipe-rating"), vec!["⭐⭐⭐⭐½", "⭐ N/A"]);
    assert_eq!(select_all(&html, "#resultsCount"), vec!["Recipes (40 total)"]);
    assert_eq!(select_all(&html, "#pageInfo"), vec!["Page 1 of 3"]);
    assert_eq!(select_all(&html, "button[disabled]"), vec!["First", "Previous"]);
    assert_eq!(select_all(&html, "#loading.hidden").len(), 1);
    assert_eq!(select_all(&html, "#error.hidden").len(), 1);
}

#[tokio::test]
async fn test_search_uses_search_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "15".into()),
            Matcher::UrlEncoded("title".into(), "pie".into()),
            Matcher::UrlEncoded("rating<=".into(), "4.9".into()),
            Matcher::UrlEncoded("calories<=".into(), "400".into()),
        ]))
        .with_status(200)
        .with_body(PAGE_ONE)
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    let form = FilterForm {
        title: "  pie  ".to_string(),
        cuisine: "   ".to_string(),
        rating_max: "4.9".to_string(),
        calories_max: "400".to_string(),
        total_time_max: "later".to_string(),
        ..Default::default()
    };
    assert!(browser.perform(Action::Search(form)).await.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_result_shows_placeholder() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data": [], "total": 0, "totalPages": 1}"#)
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.load().await;

    assert!(browser.screen().error.is_none());
    let html = render::html::screen(browser.screen());
    let cards = select_all(&html, ".recipe-card");
    assert_eq!(cards.len(), 1);
    assert!(cards[0].contains("No recipes found"));

    let pager = browser.pagination().unwrap();
    assert!(pager.next_disabled());
    assert!(pager.last_disabled());
}

#[tokio::test]
async fn test_error_status_clears_results() {
    let mut server = Server::new_async().await;
    let _ok = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(PAGE_ONE)
        .create_async()
        .await;
    let _failing = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(500)
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.load().await;
    assert!(browser.screen().results.is_some());

    browser
        .perform(Action::Navigate(NavAction::Next))
        .await
        .unwrap();

    let screen = browser.screen();
    assert!(screen.results.is_none());
    assert!(!screen.loading);
    let error = screen.error.as_deref().unwrap();
    assert!(error.starts_with("Failed to load recipes:"));
    assert!(error.contains("500"));

    let html = render::html::screen(screen);
    assert!(select_all(&html, ".recipe-card").is_empty());
    assert_eq!(select_all(&html, "#error:not(.hidden)").len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{\"data\": [")
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.load().await;

    let error = browser.screen().error.as_deref().unwrap();
    assert!(error.contains("Invalid response body"));
}

#[tokio::test]
async fn test_total_pages_derived_when_missing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"page": 1, "limit": 10, "total": 21, "data": [{"title": "Gumbo"}]}"#)
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.perform(Action::ChangePageSize(10)).await.unwrap();

    let pager = browser.pagination().unwrap();
    assert_eq!(pager.total_pages, 3);
    assert_eq!(pager.page_label(), "Page 1 of 3");
}

#[tokio::test]
async fn test_detail_modal_from_card_index() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "data": [{
                    "title": "Jambalaya <classic>",
                    "rating": 4.2,
                    "prep_time": 20,
                    "cook_time": 60,
                    "total_time": 80,
                    "description": "Rice & spice",
                    "ingredients": "[\"1 lb sausage\", \"2 cups rice\"]",
                    "instructions": "Brown sausage\nAdd rice; Simmer",
                    "nutrients": "{\"calories\": \"412 kcal\", \"fatContent\": \"18 g\"}"
                }],
                "total": 1,
                "totalPages": 1
            }"#,
        )
        .create_async()
        .await;

    let mut browser = browser_for(&server);
    browser.load().await;
    browser.open_detail(0).unwrap();

    let html = render::html::screen(browser.screen());
    assert_eq!(select_all(&html, "#recipeModal.hidden").len(), 0);
    assert_eq!(
        select_all(&html, "#recipeDetails h2"),
        vec!["Jambalaya <classic>"]
    );
    assert_eq!(
        select_all(&html, "#recipeDetails ul li"),
        vec!["1 lb sausage", "2 cups rice"]
    );
    assert_eq!(
        select_all(&html, "#recipeDetails ol li"),
        vec!["Brown sausage", "Add rice", "Simmer"]
    );
    let paragraphs = select_all(&html, "#recipeDetails p").join("\n");
    assert!(paragraphs.contains("Rice & spice"));
    assert!(paragraphs.contains("Prep Time: 20 min"));
    assert!(paragraphs.contains("Cook Time: 1h"));
    assert!(paragraphs.contains("Total Time: 1h 20m"));
    assert!(paragraphs.contains("calories: 412 kcal, fatContent: 18 g"));
    assert!(paragraphs.contains("⭐⭐⭐⭐ 4.2"));

    browser.close_detail();
    let html = render::html::screen(browser.screen());
    assert_eq!(select_all(&html, "#recipeModal.hidden").len(), 1);
}

#[tokio::test]
async fn test_first_page_html() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "15".into()),
        ]))
        .with_status(200)
        .with_body(PAGE_ONE)
        .create_async()
        .await;

    let html = first_page_html(BrowserConfig::with_base_url(server.url()))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(select_all(&html, ".recipe-card").len(), 2);
    assert_eq!(select_all(&html, "#pageInfo"), vec!["Page 1 of 3"]);
    assert_eq!(select_all(&html, "#recipeModal.hidden").len(), 1);
}

#[tokio::test]
async fn test_first_page_html_rejects_invalid_config() {
    let config = BrowserConfig {
        default_page_size: 7,
        ..BrowserConfig::with_base_url("http://127.0.0.1:9")
    };
    let err = first_page_html(config).await.unwrap_err();
    assert!(err.to_string().contains("default_page_size 7"));
}
