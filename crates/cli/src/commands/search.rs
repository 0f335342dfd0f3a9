use anyhow::{Result, bail};
use mealsearch_client::MealSearch;
use mealsearch_core::is_blank_query;
use mealsearch_view::{Completion, SearchView, render_details};

pub(crate) async fn run_search(search: &dyn MealSearch, query: &str, top_k: u32) -> Result<()> {
    if is_blank_query(query) {
        bail!("nothing to search for: query is blank");
    }
    let response = search.search_meals(query, top_k).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) async fn run_show(
    search: &dyn MealSearch,
    query: &str,
    top_k: u32,
    index: usize,
) -> Result<()> {
    let mut view = SearchView::new(top_k);
    view.set_query(query);
    match view.search_with(search).await {
        None => bail!("nothing to search for: query is blank"),
        Some(Completion::Failed) => bail!("search request failed"),
        Some(_) => {},
    }

    if index == 0 || !view.select(index - 1) {
        bail!("no result #{index} ({} results)", view.results().len());
    }
    if let Some(meal) = view.selected() {
        print!("{}", render_details(meal));
    }
    Ok(())
}
