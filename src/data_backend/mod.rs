pub mod catalog;

const UNSPLASH_BASE: &str = "https://images.unsplash.com";

fn unsplash_url(photo: &str) -> String {
    format!("{}/photo-{}?w=400", UNSPLASH_BASE, photo)
}

// query params like `?meal_type=` count as not given
fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}
