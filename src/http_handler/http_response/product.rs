/// A single storefront product as returned by the catalog endpoints.
///
/// Field presence follows the backend's catalog schema: every product has
/// an id, title, and price; the rest is optional and defaults sensibly
/// when the backend omits it.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Product {
    id: u64,
    slug: Option<String>,
    title: String,
    price: f64,
    description: Option<String>,
    category: Option<String>,
    #[serde(default)]
    featured: bool,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    pub fn id(&self) -> u64 { self.id }
    pub fn slug(&self) -> Option<&str> { self.slug.as_deref() }
    pub fn title(&self) -> &str { self.title.as_str() }
    pub fn price(&self) -> f64 { self.price }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn category(&self) -> Option<&str> { self.category.as_deref() }
    pub fn is_featured(&self) -> bool { self.featured }
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.created_at }

    /// The identifier detail pages address the product by: the slug when
    /// present, otherwise the numeric id.
    #[must_use]
    pub fn route_key(&self) -> String {
        self.slug.clone().unwrap_or_else(|| self.id.to_string())
    }
}
