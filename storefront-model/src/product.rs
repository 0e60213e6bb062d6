use crate::ids::ProductId;
use crate::search_field::SearchField;

/// Category a product is listed under
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<u64>,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            image: None,
        }
    }
}

/// Catalog entry as returned by the storefront API.
///
/// Only `id`, `title`, `category`, `price` and `image` are rendered by the
/// search dropdown; the remaining text fields feed client-side matching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Category,
    #[cfg_attr(feature = "serde", serde(default))]
    pub company: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            category: Category::default(),
            company: None,
            tags: Vec::new(),
            price: 0.0,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Category::named(category);
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Text contributed by `field`, one entry per tag for [`SearchField::Tags`].
    pub fn field_text(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Title => vec![self.title.as_str()],
            SearchField::Description => {
                self.description.as_deref().into_iter().collect()
            }
            SearchField::Category => vec![self.category.name.as_str()],
            SearchField::Company => self.company.as_deref().into_iter().collect(),
            SearchField::Tags => self.tags.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new(3u64, "LED Desk Lamp")
            .with_description("Dimmable lamp")
            .with_category("Lighting")
            .with_company("Lumen Co")
            .with_tags(["office", "desk"])
            .with_price(24.5)
    }

    #[test]
    fn field_text_exposes_every_searchable_field() {
        let product = lamp();

        assert_eq!(product.field_text(SearchField::Title), vec!["LED Desk Lamp"]);
        assert_eq!(
            product.field_text(SearchField::Description),
            vec!["Dimmable lamp"]
        );
        assert_eq!(product.field_text(SearchField::Category), vec!["Lighting"]);
        assert_eq!(product.field_text(SearchField::Company), vec!["Lumen Co"]);
        assert_eq!(product.field_text(SearchField::Tags), vec!["office", "desk"]);
    }

    #[test]
    fn missing_optional_fields_contribute_nothing() {
        let product = Product::new(1u64, "Plain");

        assert!(product.field_text(SearchField::Description).is_empty());
        assert!(product.field_text(SearchField::Company).is_empty());
        assert!(product.field_text(SearchField::Tags).is_empty());
    }

    #[test]
    fn image_is_display_only() {
        let product = lamp().with_image("https://cdn.example/lamp.png");

        assert_eq!(
            product.image.as_deref(),
            Some("https://cdn.example/lamp.png")
        );
        assert!(
            SearchField::FALLBACK
                .iter()
                .all(|field| !product
                    .field_text(*field)
                    .contains(&"https://cdn.example/lamp.png"))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_sparse_api_payloads() {
        let json = r#"{
            "id": 9,
            "title": "Wireless Mouse",
            "price": 19.99,
            "category": { "id": 2, "name": "Electronics", "image": "c.png" }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId(9));
        assert_eq!(product.category.name, "Electronics");
        assert!(product.tags.is_empty());
        assert!(product.company.is_none());
    }
}
