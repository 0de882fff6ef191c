use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::category::Category;
use crate::error::FolioError;

const SAMPLE_CATALOG: &str = include_str!("../assets/sample_catalog.json");

/// A single portfolio project card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Item {
    pub fn new(id: &str, title: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category,
            summary: String::new(),
            images: Vec::new(),
        }
    }
}

/// Fixed, pre-rendered collection of items in document order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, FolioError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(FolioError::Catalog(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn from_json_str(json: &str) -> Result<Self, FolioError> {
        let parsed: Catalog = serde_json::from_str(json)?;
        Self::new(parsed.items)
    }

    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            items = catalog.len(),
            "Loaded project catalog"
        );
        Ok(catalog)
    }

    /// Built-in catalog shipped with the crate
    pub fn sample() -> Result<Self, FolioError> {
        let catalog = Self::from_json_str(SAMPLE_CATALOG)?;
        debug!(items = catalog.len(), "Loaded built-in sample catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Catalog indices of the items tagged with `category`, in document order
    pub fn indices_in(&self, category: Category) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category == category)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("a0", "Rack", Category::Academic),
            Item::new("n0", "Stand", Category::NonAcademic),
            Item::new("a1", "Panel", Category::Academic),
            Item::new("a2", "Bench", Category::Academic),
        ])
        .unwrap()
    }

    #[test]
    fn indices_follow_document_order() {
        let catalog = mixed_catalog();
        assert_eq!(catalog.indices_in(Category::Academic), vec![0, 2, 3]);
        assert_eq!(catalog.indices_in(Category::NonAcademic), vec![1]);
        assert!(catalog.indices_in(Category::Clients).is_empty());
    }

    #[test]
    fn counts_per_category() {
        let catalog = mixed_catalog();
        assert_eq!(catalog.count_in(Category::Academic), 3);
        assert_eq!(catalog.count_in(Category::Clients), 0);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![
            Item::new("same", "One", Category::Academic),
            Item::new("same", "Two", Category::Clients),
        ]);
        assert!(matches!(result, Err(FolioError::Catalog(_))));
    }

    #[test]
    fn unknown_category_in_json_fails() {
        let json = r#"{"items":[{"id":"x","title":"X","category":"hobby"}]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(FolioError::Json(_))
        ));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"items":[{"id":"x","title":"X","category":"clients"}]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let item = catalog.get(0).unwrap();
        assert!(item.summary.is_empty());
        assert!(item.images.is_empty());
        assert_eq!(item.category, Category::Clients);
    }

    #[test]
    fn sample_catalog_shape() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.count_in(Category::Academic), 8);
        assert_eq!(catalog.count_in(Category::NonAcademic), 4);
        assert_eq!(catalog.count_in(Category::Clients), 0);
    }

    #[test]
    fn load_from_disk() {
        let dir = env::temp_dir().join(format!("folio-catalog-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        fs::write(
            &path,
            r#"{"items":[{"id":"c0","title":"Collector","category":"clients"}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.count_in(Category::Clients), 1);

        fs::remove_file(&path).ok();
        fs::remove_dir(&dir).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = env::temp_dir().join("folio-definitely-missing-catalog.json");
        match Catalog::load(&path) {
            Err(FolioError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an IO error, got {:?}", other),
        }
    }
}
