//! Derived queries from an [`Author`] to the articles, magazines and topics they write for.

use crate::model::{Article, Author, Magazine};
use crate::validation::ValidationError;
use std::collections::HashSet;

impl Author {
    /// Publishes a new article by this author in `magazine`.
    ///
    /// Shorthand for [`Article::new`] with `self` as the author.
    pub fn add_article(
        &self,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article, ValidationError> {
        Article::new(self, magazine, title)
    }

    /// Every article written by this author, in registration order.
    pub fn articles(&self) -> Vec<Article> {
        match self.catalog() {
            Some(catalog) => catalog
                .article_registry()
                .filter(|article| article.author() == self),
            None => Vec::new(),
        }
    }

    /// The distinct magazines this author has written for.
    pub fn magazines(&self) -> HashSet<Magazine> {
        self.articles()
            .into_iter()
            .map(|article| article.magazine().clone())
            .collect()
    }

    /// The distinct categories of the magazines this author has written for.
    ///
    /// Returns `None`, not an empty set, when the author has no articles at all.
    pub fn topic_areas(&self) -> Option<HashSet<String>> {
        let magazines = self.magazines();
        if magazines.is_empty() {
            return None;
        }
        Some(magazines.iter().map(Magazine::category).collect())
    }
}
