//! Derived queries from a [`Magazine`] to its articles and the authors behind them.

use crate::model::{Article, Author, Magazine};
use crate::validation::rules::CONTRIBUTING_AUTHOR_THRESHOLD;
use std::collections::{HashMap, HashSet};

impl Magazine {
    /// Every article published in this magazine, in registration order.
    pub fn articles(&self) -> Vec<Article> {
        match self.catalog() {
            Some(catalog) => catalog
                .article_registry()
                .filter(|article| article.magazine() == self),
            None => Vec::new(),
        }
    }

    /// The distinct authors who have written for this magazine.
    pub fn contributors(&self) -> HashSet<Author> {
        self.articles()
            .into_iter()
            .map(|article| article.author().clone())
            .collect()
    }

    /// Titles of this magazine's articles, in registration order.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(&self) -> Option<Vec<String>> {
        let articles = self.articles();
        if articles.is_empty() {
            return None;
        }
        Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        )
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// Returns `None` when no author qualifies, including when there are no articles.
    pub fn contributing_authors(&self) -> Option<HashSet<Author>> {
        let mut counts: HashMap<Author, usize> = HashMap::new();
        for article in self.articles() {
            *counts.entry(article.author().clone()).or_default() += 1;
        }

        let authors: HashSet<Author> = counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .map(|(author, _)| author)
            .collect();
        (!authors.is_empty()).then_some(authors)
    }
}
