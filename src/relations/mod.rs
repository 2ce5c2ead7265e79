//! Relationship queries between authors, magazines and articles.
//!
//! Nothing here is cached or indexed. Each query scans the article registry of the
//! entity's catalog and derives its answer from the matching articles, so results
//! always reflect the current state (including magazine renames).
//!
//! Queries that return `Option` use `None` for "no data", never an empty collection:
//! - [`Author::topic_areas`](crate::model::Author::topic_areas)
//! - [`Magazine::article_titles`](crate::model::Magazine::article_titles)
//! - [`Magazine::contributing_authors`](crate::model::Magazine::contributing_authors)

mod author;
mod magazine;
