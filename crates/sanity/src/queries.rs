//! GROQ queries for the four content reads. Every query is parameterized
//! by `$lang`; the by-slug forms also take `$slug`.

pub const PROJECTS: &str = r#"
*[_type == "project" && language == $lang] | order(date desc) {
  _id, _createdAt, _updatedAt,
  title, slug, date, location, client, typology, status, size,
  heroImage, iconSvg, language,
  contentBlocks
}
"#;

pub const PROJECT_BY_SLUG: &str = r#"
*[_type == "project" && language == $lang && slug.current == $slug][0] {
  _id, _createdAt, _updatedAt,
  title, slug, date, location, client, typology, status, size,
  heroImage, iconSvg, language,
  contentBlocks
}
"#;

pub const ARTICLES: &str = r#"
*[_type == "article" && language == $lang] | order(publishedAt desc) {
  _id, _createdAt, _updatedAt,
  title, slug, publishedAt, excerpt, featuredImage,
  content, author, category, language
}
"#;

pub const ARTICLE_BY_SLUG: &str = r#"
*[_type == "article" && language == $lang && slug.current == $slug][0] {
  _id, _createdAt, _updatedAt,
  title, slug, publishedAt, excerpt, featuredImage,
  content, author, category, language
}
"#;

/// Cheap existence probe used by the health check.
pub const PING: &str = r#"count(*[_id == "_"])"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_reads_filter_by_language() {
        for query in [PROJECTS, PROJECT_BY_SLUG, ARTICLES, ARTICLE_BY_SLUG] {
            assert!(query.contains("language == $lang"));
        }
    }

    #[test]
    fn by_slug_queries_take_slug_param() {
        for query in [PROJECT_BY_SLUG, ARTICLE_BY_SLUG] {
            assert!(query.contains("slug.current == $slug"));
            assert!(query.contains("[0]"));
        }
    }

    #[test]
    fn lists_are_ordered_newest_first() {
        assert!(PROJECTS.contains("order(date desc)"));
        assert!(ARTICLES.contains("order(publishedAt desc)"));
    }
}
