//! Catalog Module - Static site content and filtering
//!
//! Record types for every kind of catalog entry the site displays
//! (courses, blog posts, instructors, pricing plans, testimonials,
//! display metrics), the sample data, and the pure filter mechanism.
//!
//! All records are defined once at load and never mutated. Filtering
//! never removes anything from a source list - it derives a new view.

pub mod data;
mod filter;

pub use filter::*;

// =============================================================================
// CATALOG ENTRY
// =============================================================================

/// A record that can be narrowed by [`filter`].
///
/// Facets are exact-match (with the `"All"` wildcard); search fields
/// are matched by case-insensitive substring.
pub trait CatalogEntry {
    /// Category facet value.
    fn category(&self) -> &str;

    /// Level facet value, for entry kinds that have one.
    fn level(&self) -> Option<&str> {
        None
    }

    /// Text fields the free-text search runs over.
    fn search_fields(&self) -> Vec<&str>;
}

impl<T: CatalogEntry> CatalogEntry for &T {
    fn category(&self) -> &str {
        (*self).category()
    }

    fn level(&self) -> Option<&str> {
        (*self).level()
    }

    fn search_fields(&self) -> Vec<&str> {
        (*self).search_fields()
    }
}

// =============================================================================
// RECORD TYPES
// =============================================================================

/// One course in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub rating: f32,
    pub students: u32,
    pub duration: String,
    pub price: u32,
    pub original_price: Option<u32>,
    pub level: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
}

impl Course {
    /// Discount against the original price, if any.
    pub fn savings(&self) -> Option<u32> {
        self.original_price.map(|original| original - self.price)
    }
}

impl CatalogEntry for Course {
    fn category(&self) -> &str {
        &self.category
    }

    fn level(&self) -> Option<&str> {
        Some(&self.level)
    }

    // Searchable by title and instructor name.
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.instructor]
    }
}

/// One blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub image: String,
    pub read_time: String,
    pub tags: Vec<String>,
}

impl CatalogEntry for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }

    // Searchable by title and excerpt.
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt]
    }
}

/// One instructor profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub image: String,
    pub rating: f32,
    pub students: u32,
    pub courses: u32,
    pub experience: String,
    pub bio: String,
    pub skills: Vec<String>,
}

/// One subscription tier.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub original_price: Option<u32>,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub not_included: Vec<String>,
    pub popular: bool,
}

/// One student testimonial.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

/// An animated headline statistic ("15000+", "95%").
#[derive(Debug, Clone, PartialEq)]
pub struct StatItem {
    pub label: String,
    pub value: u32,
    pub suffix: String,
}

/// A progress bar on the dashboard ("8 of 12 courses").
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMetric {
    pub label: String,
    pub value: u32,
    pub max_value: u32,
}

impl ProgressMetric {
    /// Completion percentage the bar animates towards.
    pub fn percent(&self) -> f64 {
        if self.max_value == 0 {
            return 0.0;
        }
        f64::from(self.value) / f64::from(self.max_value) * 100.0
    }
}

/// One bar of the monthly study-hours chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStudy {
    pub month: String,
    pub courses: u32,
    pub hours: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_savings() {
        let courses = data::courses();
        assert_eq!(courses[0].savings(), Some(100)); // 399 - 299
    }

    #[test]
    fn test_progress_metric_percent() {
        let metric = ProgressMetric {
            label: "Courses Completed".into(),
            value: 8,
            max_value: 12,
        };
        assert!((metric.percent() - 66.666_666).abs() < 0.001);
    }

    #[test]
    fn test_progress_metric_zero_max_never_divides() {
        let metric = ProgressMetric {
            label: "Empty".into(),
            value: 3,
            max_value: 0,
        };
        assert_eq!(metric.percent(), 0.0);
    }
}
