use std::fmt;

/// A city/country pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationQuery {
    city: String,
    country: String,
}

impl LocationQuery {
    pub fn new(city: impl AsRef<str>, country: impl AsRef<str>) -> Self {
        Self {
            city: city.as_ref().trim().to_string(),
            country: country.as_ref().trim().to_string(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `"City, Country"` as sent to geocoding services.
    pub fn search_text(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Case-folded search text, used for the cache and the fallback table.
    pub fn key(&self) -> String {
        self.search_text().to_lowercase()
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_key() {
        let q = LocationQuery::new("  Bangalore ", "India  ");
        assert_eq!(q.search_text(), "Bangalore, India");
        assert_eq!(q.key(), "bangalore, india");
        assert_eq!(q.key(), LocationQuery::new("BANGALORE", "india").key());
    }
}
