//! The Dog record and the typed list parameters.

use crate::error::StoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Dog {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub tail_length: i32,
    pub weight: i32,
}

/// A validated Dog ready to insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewDog {
    pub name: String,
    pub color: String,
    pub tail_length: i32,
    pub weight: i32,
}

impl NewDog {
    pub fn new(name: &str, color: &str, tail_length: i32, weight: i32) -> Self {
        NewDog {
            name: name.to_string(),
            color: color.to_string(),
            tail_length,
            weight,
        }
    }
}

/// Rows inserted on every bootstrap.
pub fn seed_dogs() -> [NewDog; 2] {
    [
        NewDog::new("Neo", "red & amber", 22, 32),
        NewDog::new("Jessy", "black & white", 7, 14),
    ]
}

/// Column a list can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortAttribute {
    Id,
    #[default]
    Name,
    Color,
    TailLength,
    Weight,
}

impl SortAttribute {
    pub fn column(self) -> &'static str {
        match self {
            SortAttribute::Id => "id",
            SortAttribute::Name => "name",
            SortAttribute::Color => "color",
            SortAttribute::TailLength => "tail_length",
            SortAttribute::Weight => "weight",
        }
    }
}

impl FromStr for SortAttribute {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortAttribute::Id),
            "name" => Ok(SortAttribute::Name),
            "color" => Ok(SortAttribute::Color),
            "tail_length" => Ok(SortAttribute::TailLength),
            "weight" => Ok(SortAttribute::Weight),
            other => Err(StoreError::Validation(format!("unknown sort attribute '{}'", other))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(StoreError::Validation(format!("unknown sort order '{}'", s))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        })
    }
}

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// 1-based page of `limit` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    page_number: i64,
    limit: i64,
}

impl Page {
    pub fn new(page_number: i64, limit: i64) -> Result<Self, StoreError> {
        if page_number < 1 {
            return Err(StoreError::Validation(format!("pageNumber must be positive, got {}", page_number)));
        }
        if limit < 1 {
            return Err(StoreError::Validation(format!("limit must be positive, got {}", limit)));
        }
        Ok(Page { page_number, limit })
    }

    /// Parse raw query strings; `None` falls back to the defaults.
    pub fn parse(page_number: Option<&str>, limit: Option<&str>) -> Result<Self, StoreError> {
        let page_number = parse_positive("pageNumber", page_number, DEFAULT_PAGE_NUMBER)?;
        let limit = parse_positive("limit", limit, DEFAULT_LIMIT)?;
        Page::new(page_number, limit)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page {
            page_number: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(key: &str, raw: Option<&str>, default: i64) -> Result<i64, StoreError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| StoreError::Validation(format!("{} is not an integer: '{}'", key, s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_uppercased() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!("Asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn attribute_names_match_columns() {
        for attr in ["id", "name", "color", "tail_length", "weight"] {
            assert_eq!(attr.parse::<SortAttribute>().unwrap().column(), attr);
        }
        assert!("tailLength".parse::<SortAttribute>().is_err());
        assert!("name; DROP TABLE dogs".parse::<SortAttribute>().is_err());
    }

    #[test]
    fn page_offset() {
        assert_eq!(Page::default().offset(), 0);
        assert_eq!(Page::default().limit(), 10);
        let p = Page::parse(Some("2"), Some("1")).unwrap();
        assert_eq!((p.offset(), p.limit()), (1, 1));
        let p = Page::parse(Some("3"), Some("25")).unwrap();
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn page_rejects_garbage() {
        assert!(Page::parse(Some("two"), None).is_err());
        assert!(Page::parse(None, Some("1.5")).is_err());
        assert!(Page::parse(Some("0"), None).is_err());
        assert!(Page::parse(None, Some("-3")).is_err());
    }

    #[test]
    fn seeds_are_fixed() {
        let [neo, jessy] = seed_dogs();
        assert_eq!(neo, NewDog::new("Neo", "red & amber", 22, 32));
        assert_eq!(jessy.name, "Jessy");
        assert_eq!(jessy.tail_length, 7);
    }
}
