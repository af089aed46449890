use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Meal category. Declaration order is the planning order within a day, and
/// `Ord` follows it, so maps keyed by `Category` iterate breakfast first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
}

impl Category {
    /// All categories in planning order.
    pub const ALL: [Category; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        };
        f.write_str(s)
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Category`] string.
#[derive(Debug, Clone)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid meal category: {:?}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

// ---------------------------------------------------------------------------

/// Day of the week, Monday first. `Ord` follows declaration order, so maps
/// keyed by `Weekday` iterate in week order regardless of how the rows came
/// back from the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in week order.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };
        f.write_str(s)
    }
}

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            other => Err(WeekdayParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Weekday`] string.
#[derive(Debug, Clone)]
pub struct WeekdayParseError(pub String);

impl fmt::Display for WeekdayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid weekday: {:?}", self.0)
    }
}

impl std::error::Error for WeekdayParseError {}

// ---------------------------------------------------------------------------
// Row structs
// ---------------------------------------------------------------------------

/// A row in the `meals` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MealRow {
    pub id: i32,
    pub category: Category,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A row in the `ingredients` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct IngredientRow {
    pub meal_id: i32,
    pub position: i32,
    pub name: String,
}

/// A row in the `plan` table: one (day, category, meal) slot assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct PlanEntryRow {
    pub day: Weekday,
    pub category: Category,
    pub meal_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trip() {
        for cat in Category::ALL {
            let s = match cat {
                Category::Breakfast => "breakfast",
                Category::Lunch => "lunch",
                Category::Dinner => "dinner",
            };
            assert_eq!(cat.to_string(), s);
            assert_eq!(s.parse::<Category>().unwrap(), cat);
        }
        assert!("brunch".parse::<Category>().is_err());
        // Parsing is exact: the CLI lowercases input before parsing.
        assert!("Breakfast".parse::<Category>().is_err());
    }

    #[test]
    fn weekday_order_is_week_order() {
        assert!(Weekday::Monday < Weekday::Tuesday);
        assert!(Weekday::Saturday < Weekday::Sunday);
        assert_eq!(Weekday::ALL.len(), 7);
        assert_eq!("wednesday".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn category_order_is_planning_order() {
        assert!(Category::Breakfast < Category::Lunch);
        assert!(Category::Lunch < Category::Dinner);
    }
}
