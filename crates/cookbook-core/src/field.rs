//! Addresses for the fields of a recipe draft.
//!
//! A [`Field`] names either a whole draft field (`title`, `ingredients`,
//! `image`, ...) or one entry of a list field (`ingredients[2].name`,
//! `steps[0]`). The textual form is the path used for form element names and
//! error anchors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A field of the recipe draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Title,
    Description,
    Ingredients,
    IngredientName(usize),
    IngredientQuantity(usize),
    PreparationTime,
    Steps,
    Step(usize),
    Categories,
    Image,
}

impl Field {
    /// Whole-draft fields, in form order. List entries are not included.
    pub const TOP_LEVEL: [Field; 7] = [
        Field::Title,
        Field::Description,
        Field::Ingredients,
        Field::PreparationTime,
        Field::Steps,
        Field::Categories,
        Field::Image,
    ];

    /// Whether the field holds free text editable through `update_field`.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::Title
                | Field::Description
                | Field::PreparationTime
                | Field::IngredientName(_)
                | Field::IngredientQuantity(_)
                | Field::Step(_)
        )
    }

    /// Index into the ingredient or step list, if this is a list entry.
    pub fn index(self) -> Option<usize> {
        match self {
            Field::IngredientName(i) | Field::IngredientQuantity(i) | Field::Step(i) => Some(i),
            _ => None,
        }
    }

    /// The list-level field owning this entry, or the field itself.
    pub fn parent(self) -> Field {
        match self {
            Field::IngredientName(_) | Field::IngredientQuantity(_) => Field::Ingredients,
            Field::Step(_) => Field::Steps,
            other => other,
        }
    }

    /// Same field kind at another list index. Top-level fields are unchanged.
    pub fn with_index(self, index: usize) -> Field {
        match self {
            Field::IngredientName(_) => Field::IngredientName(index),
            Field::IngredientQuantity(_) => Field::IngredientQuantity(index),
            Field::Step(_) => Field::Step(index),
            other => other,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Description => f.write_str("description"),
            Field::Ingredients => f.write_str("ingredients"),
            Field::IngredientName(i) => write!(f, "ingredients[{i}].name"),
            Field::IngredientQuantity(i) => write!(f, "ingredients[{i}].quantity"),
            Field::PreparationTime => f.write_str("preparationTime"),
            Field::Steps => f.write_str("steps"),
            Field::Step(i) => write!(f, "steps[{i}]"),
            Field::Categories => f.write_str("categories"),
            Field::Image => f.write_str("image"),
        }
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "title" => return Ok(Field::Title),
            "description" => return Ok(Field::Description),
            "ingredients" => return Ok(Field::Ingredients),
            "preparationTime" => return Ok(Field::PreparationTime),
            "steps" => return Ok(Field::Steps),
            "categories" => return Ok(Field::Categories),
            "image" => return Ok(Field::Image),
            _ => {}
        }

        let (list, rest) = path
            .split_once('[')
            .ok_or_else(|| CoreError::field_path(path))?;
        let (index, member) = rest
            .split_once(']')
            .ok_or_else(|| CoreError::field_path(path))?;
        let index: usize = index.parse().map_err(|_| CoreError::field_path(path))?;

        match (list, member) {
            ("ingredients", ".name") => Ok(Field::IngredientName(index)),
            ("ingredients", ".quantity") => Ok(Field::IngredientQuantity(index)),
            ("steps", "") => Ok(Field::Step(index)),
            _ => Err(CoreError::field_path(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_level_paths() {
        for field in Field::TOP_LEVEL {
            let parsed: Field = field.to_string().parse().unwrap();
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn test_parse_list_entry_paths() {
        assert_eq!(
            "ingredients[3].name".parse::<Field>().unwrap(),
            Field::IngredientName(3)
        );
        assert_eq!(
            "ingredients[0].quantity".parse::<Field>().unwrap(),
            Field::IngredientQuantity(0)
        );
        assert_eq!("steps[12]".parse::<Field>().unwrap(), Field::Step(12));
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for path in [
            "",
            "titles",
            "ingredients[a].name",
            "ingredients[1]",
            "ingredients[1].weight",
            "steps[1].name",
            "steps[-1]",
            "steps[2",
        ] {
            assert!(path.parse::<Field>().is_err(), "{path} should not parse");
        }
    }

    #[test]
    fn test_text_fields() {
        assert!(Field::Title.is_text());
        assert!(Field::Step(0).is_text());
        assert!(!Field::Ingredients.is_text());
        assert!(!Field::Categories.is_text());
        assert!(!Field::Image.is_text());
    }

    #[test]
    fn test_parent_and_index() {
        assert_eq!(Field::IngredientQuantity(2).parent(), Field::Ingredients);
        assert_eq!(Field::Step(1).parent(), Field::Steps);
        assert_eq!(Field::Title.parent(), Field::Title);
        assert_eq!(Field::Step(5).index(), Some(5));
        assert_eq!(Field::Image.index(), None);
        assert_eq!(Field::IngredientName(4).with_index(1), Field::IngredientName(1));
    }
}
