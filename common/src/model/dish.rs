use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Kind of dish the user picked in the category select.
///
/// The empty "None" option of the select is not a variant: it is modelled as
/// `Option<Category>::None` on the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pizza,
    Soup,
    Sandwich,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pizza, Category::Soup, Category::Sandwich];

    /// Wire name, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Pizza => "pizza",
            Category::Soup => "soup",
            Category::Sandwich => "sandwich",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Pizza => "Pizza",
            Category::Soup => "Soup",
            Category::Sandwich => "Sandwich",
        }
    }

    /// Parses a select value. Anything that is not a known category, including
    /// the empty "None" option, yields `None`.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Category-specific fields. These are validated only while the category is
    /// active and must all be filled in before the form can be submitted.
    pub fn fields(self) -> &'static [DishField] {
        match self {
            Category::Pizza => &[DishField::NumberOfSlices, DishField::Diameter],
            Category::Soup => &[DishField::SpicinessScale],
            Category::Sandwich => &[DishField::SlicesOfBread],
        }
    }
}

/// Every input of the dish form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DishField {
    Name,
    PreparationTime,
    Category,
    NumberOfSlices,
    Diameter,
    SpicinessScale,
    SlicesOfBread,
}

impl DishField {
    pub const ALL: [DishField; 7] = [
        DishField::Name,
        DishField::PreparationTime,
        DishField::Category,
        DishField::NumberOfSlices,
        DishField::Diameter,
        DishField::SpicinessScale,
        DishField::SlicesOfBread,
    ];

    /// Fields that are required whatever the category.
    pub const ALWAYS_REQUIRED: [DishField; 3] =
        [DishField::Name, DishField::PreparationTime, DishField::Category];

    /// JSON key of the field in the request body, also used as the DOM id.
    pub fn key(self) -> &'static str {
        match self {
            DishField::Name => "name",
            DishField::PreparationTime => "preparation_time",
            DishField::Category => "type",
            DishField::NumberOfSlices => "no_of_slices",
            DishField::Diameter => "diameter",
            DishField::SpicinessScale => "spiciness_scale",
            DishField::SlicesOfBread => "slices_of_bread",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DishField::Name => "Name",
            DishField::PreparationTime => "Preparation time",
            DishField::Category => "Type",
            DishField::NumberOfSlices => "Number of slices",
            DishField::Diameter => "Diameter",
            DishField::SpicinessScale => "Spiciness scale",
            DishField::SlicesOfBread => "Slices of bread",
        }
    }

    /// The category owning this field, `None` for the always-required ones.
    pub fn owner(self) -> Option<Category> {
        match self {
            DishField::NumberOfSlices | DishField::Diameter => Some(Category::Pizza),
            DishField::SpicinessScale => Some(Category::Soup),
            DishField::SlicesOfBread => Some(Category::Sandwich),
            DishField::Name | DishField::PreparationTime | DishField::Category => None,
        }
    }

    /// Whether the field takes part in validation for the given category.
    pub fn is_relevant(self, category: Option<Category>) -> bool {
        match self.owner() {
            None => true,
            Some(owner) => category == Some(owner),
        }
    }
}

/// Raw user input, kept as text so partially typed values survive re-renders.
///
/// Values of category-specific fields are kept when the category changes; they
/// simply stop being relevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub preparation_time: String,
    pub category: Option<Category>,
    pub no_of_slices: String,
    pub diameter: String,
    pub spiciness_scale: String,
    pub slices_of_bread: String,
}

impl DishDraft {
    pub fn value(&self, field: DishField) -> &str {
        match field {
            DishField::Name => &self.name,
            DishField::PreparationTime => &self.preparation_time,
            DishField::Category => self.category.map_or("", Category::as_str),
            DishField::NumberOfSlices => &self.no_of_slices,
            DishField::Diameter => &self.diameter,
            DishField::SpicinessScale => &self.spiciness_scale,
            DishField::SlicesOfBread => &self.slices_of_bread,
        }
    }

    /// Stores `raw` verbatim. For `DishField::Category` the text is parsed with
    /// [`Category::parse`].
    pub fn set(&mut self, field: DishField, raw: String) {
        match field {
            DishField::Name => self.name = raw,
            DishField::PreparationTime => self.preparation_time = raw,
            DishField::Category => self.category = Category::parse(&raw),
            DishField::NumberOfSlices => self.no_of_slices = raw,
            DishField::Diameter => self.diameter = raw,
            DishField::SpicinessScale => self.spiciness_scale = raw,
            DishField::SlicesOfBread => self.slices_of_bread = raw,
        }
    }

    pub fn is_blank(&self, field: DishField) -> bool {
        self.value(field).is_empty()
    }
}

/// Request body sent to the dish API.
///
/// `details` is flattened, so the JSON object carries `type` plus exactly the
/// keys of the active category:
///
/// ```json
/// { "name": "Margherita", "preparation_time": "00:20:00", "type": "pizza",
///   "no_of_slices": 8, "diameter": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishPayload {
    pub name: String,
    pub preparation_time: String,
    #[serde(flatten)]
    pub details: DishDetails,
}

impl DishPayload {
    pub fn category(&self) -> Category {
        self.details.category()
    }
}

/// Category-specific part of the payload. A blank value is `None` and
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DishDetails {
    Pizza {
        no_of_slices: Option<Number>,
        diameter: Option<Number>,
    },
    Soup {
        spiciness_scale: Option<Number>,
    },
    Sandwich {
        slices_of_bread: Option<Number>,
    },
}

impl DishDetails {
    pub fn category(&self) -> Category {
        match self {
            DishDetails::Pizza { .. } => Category::Pizza,
            DishDetails::Soup { .. } => Category::Soup,
            DishDetails::Sandwich { .. } => Category::Sandwich,
        }
    }
}
