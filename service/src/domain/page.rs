//! Page [`Category`] definitions.

use std::{collections::BTreeMap, str::FromStr as _};

use common::define_kind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing as log;

define_kind! {
    #[doc = "Category of presentation pages a user may opt out of."]
    #[case = "camelCase"]
    enum Category {
        #[doc = "Photos of the building and the plot."]
        ExteriorPhotos = 1,

        #[doc = "Photos of the rooms."]
        InteriorPhotos = 2,

        #[doc = "Floor plan."]
        FloorPlan = 3,

        #[doc = "Neighbourhood and location."]
        Location = 4,

        #[doc = "Energy certificate."]
        EnergyCertificate = 5,
    }
}

impl Category {
    /// Returns the number of uploaded images consumed by this [`Category`].
    #[must_use]
    pub const fn image_slots(self) -> u8 {
        match self {
            Self::ExteriorPhotos => 2,
            Self::InteriorPhotos => 4,
            Self::FloorPlan | Self::EnergyCertificate => 1,
            Self::Location => 0,
        }
    }

    /// Returns the prefix of image slot tokens of this [`Category`].
    #[must_use]
    pub const fn slot_prefix(self) -> &'static str {
        match self {
            Self::ExteriorPhotos => "exteriorimg",
            Self::InteriorPhotos => "interiorimg",
            Self::FloorPlan => "floorplanimg",
            Self::Location => "locationimg",
            Self::EnergyCertificate => "energyimg",
        }
    }

    /// Returns 0-based indices of the template slides showing this
    /// [`Category`].
    ///
    /// Must be kept in sync with the authored presentation template.
    #[must_use]
    pub const fn slide_indices(self) -> &'static [usize] {
        match self {
            Self::ExteriorPhotos => &[2, 3],
            Self::InteriorPhotos => &[4, 5],
            Self::FloorPlan => &[6],
            Self::Location => &[7],
            Self::EnergyCertificate => &[8],
        }
    }
}

/// Selection of page [`Category`]s to be included into a presentation.
///
/// A [`Category`] absent from the selection is considered selected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection(BTreeMap<Category, bool>);

impl Selection {
    /// Number of positional images (logo and agent photo) always consumed
    /// before any [`Category`] ones.
    pub const POSITIONAL_IMAGES: usize = 2;

    /// Creates a new [`Selection`] with every [`Category`] selected
    /// explicitly.
    #[must_use]
    pub fn all() -> Self {
        Self(Category::ALL.iter().map(|c| (*c, true)).collect())
    }

    /// Indicates whether the provided [`Category`] is selected.
    #[must_use]
    pub fn is_selected(&self, category: Category) -> bool {
        self.0.get(&category).copied().unwrap_or(true)
    }

    /// Explicitly (de)selects the provided [`Category`].
    pub fn set(&mut self, category: Category, selected: bool) {
        _ = self.0.insert(category, selected);
    }

    /// Iterates over [`Category`]s explicitly deselected, in their
    /// declaration order.
    pub fn deselected(&self) -> impl Iterator<Item = Category> + '_ {
        self.0
            .iter()
            .filter_map(|(c, selected)| (!selected).then_some(*c))
    }

    /// Returns a copy of this [`Selection`] with a value for every known
    /// [`Category`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(
            Category::ALL
                .iter()
                .map(|c| (*c, self.is_selected(*c)))
                .collect(),
        )
    }

    /// Iterates over explicitly set values of this [`Selection`].
    pub fn iter(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }

    /// Returns the number of images required from an uploader to fill this
    /// [`Selection`].
    #[must_use]
    pub fn required_images(&self) -> usize {
        Self::POSITIONAL_IMAGES
            + Category::ALL
                .iter()
                .filter(|c| self.is_selected(**c))
                .map(|c| usize::from(c.image_slots()))
                .sum::<usize>()
    }
}

impl FromIterator<(Category, bool)> for Selection {
    fn from_iter<I: IntoIterator<Item = (Category, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, s)| (c.to_string(), s)))
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(id, selected)| {
                    Category::from_str(&id)
                        .map_err(|_| {
                            log::debug!("ignoring unknown page category `{id}`");
                        })
                        .ok()
                        .map(|c| (c, selected))
                })
                .collect(),
        ))
    }
}
