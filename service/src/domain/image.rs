//! Image definitions.

use std::{collections::BTreeMap, fmt, str::FromStr};

use derive_more::{AsRef, Display, Error};
use serde::{Deserialize, Serialize};
use tracing as log;

use crate::domain::{page, Property};

/// Absolute `http(s)` URL of an image.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "url::Url", into = "url::Url")]
pub struct Url(url::Url);

impl Url {
    /// Creates a new [`Url`] if the given `url` is a valid absolute `http(s)`
    /// URL.
    #[must_use]
    pub fn new(url: impl AsRef<str>) -> Option<Self> {
        url::Url::parse(url.as_ref())
            .ok()
            .and_then(|u| Self::try_from(u).ok())
    }

    /// Returns this [`Url`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<url::Url> for Url {
    type Error = &'static str;

    fn try_from(url: url::Url) -> Result<Self, Self::Error> {
        matches!(url.scheme(), "http" | "https")
            .then_some(Self(url))
            .ok_or("image `Url` must have `http` or `https` scheme")
    }
}

impl From<Url> for url::Url {
    fn from(url: Url) -> Self {
        url.0
    }
}

impl FromStr for Url {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid image `Url`")
    }
}

/// Image slot of a presentation template.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Slot {
    /// Agency logo, the first uploaded image.
    Logo,

    /// Photo of the agent, the second uploaded image.
    AgentPhoto,

    /// City picture taken from a [`Property`] field (`1..=3`).
    City(u8),

    /// Image of a [`page::Category`] (`1..=image_slots`).
    Page(page::Category, u8),
}

impl Slot {
    /// Number of [`Slot::City`] slots.
    pub const CITY_SLOTS: u8 = 3;

    /// Returns the [`Property`] field holding the URL of the provided
    /// [`Slot::City`] number.
    #[must_use]
    pub fn city_field(num: u8) -> String {
        format!("city_image_{num}")
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logo => write!(f, "logo"),
            Self::AgentPhoto => write!(f, "agentimg"),
            Self::City(n) => write!(f, "cityimg{n}"),
            Self::Page(c, n) => write!(f, "{}{n}", c.slot_prefix()),
        }
    }
}

impl FromStr for Slot {
    type Err = UnknownSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        /// Parses the slot number following the `prefix` in `s`, if it's in
        /// `1..=max` range.
        fn num(s: &str, prefix: &str, max: u8) -> Option<u8> {
            let digits = s.strip_prefix(prefix)?;
            if digits.starts_with('0')
                || !digits.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            digits.parse().ok().filter(|n| (1..=max).contains(n))
        }

        match s {
            "logo" => return Ok(Self::Logo),
            "agentimg" => return Ok(Self::AgentPhoto),
            _ => {}
        }
        if let Some(n) = num(s, "cityimg", Self::CITY_SLOTS) {
            return Ok(Self::City(n));
        }
        page::Category::ALL
            .iter()
            .find_map(|c| {
                num(s, c.slot_prefix(), c.image_slots())
                    .map(|n| Self::Page(*c, n))
            })
            .ok_or(UnknownSlotError)
    }
}

/// Error of parsing an unrecognized [`Slot`] token.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("unknown image slot")]
pub struct UnknownSlotError;

/// Association of template image slot tokens with source image [`Url`]s.
///
/// Tokens are kept raw, so unrecognized ones may be present and are ignored
/// on merging.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignments(BTreeMap<String, Url>);

impl Assignments {
    /// Creates new empty [`Assignments`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles [`Assignments`] of a project.
    ///
    /// `uploads` are addressed positionally: the first two are the logo and
    /// the agent photo, the rest fill slots of the selected
    /// [`page::Category`]s in their declaration order. City pictures are
    /// taken from the [`Property`] fields.
    #[must_use]
    pub fn assemble(
        uploads: &[Url],
        property: &Property,
        selection: &page::Selection,
    ) -> Self {
        let mut this = Self::new();
        let mut uploads = uploads.iter();

        for slot in [Slot::Logo, Slot::AgentPhoto] {
            if let Some(url) = uploads.next() {
                this.assign(slot, url.clone());
            }
        }

        for num in 1..=Slot::CITY_SLOTS {
            let field = Slot::city_field(num);
            let Some(raw) = property.text(&field).filter(|s| !s.is_empty())
            else {
                continue;
            };
            match Url::new(raw) {
                Some(url) => this.assign(Slot::City(num), url),
                None => log::warn!("skipping invalid image URL in `{field}`"),
            }
        }

        for category in page::Category::ALL {
            if !selection.is_selected(*category) {
                continue;
            }
            for num in 1..=category.image_slots() {
                if let Some(url) = uploads.next() {
                    this.assign(Slot::Page(*category, num), url.clone());
                }
            }
        }

        this
    }

    /// Assigns the provided [`Url`] to the recognized [`Slot`].
    pub fn assign(&mut self, slot: Slot, url: Url) {
        _ = self.0.insert(slot.to_string(), url);
    }

    /// Assigns the provided [`Url`] to the raw slot `token`.
    pub fn insert(&mut self, token: impl Into<String>, url: Url) {
        _ = self.0.insert(token.into(), url);
    }

    /// Returns the [`Url`] assigned to the provided [`Slot`], if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&Url> {
        self.0.get(&slot.to_string())
    }

    /// Iterates over the assigned slot tokens and [`Url`]s, ordered by token.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Url)> {
        self.0.iter().map(|(t, u)| (t.as_str(), u))
    }

    /// Returns the number of assigned slot tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use crate::domain::{page, Property};

    use super::{Assignments, Slot, Url};

    fn url(n: usize) -> Url {
        Url::new(format!("https://cdn.example.com/{n}.jpg")).unwrap()
    }

    #[test]
    fn accepts_only_http_urls() {
        assert!(Url::new("https://cdn.example.com/a.jpg").is_some());
        assert!(Url::new("http://cdn.example.com/a.jpg").is_some());
        assert!(Url::new("ftp://cdn.example.com/a.jpg").is_none());
        assert!(Url::new("data:image/png;base64,AAAA").is_none());
        assert!(Url::new("/relative.jpg").is_none());
    }

    #[test]
    fn parses_recognized_slots() {
        for (token, slot) in [
            ("logo", Slot::Logo),
            ("agentimg", Slot::AgentPhoto),
            ("cityimg1", Slot::City(1)),
            ("cityimg3", Slot::City(3)),
            ("exteriorimg2", Slot::Page(page::Category::ExteriorPhotos, 2)),
            ("interiorimg4", Slot::Page(page::Category::InteriorPhotos, 4)),
            ("floorplanimg1", Slot::Page(page::Category::FloorPlan, 1)),
            ("energyimg1", Slot::Page(page::Category::EnergyCertificate, 1)),
        ] {
            assert_eq!(Slot::from_str(token).unwrap(), slot, "{token}");
            assert_eq!(slot.to_string(), token);
        }
    }

    #[test]
    fn rejects_unrecognized_slots() {
        for token in [
            "cityimg4",
            "cityimg0",
            "cityimg01",
            "cityimg",
            "exteriorimg3",
            "floorplanimg2",
            "locationimg1",
            "Logo",
            "",
        ] {
            assert!(Slot::from_str(token).is_err(), "{token}");
        }
    }

    #[test]
    fn assembles_positional_and_category_slots() {
        let uploads = (0..6).map(url).collect::<Vec<_>>();
        let selection: page::Selection =
            [(page::Category::InteriorPhotos, false)].into_iter().collect();

        let assignments =
            Assignments::assemble(&uploads, &Property::new(), &selection);

        assert_eq!(assignments.get(Slot::Logo), Some(&url(0)));
        assert_eq!(assignments.get(Slot::AgentPhoto), Some(&url(1)));
        let exterior = |n| Slot::Page(page::Category::ExteriorPhotos, n);
        assert_eq!(assignments.get(exterior(1)), Some(&url(2)));
        assert_eq!(assignments.get(exterior(2)), Some(&url(3)));
        // Deselected interior photos consume no uploads.
        assert_eq!(
            assignments.get(Slot::Page(page::Category::FloorPlan, 1)),
            Some(&url(4)),
        );
        assert_eq!(
            assignments.get(Slot::Page(page::Category::EnergyCertificate, 1)),
            Some(&url(5)),
        );
        assert_eq!(assignments.len(), 6);
    }

    #[test]
    fn leaves_trailing_slots_unassigned() {
        let uploads = (0..3).map(url).collect::<Vec<_>>();

        let assignments = Assignments::assemble(
            &uploads,
            &Property::new(),
            &page::Selection::all(),
        );

        assert_eq!(assignments.len(), 3);
        assert!(assignments
            .get(Slot::Page(page::Category::ExteriorPhotos, 2))
            .is_none());
    }

    #[test]
    fn takes_city_images_from_property() {
        let property: Property = [
            ("city_image_1", "https://cdn.example.com/city1.jpg"),
            ("city_image_2", "not a url"),
            ("city_image_3", ""),
            ("city_image_4", "https://cdn.example.com/city4.jpg"),
        ]
        .into_iter()
        .collect();

        let assignments =
            Assignments::assemble(&[], &property, &page::Selection::all());

        assert_eq!(
            assignments.iter().collect::<Vec<_>>(),
            [(
                "cityimg1",
                &Url::new("https://cdn.example.com/city1.jpg").unwrap(),
            )],
        );
    }
}
