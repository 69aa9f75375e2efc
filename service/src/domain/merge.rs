//! Merging of [`Property`] data into a presentation template.
//!
//! [`Plan::compute()`] turns field values, image [`Assignments`] and a page
//! [`Selection`] into the exact set of substitutions and deletions to be
//! applied to a copy of the template. The computation is pure: the same
//! inputs always produce the same [`Plan`].
//!
//! [`Assignments`]: image::Assignments
//! [`Selection`]: page::Selection

use std::{str::FromStr as _, sync::LazyLock};

use regex::Regex;
use tracing as log;

use crate::domain::{
    image, page,
    presentation::{Layout, ObjectId},
    property::{Field, FieldValue},
    Property,
};

/// Set of changes turning a template copy into a filled presentation.
///
/// Changes must be applied in a single batch in the order of the fields:
/// [`TextReplacement`]s, [`ImageReplacement`]s, then [`SlideDeletion`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Plan {
    /// Placeholder tokens to be replaced with text.
    pub texts: Vec<TextReplacement>,

    /// Image elements to be replaced with source images.
    pub images: Vec<ImageReplacement>,

    /// Slides to be removed.
    pub deletions: Vec<SlideDeletion>,
}

impl Plan {
    /// Computes a new [`Plan`] against the current [`Layout`] of a template
    /// copy.
    ///
    /// Unrecognized slot tokens, slots without a matching element and slide
    /// indices out of the [`Layout`] bounds are skipped.
    #[must_use]
    pub fn compute(
        property: &Property,
        assignments: &image::Assignments,
        selection: &page::Selection,
        layout: &Layout,
    ) -> Self {
        Self {
            texts: Self::texts(property),
            images: Self::images(assignments, layout),
            deletions: Self::deletions(selection, layout),
        }
    }

    /// Indicates whether this [`Plan`] changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
            && self.images.is_empty()
            && self.deletions.is_empty()
    }

    /// Returns the total number of changes in this [`Plan`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len() + self.images.len() + self.deletions.len()
    }

    /// Computes [`TextReplacement`]s for every recognized [`Field`] holding a
    /// string or being unset.
    ///
    /// Placeholder tokens are stripped from the values, as replacements are
    /// applied one after another.
    fn texts(property: &Property) -> Vec<TextReplacement> {
        Field::ALL
            .iter()
            .filter_map(|field| {
                let value = match property.field(*field) {
                    FieldValue::Text(s) => {
                        let value = strip_tokens(s);
                        if value.len() != s.len() {
                            log::debug!(
                                "stripped placeholder tokens from `{field}` \
                                 property field",
                            );
                        }
                        value
                    }
                    FieldValue::Unset => String::new(),
                    FieldValue::Structured => {
                        log::debug!(
                            "skipping non-string `{field}` property field",
                        );
                        return None;
                    }
                };
                Some(TextReplacement {
                    token: field.token(),
                    value,
                })
            })
            .collect()
    }

    /// Resolves [`ImageReplacement`]s for the recognized slots of the provided
    /// [`image::Assignments`].
    fn images(
        assignments: &image::Assignments,
        layout: &Layout,
    ) -> Vec<ImageReplacement> {
        assignments
            .iter()
            .filter_map(|(token, url)| {
                let Ok(slot) = image::Slot::from_str(token) else {
                    log::debug!("ignoring unknown image slot `{token}`");
                    return None;
                };
                let Some(element) = layout.find_element(token) else {
                    log::debug!("no template element for image slot `{slot}`");
                    return None;
                };
                Some(ImageReplacement {
                    slot,
                    element: element.id.clone(),
                    url: url.clone(),
                })
            })
            .collect()
    }

    /// Resolves [`SlideDeletion`]s for the deselected [`page::Category`]s.
    fn deletions(
        selection: &page::Selection,
        layout: &Layout,
    ) -> Vec<SlideDeletion> {
        selection
            .deselected()
            .flat_map(|category| {
                category.slide_indices().iter().filter_map(move |index| {
                    let Some(slide) = layout.slides.get(*index) else {
                        log::warn!(
                            "slide {index} of `{category}` page category is \
                             out of template bounds ({} slides)",
                            layout.slides.len(),
                        );
                        return None;
                    };
                    Some(SlideDeletion {
                        category,
                        index: *index,
                        slide: slide.id.clone(),
                    })
                })
            })
            .collect()
    }
}

/// Removes everything looking like a placeholder token from the provided
/// `value`, including tokens formed by a previous removal.
fn strip_tokens(value: &str) -> String {
    static REGEX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\{\{[^{}]*\}\}").expect("valid regex")
    });

    let mut value = value.to_owned();
    loop {
        let stripped = REGEX.replace_all(&value, "").into_owned();
        if stripped.len() == value.len() {
            return value;
        }
        value = stripped;
    }
}

/// Replacement of all occurrences of a placeholder token with text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextReplacement {
    /// Placeholder token to be replaced (like `{{title}}`).
    pub token: String,

    /// Text to replace the token with.
    pub value: String,
}

/// Replacement of a template image element with a source image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageReplacement {
    /// [`image::Slot`] the element was resolved for.
    pub slot: image::Slot,

    /// [`ObjectId`] of the element to be replaced.
    pub element: ObjectId,

    /// [`image::Url`] of the source image.
    pub url: image::Url,
}

/// Removal of a template slide showing a deselected [`page::Category`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlideDeletion {
    /// [`page::Category`] the slide belongs to.
    pub category: page::Category,

    /// Index of the slide in the template.
    pub index: usize,

    /// [`ObjectId`] of the slide.
    pub slide: ObjectId,
}
