//! [`Property`] definitions.

use std::sync::LazyLock;

use common::define_kind;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Real estate object described by a flat set of named fields.
///
/// Values are normally strings. Any other JSON value is carried along as is,
/// but is never used as a text placeholder substitution.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Property(Map<String, Value>);

impl Property {
    /// Creates a new blank [`Property`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the provided `name` may be used as a field name.
    #[must_use]
    pub fn is_valid_name(name: impl AsRef<str>) -> bool {
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z][A-Za-z0-9_]{0,63}$").expect("valid regex")
        });

        REGEX.is_match(name.as_ref())
    }

    /// Sets the `value` of the field with the provided `name`, returning the
    /// previous one, if any.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the raw value of the field with the provided `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the value of the field with the provided `name` if it's a
    /// string.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Returns the [`FieldValue`] of the provided recognized [`Field`].
    #[must_use]
    pub fn field(&self, field: Field) -> FieldValue<'_> {
        match self.0.get(field.name().as_str()) {
            None | Some(Value::Null) => FieldValue::Unset,
            Some(Value::String(s)) => FieldValue::Text(s),
            Some(
                Value::Bool(_)
                | Value::Number(_)
                | Value::Array(_)
                | Value::Object(_),
            ) => FieldValue::Structured,
        }
    }

    /// Iterates over all the fields of this [`Property`] ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the display title of this [`Property`], if it has any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.non_empty(Field::Title)
    }

    /// Returns the display address of this [`Property`] in a
    /// `{street} {house_nr}, {postcode} {town}` form, omitting empty parts.
    #[must_use]
    pub fn address(&self) -> Option<String> {
        let join = |a: Option<&str>, b: Option<&str>| match (a, b) {
            (Some(a), Some(b)) => Some(format!("{a} {b}")),
            (a, b) => a.or(b).map(ToOwned::to_owned),
        };

        let street = join(
            self.non_empty(Field::AddressStreet),
            self.non_empty(Field::AddressHouseNr),
        );
        let town = join(
            self.non_empty(Field::AddressPostcode),
            self.non_empty(Field::AddressTown),
        );
        match (street, town) {
            (Some(street), Some(town)) => Some(format!("{street}, {town}")),
            (street, town) => street.or(town),
        }
    }

    /// Returns the required [`Field`]s which are not filled in this
    /// [`Property`].
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.non_empty(*f).is_none())
            .collect()
    }

    /// Returns the trimmed string value of the provided [`Field`], unless
    /// it's blank.
    fn non_empty(&self, field: Field) -> Option<&str> {
        match self.field(field) {
            FieldValue::Text(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            FieldValue::Unset | FieldValue::Structured => None,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Property
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Value of a recognized [`Field`] in a [`Property`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldValue<'a> {
    /// Field is absent or `null`.
    Unset,

    /// Field holds a plain string.
    Text(&'a str),

    /// Field holds a non-string value (a map, a list, a flag or a number).
    Structured,
}

define_kind! {
    #[doc = "Recognized text field of a [`Property`]."]
    #[case = "snake_case"]
    enum Field {
        #[doc = "Headline of the offer."]
        Title = 1,

        #[doc = "Asking price or rent."]
        Price = 2,

        #[doc = "Type of the object (house, apartment, ...)."]
        ObjectType = 3,

        #[doc = "Type of the offer (sale, rent)."]
        OfferType = 4,

        #[doc = "Teaser text."]
        ShortDescription = 5,

        #[doc = "Full description text."]
        LongDescription = 6,

        #[doc = "Street of the address."]
        AddressStreet = 7,

        #[doc = "House number of the address."]
        AddressHouseNr = 8,

        #[doc = "Postcode of the address."]
        AddressPostcode = 9,

        #[doc = "Town of the address."]
        AddressTown = 10,

        #[doc = "Total number of rooms."]
        NumberRooms = 11,

        #[doc = "Number of bedrooms."]
        NumberBedrooms = 12,

        #[doc = "Number of bathrooms."]
        NumberBathrooms = 13,

        #[doc = "Living area."]
        LivingArea = 14,

        #[doc = "Plot area."]
        PlotArea = 15,

        #[doc = "Year of construction."]
        ConstructionYear = 16,

        #[doc = "Floor the object is located on."]
        Floor = 17,

        #[doc = "Energy efficiency class."]
        EnergyEfficiency = 18,

        #[doc = "Energy consumption value."]
        EnergyConsumption = 19,

        #[doc = "Type of the energy certificate."]
        EnergyCertificateType = 20,

        #[doc = "Type of heating."]
        HeatingType = 21,

        #[doc = "Parking facilities."]
        Parking = 22,

        #[doc = "Equipment and fittings."]
        Equipment = 23,

        #[doc = "Description of the neighbourhood."]
        LocationDescription = 24,

        #[doc = "Name of the responsible agent."]
        AgentName = 25,

        #[doc = "Phone number of the responsible agent."]
        AgentPhone = 26,

        #[doc = "Email of the responsible agent."]
        AgentEmail = 27,

        #[doc = "Name of the agency."]
        CompanyName = 28,
    }
}

impl Field {
    /// [`Field`]s every complete [`Property`] must have filled.
    pub const REQUIRED: &'static [Self] = &[
        Self::Title,
        Self::AddressStreet,
        Self::AddressHouseNr,
        Self::AddressPostcode,
        Self::AddressTown,
        Self::Price,
        Self::ObjectType,
        Self::OfferType,
        Self::ShortDescription,
    ];

    /// Returns the name of this [`Field`] inside a [`Property`].
    #[must_use]
    pub fn name(self) -> String {
        self.to_string()
    }

    /// Returns the placeholder token of this [`Field`] in presentation
    /// templates.
    #[must_use]
    pub fn token(self) -> String {
        format!("{{{{{self}}}}}")
    }
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{Field, FieldValue, Property};

    #[test]
    fn classifies_field_values() {
        let property: Property = [
            ("title", json!("Lakeview Villa")),
            ("price", json!(450_000)),
            ("object_type", json!({"kind": "villa"})),
            ("offer_type", json!(null)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            property.field(Field::Title),
            FieldValue::Text("Lakeview Villa"),
        );
        assert_eq!(property.field(Field::Price), FieldValue::Structured);
        assert_eq!(property.field(Field::ObjectType), FieldValue::Structured);
        assert_eq!(property.field(Field::OfferType), FieldValue::Unset);
        assert_eq!(property.field(Field::Parking), FieldValue::Unset);
    }

    #[test]
    fn formats_tokens_and_names() {
        assert_eq!(Field::AddressHouseNr.name(), "address_house_nr");
        assert_eq!(Field::Title.token(), "{{title}}");
        assert_eq!(
            Field::EnergyCertificateType.token(),
            "{{energy_certificate_type}}",
        );
    }

    #[test]
    fn composes_display_address() {
        let full: Property = [
            ("address_street", "Seestraße"),
            ("address_house_nr", "12a"),
            ("address_postcode", "82319"),
            ("address_town", "Starnberg"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            full.address().as_deref(),
            Some("Seestraße 12a, 82319 Starnberg"),
        );

        let partial: Property =
            [("address_street", "Seestraße"), ("address_town", " Starnberg ")]
                .into_iter()
                .collect();
        assert_eq!(partial.address().as_deref(), Some("Seestraße, Starnberg"));

        assert_eq!(Property::new().address(), None);
    }

    #[test]
    fn reports_missing_required_fields() {
        let mut property = Property::new();
        assert_eq!(property.missing_fields(), Field::REQUIRED);

        for field in Field::REQUIRED {
            _ = property.set(field.name(), "x");
        }
        _ = property.set("title", "   ");
        _ = property.set("price", json!(1));

        assert_eq!(property.missing_fields(), [Field::Title, Field::Price]);
    }

    #[test]
    fn validates_field_names() {
        assert!(Property::is_valid_name("title"));
        assert!(Property::is_valid_name("city_image_1"));
        assert!(Property::is_valid_name("pageSelection"));
        assert!(!Property::is_valid_name(""));
        assert!(!Property::is_valid_name("1st"));
        assert!(!Property::is_valid_name("{{title}}"));
        assert!(!Property::is_valid_name("a".repeat(65)));
    }
}
