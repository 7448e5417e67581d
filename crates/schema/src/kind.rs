//! Closed enumeration of the built-in schemas.

use serde::Deserialize;

use crate::epagomenal::EpagomenalSchema;
use crate::gregorian::GregorianSchema;
use crate::international_fixed::InternationalFixedSchema;
use crate::julian::JulianSchema;
use crate::lunisolar::LunisolarSchema;
use crate::pax::PaxSchema;
use crate::positivist::PositivistSchema;
use crate::schema::CalendricalSchema;
use crate::tabular_islamic::TabularIslamicSchema;
use crate::tropicalia::TropicaliaSchema;
use crate::world::WorldSchema;

static GREGORIAN: GregorianSchema = GregorianSchema;
static JULIAN: JulianSchema = JulianSchema;
static COPTIC12: EpagomenalSchema = EpagomenalSchema::COPTIC12;
static COPTIC13: EpagomenalSchema = EpagomenalSchema::COPTIC13;
static EGYPTIAN12: EpagomenalSchema = EpagomenalSchema::EGYPTIAN12;
static EGYPTIAN13: EpagomenalSchema = EpagomenalSchema::EGYPTIAN13;
static FRENCH_REPUBLICAN12: EpagomenalSchema = EpagomenalSchema::FRENCH_REPUBLICAN12;
static FRENCH_REPUBLICAN13: EpagomenalSchema = EpagomenalSchema::FRENCH_REPUBLICAN13;
static TABULAR_ISLAMIC: TabularIslamicSchema = TabularIslamicSchema;
static TROPICALIA: TropicaliaSchema = TropicaliaSchema;
static WORLD: WorldSchema = WorldSchema;
static INTERNATIONAL_FIXED: InternationalFixedSchema = InternationalFixedSchema;
static POSITIVIST: PositivistSchema = PositivistSchema;
static PAX: PaxSchema = PaxSchema;
static LUNISOLAR: LunisolarSchema = LunisolarSchema;

/// Identifies one of the built-in schemas.
///
/// Deserializes from its `snake_case` name, e.g. `"french_republican13"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Gregorian,
    Julian,
    Coptic12,
    Coptic13,
    Egyptian12,
    Egyptian13,
    FrenchRepublican12,
    FrenchRepublican13,
    TabularIslamic,
    Tropicalia,
    World,
    InternationalFixed,
    Positivist,
    Pax,
    Lunisolar,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 15] = [
        Self::Gregorian,
        Self::Julian,
        Self::Coptic12,
        Self::Coptic13,
        Self::Egyptian12,
        Self::Egyptian13,
        Self::FrenchRepublican12,
        Self::FrenchRepublican13,
        Self::TabularIslamic,
        Self::Tropicalia,
        Self::World,
        Self::InternationalFixed,
        Self::Positivist,
        Self::Pax,
        Self::Lunisolar,
    ];

    /// Returns the process-wide schema instance.
    pub fn schema(self) -> &'static dyn CalendricalSchema {
        match self {
            Self::Gregorian => &GREGORIAN,
            Self::Julian => &JULIAN,
            Self::Coptic12 => &COPTIC12,
            Self::Coptic13 => &COPTIC13,
            Self::Egyptian12 => &EGYPTIAN12,
            Self::Egyptian13 => &EGYPTIAN13,
            Self::FrenchRepublican12 => &FRENCH_REPUBLICAN12,
            Self::FrenchRepublican13 => &FRENCH_REPUBLICAN13,
            Self::TabularIslamic => &TABULAR_ISLAMIC,
            Self::Tropicalia => &TROPICALIA,
            Self::World => &WORLD,
            Self::InternationalFixed => &INTERNATIONAL_FIXED,
            Self::Positivist => &POSITIVIST,
            Self::Pax => &PAX,
            Self::Lunisolar => &LUNISOLAR,
        }
    }

    /// The `snake_case` name, identical to the schema's own name.
    pub fn name(self) -> &'static str {
        self.schema().name()
    }

    /// Parses a schema kind from a case-insensitive name.
    ///
    /// Returns `None` if the name is not recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}
