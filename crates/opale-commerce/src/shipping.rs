//! Shipping tariffs: wilaya → price group → delivery cost.
//!
//! Delivery pricing buckets the 58 Algerian wilayas into four price groups.
//! Each group has one tariff per delivery method. The tables are plain data;
//! [`validate_tables`] checks them for gaps at startup so an unmapped wilaya
//! is a configuration error rather than a silent free delivery.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Home delivery.
    #[default]
    Domicile,
    /// Pickup at a courier office.
    Bureau,
}

impl DeliveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Domicile => "domicile",
            DeliveryMethod::Bureau => "bureau",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryMethod::Domicile => "À domicile",
            DeliveryMethod::Bureau => "Bureau",
        }
    }

    /// Parse a delivery method string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "domicile" => Some(DeliveryMethod::Domicile),
            "bureau" => Some(DeliveryMethod::Bureau),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The 58 wilayas, in official numbering order (Adrar is wilaya 01).
pub const WILAYAS: [&str; 58] = [
    "Adrar",
    "Chlef",
    "Laghouat",
    "Oum El Bouaghi",
    "Batna",
    "Béjaïa",
    "Biskra",
    "Béchar",
    "Blida",
    "Bouira",
    "Tamanrasset",
    "Tébessa",
    "Tlemcen",
    "Tiaret",
    "Tizi Ouzou",
    "Alger",
    "Djelfa",
    "Jijel",
    "Sétif",
    "Saïda",
    "Skikda",
    "Sidi Bel Abbès",
    "Annaba",
    "Guelma",
    "Constantine",
    "Médéa",
    "Mostaganem",
    "M'Sila",
    "Mascara",
    "Ouargla",
    "Oran",
    "El Bayadh",
    "Illizi",
    "Bordj Bou Arreridj",
    "Boumerdès",
    "El Tarf",
    "Tindouf",
    "Tissemsilt",
    "El Oued",
    "Khenchela",
    "Souk Ahras",
    "Tipaza",
    "Mila",
    "Aïn Defla",
    "Naâma",
    "Aïn Témouchent",
    "Ghardaïa",
    "Relizane",
    "Timimoun",
    "Bordj Badji Mokhtar",
    "Ouled Djellal",
    "Béni Abbès",
    "In Salah",
    "In Guezzam",
    "Touggourt",
    "Djanet",
    "El M'Ghair",
    "El Meniaa",
];

/// Wilaya → price group (1–4).
const WILAYA_GROUPS: [(&str, u8); 58] = [
    ("Alger", 1),
    ("Blida", 1),
    ("Boumerdès", 1),
    ("Tipaza", 1),
    ("Médéa", 1),
    ("Tizi Ouzou", 1),
    ("Bouira", 1),
    ("Béjaïa", 1),
    ("Chlef", 2),
    ("Oum El Bouaghi", 2),
    ("Batna", 2),
    ("Jijel", 2),
    ("Sétif", 2),
    ("Skikda", 2),
    ("Sidi Bel Abbès", 2),
    ("Annaba", 2),
    ("Guelma", 2),
    ("Constantine", 2),
    ("Mostaganem", 2),
    ("M'Sila", 2),
    ("Mascara", 2),
    ("Oran", 2),
    ("Bordj Bou Arreridj", 2),
    ("El Tarf", 2),
    ("Tissemsilt", 2),
    ("Khenchela", 2),
    ("Souk Ahras", 2),
    ("Mila", 2),
    ("Aïn Defla", 2),
    ("Aïn Témouchent", 2),
    ("Relizane", 2),
    ("Tiaret", 2),
    ("Laghouat", 3),
    ("Biskra", 3),
    ("Béchar", 3),
    ("Tébessa", 3),
    ("Tlemcen", 3),
    ("Djelfa", 3),
    ("Saïda", 3),
    ("El Bayadh", 3),
    ("El Oued", 3),
    ("Naâma", 3),
    ("Adrar", 4),
    ("Tamanrasset", 4),
    ("Ouargla", 4),
    ("Illizi", 4),
    ("Tindouf", 4),
    ("Ghardaïa", 4),
    ("Timimoun", 4),
    ("Bordj Badji Mokhtar", 4),
    ("Ouled Djellal", 4),
    ("Béni Abbès", 4),
    ("In Salah", 4),
    ("In Guezzam", 4),
    ("Touggourt", 4),
    ("Djanet", 4),
    ("El M'Ghair", 4),
    ("El Meniaa", 4),
];

/// Tariff per group (index 0 = group 1), in dinars.
const BUREAU_TARIFFS: [i64; 4] = [350, 450, 450, 750];
const DOMICILE_TARIFFS: [i64; 4] = [600, 600, 800, 1200];

/// Look up the price group for a wilaya.
///
/// Tries an exact match first, then falls back to a case-insensitive match
/// so e.g. "alger" still resolves.
pub fn wilaya_group(wilaya: &str) -> Option<u8> {
    if let Some(&(_, group)) = WILAYA_GROUPS.iter().find(|(name, _)| *name == wilaya) {
        return Some(group);
    }

    let lowered = wilaya.to_lowercase();
    WILAYA_GROUPS
        .iter()
        .find(|(name, _)| name.to_lowercase() == lowered)
        .map(|&(_, group)| group)
}

/// Look up the shipping cost for a delivery method and price group.
pub fn shipping_cost(method: DeliveryMethod, group: u8) -> Option<Money> {
    let tariffs = match method {
        DeliveryMethod::Bureau => &BUREAU_TARIFFS,
        DeliveryMethod::Domicile => &DOMICILE_TARIFFS,
    };
    tariffs
        .get(group.checked_sub(1)? as usize)
        .map(|&da| Money::new(da))
}

/// Quote the shipping cost for a wilaya.
///
/// An unmapped wilaya is an error, never a zero-cost quote.
pub fn quote(wilaya: &str, method: DeliveryMethod) -> Result<Money, CommerceError> {
    let group =
        wilaya_group(wilaya).ok_or_else(|| CommerceError::UnknownWilaya(wilaya.to_string()))?;
    shipping_cost(method, group).ok_or(CommerceError::MissingTariff { method, group })
}

/// Startup configuration check for the tariff tables.
///
/// Every supported wilaya must resolve to a group, and every group must
/// have a tariff for both delivery methods.
pub fn validate_tables() -> Result<(), CommerceError> {
    for wilaya in WILAYAS {
        let group = wilaya_group(wilaya)
            .ok_or_else(|| CommerceError::UnknownWilaya(wilaya.to_string()))?;

        for method in [DeliveryMethod::Domicile, DeliveryMethod::Bureau] {
            shipping_cost(method, group)
                .ok_or(CommerceError::MissingTariff { method, group })?;
        }
    }
    Ok(())
}
