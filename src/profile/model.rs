use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    #[serde(alias = "prefs", deserialize_with = "dedupe_preferences")]
    pub preferences: Vec<Preference>,
    pub created_at: String,
}

impl Profile {
    pub fn matches(&self, username: &str) -> bool {
        same_username(&self.username, username)
    }
}

fn dedupe_preferences<'de, D>(deserializer: D) -> Result<Vec<Preference>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Preference>::deserialize(deserializer)?;
    let mut preferences = Vec::with_capacity(raw.len());
    for pref in raw {
        if !preferences.contains(&pref) {
            preferences.push(pref);
        }
    }

    Ok(preferences)
}

pub fn same_username(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Preference {
    Mare,
    Montagna,
    #[serde(rename = "Città d'arte")]
    CittaDArte,
    Avventura,
    Relax,
    Cultura,
    Cibo,
    Natura,
    Nightlife,
    Shopping,
    Musei,
    Sport,
    #[serde(rename = "Road trip")]
    RoadTrip,
    Camping,
    Crociera,
    Safari,
    Spa,
    Trekking,
    Storia,
    Fotografia,
}

impl Preference {
    pub const ALL: [Preference; 20] = [
        Preference::Mare,
        Preference::Montagna,
        Preference::CittaDArte,
        Preference::Avventura,
        Preference::Relax,
        Preference::Cultura,
        Preference::Cibo,
        Preference::Natura,
        Preference::Nightlife,
        Preference::Shopping,
        Preference::Musei,
        Preference::Sport,
        Preference::RoadTrip,
        Preference::Camping,
        Preference::Crociera,
        Preference::Safari,
        Preference::Spa,
        Preference::Trekking,
        Preference::Storia,
        Preference::Fotografia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::Mare => "Mare",
            Preference::Montagna => "Montagna",
            Preference::CittaDArte => "Città d'arte",
            Preference::Avventura => "Avventura",
            Preference::Relax => "Relax",
            Preference::Cultura => "Cultura",
            Preference::Cibo => "Cibo",
            Preference::Natura => "Natura",
            Preference::Nightlife => "Nightlife",
            Preference::Shopping => "Shopping",
            Preference::Musei => "Musei",
            Preference::Sport => "Sport",
            Preference::RoadTrip => "Road trip",
            Preference::Camping => "Camping",
            Preference::Crociera => "Crociera",
            Preference::Safari => "Safari",
            Preference::Spa => "Spa",
            Preference::Trekking => "Trekking",
            Preference::Storia => "Storia",
            Preference::Fotografia => "Fotografia",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preference {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim().to_lowercase();
        Preference::ALL
            .iter()
            .copied()
            .find(|pref| pref.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "unknown preference {input:?}. run `tourmate prefs` for the catalog"
                ))
            })
    }
}
