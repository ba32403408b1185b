//! Domain value objects: PanelMaterial.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. This file's
//! only job is to define the types, their string representations, and their
//! `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `display_name` and `FromStr` arms
//! 3. Append it to `ALL`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PanelMaterial ────────────────────────────────────────────────────────────

/// Photovoltaic material a panel is made of.
///
/// A closed set: a panel either carries one of these or has no material at
/// all (which the validator rejects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PanelMaterial {
    #[serde(rename = "multi-si", alias = "MULTI_SI", alias = "multisi")]
    MultiSi,
    #[serde(rename = "mono-si", alias = "MONO_SI", alias = "monosi")]
    MonoSi,
    #[serde(rename = "a-si", alias = "A_SI", alias = "asi")]
    AmorphousSi,
    #[serde(rename = "cd-te", alias = "CD_TE", alias = "cdte")]
    CdTe,
    #[serde(rename = "cigs", alias = "CIGS")]
    Cigs,
}

impl PanelMaterial {
    /// Every material, in catalogue order.
    pub const ALL: [Self; 5] = [
        Self::MultiSi,
        Self::MonoSi,
        Self::AmorphousSi,
        Self::CdTe,
        Self::Cigs,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MultiSi => "multi-si",
            Self::MonoSi => "mono-si",
            Self::AmorphousSi => "a-si",
            Self::CdTe => "cd-te",
            Self::Cigs => "cigs",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MultiSi => "Multicrystalline Silicon",
            Self::MonoSi => "Monocrystalline Silicon",
            Self::AmorphousSi => "Amorphous Silicon",
            Self::CdTe => "Cadmium Telluride",
            Self::Cigs => "Copper Indium Gallium Selenide",
        }
    }
}

impl fmt::Display for PanelMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelMaterial {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "multi-si" | "multisi" | "multicrystalline-silicon" => Ok(Self::MultiSi),
            "mono-si" | "monosi" | "monocrystalline-silicon" => Ok(Self::MonoSi),
            "a-si" | "asi" | "amorphous-silicon" => Ok(Self::AmorphousSi),
            "cd-te" | "cdte" | "cadmium-telluride" => Ok(Self::CdTe),
            "cigs" => Ok(Self::Cigs),
            _ => Err(DomainError::UnknownMaterial(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_display_is_short_code() {
        assert_eq!(PanelMaterial::CdTe.to_string(), "cd-te");
        assert_eq!(PanelMaterial::AmorphousSi.to_string(), "a-si");
    }

    #[test]
    fn material_from_str_accepts_aliases() {
        assert_eq!("CD_TE".parse::<PanelMaterial>().unwrap(), PanelMaterial::CdTe);
        assert_eq!("cdte".parse::<PanelMaterial>().unwrap(), PanelMaterial::CdTe);
        assert_eq!(
            "Monocrystalline_Silicon".parse::<PanelMaterial>().unwrap(),
            PanelMaterial::MonoSi
        );
        assert_eq!(" cigs ".parse::<PanelMaterial>().unwrap(), PanelMaterial::Cigs);
    }

    #[test]
    fn material_from_str_unknown_errors() {
        assert_eq!(
            "wood".parse::<PanelMaterial>(),
            Err(DomainError::UnknownMaterial("wood".into()))
        );
        assert!("".parse::<PanelMaterial>().is_err());
    }

    #[test]
    fn every_material_round_trips_through_its_code() {
        for material in PanelMaterial::ALL {
            assert_eq!(material.as_str().parse::<PanelMaterial>().unwrap(), material);
        }
    }

    #[test]
    fn material_serializes_as_short_code() {
        let json = serde_json::to_string(&PanelMaterial::MultiSi).unwrap();
        assert_eq!(json, "\"multi-si\"");

        let parsed: PanelMaterial = serde_json::from_str("\"CD_TE\"").unwrap();
        assert_eq!(parsed, PanelMaterial::CdTe);
    }
}
