//! Localized message tables.
//!
//! Layers never hold translated strings. Labels are looked up in a
//! [`Messages`] table at render time, through a [`Localizer`] supplied by the
//! shell, so a locale switch shows up on the next render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Fr];

    /// Parse a language tag such as `"fr"`, `"fr-FR"` or `"en_GB.UTF-8"`.
    pub fn from_tag(tag: &str) -> Option<Lang> {
        let primary = tag
            .split(|c: char| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Lang::En => &EN,
            Lang::Fr => &FR,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_tag(s).ok_or_else(|| UnknownLang(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: '{0}' (expected one of: en, fr)")]
pub struct UnknownLang(pub String);

/// Source of the active message table.
pub trait Localizer {
    fn messages(&self) -> &Messages;
}

impl Localizer for Lang {
    fn messages(&self) -> &Messages {
        Lang::messages(self)
    }
}

impl Localizer for Messages {
    fn messages(&self) -> &Messages {
        self
    }
}

/// A current language that can be switched while layers are in use.
#[derive(Debug, Default)]
pub struct SwitchableLocale {
    current: AtomicU8,
}

impl SwitchableLocale {
    pub fn new(lang: Lang) -> Self {
        Self {
            current: AtomicU8::new(lang as u8),
        }
    }

    pub fn get(&self) -> Lang {
        match self.current.load(Ordering::Relaxed) {
            1 => Lang::Fr,
            _ => Lang::En,
        }
    }

    pub fn set(&self, lang: Lang) {
        self.current.store(lang as u8, Ordering::Relaxed);
    }
}

impl Localizer for SwitchableLocale {
    fn messages(&self) -> &Messages {
        self.get().messages()
    }
}

/// Every user-visible string of the layer catalog, for one language.
#[derive(Debug)]
pub struct Messages {
    pub layer_cape: &'static str,
    pub layer_cape_legend: &'static str,
    pub summary_cape: &'static str,
    pub help_layer_cape: &'static str,

    pub layer_thermal_velocity: &'static str,
    pub layer_thermal_velocity_legend: &'static str,
    pub summary_thermal_velocity: &'static str,
    pub help_layer_thermal_velocity: &'static str,

    pub layer_boundary_layer_depth: &'static str,
    pub layer_boundary_layer_depth_legend: &'static str,
    pub summary_boundary_layer_depth: &'static str,
    pub summary_boundary_layer_top: &'static str,
    pub help_layer_boundary_layer_depth: &'static str,

    pub layer_surface_wind: &'static str,
    pub layer_surface_wind_legend: &'static str,
    pub help_layer_surface_wind: &'static str,

    pub layer_wind_2000m: &'static str,
    pub layer_wind_2000m_legend: &'static str,
    pub help_layer_wind_2000m: &'static str,

    pub summary_wind_speed: &'static str,
    pub summary_wind_direction: &'static str,

    pub layer_rain: &'static str,
    pub layer_rain_legend: &'static str,
    pub summary_rain: &'static str,
    pub help_layer_rain: &'static str,

    pub layer_surface_temperature: &'static str,
    pub layer_surface_temperature_legend: &'static str,
    pub summary_temperature: &'static str,
    pub summary_dew_point: &'static str,
    pub help_layer_surface_temperature: &'static str,

    pub layer_cloud_cover: &'static str,
    pub layer_cloud_cover_legend: &'static str,
    pub summary_cloud_cover: &'static str,
    pub help_layer_cloud_cover: &'static str,
}

pub static EN: Messages = Messages {
    layer_cape: "CAPE",
    layer_cape_legend: "CAPE (J/kg)",
    summary_cape: "CAPE",
    help_layer_cape: "Convective available potential energy. High values mean strong \
        instability: expect powerful thermals, cumulus overdevelopment and possibly \
        thunderstorms.",

    layer_thermal_velocity: "Thermal velocity",
    layer_thermal_velocity_legend: "Thermal updraft velocity (m/s)",
    summary_thermal_velocity: "Thermal velocity",
    help_layer_thermal_velocity: "Estimated average updraft velocity of thermals within the \
        boundary layer, not accounting for the glider sink rate.",

    layer_boundary_layer_depth: "Boundary layer depth",
    layer_boundary_layer_depth_legend: "Boundary layer depth above ground (m)",
    summary_boundary_layer_depth: "Boundary layer depth",
    summary_boundary_layer_top: "Boundary layer top",
    help_layer_boundary_layer_depth: "Depth of the turbulent layer above the ground. Thermals \
        usually climb up to the top of the boundary layer.",

    layer_surface_wind: "Surface wind",
    layer_surface_wind_legend: "Wind speed 10 m above ground (km/h)",
    help_layer_surface_wind: "Wind speed and direction 10 m above the ground, relevant for \
        take-off and landing.",

    layer_wind_2000m: "Wind at 2000 m",
    layer_wind_2000m_legend: "Wind speed at 2000 m AMSL (km/h)",
    help_layer_wind_2000m: "Wind speed and direction around 2000 m above mean sea level \
        (800 hPa).",

    summary_wind_speed: "Wind speed",
    summary_wind_direction: "Wind direction",

    layer_rain: "Rain",
    layer_rain_legend: "Total rain (mm)",
    summary_rain: "Rain",
    help_layer_rain: "Accumulated rain since the previous forecast step.",

    layer_surface_temperature: "Temperature",
    layer_surface_temperature_legend: "Temperature 2 m above ground (°C)",
    summary_temperature: "Temperature",
    summary_dew_point: "Dew point",
    help_layer_surface_temperature: "Air temperature 2 m above the ground. The spread with \
        the dew point hints at the cumulus cloud base.",

    layer_cloud_cover: "Cloud cover",
    layer_cloud_cover_legend: "Total cloud cover (%)",
    summary_cloud_cover: "Cloud cover",
    help_layer_cloud_cover: "Fraction of the sky covered by clouds at any altitude.",
};

pub static FR: Messages = Messages {
    layer_cape: "CAPE",
    layer_cape_legend: "CAPE (J/kg)",
    summary_cape: "CAPE",
    help_layer_cape: "Énergie potentielle de convection disponible. Des valeurs élevées \
        indiquent une forte instabilité : thermiques puissants, surdéveloppements et \
        orages possibles.",

    layer_thermal_velocity: "Vitesse des thermiques",
    layer_thermal_velocity_legend: "Vitesse ascensionnelle des thermiques (m/s)",
    summary_thermal_velocity: "Vitesse des thermiques",
    help_layer_thermal_velocity: "Vitesse ascensionnelle moyenne estimée des thermiques dans \
        la couche limite, sans tenir compte du taux de chute de l'aile.",

    layer_boundary_layer_depth: "Épaisseur de la couche limite",
    layer_boundary_layer_depth_legend: "Épaisseur de la couche limite au-dessus du sol (m)",
    summary_boundary_layer_depth: "Épaisseur de la couche limite",
    summary_boundary_layer_top: "Sommet de la couche limite",
    help_layer_boundary_layer_depth: "Épaisseur de la couche turbulente au-dessus du sol. \
        Les thermiques montent généralement jusqu'au sommet de la couche limite.",

    layer_surface_wind: "Vent au sol",
    layer_surface_wind_legend: "Vitesse du vent à 10 m du sol (km/h)",
    help_layer_surface_wind: "Vitesse et direction du vent à 10 m du sol, utiles pour le \
        décollage et l'atterrissage.",

    layer_wind_2000m: "Vent à 2000 m",
    layer_wind_2000m_legend: "Vitesse du vent à 2000 m d'altitude (km/h)",
    help_layer_wind_2000m: "Vitesse et direction du vent vers 2000 m d'altitude (800 hPa).",

    summary_wind_speed: "Vitesse du vent",
    summary_wind_direction: "Direction du vent",

    layer_rain: "Pluie",
    layer_rain_legend: "Pluie totale (mm)",
    summary_rain: "Pluie",
    help_layer_rain: "Cumul de pluie depuis l'échéance précédente.",

    layer_surface_temperature: "Température",
    layer_surface_temperature_legend: "Température à 2 m du sol (°C)",
    summary_temperature: "Température",
    summary_dew_point: "Point de rosée",
    help_layer_surface_temperature: "Température de l'air à 2 m du sol. L'écart avec le \
        point de rosée donne une idée de la base des cumulus.",

    layer_cloud_cover: "Nébulosité",
    layer_cloud_cover_legend: "Couverture nuageuse totale (%)",
    summary_cloud_cover: "Nébulosité",
    help_layer_cloud_cover: "Part du ciel couverte par les nuages, toutes altitudes \
        confondues.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Lang::from_tag("fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("FR-fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_tag("en_GB.UTF-8"), Some(Lang::En));
        assert_eq!(Lang::from_tag("de"), None);
        assert_eq!(Lang::from_tag(""), None);
        assert!("it".parse::<Lang>().is_err());
    }

    #[test]
    fn test_switchable_locale() {
        let locale = SwitchableLocale::new(Lang::En);
        assert_eq!(locale.messages().layer_rain, "Rain");
        locale.set(Lang::Fr);
        assert_eq!(locale.get(), Lang::Fr);
        assert_eq!(locale.messages().layer_rain, "Pluie");
    }
}
