use log::debug;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};


#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, EnumIter, EnumString, IntoStaticStr, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    // Add the marker class to both squares; the stylesheet decides how it looks.
    #[default]
    Outline,
    // Put one translucent rectangle over both squares.
    Overlay,
}

impl DisplayMode {
    pub fn name(self) -> &'static str { self.into() }

    // Anything that is not exactly "overlay" draws an outline, including a missing value. Unknown
    // names are tolerated because callers historically passed free-form style strings.
    pub fn from_name_lenient(name: Option<&str>) -> Self {
        match name {
            None | Some("") => DisplayMode::default(),
            Some(name) => name.parse().unwrap_or_else(|_| {
                debug!("Unknown display mode {name:?}, falling back to outline");
                DisplayMode::Outline
            }),
        }
    }
}


#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        for mode in DisplayMode::iter() {
            assert_eq!(DisplayMode::from_name_lenient(Some(mode.name())), mode);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_outline() {
        assert_eq!(DisplayMode::from_name_lenient(None), DisplayMode::Outline);
        assert_eq!(DisplayMode::from_name_lenient(Some("")), DisplayMode::Outline);
        assert_eq!(DisplayMode::from_name_lenient(Some("Overlay")), DisplayMode::Outline);
        assert_eq!(DisplayMode::from_name_lenient(Some("overlay ")), DisplayMode::Outline);
        assert_eq!(DisplayMode::from_name_lenient(Some("arrow")), DisplayMode::Outline);
    }
}
