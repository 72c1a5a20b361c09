//! Header display state.
//!
//! The header rotates between showing the current, arriving and next
//! station, each in every enabled language. The display layer passes the
//! state around as a tag such as `NEXT_EN` (Japanese has no suffix); it is
//! decoded once here into a [`HeaderTag`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DomainError, HeaderLang};

/// What the header is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeaderState {
    #[default]
    Current,
    Arriving,
    Next,
}

impl HeaderState {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderState::Current => "CURRENT",
            HeaderState::Arriving => "ARRIVING",
            HeaderState::Next => "NEXT",
        }
    }

    fn from_tag(s: &str) -> Option<Self> {
        match s {
            "CURRENT" => Some(HeaderState::Current),
            "ARRIVING" => Some(HeaderState::Arriving),
            "NEXT" => Some(HeaderState::Next),
            _ => None,
        }
    }
}

/// A decoded header tag. The default is `CURRENT` in Japanese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HeaderTag {
    pub state: HeaderState,
    pub lang: HeaderLang,
}

impl HeaderTag {
    pub fn new(state: HeaderState, lang: HeaderLang) -> Self {
        Self { state, lang }
    }

    /// Parse a tag, rejecting unknown states.
    ///
    /// An unknown or missing language suffix is Japanese.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_position::domain::HeaderLang;
    /// use train_position::resolver::{HeaderState, HeaderTag};
    ///
    /// let tag = HeaderTag::parse("NEXT_EN").unwrap();
    /// assert_eq!(tag, HeaderTag::new(HeaderState::Next, HeaderLang::En));
    ///
    /// let tag = HeaderTag::parse("ARRIVING").unwrap();
    /// assert_eq!(tag.lang, HeaderLang::Ja);
    ///
    /// assert!(HeaderTag::parse("LEAVING_EN").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (state, suffix) = match s.split_once('_') {
            Some((state, suffix)) => (state, Some(suffix)),
            None => (s, None),
        };
        let state = HeaderState::from_tag(state)
            .ok_or_else(|| DomainError::InvalidHeaderState(s.to_string()))?;
        Ok(Self::new(state, HeaderLang::from_suffix(suffix)))
    }

    /// Parse a tag, treating anything unknown as the initial state.
    pub fn decode(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            debug!(error = %e, "unknown header tag, using initial state");
            Self::default()
        })
    }

    /// The tag to show after this one.
    ///
    /// The state follows the train: `CURRENT` while arrived, `ARRIVING`
    /// while approaching, otherwise `NEXT` if there is a next station. A
    /// state change starts over at the first enabled language; otherwise
    /// the language rotates.
    pub fn advance(
        self,
        arrived: bool,
        approaching: bool,
        has_next: bool,
        enabled: &[HeaderLang],
    ) -> Self {
        let enabled = if enabled.is_empty() {
            &[HeaderLang::Ja][..]
        } else {
            enabled
        };

        let state = if arrived {
            HeaderState::Current
        } else if approaching {
            HeaderState::Arriving
        } else if has_next {
            HeaderState::Next
        } else {
            HeaderState::Current
        };

        if state != self.state {
            return Self::new(state, enabled[0]);
        }

        let lang = enabled
            .iter()
            .position(|l| *l == self.lang)
            .map_or(enabled[0], |i| enabled[(i + 1) % enabled.len()]);
        Self::new(state, lang)
    }
}

impl fmt::Display for HeaderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lang.suffix() {
            Some(suffix) => write!(f, "{}_{}", self.state.as_str(), suffix),
            None => f.write_str(self.state.as_str()),
        }
    }
}

impl FromStr for HeaderTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_tag() -> impl Strategy<Value = HeaderTag> {
        (0usize..3, 0usize..5).prop_map(|(s, l)| {
            let state = [HeaderState::Current, HeaderState::Arriving, HeaderState::Next][s];
            HeaderTag::new(state, HeaderLang::ALL[l])
        })
    }

    proptest! {
        /// Encoding then decoding returns the same tag
        #[test]
        fn encode_decode(tag in any_tag()) {
            prop_assert_eq!(HeaderTag::decode(&tag.to_string()), tag);
        }

        /// Decoding never fails
        #[test]
        fn decode_total(s in ".{0,16}") {
            let _ = HeaderTag::decode(&s);
        }

        /// The rotated language is always enabled
        #[test]
        fn advance_stays_in_enabled(
            tag in any_tag(),
            arrived in any::<bool>(),
            approaching in any::<bool>(),
            has_next in any::<bool>(),
            mask in 1u8..32,
        ) {
            let enabled: Vec<HeaderLang> = HeaderLang::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, l)| l)
                .collect();
            let next = tag.advance(arrived, approaching, has_next, &enabled);
            prop_assert!(enabled.contains(&next.lang));
        }
    }
}
