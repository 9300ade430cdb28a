//! The report record consumed by the renderer.
//!
//! A [`ReportData`] is produced by the astrology service and handed over whole.
//! The renderer reads it and never changes it.
//!
//! # Shape contract
//!
//! `four_pillars` holds exactly four codes in [`Pillar::ALL`] order and
//! `five_elements` exactly five scores in [`Element::ALL`] order. Positions
//! carry the meaning; the record has no labels of its own.
//!
//! The renderer does not check the contract. A record with the wrong shape
//! still renders: missing positions show a placeholder and surplus positions
//! are ignored. This is a legacy behavior, not something to rely on. Call
//! [`ReportData::validate`] at the boundary where records enter the process.

use serde::{Deserialize, Serialize};

use crate::error::{MingpanError, ValidationError};

/// One of the four pillars of a birth chart, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pillar {
    Year,
    Month,
    Day,
    Hour,
}

impl Pillar {
    /// All pillars in the order they appear in `four_pillars`.
    pub const ALL: [Pillar; 4] = [Pillar::Year, Pillar::Month, Pillar::Day, Pillar::Hour];

    /// Returns the position of this pillar in `four_pillars`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the label printed next to the pillar code.
    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// One of the five elements, in score order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    /// All elements in the order they appear in `five_elements`.
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    /// Returns the position of this element in `five_elements`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-character label printed before the score.
    pub fn label(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }
}

/// A pre-computed fortune report.
///
/// Field names follow the camelCase keys of the JSON record produced by the
/// astrology service.
///
/// # Examples
///
/// ```
/// use mingpan::report::{Pillar, ReportData};
///
/// let json = r#"{
///     "gender": "男",
///     "trueSolarTime": "农历: 1996年9月3日 7:25",
///     "lifePalace": "甲午",
///     "fetalOrigin": "甲午",
///     "fourPillars": ["丙子", "戊戌", "甲申", "戊辰"],
///     "fiveElements": [9, 12, 11, 8, 5],
///     "patternAnalysis": "食伤生财",
///     "lifeInterpretation": "一句话总结命理"
/// }"#;
///
/// let report = ReportData::from_json(json).unwrap();
/// assert!(report.validate().is_ok());
/// assert_eq!(report.pillar(Pillar::Hour), Some("戊辰"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub gender: String,
    pub true_solar_time: String,
    pub life_palace: String,
    pub fetal_origin: String,
    pub four_pillars: Vec<String>,
    pub five_elements: Vec<f64>,
    pub pattern_analysis: String,
    pub life_interpretation: String,
}

impl ReportData {
    /// Parses a report record from its JSON form.
    ///
    /// Parsing does not validate the shape contract; call
    /// [`ReportData::validate`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MingpanError::Json`] if the text is not a well-formed record.
    pub fn from_json(json: &str) -> Result<Self, MingpanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the shape contract of the record.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a pillar count other than four, a
    /// score count other than five, or a score that is NaN or infinite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.four_pillars.len() != Pillar::ALL.len() {
            return Err(ValidationError::FourPillarsLength {
                found: self.four_pillars.len(),
            });
        }

        if self.five_elements.len() != Element::ALL.len() {
            return Err(ValidationError::FiveElementsLength {
                found: self.five_elements.len(),
            });
        }

        if let Some(index) = self.five_elements.iter().position(|s| !s.is_finite()) {
            return Err(ValidationError::NonFiniteScore { index });
        }

        Ok(())
    }

    /// Returns the code for `pillar`, or `None` if the record is too short.
    pub fn pillar(&self, pillar: Pillar) -> Option<&str> {
        self.four_pillars.get(pillar.index()).map(String::as_str)
    }

    /// Returns the score for `element`, or `None` if the record is too short.
    pub fn score(&self, element: Element) -> Option<f64> {
        self.five_elements.get(element.index()).copied()
    }
}
