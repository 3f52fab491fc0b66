use crate::{Color, Direction};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(test)]
use test_strategy::Arbitrary;

/// A named set of directions a man may act along.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum DirectionSet {
    /// Forward and the two laterals.
    #[display(fmt = "orthogonal")]
    Orthogonal,

    /// [`Orthogonal`][DirectionSet::Orthogonal] plus the two forward diagonals.
    #[display(fmt = "extended")]
    Extended,
}

impl DirectionSet {
    /// The directions in this set from the given color's point of view.
    #[inline]
    pub fn directions(&self, c: Color) -> &'static [Direction] {
        match self {
            DirectionSet::Orthogonal => Direction::orthogonal(c),
            DirectionSet::Extended => Direction::extended(c),
        }
    }
}

/// The rule options that distinguish the known rulesets.
///
/// Every observed variant is a point in this option space; the named presets
/// [`clasica`][RulesPolicy::clasica] and [`frontera`][RulesPolicy::frontera]
/// pick out the two ends of it.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "rules", default)]
pub struct RulesPolicy {
    /// The directions a man may step along.
    pub man_move_dirs: DirectionSet,

    /// The directions a man may capture along.
    pub man_capture_dirs: DirectionSet,

    /// Whether a capturing sovereign may land on any empty square past its
    /// victim, rather than on the square immediately past it.
    pub sovereign_slide_capture: bool,

    /// Ley de Cantidad: when any capture exists, only first steps of chains
    /// of board-wide maximal length are legal.
    pub mandatory_maximum_capture: bool,

    /// A man on a band file away from its origin row may only capture
    /// straight forward.
    pub edge_band_restriction: bool,

    /// Landing on a band file by a diagonal capture forces the next jump of
    /// the chain to be straight forward.
    pub band_braking: bool,

    /// Captured pieces are cleared from the board and tallied only once the
    /// turn ends, though they stop blocking and being targetable at once.
    pub deferred_extraction: bool,

    /// A capture that crowns the man ends the chain and the turn at once.
    pub promotion_ends_chain: bool,
}

impl RulesPolicy {
    /// The modern ruleset: five-direction man captures, sliding sovereign
    /// captures, Ley de Cantidad, both band rules, immediate extraction, and
    /// crowning that cuts the chain short.
    pub fn clasica() -> Self {
        RulesPolicy {
            man_move_dirs: DirectionSet::Orthogonal,
            man_capture_dirs: DirectionSet::Extended,
            sovereign_slide_capture: true,
            mandatory_maximum_capture: true,
            edge_band_restriction: true,
            band_braking: true,
            deferred_extraction: false,
            promotion_ends_chain: true,
        }
    }

    /// The permissive ruleset of the oldest engine: captures are never
    /// compulsory, the bands carry no restrictions, and crowning does not
    /// cut a chain short.
    pub fn frontera() -> Self {
        RulesPolicy {
            man_move_dirs: DirectionSet::Orthogonal,
            man_capture_dirs: DirectionSet::Extended,
            sovereign_slide_capture: true,
            mandatory_maximum_capture: false,
            edge_band_restriction: false,
            band_braking: false,
            deferred_extraction: false,
            promotion_ends_chain: false,
        }
    }
}

impl Default for RulesPolicy {
    fn default() -> Self {
        Self::clasica()
    }
}

/// The reason why parsing [`RulesPolicy`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse the rules configuration")]
pub struct ParsePolicyError(ron::de::SpannedError);

impl FromStr for RulesPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn direction_sets_resolve_per_color(c: Color) {
        assert_eq!(
            DirectionSet::Orthogonal.directions(c),
            Direction::orthogonal(c)
        );

        assert_eq!(DirectionSet::Extended.directions(c), Direction::extended(c));
    }

    #[proptest]
    fn policy_deserializes_missing_fields_to_default() {
        assert_eq!("rules()".parse(), Ok(RulesPolicy::default()));

        assert_eq!(
            "rules(mandatory_maximum_capture:false)".parse(),
            Ok(RulesPolicy {
                mandatory_maximum_capture: false,
                ..RulesPolicy::default()
            })
        );
    }

    #[proptest]
    fn parsing_printed_policy_is_an_identity(p: RulesPolicy) {
        assert_eq!(p.to_string().parse(), Ok(p));
    }

    #[proptest]
    fn parsing_policy_fails_for_unknown_fields() {
        assert!("rules(cantidad:true)".parse::<RulesPolicy>().is_err());
    }

    #[proptest]
    fn the_default_policy_is_clasica() {
        assert_eq!(RulesPolicy::default(), RulesPolicy::clasica());
    }

    #[proptest]
    fn frontera_makes_no_capture_compulsory_and_frees_the_bands() {
        let p = RulesPolicy::frontera();

        assert!(!p.mandatory_maximum_capture);
        assert!(!p.edge_band_restriction);
        assert!(!p.band_braking);
        assert!(!p.promotion_ends_chain);
    }
}
