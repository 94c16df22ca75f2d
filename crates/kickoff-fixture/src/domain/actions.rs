//! The action catalogue.
//!
//! Each [`ActionKind`] carries a fixed point value. The catalogue is the
//! ordered list of kinds handed out to a fixture's roster; kinds repeat on
//! purpose so that common actions are paired more often.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One kind of in-match action a player can be predicted to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    TakesAShot,
    TakesAShotOnTarget,
    ScoresAGoal,
    AssistsAGoal,
    MakesASave,
    PlaysAKeyPass,
    MakesATackle,
    BlocksAShot,
    InterceptsAPass,
    DribblesPastAPlayer,
    CommitsAFoul,
    DrawsAFoul,
    ReceivesAYellowCard,
    ReceivesARedCard,
    WinsOrScoresAPenalty,
    ConcedesAPenalty,
}

impl ActionKind {
    /// Every action kind, in declaration order.
    pub const ALL: [ActionKind; 16] = [
        Self::TakesAShot,
        Self::TakesAShotOnTarget,
        Self::ScoresAGoal,
        Self::AssistsAGoal,
        Self::MakesASave,
        Self::PlaysAKeyPass,
        Self::MakesATackle,
        Self::BlocksAShot,
        Self::InterceptsAPass,
        Self::DribblesPastAPlayer,
        Self::CommitsAFoul,
        Self::DrawsAFoul,
        Self::ReceivesAYellowCard,
        Self::ReceivesARedCard,
        Self::WinsOrScoresAPenalty,
        Self::ConcedesAPenalty,
    ];

    /// Human-readable phrase appended to a player's name to form an event name.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::TakesAShot => "takes a shot",
            Self::TakesAShotOnTarget => "takes a shot on target",
            Self::ScoresAGoal => "scores a goal",
            Self::AssistsAGoal => "assists a goal",
            Self::MakesASave => "makes a save",
            Self::PlaysAKeyPass => "plays a key pass",
            Self::MakesATackle => "makes a tackle",
            Self::BlocksAShot => "blocks a shot",
            Self::InterceptsAPass => "intercepts a pass",
            Self::DribblesPastAPlayer => "dribbles past a player",
            Self::CommitsAFoul => "commits a foul",
            Self::DrawsAFoul => "draws a foul",
            Self::ReceivesAYellowCard => "receives a yellow card",
            Self::ReceivesARedCard => "receives a red card",
            Self::WinsOrScoresAPenalty => "wins or scores a penalty",
            Self::ConcedesAPenalty => "concedes a penalty",
        }
    }

    /// Points awarded when an event of this kind is selected and occurs.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::MakesASave => 1,
            Self::MakesATackle | Self::CommitsAFoul => 2,
            Self::TakesAShot
            | Self::PlaysAKeyPass
            | Self::BlocksAShot
            | Self::InterceptsAPass
            | Self::DrawsAFoul
            | Self::ReceivesAYellowCard => 3,
            Self::TakesAShotOnTarget | Self::DribblesPastAPlayer => 4,
            Self::AssistsAGoal | Self::WinsOrScoresAPenalty => 6,
            Self::ScoresAGoal | Self::ReceivesARedCard | Self::ConcedesAPenalty => 8,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Ordered sequence of action kinds used for pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionCatalogue(Vec<ActionKind>);

impl ActionCatalogue {
    /// Creates a catalogue from an explicit ordering. Duplicates are kept.
    #[must_use]
    pub fn new(actions: Vec<ActionKind>) -> Self {
        Self(actions)
    }

    /// The 22-entry catalogue: the first eleven entries line up with the
    /// home starting XI, the next eleven with the away XI.
    #[must_use]
    pub fn standard() -> Self {
        use ActionKind::{
            AssistsAGoal, BlocksAShot, CommitsAFoul, ConcedesAPenalty, DrawsAFoul,
            DribblesPastAPlayer, InterceptsAPass, MakesASave, MakesATackle, PlaysAKeyPass,
            ReceivesARedCard, ReceivesAYellowCard, ScoresAGoal, TakesAShot, TakesAShotOnTarget,
            WinsOrScoresAPenalty,
        };

        Self(vec![
            // home
            MakesASave,
            ConcedesAPenalty,
            ReceivesARedCard,
            CommitsAFoul,
            MakesATackle,
            InterceptsAPass,
            PlaysAKeyPass,
            MakesATackle,
            BlocksAShot,
            ReceivesAYellowCard,
            TakesAShot,
            // away
            MakesASave,
            ConcedesAPenalty,
            BlocksAShot,
            ReceivesAYellowCard,
            AssistsAGoal,
            DrawsAFoul,
            ScoresAGoal,
            WinsOrScoresAPenalty,
            MakesATackle,
            DribblesPastAPlayer,
            TakesAShotOnTarget,
        ])
    }

    /// Returns the ordered action kinds.
    #[must_use]
    pub fn actions(&self) -> &[ActionKind] {
        &self.0
    }

    /// Number of entries, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the catalogue has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ActionCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}
