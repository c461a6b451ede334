pub mod card;
pub mod eplayerindex;
pub mod hand;
pub mod moves;
pub mod score;
pub mod talon;
pub mod trick;

pub use self::{card::*, eplayerindex::*, hand::*, moves::*, score::*, talon::*, trick::*};
