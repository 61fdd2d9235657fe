use serde::{Deserialize, Serialize};

/// Identity and artwork for one kind of card. Two instances of the same
/// descriptor form a pair; `name` is the match key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardDescriptor {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardState {
    FaceDown,
    FaceUp,
    Matched,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardInstance {
    pub descriptor: CardDescriptor,
    pub state: CardState,
}

impl CardInstance {
    pub fn face_down(descriptor: CardDescriptor) -> Self {
        Self {
            descriptor,
            state: CardState::FaceDown,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn is_face_down(&self) -> bool {
        self.state == CardState::FaceDown
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Face-up or matched; either way the card is showing its front.
    pub fn is_revealed(&self) -> bool {
        !self.is_face_down()
    }
}
