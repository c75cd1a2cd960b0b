use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::environment::encoding::EncodedImage;
use crate::environment::model::{Post, PostId, PostRecord};

/// Minimum number of whitespace-separated words for a message to count
/// as a complete description.
pub const MIN_MESSAGE_WORDS: usize = 5;

#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq)]
pub enum DraftField {
    Creator,
    Title,
    Message,
    Tags,
}

/// The in-progress record the form owns while it is open. Tags stay in
/// their raw comma-separated form until submit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub creator: String,
    pub title: String,
    pub message: String,
    pub tags: String,
    pub selected_file: Option<EncodedImage>,
}

impl Draft {
    /// Seed the draft from a stored post when entering edit mode.
    pub fn from_post(post: &Post) -> Self {
        Self {
            creator: post.creator.clone(),
            title: post.title.clone(),
            message: post.message.clone(),
            tags: post.tags.iter().join(","),
            selected_file: post.image.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Creator => self.creator = value,
            DraftField::Title => self.title = value,
            DraftField::Message => self.message = value,
            DraftField::Tags => self.tags = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Creator => &self.creator,
            DraftField::Title => &self.title,
            DraftField::Message => &self.message,
            DraftField::Tags => &self.tags,
        }
    }

    /// Normalize into the submit payload. The only place tags are split.
    pub fn to_record(&self) -> PostRecord {
        PostRecord {
            creator: self.creator.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            tags: parse_tags(&self.tags),
            image: self.selected_file.clone(),
        }
    }
}

/// Split raw tag input on commas, trimming each token and dropping
/// empties. Order and duplicates survive.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// (is valid, word count, required minimum) — the shape a UI layer
/// renders a counter from.
pub fn validate_message(message: &str) -> (bool, usize, usize) {
    let words = message.split_whitespace().count();
    (words >= MIN_MESSAGE_WORDS, words, MIN_MESSAGE_WORDS)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    pub draft: Draft,
    pub edit_target: Option<PostId>,
    pub validity: (bool, usize, usize),
    pub error_message: Option<String>,
}

impl State {
    pub fn new() -> Self {
        Self {
            draft: Default::default(),
            edit_target: Default::default(),
            validity: validate_message(""),
            error_message: Default::default(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The dispatch decision, computed once per submit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitIntent {
    Create,
    Update(PostId),
}

impl SubmitIntent {
    /// A zero id is the inherited "new post" sentinel, not a real target.
    pub fn from_target(target: Option<PostId>) -> Self {
        match target {
            Some(id) if id != PostId::NONE => SubmitIntent::Update(id),
            _ => SubmitIntent::Create,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn tag_parsing_drops_empty_tokens_and_trims() {
        assert_eq!(parse_tags(" rust, , redux ,ui,,"), ["rust", "redux", "ui"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn tag_parsing_preserves_order_and_duplicates() {
        assert_eq!(parse_tags("b,a,b"), ["b", "a", "b"]);
    }

    #[test]
    fn rejoined_tags_reparse_to_the_same_sequence() {
        let parsed = parse_tags("  one ,two,, three ");
        let rejoined = parsed.iter().join(",");
        assert_eq!(parse_tags(&rejoined), parsed);
    }

    #[test]
    fn the_five_word_rule() {
        assert!(!validate_message("Too short").0);
        assert!(validate_message("This description has more than five words").0);
        assert_eq!(validate_message("Too short"), (false, 2, 5));
        assert_eq!(validate_message("one two three four five"), (true, 5, 5));
    }

    #[test]
    fn a_zero_target_means_create() {
        assert_eq!(SubmitIntent::from_target(None), SubmitIntent::Create);
        assert_eq!(
            SubmitIntent::from_target(Some(PostId::NONE)),
            SubmitIntent::Create
        );
        assert_eq!(
            SubmitIntent::from_target(Some(PostId(3))),
            SubmitIntent::Update(PostId(3))
        );
    }

    #[test]
    fn seeding_from_a_post_joins_the_tags_back() {
        let post = Post {
            id: PostId(1),
            creator: "A".to_string(),
            title: "B".to_string(),
            message: "C D E F G".to_string(),
            tags: vec!["x".to_string(), "y".to_string()],
            image: None,
            created_at: Utc::now(),
        };
        let draft = Draft::from_post(&post);
        assert_eq!(draft.tags, "x,y");
        assert_eq!(draft.message, "C D E F G");
    }
}
