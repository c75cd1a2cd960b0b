use std::path::PathBuf;

use crate::environment::encoding::EncodedImage;
use crate::environment::model::{Post, PostId};

use super::state::DraftField;

#[derive(Clone, Debug)]
pub enum FormAction {
    /// A single field edit. Last write wins.
    UpdateField(DraftField, String),
    /// Hand a picked file to the encoding collaborator.
    AttachFile(PathBuf),
    /// Completion callback of the encoding collaborator.
    FileEncoded(Result<EncodedImage, String>),
    /// The parent changed which post is being edited, if any.
    SetEditTarget(Option<(PostId, Post)>),
    Submit,
    ClearError,
}

/// Messages the form sends up to its parent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormDelegate {
    /// A submit went through; no post is being edited any more.
    EditTargetCleared,
}
