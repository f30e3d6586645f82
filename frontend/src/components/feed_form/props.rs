//! Defines the properties for the `FeedFormComponent`.

use common::model::group::Group;
use yew::prelude::*;

/// Properties for the `FeedFormComponent`.
///
/// When `group` is provided the form edits that existing group; otherwise it
/// starts from the defaults with a freshly generated UUID.
#[derive(Properties, PartialEq, Clone)]
pub struct FeedFormProps {
    #[prop_or_default]
    pub group: Option<Group>,
}
